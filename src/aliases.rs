//! Built-in alias tables for settings panels and applications.
//!
//! Keys are stored lowercase; lookups ignore case and surrounding whitespace.

use std::collections::BTreeMap;

use crate::model::IntentKind;
use crate::platform::OperatingSystem;

const WINDOWS_SETTINGS: &[(&str, &str)] = &[
    ("about", "ms-settings:about"),
    ("apps", "ms-settings:appsfeatures"),
    ("battery", "ms-settings:batterysaver"),
    ("bluetooth", "ms-settings:bluetooth"),
    ("datetime", "ms-settings:dateandtime"),
    ("display", "ms-settings:display"),
    ("keyboard", "ms-settings:typing"),
    ("language", "ms-settings:regionlanguage"),
    ("mouse", "ms-settings:mousetouchpad"),
    ("network", "ms-settings:network-status"),
    ("notifications", "ms-settings:notifications"),
    ("personalization", "ms-settings:personalization"),
    ("power", "ms-settings:powersleep"),
    ("printers", "ms-settings:printers"),
    ("privacy", "ms-settings:privacy"),
    ("sound", "ms-settings:sound"),
    ("storage", "ms-settings:storagesense"),
    ("update", "ms-settings:windowsupdate"),
    ("vpn", "ms-settings:network-vpn"),
    ("wifi", "ms-settings:network-wifi"),
];

const MACOS_SETTINGS: &[(&str, &str)] = &[
    ("battery", "x-apple.systempreferences:com.apple.Battery-Settings.extension"),
    ("bluetooth", "x-apple.systempreferences:com.apple.BluetoothSettings"),
    ("datetime", "x-apple.systempreferences:com.apple.Date-Time-Settings.extension"),
    ("display", "x-apple.systempreferences:com.apple.Displays-Settings.extension"),
    ("keyboard", "x-apple.systempreferences:com.apple.Keyboard-Settings.extension"),
    ("language", "x-apple.systempreferences:com.apple.Localization-Settings.extension"),
    ("mouse", "x-apple.systempreferences:com.apple.Mouse-Settings.extension"),
    ("network", "x-apple.systempreferences:com.apple.Network-Settings.extension"),
    ("notifications", "x-apple.systempreferences:com.apple.Notifications-Settings.extension"),
    ("privacy", "x-apple.systempreferences:com.apple.settings.PrivacySecurity.extension"),
    ("sound", "x-apple.systempreferences:com.apple.Sound-Settings.extension"),
    ("trackpad", "x-apple.systempreferences:com.apple.Trackpad-Settings.extension"),
    ("update", "x-apple.systempreferences:com.apple.Software-Update-Settings.extension"),
    ("vpn", "x-apple.systempreferences:com.apple.NetworkExtensionSettingsUI.NESettingsUIExtension"),
    ("wifi", "x-apple.systempreferences:com.apple.wifi-settings-extension"),
];

// gnome-control-center panel names
const LINUX_SETTINGS: &[(&str, &str)] = &[
    ("about", "info-overview"),
    ("battery", "power"),
    ("bluetooth", "bluetooth"),
    ("datetime", "datetime"),
    ("display", "display"),
    ("keyboard", "keyboard"),
    ("language", "region"),
    ("mouse", "mouse"),
    ("network", "network"),
    ("notifications", "notifications"),
    ("power", "power"),
    ("printers", "printers"),
    ("privacy", "privacy"),
    ("sound", "sound"),
    ("wifi", "wifi"),
];

const WINDOWS_APPS: &[(&str, &str)] = &[
    ("calc", "calc.exe"),
    ("calculator", "calc.exe"),
    ("cmd", "cmd.exe"),
    ("explorer", "explorer.exe"),
    ("files", "explorer.exe"),
    ("notepad", "notepad.exe"),
    ("paint", "mspaint.exe"),
    ("powershell", "powershell.exe"),
    ("settings", "ms-settings:"),
    ("taskmgr", "taskmgr.exe"),
    ("terminal", "wt.exe"),
];

const MACOS_APPS: &[(&str, &str)] = &[
    ("activity", "Activity Monitor"),
    ("browser", "Safari"),
    ("calc", "Calculator"),
    ("calculator", "Calculator"),
    ("editor", "TextEdit"),
    ("files", "Finder"),
    ("finder", "Finder"),
    ("mail", "Mail"),
    ("music", "Music"),
    ("notes", "Notes"),
    ("safari", "Safari"),
    ("settings", "System Settings"),
    ("terminal", "Terminal"),
];

const LINUX_APPS: &[(&str, &str)] = &[
    ("browser", "firefox"),
    ("calc", "gnome-calculator"),
    ("calculator", "gnome-calculator"),
    ("editor", "gedit"),
    ("files", "nautilus"),
    ("monitor", "gnome-system-monitor"),
    ("settings", "gnome-control-center"),
    ("terminal", "x-terminal-emulator"),
];

fn builtin_entries(
    os: OperatingSystem,
    kind: IntentKind,
) -> &'static [(&'static str, &'static str)] {
    match (kind, os) {
        (IntentKind::SystemSetting, OperatingSystem::Windows) => WINDOWS_SETTINGS,
        (IntentKind::SystemSetting, OperatingSystem::MacOs) => MACOS_SETTINGS,
        (IntentKind::SystemSetting, OperatingSystem::Linux) => LINUX_SETTINGS,
        (IntentKind::LaunchApp, OperatingSystem::Windows) => WINDOWS_APPS,
        (IntentKind::LaunchApp, OperatingSystem::MacOs) => MACOS_APPS,
        (IntentKind::LaunchApp, OperatingSystem::Linux) => LINUX_APPS,
        (IntentKind::WebSearch | IntentKind::FileSearch, _) => &[],
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn builtin(os: OperatingSystem, kind: IntentKind) -> Self {
        let entries = builtin_entries(os, kind)
            .iter()
            .map(|(alias, target)| (alias.to_string(), target.to_string()))
            .collect();
        Self { entries }
    }

    /// Merges user entries on top; a user entry replaces a built-in one.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (alias, target) in overrides {
            let key = normalize(alias);
            let target = target.trim();
            if key.is_empty() || target.is_empty() {
                log::warn!("Ignoring empty alias entry {:?} -> {:?}", alias, target);
                continue;
            }
            if let Some(previous) = self.entries.insert(key, target.to_string()) {
                log::debug!("Alias {:?} overridden (was {:?})", alias, previous);
            }
        }
        self
    }

    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.entries.get(&normalize(alias)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn normalize(alias: &str) -> String {
    alias.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_OS: [OperatingSystem; 3] = [
        OperatingSystem::Windows,
        OperatingSystem::MacOs,
        OperatingSystem::Linux,
    ];

    #[test]
    fn lookup_ignores_case() {
        let table = AliasTable::builtin(OperatingSystem::Windows, IntentKind::SystemSetting);
        assert_eq!(table.resolve("wifi"), Some("ms-settings:network-wifi"));
        assert_eq!(table.resolve("WIFI"), Some("ms-settings:network-wifi"));
        assert_eq!(table.resolve(" WiFi "), Some("ms-settings:network-wifi"));
        assert_eq!(table.resolve("warp-drive"), None);
    }

    #[test]
    fn every_os_has_settings_and_apps() {
        for os in ALL_OS {
            assert!(!AliasTable::builtin(os, IntentKind::SystemSetting).is_empty());
            assert!(!AliasTable::builtin(os, IntentKind::LaunchApp).is_empty());
            assert!(AliasTable::builtin(os, IntentKind::WebSearch).is_empty());
            assert!(AliasTable::builtin(os, IntentKind::FileSearch).is_empty());
        }
    }

    #[test]
    fn builtin_keys_are_lowercase() {
        for os in ALL_OS {
            for kind in [IntentKind::SystemSetting, IntentKind::LaunchApp] {
                let raw = builtin_entries(os, kind);
                assert_eq!(AliasTable::builtin(os, kind).len(), raw.len());
                for (alias, _) in raw {
                    assert_eq!(*alias, alias.to_lowercase());
                }
            }
        }
    }

    #[test]
    fn overrides_replace_and_extend() {
        let mut overrides = BTreeMap::new();
        overrides.insert("Terminal".to_string(), "alacritty".to_string());
        overrides.insert("code".to_string(), " code ".to_string());
        overrides.insert("  ".to_string(), "ignored".to_string());

        let base = AliasTable::builtin(OperatingSystem::Linux, IntentKind::LaunchApp);
        let before = base.len();
        let table = base.with_overrides(&overrides);

        assert_eq!(table.resolve("terminal"), Some("alacritty"));
        assert_eq!(table.resolve("CODE"), Some("code"));
        assert_eq!(table.len(), before + 1);
    }
}
