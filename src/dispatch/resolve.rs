use std::fmt;
use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::QUERY_PLACEHOLDER;
use crate::error::DispatchError;
use crate::model::IntentKind;
use crate::utils::expand_home;

/// Everything except RFC 3986 unreserved characters is encoded.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const SETTINGS_EXTRA_CHARS: &str = ":._/-";

/// A fully resolved platform action, ready to hand to platform services.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    OpenUrl(String),
    RevealPath(PathBuf),
    SearchFiles(String),
    OpenSettings(String),
    LaunchProcess(String),
}

impl Action {
    pub fn target(&self) -> String {
        match self {
            Action::OpenUrl(url) => url.clone(),
            Action::RevealPath(path) => path.display().to_string(),
            Action::SearchFiles(term) => term.clone(),
            Action::OpenSettings(id) | Action::LaunchProcess(id) => id.clone(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::OpenUrl(url) => write!(f, "open {}", url),
            Action::RevealPath(path) => write!(f, "reveal {}", path.display()),
            Action::SearchFiles(term) => write!(f, "search files for {:?}", term),
            Action::OpenSettings(id) => write!(f, "open settings {}", id),
            Action::LaunchProcess(id) => write!(f, "launch {}", id),
        }
    }
}

pub fn search_url(template: &str, query: &str) -> String {
    let encoded = utf8_percent_encode(query, QUERY_COMPONENT).to_string();
    template.replace(QUERY_PLACEHOLDER, &encoded)
}

/// Existing paths are revealed; anything else becomes a search term.
pub fn file_action(argument: &str) -> Action {
    let path = expand_home(argument);
    if path.exists() {
        Action::RevealPath(path)
    } else {
        Action::SearchFiles(argument.to_string())
    }
}

pub fn check_no_control_chars(kind: IntentKind, value: &str) -> Result<(), DispatchError> {
    match value.chars().find(|c| c.is_control()) {
        Some(c) => Err(DispatchError::InvalidArgument {
            kind,
            reason: format!("contains control character {:?}", c),
        }),
        None => Ok(()),
    }
}

/// Launch identifiers are program names or absolute paths. A relative path
/// would depend on the working directory notch was started from.
pub fn check_launch_identifier(identifier: &str) -> Result<(), DispatchError> {
    check_no_control_chars(IntentKind::LaunchApp, identifier)?;
    let has_separator = identifier.contains(['/', '\\']);
    if has_separator && !Path::new(identifier).is_absolute() {
        return Err(DispatchError::InvalidArgument {
            kind: IntentKind::LaunchApp,
            reason: format!("{:?} is a relative path", identifier),
        });
    }
    Ok(())
}

/// Settings identifiers are URI-like tokens; anything else is refused before
/// reaching the platform.
pub fn check_settings_identifier(identifier: &str) -> Result<(), DispatchError> {
    let bad = identifier
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || SETTINGS_EXTRA_CHARS.contains(*c)));
    match bad {
        Some(c) => Err(DispatchError::InvalidArgument {
            kind: IntentKind::SystemSetting,
            reason: format!("settings identifier {:?} contains {:?}", identifier, c),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOGLE: &str = "https://www.google.com/search?q={query}";

    #[test]
    fn encodes_spaces_and_reserved_characters() {
        assert_eq!(
            search_url(GOOGLE, "rust & c++ #1"),
            "https://www.google.com/search?q=rust%20%26%20c%2B%2B%20%231"
        );
        assert_eq!(
            search_url(GOOGLE, "a/b?c=d"),
            "https://www.google.com/search?q=a%2Fb%3Fc%3Dd"
        );
    }

    #[test]
    fn keeps_unreserved_characters() {
        assert_eq!(
            search_url(GOOGLE, "serde_json-1.0~x"),
            "https://www.google.com/search?q=serde_json-1.0~x"
        );
    }

    #[test]
    fn encodes_non_ascii_as_utf8() {
        assert_eq!(
            search_url(GOOGLE, "búsqueda"),
            "https://www.google.com/search?q=b%C3%BAsqueda"
        );
    }

    #[test]
    fn template_placeholder_can_be_anywhere() {
        assert_eq!(
            search_url("https://example.com/{query}/results", "x y"),
            "https://example.com/x%20y/results"
        );
    }

    #[test]
    fn existing_path_is_revealed() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "hi").unwrap();

        let arg = file.to_string_lossy().to_string();
        assert_eq!(file_action(&arg), Action::RevealPath(file.clone()));
        assert_eq!(
            file_action(&dir.path().to_string_lossy()),
            Action::RevealPath(dir.path().to_path_buf())
        );
    }

    #[test]
    fn missing_path_becomes_search() {
        assert_eq!(
            file_action("quarterly report 2031"),
            Action::SearchFiles("quarterly report 2031".into())
        );
    }

    #[test]
    fn settings_identifier_charset() {
        assert!(check_settings_identifier("ms-settings:network-wifi").is_ok());
        assert!(
            check_settings_identifier("x-apple.systempreferences:com.apple.BluetoothSettings")
                .is_ok()
        );
        assert!(check_settings_identifier("info-overview").is_ok());
        assert!(check_settings_identifier("wifi; rm -rf ~").is_err());
        assert!(check_settings_identifier("display settings").is_err());
    }

    #[test]
    fn control_characters_are_refused() {
        assert!(check_no_control_chars(IntentKind::LaunchApp, "Visual Studio Code").is_ok());
        assert!(matches!(
            check_no_control_chars(IntentKind::LaunchApp, "calc\0.exe"),
            Err(DispatchError::InvalidArgument { kind: IntentKind::LaunchApp, .. })
        ));
    }

    #[test]
    fn relative_launch_paths_are_refused() {
        assert!(check_launch_identifier("firefox").is_ok());
        assert!(check_launch_identifier("Visual Studio Code").is_ok());
        for relative in ["./x", "../bin/tool", "bin/tool", "tools\\app.exe"] {
            assert!(
                matches!(
                    check_launch_identifier(relative),
                    Err(DispatchError::InvalidArgument { kind: IntentKind::LaunchApp, .. })
                ),
                "{:?} should be refused",
                relative
            );
        }
        assert!(check_launch_identifier("calc\0.exe").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn absolute_launch_path_is_allowed() {
        assert!(check_launch_identifier("/usr/bin/env").is_ok());
    }
}
