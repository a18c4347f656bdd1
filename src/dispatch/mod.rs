//! Command dispatcher: classify a line of input, resolve it to a platform
//! action, and invoke exactly one platform service for it.

mod classify;
mod resolve;


use std::time::SystemTime;

pub use classify::classify;
pub use resolve::{Action, search_url};

use crate::aliases::AliasTable;
use crate::config::Config;
use crate::error::{DispatchError, PlatformError};
use crate::model::{DispatchReport, Intent, IntentKind, UnknownPrefixPolicy};
use crate::platform::{FileTarget, OperatingSystem, PlatformServices};

pub struct Dispatcher<P> {
    os: OperatingSystem,
    policy: UnknownPrefixPolicy,
    search_url: String,
    settings: AliasTable,
    apps: AliasTable,
    platform: P,
}

impl<P: PlatformServices> Dispatcher<P> {
    /// A dispatcher with default config and the built-in tables for `os`.
    pub fn new(platform: P, os: OperatingSystem) -> Self {
        Self::from_config(&Config::default(), os, platform)
    }

    pub fn from_config(config: &Config, os: OperatingSystem, platform: P) -> Self {
        let mut dispatcher = Self {
            os,
            policy: UnknownPrefixPolicy::default(),
            search_url: String::new(),
            settings: AliasTable::default(),
            apps: AliasTable::default(),
            platform,
        };
        dispatcher.apply_config(config);
        dispatcher
    }

    /// Replaces policy, search URL and alias tables. Callers only do this
    /// between dispatches.
    pub fn apply_config(&mut self, config: &Config) {
        self.policy = config.dispatch.unknown_prefix_policy;
        self.search_url = config.dispatch.search_url.trim().to_string();
        self.settings = AliasTable::builtin(self.os, IntentKind::SystemSetting)
            .with_overrides(&config.aliases.settings);
        self.apps = AliasTable::builtin(self.os, IntentKind::LaunchApp)
            .with_overrides(&config.aliases.apps);
        log::debug!(
            "Dispatcher configured: policy={:?}, {} settings aliases, {} app aliases",
            self.policy,
            self.settings.len(),
            self.apps.len()
        );
    }

    pub fn with_policy(mut self, policy: UnknownPrefixPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_policy(&mut self, policy: UnknownPrefixPolicy) {
        self.policy = policy;
    }

    pub fn policy(&self) -> UnknownPrefixPolicy {
        self.policy
    }

    pub fn settings_aliases(&self) -> &AliasTable {
        &self.settings
    }

    pub fn app_aliases(&self) -> &AliasTable {
        &self.apps
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn classify(&self, raw: &str) -> Result<Intent, DispatchError> {
        classify(raw, self.policy)
    }

    /// Works out what an intent would do without touching the platform.
    pub fn resolve(&self, intent: &Intent) -> Result<Action, DispatchError> {
        let argument = intent.argument.as_str();
        match intent.kind {
            IntentKind::WebSearch => Ok(Action::OpenUrl(search_url(&self.search_url, argument))),
            IntentKind::FileSearch => {
                resolve::check_no_control_chars(intent.kind, argument)?;
                Ok(resolve::file_action(argument))
            }
            IntentKind::SystemSetting => {
                let identifier = self.settings.resolve(argument).unwrap_or(argument);
                resolve::check_settings_identifier(identifier)?;
                Ok(Action::OpenSettings(identifier.to_string()))
            }
            IntentKind::LaunchApp => {
                let identifier = self.apps.resolve(argument).unwrap_or(argument);
                resolve::check_launch_identifier(identifier)?;
                Ok(Action::LaunchProcess(identifier.to_string()))
            }
        }
    }

    pub fn dispatch(&self, raw: &str) -> Result<DispatchReport, DispatchError> {
        let intent = self.classify(raw)?;
        log::debug!("Classified {:?} as {} ({:?})", raw, intent.kind, intent.argument);

        let action = self.resolve(&intent)?;
        log::info!("{}: {}", intent.kind, action);

        if let Err(source) = self.invoke(&action) {
            log::warn!("{} failed: {}", intent.kind, source);
            return Err(DispatchError::PlatformActionFailed {
                kind: intent.kind,
                source,
            });
        }

        Ok(DispatchReport {
            resolved_target: action.target(),
            intent,
            timestamp: SystemTime::now(),
        })
    }

    fn invoke(&self, action: &Action) -> Result<(), PlatformError> {
        match action {
            Action::OpenUrl(url) => self.platform.open_url(url),
            Action::OpenSettings(id) => self.platform.open_settings_panel(id),
            Action::LaunchProcess(id) => self.platform.launch_process(id),
            Action::RevealPath(path) => self
                .platform
                .reveal_path_or_search(&FileTarget::Path(path.clone())),
            Action::SearchFiles(term) => self
                .platform
                .reveal_path_or_search(&FileTarget::Search(term.clone())),
        }
    }
}
