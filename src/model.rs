use std::fmt;
use std::time::SystemTime;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Destination a command is routed to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IntentKind {
    WebSearch,
    FileSearch,
    SystemSetting,
    LaunchApp,
}

impl IntentKind {
    /// Every kind, in the order prefixes are tried.
    pub const ALL: [IntentKind; 4] = [
        IntentKind::WebSearch,
        IntentKind::FileSearch,
        IntentKind::SystemSetting,
        IntentKind::LaunchApp,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            IntentKind::WebSearch => "-nav",
            IntentKind::FileSearch => "-exp",
            IntentKind::SystemSetting => "-sys",
            IntentKind::LaunchApp => "-app",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IntentKind::WebSearch => "web search",
            IntentKind::FileSearch => "file search",
            IntentKind::SystemSetting => "system settings",
            IntentKind::LaunchApp => "app launch",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Intent {
    pub kind: IntentKind,
    pub argument: String,
}

impl Intent {
    pub fn new(kind: IntentKind, argument: impl Into<String>) -> Self {
        Self {
            kind,
            argument: argument.into(),
        }
    }
}

/// What to do with input that carries none of the known prefixes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPrefixPolicy {
    #[default]
    Reject,
    DefaultToWebSearch,
}

#[derive(Clone, Debug)]
pub struct DispatchReport {
    pub intent: Intent,
    /// URL, path, search term or identifier handed to the platform.
    pub resolved_target: String,
    pub timestamp: SystemTime,
}

#[derive(Clone, Debug)]
pub struct StatusMessage {
    pub message: String,
    pub severity: FeedbackSeverity,
}

impl StatusMessage {
    pub fn new(message: String, severity: FeedbackSeverity) -> Self {
        Self { message, severity }
    }

    pub fn info(message: String) -> Self {
        Self::new(message, FeedbackSeverity::Info)
    }

    pub fn warning(message: String) -> Self {
        Self::new(message, FeedbackSeverity::Warning)
    }

    pub fn error(message: String) -> Self {
        Self::new(message, FeedbackSeverity::Error)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeedbackSeverity {
    Info,
    Warning,
    Error,
}

/// Sent by the config watcher thread to the prompt loop.
#[derive(Clone, Debug)]
pub enum ConfigEvent {
    Reloaded(Config),
    ReloadFailed(String),
}
