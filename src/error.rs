use std::io;

use thiserror::Error;

use crate::model::IntentKind;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("nothing to dispatch")]
    EmptyInput,

    #[error("unrecognized command, start it with -nav, -exp, -sys or -app")]
    UnrecognizedCommand,

    #[error("{} needs an argument", .0.prefix())]
    MissingArgument(IntentKind),

    #[error("invalid {kind} argument: {reason}")]
    InvalidArgument { kind: IntentKind, reason: String },

    #[error("{kind} failed: {source}")]
    PlatformActionFailed {
        kind: IntentKind,
        #[source]
        source: PlatformError,
    },
}

fn exit_code_label(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

impl DispatchError {
    /// True when the error comes from what the user typed rather than the platform.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, DispatchError::PlatformActionFailed { .. })
    }
}

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with status {}", exit_code_label(.code))]
    ExitStatus { program: String, code: Option<i32> },

    #[error("nothing matched \"{0}\"")]
    NotFound(String),

    #[error("shell could not open {target} (code {code})")]
    Shell { target: String, code: isize },

    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
}
