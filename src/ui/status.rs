use crate::aliases::AliasTable;
use crate::error::DispatchError;
use crate::model::{DispatchReport, FeedbackSeverity, IntentKind, StatusMessage};

/// The transient message shown after a command, mirroring what the overlay
/// would flash under its input field.
pub fn status_for(outcome: &Result<DispatchReport, DispatchError>) -> StatusMessage {
    match outcome {
        Ok(report) => StatusMessage::info(success_message(report)),
        Err(err) if err.is_input_error() => StatusMessage::warning(err.to_string()),
        Err(err) => StatusMessage::error(err.to_string()),
    }
}

fn success_message(report: &DispatchReport) -> String {
    let target = &report.resolved_target;
    match report.intent.kind {
        IntentKind::WebSearch => format!("Searching the web: {}", report.intent.argument),
        IntentKind::FileSearch => format!("Opening files: {}", target),
        IntentKind::SystemSetting => format!("Opening settings: {}", target),
        IntentKind::LaunchApp => format!("Launching {}", target),
    }
}

pub fn format_status(status: &StatusMessage) -> String {
    match status.severity {
        FeedbackSeverity::Info => status.message.clone(),
        FeedbackSeverity::Warning => format!("warning: {}", status.message),
        FeedbackSeverity::Error => format!("error: {}", status.message),
    }
}

/// Two-column listing used by `--list-aliases`.
pub fn format_alias_table(title: &str, table: &AliasTable) -> String {
    let width = table.iter().map(|(alias, _)| alias.len()).max().unwrap_or(0);
    let mut out = format!("{} ({})\n", title, table.len());
    for (alias, target) in table.iter() {
        out.push_str(&format!("  {:<width$}  {}\n", alias, target, width = width));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::time::SystemTime;

    use super::*;
    use crate::error::PlatformError;
    use crate::model::Intent;

    fn report(kind: IntentKind, argument: &str, target: &str) -> DispatchReport {
        DispatchReport {
            intent: Intent::new(kind, argument),
            resolved_target: target.to_string(),
            timestamp: SystemTime::now(),
        }
    }

    #[test]
    fn success_is_info() {
        let status = status_for(&Ok(report(
            IntentKind::LaunchApp,
            "calc",
            "calc.exe",
        )));
        assert_eq!(status.severity, FeedbackSeverity::Info);
        assert_eq!(format_status(&status), "Launching calc.exe");

        let status = status_for(&Ok(report(
            IntentKind::WebSearch,
            "rust book",
            "https://www.google.com/search?q=rust%20book",
        )));
        assert_eq!(status.message, "Searching the web: rust book");
    }

    #[test]
    fn input_errors_are_warnings() {
        let status = status_for(&Err(DispatchError::MissingArgument(IntentKind::SystemSetting)));
        assert_eq!(status.severity, FeedbackSeverity::Warning);
        assert_eq!(format_status(&status), "warning: -sys needs an argument");
    }

    #[test]
    fn platform_errors_include_cause() {
        let err = DispatchError::PlatformActionFailed {
            kind: IntentKind::LaunchApp,
            source: PlatformError::Spawn {
                program: "gedit".into(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            },
        };
        let status = status_for(&Err(err));
        assert_eq!(status.severity, FeedbackSeverity::Error);
        assert_eq!(
            format_status(&status),
            "error: app launch failed: failed to start gedit: not found"
        );
    }

    #[test]
    fn alias_listing_is_aligned() {
        let table = AliasTable::builtin(
            crate::platform::OperatingSystem::Linux,
            IntentKind::LaunchApp,
        );
        let listing = format_alias_table("Apps", &table);
        assert!(listing.starts_with(&format!("Apps ({})\n", table.len())));
        assert!(listing.contains("  terminal    x-terminal-emulator\n"));
    }
}
