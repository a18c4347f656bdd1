use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread;

use crate::error::PlatformError;

/// Builds a command that does not flash a console window on Windows.
#[cfg(target_os = "windows")]
pub fn hidden_command(program: &str) -> Command {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    let mut command = Command::new(program);
    command.creation_flags(CREATE_NO_WINDOW);
    command
}

#[cfg(not(target_os = "windows"))]
pub fn hidden_command(program: &str) -> Command {
    Command::new(program)
}

fn program_name(command: &Command) -> String {
    command.get_program().to_string_lossy().into_owned()
}

/// Runs a helper to completion and maps spawn failures and non-zero exits.
pub fn run_checked(mut command: Command) -> Result<(), PlatformError> {
    let program = program_name(&command);
    let output = command
        .stdin(Stdio::null())
        .output()
        .map_err(|source| PlatformError::Spawn {
            program: program.clone(),
            source,
        })?;

    if output.status.success() {
        return Ok(());
    }
    log::warn!(
        "{} failed: {}",
        program,
        String::from_utf8_lossy(&output.stderr).trim()
    );
    Err(PlatformError::ExitStatus {
        program,
        code: output.status.code(),
    })
}

/// Starts a process and returns without waiting for it. The child is reaped
/// on a background thread once it exits.
pub fn spawn_detached(mut command: Command) -> Result<(), PlatformError> {
    let program = program_name(&command);
    let child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| PlatformError::Spawn {
            program: program.clone(),
            source,
        })?;
    log::debug!("Started {} (pid {})", program, child.id());
    reap(child, program);
    Ok(())
}

fn reap(mut child: Child, program: String) -> thread::JoinHandle<()> {
    thread::spawn(move || match child.wait() {
        Ok(status) => log::debug!("{} (pid {}) exited: {}", program, child.id(), status),
        Err(e) => log::warn!("Failed to wait for {}: {}", program, e),
    })
}

/// Expands a leading `~` to the home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    let rest = if raw == "~" {
        Some("")
    } else {
        raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\"))
    };
    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}
