//! macOS actions through `open` and Spotlight's `mdfind`

use std::path::PathBuf;

use crate::error::PlatformError;
use crate::platform::{FileTarget, PlatformServices};
use crate::utils::{hidden_command, run_checked};

const OPEN: &str = "/usr/bin/open";
const MDFIND: &str = "/usr/bin/mdfind";
const SETTINGS_SCHEME: &str = "x-apple.systempreferences:";

pub struct NativeServices;

impl PlatformServices for NativeServices {
    fn open_url(&self, url: &str) -> Result<(), PlatformError> {
        let mut cmd = hidden_command(OPEN);
        cmd.arg(url);
        run_checked(cmd)
    }

    fn reveal_path_or_search(&self, target: &FileTarget) -> Result<(), PlatformError> {
        let path = match target {
            FileTarget::Path(path) => path.clone(),
            FileTarget::Search(term) => spotlight_first_hit(term)?,
        };
        let mut cmd = hidden_command(OPEN);
        cmd.arg("-R").arg(&path);
        run_checked(cmd)
    }

    fn open_settings_panel(&self, identifier: &str) -> Result<(), PlatformError> {
        let url = if identifier.starts_with(SETTINGS_SCHEME) {
            identifier.to_string()
        } else {
            format!("{}{}", SETTINGS_SCHEME, identifier)
        };
        let mut cmd = hidden_command(OPEN);
        cmd.arg(url);
        run_checked(cmd)
    }

    fn launch_process(&self, identifier: &str) -> Result<(), PlatformError> {
        let mut cmd = hidden_command(OPEN);
        cmd.arg("-a").arg(identifier);
        run_checked(cmd)
    }
}

fn spotlight_first_hit(term: &str) -> Result<PathBuf, PlatformError> {
    let output = hidden_command(MDFIND)
        .args(["-name", term])
        .output()
        .map_err(|source| PlatformError::Spawn {
            program: MDFIND.to_string(),
            source,
        })?;
    if !output.status.success() {
        return Err(PlatformError::ExitStatus {
            program: MDFIND.to_string(),
            code: output.status.code(),
        });
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let hit = stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| PlatformError::NotFound(term.to_string()))?;
    log::debug!("Spotlight matched {:?} -> {}", term, hit.display());
    Ok(hit)
}
