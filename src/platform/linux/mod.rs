//! Linux (and other freedesktop systems) via xdg-open and gnome-control-center

mod search;

use crate::error::PlatformError;
use crate::platform::{FileTarget, PlatformServices};
use crate::utils::{hidden_command, run_checked, spawn_detached};

const OPENER: &str = "xdg-open";
const SETTINGS_APP: &str = "gnome-control-center";

pub struct NativeServices;

impl PlatformServices for NativeServices {
    fn open_url(&self, url: &str) -> Result<(), PlatformError> {
        let mut cmd = hidden_command(OPENER);
        cmd.arg(url);
        run_checked(cmd)
    }

    fn reveal_path_or_search(&self, target: &FileTarget) -> Result<(), PlatformError> {
        let path = match target {
            FileTarget::Path(path) => path.clone(),
            FileTarget::Search(term) => {
                let home =
                    dirs::home_dir().ok_or(PlatformError::Unsupported("home directory lookup"))?;
                search::find_in(&home, term)
                    .ok_or_else(|| PlatformError::NotFound(term.clone()))?
            }
        };
        log::debug!("Opening {} in the file manager", path.display());
        let mut cmd = hidden_command(OPENER);
        cmd.arg(&path);
        run_checked(cmd)
    }

    fn open_settings_panel(&self, identifier: &str) -> Result<(), PlatformError> {
        let mut cmd = hidden_command(SETTINGS_APP);
        cmd.arg(identifier);
        spawn_detached(cmd)
    }

    fn launch_process(&self, identifier: &str) -> Result<(), PlatformError> {
        spawn_detached(hidden_command(identifier))
    }
}
