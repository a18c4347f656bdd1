//! Windows actions through the shell (ShellExecuteW) and Explorer

mod shell;

use std::os::windows::process::CommandExt;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::PlatformError;
use crate::platform::{FileTarget, PlatformServices};
use crate::utils::{hidden_command, spawn_detached};

const SETTINGS_SCHEME: &str = "ms-settings:";

pub struct NativeServices;

impl PlatformServices for NativeServices {
    fn open_url(&self, url: &str) -> Result<(), PlatformError> {
        shell::open(url)
    }

    fn reveal_path_or_search(&self, target: &FileTarget) -> Result<(), PlatformError> {
        match target {
            FileTarget::Path(path) => {
                // explorer exits non-zero even on success, so its status is not checked
                let mut cmd = hidden_command("explorer");
                cmd.raw_arg(format!("/select,\"{}\"", path.display()));
                spawn_detached(cmd)
            }
            FileTarget::Search(term) => shell::open(&search_uri(term)),
        }
    }

    fn open_settings_panel(&self, identifier: &str) -> Result<(), PlatformError> {
        if identifier.starts_with(SETTINGS_SCHEME) {
            shell::open(identifier)
        } else {
            shell::open(&format!("{}{}", SETTINGS_SCHEME, identifier))
        }
    }

    fn launch_process(&self, identifier: &str) -> Result<(), PlatformError> {
        shell::open(identifier)
    }
}

fn search_uri(term: &str) -> String {
    let query = utf8_percent_encode(term, NON_ALPHANUMERIC);
    match dirs::home_dir() {
        Some(home) => {
            let location = home.to_string_lossy();
            format!(
                "search-ms:query={}&crumb=location:{}",
                query,
                utf8_percent_encode(&location, NON_ALPHANUMERIC)
            )
        }
        None => format!("search-ms:query={}", query),
    }
}
