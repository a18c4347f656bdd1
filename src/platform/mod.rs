//! Platform abstraction layer
//!
//! The dispatcher never talks to the OS directly. It goes through
//! [`PlatformServices`], which has one implementation per operating system
//! plus [`DryRun`] for previewing what a command would do.

use std::path::PathBuf;

use crate::error::PlatformError;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub mod linux;

// Re-export the current platform's module
#[cfg(target_os = "macos")]
pub use self::macos as current;

#[cfg(target_os = "windows")]
pub use self::windows as current;

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub use self::linux as current;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum OperatingSystem {
    Windows,
    MacOs,
    Linux,
}

impl OperatingSystem {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            OperatingSystem::Windows
        } else if cfg!(target_os = "macos") {
            OperatingSystem::MacOs
        } else {
            OperatingSystem::Linux
        }
    }
}

/// What a file search should open.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FileTarget {
    /// An existing path to reveal in the file manager.
    Path(PathBuf),
    /// A term to search for.
    Search(String),
}

pub trait PlatformServices {
    fn open_url(&self, url: &str) -> Result<(), PlatformError>;
    fn reveal_path_or_search(&self, target: &FileTarget) -> Result<(), PlatformError>;
    fn open_settings_panel(&self, identifier: &str) -> Result<(), PlatformError>;
    fn launch_process(&self, identifier: &str) -> Result<(), PlatformError>;
}

impl<T: PlatformServices + ?Sized> PlatformServices for Box<T> {
    fn open_url(&self, url: &str) -> Result<(), PlatformError> {
        (**self).open_url(url)
    }

    fn reveal_path_or_search(&self, target: &FileTarget) -> Result<(), PlatformError> {
        (**self).reveal_path_or_search(target)
    }

    fn open_settings_panel(&self, identifier: &str) -> Result<(), PlatformError> {
        (**self).open_settings_panel(identifier)
    }

    fn launch_process(&self, identifier: &str) -> Result<(), PlatformError> {
        (**self).launch_process(identifier)
    }
}

/// Logs each action instead of performing it.
#[derive(Clone, Copy, Debug, Default)]
pub struct DryRun;

impl PlatformServices for DryRun {
    fn open_url(&self, url: &str) -> Result<(), PlatformError> {
        log::info!("[dry run] open url {}", url);
        Ok(())
    }

    fn reveal_path_or_search(&self, target: &FileTarget) -> Result<(), PlatformError> {
        match target {
            FileTarget::Path(path) => log::info!("[dry run] reveal {}", path.display()),
            FileTarget::Search(term) => log::info!("[dry run] search files for {:?}", term),
        }
        Ok(())
    }

    fn open_settings_panel(&self, identifier: &str) -> Result<(), PlatformError> {
        log::info!("[dry run] open settings {}", identifier);
        Ok(())
    }

    fn launch_process(&self, identifier: &str) -> Result<(), PlatformError> {
        log::info!("[dry run] launch {}", identifier);
        Ok(())
    }
}

/// Services for the OS this binary was built for.
pub fn native() -> Box<dyn PlatformServices> {
    Box::new(current::NativeServices)
}
