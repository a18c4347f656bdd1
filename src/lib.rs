pub mod app;
pub use app::run;

pub mod aliases;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod utils;

// Platform abstraction layer
pub mod platform;

pub mod ui {
    pub mod status;
}

pub use dispatch::{Action, Dispatcher};
pub use error::{DispatchError, PlatformError};
pub use model::{DispatchReport, Intent, IntentKind, UnknownPrefixPolicy};
pub use platform::{FileTarget, OperatingSystem, PlatformServices};
