use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
use windows::core::{HSTRING, PCWSTR, w};

use crate::error::PlatformError;

/// Hands `target` (URL, URI scheme, executable or document) to the shell's
/// default "open" verb. No command interpreter is involved.
pub fn open(target: &str) -> Result<(), PlatformError> {
    let file = HSTRING::from(target);

    // SAFETY: `file` outlives the call and the other string arguments are
    // static or null.
    let instance = unsafe {
        ShellExecuteW(
            HWND::default(),
            w!("open"),
            PCWSTR(file.as_ptr()),
            PCWSTR::null(),
            PCWSTR::null(),
            SW_SHOWNORMAL,
        )
    };

    // Values above 32 mean success; anything else is an SE_ERR_* code
    let code = instance.0 as isize;
    if code > 32 {
        log::debug!("ShellExecuteW opened {}", target);
        Ok(())
    } else {
        Err(PlatformError::Shell {
            target: target.to_string(),
            code,
        })
    }
}
