//! Win32 implementation of the NanoPlay desktop.
//!
//! Everything here is Windows-only; on other targets the crate is empty.
#![cfg(windows)]

/// Console window title.
pub mod console;

/// `Desktop` implementation backed by Win32.
pub mod desktop;

/// Win32 window enumeration.
pub mod enumerate;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use desktop::Win32Desktop;
pub use enumerate::enumerate_user_windows;
pub use window::Window;
