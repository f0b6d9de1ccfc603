pub mod config;
pub mod filter;
pub mod i18n;
pub mod log;
pub mod rect;
pub mod resize;
pub mod session;
pub mod window;

#[cfg(test)]
mod testing;

pub use filter::WindowFilter;
pub use i18n::Language;
pub use rect::Rect;
pub use resize::{ResizeError, Resized};
pub use session::{Desktop, Session};
pub use window::{Window, WindowEntry, WindowHandle, WindowResult};

/// Title of the NanoPlay window itself. Never listed by enumeration.
pub const APP_TITLE: &str = "NanoPlay";
