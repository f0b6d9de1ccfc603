use nanoplay_core::{Desktop, Rect, WindowEntry, WindowFilter, WindowHandle, WindowResult};

use crate::enumerate::enumerate_user_windows;
use crate::window::Window;

/// The real Windows desktop.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Desktop;

impl Desktop for Win32Desktop {
    fn enumerate(&self, filter: &WindowFilter) -> WindowResult<Vec<WindowEntry>> {
        enumerate_user_windows(filter)
    }

    fn place(&self, handle: WindowHandle, rect: &Rect) -> WindowResult<()> {
        Window::from_handle(handle).place_on_top(rect)
    }
}
