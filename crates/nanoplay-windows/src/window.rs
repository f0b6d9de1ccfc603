use nanoplay_core::{Rect, WindowHandle, WindowResult};

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GetClassNameW, GetWindowTextW, HWND_TOP, IsWindowVisible, SWP_SHOWWINDOW, SetWindowPos,
};

/// Size of the title and class buffers, in UTF-16 code units.
///
/// Longer titles are truncated. 256 is also the Win32 limit for class names.
const TEXT_BUFFER_LEN: usize = 256;

/// A top-level window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle; this struct holds it and asks the OS for
/// metadata on demand.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a `Window` from a platform-agnostic handle.
    pub fn from_handle(handle: WindowHandle) -> Self {
        Self {
            hwnd: HWND(handle.raw() as *mut _),
        }
    }

    /// Moves and sizes the window, shows it, and raises it to the top
    /// of the z-order, all in one `SetWindowPos` call.
    ///
    /// The rectangle is applied as-is: no adjustment for invisible
    /// borders and no attempt to keep the old position.
    pub fn place_on_top(&self, rect: &Rect) -> WindowResult<()> {
        // SAFETY: SetWindowPos validates the handle itself and fails
        // with ERROR_INVALID_WINDOW_HANDLE for a destroyed window.
        unsafe {
            SetWindowPos(
                self.hwnd,
                Some(HWND_TOP),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_SHOWWINDOW,
            )?
        };
        Ok(())
    }
}

impl nanoplay_core::Window for Window {
    fn handle(&self) -> WindowHandle {
        WindowHandle::from_raw(self.hwnd.0 as usize)
    }

    fn title(&self) -> WindowResult<String> {
        let mut buffer = [0u16; TEXT_BUFFER_LEN];
        // SAFETY: GetWindowTextW writes at most buffer.len() - 1 code
        // units plus a terminator and returns how many it copied.
        let copied = unsafe { GetWindowTextW(self.hwnd, &mut buffer) };
        Ok(utf16_prefix(&buffer, copied))
    }

    fn class(&self) -> WindowResult<String> {
        let mut buffer = [0u16; TEXT_BUFFER_LEN];
        // SAFETY: same contract as GetWindowTextW above.
        let copied = unsafe { GetClassNameW(self.hwnd, &mut buffer) };
        Ok(utf16_prefix(&buffer, copied))
    }

    fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }
}

/// Decodes the first `len` code units. A zero or negative length (the
/// Win32 failure value) gives an empty string.
pub(crate) fn utf16_prefix(buffer: &[u16], len: i32) -> String {
    let len = usize::try_from(len).unwrap_or(0).min(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16_prefix_decodes_copied_units() {
        let buffer: Vec<u16> = "Notepad\0junk".encode_utf16().collect();

        assert_eq!(utf16_prefix(&buffer, 7), "Notepad");
    }

    #[test]
    fn utf16_prefix_treats_failure_as_empty() {
        let buffer = [0x41u16; 4];

        assert_eq!(utf16_prefix(&buffer, 0), "");
        assert_eq!(utf16_prefix(&buffer, -1), "");
    }

    #[test]
    fn utf16_prefix_never_reads_past_buffer() {
        let buffer = [0x41u16; 4];

        assert_eq!(utf16_prefix(&buffer, 99), "AAAA");
    }
}
