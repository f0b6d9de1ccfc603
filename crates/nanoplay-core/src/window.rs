use std::fmt;

/// A boxed error type for platform window operations.
///
/// User-input failures have their own typed error ([`crate::ResizeError`]);
/// this alias covers whatever the OS layer can throw at us.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Opaque OS-assigned identifier for a top-level window.
///
/// Holds the raw pointer-sized value so the core crate never depends on
/// a platform binding. The window is not owned; the handle may go stale
/// at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(usize);

impl WindowHandle {
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// One row of the window list: a handle plus the title read at
/// enumeration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEntry {
    pub handle: WindowHandle,
    pub title: String,
}

/// Read-only view of a top-level window.
///
/// Each platform crate (e.g. `nanoplay-windows`) provides its own
/// implementation. The filter only needs these four queries.
pub trait Window {
    /// Returns the handle identifying this window.
    fn handle(&self) -> WindowHandle;

    /// Returns the window title, truncated to the platform buffer size.
    fn title(&self) -> WindowResult<String>;

    /// Returns the window class name.
    fn class(&self) -> WindowResult<String>;

    /// Returns whether the window is currently visible.
    fn is_visible(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_displays_as_hex() {
        let handle = WindowHandle::from_raw(0x1A2B);

        assert_eq!(handle.to_string(), "0x1A2B");
        assert_eq!(handle.raw(), 0x1A2B);
    }
}
