//! The state behind one NanoPlay window: the current window list, which
//! entry is selected, and the text typed into the width and height boxes.

use crate::config::ResizeConfig;
use crate::filter::WindowFilter;
use crate::log_debug;
use crate::rect::Rect;
use crate::resize::{self, ResizeError, Resized};
use crate::window::{WindowEntry, WindowHandle, WindowResult};

/// The OS operations NanoPlay needs.
///
/// Each platform crate provides one implementation. Both calls are
/// synchronous and return promptly.
pub trait Desktop {
    /// Lists top-level windows that pass `filter`, in OS order.
    fn enumerate(&self, filter: &WindowFilter) -> WindowResult<Vec<WindowEntry>>;

    /// Moves and resizes a window, shows it, and raises it to the top
    /// of the z-order.
    fn place(&self, handle: WindowHandle, rect: &Rect) -> WindowResult<()>;
}

pub struct Session<D: Desktop> {
    desktop: D,
    filter: WindowFilter,
    windows: Vec<WindowEntry>,
    selected: Option<usize>,
    width: String,
    height: String,
}

impl<D: Desktop> Session<D> {
    /// Creates a session with an empty list. Call [`Session::refresh`]
    /// to populate it.
    pub fn new(desktop: D, filter: WindowFilter, inputs: &ResizeConfig) -> Self {
        Self {
            desktop,
            filter,
            windows: Vec::new(),
            selected: None,
            width: inputs.width.to_string(),
            height: inputs.height.to_string(),
        }
    }

    /// Replaces the window list with a fresh enumeration.
    ///
    /// The first entry becomes the selection, or nothing when the list
    /// is empty. On error the previous list and selection are kept.
    pub fn refresh(&mut self) -> WindowResult<&[WindowEntry]> {
        let windows = self.desktop.enumerate(&self.filter)?;
        log_debug!("enumerated {} window(s)", windows.len());

        self.selected = if windows.is_empty() { None } else { Some(0) };
        self.windows = windows;
        Ok(&self.windows)
    }

    pub fn windows(&self) -> &[WindowEntry] {
        &self.windows
    }

    /// Selects the entry at `index`. Returns `false` and leaves the
    /// selection alone when the index is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.windows.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&WindowEntry> {
        self.selected.and_then(|i| self.windows.get(i))
    }

    pub fn width_text(&self) -> &str {
        &self.width
    }

    pub fn height_text(&self) -> &str {
        &self.height
    }

    pub fn set_width_text(&mut self, text: impl Into<String>) {
        self.width = text.into();
    }

    pub fn set_height_text(&mut self, text: impl Into<String>) {
        self.height = text.into();
    }

    /// Resizes the selected window using the current input text.
    ///
    /// Leaves the list, selection, and input text untouched either way.
    pub fn resize_selected(&self) -> Result<Resized, ResizeError> {
        resize::resize(&self.desktop, self.selected(), &self.width, &self.height)
    }

    pub fn desktop(&self) -> &D {
        &self.desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeDesktop, FakeWindow};

    fn desktop() -> FakeDesktop {
        FakeDesktop::with_windows(vec![
            FakeWindow::new(10, "Program Manager", "Progman"),
            FakeWindow::new(11, "Untitled - Notepad", "Notepad"),
            FakeWindow::new(12, "", "Chrome_WidgetWin_0"),
            FakeWindow::new(13, "Task Switching", "Shell_TrayWnd"),
            FakeWindow::new(14, "Calculator", "ApplicationFrameWindow"),
            FakeWindow::new(15, "Hidden", "Notepad").hidden(),
            FakeWindow::new(16, "NanoPlay", "ConsoleWindowClass"),
        ])
    }

    fn session() -> Session<FakeDesktop> {
        let filter = WindowFilter::default().excluding_own_title("NanoPlay");
        Session::new(desktop(), filter, &ResizeConfig::default())
    }

    #[test]
    fn new_session_starts_empty_with_default_inputs() {
        let session = session();

        assert!(session.windows().is_empty());
        assert_eq!(session.selected(), None);
        assert_eq!(session.width_text(), "320");
        assert_eq!(session.height_text(), "240");
    }

    #[test]
    fn refresh_lists_user_windows_and_selects_first() {
        // Arrange
        let mut session = session();

        // Act
        let titles: Vec<String> = session
            .refresh()
            .unwrap()
            .iter()
            .map(|e| e.title.clone())
            .collect();

        // Assert
        assert_eq!(titles, ["Untitled - Notepad", "Calculator"]);
        assert_eq!(session.selected_index(), Some(0));
    }

    #[test]
    fn refresh_twice_is_idempotent() {
        let mut session = session();

        let first = session.refresh().unwrap().to_vec();
        let second = session.refresh().unwrap().to_vec();

        assert_eq!(first, second);
    }

    #[test]
    fn refresh_on_empty_desktop_clears_selection() {
        // Arrange
        let mut session = session();
        session.refresh().unwrap();
        session.desktop().windows.borrow_mut().clear();

        // Act
        session.refresh().unwrap();

        // Assert
        assert!(session.windows().is_empty());
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn failed_refresh_keeps_previous_list() {
        // Arrange
        let filter = WindowFilter::default();
        let failing = FakeDesktop {
            enumerate_fails: true,
            ..Default::default()
        };
        let mut session = Session::new(failing, filter, &ResizeConfig::default());

        // Act
        let result = session.refresh();

        // Assert
        assert!(result.is_err());
        assert!(session.windows().is_empty());
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut session = session();
        session.refresh().unwrap();

        assert!(!session.select(2));
        assert_eq!(session.selected_index(), Some(0));
        assert!(session.select(1));
        assert_eq!(session.selected().unwrap().title, "Calculator");
    }

    #[test]
    fn resize_without_selection_fails_without_os_call() {
        // Arrange
        let mut session = session();
        session.refresh().unwrap();
        session.clear_selection();

        // Act
        let result = session.resize_selected();

        // Assert
        assert_eq!(result, Err(ResizeError::NoSelection));
        assert!(session.desktop().placements().is_empty());
    }

    #[test]
    fn resize_before_first_refresh_has_no_selection() {
        let session = session();

        assert_eq!(session.resize_selected(), Err(ResizeError::NoSelection));
    }

    #[test]
    fn failed_resize_leaves_inputs_and_selection_alone() {
        // Arrange
        let mut session = session();
        session.refresh().unwrap();
        session.select(1);
        session.set_width_text("abc");

        // Act
        let result = session.resize_selected();

        // Assert
        assert_eq!(result, Err(ResizeError::InvalidNumericInput));
        assert_eq!(session.width_text(), "abc");
        assert_eq!(session.height_text(), "240");
        assert_eq!(session.selected_index(), Some(1));
    }

    #[test]
    fn non_positive_inputs_are_rejected() {
        let mut session = session();
        session.refresh().unwrap();

        session.set_width_text("0");
        assert_eq!(
            session.resize_selected(),
            Err(ResizeError::NonPositiveDimension)
        );

        session.set_width_text("-5");
        session.set_height_text("100");
        assert_eq!(
            session.resize_selected(),
            Err(ResizeError::NonPositiveDimension)
        );
        assert!(session.desktop().placements().is_empty());
    }

    #[test]
    fn resize_selected_moves_window_to_origin() {
        // Arrange
        let mut session = session();
        session.refresh().unwrap();

        // Act
        let resized = session.resize_selected().unwrap();

        // Assert
        assert_eq!(resized.title, "Untitled - Notepad");
        assert_eq!((resized.width, resized.height), (320, 240));
        assert_eq!(
            session.desktop().placements(),
            vec![(WindowHandle::from_raw(11), Rect::new(0, 0, 320, 240))]
        );
    }

    #[test]
    fn stale_selection_after_window_closes_still_succeeds() {
        // Arrange
        let mut session = session();
        session.refresh().unwrap();
        session.desktop().windows.borrow_mut().clear();

        // Act
        let result = session.resize_selected();

        // Assert
        assert!(result.is_ok());
        assert_eq!(session.desktop().placements().len(), 1);
    }
}
