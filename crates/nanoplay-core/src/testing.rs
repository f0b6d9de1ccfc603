//! In-memory stand-ins for the OS, shared by unit tests.

use std::cell::RefCell;

use crate::filter::{WindowFilter, collect_user_windows};
use crate::rect::Rect;
use crate::session::Desktop;
use crate::window::{Window, WindowEntry, WindowHandle, WindowResult};

#[derive(Debug, Clone)]
pub(crate) struct FakeWindow {
    handle: usize,
    title: String,
    class: String,
    visible: bool,
    title_fails: bool,
}

impl FakeWindow {
    pub(crate) fn new(handle: usize, title: &str, class: &str) -> Self {
        Self {
            handle,
            title: title.into(),
            class: class.into(),
            visible: true,
            title_fails: false,
        }
    }

    pub(crate) fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub(crate) fn failing_title(mut self) -> Self {
        self.title_fails = true;
        self
    }
}

impl Window for FakeWindow {
    fn handle(&self) -> WindowHandle {
        WindowHandle::from_raw(self.handle)
    }

    fn title(&self) -> WindowResult<String> {
        if self.title_fails {
            return Err("window destroyed".into());
        }
        Ok(self.title.clone())
    }

    fn class(&self) -> WindowResult<String> {
        Ok(self.class.clone())
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// A desktop whose windows are fixed at construction and which records
/// every placement request instead of moving anything.
#[derive(Debug, Default)]
pub(crate) struct FakeDesktop {
    pub(crate) windows: RefCell<Vec<FakeWindow>>,
    pub(crate) placements: RefCell<Vec<(WindowHandle, Rect)>>,
    pub(crate) place_fails: bool,
    pub(crate) enumerate_fails: bool,
}

impl FakeDesktop {
    pub(crate) fn with_windows(windows: Vec<FakeWindow>) -> Self {
        Self {
            windows: RefCell::new(windows),
            ..Default::default()
        }
    }

    pub(crate) fn placements(&self) -> Vec<(WindowHandle, Rect)> {
        self.placements.borrow().clone()
    }
}

impl Desktop for FakeDesktop {
    fn enumerate(&self, filter: &WindowFilter) -> WindowResult<Vec<WindowEntry>> {
        if self.enumerate_fails {
            return Err("EnumWindows failed".into());
        }
        Ok(collect_user_windows(self.windows.borrow().iter(), filter))
    }

    fn place(&self, handle: WindowHandle, rect: &Rect) -> WindowResult<()> {
        self.placements.borrow_mut().push((handle, *rect));
        if self.place_fails {
            return Err("invalid window handle".into());
        }
        Ok(())
    }
}
