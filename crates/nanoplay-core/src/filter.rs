//! Decides which top-level windows are shown to the user.
//!
//! The predicate is a heuristic: a visible window with a real title that
//! is not part of the shell. The reserved titles and denied classes are
//! plain data (see [`FilterConfig`]) so they can be extended from the
//! config file without touching the checks below.

use crate::config::FilterConfig;
use crate::window::{Window, WindowEntry};

/// The enumeration predicate, built once per refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFilter {
    reserved_titles: Vec<String>,
    denied_classes: Vec<String>,
    own_title: Option<String>,
}

impl Default for WindowFilter {
    fn default() -> Self {
        Self::from_config(&FilterConfig::default())
    }
}

impl WindowFilter {
    /// Builds a filter from the configured denylists.
    pub fn from_config(config: &FilterConfig) -> Self {
        Self {
            reserved_titles: config.reserved_titles.clone(),
            denied_classes: config.denied_classes.clone(),
            own_title: None,
        }
    }

    /// Also hides the window carrying `title`, i.e. our own.
    pub fn excluding_own_title(mut self, title: impl Into<String>) -> Self {
        self.own_title = Some(title.into());
        self
    }

    /// Returns the list entry for `window` if it passes every check.
    ///
    /// Checks run cheapest first: visibility, title, reserved titles,
    /// class denylist, own title. A window whose title or class cannot
    /// be read is treated as having none.
    pub fn entry_for<W: Window + ?Sized>(&self, window: &W) -> Option<WindowEntry> {
        if !window.is_visible() {
            return None;
        }

        let title = window.title().unwrap_or_default();
        if title.trim().is_empty() {
            return None;
        }
        if self.reserved_titles.iter().any(|t| *t == title) {
            return None;
        }

        let class = window.class().unwrap_or_default();
        if self.denied_classes.iter().any(|c| *c == class) {
            return None;
        }

        if self.own_title.as_deref() == Some(title.as_str()) {
            return None;
        }

        Some(WindowEntry {
            handle: window.handle(),
            title,
        })
    }
}

/// Filters an already-gathered set of windows, keeping OS order.
///
/// For desktops that can list every window up front. The Win32 desktop
/// filters inside its `EnumWindows` callback instead.
pub fn collect_user_windows<'a, W, I>(candidates: I, filter: &WindowFilter) -> Vec<WindowEntry>
where
    W: Window + 'a,
    I: IntoIterator<Item = &'a W>,
{
    candidates
        .into_iter()
        .filter_map(|w| filter.entry_for(w))
        .collect()
}
