//! Picks the desktop implementation for the target OS.

#[cfg(windows)]
pub use nanoplay_windows::Win32Desktop as PlatformDesktop;

#[cfg(windows)]
fn desktop() -> Option<PlatformDesktop> {
    Some(PlatformDesktop::default())
}

/// Holds the console title until dropped, when the old one comes back.
#[cfg(windows)]
pub type TitleClaim = Option<nanoplay_windows::console::TitleGuard>;

/// Gives this process's console window the app title so the filter
/// leaves it out of the list.
#[cfg(windows)]
pub fn claim_title(title: &str) -> TitleClaim {
    match nanoplay_windows::console::TitleGuard::set(title) {
        Ok(guard) => Some(guard),
        Err(e) => {
            nanoplay_core::log_warn!("could not set console title: {e}");
            None
        }
    }
}

/// Stand-in on targets without a supported window system. It has no
/// values, so nothing can ever call into it.
#[cfg(not(windows))]
pub enum PlatformDesktop {}

#[cfg(not(windows))]
impl nanoplay_core::Desktop for PlatformDesktop {
    fn enumerate(
        &self,
        _filter: &nanoplay_core::WindowFilter,
    ) -> nanoplay_core::WindowResult<Vec<nanoplay_core::WindowEntry>> {
        match *self {}
    }

    fn place(
        &self,
        _handle: nanoplay_core::WindowHandle,
        _rect: &nanoplay_core::Rect,
    ) -> nanoplay_core::WindowResult<()> {
        match *self {}
    }
}

#[cfg(not(windows))]
fn desktop() -> Option<PlatformDesktop> {
    None
}

#[cfg(not(windows))]
pub type TitleClaim = Option<std::convert::Infallible>;

#[cfg(not(windows))]
pub fn claim_title(_title: &str) -> TitleClaim {
    None
}

/// Returns the desktop or exits with an error on unsupported targets.
pub fn require_desktop() -> PlatformDesktop {
    match desktop() {
        Some(desktop) => desktop,
        None => {
            eprintln!("Error: listing and resizing windows requires Windows.");
            std::process::exit(1);
        }
    }
}
