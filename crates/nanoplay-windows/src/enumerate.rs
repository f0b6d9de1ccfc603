use nanoplay_core::{WindowEntry, WindowFilter, WindowResult};

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;
use windows::core::BOOL;

use crate::window::Window;

/// Per-call state handed to the callback through `LPARAM`.
struct Collector<'a> {
    filter: &'a WindowFilter,
    entries: Vec<WindowEntry>,
}

/// Lists the visible, titled, user-facing top-level windows in the order
/// `EnumWindows` reports them.
pub fn enumerate_user_windows(filter: &WindowFilter) -> WindowResult<Vec<WindowEntry>> {
    let mut collector = Collector {
        filter,
        entries: Vec::new(),
    };

    // SAFETY: EnumWindows is synchronous, so `collector` outlives every
    // callback invocation that dereferences the pointer.
    unsafe {
        EnumWindows(
            Some(collect_window),
            LPARAM(&mut collector as *mut Collector as isize),
        )?;
    }

    Ok(collector.entries)
}

/// Called by `EnumWindows` once per top-level window. Always returns
/// `TRUE` so enumeration runs to the end.
unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the Collector pointer from enumerate_user_windows().
    let collector = unsafe { &mut *(lparam.0 as *mut Collector) };

    if let Some(entry) = collector.filter.entry_for(&Window::new(hwnd)) {
        collector.entries.push(entry);
    }

    BOOL(1)
}
