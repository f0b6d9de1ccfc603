use nanoplay_core::WindowResult;

use windows::Win32::System::Console::{GetConsoleTitleW, SetConsoleTitleW};
use windows::core::HSTRING;

use crate::window::utf16_prefix;

/// Longer console titles are truncated.
const TITLE_BUFFER_LEN: usize = 1024;

/// Renames the console window hosting this process and puts the old
/// title back when dropped.
///
/// The enumeration filter hides windows carrying the app title, so
/// holding one of these keeps NanoPlay's own terminal out of its list.
#[derive(Debug)]
pub struct TitleGuard {
    previous: String,
}

impl TitleGuard {
    /// Saves the current console title and replaces it with `title`.
    pub fn set(title: &str) -> WindowResult<Self> {
        let previous = title_text()?;
        set_title(title)?;
        Ok(Self { previous })
    }
}

impl Drop for TitleGuard {
    fn drop(&mut self) {
        let _ = set_title(&self.previous);
    }
}

/// Returns the current console window title.
pub fn title_text() -> WindowResult<String> {
    let mut buffer = vec![0u16; TITLE_BUFFER_LEN];
    // SAFETY: GetConsoleTitleW writes at most buffer.len() code units and
    // returns the title length, or 0 on failure.
    let len = unsafe { GetConsoleTitleW(&mut buffer) };
    if len == 0 {
        return Err("GetConsoleTitleW returned no title".into());
    }
    Ok(utf16_prefix(&buffer, i32::try_from(len).unwrap_or(i32::MAX)))
}

fn set_title(title: &str) -> WindowResult<()> {
    // SAFETY: SetConsoleTitleW copies the string; HSTRING keeps it
    // null-terminated and alive for the duration of the call.
    unsafe { SetConsoleTitleW(&HSTRING::from(title))? };
    Ok(())
}
