use thiserror::Error;

use crate::log_info;
use crate::log_warn;
use crate::rect::Rect;
use crate::session::Desktop;
use crate::window::WindowEntry;

/// Why a resize request was refused.
///
/// All three are user-input problems: nothing was sent to the OS and
/// the caller can fix the input and try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResizeError {
    #[error("no window selected")]
    NoSelection,
    #[error("width and height must be whole numbers")]
    InvalidNumericInput,
    #[error("width and height must be greater than zero")]
    NonPositiveDimension,
}

/// Confirmation of a resize that was sent to the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resized {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

/// Parses the free-form width and height inputs.
///
/// Surrounding whitespace and a leading sign are accepted. Both values
/// must parse before the range check runs, so `"abc"` x `"0"` reports
/// [`ResizeError::InvalidNumericInput`], not a range error.
pub fn parse_dimensions(width: &str, height: &str) -> Result<(i32, i32), ResizeError> {
    let parse = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|_| ResizeError::InvalidNumericInput)
    };
    let (width, height) = (parse(width)?, parse(height)?);

    if width <= 0 || height <= 0 {
        return Err(ResizeError::NonPositiveDimension);
    }
    Ok((width, height))
}

/// Validates the request and moves the selected window to the origin
/// with the requested size.
///
/// Exactly one placement call is made on success and none on failure.
/// A placement the OS rejects (typically a window that closed since the
/// last refresh) is logged and otherwise ignored.
pub fn resize<D: Desktop + ?Sized>(
    desktop: &D,
    selected: Option<&WindowEntry>,
    width: &str,
    height: &str,
) -> Result<Resized, ResizeError> {
    let entry = selected.ok_or(ResizeError::NoSelection)?;
    let (width, height) = parse_dimensions(width, height)?;

    log_info!(
        "resize {} \"{}\" to {}x{}",
        entry.handle,
        entry.title,
        width,
        height
    );
    if let Err(e) = desktop.place(entry.handle, &Rect::at_origin(width, height)) {
        log_warn!("resize {} failed: {e}", entry.handle);
    }

    Ok(Resized {
        title: entry.title.clone(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDesktop;
    use crate::window::WindowHandle;

    fn notepad() -> WindowEntry {
        WindowEntry {
            handle: WindowHandle::from_raw(0x42),
            title: "Untitled - Notepad".into(),
        }
    }

    #[test]
    fn parse_accepts_positive_integers() {
        assert_eq!(parse_dimensions("320", "240"), Ok((320, 240)));
        assert_eq!(parse_dimensions(" 800 ", "+600"), Ok((800, 600)));
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        for (w, h) in [("abc", "240"), ("320", ""), ("3.5", "240"), ("320px", "240")] {
            assert_eq!(
                parse_dimensions(w, h),
                Err(ResizeError::InvalidNumericInput),
                "{w:?} x {h:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_overflowing_input() {
        assert_eq!(
            parse_dimensions("99999999999", "240"),
            Err(ResizeError::InvalidNumericInput)
        );
    }

    #[test]
    fn parse_rejects_zero_and_negative() {
        assert_eq!(
            parse_dimensions("0", "240"),
            Err(ResizeError::NonPositiveDimension)
        );
        assert_eq!(
            parse_dimensions("-5", "100"),
            Err(ResizeError::NonPositiveDimension)
        );
        assert_eq!(
            parse_dimensions("320", "0"),
            Err(ResizeError::NonPositiveDimension)
        );
    }

    #[test]
    fn numeric_check_runs_before_range_check() {
        assert_eq!(
            parse_dimensions("0", "abc"),
            Err(ResizeError::InvalidNumericInput)
        );
    }

    #[test]
    fn no_selection_wins_and_skips_os_call() {
        // Arrange
        let desktop = FakeDesktop::default();

        // Act
        let result = resize(&desktop, None, "abc", "0");

        // Assert
        assert_eq!(result, Err(ResizeError::NoSelection));
        assert!(desktop.placements().is_empty());
    }

    #[test]
    fn invalid_input_skips_os_call() {
        let desktop = FakeDesktop::default();
        let entry = notepad();

        let result = resize(&desktop, Some(&entry), "abc", "240");

        assert_eq!(result, Err(ResizeError::InvalidNumericInput));
        assert!(desktop.placements().is_empty());
    }

    #[test]
    fn valid_resize_places_window_at_origin_once() {
        // Arrange
        let desktop = FakeDesktop::default();
        let entry = notepad();

        // Act
        let result = resize(&desktop, Some(&entry), "320", "240");

        // Assert
        assert_eq!(
            result,
            Ok(Resized {
                title: "Untitled - Notepad".into(),
                width: 320,
                height: 240,
            })
        );
        assert_eq!(
            desktop.placements(),
            vec![(WindowHandle::from_raw(0x42), Rect::new(0, 0, 320, 240))]
        );
    }

    #[test]
    fn rejected_placement_still_reports_success() {
        let desktop = FakeDesktop {
            place_fails: true,
            ..Default::default()
        };
        let entry = notepad();

        let result = resize(&desktop, Some(&entry), "640", "480");

        assert!(result.is_ok());
        assert_eq!(desktop.placements().len(), 1);
    }
}
