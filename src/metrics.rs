// src/metrics.rs

//! Text measurement for overlay sizing.
//!
//! Column widths must agree with what a character-cell rendering surface
//! will actually occupy, so per-character width comes from the system's
//! `wcwidth(3)` (double-width CJK counts 2, combining marks 0). The C
//! locale (`LC_CTYPE`) is initialized from the environment once, lazily,
//! before the first `wcwidth` call.

use std::ffi::CString;
use std::sync::OnceLock;

use libc::{c_char, c_int, c_uint};
use log::{trace, warn};

use crate::geometry::OverlaySize;

unsafe extern "C" {
    fn wcwidth(wc: c_uint) -> c_int;
    fn setlocale(category: c_int, locale: *const c_char) -> *mut c_char;
}

static LOCALE_INIT: OnceLock<()> = OnceLock::new();

fn ensure_locale() {
    LOCALE_INIT.get_or_init(|| {
        let empty = CString::new("").expect("empty locale string");
        // SAFETY: setlocale with a valid NUL-terminated string.
        if unsafe { setlocale(libc::LC_CTYPE, empty.as_ptr()) }.is_null() {
            warn!("failed to set LC_CTYPE from environment; wcwidth may misreport wide characters");
        }
    });
}

/// Display width of a single character in terminal cells: 0 for
/// non-advancing characters, 1 for ordinary ones, 2 for wide ones.
pub fn char_display_width(c: char) -> usize {
    ensure_locale();
    // SAFETY: plain FFI call; locale initialized above.
    match unsafe { wcwidth(c as c_uint) } {
        -1 if c.is_control() => 0,
        -1 => 1,
        0 => 0,
        1 => 1,
        2 => 2,
        other => {
            warn!(
                "wcwidth returned unexpected {} for U+{:04X}; assuming width 1",
                other, c as u32
            );
            1
        }
    }
}

/// Column/row extents of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtent {
    /// Widest line, in display columns.
    pub columns: u32,
    /// Number of lines; an empty string still occupies one row.
    pub rows: u32,
}

/// Measures `text`: lines split on `\n`, `columns` is the maximum display
/// width over all lines, `rows` the line count.
pub fn measure_text(text: &str) -> TextExtent {
    let mut columns: u32 = 0;
    let mut rows: u32 = 0;
    for line in text.split('\n') {
        rows += 1;
        let width: usize = line.chars().map(char_display_width).sum();
        columns = columns.max(width as u32);
    }
    trace!("measured text block as {}x{}", columns, rows);
    TextExtent { columns, rows }
}

/// Overlay pixel width for `columns` text columns:
/// `columns * char_width + 2 * (border + internal_border)`.
pub fn pixel_width(columns: u32, char_width_px: u16, border_px: u16, internal_border_px: u16) -> u32 {
    columns * char_width_px as u32 + 2 * (border_px as u32 + internal_border_px as u32)
}

/// Overlay pixel height for `rows` text rows:
/// `rows * (char_height + line_spacing) + 2 * (border + internal_border)`.
pub fn pixel_height(
    rows: u32,
    char_height_px: u16,
    line_spacing_px: u16,
    border_px: u16,
    internal_border_px: u16,
) -> u32 {
    rows * (char_height_px as u32 + line_spacing_px as u32)
        + 2 * (border_px as u32 + internal_border_px as u32)
}

/// Composes `pixel_width`/`pixel_height` into an `OverlaySize`.
pub fn to_pixels(
    extent: TextExtent,
    char_width_px: u16,
    char_height_px: u16,
    line_spacing_px: u16,
    border_px: u16,
    internal_border_px: u16,
) -> OverlaySize {
    OverlaySize {
        width_px: pixel_width(extent.columns, char_width_px, border_px, internal_border_px),
        height_px: pixel_height(
            extent.rows,
            char_height_px,
            line_spacing_px,
            border_px,
            internal_border_px,
        ),
    }
}
