//! Label text truncation
//!
//! Labels wider than their configured width are cut to the longest character
//! prefix that fits and suffixed with an ellipsis. The prefix length is found
//! with a binary search, so a label costs `O(log n)` measurements.

use crate::error::Result;
use crate::surface::DrawingSurface;

/// Suffix appended to truncated labels
pub const ELLIPSIS: &str = "...";

/// Fits `text` into `max_width` under the surface's current font
///
/// - Text that already fits is returned unchanged.
/// - Otherwise the longest prefix whose width is at most `max_width` is kept
///   and [`ELLIPSIS`] appended. At least one character is always kept.
/// - Text that ends in the ellipsis and whose stem fits is treated as already
///   truncated, so truncating a result again returns it unchanged.
///
/// Prefixes are cut on `char` boundaries. The ellipsis itself is not counted
/// against `max_width`.
///
/// # Errors
///
/// Returns an error if the surface fails to measure text.
///
/// # Example
///
/// ```
/// use forcegraph_canvas::recording::RecordingSurface;
/// use forcegraph_canvas::text::truncate_text;
///
/// // 10px font, 5 units per character
/// let surface = RecordingSurface::new();
/// assert_eq!(truncate_text(&surface, "short", 80.0)?, "short");
/// assert_eq!(truncate_text(&surface, "a rather long label", 40.0)?, "a rather...");
/// # Ok::<(), forcegraph_canvas::RenderError>(())
/// ```
pub fn truncate_text<S: DrawingSurface + ?Sized>(
    surface: &S,
    text: &str,
    max_width: f64,
) -> Result<String> {
    if text.is_empty() || surface.measure_text(text)? <= max_width {
        return Ok(text.to_string());
    }

    if let Some(stem) = text.strip_suffix(ELLIPSIS).filter(|stem| !stem.is_empty()) {
        if surface.measure_text(stem)? <= max_width {
            return Ok(text.to_string());
        }
    }

    // Byte offset at which the prefix of `k` characters ends
    let ends: Vec<usize> = std::iter::once(0)
        .chain(text.char_indices().map(|(i, c)| i + c.len_utf8()))
        .collect();
    let prefix = |k: usize| ends.get(k).and_then(|&end| text.get(..end)).unwrap_or(text);

    // Invariant: prefix(fits) fits and prefix(overflows) does not.
    let mut fits = 0;
    let mut overflows = ends.len() - 1;
    while overflows - fits > 1 {
        let mid = fits + (overflows - fits) / 2;
        if surface.measure_text(prefix(mid))? <= max_width {
            fits = mid;
        } else {
            overflows = mid;
        }
    }

    Ok(format!("{}{ELLIPSIS}", prefix(fits.max(1))))
}
