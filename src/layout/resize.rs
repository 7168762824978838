//! Panel resize engine.
//!
//! Converts a pointer drag across one of the two panel boundaries into new
//! relative weights. Weights are turned into pixel widths, the delta is moved
//! from one side of the boundary to the other, the pair is clamped so neither
//! side drops below the minimum, and the result is turned back into weights
//! with the starting weight sum.

use crate::state::PanelWidths;

/// Number of draggable boundaries in the grid layout
pub const BOUNDARY_COUNT: usize = 2;

/// Absolute pixel width of each panel for the given container width
pub fn pixel_widths(widths: &PanelWidths, total_px: f64) -> [f64; 3] {
    widths.fractions().map(|fraction| fraction * total_px)
}

/// Apply a drag of `delta_px` to `boundary` (0 = between panels 0/1,
/// 1 = between panels 1/2).
///
/// Returns `None` when the resize is a no-op: unmeasured or invalid
/// container width, non-finite delta, unknown boundary, or a panel pair
/// too narrow to honor `min_px` on both sides.
pub fn resize_panels(
    widths: &PanelWidths,
    boundary: usize,
    delta_px: f64,
    total_px: f64,
    min_px: f64,
) -> Option<PanelWidths> {
    if !total_px.is_finite() || total_px <= 0.0 || !delta_px.is_finite() {
        return None;
    }
    if boundary >= BOUNDARY_COUNT || !min_px.is_finite() || min_px < 0.0 {
        return None;
    }

    let mut pixels = pixel_widths(widths, total_px);
    let (left, right) = (boundary, boundary + 1);
    let pair = pixels[left] + pixels[right];
    if pair < min_px * 2.0 {
        log::debug!(
            "Resize ignored: panels {}/{} span {:.1}px, below twice the {:.1}px minimum",
            left,
            right,
            pair,
            min_px
        );
        return None;
    }

    // Clamping the left side into [min, pair - min] hands any shortfall to the
    // right side, so the pair (and the container) keeps its exact width.
    let new_left = (pixels[left] + delta_px).clamp(min_px, pair - min_px);
    pixels[left] = new_left;
    pixels[right] = pair - new_left;

    let sum = widths.sum();
    let weights = pixels.map(|px| px / total_px * sum);
    PanelWidths::new(weights)
}
