//! Pixel-space rectangles for panels and the resize handles between them.

use crate::state::PanelWidths;

/// Bounds of a panel in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelBounds {
    /// X position in pixels from left edge of the workspace
    pub x: f64,
    /// Y position in pixels from top of the workspace
    pub y: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl PanelBounds {
    /// Create new bounds
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside these bounds
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// A resize handle between two adjacent panels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerRect {
    /// Boundary index: 0 between panels 0/1, 1 between panels 1/2
    pub boundary: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DividerRect {
    /// Check if a point is inside the handle (with optional padding for easier grabbing)
    pub fn contains(&self, px: f64, py: f64, padding: f64) -> bool {
        px >= self.x - padding
            && px < self.x + self.width + padding
            && py >= self.y - padding
            && py < self.y + self.height + padding
    }
}

/// Width left for the panels once the handles are taken out
pub fn panel_area_width(container: &PanelBounds, handle_width: f64) -> f64 {
    (container.width - handle_width * 2.0).max(0.0)
}

/// Lay out the three panels and two handles across `container`.
///
/// Panels split the space left after the handles according to their weights;
/// handles sit between them at a fixed width.
pub fn layout_panels(
    widths: &PanelWidths,
    container: PanelBounds,
    handle_width: f64,
) -> ([PanelBounds; 3], [DividerRect; 2]) {
    let area = panel_area_width(&container, handle_width);
    let fractions = widths.fractions();

    let mut panels = [PanelBounds::default(); 3];
    let mut dividers = [DividerRect {
        boundary: 0,
        x: 0.0,
        y: container.y,
        width: handle_width,
        height: container.height,
    }; 2];

    let mut x = container.x;
    for (i, fraction) in fractions.iter().enumerate() {
        let width = area * fraction;
        panels[i] = PanelBounds::new(x, container.y, width, container.height);
        x += width;
        if let Some(divider) = dividers.get_mut(i) {
            divider.boundary = i;
            divider.x = x;
            x += handle_width;
        }
    }

    (panels, dividers)
}

/// Find the boundary whose handle is under the pointer
pub fn boundary_at(dividers: &[DividerRect], x: f64, y: f64, padding: f64) -> Option<usize> {
    dividers
        .iter()
        .find(|divider| divider.contains(x, y, padding))
        .map(|divider| divider.boundary)
}
