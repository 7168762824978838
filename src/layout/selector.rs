//! Layout selection between the drawer layout and the resizable grid.
//!
//! Narrow viewports stack the panels and hide the file tree behind a drawer
//! toggle; wide viewports show all three panels in a grid with two resize
//! boundaries. Switching modes never touches the panel weights.

use crate::state::PanelWidths;

/// Which rendering path is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Column-stacked layout, file tree in a drawer, resizing inert
    Drawer,
    /// Three-column grid with two resize boundaries
    Grid,
}

/// Geometry handed to the rendering side
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutGeometry {
    /// CSS-style grid track list, e.g. `"1fr 4px 2fr 4px 1fr"`
    Grid { template: String },
    Drawer { open: bool },
}

/// Tracks the viewport width and the drawer toggle
#[derive(Debug, Clone)]
pub struct LayoutSelector {
    breakpoint_px: f64,
    mode: LayoutMode,
    drawer_open: bool,
}

impl LayoutSelector {
    /// Start in grid mode until the first viewport measurement arrives
    pub fn new(breakpoint_px: f64) -> Self {
        Self {
            breakpoint_px,
            mode: LayoutMode::Grid,
            drawer_open: false,
        }
    }

    /// The narrow-viewport predicate
    pub fn is_narrow(&self, viewport_width: f64) -> bool {
        viewport_width < self.breakpoint_px
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn breakpoint_px(&self) -> f64 {
        self.breakpoint_px
    }

    /// Re-evaluate the mode for a new viewport width.
    ///
    /// Returns true if the mode changed. Leaving drawer mode closes the drawer.
    pub fn on_viewport_resize(&mut self, viewport_width: f64) -> bool {
        let mode = if self.is_narrow(viewport_width) {
            LayoutMode::Drawer
        } else {
            LayoutMode::Grid
        };
        if mode == self.mode {
            return false;
        }
        log::info!(
            "Layout mode {:?} -> {:?} at viewport width {:.0}px",
            self.mode,
            mode,
            viewport_width
        );
        self.mode = mode;
        self.drawer_open = false;
        true
    }

    /// Whether the resize boundaries accept drags
    pub fn resize_enabled(&self) -> bool {
        self.mode == LayoutMode::Grid
    }

    pub fn drawer_open(&self) -> bool {
        self.mode == LayoutMode::Drawer && self.drawer_open
    }

    /// Flip the drawer; no effect in grid mode. Returns the new open state.
    pub fn toggle_drawer(&mut self) -> bool {
        self.set_drawer_open(!self.drawer_open)
    }

    pub fn set_drawer_open(&mut self, open: bool) -> bool {
        if self.mode == LayoutMode::Drawer {
            self.drawer_open = open;
        }
        self.drawer_open()
    }

    pub fn geometry(&self, widths: &PanelWidths, handle_width_px: f64) -> LayoutGeometry {
        match self.mode {
            LayoutMode::Grid => LayoutGeometry::Grid {
                template: grid_template(widths, handle_width_px),
            },
            LayoutMode::Drawer => LayoutGeometry::Drawer {
                open: self.drawer_open,
            },
        }
    }
}

/// Grid track list for the three panels separated by fixed-width handles
pub fn grid_template(widths: &PanelWidths, handle_width_px: f64) -> String {
    let [tree, content, side] = widths.weights();
    format!(
        "{}fr {}px {}fr {}px {}fr",
        format_track(tree),
        format_track(handle_width_px),
        format_track(content),
        format_track(handle_width_px),
        format_track(side)
    )
}

/// Up to four decimals, trailing zeros dropped
pub(crate) fn format_track(value: f64) -> String {
    let text = format!("{:.4}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
