//! Default values for panel geometry and the layout breakpoint.

use crate::layout_constants::{
    DEFAULT_PANEL_WIDTHS, DIVIDER_HIT_WIDTH_PX, DRAWER_BREAKPOINT_PX, MIN_PANEL_WIDTH_PX,
    RESIZE_HANDLE_WIDTH_PX,
};

pub fn min_panel_width_px() -> f64 {
    MIN_PANEL_WIDTH_PX
}

pub fn default_panel_widths() -> [f64; 3] {
    DEFAULT_PANEL_WIDTHS // tree : content : side
}

pub fn drawer_breakpoint_px() -> f64 {
    DRAWER_BREAKPOINT_PX
}

pub fn resize_handle_width_px() -> f64 {
    RESIZE_HANDLE_WIDTH_PX
}

pub fn divider_hit_width_px() -> f64 {
    DIVIDER_HIT_WIDTH_PX
}
