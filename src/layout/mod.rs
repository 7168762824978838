//! Workspace layout: panel geometry, resizing, and layout selection.
//!
//! Sub-modules:
//! - [`bounds`]   : `PanelBounds`/`DividerRect` and handle hit-testing
//! - [`resize`]   : pixel-delta to weight conversion with minimum-width clamping
//! - [`drag`]     : drag sessions with per-frame coalescing of pointer moves
//! - [`selector`] : drawer vs. grid layout selection

pub mod bounds;
pub mod drag;
pub mod resize;
pub mod selector;

pub use bounds::{DividerRect, PanelBounds, boundary_at, layout_panels, panel_area_width};
pub use drag::{DragController, DragSession};
pub use resize::{pixel_widths, resize_panels};
pub use selector::{LayoutGeometry, LayoutMode, LayoutSelector, grid_template};
