//! Layout constants for the three-panel workspace.
//!
//! These constants are defined here so that both the root crate (`repo-shell`)
//! and the configuration defaults can reference the same values without
//! duplicating magic numbers.

use std::time::Duration;

/// Minimum rendered width of any panel after a resize, in pixels.
pub const MIN_PANEL_WIDTH_PX: f64 = 150.0;

/// Default relative weights for the [tree, content, side] panels (1:2:1).
pub const DEFAULT_PANEL_WIDTHS: [f64; 3] = [1.0, 2.0, 1.0];

/// Viewports narrower than this use the drawer layout.
pub const DRAWER_BREAKPOINT_PX: f64 = 768.0;

/// Visual width of a resize handle between two grid panels.
pub const RESIZE_HANDLE_WIDTH_PX: f64 = 4.0;

/// Width of the pointer hit area around a resize handle.
pub const DIVIDER_HIT_WIDTH_PX: f64 = 8.0;

/// How long a transient error stays on screen before it is dismissed.
pub const TRANSIENT_ERROR_TIMEOUT: Duration = Duration::from_millis(5000);

/// Key under which the session record is stored.
pub const SESSION_STORAGE_KEY: &str = "repo-shell.session";
