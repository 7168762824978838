//! Default value functions for configuration.
//!
//! Each sub-module groups related free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `Config` fields.
//! Everything is re-exported from this module.

mod layout;
mod misc;

// ── Panel layout & resizing ────────────────────────────────────────────────
pub use layout::{
    default_panel_widths, divider_hit_width_px, drawer_breakpoint_px, min_panel_width_px,
    resize_handle_width_px,
};

// ── Everything else ────────────────────────────────────────────────────────
pub use misc::{github_api_base, transient_error_timeout_ms};
