//! Core `Config` struct definition.

use crate::error::ConfigError;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration, stored as YAML.
///
/// Every field carries a serde default so that partial config files (or files
/// written by older versions) keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Panel Layout
    // ========================================================================
    /// Minimum rendered width of any panel after a drag, in pixels
    #[serde(default = "crate::defaults::min_panel_width_px")]
    pub min_panel_width_px: f64,

    /// Relative weights restored by "reset layout" (tree, content, side)
    #[serde(default = "crate::defaults::default_panel_widths")]
    pub default_panel_widths: [f64; 3],

    /// Viewport width below which the file tree moves into a drawer
    #[serde(default = "crate::defaults::drawer_breakpoint_px")]
    pub drawer_breakpoint_px: f64,

    /// Visual width of the resize handles between grid panels
    #[serde(default = "crate::defaults::resize_handle_width_px")]
    pub resize_handle_width_px: f64,

    /// Width of the drag hit area for resize handles (should be >= handle width)
    #[serde(default = "crate::defaults::divider_hit_width_px")]
    pub divider_hit_width_px: f64,

    // ========================================================================
    // Notifications
    // ========================================================================
    /// How long transient errors stay visible, in milliseconds
    #[serde(default = "crate::defaults::transient_error_timeout_ms")]
    pub transient_error_timeout_ms: u64,

    // ========================================================================
    // Repository Access
    // ========================================================================
    /// Base URL of the GitHub REST API
    #[serde(default = "crate::defaults::github_api_base")]
    pub github_api_base: String,

    // ========================================================================
    // Session State
    // ========================================================================
    /// Directory holding the persisted session record.
    /// `None` uses `~/.config/repo-shell/state`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_directory: Option<String>,

    // ========================================================================
    // Debug Logging
    // ========================================================================
    /// Log level for debug log file output.
    /// Environment variable RUST_LOG and --log-level CLI flag take precedence.
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_panel_width_px: crate::defaults::min_panel_width_px(),
            default_panel_widths: crate::defaults::default_panel_widths(),
            drawer_breakpoint_px: crate::defaults::drawer_breakpoint_px(),
            resize_handle_width_px: crate::defaults::resize_handle_width_px(),
            divider_hit_width_px: crate::defaults::divider_hit_width_px(),
            transient_error_timeout_ms: crate::defaults::transient_error_timeout_ms(),
            github_api_base: crate::defaults::github_api_base(),
            state_directory: None,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Transient error timeout as a `Duration`
    pub fn transient_error_timeout(&self) -> Duration {
        Duration::from_millis(self.transient_error_timeout_ms)
    }

    /// Set the minimum panel width
    pub fn with_min_panel_width(mut self, px: f64) -> Self {
        self.min_panel_width_px = px;
        self
    }

    /// Set the drawer breakpoint
    pub fn with_drawer_breakpoint(mut self, px: f64) -> Self {
        self.drawer_breakpoint_px = px;
        self
    }

    /// Set the transient error timeout
    pub fn with_transient_error_timeout(mut self, timeout: Duration) -> Self {
        self.transient_error_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Check that geometry and timing values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Validation(format!(
                    "{name} must be a positive number, got {value}"
                )))
            }
        };
        positive("min_panel_width_px", self.min_panel_width_px)?;
        positive("drawer_breakpoint_px", self.drawer_breakpoint_px)?;
        positive("divider_hit_width_px", self.divider_hit_width_px)?;

        if !self.resize_handle_width_px.is_finite() || self.resize_handle_width_px < 0.0 {
            return Err(ConfigError::Validation(format!(
                "resize_handle_width_px must be zero or positive, got {}",
                self.resize_handle_width_px
            )));
        }
        if self
            .default_panel_widths
            .iter()
            .any(|w| !w.is_finite() || *w <= 0.0)
        {
            return Err(ConfigError::Validation(format!(
                "default_panel_widths must be three positive numbers, got {:?}",
                self.default_panel_widths
            )));
        }
        if self.transient_error_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "transient_error_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
