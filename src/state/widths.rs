//! `PanelWidths`: relative weights of the three workspace panels.

use repo_shell_config::layout_constants::DEFAULT_PANEL_WIDTHS;

/// Number of panels in the grid layout
pub const PANEL_COUNT: usize = 3;

/// Relative-fraction weights for the [tree, content, side] panels.
///
/// Only ratios matter; the sum is arbitrary. Every value is finite and
/// strictly positive, which [`PanelWidths::new`] enforces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelWidths([f64; PANEL_COUNT]);

impl PanelWidths {
    /// Validate and wrap a weight vector
    pub fn new(weights: [f64; PANEL_COUNT]) -> Option<Self> {
        if weights.iter().all(|w| w.is_finite() && *w > 0.0) {
            Some(Self(weights))
        } else {
            None
        }
    }

    /// Validate a weight slice of any length (e.g. from a persisted record)
    pub fn from_slice(weights: &[f64]) -> Option<Self> {
        let weights: [f64; PANEL_COUNT] = weights.try_into().ok()?;
        Self::new(weights)
    }

    pub fn weights(&self) -> [f64; PANEL_COUNT] {
        self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Each weight as a fraction of the total (sums to 1.0)
    pub fn fractions(&self) -> [f64; PANEL_COUNT] {
        let sum = self.sum();
        self.0.map(|w| w / sum)
    }

    /// True when both vectors describe the same ratio
    pub fn same_ratio(&self, other: &PanelWidths, tolerance: f64) -> bool {
        self.fractions()
            .iter()
            .zip(other.fractions().iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Default for PanelWidths {
    fn default() -> Self {
        Self(DEFAULT_PANEL_WIDTHS)
    }
}
