// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Zoom multiplier applied per zoom click.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.1;

/// Viewport configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportConfig {
    /// Zoom multiplier per click; `factor = scale_factor ^ clicks`.
    pub scale_factor: f64,
}

impl ViewportConfig {
    /// Returns the configuration with `scale_factor` replaced.
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.scale_factor.is_finite() && self.scale_factor > 1.0
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}
