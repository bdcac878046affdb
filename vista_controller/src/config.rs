// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::DeltaMode;

/// Controller configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    /// Screen distance the pointer must exceed before a press becomes a drag.
    ///
    /// With `0.0` any move event starts a drag.
    pub drag_threshold: f64,
    /// Wheel pixels per zoom click.
    pub pixels_per_click: f64,
    /// Wheel lines per zoom click.
    pub lines_per_click: f64,
    /// Wheel pages per zoom click.
    pub pages_per_click: f64,
}

impl ControllerConfig {
    /// Returns the configuration with `drag_threshold` replaced.
    #[must_use]
    pub fn with_drag_threshold(mut self, drag_threshold: f64) -> Self {
        self.drag_threshold = drag_threshold;
        self
    }

    /// Returns the configuration with the pixel wheel unit replaced.
    #[must_use]
    pub fn with_pixels_per_click(mut self, pixels_per_click: f64) -> Self {
        self.pixels_per_click = pixels_per_click;
        self
    }

    /// Converts a wheel delta into zoom clicks; scrolling up zooms in.
    ///
    /// Returns `0.0` for unusable input.
    #[must_use]
    pub fn wheel_clicks(&self, delta_y: f64, mode: DeltaMode) -> f64 {
        let unit = match mode {
            DeltaMode::Pixel => self.pixels_per_click,
            DeltaMode::Line => self.lines_per_click,
            DeltaMode::Page => self.pages_per_click,
        };
        let clicks = -delta_y / unit;
        if clicks.is_finite() { clicks } else { 0.0 }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 0.0,
            pixels_per_click: 40.0,
            lines_per_click: 1.0,
            pages_per_click: 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ControllerConfig;
    use crate::DeltaMode;

    #[test]
    fn wheel_clicks_per_mode() {
        let config = ControllerConfig::default();
        assert_eq!(config.wheel_clicks(-120.0, DeltaMode::Pixel), 3.0);
        assert_eq!(config.wheel_clicks(3.0, DeltaMode::Line), -3.0);
        assert_eq!(config.wheel_clicks(1.0, DeltaMode::Page), -4.0);
    }

    #[test]
    fn unusable_wheel_input_is_zero() {
        let config = ControllerConfig::default().with_pixels_per_click(0.0);
        assert_eq!(config.wheel_clicks(0.0, DeltaMode::Pixel), 0.0);
        assert_eq!(
            ControllerConfig::default().wheel_clicks(f64::NAN, DeltaMode::Line),
            0.0
        );
    }
}
