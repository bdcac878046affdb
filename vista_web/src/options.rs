// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer configuration.

use serde::{Deserialize, Serialize};
use vista_controller::ControllerConfig;
use vista_viewport::ViewportConfig;

/// Everything [`Viewer::attach`](crate::Viewer::attach) can be configured with.
///
/// Deserializes from a partial JS object; missing fields keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Where the viewer's parts live in the container.
    pub selectors: MarkupSelectors,
    /// Zoom behavior.
    pub viewport: ViewportConfig,
    /// Input handling.
    pub controller: ControllerConfig,
}

/// CSS selectors locating the viewer's parts inside its container element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupSelectors {
    /// The drawing canvas. Created and appended to the container if absent.
    pub canvas: String,
    /// The caption link, rewritten on every image change.
    pub caption: String,
    /// The "previous image" trigger.
    pub previous: String,
    /// The "next image" trigger.
    pub next: String,
}

impl Default for MarkupSelectors {
    fn default() -> Self {
        Self {
            canvas: "canvas".into(),
            caption: ".vista-caption".into(),
            previous: ".vista-previous".into(),
            next: ".vista-next".into(),
        }
    }
}

impl MarkupSelectors {
    /// Returns the selectors with the canvas selector replaced.
    #[must_use]
    pub fn with_canvas(mut self, selector: impl Into<String>) -> Self {
        self.canvas = selector.into();
        self
    }

    /// Returns the selectors with the caption selector replaced.
    #[must_use]
    pub fn with_caption(mut self, selector: impl Into<String>) -> Self {
        self.caption = selector.into();
        self
    }

    /// Returns the selectors with both navigation trigger selectors replaced.
    #[must_use]
    pub fn with_triggers(
        mut self,
        previous: impl Into<String>,
        next: impl Into<String>,
    ) -> Self {
        self.previous = previous.into();
        self.next = next.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{MarkupSelectors, ViewerOptions};

    #[test]
    fn options_default_to_stock_markup_and_behavior() {
        let options = ViewerOptions::default();
        assert_eq!(options.selectors, MarkupSelectors::default());
        assert!((options.viewport.scale_factor - 1.1).abs() < 1e-12);
        assert!(options.controller.drag_threshold.abs() < 1e-12);
    }

    #[test]
    fn setters_replace_only_their_field() {
        let selectors = MarkupSelectors::default()
            .with_caption("#title")
            .with_triggers(".left", ".right");
        assert_eq!(selectors.canvas, "canvas");
        assert_eq!(selectors.caption, "#title");
        assert_eq!(selectors.previous, ".left");
        assert_eq!(selectors.next, ".right");
    }
}
