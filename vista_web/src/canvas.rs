// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`DrawingContext`] over an HTML canvas.

use core::fmt;

use kurbo::{Affine, Point, Rect, Size, Vec2};
use vista_transform::{DrawingContext, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::input;

/// A drawing context and surface backed by a `<canvas>` element's 2D context.
///
/// Canvas calls that can throw (transform updates with non-finite values,
/// drawing an image that is not decoded) are ignored; the canvas keeps its
/// previous state in that case.
pub struct WebCanvasContext {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl fmt::Debug for WebCanvasContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebCanvasContext")
            .field("width", &self.canvas.width())
            .field("height", &self.canvas.height())
            .finish_non_exhaustive()
    }
}

impl WebCanvasContext {
    /// Wraps `canvas`, acquiring its 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// The underlying canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawingContext for WebCanvasContext {
    type Image = HtmlImageElement;

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        let _ = self.ctx.scale(sx, sy);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.ctx.rotate(angle);
    }

    fn translate(&mut self, delta: Vec2) {
        let _ = self.ctx.translate(delta.x, delta.y);
    }

    fn transform(&mut self, transform: Affine) {
        let [a, b, c, d, e, f] = transform.as_coeffs();
        let _ = self.ctx.transform(a, b, c, d, e, f);
    }

    fn set_transform(&mut self, transform: Affine) {
        let [a, b, c, d, e, f] = transform.as_coeffs();
        let _ = self.ctx.set_transform(a, b, c, d, e, f);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn draw_image(&mut self, image: &Self::Image, origin: Point) {
        if let Err(err) = self
            .ctx
            .draw_image_with_html_image_element(image, origin.x, origin.y)
        {
            log::warn!("draw_image failed: {err:?}");
        }
    }
}

impl Surface for WebCanvasContext {
    fn size(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn set_height(&mut self, height: f64) {
        self.canvas.set_height(input::canvas_height(height));
    }
}
