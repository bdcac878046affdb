// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing capability wrapped by [`TransformTracker`](crate::TransformTracker).

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// A 2D immediate-mode drawing context.
///
/// This mirrors the subset of an HTML canvas 2D context that an image viewer
/// needs: a current transform manipulated by `save`/`restore` and the
/// incremental mutators, plus clearing and image drawing in the current
/// user space.
///
/// All mutators follow the canvas convention: the new transform is the old
/// transform composed with the operation, so the operation applies to points
/// *before* the existing transform does.
pub trait DrawingContext {
    /// Image type accepted by [`DrawingContext::draw_image`].
    type Image;

    /// Pushes the current drawing state.
    fn save(&mut self);

    /// Pops the most recently saved drawing state.
    fn restore(&mut self);

    /// Scales user space by `sx` horizontally and `sy` vertically.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Rotates user space clockwise by `angle` radians.
    fn rotate(&mut self, angle: f64);

    /// Translates user space by `delta`.
    fn translate(&mut self, delta: Vec2);

    /// Multiplies the current transform by `transform`.
    fn transform(&mut self, transform: Affine);

    /// Replaces the current transform with `transform`.
    fn set_transform(&mut self, transform: Affine);

    /// Clears `rect`, given in user space, to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Draws `image` at its natural size with its top-left corner at `origin`.
    fn draw_image(&mut self, image: &Self::Image, origin: Point);
}

/// The element-level box a drawing context renders into.
pub trait Surface {
    /// Returns the logical size of the drawing surface.
    fn size(&self) -> Size;

    /// Resizes the surface so that its logical height becomes `height`.
    ///
    /// Hosts may reset their drawing state as a side effect (an HTML canvas
    /// does); callers re-establish their transform afterwards.
    fn set_height(&mut self, height: f64);
}

impl<C: DrawingContext + ?Sized> DrawingContext for &mut C {
    type Image = C::Image;

    fn save(&mut self) {
        (**self).save();
    }

    fn restore(&mut self) {
        (**self).restore();
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        (**self).scale(sx, sy);
    }

    fn rotate(&mut self, angle: f64) {
        (**self).rotate(angle);
    }

    fn translate(&mut self, delta: Vec2) {
        (**self).translate(delta);
    }

    fn transform(&mut self, transform: Affine) {
        (**self).transform(transform);
    }

    fn set_transform(&mut self, transform: Affine) {
        (**self).set_transform(transform);
    }

    fn clear_rect(&mut self, rect: Rect) {
        (**self).clear_rect(rect);
    }

    fn draw_image(&mut self, image: &Self::Image, origin: Point) {
        (**self).draw_image(image, origin);
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn set_height(&mut self, height: f64) {
        (**self).set_height(height);
    }
}
