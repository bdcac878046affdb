// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::context::{DrawingContext, Surface};
use crate::stack::{TransformStack, UnderflowHandling};
use crate::TransformError;

/// A drawing context wrapper that keeps a shadow copy of the current transform.
///
/// Every transform-mutating call updates the shadow matrix and is then
/// forwarded unchanged to the wrapped context, so the tracked matrix is always
/// the one the context actually rendered with. `save`/`restore` maintain a
/// parallel [`TransformStack`].
///
/// The shadow matrix lets callers map pointer positions on the surface back
/// into image space with [`TransformTracker::to_image_coordinates`].
#[derive(Clone, Debug)]
pub struct TransformTracker<C> {
    inner: C,
    current: Affine,
    stack: TransformStack,
    underflow: UnderflowHandling,
}

impl<C: DrawingContext> TransformTracker<C> {
    /// Wraps `inner`, assuming it currently has the identity transform.
    pub fn new(inner: C) -> Self {
        Self::with_transform(inner, Affine::IDENTITY)
    }

    /// Wraps `inner`, whose transform is already `current`.
    pub fn with_transform(inner: C, current: Affine) -> Self {
        Self {
            inner,
            current,
            stack: TransformStack::new(),
            underflow: UnderflowHandling::default(),
        }
    }

    /// Sets how unmatched `restore` calls are handled.
    pub fn set_underflow_handling(&mut self, handling: UnderflowHandling) {
        self.underflow = handling;
    }

    /// Returns the configured underflow handling.
    #[must_use]
    pub fn underflow_handling(&self) -> UnderflowHandling {
        self.underflow
    }

    /// Returns the tracked transform.
    #[must_use]
    pub fn current_transform(&self) -> Affine {
        self.current
    }

    /// Number of outstanding `save` calls.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Pops the top snapshot, reporting underflow instead of handling it.
    ///
    /// On underflow nothing is forwarded to the wrapped context.
    pub fn try_restore(&mut self) -> Result<(), TransformError> {
        self.current = self.stack.pop()?;
        self.inner.restore();
        Ok(())
    }

    /// Returns the tracker to the identity transform with an empty stack.
    ///
    /// Used when the content is replaced and its previous view no longer
    /// applies.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.current = Affine::IDENTITY;
        self.inner.set_transform(Affine::IDENTITY);
    }

    /// Maps a surface point into image space using the inverse of the
    /// current transform.
    ///
    /// The inverse is recomputed on every call.
    pub fn to_image_coordinates(&self, screen: Point) -> Result<Point, TransformError> {
        let determinant = self.current.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(TransformError::SingularTransform { determinant });
        }
        let image = self.current.inverse() * screen;
        if !(image.x.is_finite() && image.y.is_finite()) {
            return Err(TransformError::SingularTransform { determinant });
        }
        Ok(image)
    }

    /// Maps an image-space point onto the surface.
    #[must_use]
    pub fn to_screen_coordinates(&self, image: Point) -> Point {
        self.current * image
    }

    /// Maps a surface rectangle into image space, returning the bounding box
    /// of its transformed corners.
    pub fn to_image_rect(&self, screen: Rect) -> Result<Rect, TransformError> {
        let p0 = self.to_image_coordinates(Point::new(screen.x0, screen.y0))?;
        let p1 = self.to_image_coordinates(Point::new(screen.x1, screen.y0))?;
        let p2 = self.to_image_coordinates(Point::new(screen.x0, screen.y1))?;
        let p3 = self.to_image_coordinates(Point::new(screen.x1, screen.y1))?;
        let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
        let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
        let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
        let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
        Ok(Rect::new(min_x, min_y, max_x, max_y))
    }

    /// Returns the wrapped context.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Returns the wrapped context mutably.
    ///
    /// Transform changes made directly on the returned context bypass the
    /// tracker and desynchronize it.
    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    /// Unwraps the tracker.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: DrawingContext> DrawingContext for TransformTracker<C> {
    type Image = C::Image;

    fn save(&mut self) {
        self.stack.push(self.current);
        self.inner.save();
    }

    fn restore(&mut self) {
        if let Err(err) = self.try_restore() {
            match self.underflow {
                UnderflowHandling::DebugAssert => {
                    debug_assert!(false, "restore without a matching save");
                    log::warn!("{err}; ignoring");
                }
                UnderflowHandling::Ignore => log::warn!("{err}; ignoring"),
            }
        }
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.current = self.current * Affine::scale_non_uniform(sx, sy);
        self.inner.scale(sx, sy);
    }

    fn rotate(&mut self, angle: f64) {
        self.current = self.current * Affine::rotate(angle);
        self.inner.rotate(angle);
    }

    fn translate(&mut self, delta: Vec2) {
        self.current = self.current * Affine::translate(delta);
        self.inner.translate(delta);
    }

    fn transform(&mut self, transform: Affine) {
        self.current = self.current * transform;
        self.inner.transform(transform);
    }

    fn set_transform(&mut self, transform: Affine) {
        self.current = transform;
        self.inner.set_transform(transform);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.inner.clear_rect(rect);
    }

    fn draw_image(&mut self, image: &Self::Image, origin: Point) {
        self.inner.draw_image(image, origin);
    }
}

impl<C: DrawingContext + Surface> Surface for TransformTracker<C> {
    fn size(&self) -> Size {
        self.inner.size()
    }

    fn set_height(&mut self, height: f64) {
        self.inner.set_height(height);
    }
}
