// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Context Reference: a recording [`DrawingContext`].
//!
//! [`RecordingContext`] behaves like a canvas 2D context for **state
//! tracing**:
//! - It does **not** rasterize to pixels.
//! - It maintains its own transform and save stack independently of any
//!   [`TransformTracker`](vista_transform::TransformTracker) wrapped around it,
//!   so tests can check that a tracker's shadow matrix matches what the
//!   context really saw.
//! - It records a [`Call`] together with the transform in effect for every
//!   operation, and implements [`Surface`] over a mutable logical size.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Size, Vec2};
use vista_transform::{DrawingContext, Surface};

/// Image handle accepted by [`RecordingContext`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefImage {
    /// Caller-chosen identifier.
    pub id: u32,
    /// Natural size in pixels.
    pub size: Size,
}

impl RefImage {
    /// Creates an image handle.
    #[must_use]
    pub fn new(id: u32, size: Size) -> Self {
        Self { id, size }
    }
}

/// Operation received by a [`RecordingContext`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Call {
    /// `save()`.
    Save,
    /// `restore()`; `underflow` is set when there was nothing to restore.
    Restore {
        /// Whether the call found the stack empty.
        underflow: bool,
    },
    /// `scale(sx, sy)`.
    Scale(f64, f64),
    /// `rotate(angle)`.
    Rotate(f64),
    /// `translate(delta)`.
    Translate(Vec2),
    /// `transform(affine)`.
    Transform(Affine),
    /// `set_transform(affine)`.
    SetTransform(Affine),
    /// `clear_rect(rect)`.
    ClearRect(Rect),
    /// `draw_image(image, origin)`.
    DrawImage {
        /// Identifier of the drawn image.
        id: u32,
        /// Destination origin in user space.
        origin: Point,
    },
    /// `set_height(height)` on the surface.
    SetHeight(f64),
}

/// A call and the transform in effect after it was applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    /// The call that was made.
    pub call: Call,
    /// Transform in effect after the call.
    pub transform: Affine,
}

/// Drawing context that records every call.
#[derive(Clone, Debug)]
pub struct RecordingContext {
    size: Size,
    transform: Affine,
    stack: Vec<Affine>,
    events: Vec<Event>,
}

impl RecordingContext {
    /// Creates a context over a surface of logical `size`.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            transform: Affine::IDENTITY,
            stack: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Current transform as seen by the context.
    #[must_use]
    pub fn current_transform(&self) -> Affine {
        self.transform
    }

    /// Depth of the context's own save stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Recorded events in call order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Recorded calls in call order, without transforms.
    pub fn calls(&self) -> impl Iterator<Item = Call> + '_ {
        self.events.iter().map(|e| e.call)
    }

    /// Recorded image draws with the transform each was drawn under.
    pub fn draws(&self) -> impl Iterator<Item = (u32, Affine)> + '_ {
        self.events.iter().filter_map(|e| match e.call {
            Call::DrawImage { id, .. } => Some((id, e.transform)),
            _ => None,
        })
    }

    /// Drops the event log, keeping transform, stack and size.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, call: Call) {
        self.events.push(Event {
            call,
            transform: self.transform,
        });
    }
}

impl DrawingContext for RecordingContext {
    type Image = RefImage;

    fn save(&mut self) {
        self.stack.push(self.transform);
        self.record(Call::Save);
    }

    fn restore(&mut self) {
        let popped = self.stack.pop();
        if let Some(transform) = popped {
            self.transform = transform;
        }
        self.record(Call::Restore {
            underflow: popped.is_none(),
        });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.transform = self.transform * Affine::scale_non_uniform(sx, sy);
        self.record(Call::Scale(sx, sy));
    }

    fn rotate(&mut self, angle: f64) {
        self.transform = self.transform * Affine::rotate(angle);
        self.record(Call::Rotate(angle));
    }

    fn translate(&mut self, delta: Vec2) {
        self.transform = self.transform * Affine::translate(delta);
        self.record(Call::Translate(delta));
    }

    fn transform(&mut self, transform: Affine) {
        self.transform = self.transform * transform;
        self.record(Call::Transform(transform));
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.record(Call::SetTransform(transform));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.record(Call::ClearRect(rect));
    }

    fn draw_image(&mut self, image: &RefImage, origin: Point) {
        self.record(Call::DrawImage {
            id: image.id,
            origin,
        });
    }
}

impl Surface for RecordingContext {
    fn size(&self) -> Size {
        self.size
    }

    fn set_height(&mut self, height: f64) {
        // Resizing a canvas resets its drawing state.
        self.size.height = height;
        self.transform = Affine::IDENTITY;
        self.stack.clear();
        self.record(Call::SetHeight(height));
    }
}
