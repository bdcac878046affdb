// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Transform: transform tracking for 2D drawing contexts.
//!
//! Immediate-mode 2D contexts (such as the HTML canvas) apply a current
//! transform to everything they draw but do not offer a way to map points
//! back through it. This crate provides [`TransformTracker`], a wrapper that
//! implements the same [`DrawingContext`] capability as the context it wraps
//! and keeps a shadow copy of the transform in sync with every call:
//!
//! - `scale`, `rotate`, `translate` and `transform` compose onto the shadow
//!   matrix in canvas order (the operation applies before the existing
//!   transform).
//! - `set_transform` replaces it.
//! - `save`/`restore` push and pop a [`TransformStack`].
//! - [`TransformTracker::to_image_coordinates`] applies the inverse of the
//!   current matrix, so pointer positions can be mapped into image space
//!   regardless of the current pan and zoom.
//!
//! The tracker never changes what the wrapped context draws.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use vista_context_ref::RecordingContext;
//! use vista_transform::{DrawingContext, TransformTracker};
//!
//! let mut tracker = TransformTracker::new(RecordingContext::new((800.0, 600.0).into()));
//! tracker.scale(0.5, 0.5);
//! tracker.translate(Vec2::new(-100.0, 0.0));
//!
//! // Pixel (0, 0) on the surface shows image pixel (100, 0).
//! let image = tracker.to_image_coordinates(Point::ORIGIN).unwrap();
//! assert_eq!(image, Point::new(100.0, 0.0));
//!
//! // The wrapped context saw exactly the same transform.
//! assert_eq!(tracker.inner().current_transform(), tracker.current_transform());
//! ```
//!
//! ## Underflow
//!
//! A `restore` without a matching `save` is a programming error. By default
//! it panics in debug builds and is logged and ignored in release builds; see
//! [`UnderflowHandling`]. [`TransformTracker::try_restore`] reports it as
//! [`TransformError::EmptyStack`] instead.
//!
//! This crate is `no_std`.

#![no_std]

mod context;
mod error;
mod stack;
mod tracker;

pub use context::{DrawingContext, Surface};
pub use error::TransformError;
pub use stack::{TransformStack, UnderflowHandling};
pub use tracker::TransformTracker;
