// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Controller: input handling for [`Viewport`](vista_viewport::Viewport)s.
//!
//! [`ViewerController`] turns host-independent [`PointerEvent`]s,
//! [`WheelEvent`]s and [`Direction`] triggers into the viewport's pan, zoom
//! and image-cycling primitives:
//!
//! | Input | Effect |
//! |-------|--------|
//! | press, release without moving | zoom in one step at the pointer |
//! | same with Shift held | zoom out one step |
//! | press, move | pan so the grabbed image point follows the pointer |
//! | wheel | zoom by the normalized wheel delta at the pointer |
//! | previous / next | cycle the image set and request the new image |
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use vista_context_ref::{RecordingContext, RefImage};
//! use vista_controller::{PointerEvent, Response, ViewerController};
//! use vista_viewport::{ImageSource, Viewport, ViewportConfig};
//!
//! let mut viewport = Viewport::new(
//!     RecordingContext::new(Size::new(800.0, 600.0)),
//!     [ImageSource::new("a.png", "A")],
//!     ViewportConfig::default(),
//! )
//! .unwrap();
//! let request = viewport.load_active_image();
//! let image = RefImage::new(0, Size::new(1600.0, 1200.0));
//! viewport.complete_load(request.ticket, Ok((image, image.size)));
//!
//! let mut controller = ViewerController::default();
//! let at = PointerEvent::new(Point::new(400.0, 300.0));
//! assert_eq!(controller.pointer_down(&mut viewport, at), Response::Pressed);
//! assert_eq!(controller.pointer_up(&mut viewport, at), Response::Zoomed);
//! ```

#![no_std]

mod config;
mod controller;
mod event;

pub use config::ControllerConfig;
pub use controller::{Response, ViewerController};
pub use event::{DeltaMode, Direction, Modifiers, PointerEvent, WheelEvent};
