// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Viewport: a pan/zoom view of one raster image at a time.
//!
//! A [`Viewport`] owns a drawing context wrapped in a
//! [`TransformTracker`](vista_transform::TransformTracker), an [`ImageSet`] of
//! captioned sources, the active [`ImageAsset`] and the pointer
//! [`InteractionState`]. It provides the three interaction primitives:
//!
//! - [`Viewport::pan`]: translate in image space and redraw.
//! - [`Viewport::zoom`]: zoom about a surface point, keeping the image point
//!   under it fixed, and never letting the image shrink below the surface.
//! - [`Viewport::cycle_image`]: move to the next/previous source and request it.
//!
//! It does **not** perform I/O. Loading is split into a request and a
//! completion so the host can fetch and decode however it likes:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use vista_context_ref::{RecordingContext, RefImage};
//! use vista_viewport::{ImageSource, LoadOutcome, Viewport, ViewportConfig};
//!
//! let context = RecordingContext::new(Size::new(800.0, 150.0));
//! let mut viewport = Viewport::new(
//!     context,
//!     [ImageSource::new("plots/loss.png", "Training loss")],
//!     ViewportConfig::default(),
//! )
//! .unwrap();
//!
//! let request = viewport.load_active_image();
//! // ... the host loads `request.source.uri` and reports back:
//! let image = RefImage::new(0, Size::new(1600.0, 1200.0));
//! let outcome = viewport.complete_load(request.ticket, Ok((image, image.size)));
//! assert_eq!(outcome, LoadOutcome::Applied);
//!
//! // Fitted to the 800 px surface width; the surface took the image's aspect ratio.
//! assert_eq!(viewport.surface_size(), Size::new(800.0, 600.0));
//!
//! let before = viewport.to_image_coordinates(Point::new(400.0, 300.0)).unwrap();
//! viewport.zoom(Point::new(400.0, 300.0), 1.0).unwrap();
//! let after = viewport.to_image_coordinates(Point::new(400.0, 300.0)).unwrap();
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! Results that arrive for a superseded request are dropped
//! ([`LoadOutcome::Stale`]), so quickly cycling through images can never
//! leave an older image on screen.
//!
//! ## Features
//!
//! - `std` (enabled by default): use the standard library's float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ImageSource`] and
//!   [`ViewportConfig`].

#![no_std]

extern crate alloc;

mod asset;
mod config;
mod error;
mod image_set;
mod interaction;
mod viewport;

pub use asset::{ImageAsset, LoadOutcome, LoadRequest, LoadState, LoadTicket};
pub use config::{DEFAULT_SCALE_FACTOR, ViewportConfig};
pub use error::{LoadError, ViewportError};
pub use image_set::{ImageSet, ImageSource};
pub use interaction::{InteractionState, PointerPhase};
pub use viewport::Viewport;
