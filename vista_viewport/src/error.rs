// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use thiserror::Error;
use vista_transform::TransformError;

/// Errors reported by a [`Viewport`](crate::Viewport).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ViewportError {
    /// A viewport needs at least one image source.
    #[error("image set is empty")]
    EmptyImageSet,
    /// The zoom step must be a finite factor greater than one.
    #[error("invalid zoom scale factor {0}")]
    InvalidScaleFactor(f64),
    /// The operation needs a loaded image.
    #[error("no image is loaded")]
    NotLoaded,
    /// Coordinate mapping failed.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Reasons an image load did not produce a usable image.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The host could not fetch or decode the source.
    #[error("failed to load image: {0}")]
    Failed(String),
    /// The decoded image has no pixels along at least one axis.
    #[error("image has zero width or height")]
    EmptyImage,
}
