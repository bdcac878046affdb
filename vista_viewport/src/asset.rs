// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image load lifecycle.
//!
//! Loading is sans-IO: the viewport hands out a [`LoadRequest`] and the host
//! reports back through [`Viewport::complete_load`](crate::Viewport::complete_load)
//! with the request's [`LoadTicket`]. A completion whose ticket is not the one
//! currently awaited is stale and gets dropped.

use kurbo::Size;

use crate::{ImageSource, LoadError};

/// Identity of one load request.
///
/// The generation increases with every request made by a viewport, so two
/// requests for the same index are still distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    /// Index of the requested source within the image set.
    pub index: usize,
    /// Per-viewport request counter.
    pub generation: u64,
}

/// A load the host is asked to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    /// Ticket to hand back with the result.
    pub ticket: LoadTicket,
    /// Source to load.
    pub source: ImageSource,
}

/// Coarse load state, without the image payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadState {
    /// Nothing loaded or requested.
    Unloaded,
    /// A load was requested and has not completed.
    Loading,
    /// Dimensions are known and drawing is permitted.
    Loaded,
}

/// The currently displayed raster and where it is in its lifecycle.
#[derive(Clone, Debug, Default)]
pub enum ImageAsset<I> {
    /// Nothing loaded or requested.
    #[default]
    Unloaded,
    /// Waiting for the host to finish `ticket`.
    Loading {
        /// The awaited request.
        ticket: LoadTicket,
    },
    /// Loaded and drawable.
    Loaded {
        /// The request that produced this image.
        ticket: LoadTicket,
        /// Host image handle.
        image: I,
        /// Natural pixel size.
        natural_size: Size,
    },
}

impl<I> ImageAsset<I> {
    /// Coarse state.
    #[must_use]
    pub fn state(&self) -> LoadState {
        match self {
            Self::Unloaded => LoadState::Unloaded,
            Self::Loading { .. } => LoadState::Loading,
            Self::Loaded { .. } => LoadState::Loaded,
        }
    }

    /// Whether drawing is permitted.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Natural size, once loaded.
    #[must_use]
    pub fn natural_size(&self) -> Option<Size> {
        match self {
            Self::Loaded { natural_size, .. } => Some(*natural_size),
            _ => None,
        }
    }

    /// The loaded image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&I> {
        match self {
            Self::Loaded { image, .. } => Some(image),
            _ => None,
        }
    }

    /// The ticket currently awaited, if a load is in flight.
    #[must_use]
    pub fn pending(&self) -> Option<LoadTicket> {
        match self {
            Self::Loading { ticket } => Some(*ticket),
            _ => None,
        }
    }
}

/// What [`Viewport::complete_load`](crate::Viewport::complete_load) did with a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The image became active and was drawn.
    Applied,
    /// The result belonged to a superseded request and was dropped.
    Stale,
    /// The awaited load failed; the viewport is unloaded.
    Failed(LoadError),
}
