// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport: fitting, drawing, pan, anchored zoom and image cycling.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`
use kurbo::{Affine, Point, Rect, Size, Vec2};
use vista_transform::{DrawingContext, Surface, TransformTracker};

use crate::{
    ImageAsset, ImageSet, ImageSource, InteractionState, LoadError, LoadOutcome, LoadRequest,
    LoadTicket, ViewportConfig, ViewportError,
};

/// Relative slack when checking whether a zoom-out would leave the image
/// smaller than the surface.
const FIT_SLACK: f64 = 1e-9;

/// A pan/zoom view of one image from an [`ImageSet`].
///
/// The viewport owns its drawing context (wrapped in a [`TransformTracker`]),
/// its image set, the active [`ImageAsset`] and the pointer
/// [`InteractionState`]. All coordinate math goes through the tracker, so
/// interaction code works in image space regardless of the current view.
///
/// A freshly loaded image is fitted to the surface width: the surface is
/// resized to the image's aspect ratio and the transform becomes a uniform
/// scale of `surface_width / natural_width`. Zooming out is refused once the
/// image would no longer cover the surface.
pub struct Viewport<C: DrawingContext> {
    tracker: TransformTracker<C>,
    images: ImageSet,
    asset: ImageAsset<C::Image>,
    interaction: InteractionState,
    config: ViewportConfig,
    generation: u64,
    frame_transform: Option<Affine>,
}

impl<C: DrawingContext> fmt::Debug for Viewport<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("transform", &self.tracker.current_transform())
            .field("images", &self.images)
            .field("state", &self.asset.state())
            .field("interaction", &self.interaction)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<C: DrawingContext + Surface> Viewport<C> {
    /// Creates a viewport drawing into `context`, positioned at the first source.
    ///
    /// Nothing is loaded until [`Viewport::load_active_image`] is called.
    pub fn new(
        context: C,
        sources: impl IntoIterator<Item = ImageSource>,
        config: ViewportConfig,
    ) -> Result<Self, ViewportError> {
        if !config.is_valid() {
            return Err(ViewportError::InvalidScaleFactor(config.scale_factor));
        }
        Ok(Self {
            tracker: TransformTracker::new(context),
            images: ImageSet::new(sources)?,
            asset: ImageAsset::Unloaded,
            interaction: InteractionState::default(),
            config,
            generation: 0,
            frame_transform: None,
        })
    }

    /// Requests the source at the current index.
    ///
    /// Any load already in flight is superseded; its completion will be
    /// reported as [`LoadOutcome::Stale`].
    pub fn load_active_image(&mut self) -> LoadRequest {
        self.generation += 1;
        let ticket = LoadTicket {
            index: self.images.index(),
            generation: self.generation,
        };
        self.asset = ImageAsset::Loading { ticket };
        log::debug!(
            "loading image {} ({})",
            ticket.index,
            self.images.current().uri
        );
        LoadRequest {
            ticket,
            source: self.images.current().clone(),
        }
    }

    /// Delivers the result of a load started by [`Viewport::load_active_image`].
    ///
    /// On success the image is fitted to the surface width and drawn.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<(C::Image, Size), LoadError>,
    ) -> LoadOutcome {
        if self.asset.pending() != Some(ticket) {
            log::debug!(
                "dropping stale load of image {} (generation {})",
                ticket.index,
                ticket.generation
            );
            return LoadOutcome::Stale;
        }

        let (image, natural_size) = match result {
            Ok((_, size))
                if !(size.width.is_finite()
                    && size.height.is_finite()
                    && size.width > 0.0
                    && size.height > 0.0) =>
            {
                return self.fail_load(LoadError::EmptyImage);
            }
            Ok(loaded) => loaded,
            Err(err) => return self.fail_load(err),
        };

        self.fit_to_width(natural_size);
        self.asset = ImageAsset::Loaded {
            ticket,
            image,
            natural_size,
        };
        if let Err(err) = self.draw() {
            log::warn!("initial draw failed: {err}");
        }
        LoadOutcome::Applied
    }

    fn fail_load(&mut self, err: LoadError) -> LoadOutcome {
        log::warn!("{} ({}): {err}", self.images.current().uri, self.caption());
        self.asset = ImageAsset::Unloaded;
        LoadOutcome::Failed(err)
    }

    fn fit_to_width(&mut self, natural_size: Size) {
        let ratio = self.tracker.size().width / natural_size.width;
        self.tracker.set_height(natural_size.height * ratio);
        self.tracker.reset();
        self.tracker.scale(ratio, ratio);
    }

    /// Redraws the image under the current transform.
    ///
    /// Clears the part of the image plane that is visible on the surface,
    /// draws the whole image at the origin, and records the transform used
    /// as the frame snapshot.
    pub fn draw(&mut self) -> Result<(), ViewportError> {
        if !self.asset.is_loaded() {
            return Err(ViewportError::NotLoaded);
        }
        let visible = self.visible_image_rect()?;
        self.tracker.clear_rect(visible);
        if let ImageAsset::Loaded { image, .. } = &self.asset {
            self.tracker.draw_image(image, Point::ORIGIN);
        }
        self.frame_transform = Some(self.tracker.current_transform());
        Ok(())
    }

    /// Translates the view by `delta` in image space and redraws.
    pub fn pan(&mut self, delta: Vec2) -> Result<(), ViewportError> {
        if !self.asset.is_loaded() {
            return Err(ViewportError::NotLoaded);
        }
        log::trace!("pan by {delta:?}");
        self.tracker.translate(delta);
        self.draw()
    }

    /// Zooms by `scale_factor ^ clicks` about a surface point and redraws.
    ///
    /// The image point under `anchor` stays under it. Positive clicks zoom in.
    /// A zoom-out that would make the image narrower or shorter than the
    /// surface is refused, and the scale never drops below the fit-to-width
    /// scale, which also keeps it at or above the surface-to-image height
    /// ratio.
    pub fn zoom(&mut self, anchor: Point, clicks: f64) -> Result<(), ViewportError> {
        let natural = self.asset.natural_size().ok_or(ViewportError::NotLoaded)?;
        let surface = self.tracker.size();
        let pivot = self.tracker.to_image_coordinates(anchor)?.to_vec2();
        let floor = surface.width / natural.width;
        // A host that rounds the fitted height up must not raise the floor
        // above the uniform fit scale.
        let min_height = surface.height.min(natural.height * floor);

        let mut factor = self.config.scale_factor.powf(clicks);
        if !factor.is_finite() {
            factor = 1.0;
        }
        let [a, _, _, d, _, _] = self.tracker.current_transform().as_coeffs();
        let too_small = |extent: f64, limit: f64| extent < limit * (1.0 - FIT_SLACK);
        if too_small(a * factor * natural.width, surface.width)
            || too_small(d * factor * natural.height, min_height)
        {
            factor = 1.0;
        }

        if factor != 1.0 {
            log::trace!("zoom by {factor} about {pivot:?}");
            self.tracker.translate(pivot);
            self.tracker.scale(factor, factor);
            self.tracker.translate(-pivot);
            self.clamp_scale(floor);
        }
        self.draw()
    }

    /// Raises the diagonal scale components to `floor` if rounding left them
    /// just below it.
    ///
    /// Both components get the same floor, so a uniform scale stays uniform.
    fn clamp_scale(&mut self, floor: f64) {
        let [a, b, c, d, e, f] = self.tracker.current_transform().as_coeffs();
        if a < floor || d < floor {
            self.tracker
                .set_transform(Affine::new([a.max(floor), b, c, d.max(floor), e, f]));
        }
    }

    /// Moves to another image in the set and requests it.
    ///
    /// `direction` is usually `1` or `-1` and wraps around the set. The
    /// previous image's view is discarded; the new image gets a fresh
    /// fit-to-width transform once it loads. Returns `None` for single-image
    /// sets, which do not cycle.
    pub fn cycle_image(&mut self, direction: isize) -> Option<LoadRequest> {
        if !self.images.is_cyclable() {
            return None;
        }
        let index = self.images.cycle(direction);
        log::debug!("switching to image {index}");
        self.asset = ImageAsset::Unloaded;
        self.frame_transform = None;
        self.interaction.reset();
        self.tracker.reset();
        Some(self.load_active_image())
    }

    /// Maps a surface point into image space.
    pub fn to_image_coordinates(&self, screen: Point) -> Result<Point, ViewportError> {
        Ok(self.tracker.to_image_coordinates(screen)?)
    }

    /// The image-space rectangle currently visible on the surface.
    pub fn visible_image_rect(&self) -> Result<Rect, ViewportError> {
        let size = self.tracker.size();
        let p0 = self.tracker.to_image_coordinates(Point::ORIGIN)?;
        let p1 = self
            .tracker
            .to_image_coordinates(Point::new(size.width, size.height))?;
        Ok(Rect::from_points(p0, p1))
    }

    /// Logical size of the drawing surface.
    #[must_use]
    pub fn surface_size(&self) -> Size {
        self.tracker.size()
    }
}

impl<C: DrawingContext> Viewport<C> {
    /// The transform tracker and the context it wraps.
    #[must_use]
    pub fn tracker(&self) -> &TransformTracker<C> {
        &self.tracker
    }

    /// Current view transform (image space to surface space).
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.tracker.current_transform()
    }

    /// Transform used by the most recent draw, if anything was drawn since
    /// the current image loaded.
    #[must_use]
    pub fn frame_transform(&self) -> Option<Affine> {
        self.frame_transform
    }

    /// The image set.
    #[must_use]
    pub fn image_set(&self) -> &ImageSet {
        &self.images
    }

    /// The active image and its load state.
    #[must_use]
    pub fn asset(&self) -> &ImageAsset<C::Image> {
        &self.asset
    }

    /// Caption of the current source.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.images.current().caption
    }

    /// Whether previous/next navigation applies.
    #[must_use]
    pub fn is_cyclable(&self) -> bool {
        self.images.is_cyclable()
    }

    /// Pointer interaction state.
    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Pointer interaction state, mutably.
    pub fn interaction_mut(&mut self) -> &mut InteractionState {
        &mut self.interaction
    }

    /// Viewport configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }
}
