// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vista_transform::{DrawingContext, Surface};
use vista_viewport::{LoadRequest, PointerPhase, Viewport, ViewportError};

use crate::{ControllerConfig, Direction, Modifiers, PointerEvent, WheelEvent};

/// What a handler did with an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Nothing happened; the host may run its default action.
    Ignored,
    /// A pointer-down sequence started.
    Pressed,
    /// The view was panned.
    Panned,
    /// The view was zoomed (or a zoom was attempted and refused at the floor).
    Zoomed,
    /// A drag ended.
    Released,
    /// The active image changed; the host must perform this load.
    Load(LoadRequest),
}

impl Response {
    /// Whether the event was consumed.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Translates raw input on one viewport's surface into pan, zoom and
/// image-cycling operations.
///
/// A pointer-down followed by an up without movement is a click and zooms in
/// one step about the pointer (out with Shift). Movement while pressed is a
/// drag: the image point grabbed at pointer-down is kept under the pointer.
/// Wheel events zoom directly and ignore the press state.
///
/// The controller does not own the viewport; each handler takes it by
/// mutable reference. Viewport errors are logged and reported as
/// [`Response::Ignored`], never propagated.
#[derive(Clone, Debug, Default)]
pub struct ViewerController {
    config: ControllerConfig,
}

impl ViewerController {
    /// Creates a controller.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        Self { config }
    }

    /// Controller configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Handles a primary button press.
    pub fn pointer_down<C: DrawingContext + Surface>(
        &mut self,
        viewport: &mut Viewport<C>,
        event: PointerEvent,
    ) -> Response {
        viewport.interaction_mut().set_pointer(event.position);
        if !viewport.asset().is_loaded() {
            return Response::Ignored;
        }
        match viewport.to_image_coordinates(event.position) {
            Ok(anchor) => {
                viewport.interaction_mut().press(event.position, anchor);
                Response::Pressed
            }
            Err(err) => ignore("press", &err),
        }
    }

    /// Handles pointer movement, panning while pressed.
    pub fn pointer_move<C: DrawingContext + Surface>(
        &mut self,
        viewport: &mut Viewport<C>,
        event: PointerEvent,
    ) -> Response {
        let interaction = viewport.interaction_mut();
        interaction.set_pointer(event.position);
        match interaction.phase() {
            PointerPhase::Idle => return Response::Ignored,
            PointerPhase::Pressed => {
                let press = interaction.press_position().unwrap_or(event.position);
                let threshold = self.config.drag_threshold;
                if threshold > 0.0 && (event.position - press).hypot() <= threshold {
                    return Response::Ignored;
                }
                interaction.mark_moved();
            }
            PointerPhase::Dragging => {}
        }
        let Some(anchor) = viewport.interaction().drag_anchor() else {
            return Response::Ignored;
        };
        let result = viewport
            .to_image_coordinates(event.position)
            .and_then(|grabbed| viewport.pan(grabbed - anchor));
        match result {
            Ok(()) => Response::Panned,
            Err(err) => ignore("drag", &err),
        }
    }

    /// Handles a primary button release; a release without movement is a click.
    pub fn pointer_up<C: DrawingContext + Surface>(
        &mut self,
        viewport: &mut Viewport<C>,
        event: PointerEvent,
    ) -> Response {
        viewport.interaction_mut().set_pointer(event.position);
        match viewport.interaction_mut().release() {
            PointerPhase::Idle => Response::Ignored,
            PointerPhase::Dragging => Response::Released,
            PointerPhase::Pressed => {
                let clicks = if event.modifiers.contains(Modifiers::SHIFT) {
                    -1.0
                } else {
                    1.0
                };
                match viewport.zoom(event.position, clicks) {
                    Ok(()) => Response::Zoomed,
                    Err(err) => ignore("click zoom", &err),
                }
            }
        }
    }

    /// Abandons the current pointer-down sequence without a click.
    pub fn pointer_cancel<C: DrawingContext + Surface>(
        &mut self,
        viewport: &mut Viewport<C>,
    ) -> Response {
        match viewport.interaction_mut().release() {
            PointerPhase::Idle => Response::Ignored,
            PointerPhase::Pressed | PointerPhase::Dragging => Response::Released,
        }
    }

    /// Handles a wheel event by zooming about the pointer.
    pub fn wheel<C: DrawingContext + Surface>(
        &mut self,
        viewport: &mut Viewport<C>,
        event: WheelEvent,
    ) -> Response {
        viewport.interaction_mut().set_pointer(event.position);
        let clicks = self.config.wheel_clicks(event.delta_y, event.mode);
        if clicks == 0.0 {
            return Response::Ignored;
        }
        match viewport.zoom(event.position, clicks) {
            Ok(()) => Response::Zoomed,
            Err(err) => ignore("wheel zoom", &err),
        }
    }

    /// Handles a previous/next trigger.
    pub fn navigate<C: DrawingContext + Surface>(
        &mut self,
        viewport: &mut Viewport<C>,
        direction: Direction,
    ) -> Response {
        match viewport.cycle_image(direction.step()) {
            Some(request) => Response::Load(request),
            None => Response::Ignored,
        }
    }
}

fn ignore(action: &str, err: &ViewportError) -> Response {
    log::warn!("{action} skipped: {err}");
    Response::Ignored
}
