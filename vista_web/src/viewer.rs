// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM wiring for one viewer instance.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use kurbo::{Point, Rect, Size};
use vista_controller::{Direction, Response, ViewerController, WheelEvent};
use vista_viewport::{ImageSource, LoadError, LoadRequest, Viewport};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, HtmlAnchorElement, HtmlCanvasElement,
    HtmlElement, HtmlImageElement, MouseEvent,
};

use crate::{MarkupSelectors, ViewerOptions, WebCanvasContext, input};

/// Marks containers that already host a viewer.
const ATTACHED_ATTRIBUTE: &str = "data-vista-attached";

/// State shared between the viewer and its event listeners.
struct Shared {
    viewport: Viewport<WebCanvasContext>,
    controller: ViewerController,
    caption: Option<HtmlAnchorElement>,
    loader: Option<PendingLoad>,
}

impl Shared {
    fn show_caption(&self, source: &ImageSource) {
        let Some(link) = &self.caption else {
            return;
        };
        link.set_text_content(Some(&source.caption));
        link.set_href(&source.uri);
        link.set_download(source.file_name());
    }
}

/// An in-flight `<img>` load and the callbacks it reports through.
struct PendingLoad {
    image: HtmlImageElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

impl Drop for PendingLoad {
    fn drop(&mut self) {
        // The element may still fire after its callbacks are freed.
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

type Handle = Weak<RefCell<Shared>>;

/// Runs `f` on the shared state, unless the viewer is gone or busy.
fn with_shared<R>(handle: &Handle, f: impl FnOnce(&mut Shared) -> R) -> Option<R> {
    let shared = handle.upgrade()?;
    let Ok(mut state) = shared.try_borrow_mut() else {
        log::warn!("viewer state busy, event dropped");
        return None;
    };
    Some(f(&mut state))
}

fn js_error(message: impl Into<String>) -> JsValue {
    JsValue::from_str(&message.into())
}

/// Starts fetching `request` through a fresh `<img>` element.
///
/// Any previous in-flight load is abandoned; if it still completes, the
/// viewport rejects it as stale.
fn begin_load(state: &mut Shared, handle: &Handle, request: LoadRequest) -> Result<(), JsValue> {
    state.show_caption(&request.source);
    let image = HtmlImageElement::new()?;
    let ticket = request.ticket;

    let onload = {
        let handle = handle.clone();
        let image = image.clone();
        Closure::wrap(Box::new(move || {
            let size = Size::new(
                f64::from(image.natural_width()),
                f64::from(image.natural_height()),
            );
            with_shared(&handle, |state| {
                let outcome = state
                    .viewport
                    .complete_load(ticket, Ok((image.clone(), size)));
                log::debug!("load {ticket:?} finished: {outcome:?}");
            });
        }) as Box<dyn FnMut()>)
    };
    let onerror = {
        let handle = handle.clone();
        let uri = request.source.uri.clone();
        Closure::wrap(Box::new(move || {
            with_shared(&handle, |state| {
                state
                    .viewport
                    .complete_load(ticket, Err(LoadError::Failed(uri.clone())));
            });
        }) as Box<dyn FnMut()>)
    };

    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    image.set_src(&request.source.uri);
    state.loader = Some(PendingLoad {
        image,
        _onload: onload,
        _onerror: onerror,
    });
    Ok(())
}

/// Converts a DOM mouse-family event into surface coordinates.
fn pointer_event(
    canvas: &HtmlCanvasElement,
    event: &MouseEvent,
    surface: Size,
) -> vista_controller::PointerEvent {
    let bounds = canvas.get_bounding_client_rect();
    let bounds = Rect::new(
        bounds.left(),
        bounds.top(),
        bounds.right(),
        bounds.bottom(),
    );
    let client = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
    vista_controller::PointerEvent::new(input::surface_point(client, bounds, surface))
        .with_modifiers(input::modifiers(
            event.shift_key(),
            event.ctrl_key(),
            event.alt_key(),
            event.meta_key(),
        ))
}

/// An image viewer attached to a container element.
///
/// The viewer owns its DOM listeners; dropping it detaches them. Use
/// [`attach_viewer`](crate::attach_viewer) to keep a viewer alive for the
/// lifetime of the page.
pub struct Viewer {
    container: Element,
    shared: Rc<RefCell<Shared>>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Viewer");
        if let Ok(state) = self.shared.try_borrow() {
            s.field("viewport", &state.viewport);
        }
        s.field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Viewer {
    /// Attaches a viewer for `sources` to the element with id `container_id`,
    /// locating its parts with `selectors`.
    pub fn attach(
        container_id: &str,
        sources: Vec<ImageSource>,
        selectors: &MarkupSelectors,
    ) -> Result<Self, JsValue> {
        let options = ViewerOptions {
            selectors: selectors.clone(),
            ..ViewerOptions::default()
        };
        Self::attach_with(container_id, sources, &options)
    }

    /// Attaches a viewer with full control over its configuration.
    ///
    /// The canvas is created if the container has none, and is sized to the
    /// container's width. Navigation triggers are hidden for single-image
    /// sets. The first image starts loading immediately.
    pub fn attach_with(
        container_id: &str,
        sources: Vec<ImageSource>,
        options: &ViewerOptions,
    ) -> Result<Self, JsValue> {
        let selectors = &options.selectors;
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| js_error("no document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| js_error(format!("no element with id `{container_id}`")))?;
        if container.has_attribute(ATTACHED_ATTRIBUTE) {
            return Err(js_error(format!(
                "`{container_id}` already hosts a viewer"
            )));
        }

        let canvas = match container.query_selector(&selectors.canvas)? {
            Some(element) => element
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| js_error("canvas selector matched a non-canvas element"))?,
            None => {
                let canvas = document
                    .create_element("canvas")?
                    .dyn_into::<HtmlCanvasElement>()
                    .map_err(|_| js_error("created element is not a canvas"))?;
                container.append_child(&canvas)?;
                canvas
            }
        };
        let width = container.client_width();
        if width > 0 {
            canvas.set_width(width.unsigned_abs());
        }

        let caption = container
            .query_selector(&selectors.caption)?
            .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok());
        let previous = container.query_selector(&selectors.previous)?;
        let next = container.query_selector(&selectors.next)?;

        let viewport = Viewport::new(
            WebCanvasContext::new(canvas.clone())?,
            sources,
            options.viewport,
        )
        .map_err(|err| js_error(err.to_string()))?;
        let cyclable = viewport.is_cyclable();

        let mut viewer = Self {
            container: container.clone(),
            shared: Rc::new(RefCell::new(Shared {
                viewport,
                controller: ViewerController::new(options.controller),
                caption,
                loader: None,
            })),
            listeners: Vec::new(),
        };

        viewer.listen_pointer(&canvas)?;
        viewer.listen_wheel(&canvas)?;
        for (trigger, direction) in [(previous, Direction::Previous), (next, Direction::Next)] {
            let Some(trigger) = trigger else {
                continue;
            };
            if cyclable {
                viewer.listen_navigation(&trigger, direction)?;
            } else if let Some(trigger) = trigger.dyn_ref::<HtmlElement>() {
                trigger.set_hidden(true);
            }
        }
        container.set_attribute(ATTACHED_ATTRIBUTE, "")?;

        let handle = Rc::downgrade(&viewer.shared);
        {
            let mut state = viewer.shared.borrow_mut();
            let request = state.viewport.load_active_image();
            begin_load(&mut state, &handle, request)?;
        }
        log::info!("viewer attached to `{container_id}`");
        Ok(viewer)
    }

    /// The caption of the image currently shown or loading.
    #[must_use]
    pub fn caption(&self) -> String {
        self.shared.borrow().viewport.caption().to_owned()
    }

    /// Moves to the previous or next image, as the navigation triggers do.
    pub fn navigate(&self, direction: Direction) -> Result<(), JsValue> {
        let handle = Rc::downgrade(&self.shared);
        let mut state = self.shared.borrow_mut();
        let state = &mut *state;
        if let Response::Load(request) = state.controller.navigate(&mut state.viewport, direction) {
            begin_load(state, &handle, request)?;
        }
        Ok(())
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
        Ok(())
    }

    fn listen_pointer(&mut self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let handle = Rc::downgrade(&self.shared);

        let (h, c) = (handle.clone(), canvas.clone());
        self.listen(canvas, "pointerdown", true, move |event| {
            let Ok(event) = event.dyn_into::<web_sys::PointerEvent>() else {
                return;
            };
            if event.button() != 0 {
                return;
            }
            with_shared(&h, |state| {
                let input = pointer_event(&c, &event, state.viewport.surface_size());
                if state
                    .controller
                    .pointer_down(&mut state.viewport, input)
                    .is_handled()
                {
                    let _ = c.set_pointer_capture(event.pointer_id());
                }
            });
        })?;

        let (h, c) = (handle.clone(), canvas.clone());
        self.listen(canvas, "pointermove", true, move |event| {
            let Ok(event) = event.dyn_into::<web_sys::PointerEvent>() else {
                return;
            };
            with_shared(&h, |state| {
                let input = pointer_event(&c, &event, state.viewport.surface_size());
                state.controller.pointer_move(&mut state.viewport, input);
            });
        })?;

        let (h, c) = (handle.clone(), canvas.clone());
        self.listen(canvas, "pointerup", true, move |event| {
            let Ok(event) = event.dyn_into::<web_sys::PointerEvent>() else {
                return;
            };
            with_shared(&h, |state| {
                let input = pointer_event(&c, &event, state.viewport.surface_size());
                state.controller.pointer_up(&mut state.viewport, input);
            });
        })?;

        let h = handle;
        self.listen(canvas, "pointercancel", true, move |_| {
            with_shared(&h, |state| {
                state.controller.pointer_cancel(&mut state.viewport);
            });
        })
    }

    fn listen_wheel(&mut self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let handle = Rc::downgrade(&self.shared);
        let c = canvas.clone();
        // Non-passive so the page does not scroll while zooming.
        self.listen(canvas, "wheel", false, move |event| {
            let Ok(event) = event.dyn_into::<web_sys::WheelEvent>() else {
                return;
            };
            let handled = with_shared(&handle, |state| {
                let position = pointer_event(&c, &event, state.viewport.surface_size()).position;
                let input = WheelEvent {
                    position,
                    delta_y: event.delta_y(),
                    mode: input::delta_mode(event.delta_mode()),
                };
                state
                    .controller
                    .wheel(&mut state.viewport, input)
                    .is_handled()
            });
            if handled == Some(true) {
                event.prevent_default();
            }
        })
    }

    fn listen_navigation(&mut self, trigger: &Element, direction: Direction) -> Result<(), JsValue> {
        let handle = Rc::downgrade(&self.shared);
        self.listen(trigger, "click", false, move |event| {
            event.prevent_default();
            with_shared(&handle, |state| {
                if let Response::Load(request) =
                    state.controller.navigate(&mut state.viewport, direction)
                {
                    if let Err(err) = begin_load(state, &handle, request) {
                        log::error!("could not start image load: {err:?}");
                    }
                }
            });
        })
    }
}

impl Drop for Viewer {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.closure.as_ref().unchecked_ref(),
            );
        }
        let _ = self.container.remove_attribute(ATTACHED_ATTRIBUTE);
    }
}
