// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Web: the browser host for Vista image viewers.
//!
//! On `wasm32` this crate provides:
//! - `WebCanvasContext`, a `DrawingContext` and `Surface` over an
//!   `HtmlCanvasElement`'s 2D context, drawing `HtmlImageElement`s.
//! - `Viewer`, which binds a viewport and controller to a container element:
//!   pointer and wheel listeners on the canvas, click listeners on the
//!   previous/next triggers, `<img>`-based loading and caption link updates.
//! - `attach_viewer`, the JavaScript entry point.
//!
//! ```js
//! import init, { attachViewer } from "./vista_web.js";
//! await init();
//! attachViewer("gallery", [
//!   { uri: "img/harbor.jpg", caption: "Harbor at dusk" },
//!   { uri: "img/market.jpg", caption: "Market street" },
//! ]);
//! ```
//!
//! The expected markup is a container holding an optional `<canvas>`, a
//! caption `<a>` and two navigation triggers; see [`MarkupSelectors`] for
//! the default selectors.
//!
//! On other targets only the configuration types are available.

mod options;

#[cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "only the wasm32 host converts DOM events")
)]
mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod viewer;

pub use options::{MarkupSelectors, ViewerOptions};

#[cfg(target_arch = "wasm32")]
pub use canvas::WebCanvasContext;
#[cfg(target_arch = "wasm32")]
pub use viewer::Viewer;

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;
    use std::sync::Once;

    use serde::Deserialize;
    use vista_viewport::ImageSource;
    use wasm_bindgen::prelude::*;

    use crate::{Viewer, ViewerOptions};

    thread_local! {
        static VIEWERS: RefCell<Vec<Viewer>> = const { RefCell::new(Vec::new()) };
    }

    fn init_logging() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            console_error_panic_hook::set_once();
            // Fails only if the page installed another logger first.
            let _ = console_log::init_with_level(log::Level::Info);
        });
    }

    fn parse_js_value_or_default<T>(value: Option<JsValue>) -> Result<T, JsValue>
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        match value {
            None => Ok(T::default()),
            Some(raw) if raw.is_undefined() || raw.is_null() => Ok(T::default()),
            Some(raw) => serde_wasm_bindgen::from_value(raw)
                .map_err(|err| JsValue::from_str(&format!("invalid options: {err}"))),
        }
    }

    /// Attaches a viewer to the element with id `container_id`.
    ///
    /// `sources` is an array of `{ uri, caption }` objects. `options` is an
    /// optional, possibly partial, [`ViewerOptions`] object. The viewer stays
    /// alive for the lifetime of the page.
    #[wasm_bindgen(js_name = attachViewer)]
    pub fn attach_viewer(
        container_id: &str,
        sources: JsValue,
        options: Option<JsValue>,
    ) -> Result<(), JsValue> {
        init_logging();
        let sources: Vec<ImageSource> = serde_wasm_bindgen::from_value(sources)
            .map_err(|err| JsValue::from_str(&format!("invalid image list: {err}")))?;
        let options: ViewerOptions = parse_js_value_or_default(options)?;
        let viewer = Viewer::attach_with(container_id, sources, &options)?;
        VIEWERS.with(|viewers| viewers.borrow_mut().push(viewer));
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use entry::attach_viewer;
