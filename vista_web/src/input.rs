// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between DOM values and viewer types.

use kurbo::{Point, Rect, Size};
use vista_controller::{DeltaMode, Modifiers};

/// Maps a DOM `WheelEvent.deltaMode` value.
///
/// Unknown values are treated as pixels.
pub(crate) fn delta_mode(dom: u32) -> DeltaMode {
    match dom {
        1 => DeltaMode::Line,
        2 => DeltaMode::Page,
        _ => DeltaMode::Pixel,
    }
}

/// Collects modifier key flags.
pub(crate) fn modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    modifiers.set(Modifiers::SHIFT, shift);
    modifiers.set(Modifiers::CTRL, ctrl);
    modifiers.set(Modifiers::ALT, alt);
    modifiers.set(Modifiers::META, meta);
    modifiers
}

/// Maps a client (CSS pixel) position into surface coordinates.
///
/// `bounds` is the element's client rectangle; the surface may be laid out at
/// a different size than its backing store, in which case the position is
/// scaled accordingly.
pub(crate) fn surface_point(client: Point, bounds: Rect, surface: Size) -> Point {
    let local = client - bounds.origin();
    let sx = if bounds.width() > 0.0 {
        surface.width / bounds.width()
    } else {
        1.0
    };
    let sy = if bounds.height() > 0.0 {
        surface.height / bounds.height()
    } else {
        1.0
    };
    Point::new(local.x * sx, local.y * sy)
}

/// Converts a logical height into a canvas `height` attribute value.
///
/// Fractions are truncated, so an image fitted to the canvas width always
/// covers the whole canvas height.
#[allow(
    clippy::cast_possible_truncation,
    reason = "canvas heights are small non-negative integers"
)]
pub(crate) fn canvas_height(height: f64) -> u32 {
    if height.is_finite() {
        height.floor().max(0.0) as u32
    } else {
        0
    }
}
