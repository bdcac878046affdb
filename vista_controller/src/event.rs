// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-independent input events.

use kurbo::Point;

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Windows.
        const META  = 0b0000_1000;
    }
}

/// A pointer event in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position relative to the surface's top-left corner.
    pub position: Point,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Creates an event with no modifiers.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns the event with `modifiers` set.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Unit of a wheel delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DeltaMode {
    /// Pixels.
    #[default]
    Pixel,
    /// Lines.
    Line,
    /// Pages.
    Page,
}

/// A wheel event in surface coordinates.
///
/// Positive `delta_y` scrolls down, which zooms out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Pointer position relative to the surface's top-left corner.
    pub position: Point,
    /// Vertical scroll amount.
    pub delta_y: f64,
    /// Unit of `delta_y`.
    pub mode: DeltaMode,
}

/// Navigation direction within an image set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Previous image.
    Previous,
    /// Next image.
    Next,
}

impl Direction {
    /// Index step for this direction.
    #[must_use]
    pub fn step(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}
