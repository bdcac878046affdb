// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer interaction state owned by a viewport.

use kurbo::Point;

/// Phase of the current pointer-down sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerPhase {
    /// No button held.
    #[default]
    Idle,
    /// Button held, no movement yet.
    Pressed,
    /// Button held and the pointer has moved.
    Dragging,
}

/// Pointer state for click/drag disambiguation.
///
/// The drag anchor is stored in image space and stays fixed for the whole
/// pointer-down sequence, so panning by `pointer_in_image - anchor` keeps the
/// grabbed image point under the pointer without accumulating drift.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    /// Last known pointer position in surface coordinates.
    pointer: Point,
    /// Where the button went down, in surface coordinates.
    press: Option<Point>,
    /// Grabbed point in image coordinates.
    drag_anchor: Option<Point>,
    /// Whether this sequence moved.
    moved: bool,
}

impl InteractionState {
    /// Starts a pointer-down sequence at `screen`, grabbing `anchor` in image space.
    pub fn press(&mut self, screen: Point, anchor: Point) {
        self.pointer = screen;
        self.press = Some(screen);
        self.drag_anchor = Some(anchor);
        self.moved = false;
    }

    /// Records the latest pointer position.
    pub fn set_pointer(&mut self, screen: Point) {
        self.pointer = screen;
    }

    /// Flags the current sequence as a drag.
    pub fn mark_moved(&mut self) {
        if self.drag_anchor.is_some() {
            self.moved = true;
        }
    }

    /// Ends the sequence, returning the phase it ended in.
    pub fn release(&mut self) -> PointerPhase {
        let phase = self.phase();
        self.press = None;
        self.drag_anchor = None;
        self.moved = false;
        phase
    }

    /// Clears everything except the last pointer position.
    pub fn reset(&mut self) {
        self.release();
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> PointerPhase {
        match (self.drag_anchor, self.moved) {
            (None, _) => PointerPhase::Idle,
            (Some(_), false) => PointerPhase::Pressed,
            (Some(_), true) => PointerPhase::Dragging,
        }
    }

    /// Last known pointer position in surface coordinates.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Press position in surface coordinates, while pressed.
    #[must_use]
    pub fn press_position(&self) -> Option<Point> {
        self.press
    }

    /// Grabbed image-space point, while pressed.
    #[must_use]
    pub fn drag_anchor(&self) -> Option<Point> {
        self.drag_anchor
    }

    /// Whether the current sequence has moved.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{InteractionState, PointerPhase};

    #[test]
    fn press_move_release_walks_the_phases() {
        let mut state = InteractionState::default();
        assert_eq!(state.phase(), PointerPhase::Idle);

        state.press(Point::new(10.0, 10.0), Point::new(20.0, 20.0));
        assert_eq!(state.phase(), PointerPhase::Pressed);
        assert_eq!(state.drag_anchor(), Some(Point::new(20.0, 20.0)));

        state.mark_moved();
        assert_eq!(state.phase(), PointerPhase::Dragging);

        assert_eq!(state.release(), PointerPhase::Dragging);
        assert_eq!(state.phase(), PointerPhase::Idle);
        assert_eq!(state.drag_anchor(), None);
    }

    #[test]
    fn moving_without_press_is_not_a_drag() {
        let mut state = InteractionState::default();
        state.set_pointer(Point::new(5.0, 5.0));
        state.mark_moved();
        assert!(!state.has_moved());
        assert_eq!(state.pointer(), Point::new(5.0, 5.0));
    }

    #[test]
    fn new_press_clears_moved_flag() {
        let mut state = InteractionState::default();
        state.press(Point::ORIGIN, Point::ORIGIN);
        state.mark_moved();
        state.press(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        assert_eq!(state.phase(), PointerPhase::Pressed);
        assert_eq!(state.press_position(), Some(Point::new(1.0, 1.0)));
    }
}
