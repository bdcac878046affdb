// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `TransformTracker` wrapped around a recording context.
//!
//! These check that the shadow matrix and stack stay in lockstep with the
//! state the wrapped context actually holds.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use vista_context_ref::{Call, RecordingContext, RefImage};
use vista_transform::{DrawingContext, Surface, TransformTracker, UnderflowHandling};

fn tracker() -> TransformTracker<RecordingContext> {
    TransformTracker::new(RecordingContext::new(Size::new(800.0, 600.0)))
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn shadow_matches_context_after_every_mutation() {
    let mut t = tracker();
    t.scale(0.5, 0.5);
    assert_eq!(t.current_transform(), t.inner().current_transform());
    t.translate(Vec2::new(-120.0, 33.0));
    assert_eq!(t.current_transform(), t.inner().current_transform());
    t.rotate(0.25);
    assert_eq!(t.current_transform(), t.inner().current_transform());
    t.transform(Affine::new([1.0, 0.2, 0.0, 1.0, 4.0, 4.0]));
    assert_eq!(t.current_transform(), t.inner().current_transform());
    t.set_transform(Affine::scale(3.0));
    assert_eq!(t.current_transform(), t.inner().current_transform());
}

#[test]
fn calls_are_forwarded_unchanged_and_in_order() {
    let mut t = tracker();
    t.save();
    t.scale(2.0, 3.0);
    t.clear_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
    t.draw_image(&RefImage::new(1, Size::new(4.0, 4.0)), Point::ORIGIN);
    t.restore();

    let calls: Vec<Call> = t.inner().calls().collect();
    assert_eq!(
        calls,
        vec![
            Call::Save,
            Call::Scale(2.0, 3.0),
            Call::ClearRect(Rect::new(0.0, 0.0, 10.0, 10.0)),
            Call::DrawImage {
                id: 1,
                origin: Point::ORIGIN
            },
            Call::Restore { underflow: false },
        ]
    );
}

#[test]
fn nested_save_restore_returns_to_starting_depth() {
    let mut t = tracker();
    t.translate(Vec2::new(10.0, 10.0));
    let start = t.current_transform();

    t.save();
    t.scale(2.0, 2.0);
    t.save();
    t.rotate(1.0);
    assert_eq!(t.depth(), 2);
    t.restore();
    assert_eq!(
        t.current_transform(),
        Affine::translate((10.0, 10.0)) * Affine::scale(2.0)
    );
    t.restore();

    assert_eq!(t.depth(), 0);
    assert_eq!(t.inner().depth(), 0);
    assert_eq!(t.current_transform(), start);
    assert_eq!(t.inner().current_transform(), start);
}

#[test]
fn underflow_is_not_forwarded() {
    let mut t = tracker();
    t.set_underflow_handling(UnderflowHandling::Ignore);
    t.restore();
    assert!(t.inner().events().is_empty());
    assert_eq!(t.depth(), 0);
}

#[test]
fn round_trip_over_a_grid_of_points() {
    let mut t = tracker();
    t.scale(0.37, 0.37);
    t.translate(Vec2::new(-512.0, 140.5));
    t.rotate(-0.6);
    t.scale(1.1, 1.1);

    for ix in 0..=8 {
        for iy in 0..=6 {
            let screen = Point::new(f64::from(ix) * 100.0, f64::from(iy) * 100.0);
            let image = t.to_image_coordinates(screen).expect("invertible");
            assert!(
                close(t.to_screen_coordinates(image), screen),
                "round trip failed at {screen:?}"
            );
        }
    }
}

#[test]
fn surface_is_forwarded() {
    let mut t = tracker();
    assert_eq!(t.size(), Size::new(800.0, 600.0));
    t.set_height(450.0);
    assert_eq!(t.size(), Size::new(800.0, 450.0));
}
