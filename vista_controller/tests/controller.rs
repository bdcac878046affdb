// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `ViewerController` driving a viewport over a recording context.

use kurbo::{Affine, Point, Size};
use vista_context_ref::{RecordingContext, RefImage};
use vista_controller::{
    ControllerConfig, DeltaMode, Direction, Modifiers, PointerEvent, Response, ViewerController,
    WheelEvent,
};
use vista_viewport::{ImageSource, PointerPhase, Viewport, ViewportConfig};

fn viewport(n: usize) -> Viewport<RecordingContext> {
    let sources: Vec<_> = (0..n)
        .map(|i| ImageSource::new(format!("{i}.png"), format!("Image {i}")))
        .collect();
    Viewport::new(
        RecordingContext::new(Size::new(800.0, 150.0)),
        sources,
        ViewportConfig::default(),
    )
    .expect("valid viewport")
}

/// A viewport showing a 1600x1200 image fitted to an 800-wide surface.
fn loaded(n: usize) -> Viewport<RecordingContext> {
    let mut vp = viewport(n);
    let request = vp.load_active_image();
    let size = Size::new(1600.0, 1200.0);
    vp.complete_load(request.ticket, Ok((RefImage::new(0, size), size)));
    vp
}

fn at(x: f64, y: f64) -> PointerEvent {
    PointerEvent::new(Point::new(x, y))
}

fn wheel(x: f64, y: f64, delta_y: f64) -> WheelEvent {
    WheelEvent {
        position: Point::new(x, y),
        delta_y,
        mode: DeltaMode::Pixel,
    }
}

fn assert_close(a: Point, b: Point, what: &str) {
    assert!(
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6,
        "{what}: {a:?} != {b:?}"
    );
}

fn scale_of(vp: &Viewport<RecordingContext>) -> f64 {
    vp.transform().as_coeffs()[0]
}

#[test]
fn click_zooms_in_about_pointer() {
    let mut vp = loaded(1);
    let mut ctl = ViewerController::default();
    let p = Point::new(200.0, 100.0);
    let before = vp.to_image_coordinates(p).unwrap();

    assert_eq!(ctl.pointer_down(&mut vp, at(p.x, p.y)), Response::Pressed);
    assert_eq!(ctl.pointer_up(&mut vp, at(p.x, p.y)), Response::Zoomed);

    assert!((scale_of(&vp) - 0.55).abs() < 1e-9);
    assert_close(vp.to_image_coordinates(p).unwrap(), before, "anchor moved");
    assert_eq!(vp.interaction().phase(), PointerPhase::Idle);
}

#[test]
fn shift_click_zooms_out() {
    let mut vp = loaded(1);
    let mut ctl = ViewerController::default();
    ctl.pointer_down(&mut vp, at(400.0, 300.0));
    ctl.pointer_up(&mut vp, at(400.0, 300.0));
    ctl.pointer_down(&mut vp, at(400.0, 300.0));
    ctl.pointer_up(&mut vp, at(400.0, 300.0));
    assert!((scale_of(&vp) - 0.605).abs() < 1e-9);

    let shift = at(400.0, 300.0).with_modifiers(Modifiers::SHIFT);
    ctl.pointer_down(&mut vp, shift);
    assert_eq!(ctl.pointer_up(&mut vp, shift), Response::Zoomed);
    assert!((scale_of(&vp) - 0.55).abs() < 1e-9);
}

#[test]
fn shift_click_at_fit_keeps_transform() {
    let mut vp = loaded(1);
    let mut ctl = ViewerController::default();
    let shift = at(400.0, 300.0).with_modifiers(Modifiers::SHIFT);
    ctl.pointer_down(&mut vp, shift);
    ctl.pointer_up(&mut vp, shift);
    assert_eq!(vp.transform(), Affine::scale(0.5));
}

#[test]
fn drag_keeps_grabbed_point_under_pointer() {
    let mut vp = loaded(1);
    let mut ctl = ViewerController::default();
    ctl.pointer_down(&mut vp, at(400.0, 300.0));
    ctl.pointer_up(&mut vp, at(400.0, 300.0));
    let scale = scale_of(&vp);

    ctl.pointer_down(&mut vp, at(100.0, 100.0));
    let grabbed = vp.interaction().drag_anchor().unwrap();

    for (x, y) in [(150.0, 120.0), (90.0, 240.0), (300.0, 10.0)] {
        assert_eq!(ctl.pointer_move(&mut vp, at(x, y)), Response::Panned);
        assert_eq!(vp.interaction().phase(), PointerPhase::Dragging);
        assert_close(
            vp.to_image_coordinates(Point::new(x, y)).unwrap(),
            grabbed,
            "grabbed point drifted",
        );
    }

    assert_eq!(ctl.pointer_up(&mut vp, at(300.0, 10.0)), Response::Released);
    assert!((scale_of(&vp) - scale).abs() < 1e-12, "release zoomed");
    assert_eq!(
        vp.tracker().inner().current_transform(),
        vp.transform(),
        "context and tracker disagree"
    );
}

#[test]
fn movement_below_threshold_is_still_a_click() {
    let mut vp = loaded(1);
    let mut ctl = ViewerController::new(ControllerConfig::default().with_drag_threshold(5.0));

    ctl.pointer_down(&mut vp, at(100.0, 100.0));
    assert_eq!(ctl.pointer_move(&mut vp, at(102.0, 101.0)), Response::Ignored);
    assert_eq!(vp.interaction().phase(), PointerPhase::Pressed);
    assert_eq!(ctl.pointer_up(&mut vp, at(102.0, 101.0)), Response::Zoomed);

    ctl.pointer_down(&mut vp, at(100.0, 100.0));
    assert_eq!(ctl.pointer_move(&mut vp, at(110.0, 100.0)), Response::Panned);
    assert_eq!(ctl.pointer_up(&mut vp, at(110.0, 100.0)), Response::Released);
}

#[test]
fn any_movement_drags_by_default() {
    let mut vp = loaded(1);
    let mut ctl = ViewerController::default();
    ctl.pointer_down(&mut vp, at(100.0, 100.0));
    assert_eq!(ctl.pointer_move(&mut vp, at(100.5, 100.0)), Response::Panned);
    assert_eq!(ctl.pointer_up(&mut vp, at(100.5, 100.0)), Response::Released);
    assert!((scale_of(&vp) - 0.5).abs() < 1e-12);
}

#[test]
fn move_without_press_is_ignored() {
    let mut vp = loaded(1);
    let mut ctl = ViewerController::default();
    let before = vp.transform();
    assert_eq!(ctl.pointer_move(&mut vp, at(10.0, 10.0)), Response::Ignored);
    assert_eq!(vp.interaction().pointer(), Point::new(10.0, 10.0));
    assert_eq!(vp.transform(), before);
}

#[test]
fn press_before_load_is_ignored() {
    let mut vp = viewport(1);
    let mut ctl = ViewerController::default();
    assert_eq!(ctl.pointer_down(&mut vp, at(1.0, 1.0)), Response::Ignored);
    assert_eq!(ctl.pointer_up(&mut vp, at(1.0, 1.0)), Response::Ignored);
}

#[test]
fn wheel_zooms_by_normalized_delta() {
    let mut vp = loaded(1);
    let mut ctl = ViewerController::default();
    let p = Point::new(640.0, 480.0);
    let before = vp.to_image_coordinates(p).unwrap();

    assert_eq!(ctl.wheel(&mut vp, wheel(p.x, p.y, -120.0)), Response::Zoomed);
    assert!((scale_of(&vp) - 0.5 * 1.1_f64.powi(3)).abs() < 1e-9);
    assert_close(vp.to_image_coordinates(p).unwrap(), before, "anchor moved");

    let line = WheelEvent {
        mode: DeltaMode::Line,
        ..wheel(p.x, p.y, 3.0)
    };
    assert_eq!(ctl.wheel(&mut vp, line), Response::Zoomed);
    assert!((scale_of(&vp) - 0.5).abs() < 1e-9);
}

#[test]
fn zero_wheel_delta_is_ignored() {
    let mut vp = loaded(1);
    let mut ctl = ViewerController::default();
    assert_eq!(ctl.wheel(&mut vp, wheel(1.0, 1.0, 0.0)), Response::Ignored);
    assert_eq!(vp.transform(), Affine::scale(0.5));
}

#[test]
fn wheel_out_at_fit_keeps_transform() {
    let mut vp = loaded(1);
    let mut ctl = ViewerController::default();
    assert_eq!(ctl.wheel(&mut vp, wheel(400.0, 300.0, 120.0)), Response::Zoomed);
    assert_eq!(vp.transform(), Affine::scale(0.5));
}

#[test]
fn navigate_requests_neighbouring_images() {
    let mut vp = loaded(3);
    let mut ctl = ViewerController::default();

    let Response::Load(next) = ctl.navigate(&mut vp, Direction::Next) else {
        panic!("expected a load request");
    };
    assert_eq!(next.ticket.index, 1);
    assert_eq!(next.source.uri, "1.png");

    let Response::Load(back) = ctl.navigate(&mut vp, Direction::Previous) else {
        panic!("expected a load request");
    };
    assert_eq!(back.ticket.index, 0);
    let Response::Load(wrapped) = ctl.navigate(&mut vp, Direction::Previous) else {
        panic!("expected a load request");
    };
    assert_eq!(wrapped.ticket.index, 2);
}

#[test]
fn navigate_single_image_is_ignored() {
    let mut vp = loaded(1);
    let mut ctl = ViewerController::default();
    assert_eq!(ctl.navigate(&mut vp, Direction::Next), Response::Ignored);
    assert!(vp.asset().is_loaded());
}

#[test]
fn cancel_ends_drag_without_click() {
    let mut vp = loaded(1);
    let mut ctl = ViewerController::default();

    ctl.pointer_down(&mut vp, at(100.0, 100.0));
    assert_eq!(ctl.pointer_cancel(&mut vp), Response::Released);
    assert_eq!(vp.interaction().phase(), PointerPhase::Idle);
    assert_eq!(ctl.pointer_up(&mut vp, at(100.0, 100.0)), Response::Ignored);
    assert_eq!(vp.transform(), Affine::scale(0.5));
    assert_eq!(ctl.pointer_cancel(&mut vp), Response::Ignored);
}
