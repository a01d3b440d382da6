// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! A rotary control.

use tracing::trace_span;
use vello::Scene;
use vello::kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::controls::{Control, ControlCore, Grab, clamp_value};
use crate::core::{Context, CursorIcon, Element, Limits, RectExt};
use crate::theme::{DIAL_START_DEGREES, DIAL_SWEEP_DEGREES};

/// A dial, made of a static body (usually a [`Knob`](crate::elements::Knob)) and an
/// indicator rotated about the body's center to show the value.
///
/// The indicator is expected to point straight down when drawn unrotated, like
/// [`Pointer`](crate::elements::Pointer) does. The value sweeps clockwise: 0.0 sits
/// 30° clockwise from straight down, and 1.0 sits 300° further.
///
/// Pressing anywhere on the body jumps the value to the pressed angle, and dragging
/// follows the pointer's angle around the center.
pub struct Dial<I = Box<dyn Element>, B = Box<dyn Element>> {
    core: ControlCore,
    indicator: I,
    body: B,
}

impl<I, B> std::fmt::Debug for Dial<I, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dial")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

/// The indicator's angle for `value`, in degrees clockwise from straight down.
pub(crate) fn value_to_degrees(value: f64) -> f64 {
    DIAL_START_DEGREES + value * DIAL_SWEEP_DEGREES
}

/// The value for an indicator at `degrees` clockwise from straight down, unclamped.
fn degrees_to_value(degrees: f64) -> f64 {
    (degrees.rem_euclid(360.) - DIAL_START_DEGREES) / DIAL_SWEEP_DEGREES
}

// --- MARK: BUILDERS ---
impl<I: Element + 'static, B: Element + 'static> Dial<I, B> {
    /// Create a dial from its indicator, its body and an initial value.
    ///
    /// The value is clamped to `[0, 1]`.
    pub fn new(indicator: I, body: B, value: f64) -> Self {
        Self {
            core: ControlCore::new(value),
            indicator,
            body,
        }
    }

    /// Builder-style method to attach the change callback.
    pub fn with_on_change(mut self, on_change: impl FnMut(f64) + 'static) -> Self {
        self.core.set_on_change(on_change);
        self
    }

    /// The dial's body.
    pub fn body(&self) -> &B {
        &self.body
    }

    /// The dial's indicator.
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// The indicator's angle at the current value, in degrees clockwise from straight down.
    pub fn degrees(&self) -> f64 {
        value_to_degrees(self.value())
    }
}

// --- MARK: IMPL CONTROL ---
impl<I: Element + 'static, B: Element + 'static> Control for Dial<I, B> {
    fn core(&self) -> &ControlCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ControlCore {
        &mut self.core
    }

    fn limits(&self, ctx: &Context<'_>) -> Limits {
        Limits::layered([self.body.limits(ctx), self.indicator.limits(ctx)])
    }

    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene) {
        let _span = trace_span!("Dial::draw", id = self.id().trace()).entered();
        self.body.draw(ctx, scene);

        let bounds = self.indicator_bounds(ctx);
        let mut indicator_scene = Scene::new();
        self.indicator
            .draw(&ctx.with_bounds(bounds), &mut indicator_scene);
        // kurbo rotations are clockwise on screen, since y points down.
        let rotation = Affine::rotate_about(self.degrees().to_radians(), bounds.center());
        scene.append(&indicator_scene, Some(rotation));
    }

    /// The indicator doesn't move; its bounds are its size, centered in the dial.
    fn indicator_bounds(&self, ctx: &Context<'_>) -> Rect {
        let bounds = ctx.bounds;
        let size = self.indicator.limits(ctx).max;
        let size = Size::new(
            size.width.min(bounds.width()),
            size.height.min(bounds.height()),
        );
        Rect::from_origin_size(bounds.origin(), size).center_in(bounds)
    }

    fn compute_value(&self, ctx: &Context<'_>, p: Point) -> f64 {
        let v: Vec2 = p - ctx.bounds.center();
        if v.hypot2() == 0. {
            return self.value();
        }
        // Clockwise from straight down: down is (0, 1), left is (-1, 0).
        let degrees = (-v.x).atan2(v.y).to_degrees();
        clamp_value(degrees_to_value(degrees), self.value())
    }

    fn grab(&self, ctx: &Context<'_>, p: Point) -> Grab {
        // Angles are taken from the center, so a grab offset would skew them.
        if self.body.hit_test(ctx, p) {
            Grab::Track
        } else {
            Grab::Miss
        }
    }

    fn cursor(&self, ctx: &Context<'_>, p: Point) -> CursorIcon {
        if self.is_tracking() {
            CursorIcon::Grabbing
        } else if self.body.hit_test(ctx, p) {
            CursorIcon::Grab
        } else {
            CursorIcon::Default
        }
    }
}

// --- MARK: TESTS ---
#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use assert_matches::assert_matches;
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::controls::TrackingOutcome;
    use crate::elements::{Knob, Pointer, RadialMarks};

    const BOUNDS: Rect = Rect::new(0., 0., 100., 100.);
    const CENTER: Point = Point::new(50., 50.);

    fn dial(value: f64) -> Dial<Pointer, Knob> {
        Dial::new(Pointer::new(100.), Knob::new(100.), value)
    }

    fn at_degrees(degrees: f64, radius: f64) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        CENTER + Vec2::new(-sin, cos) * radius
    }

    #[test]
    fn sweep_endpoints() {
        assert_eq!(value_to_degrees(0.), 30.);
        assert_eq!(value_to_degrees(1.), 330.);
        assert_eq!(value_to_degrees(0.5), 180.);
        assert_eq!(dial(0.5).degrees(), 180.);
    }

    #[test]
    fn angle_mapping() {
        let dial = dial(0.);
        let ctx = Context::detached().with_bounds(BOUNDS);
        // Straight up is the middle of the sweep.
        assert_approx_eq!(
            f64,
            dial.compute_value(&ctx, Point::new(50., 10.)),
            0.5,
            epsilon = 1e-9
        );
        // Left is 90° clockwise from down.
        assert_approx_eq!(
            f64,
            dial.compute_value(&ctx, Point::new(10., 50.)),
            0.2,
            epsilon = 1e-9
        );
        assert_approx_eq!(
            f64,
            dial.compute_value(&ctx, Point::new(90., 50.)),
            0.8,
            epsilon = 1e-9
        );
        // Distance from the center doesn't matter.
        assert_approx_eq!(
            f64,
            dial.compute_value(&ctx, Point::new(50., -400.)),
            0.5,
            epsilon = 1e-9
        );
    }

    #[test]
    fn dead_zone_saturates() {
        let dial = dial(0.5);
        let ctx = Context::detached().with_bounds(BOUNDS);
        assert_eq!(dial.compute_value(&ctx, at_degrees(10., 30.)), 0.);
        assert_eq!(dial.compute_value(&ctx, at_degrees(350., 30.)), 1.);
        // Straight down is in the dead zone too; it reads as 0.0.
        assert_eq!(dial.compute_value(&ctx, Point::new(50., 90.)), 0.);
    }

    #[test]
    fn center_holds_value() {
        let dial = dial(0.3);
        let ctx = Context::detached().with_bounds(BOUNDS);
        assert_eq!(dial.compute_value(&ctx, CENTER), 0.3);
    }

    #[test]
    fn round_trip() {
        let mut dial = dial(0.);
        let ctx = Context::detached().with_bounds(BOUNDS);
        for i in 0..=20 {
            let value = f64::from(i) / 20.;
            dial.set_value(value);
            let p = at_degrees(dial.degrees(), 40.);
            assert_approx_eq!(f64, dial.compute_value(&ctx, p), value, epsilon = 1e-9);
        }
    }

    #[test]
    fn limits_and_indicator_bounds() {
        let dial = Dial::new(
            Pointer::new(50.),
            RadialMarks::new(Knob::new(50.), 10., 10),
            0.,
        );
        let ctx = Context::detached();
        assert_eq!(dial.limits(&ctx), Limits::fixed(Size::new(70., 70.)));

        let ctx = ctx.with_bounds(Rect::new(100., 0., 170., 70.));
        assert_eq!(
            dial.indicator_bounds(&ctx),
            Rect::new(110., 10., 160., 60.)
        );

        // Squeezed bounds shrink the indicator with them.
        let ctx = ctx.with_bounds(Rect::new(0., 0., 30., 30.));
        assert_eq!(dial.indicator_bounds(&ctx), Rect::new(0., 0., 30., 30.));
    }

    #[test]
    fn press_jumps_to_angle() {
        let mut dial = dial(0.);
        let ctx = Context::detached().with_bounds(BOUNDS);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        dial.core_mut()
            .set_on_change(move |value| sink.borrow_mut().push(value));

        let outcome = dial.begin_tracking(&ctx, Point::new(50., 20.));
        assert_matches!(outcome, TrackingOutcome::Started { changed: Some(_) });
        assert_approx_eq!(f64, dial.value(), 0.5, epsilon = 1e-9);

        dial.keep_tracking(&ctx, Point::new(20., 50.));
        assert_approx_eq!(f64, dial.value(), 0.2, epsilon = 1e-9);
        // Passing over the center leaves the value alone.
        assert_eq!(
            dial.keep_tracking(&ctx, CENTER),
            TrackingOutcome::Unchanged
        );
        assert_eq!(dial.end_tracking(), TrackingOutcome::Ended);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn press_outside_knob_is_ignored() {
        let mut dial = dial(0.5);
        let ctx = Context::detached().with_bounds(BOUNDS);
        // Inside the bounds, outside the circle.
        assert_eq!(
            dial.begin_tracking(&ctx, Point::new(2., 2.)),
            TrackingOutcome::Ignored
        );
        assert!(!dial.is_tracking());
    }

    #[test]
    fn cursor_feedback() {
        let mut dial = dial(0.5);
        let ctx = Context::detached().with_bounds(BOUNDS);
        assert_eq!(dial.cursor(&ctx, CENTER), CursorIcon::Grab);
        assert_eq!(dial.cursor(&ctx, Point::new(2., 2.)), CursorIcon::Default);
        dial.begin_tracking(&ctx, CENTER);
        assert_eq!(
            dial.cursor(&ctx, Point::new(150., 50.)),
            CursorIcon::Grabbing
        );
        // Pressing the exact center starts tracking without moving the value.
        assert_eq!(dial.value(), 0.5);
    }

    #[test]
    fn draw_rotated_indicator() {
        let dial = dial(0.25);
        let ctx = Context::detached().with_bounds(BOUNDS);
        let mut scene = Scene::new();
        dial.draw(&ctx, &mut scene);
        assert!(!scene.encoding().is_empty());
    }
}
