// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! A control whose indicator travels along a straight body.

use tracing::trace_span;
use vello::Scene;
use vello::kurbo::{Point, Rect, Size};

use crate::controls::value::fraction_along;
use crate::controls::{Control, ControlCore, clamp_value};
use crate::core::{Axis, Context, Element, Limits, RectExt};

/// A slider, made of a static body (its track) and a movable indicator (its thumb).
///
/// The orientation is decided once, at construction, from the body's limits:
/// a body that can grow wider than tall makes a horizontal slider.
///
/// Horizontal sliders read 0.0 at the left end. Vertical sliders read 0.0 at the
/// bottom end and 1.0 at the top.
///
/// The indicator travels the full extent of the slider's bounds along its axis, minus its
/// own size: at 0.0 and 1.0 it sits flush with the ends.
pub struct Slider<I = Box<dyn Element>, B = Box<dyn Element>> {
    core: ControlCore,
    indicator: I,
    body: B,
    axis: Axis,
}

impl<I, B> std::fmt::Debug for Slider<I, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("core", &self.core)
            .field("axis", &self.axis)
            .finish_non_exhaustive()
    }
}

// --- MARK: BUILDERS ---
impl<I: Element, B: Element> Slider<I, B> {
    /// Create a slider from its indicator, its body and an initial value.
    ///
    /// The value is clamped to `[0, 1]`.
    pub fn new(indicator: I, body: B, value: f64) -> Self {
        let axis = body.limits(&Context::detached()).axis();
        Self {
            core: ControlCore::new(value),
            indicator,
            body,
            axis,
        }
    }

    /// Builder-style method to attach the change callback.
    pub fn with_on_change(mut self, on_change: impl FnMut(f64) + 'static) -> Self {
        self.core.set_on_change(on_change);
        self
    }
}

// --- MARK: GEOMETRY ---
impl<I: Element + 'static, B: Element + 'static> Slider<I, B> {
    /// The direction the indicator travels in.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The slider's body.
    pub fn body(&self) -> &B {
        &self.body
    }

    /// The slider's indicator.
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    fn indicator_size(&self, ctx: &Context<'_>) -> Size {
        self.indicator.limits(ctx).max
    }

    /// Shrink `ctx.bounds` to the body's extent across the slider's axis and center it there.
    ///
    /// The extent along the axis is kept as is.
    pub fn prepare_body(&self, ctx: &mut Context<'_>) {
        let limits = self.body.limits(ctx);
        let bounds = ctx.bounds;
        ctx.bounds = match self.axis {
            Axis::Horizontal => bounds
                .with_height(limits.max.height.min(bounds.height()))
                .center_v(bounds),
            Axis::Vertical => bounds
                .with_width(limits.max.width.min(bounds.width()))
                .center_h(bounds),
        };
    }

    /// Set `ctx.bounds` to the indicator's bounds at the current value.
    pub fn prepare_indicator(&self, ctx: &mut Context<'_>) {
        ctx.bounds = self.indicator_bounds(ctx);
    }
}

// --- MARK: IMPL CONTROL ---
impl<I: Element + 'static, B: Element + 'static> Control for Slider<I, B> {
    fn core(&self) -> &ControlCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ControlCore {
        &mut self.core
    }

    fn limits(&self, ctx: &Context<'_>) -> Limits {
        let body = self.body.limits(ctx);
        let indicator = self.indicator.limits(ctx);
        let axis = self.axis;
        let cross = axis.cross();

        // Across the axis, room for the indicator.
        let min_cross = cross.major(body.min).max(cross.major(indicator.min));
        let max_cross = cross.major(body.max).max(cross.major(indicator.max));
        // Along the axis, room for the indicator to reach both ends.
        let min_major = axis.major(body.min).max(axis.major(indicator.min) * 2.);
        let max_major = axis.major(body.max).max(min_major);

        Limits::new(
            axis.pack_size(min_major, min_cross),
            axis.pack_size(max_major, max_cross),
        )
    }

    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene) {
        let _span = trace_span!("Slider::draw", id = self.id().trace()).entered();
        let mut body_ctx = *ctx;
        self.prepare_body(&mut body_ctx);
        self.body.draw(&body_ctx, scene);

        let mut indicator_ctx = *ctx;
        self.prepare_indicator(&mut indicator_ctx);
        self.indicator.draw(&indicator_ctx, scene);
    }

    fn indicator_bounds(&self, ctx: &Context<'_>) -> Rect {
        let bounds = ctx.bounds;
        let indicator = self.indicator_size(ctx);
        let value = self.value();
        match self.axis {
            Axis::Horizontal => bounds
                .with_width(indicator.width)
                .moved((bounds.width() - indicator.width) * value, 0.),
            // 0.0 sits at the bottom, hence 1.0 - value.
            Axis::Vertical => bounds
                .with_height(indicator.height)
                .moved(0., (bounds.height() - indicator.height) * (1. - value)),
        }
    }

    fn compute_value(&self, ctx: &Context<'_>, p: Point) -> f64 {
        let bounds = ctx.bounds;
        let indicator = self.indicator_size(ctx);
        let fraction = match self.axis {
            Axis::Horizontal => fraction_along(
                p.x,
                bounds.x0 + indicator.width / 2.,
                bounds.width() - indicator.width,
            ),
            Axis::Vertical => fraction_along(
                p.y,
                bounds.y0 + indicator.height / 2.,
                bounds.height() - indicator.height,
            )
            .map(|fraction| 1. - fraction),
        };
        match fraction {
            Some(fraction) => clamp_value(fraction, self.value()),
            None => self.value(),
        }
    }
}
