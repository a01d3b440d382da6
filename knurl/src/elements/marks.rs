// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! Tick marks decorating a track or a knob.

use vello::Scene;
use vello::kurbo::{Line, Point, Size, Vec2};

use crate::core::{Context, Element, Limits};
use crate::theme;
use crate::util::{Sanitize, stroke};

/// Draws evenly spaced tick marks across a band centered on a track.
///
/// The band is `size` wide; the wrapped element is drawn on top of the ticks.
/// Set an inset equal to half the indicator's size so that the first and last ticks
/// line up with the indicator's center at 0.0 and 1.0.
#[derive(Debug, Clone)]
pub struct SliderMarks<E> {
    inner: E,
    size: f64,
    divisions: u32,
    inset: f64,
}

impl<E: Element> SliderMarks<E> {
    /// Wrap `inner`, drawing `divisions` intervals of ticks across a band of width `size`.
    pub fn new(inner: E, size: f64, divisions: u32) -> Self {
        Self {
            inner,
            size: size.sanitize("marks size"),
            divisions: divisions.max(1),
            inset: 0.,
        }
    }

    /// Builder-style method to set the distance kept free of ticks at both ends.
    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset.sanitize("marks inset");
        self
    }

    /// Positions of the ticks along the track's axis.
    fn tick_positions(&self, start: f64, end: f64) -> impl Iterator<Item = f64> {
        let start = start + self.inset;
        let span = (end - self.inset - start).max(0.);
        let divisions = self.divisions;
        (0..=divisions).map(move |i| start + span * f64::from(i) / f64::from(divisions))
    }
}

impl<E: Element> Element for SliderMarks<E> {
    fn limits(&self, ctx: &Context<'_>) -> Limits {
        let inner = self.inner.limits(ctx);
        let axis = inner.axis();
        let cross = axis.cross();
        let min_cross = cross.major(inner.min).max(self.size);
        let max_cross = cross.major(inner.max).max(self.size);
        Limits::new(
            axis.pack_size(axis.major(inner.min), min_cross),
            axis.pack_size(axis.major(inner.max), max_cross),
        )
    }

    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene) {
        let axis = self.inner.limits(ctx).axis();
        let bounds = ctx.bounds;
        let (start, end) = axis.major_span(bounds);
        let center = axis.minor_pos(bounds.center());
        let half_band = self.size.min(axis.minor(bounds.size())) / 2.;
        for pos in self.tick_positions(start, end) {
            let (x0, y0) = axis.pack(pos, center - half_band);
            let (x1, y1) = axis.pack(pos, center + half_band);
            let line = Line::new(Point::new(x0, y0), Point::new(x1, y1));
            stroke(
                scene,
                &line,
                ctx.config.palette.marks,
                ctx.config.mark_thickness,
            );
        }
        self.inner.draw(ctx, scene);
    }
}

/// Draws tick marks in a ring around a knob.
///
/// The ticks follow the same sweep as a [`Dial`](crate::controls::Dial), so that
/// the first tick sits at 0.0 and the last at 1.0.
#[derive(Debug, Clone)]
pub struct RadialMarks<E> {
    inner: E,
    size: f64,
    divisions: u32,
}

impl<E: Element> RadialMarks<E> {
    /// Wrap `inner` in a ring `size` wide, divided into `divisions` intervals.
    pub fn new(inner: E, size: f64, divisions: u32) -> Self {
        Self {
            inner,
            size: size.sanitize("marks size"),
            divisions: divisions.max(1),
        }
    }
}

impl<E: Element> Element for RadialMarks<E> {
    fn limits(&self, ctx: &Context<'_>) -> Limits {
        let inner = self.inner.limits(ctx);
        let grow = Size::new(self.size * 2., self.size * 2.);
        Limits::new(inner.min + grow, inner.max + grow)
    }

    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene) {
        let bounds = ctx.bounds;
        let center = bounds.center();
        let outer = bounds.width().min(bounds.height()) / 2.;
        let inner_radius = (outer - self.size).max(0.);
        for i in 0..=self.divisions {
            let fraction = f64::from(i) / f64::from(self.divisions);
            let degrees = theme::DIAL_START_DEGREES + fraction * theme::DIAL_SWEEP_DEGREES;
            // Angles are measured clockwise from straight down.
            let (sin, cos) = degrees.to_radians().sin_cos();
            let dir = Vec2::new(-sin, cos);
            let line = Line::new(
                center + dir * (inner_radius + self.size * 0.25),
                center + dir * (outer - self.size * 0.15),
            );
            stroke(
                scene,
                &line,
                ctx.config.palette.marks,
                ctx.config.mark_thickness,
            );
        }
        self.inner
            .draw(&ctx.with_bounds(bounds.inset(-self.size)), scene);
    }

    fn hit_test(&self, ctx: &Context<'_>, p: Point) -> bool {
        self.inner
            .hit_test(&ctx.with_bounds(ctx.bounds.inset(-self.size)), p)
    }
}
