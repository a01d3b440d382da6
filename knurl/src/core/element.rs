// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use vello::Scene;
use vello::kurbo::Point;

use crate::core::{Context, Limits, RectExt};

/// The capability set shared by every drawable piece of a control.
///
/// Controls are composed of elements: a slider owns a body (its track) and an
/// indicator (its thumb), a dial owns a knob. Elements don't hold any state that
/// changes during interaction; the [`Context`] they receive tells them where they are.
///
/// Elements are meant to be composed rather than extended: to decorate an element, wrap
/// it in another element (see [`SliderMarks`](crate::elements::SliderMarks)).
pub trait Element {
    /// Report the minimum and maximum size this element accepts.
    ///
    /// Must be pure with respect to everything but `ctx`.
    fn limits(&self, ctx: &Context<'_>) -> Limits;

    /// Paint the element into `ctx.bounds`.
    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene);

    /// Whether `p` hits the element when it is placed at `ctx.bounds`.
    fn hit_test(&self, ctx: &Context<'_>, p: Point) -> bool {
        ctx.bounds.includes(p)
    }

    /// Get the (abridged) type name of the element for debugging purposes.
    fn short_type_name(&self) -> &'static str {
        let name = std::any::type_name::<Self>();
        name.split('<')
            .next()
            .unwrap_or(name)
            .split("::")
            .last()
            .unwrap_or(name)
    }
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn limits(&self, ctx: &Context<'_>) -> Limits {
        self.as_ref().limits(ctx)
    }

    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene) {
        self.as_ref().draw(ctx, scene);
    }

    fn hit_test(&self, ctx: &Context<'_>, p: Point) -> bool {
        self.as_ref().hit_test(ctx, p)
    }

    fn short_type_name(&self) -> &'static str {
        self.as_ref().short_type_name()
    }
}
