// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! The round body of a dial.

use vello::Scene;
use vello::kurbo::{Circle, Point, Size};

use crate::core::{Context, Element, Limits};
use crate::util::{Sanitize, fill, stroke};

/// A filled circle of a fixed diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knob {
    size: f64,
}

impl Knob {
    /// Create a knob with the given diameter.
    pub fn new(size: f64) -> Self {
        Self {
            size: size.sanitize("knob size"),
        }
    }

    /// The knob's diameter.
    pub fn size(&self) -> f64 {
        self.size
    }
}

impl Element for Knob {
    fn limits(&self, _ctx: &Context<'_>) -> Limits {
        Limits::fixed(Size::new(self.size, self.size))
    }

    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene) {
        let bounds = ctx.bounds;
        let radius = bounds.width().min(bounds.height()) / 2.;
        let circle = Circle::new(bounds.center(), radius);
        fill(scene, &circle, ctx.config.palette.knob);
        stroke(scene, &circle, ctx.config.palette.track, 1.5);
    }

    fn hit_test(&self, ctx: &Context<'_>, p: Point) -> bool {
        let bounds = ctx.bounds;
        let radius = bounds.width().min(bounds.height()) / 2.;
        (p - bounds.center()).hypot() <= radius
    }
}
