// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! The rotating indicator of a dial.

use vello::Scene;
use vello::kurbo::{Line, Point, Size};

use crate::core::{Context, Element, Limits};
use crate::util::{Sanitize, stroke};

/// A line from the center of its bounds pointing straight down.
///
/// A [`Dial`](crate::controls::Dial) rotates it about its center to show the current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    size: f64,
    width: f64,
}

impl Pointer {
    /// Create a pointer sized for a knob of diameter `size`.
    pub fn new(size: f64) -> Self {
        let size = size.sanitize("pointer size");
        Self {
            size,
            width: (size / 16.).max(1.),
        }
    }

    /// Builder-style method to set the stroke width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width.sanitize("pointer width");
        self
    }
}

impl Element for Pointer {
    fn limits(&self, _ctx: &Context<'_>) -> Limits {
        Limits::fixed(Size::new(self.size, self.size))
    }

    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene) {
        let bounds = ctx.bounds;
        let center = bounds.center();
        let radius = bounds.width().min(bounds.height()) / 2.;
        let line = Line::new(
            Point::new(center.x, center.y + radius * 0.3),
            Point::new(center.x, center.y + radius * 0.85),
        );
        stroke(scene, &line, ctx.config.palette.pointer, self.width);
    }
}
