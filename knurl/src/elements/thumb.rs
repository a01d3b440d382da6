// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! A round slider indicator.

use vello::Scene;
use vello::kurbo::{Circle, Point, Size};

use crate::core::{Context, Element, Limits};
use crate::util::{Sanitize, fill, stroke};

/// A round indicator of a fixed diameter.
///
/// The thumb is drawn as a circle centered in whatever bounds it is given,
/// so it stays round even when a slider hands it the full cross extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thumb {
    size: f64,
}

impl Thumb {
    /// Create a thumb with the given diameter.
    pub fn new(size: f64) -> Self {
        Self {
            size: size.sanitize("thumb size"),
        }
    }

    /// The thumb's diameter.
    pub fn size(&self) -> f64 {
        self.size
    }

    fn circle(&self, ctx: &Context<'_>) -> Circle {
        let bounds = ctx.bounds;
        let radius = self.size.min(bounds.width()).min(bounds.height()) / 2.;
        Circle::new(bounds.center(), radius)
    }
}

impl Element for Thumb {
    fn limits(&self, _ctx: &Context<'_>) -> Limits {
        Limits::fixed(Size::new(self.size, self.size))
    }

    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene) {
        let circle = self.circle(ctx);
        fill(scene, &circle, ctx.config.palette.thumb);
        stroke(scene, &circle, ctx.config.palette.track, 1.);
    }

    fn hit_test(&self, ctx: &Context<'_>, p: Point) -> bool {
        let circle = self.circle(ctx);
        (p - circle.center).hypot() <= circle.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vello::kurbo::Rect;

    #[test]
    fn hit_test_is_round() {
        let thumb = Thumb::new(20.);
        let ctx = Context::detached().with_bounds(Rect::new(0., 0., 20., 40.));
        assert!(thumb.hit_test(&ctx, Point::new(10., 20.)));
        assert!(thumb.hit_test(&ctx, Point::new(10., 11.)));
        // Inside the bounds, but outside the circle.
        assert!(!thumb.hit_test(&ctx, Point::new(10., 5.)));
        assert!(!thumb.hit_test(&ctx, Point::new(1., 11.)));
    }
}
