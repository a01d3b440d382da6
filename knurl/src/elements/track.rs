// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! The bar a slider's thumb travels along.

use vello::Scene;
use vello::kurbo::{Rect, RoundedRect};

use crate::core::{Axis, Context, Element, FULL_EXTENT, Limits, RectExt};
use crate::util::{Sanitize, fill};

/// A rectangular bar with a fixed thickness and a flexible length.
///
/// The track's axis is fixed at construction. Its limits are what a
/// [`Slider`](crate::controls::Slider) uses to decide its own orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    axis: Axis,
    thickness: f64,
}

impl Track {
    /// Create a track along `axis`.
    pub fn new(axis: Axis, thickness: f64) -> Self {
        Self {
            axis,
            thickness: thickness.sanitize("track thickness"),
        }
    }

    /// Create a horizontal track.
    pub fn horizontal(thickness: f64) -> Self {
        Self::new(Axis::Horizontal, thickness)
    }

    /// Create a vertical track.
    pub fn vertical(thickness: f64) -> Self {
        Self::new(Axis::Vertical, thickness)
    }

    /// The direction this track runs in.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The track's extent across its axis.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    fn bar(&self, bounds: Rect) -> Rect {
        let bar = match self.axis {
            Axis::Horizontal => bounds.with_height(self.thickness.min(bounds.height())),
            Axis::Vertical => bounds.with_width(self.thickness.min(bounds.width())),
        };
        match self.axis {
            Axis::Horizontal => bar.center_v(bounds),
            Axis::Vertical => bar.center_h(bounds),
        }
    }
}

impl Element for Track {
    fn limits(&self, _ctx: &Context<'_>) -> Limits {
        Limits::new(
            self.axis.pack_size(self.thickness, self.thickness),
            self.axis.pack_size(FULL_EXTENT, self.thickness),
        )
    }

    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene) {
        let bar = self.bar(ctx.bounds);
        let rounded = RoundedRect::from_rect(bar, self.thickness / 2.);
        fill(scene, &rounded, ctx.config.palette.track);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vello::kurbo::Size;

    #[test]
    fn limits_follow_axis() {
        let ctx = Context::detached();
        let horizontal = Track::horizontal(5.).limits(&ctx);
        assert_eq!(horizontal.max, Size::new(FULL_EXTENT, 5.));
        assert_eq!(horizontal.axis(), Axis::Horizontal);

        let vertical = Track::vertical(5.).limits(&ctx);
        assert_eq!(vertical.max, Size::new(5., FULL_EXTENT));
        assert_eq!(vertical.axis(), Axis::Vertical);
    }

    #[test]
    fn bar_is_centered_across_axis() {
        let track = Track::horizontal(4.);
        assert_eq!(
            track.bar(Rect::new(0., 0., 100., 20.)),
            Rect::new(0., 8., 100., 12.)
        );
        let track = Track::vertical(4.);
        assert_eq!(
            track.bar(Rect::new(0., 0., 20., 100.)),
            Rect::new(8., 0., 12., 100.)
        );
    }
}
