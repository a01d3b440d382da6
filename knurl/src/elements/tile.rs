// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! A container packing its children along an axis.

use smallvec::SmallVec;
use vello::Scene;
use vello::kurbo::{Point, Rect};

use crate::core::{Axis, Context, Element, Limits, RectExt};

/// Packs its children one after the other along an axis.
///
/// Each child gets at least its minimum extent along the axis. Space left over is shared
/// in proportion to how much more each child can take. Across the axis, children get the
/// tile's full extent, capped by their own maximum and centered.
pub struct Tile {
    axis: Axis,
    children: Vec<Box<dyn Element>>,
}

impl std::fmt::Debug for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.children.iter().map(|c| c.short_type_name()).collect();
        f.debug_struct("Tile")
            .field("axis", &self.axis)
            .field("children", &names)
            .finish()
    }
}

impl Tile {
    /// Create an empty tile packing along `axis`.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            children: Vec::new(),
        }
    }

    /// Create an empty tile packing left to right.
    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Create an empty tile packing top to bottom.
    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Builder-style method to append a child.
    pub fn with_child(mut self, child: impl Element + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// The rectangles assigned to each child when the tile occupies `ctx.bounds`.
    pub fn child_bounds(&self, ctx: &Context<'_>) -> SmallVec<[Rect; 8]> {
        let axis = self.axis;
        let limits: SmallVec<[Limits; 8]> =
            self.children.iter().map(|child| child.limits(ctx)).collect();

        let available = axis.major(ctx.bounds.size());
        let total_min: f64 = limits.iter().map(|l| axis.major(l.min)).sum();
        let total_flex: f64 = limits
            .iter()
            .map(|l| axis.major(l.max) - axis.major(l.min))
            .sum();
        let extra = (available - total_min).max(0.);

        let (mut pos, _) = axis.major_span(ctx.bounds);
        let cross_extent = axis.minor(ctx.bounds.size());
        limits
            .iter()
            .map(|l| {
                let min = axis.major(l.min);
                let flex = axis.major(l.max) - min;
                let share = if total_flex > 0. {
                    (extra * flex / total_flex).min(flex)
                } else {
                    0.
                };
                let major = min + share;
                let minor = cross_extent.min(axis.minor(l.max));
                let (x, y) = axis.pack(pos, axis.minor_pos(ctx.bounds.origin()));
                let (w, h) = axis.pack(major, minor);
                pos += major;
                let slot = Rect::new(x, y, x + w, y + h);
                // Center across the axis within the tile.
                match axis {
                    Axis::Horizontal => slot.center_v(ctx.bounds),
                    Axis::Vertical => slot.center_h(ctx.bounds),
                }
            })
            .collect()
    }
}

impl Element for Tile {
    fn limits(&self, ctx: &Context<'_>) -> Limits {
        Limits::tiled(self.axis, self.children.iter().map(|child| child.limits(ctx)))
    }

    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene) {
        for (child, bounds) in self.children.iter().zip(self.child_bounds(ctx)) {
            child.draw(&ctx.with_bounds(bounds), scene);
        }
    }

    fn hit_test(&self, ctx: &Context<'_>, p: Point) -> bool {
        self.children
            .iter()
            .zip(self.child_bounds(ctx))
            .any(|(child, bounds)| child.hit_test(&ctx.with_bounds(bounds), p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vello::kurbo::Size;

    use crate::core::FULL_EXTENT;
    use crate::elements::{Thumb, Track};

    #[test]
    fn fixed_children_are_packed() {
        let tile = Tile::row()
            .with_child(Thumb::new(20.))
            .with_child(Thumb::new(30.));
        let ctx = Context::detached().with_bounds(Rect::new(0., 0., 100., 40.));
        let bounds = tile.child_bounds(&ctx);
        assert_eq!(bounds[0], Rect::new(0., 10., 20., 30.));
        assert_eq!(bounds[1], Rect::new(20., 5., 50., 35.));
    }

    #[test]
    fn flexible_children_share_extra_space() {
        let tile = Tile::column()
            .with_child(Track::vertical(4.))
            .with_child(Thumb::new(10.))
            .with_child(Track::vertical(4.));
        let ctx = Context::detached().with_bounds(Rect::new(0., 0., 10., 100.));
        let bounds = tile.child_bounds(&ctx);
        // 18px of minimums, 82px left over, split evenly between the two tracks.
        assert_eq!(bounds[0], Rect::new(3., 0., 7., 45.));
        assert_eq!(bounds[1], Rect::new(0., 45., 10., 55.));
        assert_eq!(bounds[2], Rect::new(3., 55., 7., 100.));
    }

    #[test]
    fn tile_limits() {
        let tile = Tile::row()
            .with_child(Track::horizontal(4.))
            .with_child(Thumb::new(10.));
        let limits = tile.limits(&Context::detached());
        assert_eq!(limits.min, Size::new(14., 10.));
        assert_eq!(limits.max, Size::new(FULL_EXTENT, 10.));
    }
}
