// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use vello::kurbo::Size;

use crate::core::Axis;

pub use crate::theme::FULL_EXTENT;

/// The minimum and maximum extents an element can be given.
///
/// Elements report limits on demand from the current [`Context`](crate::core::Context);
/// they are never cached across layout passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// The smallest size the element accepts.
    pub min: Size,
    /// The largest size the element can use.
    pub max: Size,
}

impl Limits {
    /// Limits that accept any size.
    pub const FULL: Self = Self {
        min: Size::ZERO,
        max: Size::new(FULL_EXTENT, FULL_EXTENT),
    };

    /// Create limits from a minimum and a maximum size.
    ///
    /// The maximum is raised to the minimum on each axis where it is smaller.
    pub fn new(min: Size, max: Size) -> Self {
        Self {
            min,
            max: Size::new(max.width.max(min.width), max.height.max(min.height)),
        }
    }

    /// Limits of an element which only accepts one size.
    pub const fn fixed(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// The orientation these limits describe.
    ///
    /// Horizontal when the element can grow wider than it can grow tall.
    pub fn axis(&self) -> Axis {
        if self.max.width > self.max.height {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Clamp `size` so that it fits within these limits.
    ///
    /// The fields are public, so the bounds are normalized first: a NaN or negative
    /// minimum counts as zero, and a maximum below the minimum is raised to it.
    pub fn constrain(&self, size: Size) -> Size {
        let clamp = |value: f64, min: f64, max: f64| {
            let min = min.max(0.);
            value.clamp(min, max.max(min))
        };
        Size::new(
            clamp(size.width, self.min.width, self.max.width),
            clamp(size.height, self.min.height, self.max.height),
        )
    }

    /// Combine the limits of children which overlap each other.
    ///
    /// The result is at least as large as the largest minimum and
    /// at most as large as the smallest maximum, but never below its minimum.
    pub fn layered(children: impl IntoIterator<Item = Self>) -> Self {
        let mut result = Self::FULL;
        for child in children {
            result.min.width = result.min.width.max(child.min.width);
            result.min.height = result.min.height.max(child.min.height);
            result.max.width = result.max.width.min(child.max.width);
            result.max.height = result.max.height.min(child.max.height);
        }
        Self::new(result.min, result.max)
    }

    /// Combine the limits of children packed one after the other along `axis`.
    ///
    /// Extents along `axis` are summed; the cross axis is combined like [`Limits::layered`].
    pub fn tiled(axis: Axis, children: impl IntoIterator<Item = Self>) -> Self {
        let cross = axis.cross();
        let (mut min_major, mut max_major) = (0., 0.);
        let (mut min_minor, mut max_minor) = (0_f64, FULL_EXTENT);
        for child in children {
            min_major += axis.major(child.min);
            max_major += axis.major(child.max);
            min_minor = min_minor.max(cross.major(child.min));
            max_minor = max_minor.min(cross.major(child.max));
        }
        Self::new(
            axis.pack_size(min_major, min_minor),
            axis.pack_size(max_major.min(FULL_EXTENT), max_minor),
        )
    }
}
