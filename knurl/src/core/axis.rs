// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use vello::kurbo::{Point, Rect, Size};

/// An axis in visual space.
///
/// Controls use it to describe the direction their indicator travels in.
/// Has some methods for manipulating geometry with respect to the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The x axis
    Horizontal,
    /// The y axis
    Vertical,
}

impl Axis {
    /// Get the axis perpendicular to this one.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extract from the argument the magnitude along this axis
    pub fn major(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extract from the argument the magnitude along the perpendicular axis
    pub fn minor(self, size: Size) -> f64 {
        self.cross().major(size)
    }

    /// Extract the extent of the argument in this axis as a pair.
    pub fn major_span(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Horizontal => (rect.x0, rect.x1),
            Self::Vertical => (rect.y0, rect.y1),
        }
    }

    /// Extract the coordinate locating the argument with respect to this axis.
    pub fn major_pos(self, pos: Point) -> f64 {
        match self {
            Self::Horizontal => pos.x,
            Self::Vertical => pos.y,
        }
    }

    /// Extract the coordinate locating the argument with respect to the perpendicular axis.
    pub fn minor_pos(self, pos: Point) -> f64 {
        self.cross().major_pos(pos)
    }

    /// Arrange the major and minor measurements with respect to this axis such that it forms
    /// an (x, y) pair.
    pub fn pack(self, major: f64, minor: f64) -> (f64, f64) {
        match self {
            Self::Horizontal => (major, minor),
            Self::Vertical => (minor, major),
        }
    }

    /// Build a [`Size`] from measurements along this axis and the perpendicular one.
    pub fn pack_size(self, major: f64, minor: f64) -> Size {
        let (width, height) = self.pack(major, minor);
        Size::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_swaps_for_vertical() {
        assert_eq!(Axis::Horizontal.pack(3., 4.), (3., 4.));
        assert_eq!(Axis::Vertical.pack(3., 4.), (4., 3.));
        assert_eq!(Axis::Vertical.pack_size(3., 4.), Size::new(4., 3.));
    }

    #[test]
    fn major_and_minor() {
        let size = Size::new(10., 20.);
        assert_eq!(Axis::Horizontal.major(size), 10.);
        assert_eq!(Axis::Horizontal.minor(size), 20.);
        assert_eq!(Axis::Vertical.major(size), 20.);
        assert_eq!(Axis::Vertical.minor_pos(Point::new(1., 2.)), 1.);
        assert_eq!(
            Axis::Vertical.major_span(Rect::new(0., 5., 10., 15.)),
            (5., 15.)
        );
    }
}
