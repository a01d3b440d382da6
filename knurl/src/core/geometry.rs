// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use vello::kurbo::{Point, Rect, Vec2};

/// Toolkit-specific operations on [`Rect`].
///
/// Rects are expected to be in normalized form (`x0 <= x1`, `y0 <= y1`).
pub trait RectExt {
    /// Whether `p` lies inside the rect, edges included.
    ///
    /// Unlike [`Rect::contains`], the right and bottom edges count as inside,
    /// so a zero-sized rect still includes its own origin.
    fn includes(&self, p: Point) -> bool;

    /// Returns the rect with its width replaced, keeping the origin.
    fn with_width(&self, width: f64) -> Rect;

    /// Returns the rect with its height replaced, keeping the origin.
    fn with_height(&self, height: f64) -> Rect;

    /// Centers the rect horizontally within `enclosing`, keeping its vertical position.
    fn center_h(&self, enclosing: Rect) -> Rect;

    /// Centers the rect vertically within `enclosing`, keeping its horizontal position.
    fn center_v(&self, enclosing: Rect) -> Rect;

    /// Centers the rect within `enclosing` on both axes.
    fn center_in(&self, enclosing: Rect) -> Rect;

    /// Translates the rect.
    fn moved(&self, dx: f64, dy: f64) -> Rect;
}

impl RectExt for Rect {
    fn includes(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x <= self.x1 && p.y >= self.y0 && p.y <= self.y1
    }

    fn with_width(&self, width: f64) -> Rect {
        Self::new(self.x0, self.y0, self.x0 + width, self.y1)
    }

    fn with_height(&self, height: f64) -> Rect {
        Self::new(self.x0, self.y0, self.x1, self.y0 + height)
    }

    fn center_h(&self, enclosing: Rect) -> Rect {
        let dx = enclosing.center().x - self.center().x;
        self.moved(dx, 0.)
    }

    fn center_v(&self, enclosing: Rect) -> Rect {
        let dy = enclosing.center().y - self.center().y;
        self.moved(0., dy)
    }

    fn center_in(&self, enclosing: Rect) -> Rect {
        *self + (enclosing.center() - self.center())
    }

    fn moved(&self, dx: f64, dy: f64) -> Rect {
        *self + Vec2::new(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_edges() {
        let rect = Rect::new(10., 10., 20., 30.);
        assert!(rect.includes(Point::new(10., 10.)));
        assert!(rect.includes(Point::new(20., 30.)));
        assert!(rect.includes(Point::new(15., 25.)));
        assert!(!rect.includes(Point::new(20.5, 25.)));
        assert!(!rect.includes(Point::new(15., 9.)));

        let empty = Rect::new(5., 5., 5., 5.);
        assert!(empty.includes(Point::new(5., 5.)));
    }

    #[test]
    fn axis_limited_resize() {
        let rect = Rect::new(10., 10., 20., 30.);
        assert_eq!(rect.with_width(4.), Rect::new(10., 10., 14., 30.));
        assert_eq!(rect.with_height(4.), Rect::new(10., 10., 20., 14.));
    }

    #[test]
    fn centering() {
        let outer = Rect::new(0., 0., 100., 50.);
        let inner = Rect::new(0., 0., 10., 10.);
        assert_eq!(inner.center_v(outer), Rect::new(0., 20., 10., 30.));
        assert_eq!(inner.center_h(outer), Rect::new(45., 0., 55., 10.));
        assert_eq!(inner.center_in(outer), Rect::new(45., 20., 55., 30.));
    }

    #[test]
    fn translation() {
        let rect = Rect::new(1., 2., 3., 4.);
        assert_eq!(rect.moved(10., -2.), Rect::new(11., 0., 13., 2.));
    }
}
