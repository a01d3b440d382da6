// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use vello::Scene;
use vello::kurbo::Point;

use crate::core::{Context, Element, Limits};
use crate::elements::{Knob, Pointer, Thumb, Track};

/// One of the built-in leaf elements, dispatched by `match` instead of through a vtable.
///
/// Handy when a collection mixes leaf elements and boxing each one isn't wanted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BasicElement {
    /// See [`Track`].
    Track(Track),
    /// See [`Thumb`].
    Thumb(Thumb),
    /// See [`Knob`].
    Knob(Knob),
    /// See [`Pointer`].
    Pointer(Pointer),
}

impl Element for BasicElement {
    fn limits(&self, ctx: &Context<'_>) -> Limits {
        match self {
            Self::Track(track) => track.limits(ctx),
            Self::Thumb(thumb) => thumb.limits(ctx),
            Self::Knob(knob) => knob.limits(ctx),
            Self::Pointer(pointer) => pointer.limits(ctx),
        }
    }

    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene) {
        match self {
            Self::Track(track) => track.draw(ctx, scene),
            Self::Thumb(thumb) => thumb.draw(ctx, scene),
            Self::Knob(knob) => knob.draw(ctx, scene),
            Self::Pointer(pointer) => pointer.draw(ctx, scene),
        }
    }

    fn hit_test(&self, ctx: &Context<'_>, p: Point) -> bool {
        match self {
            Self::Track(track) => track.hit_test(ctx, p),
            Self::Thumb(thumb) => thumb.hit_test(ctx, p),
            Self::Knob(knob) => knob.hit_test(ctx, p),
            Self::Pointer(pointer) => pointer.hit_test(ctx, p),
        }
    }

    fn short_type_name(&self) -> &'static str {
        match self {
            Self::Track(_) => "Track",
            Self::Thumb(_) => "Thumb",
            Self::Knob(_) => "Knob",
            Self::Pointer(_) => "Pointer",
        }
    }
}

impl From<Track> for BasicElement {
    fn from(track: Track) -> Self {
        Self::Track(track)
    }
}

impl From<Thumb> for BasicElement {
    fn from(thumb: Thumb) -> Self {
        Self::Thumb(thumb)
    }
}

impl From<Knob> for BasicElement {
    fn from(knob: Knob) -> Self {
        Self::Knob(knob)
    }
}

impl From<Pointer> for BasicElement {
    fn from(pointer: Pointer) -> Self {
        Self::Pointer(pointer)
    }
}

#[cfg(test)]
mod tests {
    use vello::kurbo::Rect;

    use super::*;
    use crate::controls::{Control, Slider};
    use crate::core::Axis;

    #[test]
    fn dispatches_to_variant() {
        let ctx = Context::detached();
        let track = Track::vertical(5.);
        assert_eq!(BasicElement::from(track).limits(&ctx), track.limits(&ctx));
        assert_eq!(BasicElement::from(Knob::new(10.)).short_type_name(), "Knob");
    }

    #[test]
    fn slider_of_basic_elements() {
        let slider = Slider::new(
            BasicElement::from(Thumb::new(20.)),
            BasicElement::from(Track::vertical(5.)),
            0.,
        );
        assert_eq!(slider.axis(), Axis::Vertical);

        let ctx = Context::detached().with_bounds(Rect::new(0., 0., 20., 120.));
        assert_eq!(
            slider.indicator_bounds(&ctx),
            Rect::new(0., 100., 20., 120.)
        );
        // The thumb is round: its bounding box corners don't hit.
        let thumb = BasicElement::from(Thumb::new(20.));
        let ctx = ctx.with_bounds(Rect::new(0., 100., 20., 120.));
        assert!(thumb.hit_test(&ctx, Point::new(10., 110.)));
        assert!(!thumb.hit_test(&ctx, Point::new(1., 101.)));
    }
}
