// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! A container whose children overlap.

use vello::Scene;
use vello::kurbo::Point;

use crate::core::{Context, Element, Limits};

/// Draws its children on top of each other, in insertion order.
///
/// Every child gets the full bounds of the layer.
#[derive(Default)]
pub struct Layer {
    children: Vec<Box<dyn Element>>,
}

impl std::fmt::Debug for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.children.iter().map(|c| c.short_type_name()).collect();
        f.debug_struct("Layer").field("children", &names).finish()
    }
}

impl Layer {
    /// Create an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to add a child on top of the existing ones.
    pub fn with_child(mut self, child: impl Element + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the layer has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Element for Layer {
    fn limits(&self, ctx: &Context<'_>) -> Limits {
        Limits::layered(self.children.iter().map(|child| child.limits(ctx)))
    }

    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene) {
        for child in &self.children {
            child.draw(ctx, scene);
        }
    }

    fn hit_test(&self, ctx: &Context<'_>, p: Point) -> bool {
        self.children.iter().any(|child| child.hit_test(ctx, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vello::kurbo::Size;

    use crate::elements::{Thumb, Track};

    #[test]
    fn layer_limits_combine_children() {
        let ctx = Context::detached();
        let layer = Layer::new()
            .with_child(Track::horizontal(5.))
            .with_child(Thumb::new(20.));
        assert_eq!(layer.len(), 2);
        let limits = layer.limits(&ctx);
        assert_eq!(limits.min, Size::new(20., 20.));
        assert_eq!(limits.max, Size::new(20., 20.));
    }
}
