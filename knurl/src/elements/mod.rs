// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! Concrete [`Element`](crate::core::Element)s: bodies, indicators, decorations and containers.

mod basic;
mod knob;
mod layer;
mod marks;
mod pointer;
mod thumb;
mod tile;
mod track;

pub use basic::BasicElement;
pub use knob::Knob;
pub use layer::Layer;
pub use marks::{RadialMarks, SliderMarks};
pub use pointer::Pointer;
pub use thumb::Thumb;
pub use tile::Tile;
pub use track::Track;
