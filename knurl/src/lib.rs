// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! Knurl is the interaction core for slider-like GUI controls.
//!
//! It covers the part of a retained-mode toolkit that has real numeric content:
//!
//! - [`Element`][core::Element], the small capability set (`limits`, `draw`, `hit_test`)
//!   implemented by the decorative pieces a control is made of.
//! - [`Limits`][core::Limits], the min/max extents elements report so that containers and
//!   controls can negotiate their layout.
//! - [`Slider`][controls::Slider] and [`Dial`][controls::Dial], which map between indicator
//!   placement and a normalized value in `[0, 1]`.
//! - The pointer tracking state machine shared by all controls
//!   (see [`Control`][controls::Control]).
//! - [`ControlRoot`][app::ControlRoot], which owns controls, routes pointer events to them,
//!   and keeps [`LinkGroup`][app::LinkGroup]s of controls in sync.
//!
//! Window integration, text and accessibility are left to the host.
//! The host drives a [`ControlRoot`][app::ControlRoot] with [`PointerEvent`][core::PointerEvent]s
//! in local coordinates, and receives redraw requests through the [`View`][core::View] trait.
//!
//! Drawing targets a [Vello](vello) [`Scene`](vello::Scene).
//!
//! ## Example
//!
//! ```
//! use knurl::app::ControlRoot;
//! use knurl::controls::Slider;
//! use knurl::core::{PointerEvent, RefreshQueue};
//! use knurl::elements::{Thumb, Track};
//! use knurl::kurbo::{Point, Rect};
//!
//! let mut root = ControlRoot::new();
//! let slider = Slider::new(Thumb::new(20.), Track::horizontal(6.), 0.25);
//! let id = root.add(slider, Rect::new(0., 0., 320., 40.));
//!
//! let mut view = RefreshQueue::default();
//! root.on_pointer_event(&PointerEvent::Down(Point::new(160., 20.)), &mut view);
//! root.on_pointer_event(&PointerEvent::Up(Point::new(160., 20.)), &mut view);
//!
//! assert_eq!(root.value(id), Some(0.5));
//! assert_eq!(view.take(), vec![id]);
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vello;
pub use vello::kurbo;
pub use vello::peniko;

#[macro_use]
pub mod util;

pub mod app;
pub mod controls;
pub mod core;
pub mod elements;
pub mod testing;
pub mod theme;
