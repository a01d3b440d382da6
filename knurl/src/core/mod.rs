// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! Basic types and traits Knurl is built on.

mod axis;
mod config;
mod context;
mod element;
mod events;
mod geometry;
mod id;
mod limits;
mod view;

pub use axis::Axis;
pub use config::{Config, MARK_THICKNESS_ENV_VAR, Palette};
pub use context::Context;
pub use element::Element;
pub use events::{Handled, PointerEvent};
pub use geometry::RectExt;
pub use id::ControlId;
pub use limits::{FULL_EXTENT, Limits};
pub use view::{RefreshQueue, View};

pub use cursor_icon::CursorIcon;
