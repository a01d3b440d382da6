// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use vello::kurbo::Point;

/// A pointer event, in the local coordinates of the [`ControlRoot`](crate::app::ControlRoot).
///
/// Only the primary button drives controls, so the host is expected to filter
/// out other buttons before forwarding events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The primary button was pressed.
    Down(Point),
    /// The pointer moved, with or without the button held.
    Move(Point),
    /// The primary button was released.
    Up(Point),
    /// The gesture was interrupted by the platform, e.g. the window lost focus.
    Cancel,
}

impl PointerEvent {
    /// The position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Down(pos) | Self::Move(pos) | Self::Up(pos) => Some(*pos),
            Self::Cancel => None,
        }
    }

    /// Short name of the event kind, for logs.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Down(_) => "Down",
            Self::Move(_) => "Move",
            Self::Up(_) => "Up",
            Self::Cancel => "Cancel",
        }
    }
}

/// Whether an event was consumed by a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handled {
    /// A control acted on the event.
    Yes,
    /// No control acted on the event. The host may forward it elsewhere.
    No,
}

impl Handled {
    /// Has the event been handled yet?
    pub fn is_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    /// Returns `Handled::Yes` if `handled` is true, and `Handled::No` otherwise.
    fn from(handled: bool) -> Self {
        if handled { Self::Yes } else { Self::No }
    }
}
