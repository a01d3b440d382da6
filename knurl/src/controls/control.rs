// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use std::any::Any;

use tracing::{debug, trace, trace_span};
use vello::Scene;
use vello::kurbo::{Point, Rect, Vec2};

use crate::controls::{ControlCore, TrackingInfo};
use crate::core::{Context, ControlId, CursorIcon, Limits, RectExt};

/// Where a pointer press landed on a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grab {
    /// On the indicator. `offset` goes from the indicator's center to the press point.
    Indicator {
        /// Vector from the indicator's center to the press point.
        offset: Vec2,
    },
    /// On the control, but away from the indicator.
    Track,
    /// Outside the control.
    Miss,
}

/// What a tracking transition did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackingOutcome {
    /// The call didn't apply in the current state, and nothing happened.
    Ignored,
    /// Tracking began.
    ///
    /// `changed` holds the new value when the press jumped the indicator to the pointer.
    Started {
        /// The new value, if the press changed it.
        changed: Option<f64>,
    },
    /// The value changed to the given one, and `on_change` was fired.
    Changed(f64),
    /// Tracking is active, but the value stayed the same.
    Unchanged,
    /// Tracking ended normally.
    Ended,
    /// Tracking was interrupted.
    ///
    /// `reverted` holds the restored value when the gesture had moved it.
    Cancelled {
        /// The restored value, if the gesture had changed it.
        reverted: Option<f64>,
    },
}

impl TrackingOutcome {
    /// The new value, if this transition changed it.
    pub fn changed_value(&self) -> Option<f64> {
        match *self {
            Self::Started { changed } => changed,
            Self::Changed(value) => Some(value),
            Self::Cancelled { reverted } => reverted,
            Self::Ignored | Self::Unchanged | Self::Ended => None,
        }
    }
}

/// The trait implemented by interactive controls.
///
/// Implementors provide geometry: limits, drawing, the indicator's bounds for the current
/// value, and the value a pointer position maps to. In exchange they get the pointer
/// tracking state machine as provided methods:
///
/// ```text
/// Idle --begin_tracking--> Tracking --end_tracking / cancel_tracking--> Idle
///                             |  ^
///                             +--+ keep_tracking
/// ```
///
/// Every method is synchronous and runs to completion. Calls that don't apply to the
/// current state (a `keep_tracking` with no prior `begin_tracking`, a second
/// `begin_tracking` while tracking) are ignored.
///
/// Only tracking fires `on_change`. Direct assignments through [`set_value`](Self::set_value)
/// never do.
pub trait Control: Any {
    /// Shared control state.
    fn core(&self) -> &ControlCore;

    /// Shared control state, mutably.
    fn core_mut(&mut self) -> &mut ControlCore;

    /// Report the minimum and maximum size this control accepts.
    fn limits(&self, ctx: &Context<'_>) -> Limits;

    /// Paint the control into `ctx.bounds`, at its current value.
    fn draw(&self, ctx: &Context<'_>, scene: &mut Scene);

    /// The indicator's rectangle at the current value.
    fn indicator_bounds(&self, ctx: &Context<'_>) -> Rect;

    /// The value the indicator would have if its center were at `p`.
    ///
    /// The result is always within `[0, 1]`. When the geometry leaves the indicator
    /// no room to move, this returns the current value.
    fn compute_value(&self, ctx: &Context<'_>, p: Point) -> f64;

    /// Decide what a press at `p` grabbed.
    fn grab(&self, ctx: &Context<'_>, p: Point) -> Grab {
        let indicator = self.indicator_bounds(ctx);
        if indicator.includes(p) {
            Grab::Indicator {
                offset: p - indicator.center(),
            }
        } else if ctx.bounds.includes(p) {
            Grab::Track
        } else {
            Grab::Miss
        }
    }

    /// The cursor to show with the pointer at `p`.
    fn cursor(&self, ctx: &Context<'_>, p: Point) -> CursorIcon {
        if self.is_tracking() {
            CursorIcon::Grabbing
        } else if self.indicator_bounds(ctx).includes(p) {
            CursorIcon::Grab
        } else {
            CursorIcon::Default
        }
    }

    /// Get the (abridged) type name of the control for debugging purposes.
    fn short_type_name(&self) -> &'static str {
        let name = std::any::type_name::<Self>();
        name.split('<')
            .next()
            .unwrap_or(name)
            .split("::")
            .last()
            .unwrap_or(name)
    }

    /// The control's id.
    fn id(&self) -> ControlId {
        self.core().id()
    }

    /// The current normalized value.
    fn value(&self) -> f64 {
        self.core().value()
    }

    /// Assign the value directly. Clamps, and never fires `on_change`.
    ///
    /// Returns whether the stored value changed.
    fn set_value(&mut self, value: f64) -> bool {
        self.core_mut().set_value(value)
    }

    /// Whether a drag is in progress.
    fn is_tracking(&self) -> bool {
        self.core().tracking.is_some()
    }

    /// Start a drag with a press at `p`.
    ///
    /// A press on the indicator records the grab offset. A press elsewhere on the control
    /// jumps the indicator to the press point first.
    fn begin_tracking(&mut self, ctx: &Context<'_>, p: Point) -> TrackingOutcome {
        let _span = trace_span!("begin_tracking", id = self.id().trace()).entered();
        if self.is_tracking() {
            debug!("press while already tracking, ignored");
            return TrackingOutcome::Ignored;
        }
        let start_value = self.value();
        let grab = self.grab(ctx, p);
        let offset = match grab {
            Grab::Miss => {
                trace!("press outside the control");
                return TrackingOutcome::Ignored;
            }
            Grab::Indicator { offset } => offset,
            Grab::Track => Vec2::ZERO,
        };
        self.core_mut().tracking = Some(TrackingInfo {
            current: p,
            offset,
            start_value,
        });

        let changed = if grab == Grab::Track {
            let value = self.compute_value(ctx, p);
            self.core_mut().accept(value).then(|| self.value())
        } else {
            None
        };
        debug!(?offset, ?changed, "tracking started");
        TrackingOutcome::Started { changed }
    }

    /// Continue a drag with the pointer at `p`.
    ///
    /// Fires `on_change` only if the value actually changed.
    fn keep_tracking(&mut self, ctx: &Context<'_>, p: Point) -> TrackingOutcome {
        let _span = trace_span!("keep_tracking", id = self.id().trace()).entered();
        let Some(info) = self.core().tracking else {
            trace!("move without a tracking session, ignored");
            return TrackingOutcome::Ignored;
        };
        let value = self.compute_value(ctx, p - info.offset);
        if let Some(info) = self.core_mut().tracking.as_mut() {
            info.current = p;
        }
        if self.core_mut().accept(value) {
            TrackingOutcome::Changed(self.value())
        } else {
            TrackingOutcome::Unchanged
        }
    }

    /// Finish a drag. Doesn't notify: the last change already did.
    fn end_tracking(&mut self) -> TrackingOutcome {
        let _span = trace_span!("end_tracking", id = self.id().trace()).entered();
        if self.core_mut().tracking.take().is_none() {
            trace!("release without a tracking session, ignored");
            return TrackingOutcome::Ignored;
        }
        debug!(value = self.value(), "tracking ended");
        TrackingOutcome::Ended
    }

    /// Abort a drag, e.g. because the window lost focus.
    ///
    /// The value held when the gesture began is restored, and `on_change` fires once
    /// if that differs from the current value, so that linked controls follow.
    fn cancel_tracking(&mut self) -> TrackingOutcome {
        let _span = trace_span!("cancel_tracking", id = self.id().trace()).entered();
        let Some(info) = self.core_mut().tracking.take() else {
            return TrackingOutcome::Ignored;
        };
        let reverted = self
            .core_mut()
            .accept(info.start_value)
            .then(|| self.value());
        debug!(?reverted, "tracking cancelled");
        TrackingOutcome::Cancelled { reverted }
    }
}
