// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use tracing::{trace, warn};
use vello::kurbo::{Point, Vec2};

use crate::controls::clamp_value;
use crate::core::ControlId;

/// The ephemeral state of a drag, alive between pointer down and pointer up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingInfo {
    /// The latest pointer position seen.
    pub current: Point,
    /// Vector from the indicator's center to the point originally grabbed.
    ///
    /// Subtracted from every pointer position, so that the indicator keeps its
    /// position relative to the pointer instead of snapping its center to it.
    pub offset: Vec2,
    /// The control's value when the gesture began, restored on cancellation.
    pub start_value: f64,
}

/// State shared by every control: its id, its value, its change callback,
/// and the current tracking session, if any.
///
/// The value is normalized: it stays within `[0, 1]` at all observable times.
pub struct ControlCore {
    id: ControlId,
    value: f64,
    on_change: Option<Box<dyn FnMut(f64)>>,
    pub(crate) tracking: Option<TrackingInfo>,
}

impl fmt::Debug for ControlCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlCore")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .field("tracking", &self.tracking)
            .finish()
    }
}

impl ControlCore {
    /// Create the state for a new control, allocating a fresh [`ControlId`].
    ///
    /// `value` is clamped; a NaN starts the control at 0.0.
    pub fn new(value: f64) -> Self {
        Self {
            id: ControlId::next(),
            value: clamp_value(value, 0.),
            on_change: None,
            tracking: None,
        }
    }

    /// The control's id.
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// The current normalized value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The current tracking session, if the control is being dragged.
    pub fn tracking(&self) -> Option<&TrackingInfo> {
        self.tracking.as_ref()
    }

    /// Assign the value directly, without notifying [`on_change`](Self::set_on_change).
    ///
    /// This is how linked controls are kept in sync: since assignments never notify,
    /// a cycle of linked controls can't feed back into itself.
    ///
    /// Returns whether the stored value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        if value.is_nan() {
            warn!(id = self.id.trace(), "ignoring NaN value assignment");
        }
        let value = clamp_value(value, self.value);
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }

    /// Attach the callback invoked with the new value whenever tracking changes it.
    ///
    /// Replaces any previous callback.
    pub fn set_on_change(&mut self, on_change: impl FnMut(f64) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Detach the change callback.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Accept a value produced by user interaction.
    ///
    /// Like [`set_value`](Self::set_value), but fires the change callback,
    /// exactly once, when the stored value actually changes.
    pub(crate) fn accept(&mut self, value: f64) -> bool {
        if !self.set_value(value) {
            trace!(id = self.id.trace(), "value unchanged");
            return false;
        }
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(self.value);
        }
        true
    }
}
