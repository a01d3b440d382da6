// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

/// Something a control did in response to pointer input.
///
/// Queued by the [`ControlRoot`](super::ControlRoot) alongside the id of the control it
/// comes from, and drained with [`pop_action`](super::ControlRoot::pop_action).
/// Direct value assignments, including those made to keep link groups in sync, don't
/// queue actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// A press started a drag on the control.
    TrackingStarted,
    /// Tracking changed the control's value to the given one.
    ValueChanged(f64),
    /// The drag ended with the pointer being released.
    TrackingEnded,
    /// The drag was interrupted, and the value restored.
    TrackingCancelled,
}
