// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use crate::core::ControlId;

/// The host's side of redrawing.
///
/// After any accepted value change, the [`ControlRoot`](crate::app::ControlRoot) calls
/// [`refresh`](Self::refresh) for every control whose appearance changed.
/// Requests are fire-and-forget: the root never waits for the repaint.
pub trait View {
    /// Schedule a repaint of the screen region occupied by the control `id`.
    fn refresh(&mut self, id: ControlId);
}

/// A [`View`] which records refresh requests in order.
///
/// Useful for hosts which batch repaints once per frame, and for tests.
#[derive(Debug, Default, Clone)]
pub struct RefreshQueue {
    pending: Vec<ControlId>,
}

impl RefreshQueue {
    /// Whether no refresh has been requested since the last [`take`](Self::take).
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain the recorded requests, oldest first.
    pub fn take(&mut self) -> Vec<ControlId> {
        std::mem::take(&mut self.pending)
    }
}

impl View for RefreshQueue {
    fn refresh(&mut self, id: ControlId) {
        self.pending.push(id);
    }
}

impl<V: View + ?Sized> View for &mut V {
    fn refresh(&mut self, id: ControlId) {
        (**self).refresh(id);
    }
}
