// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A recording of the values a control's `on_change` callback was invoked with.
///
/// Clones share the same queue, so a test keeps one clone and hands
/// [`callback`](Self::callback) to the control:
///
/// ```
/// use knurl::controls::{Control, Slider};
/// use knurl::elements::{Thumb, Track};
/// use knurl::testing::ChangeRecording;
///
/// let recording = ChangeRecording::default();
/// let mut slider = Slider::new(Thumb::new(20.), Track::horizontal(5.), 0.)
///     .with_on_change(recording.callback());
///
/// // Direct assignments are never recorded.
/// slider.set_value(0.5);
/// assert!(recording.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChangeRecording(Rc<RefCell<VecDeque<f64>>>);

impl ChangeRecording {
    /// A change callback which appends to this recording.
    pub fn callback(&self) -> impl FnMut(f64) + 'static {
        let recording = self.clone();
        move |value| recording.0.borrow_mut().push_back(value)
    }

    /// True if no changes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// The number of changes in the recording.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Clear recorded changes.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Returns the oldest recorded change, if one exists.
    ///
    /// This consumes the change.
    pub fn next(&self) -> Option<f64> {
        self.0.borrow_mut().pop_front()
    }

    /// Returns every recorded change, oldest first, emptying the recording.
    pub fn drain(&self) -> Vec<f64> {
        self.0.borrow_mut().drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_queue() {
        let recording = ChangeRecording::default();
        let mut callback = recording.callback();
        callback(0.25);
        callback(0.5);
        assert_eq!(recording.len(), 2);
        assert_eq!(recording.next(), Some(0.25));
        assert_eq!(recording.drain(), vec![0.5]);
        assert!(recording.is_empty());
    }
}
