// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::field::DisplayValue;

/// A unique identifier for a single control.
///
/// Ids are allocated when a control is constructed and are unique for the whole process.
/// They are how a [`ControlRoot`](crate::app::ControlRoot) routes events, how
/// [`LinkGroup`](crate::app::LinkGroup)s refer to their members, and what a
/// [`View`](crate::core::View) is asked to refresh.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ControlId(NonZeroU64);

impl ControlId {
    /// Allocate a new, unique `ControlId`.
    pub fn next() -> Self {
        static CONTROL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
        let id = CONTROL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        match NonZeroU64::new(id) {
            Some(id) => Self(id),
            None => unreachable!("control id counter overflowed"),
        }
    }

    /// A serialized representation of the `ControlId` for debugging purposes.
    pub fn trace(self) -> DisplayValue<Self> {
        tracing::field::display(self)
    }

    /// The raw integer value of this id.
    pub fn to_raw(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = ControlId::next();
        let b = ControlId::next();
        assert_ne!(a, b);
        assert!(b.to_raw() > a.to_raw());
        assert_eq!(a.to_string(), format!("#{}", a.to_raw()));
    }
}
