// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

/// Bring a computed or assigned value into `[0, 1]`.
///
/// Out of range values saturate. A NaN, which is what a degenerate mapping produces,
/// holds `previous` instead.
pub fn clamp_value(value: f64, previous: f64) -> f64 {
    if value.is_nan() {
        previous
    } else {
        value.clamp(0., 1.)
    }
}

/// Where `pos` falls along a run of length `travel` starting at `start`, as a fraction.
///
/// Returns `None` when `travel` leaves no room to move, so that callers can hold their
/// current value instead of dividing by zero.
pub(crate) fn fraction_along(pos: f64, start: f64, travel: f64) -> Option<f64> {
    if travel > 0. && travel.is_finite() {
        Some((pos - start) / travel)
    } else {
        None
    }
}
