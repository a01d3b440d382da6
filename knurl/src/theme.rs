// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! Default values used by the built-in elements in their limits and paint methods.

#![allow(missing_docs, reason = "Names are self-explanatory.")]

use crate::peniko::Color;

/// Default color for the host background.
///
/// If the host does some kind of beginning-of-frame clearing,
/// it should clear with this color by default.
pub const BACKGROUND_COLOR: Color = Color::from_rgb8(0x23, 0x23, 0x25);

// Zync color variations from https://tailwindcss.com/docs/colors
pub const ZYNC_900: Color = Color::from_rgb8(0x18, 0x18, 0x1b);
pub const ZYNC_800: Color = Color::from_rgb8(0x27, 0x27, 0x2a);
pub const ZYNC_700: Color = Color::from_rgb8(0x3f, 0x3f, 0x46);
pub const ZYNC_500: Color = Color::from_rgb8(0x71, 0x71, 0x7a);

pub const ACCENT_COLOR: Color = Color::from_rgb8(0x3b, 0x7e, 0xe4);
pub const INDICATOR_COLOR: Color = Color::from_rgb8(0xf2, 0xf2, 0xf2);

pub const TRACK_COLOR: Color = ZYNC_700;
pub const THUMB_COLOR: Color = INDICATOR_COLOR;
pub const KNOB_COLOR: Color = ZYNC_800;
pub const POINTER_COLOR: Color = ACCENT_COLOR;
pub const MARKS_COLOR: Color = ZYNC_500;

pub const MARK_THICKNESS: f64 = 1.;
pub const TRACK_THICKNESS: f64 = 5.;
pub const THUMB_SIZE: f64 = 25.;
pub const KNOB_SIZE: f64 = 50.;

/// The unbounded maximum extent an element can report.
pub const FULL_EXTENT: f64 = 1e6;

/// Angle, in degrees clockwise from straight down, where a dial's sweep starts.
pub const DIAL_START_DEGREES: f64 = 30.;
/// Angular range, in degrees, covered by a dial going from 0.0 to 1.0.
pub const DIAL_SWEEP_DEGREES: f64 = 300.;
