// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! Interactive controls: the value they hold, how they map it to geometry,
//! and the pointer tracking state machine they share.

mod control;
mod control_core;
mod dial;
mod slider;
mod value;

pub use control::{Control, Grab, TrackingOutcome};
pub use control_core::{ControlCore, TrackingInfo};
pub use dial::Dial;
pub use slider::Slider;
pub use value::clamp_value;
