// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! Headless runner and helpers for testing controls.
//!
//! The primary type from this module is [`TestHarness`], which hosts controls in a
//! [`ControlRoot`](crate::app::ControlRoot) and lets tests simulate mouse gestures and
//! inspect the resulting values, actions and refresh requests.

mod harness;
mod recording;

pub use harness::TestHarness;
pub use recording::ChangeRecording;
