// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! Types needed for running a set of controls.

mod action;
mod link;
mod root;
mod tracing_backend;

pub use action::Action;
pub use link::LinkGroup;
pub use root::ControlRoot;
pub use tracing_backend::{
    TracingSubscriberHasBeenSetError, default_tracing_subscriber, try_init_test_tracing,
    try_init_tracing,
};
