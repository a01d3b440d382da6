// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! Miscellaneous utility functions.

use vello::Scene;
use vello::kurbo::{Affine, Shape, Stroke};
use vello::peniko::{BrushRef, Fill};

/// Panic in debug and `tracing::error` in release mode.
///
/// This macro is in some way a combination of `panic` and `debug_assert`,
/// but it will log the provided message instead of ignoring it in release builds.
///
/// It's useful when a backtrace would aid debugging but a crash can be avoided in release.
#[macro_export]
macro_rules! debug_panic {
    ($msg:expr$(,)?) => {
        if cfg!(debug_assertions) {
            panic!($msg);
        } else {
            tracing::error!($msg);
        }
    };
    ($fmt:expr, $($arg:tt)+) => {
        if cfg!(debug_assertions) {
            panic!($fmt, $($arg)*);
        } else {
            tracing::error!($fmt, $($arg)*);
        }
    };
}

pub use crate::debug_panic;

/// Provides sanitization of values.
///
/// Implemented for `f64` in a way that forbids non-finite and negative values,
/// which is what element sizes and thicknesses need.
pub trait Sanitize {
    /// Returns the sanitized value.
    ///
    /// Depending on the implementation, may also panic or log.
    #[track_caller]
    fn sanitize(self, name: &str) -> Self;
}

impl Sanitize for f64 {
    /// Ensures the value is finite and non-negative.
    ///
    /// Non-finite or negative value falls back to zero.
    ///
    /// `name` is how the value will be named in the log message.
    ///
    /// # Panics
    ///
    /// Panics if the value is non-finite or negative and debug assertions are enabled.
    #[track_caller]
    fn sanitize(self, name: &str) -> Self {
        if !self.is_finite() {
            debug_panic!("{name} must be finite. Received: {self}");
            0.
        } else if self < 0. {
            debug_panic!("{name} must be non-negative. Received: {self}");
            0.
        } else {
            self
        }
    }
}

/// Helper function for [`Scene::fill`].
pub fn fill<'b>(scene: &mut Scene, path: &impl Shape, brush: impl Into<BrushRef<'b>>) {
    scene.fill(Fill::NonZero, Affine::IDENTITY, brush, None, path);
}

/// Helper function for [`Scene::stroke`].
pub fn stroke<'b>(
    scene: &mut Scene,
    path: &impl Shape,
    brush: impl Into<BrushRef<'b>>,
    stroke_width: f64,
) {
    scene.stroke(
        &Stroke::new(stroke_width),
        Affine::IDENTITY,
        brush,
        None,
        path,
    );
}
