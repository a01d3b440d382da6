// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use vello::kurbo::Rect;

use crate::core::Config;

/// Transient state passed to an element during a layout, paint or event pass.
///
/// Carries the rectangle currently assigned to the element and the shared [`Config`].
/// A context is created by the traversal that needs it and never stored.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// The rectangle assigned to the element, in the host's local coordinates.
    pub bounds: Rect,
    /// Configuration shared by the whole pass.
    pub config: &'a Config,
}

impl<'a> Context<'a> {
    /// Create a context for an element occupying `bounds`.
    pub fn new(config: &'a Config, bounds: Rect) -> Self {
        Self { bounds, config }
    }

    /// Derive a context for a child occupying `bounds`, sharing the same configuration.
    pub fn with_bounds(&self, bounds: Rect) -> Self {
        Self {
            bounds,
            config: self.config,
        }
    }
}

impl Context<'static> {
    /// A context with the default configuration and empty bounds.
    ///
    /// Used where an element has to be queried before it is placed anywhere,
    /// such as when a control decides its orientation.
    pub fn detached() -> Self {
        static DEFAULT_CONFIG: OnceLock<Config> = OnceLock::new();
        Self::new(DEFAULT_CONFIG.get_or_init(Config::default), Rect::ZERO)
    }
}
