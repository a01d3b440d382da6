// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use tracing::warn;

use crate::peniko::Color;
use crate::theme;
use crate::util::Sanitize;

/// Environment variable read by [`Config::from_env`] to override the tick mark thickness.
pub const MARK_THICKNESS_ENV_VAR: &str = "KNURL_MARK_THICKNESS";

/// Colors used by the built-in elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Fill of slider tracks.
    pub track: Color,
    /// Fill of slider thumbs.
    pub thumb: Color,
    /// Fill of dial knobs.
    pub knob: Color,
    /// The line showing a knob's current angle.
    pub pointer: Color,
    /// Tick marks around tracks and knobs.
    pub marks: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            track: theme::TRACK_COLOR,
            thumb: theme::THUMB_COLOR,
            knob: theme::KNOB_COLOR,
            pointer: theme::POINTER_COLOR,
            marks: theme::MARKS_COLOR,
        }
    }
}

/// Configuration shared by every element during a layout, paint or event pass.
///
/// A reference to it is carried by each [`Context`](crate::core::Context).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Colors for the built-in elements.
    pub palette: Palette,
    /// Stroke width of tick marks, in logical pixels.
    pub mark_thickness: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            mark_thickness: theme::MARK_THICKNESS,
        }
    }
}

impl Config {
    /// The default configuration, with overrides read from the environment.
    ///
    /// Currently this only reads [`MARK_THICKNESS_ENV_VAR`].
    /// Values which fail to parse are logged and ignored.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides looked up by variable name through `var`.
    fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = var(MARK_THICKNESS_ENV_VAR) {
            match raw.trim().parse::<f64>() {
                Ok(thickness) if thickness.is_finite() && thickness >= 0. => {
                    self.mark_thickness = thickness;
                }
                _ => warn!("ignoring invalid {MARK_THICKNESS_ENV_VAR} value {raw:?}"),
            }
        }
        self
    }

    /// Builder-style method to replace the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Builder-style method to set the tick mark thickness.
    pub fn with_mark_thickness(mut self, thickness: f64) -> Self {
        self.mark_thickness = thickness.sanitize("mark thickness");
        self
    }
}
