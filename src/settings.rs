//! Lasso appearance and hit-test settings.
//!
//! Hosts usually only override a couple of fields, so settings come in two
//! shapes: [`LassoSettings`] with every field set, and
//! [`LassoSettingsPatch`] with optional fields that can be deserialized from
//! a config file and merged over the defaults.
//!
//! ```
//! use slint_node_gestures::{LassoSettings, LassoSettingsPatch};
//!
//! let patch: LassoSettingsPatch = serde_json::from_str(r#"{ "line_width": 2.0 }"#).unwrap();
//! let settings = LassoSettings::default().merged(&patch);
//! assert_eq!(settings.line_width, 2.0);
//! ```

use crate::path::FillRule;
use log::warn;
use serde::Deserialize;
use slint::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LassoSettings {
    /// Fill of the in-progress lasso when `fill_while_drawing` is set.
    pub fill_color: Color,
    pub stroke_color: Color,
    /// Stroke width in pixels.
    pub line_width: f32,
    pub fill_while_drawing: bool,
    /// How self-intersecting lassos are resolved when selecting.
    pub fill_rule: FillRule,
}

impl Default for LassoSettings {
    fn default() -> Self {
        Self {
            fill_color: Color::from_rgb_u8(200, 200, 200),
            stroke_color: Color::from_rgb_u8(0, 0, 0),
            line_width: 5.0,
            fill_while_drawing: false,
            fill_rule: FillRule::NonZero,
        }
    }
}

impl LassoSettings {
    /// Copy of `self` with every field present in `patch` overwritten.
    pub fn merged(&self, patch: &LassoSettingsPatch) -> Self {
        let mut settings = *self;
        settings.apply(patch);
        settings
    }

    /// Overwrite the fields present in `patch`.
    ///
    /// Negative or non-finite line widths are ignored.
    pub fn apply(&mut self, patch: &LassoSettingsPatch) {
        if let Some(color) = patch.fill_color {
            self.fill_color = color.into();
        }
        if let Some(color) = patch.stroke_color {
            self.stroke_color = color.into();
        }
        if let Some(width) = patch.line_width {
            if width.is_finite() && width >= 0.0 {
                self.line_width = width;
            } else {
                warn!("ignoring invalid lasso line width {}", width);
            }
        }
        if let Some(fill) = patch.fill_while_drawing {
            self.fill_while_drawing = fill;
        }
        if let Some(rule) = patch.fill_rule {
            self.fill_rule = rule;
        }
    }
}

/// Colour as it appears in a settings patch: `[r, g, b]` or `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PatchColor {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl From<PatchColor> for Color {
    fn from(color: PatchColor) -> Self {
        match color {
            PatchColor::Rgb([r, g, b]) => Color::from_rgb_u8(r, g, b),
            PatchColor::Rgba([r, g, b, a]) => Color::from_argb_u8(a, r, g, b),
        }
    }
}

/// Partial [`LassoSettings`]; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LassoSettingsPatch {
    pub fill_color: Option<PatchColor>,
    pub stroke_color: Option<PatchColor>,
    pub line_width: Option<f32>,
    pub fill_while_drawing: Option<bool>,
    pub fill_rule: Option<FillRule>,
}
