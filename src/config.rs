//! Configuration for scoring and rendering.
//!
//! All observable constants live here so deployments can tune them without
//! touching the engines: the score normalization rule, canvas geometry, font
//! sizes, and the bar multiplier. Everything is serde-loadable and validated
//! before use.

use crate::error::{ChromatypeError, Result};
use serde::{Deserialize, Serialize};

/// Score normalization rule.
///
/// Upstream question sets disagreed on how raw totals map onto the 0..255
/// channel (constants of 1, 2, and a per-item-count formula were all in the
/// wild), so the rule is an explicit named parameter instead of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleRule {
    /// Multiply raw totals by a fixed constant
    Fixed(f64),
    /// Derive the constant from the balanced item count per axis side:
    /// `256 / (items_per_side * 8)`, so a pool answered at full strength
    /// spans the whole channel
    PerItemCount,
}

impl ScaleRule {
    /// Resolve the rule to a concrete multiplier for one axis.
    ///
    /// `items_per_side` is the number of questions on each side of the
    /// balanced opposing pair; zero falls back to a multiplier of 1.0 so an
    /// unanswered axis still scores the neutral midpoint.
    #[must_use]
    pub fn factor(&self, items_per_side: usize) -> f64 {
        match self {
            Self::Fixed(value) => *value,
            Self::PerItemCount => {
                if items_per_side == 0 {
                    1.0
                } else {
                    256.0 / (items_per_side as f64 * 8.0)
                }
            }
        }
    }
}

impl Default for ScaleRule {
    fn default() -> Self {
        Self::Fixed(1.0)
    }
}

/// Scoring engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub scale: ScaleRule,
}

/// Result card geometry and typography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Fixed canvas width in pixels
    pub width: u32,
    /// Horizontal margin for the swatch and bars
    pub margin: f32,
    /// Left edge for description text
    pub text_inset: f32,
    /// Total horizontal budget subtracted from the width when wrapping
    /// description text; the same budget feeds measurement and drawing
    pub wrap_inset: f32,
    /// Color swatch height
    pub swatch_height: f32,
    /// Bar length per percentage point
    pub pixels_per_percent: f32,
    /// Bar thickness
    pub bar_height: f32,
    pub title_size: f32,
    pub label_size: f32,
    pub body_size: f32,
    /// Canvas background color
    pub background: String,
    /// Space reserved below the last description block
    pub bottom_margin: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            width: 900,
            margin: 100.0,
            text_inset: 80.0,
            wrap_inset: 160.0,
            swatch_height: 150.0,
            pixels_per_percent: 7.0,
            bar_height: 20.0,
            title_size: 40.0,
            label_size: 22.0,
            body_size: 18.0,
            background: "#FDFDFD".to_string(),
            bottom_margin: 100.0,
        }
    }
}

impl RenderStyle {
    /// Width available for description text after the wrap inset.
    #[must_use]
    pub fn wrap_width(&self) -> f32 {
        self.width as f32 - self.wrap_inset
    }

    /// Maximum drawable bar length, the explicit clamp for percentage bars.
    #[must_use]
    pub fn max_bar_length(&self) -> f32 {
        self.width as f32 - 2.0 * self.margin
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scoring: ScoringConfig,
    pub render: RenderStyle,
}

impl AppConfig {
    /// Validate all configuration values, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        if let ScaleRule::Fixed(value) = self.scoring.scale {
            if value <= 0.0 || !value.is_finite() {
                return Err(ChromatypeError::config(format!(
                    "scoring.scale must be a positive finite number, got {value}"
                )));
            }
        }
        let render = &self.render;
        if render.width == 0 {
            return Err(ChromatypeError::config("render.width must be positive"));
        }
        if 2.0 * render.margin >= render.width as f32 {
            return Err(ChromatypeError::config(format!(
                "render.margin {} leaves no drawable area at width {}",
                render.margin, render.width
            )));
        }
        if render.wrap_inset >= render.width as f32 {
            return Err(ChromatypeError::config(format!(
                "render.wrap_inset {} exceeds canvas width {}",
                render.wrap_inset, render.width
            )));
        }
        if render.pixels_per_percent <= 0.0 {
            return Err(ChromatypeError::config(
                "render.pixels_per_percent must be positive",
            ));
        }
        for (name, size) in [
            ("title_size", render.title_size),
            ("label_size", render.label_size),
            ("body_size", render.body_size),
        ] {
            if size <= 0.0 {
                return Err(ChromatypeError::config(format!(
                    "render.{name} must be positive, got {size}"
                )));
            }
        }
        Ok(())
    }
}
