//! Scored results: per-axis values and the combined color profile.

use super::TraitAxis;
use serde::{Deserialize, Serialize};

/// Score for one trait axis, derived from the raw answer totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisResult {
    /// Signed sum of contributions: positive totals minus negative totals
    pub raw: i32,
    /// Channel value: `128 + raw * scale`, clamped to 0..=255
    pub absolute: u8,
    /// `absolute / 256 * 100`, rounded to one decimal
    pub percentage: f64,
}

impl AxisResult {
    /// Derive the axis result from a raw total and a normalization scale.
    ///
    /// The neutral midpoint (raw = 0) lands on 128 regardless of scale, so an
    /// axis nobody answered scores exactly 50.0%.
    #[must_use]
    pub fn from_raw(raw: i32, scale: f64) -> Self {
        let shifted = 128.0 + raw as f64 * scale;
        let absolute = shifted.round().clamp(0.0, 255.0) as u8;
        let percentage = (f64::from(absolute) / 256.0 * 100.0 * 10.0).round() / 10.0;
        Self {
            raw,
            absolute,
            percentage,
        }
    }
}

/// Complete three-channel profile: a hex color plus the per-axis breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorProfile {
    /// `#RRGGBB`, uppercase hex, each channel zero-padded to two digits
    pub hex: String,
    pub r: AxisResult,
    pub g: AxisResult,
    pub b: AxisResult,
}

impl ColorProfile {
    /// Combine three axis results into a profile, deriving the hex color.
    #[must_use]
    pub fn from_axes(r: AxisResult, g: AxisResult, b: AxisResult) -> Self {
        let hex = format!("#{:02X}{:02X}{:02X}", r.absolute, g.absolute, b.absolute);
        Self { hex, r, g, b }
    }

    #[must_use]
    pub const fn axis(&self, axis: TraitAxis) -> &AxisResult {
        match axis {
            TraitAxis::R => &self.r,
            TraitAxis::G => &self.g,
            TraitAxis::B => &self.b,
        }
    }

    #[must_use]
    pub const fn percentage(&self, axis: TraitAxis) -> f64 {
        self.axis(axis).percentage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_midpoint() {
        let result = AxisResult::from_raw(0, 1.0);
        assert_eq!(result.absolute, 128);
        assert_eq!(result.percentage, 50.0);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(AxisResult::from_raw(1000, 1.0).absolute, 255);
        assert_eq!(AxisResult::from_raw(-1000, 1.0).absolute, 0);
        assert_eq!(AxisResult::from_raw(-1000, 1.0).percentage, 0.0);
    }

    #[test]
    fn test_worked_example() {
        // One RP answer of +4 and one RS answer of -4: raw = 4 - (-4) = 8
        let result = AxisResult::from_raw(8, 1.0);
        assert_eq!(result.absolute, 136);
        assert_eq!(result.percentage, 53.1);
    }

    #[test]
    fn test_scale_applies_before_clamp() {
        let result = AxisResult::from_raw(8, 2.0);
        assert_eq!(result.absolute, 144);
    }

    #[test]
    fn test_hex_formatting() {
        let neutral = AxisResult::from_raw(0, 1.0);
        let profile = ColorProfile::from_axes(neutral, neutral, neutral);
        assert_eq!(profile.hex, "#808080");

        let low = AxisResult::from_raw(-200, 1.0);
        let high = AxisResult::from_raw(200, 1.0);
        let profile = ColorProfile::from_axes(low, neutral, high);
        assert_eq!(profile.hex, "#0080FF");
        assert_eq!(profile.hex.len(), 7);
    }
}
