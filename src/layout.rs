//! Deterministic text layout for the result card.
//!
//! Description text arrives as bullet-delimited points; the layout engine
//! wraps each point greedily against a pixel width budget and accounts for
//! the vertical extent. Height prediction and drawing consume the same
//! wrapped lines, so the predicted extent always matches what is drawn.
//!
//! Width measurement prefers real glyph advance widths from the loaded font;
//! when no font file is available it degrades to a character-cell heuristic
//! rather than failing the render.

use skrifa::instance::{LocationRef, Size};
use skrifa::{FontRef, MetadataProvider};
use unicode_width::UnicodeWidthStr;

/// Marker character separating description points.
pub const BULLET: char = '\u{2022}';

/// Extra vertical space per line beyond the font size.
pub const LINE_LEADING: f32 = 6.0;

/// Vertical gap inserted after each wrapped point.
pub const POINT_GAP: f32 = 10.0;

/// Pixel-width measurement for a single font size.
pub trait FontMetrics {
    /// Measured width of `text` in pixels.
    fn text_width(&self, text: &str) -> f32;

    /// Font size this metric measures at.
    fn font_size(&self) -> f32;

    /// Baseline-to-baseline distance for wrapped lines.
    fn line_height(&self) -> f32 {
        self.font_size() + LINE_LEADING
    }
}

/// Glyph-accurate metrics backed by a parsed font.
pub struct TtfMetrics<'a> {
    charmap: skrifa::charmap::Charmap<'a>,
    glyphs: skrifa::metrics::GlyphMetrics<'a>,
    size: f32,
}

impl<'a> TtfMetrics<'a> {
    #[must_use]
    pub fn new(font: &FontRef<'a>, size: f32) -> Self {
        Self {
            charmap: font.charmap(),
            glyphs: font.glyph_metrics(Size::new(size), LocationRef::default()),
            size,
        }
    }
}

impl FontMetrics for TtfMetrics<'_> {
    fn text_width(&self, text: &str) -> f32 {
        text.chars()
            .map(|c| match self.charmap.map(c) {
                Some(gid) => self.glyphs.advance_width(gid).unwrap_or(self.size * 0.6),
                None => self.size * 0.6,
            })
            .sum()
    }

    fn font_size(&self) -> f32 {
        self.size
    }
}

/// Degraded character-cell metrics for when no font file is available.
///
/// Counts terminal-style cells (double for wide CJK characters) at half the
/// font size per cell, which over-wraps slightly rather than overflowing.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicMetrics {
    size: f32,
}

impl HeuristicMetrics {
    #[must_use]
    pub const fn new(size: f32) -> Self {
        Self { size }
    }
}

impl FontMetrics for HeuristicMetrics {
    fn text_width(&self, text: &str) -> f32 {
        text.width() as f32 * self.size * 0.5
    }

    fn font_size(&self) -> f32 {
        self.size
    }
}

/// One bullet point wrapped into lines that fit the width budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedPoint {
    pub lines: Vec<String>,
}

/// Wrap bullet-delimited text against a pixel width budget.
///
/// The text is split on the bullet marker; empty fragments are discarded and
/// each surviving point is re-prefixed with the marker before greedy word
/// packing. A word that alone exceeds the budget still occupies its own line
/// so wrapping always terminates.
#[must_use]
pub fn wrap(text: &str, metrics: &dyn FontMetrics, max_width: f32) -> Vec<WrappedPoint> {
    text.split(BULLET)
        .map(str::trim)
        .filter(|point| !point.is_empty())
        .map(|point| wrap_point(point, metrics, max_width))
        .collect()
}

fn wrap_point(point: &str, metrics: &dyn FontMetrics, max_width: f32) -> WrappedPoint {
    let bulleted = format!("{BULLET} {point}");
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in bulleted.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if metrics.text_width(&candidate) < max_width {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    WrappedPoint { lines }
}

/// Total vertical extent of wrapped points, including inter-point gaps.
#[must_use]
pub fn block_height(points: &[WrappedPoint], metrics: &dyn FontMetrics) -> f32 {
    points
        .iter()
        .map(|point| point.lines.len() as f32 * metrics.line_height() + POINT_GAP)
        .sum()
}
