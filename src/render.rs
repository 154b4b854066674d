//! Result card renderer: composes the scored profile into a PNG image.
//!
//! The card is composed as SVG and rasterized with resvg. Height is computed
//! from the same cursor walk that places every element, so the canvas always
//! fits the content: wrapped description lines are produced once by the
//! layout engine and both the height accounting and the drawing consume
//! them.
//!
//! A missing or unreadable font file degrades the render (system fonts and
//! heuristic width metrics) instead of failing it; only SVG parsing, pixmap
//! allocation, and PNG encoding are hard errors.

use crate::config::RenderStyle;
use crate::error::{ChromatypeError, RenderErrorKind, Result};
use crate::layout::{self, FontMetrics, HeuristicMetrics, TtfMetrics, POINT_GAP};
use crate::model::{ColorProfile, TraitAxis};
use skrifa::FontRef;
use std::fmt::Write as _;
use std::path::Path;

const CARD_TITLE: &str = "Personality Color Profile";
const SECTION_TITLE: &str = "Detailed Analysis";

/// Loaded font bytes, or nothing when running degraded.
#[derive(Debug, Default)]
pub struct FontStore {
    data: Option<Vec<u8>>,
}

impl FontStore {
    /// Load a font file, degrading to the built-in fallback when the path is
    /// absent, unreadable, or not a parseable font.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self { data: None };
        };
        match std::fs::read(path) {
            Ok(data) => {
                if FontRef::new(&data).is_err() {
                    tracing::warn!(
                        path = %path.display(),
                        "Font file is not parseable; falling back to system fonts"
                    );
                    return Self { data: None };
                }
                Self { data: Some(data) }
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    %err,
                    "Font file unavailable; falling back to system fonts"
                );
                Self { data: None }
            }
        }
    }

    fn font(&self) -> Option<FontRef<'_>> {
        self.data.as_deref().and_then(|d| FontRef::new(d).ok())
    }
}

/// Renderer for the downloadable summary card.
#[derive(Debug, Default)]
pub struct ResultRenderer {
    style: RenderStyle,
    fonts: FontStore,
}

impl ResultRenderer {
    #[must_use]
    pub const fn new(style: RenderStyle, fonts: FontStore) -> Self {
        Self { style, fonts }
    }

    /// Render the card to PNG bytes.
    ///
    /// `descriptions` holds one bullet-delimited text per axis in R, G, B
    /// order.
    pub fn render(&self, profile: &ColorProfile, descriptions: [&str; 3]) -> Result<Vec<u8>> {
        let (svg, height) = self.compose(profile, descriptions);
        self.rasterize(&svg, self.style.width, height)
    }

    /// Compute the card height without rasterizing.
    ///
    /// Uses the identical composition walk as [`ResultRenderer::render`].
    #[must_use]
    pub fn measure_height(&self, profile: &ColorProfile, descriptions: [&str; 3]) -> u32 {
        self.compose(profile, descriptions).1
    }

    /// Walk the card top to bottom, emitting SVG elements and accumulating
    /// the cursor; the final cursor plus the bottom margin is the canvas
    /// height.
    fn compose(&self, profile: &ColorProfile, descriptions: [&str; 3]) -> (String, u32) {
        let s = &self.style;
        let w = s.width as f32;
        let font = self.fonts.font();
        let metrics: Box<dyn FontMetrics + '_> = match &font {
            Some(f) => Box::new(TtfMetrics::new(f, s.body_size)),
            None => Box::new(HeuristicMetrics::new(s.body_size)),
        };

        let mut body = String::new();
        let mut y = 60.0f32;

        // Title
        let _ = write!(
            body,
            "<text x='{:.1}' y='{:.1}' text-anchor='middle' dominant-baseline='middle' \
             font-family='sans-serif' font-size='{}' font-weight='600' fill='black'>{}</text>",
            w / 2.0,
            y + s.title_size / 2.0,
            s.title_size,
            escape_xml(CARD_TITLE)
        );
        y += s.title_size + 40.0;

        // Color swatch
        let _ = write!(
            body,
            "<rect x='{:.1}' y='{:.1}' width='{:.1}' height='{:.1}' fill='{}' \
             stroke='gray' stroke-width='2'/>",
            s.margin,
            y,
            w - 2.0 * s.margin,
            s.swatch_height,
            profile.hex
        );
        y += s.swatch_height + 20.0;

        // Hex label
        let _ = write!(
            body,
            "<text x='{:.1}' y='{:.1}' text-anchor='middle' dominant-baseline='middle' \
             font-family='sans-serif' font-size='{}' font-weight='600' fill='black'>{}</text>",
            w / 2.0,
            y + s.label_size / 2.0,
            s.label_size,
            escape_xml(&format!("Your color: {}", profile.hex))
        );
        y += s.label_size + 30.0;

        // Percentage bars
        for axis in TraitAxis::ALL {
            let percentage = profile.percentage(axis);
            let _ = write!(
                body,
                "<text x='{:.1}' y='{:.1}' dominant-baseline='hanging' \
                 font-family='sans-serif' font-size='{}' font-weight='600' fill='black'>{}</text>",
                s.margin,
                y,
                s.label_size,
                escape_xml(&format!("{}: {percentage:.1}%", axis.label()))
            );
            let bar_length = (percentage as f32 * s.pixels_per_percent)
                .clamp(0.0, s.max_bar_length());
            let _ = write!(
                body,
                "<rect x='{:.1}' y='{:.1}' width='{:.1}' height='{:.1}' fill='{}'/>",
                s.margin,
                y + 35.0,
                bar_length,
                s.bar_height,
                axis.bar_color()
            );
            y += 80.0;
        }
        y += 40.0;

        // Section title
        let _ = write!(
            body,
            "<text x='50' y='{:.1}' dominant-baseline='hanging' \
             font-family='sans-serif' font-size='{}' font-weight='600' fill='black'>{}</text>",
            y,
            s.title_size,
            escape_xml(SECTION_TITLE)
        );
        y += s.title_size + 30.0;

        // Description blocks: one wrap pass per axis, drawn line by line
        for text in descriptions {
            let points = layout::wrap(text, metrics.as_ref(), s.wrap_width());
            for point in &points {
                for line in &point.lines {
                    let _ = write!(
                        body,
                        "<text x='{:.1}' y='{:.1}' dominant-baseline='hanging' \
                         font-family='sans-serif' font-size='{}' fill='#333333'>{}</text>",
                        s.text_inset,
                        y,
                        s.body_size,
                        escape_xml(line)
                    );
                    y += metrics.line_height();
                }
                y += POINT_GAP;
            }
        }

        let height = (y + s.bottom_margin).ceil() as u32;
        let svg = format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' \
             viewBox='0 0 {w} {h}'><rect width='100%' height='100%' fill='{bg}'/>{body}</svg>",
            w = s.width,
            h = height,
            bg = s.background,
        );
        (svg, height)
    }

    fn rasterize(&self, svg: &str, width: u32, height: u32) -> Result<Vec<u8>> {
        let mut options = usvg::Options::default();
        let fontdb = options.fontdb_mut();
        if let Some(data) = &self.fonts.data {
            fontdb.load_font_data(data.clone());
            // Route the generic family used in the SVG to the loaded font
            let family = fontdb
                .faces()
                .next()
                .and_then(|face| face.families.first().map(|(name, _)| name.clone()));
            if let Some(name) = family {
                fontdb.set_sans_serif_family(name);
            }
        } else {
            fontdb.load_system_fonts();
        }

        let tree = usvg::Tree::from_str(svg, &options).map_err(|e| {
            ChromatypeError::render(
                "composing result card",
                RenderErrorKind::SvgParse(format!("{e:?}")),
            )
        })?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            ChromatypeError::render(
                "allocating result card canvas",
                RenderErrorKind::PixmapAlloc { width, height },
            )
        })?;
        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().map_err(|e| {
                ChromatypeError::render(
                    "encoding result card",
                    RenderErrorKind::PngEncode(e.to_string()),
                )
            })?;
            writer.write_image_data(pixmap.data()).map_err(|e| {
                ChromatypeError::render(
                    "encoding result card",
                    RenderErrorKind::PngEncode(e.to_string()),
                )
            })?;
        }
        Ok(out)
    }
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AxisResult;

    fn neutral_profile() -> ColorProfile {
        let mid = AxisResult::from_raw(0, 1.0);
        ColorProfile::from_axes(mid, mid, mid)
    }

    fn renderer() -> ResultRenderer {
        ResultRenderer::new(RenderStyle::default(), FontStore::default())
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&'\""), "a&lt;b&gt;&amp;&apos;&quot;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_measured_height_grows_with_content() {
        let r = renderer();
        let profile = neutral_profile();
        let short = r.measure_height(&profile, ["• one point", "• one", "• one"]);
        let long_text = "• a longer point with many words repeated over and over again"
            .repeat(20);
        let long = r.measure_height(&profile, [&long_text, &long_text, &long_text]);
        assert!(long > short, "{long} should exceed {short}");
    }

    #[test]
    fn test_compose_embeds_profile_color() {
        let r = renderer();
        let profile = neutral_profile();
        let (svg, height) = r.compose(&profile, ["• a", "• b", "• c"]);
        assert!(svg.contains("#808080"));
        assert!(svg.contains(&format!("height='{height}'")));
        assert!(svg.contains("50.0%"), "bars carry one-decimal percentages");
    }

    #[test]
    fn test_bar_length_is_clamped() {
        let mut style = RenderStyle::default();
        style.pixels_per_percent = 50.0; // would overshoot the canvas unclamped
        let r = ResultRenderer::new(style.clone(), FontStore::default());
        let profile = neutral_profile();
        let (svg, _) = r.compose(&profile, ["• a", "• b", "• c"]);
        let max = style.max_bar_length();
        assert!(
            svg.contains(&format!("width='{max:.1}'")),
            "bars clamp to the drawable width"
        );
    }

    #[test]
    fn test_missing_font_path_degrades() {
        let store = FontStore::load(Some(Path::new("/nonexistent/font.ttf")));
        let r = ResultRenderer::new(RenderStyle::default(), store);
        // Composition still works on heuristic metrics
        let (svg, _) = r.compose(&neutral_profile(), ["• a", "• b", "• c"]);
        assert!(svg.contains("<svg"));
    }
}
