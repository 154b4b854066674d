//! Result card rendering tests.
//!
//! Verify that rendering produces valid PNG output and that the canvas
//! height tracks the description content instead of clipping it.

use chromatype::config::RenderStyle;
use chromatype::model::{AxisResult, ColorProfile};
use chromatype::render::{FontStore, ResultRenderer};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

fn profile(raw: i32) -> ColorProfile {
    let axis = AxisResult::from_raw(raw, 1.0);
    ColorProfile::from_axes(axis, axis, axis)
}

fn renderer() -> ResultRenderer {
    ResultRenderer::new(RenderStyle::default(), FontStore::default())
}

#[test]
fn test_render_produces_png() {
    let descriptions = [
        "• direct and energetic • quick to commit",
        "• keeps the peace • listens first",
        "• thinks in systems • prepares thoroughly",
    ];
    let png = renderer()
        .render(&profile(0), descriptions)
        .expect("render should succeed");

    assert!(png.len() > PNG_SIGNATURE.len());
    assert_eq!(&png[..8], &PNG_SIGNATURE);
}

#[test]
fn test_saturated_profile_renders() {
    let png = renderer()
        .render(&profile(200), ["• max", "• max", "• max"])
        .expect("render should succeed");
    assert_eq!(&png[..8], &PNG_SIGNATURE);
}

#[test]
fn test_long_descriptions_grow_the_canvas() {
    let r = renderer();
    let p = profile(0);

    let short = r.measure_height(&p, ["• a", "• b", "• c"]);

    let many_points: String = (0..200)
        .map(|i| format!("• point number {i} with a handful of extra words"))
        .collect::<Vec<_>>()
        .join(" ");
    let tall = r.measure_height(&p, [&many_points, &many_points, &many_points]);

    // 600 bullet points must extend the canvas, never clip
    assert!(tall > short + 10_000, "short {short}, tall {tall}");

    let png = r
        .render(&p, [&many_points, &many_points, &many_points])
        .expect("tall render should succeed");
    assert_eq!(&png[..8], &PNG_SIGNATURE);
}

#[test]
fn test_measure_matches_render_height() {
    let r = renderer();
    let p = profile(50);
    let descriptions = ["• alpha beta gamma", "• delta", "• epsilon zeta"];

    let height = r.measure_height(&p, descriptions);
    let png = r.render(&p, descriptions).expect("render");

    // PNG IHDR: height is bytes 20..24 big-endian
    let ihdr_height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    assert_eq!(ihdr_height, height);
    let ihdr_width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    assert_eq!(ihdr_width, RenderStyle::default().width);
}
