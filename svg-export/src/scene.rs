//! Renders the vector scene to an SVG document.
//!
//! The drawing mirrors what the on-screen canvas paints: grid, axes, integer
//! tick labels, the base vector and its scalar multiple with filled
//! arrowheads, and the two corner labels. All placement goes through
//! scene-core's geometry so file and canvas stay in agreement.

use std::path::Path;

use scene_core::format::round_to;
use scene_core::scale;
use scene_core::string_error::ErrorStringExt;
use scene_core::VectorState;

use crate::svg::{opts, render, Line, Polygon, Rect, Tag, Text, SVG};

const GRID_COLOR: &str = "#dce6f0";
const AXIS_COLOR: &str = "#8c8c8c";
const TICK_COLOR: &str = "#464646";
const LABEL_COLOR: &str = "#1e1e1e";
const BASE_COLOR: &str = "#2ea071";
const SCALED_POSITIVE_COLOR: &str = "#2b8fd6";
const SCALED_NEGATIVE_COLOR: &str = "#e04b4b";

const BASE_STROKE_WIDTH: f64 = 3.0;
const SCALED_STROKE_WIDTH: f64 = 3.6;
const BASE_ARROW_SIZE: f64 = 8.0;
const SCALED_ARROW_SIZE: f64 = 10.0;

/// Build the SVG markup for the given state at the given document size.
pub fn render_scene(state: &VectorState, width: u64, height: u64) -> String {
    let (w, h) = (width as f64, height as f64);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let unit = scale::pixels_per_unit(state, w, h);

    let mut root = Tag::<SVG>::new(width, height, None);
    root.add_child(Tag::<Rect>::new(
        0.0,
        0.0,
        w,
        h,
        opts(&[("fill", "white")]),
    ));

    // Grid lines, spanning the full document.
    let grid_style = &[
        ("stroke", GRID_COLOR),
        ("stroke-width", "1"),
    ];
    for off in scale::grid_offsets(w / 2.0, unit) {
        root.add_child(Tag::<Line>::new(cx + off, 0.0, cx + off, h, opts(grid_style)));
    }
    for off in scale::grid_offsets(h / 2.0, unit) {
        root.add_child(Tag::<Line>::new(0.0, cy + off, w, cy + off, opts(grid_style)));
    }

    // Axes, inset from the document edges.
    let axis_style = &[
        ("stroke", AXIS_COLOR),
        ("stroke-width", "1.6"),
    ];
    root.add_child(Tag::<Line>::new(
        scale::AXIS_INSET,
        cy,
        w - scale::AXIS_INSET,
        cy,
        opts(axis_style),
    ));
    root.add_child(Tag::<Line>::new(
        cx,
        scale::AXIS_INSET,
        cx,
        h - scale::AXIS_INSET,
        opts(axis_style),
    ));

    // Integer tick labels, per axis.
    let tick_size = format!("{}px", scale::tick_text_size(w));
    let tick_style = &[
        ("fill", TICK_COLOR),
        ("font-size", tick_size.as_str()),
        ("text-anchor", "middle"),
        ("dominant-baseline", "middle"),
    ];
    for i in -scale::tick_range(w / 2.0, unit)..=scale::tick_range(w / 2.0, unit) {
        let x = cx + i as f64 * unit;
        root.add_child(Tag::<Text>::new(x, cy + 12.0, &i.to_string(), opts(tick_style)));
    }
    for j in -scale::tick_range(h / 2.0, unit)..=scale::tick_range(h / 2.0, unit) {
        if j == 0 {
            continue;
        }
        let y = cy - j as f64 * unit;
        root.add_child(Tag::<Text>::new(cx - 12.0, y, &j.to_string(), opts(tick_style)));
    }

    // The base vector and its scalar multiple.
    add_vector(
        &mut root,
        (cx, cy),
        scale::to_screen(state.x, state.y, unit),
        BASE_COLOR,
        BASE_STROKE_WIDTH,
        BASE_ARROW_SIZE,
    );
    let (sx, sy) = state.scaled();
    let scaled_color = if state.k < 0.0 {
        SCALED_NEGATIVE_COLOR
    } else {
        SCALED_POSITIVE_COLOR
    };
    add_vector(
        &mut root,
        (cx, cy),
        scale::to_screen(sx, sy, unit),
        scaled_color,
        SCALED_STROKE_WIDTH,
        SCALED_ARROW_SIZE,
    );

    // Corner labels.
    let label_size = format!("{}px", scale::label_text_size(w));
    let label_style = &[
        ("fill", LABEL_COLOR),
        ("font-size", label_size.as_str()),
        ("text-anchor", "start"),
    ];
    let size = scale::label_text_size(w);
    root.add_child(Tag::<Text>::new(
        8.0,
        8.0 + size,
        &format!("{}({}, {})", state.name, state.x, state.y),
        opts(label_style),
    ));
    root.add_child(Tag::<Text>::new(
        8.0,
        28.0 + size,
        &format!("k{}({}, {})", state.name, round_to(sx, 2), round_to(sy, 2)),
        opts(label_style),
    ));

    render(&root)
}

/// Write the rendered scene to `path`.
pub fn write_scene(path: &Path, state: &VectorState, width: u64, height: u64) -> Result<(), String> {
    let raw = render_scene(state, width, height);
    std::fs::write(path, raw).err_to_string("could not write svg file")?;
    log::debug!("saved scene to {:?}", path);
    Ok(())
}

fn add_vector(
    root: &mut Tag<SVG>,
    center: (f64, f64),
    offset: (f64, f64),
    color: &str,
    stroke_width: f64,
    arrow_size: f64,
) {
    let (cx, cy) = center;
    let (dx, dy) = offset;
    let width = format!("{}", stroke_width);
    root.add_child(Tag::<Line>::new(
        cx,
        cy,
        cx + dx,
        cy + dy,
        opts(&[
            ("stroke", color),
            ("stroke-width", width.as_str()),
            ("stroke-linecap", "round"),
        ]),
    ));
    let head = scale::arrowhead(dx, dy, arrow_size)
        .into_iter()
        .map(|(px, py)| (cx + px, cy + py));
    root.add_child(Tag::<Polygon>::new(head, opts(&[("fill", LABEL_COLOR)])));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_contains_expected_elements() {
        let state = VectorState::default();
        let raw = render_scene(&state, 800, 600);

        // unit = floor((600/2 - 40) / 8) = 32; 26 + 19 grid lines, 2 axes,
        // 2 vector shafts.
        assert_eq!(raw.matches("<line").count(), 49);
        // two arrowheads
        assert_eq!(raw.matches("<polygon").count(), 2);
        // 23 x ticks, 16 y ticks (origin skipped), 2 corner labels
        assert_eq!(raw.matches("<text").count(), 41);
        assert!(raw.contains(">A(3, 4)</text>"));
        assert!(raw.contains(">kA(6, 8)</text>"));
    }

    #[test]
    fn scaled_vector_color_follows_sign() {
        let mut state = VectorState::default();
        assert!(render_scene(&state, 400, 400).contains(SCALED_POSITIVE_COLOR));
        state.k = -2.0;
        let raw = render_scene(&state, 400, 400);
        assert!(raw.contains(SCALED_NEGATIVE_COLOR));
        assert!(!raw.contains(SCALED_POSITIVE_COLOR));
    }

    #[test]
    fn writes_scene_to_disk() {
        let path = std::env::temp_dir().join("skalar_scene_test.svg");
        let state = VectorState::default();
        write_scene(&path, &state, 400, 400).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("<svg"));
        let _ = std::fs::remove_file(&path);
    }
}
