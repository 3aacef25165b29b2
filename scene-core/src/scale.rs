//! Scaling and coordinate math for the vector scene.
//!
//! All geometry is expressed as offsets from the canvas center in screen
//! pixels (y growing downward); [`to_screen`] does the flip from math space.
//! The pixels-per-unit scale is recomputed from scratch on every draw, so
//! resizing or new input never leaves a stale zoom behind.

use crate::state::VectorState;

/// Smallest legible pixels-per-unit scale. Vectors too large to fit at this
/// scale clip at the canvas edge instead of shrinking the grid further.
pub const MIN_UNIT: f64 = 12.0;
/// Pixels kept free between the longest vector and the canvas half-extent.
pub const FIT_MARGIN: f64 = 40.0;
/// Pixels at the axis ends where no tick label is placed.
pub const TICK_CLEARANCE: f64 = 20.0;
/// Inset of the axis line endpoints from the canvas edge.
pub const AXIS_INSET: f64 = 6.0;
/// Default floor for the square canvas side length.
pub const MIN_CANVAS_SIDE: f32 = 220.0;
/// Horizontal padding subtracted from the available container width.
pub const CANVAS_PADDING: f32 = 12.0;

/// Side length of the square canvas for the available container width.
pub fn canvas_side(available_width: f32, min_side: f32) -> f32 {
    (available_width - CANVAS_PADDING).max(min_side)
}

/// Pixels per math unit for the given state and canvas size.
///
/// The scale is the largest whole pixel count that keeps both vectors inside
/// the half-extent minus [`FIT_MARGIN`]. The inner floor of 1 guards the
/// all-zero vector; the outer floor of [`MIN_UNIT`] keeps the grid legible.
pub fn pixels_per_unit(state: &VectorState, width: f64, height: f64) -> f64 {
    let (sx, sy) = state.scaled();
    let max_component = [state.x.abs(), state.y.abs(), sx.abs(), sy.abs()]
        .into_iter()
        .fold(1.0_f64, f64::max);
    let half = width.min(height) / 2.0;
    ((half - FIT_MARGIN) / max_component).floor().max(MIN_UNIT)
}

/// Map math-space coordinates (y up) to a screen offset from the canvas
/// center (y down).
pub fn to_screen(math_x: f64, math_y: f64, unit: f64) -> (f64, f64) {
    (math_x * unit, -math_y * unit)
}

/// Offsets of the grid lines along one axis, stepping one unit at a time
/// from the negative edge.
pub fn grid_offsets(half_extent: f64, step: f64) -> Vec<f64> {
    let mut offsets = Vec::new();
    if step <= 0.0 {
        return offsets;
    }
    let edge = half_extent.floor();
    let mut pos = -edge;
    while pos <= edge {
        offsets.push(pos);
        pos += step;
    }
    offsets
}

/// Largest integer tick drawn on an axis with the given half-extent.
pub fn tick_range(half_extent: f64, unit: f64) -> i64 {
    let ticks = ((half_extent - TICK_CLEARANCE) / unit).floor() as i64;
    ticks.max(0)
}

/// Corner points of a filled arrowhead whose point sits at the line tip.
///
/// The head points along the direction from the canvas center to the tip,
/// which is the direction of the vector itself since every vector starts at
/// the origin.
pub fn arrowhead(tip_x: f64, tip_y: f64, size: f64) -> [(f64, f64); 3] {
    let angle = tip_y.atan2(tip_x);
    let (sin, cos) = angle.sin_cos();
    let place = |px: f64, py: f64| (tip_x + px * cos - py * sin, tip_y + px * sin + py * cos);
    [
        place(-size, -size / 2.0),
        place(-size, size / 2.0),
        (tip_x, tip_y),
    ]
}

/// Font size for the integer tick labels.
pub fn tick_text_size(canvas_width: f64) -> f64 {
    (canvas_width / 26.0).round().max(12.0)
}

/// Font size for the corner labels.
pub fn label_text_size(canvas_width: f64) -> f64 {
    (canvas_width / 28.0).round().max(12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_never_below_minimum() {
        let state = VectorState {
            x: 1e6,
            y: 1e6,
            k: 3.0,
            name: "A".to_string(),
        };
        assert_eq!(pixels_per_unit(&state, 400.0, 400.0), MIN_UNIT);
    }

    #[test]
    fn unit_fits_vectors_with_margin() {
        let state = VectorState::default();
        let (w, h) = (400.0, 400.0);
        let unit = pixels_per_unit(&state, w, h);
        let (sx, sy) = state.scaled();
        let max_component = [state.x.abs(), state.y.abs(), sx.abs(), sy.abs()]
            .into_iter()
            .fold(1.0_f64, f64::max);
        assert!(unit >= MIN_UNIT);
        assert!(unit * max_component <= w.min(h) / 2.0 - FIT_MARGIN);
    }

    #[test]
    fn degenerate_vector_still_gets_a_scale() {
        let state = VectorState {
            x: 0.0,
            y: 0.0,
            k: 0.0,
            name: "A".to_string(),
        };
        // max component floors at 1, so the whole usable half-extent is one unit
        assert_eq!(pixels_per_unit(&state, 400.0, 400.0), 160.0);
    }

    #[test]
    fn screen_mapping_flips_y() {
        assert_eq!(to_screen(2.0, 3.0, 10.0), (20.0, -30.0));
        assert_eq!(to_screen(2.0, -3.0, 10.0), (20.0, 30.0));
        assert_eq!(to_screen(0.0, 0.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn grid_offsets_span_the_extent() {
        let offsets = grid_offsets(100.0, 25.0);
        assert_eq!(
            offsets,
            vec![-100.0, -75.0, -50.0, -25.0, 0.0, 25.0, 50.0, 75.0, 100.0]
        );
    }

    #[test]
    fn grid_offsets_floor_fractional_extents() {
        let offsets = grid_offsets(50.5, 20.0);
        assert_eq!(offsets.first(), Some(&-50.0));
        assert_eq!(offsets.last(), Some(&50.0));
    }

    #[test]
    fn grid_offsets_reject_degenerate_step() {
        assert!(grid_offsets(100.0, 0.0).is_empty());
    }

    #[test]
    fn tick_range_scales_with_unit() {
        assert_eq!(tick_range(200.0, 20.0), 9);
        assert_eq!(tick_range(200.0, 12.0), 15);
        // unit larger than the usable half-extent leaves only the origin
        assert_eq!(tick_range(30.0, 40.0), 0);
    }

    #[test]
    fn arrowhead_tip_is_exact() {
        let [a, b, tip] = arrowhead(30.0, -40.0, 8.0);
        assert_eq!(tip, (30.0, -40.0));
        // The base midpoint sits one head-length behind the tip.
        let mid = ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
        assert!((mid.0 - (30.0 - 8.0 * 0.6)).abs() < 1e-9);
        assert!((mid.1 - (-40.0 + 8.0 * 0.8)).abs() < 1e-9);
        // The base is one head-length wide.
        let base = ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt();
        assert!((base - 8.0).abs() < 1e-9);
    }

    #[test]
    fn arrowhead_aligns_with_axis_vectors() {
        let [a, b, tip] = arrowhead(50.0, 0.0, 10.0);
        assert_eq!(tip, (50.0, 0.0));
        assert!((a.0 - 40.0).abs() < 1e-9 && (a.1 + 5.0).abs() < 1e-9);
        assert!((b.0 - 40.0).abs() < 1e-9 && (b.1 - 5.0).abs() < 1e-9);
    }

    #[test]
    fn canvas_side_applies_padding_and_floor() {
        assert_eq!(canvas_side(600.0, MIN_CANVAS_SIDE), 588.0);
        assert_eq!(canvas_side(100.0, MIN_CANVAS_SIDE), 220.0);
    }

    #[test]
    fn text_sizes_have_a_floor() {
        assert_eq!(tick_text_size(400.0), 15.0);
        assert_eq!(label_text_size(400.0), 14.0);
        assert_eq!(tick_text_size(220.0), 12.0);
        assert_eq!(label_text_size(220.0), 12.0);
    }
}
