//! Formatting of the result sentence shown below the input form.
//!
//! The output text is a fixed template (see the phrase constants); only the
//! numbers and the vector name vary.

use crate::state::VectorState;

const SAME_DIRECTION: &str = "و در همان جهت قرار دارد.";
const OPPOSITE_DIRECTION: &str = "و در جهت مخالف قرار دارد.";
const ZERO_VECTOR_NOTE: &str = " (ضریب صفر است؛ بردار صفر شده).";

/// Round to `digits` decimal places, half away from zero.
pub fn round_to(n: f64, digits: u32) -> f64 {
    let p = 10f64.powi(digits as i32);
    let rounded = (n * p).round() / p;
    // Collapse -0.0 so a zeroed component prints as plain "0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// The sentence describing the scaled vector, e.g.
/// "Vector 2A = (6, 8) و در همان جهت قرار دارد."
///
/// The coefficient prefix is dropped for k = 1 and collapses to a bare minus
/// sign for k = -1, matching how the term would be written by hand.
pub fn describe(state: &VectorState) -> String {
    let (sx, sy) = state.scaled();
    let (nx, ny) = (round_to(sx, 3), round_to(sy, 3));

    let prefix = if state.k == 1.0 {
        String::new()
    } else if state.k == -1.0 {
        "-".to_string()
    } else {
        state.k.to_string()
    };
    let direction = if state.k < 0.0 {
        OPPOSITE_DIRECTION
    } else {
        SAME_DIRECTION
    };
    let zero_note = if state.k == 0.0 { ZERO_VECTOR_NOTE } else { "" };

    format!(
        "Vector {}{} = ({}, {}) {}{}",
        prefix, state.name, nx, ny, direction, zero_note
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_is_half_away_from_zero() {
        assert_eq!(round_to(1.2345, 3), 1.235);
        assert_eq!(round_to(1.2344, 3), 1.234);
        assert_eq!(round_to(-1.2345, 3), -1.235);
    }

    #[test]
    fn round_to_normalizes_negative_zero() {
        assert!(round_to(-0.0001, 3).is_sign_positive());
    }

    #[test]
    fn describe_positive_coefficient() {
        let state = VectorState::default();
        assert_eq!(
            describe(&state),
            "Vector 2A = (6, 8) و در همان جهت قرار دارد."
        );
    }

    #[test]
    fn describe_negative_unit_coefficient() {
        let state = VectorState {
            k: -1.0,
            ..VectorState::default()
        };
        assert_eq!(
            describe(&state),
            "Vector -A = (-3, -4) و در جهت مخالف قرار دارد."
        );
    }

    #[test]
    fn describe_unit_coefficient_drops_prefix() {
        let state = VectorState {
            k: 1.0,
            ..VectorState::default()
        };
        assert!(describe(&state).starts_with("Vector A = (3, 4)"));
    }

    #[test]
    fn describe_zero_coefficient() {
        let state = VectorState {
            k: 0.0,
            ..VectorState::default()
        };
        let text = describe(&state);
        assert!(text.contains("= (0, 0)"));
        assert!(text.ends_with("(ضریب صفر است؛ بردار صفر شده)."));
    }

    #[test]
    fn describe_keeps_fractional_coefficients() {
        let state = VectorState {
            k: 2.5,
            ..VectorState::default()
        };
        assert!(describe(&state).starts_with("Vector 2.5A = (7.5, 10)"));
    }
}
