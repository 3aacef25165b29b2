use log::debug;

/// The full scene state: base vector components, scalar coefficient and the
/// short display name shown next to the arrows.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorState {
    pub x: f64,
    pub y: f64,
    pub k: f64,
    pub name: String,
}

impl Default for VectorState {
    /// The reset tuple the app starts from and returns to.
    fn default() -> Self {
        Self {
            x: 3.0,
            y: 4.0,
            k: 2.0,
            name: "A".to_string(),
        }
    }
}

impl VectorState {
    /// Build a state from raw form input.
    ///
    /// Unparsable (or non-finite) numeric fields fall back to fixed values
    /// (x, y → 0, k → 1) instead of surfacing an error, so the scene stays
    /// renderable no matter what was typed. The name is trimmed and cut to
    /// two characters; an empty field becomes "A".
    pub fn parse(raw_x: &str, raw_y: &str, raw_k: &str, raw_name: &str) -> Self {
        Self {
            x: parse_component(raw_x, "x", 0.0),
            y: parse_component(raw_y, "y", 0.0),
            k: parse_component(raw_k, "k", 1.0),
            name: parse_name(raw_name),
        }
    }

    /// The scaled vector (k·x, k·y), full precision.
    pub fn scaled(&self) -> (f64, f64) {
        (self.k * self.x, self.k * self.y)
    }
}

fn parse_component(raw: &str, field: &str, fallback: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!("could not parse field '{}' from {:?}, using {}", field, raw, fallback);
            fallback
        }
    }
}

fn parse_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "A".to_string()
    } else {
        trimmed.chars().take(2).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_reset_tuple() {
        let state = VectorState::default();
        assert_eq!(
            state,
            VectorState {
                x: 3.0,
                y: 4.0,
                k: 2.0,
                name: "A".to_string(),
            }
        );
    }

    #[test]
    fn unparsable_fields_fall_back() {
        let _ = env_logger::builder().is_test(true).try_init();

        let state = VectorState::parse("abc", "5", "2", "");
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 5.0);
        assert_eq!(state.k, 2.0);
        assert_eq!(state.name, "A");
    }

    #[test]
    fn non_finite_input_falls_back() {
        let state = VectorState::parse("inf", "NaN", "-inf", "B");
        assert_eq!((state.x, state.y, state.k), (0.0, 0.0, 1.0));
        assert_eq!(state.name, "B");
    }

    #[test]
    fn name_is_trimmed_and_truncated() {
        assert_eq!(VectorState::parse("1", "1", "1", "  Vec  ").name, "Ve");
        assert_eq!(VectorState::parse("1", "1", "1", "   ").name, "A");
        // Truncation counts characters, not bytes.
        assert_eq!(VectorState::parse("1", "1", "1", "بردار").name, "بر");
    }

    #[test]
    fn scaled_multiplies_componentwise() {
        let state = VectorState {
            x: 1.5,
            y: -2.0,
            k: -2.0,
            name: "A".to_string(),
        };
        assert_eq!(state.scaled(), (-3.0, 4.0));
    }
}
