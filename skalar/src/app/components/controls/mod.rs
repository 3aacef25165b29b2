mod logic;
mod ui;

use scene_core::{format, VectorState};

/// The input form: raw field contents, the state last parsed from them, and
/// the formatted result sentence.
///
/// The raw strings stay untouched until the inputs are applied, so a half
/// typed number never disturbs the rendered scene.
pub struct Controls {
    raw_x: String,
    raw_y: String,
    raw_k: String,
    raw_name: String,
    state: VectorState,
    result_text: String,
}

impl Controls {
    pub fn new() -> Self {
        let state = VectorState::default();
        let result_text = format::describe(&state);
        Self {
            raw_x: state.x.to_string(),
            raw_y: state.y.to_string(),
            raw_k: state.k.to_string(),
            raw_name: state.name.clone(),
            state,
            result_text,
        }
    }

    pub fn state(&self) -> &VectorState {
        &self.state
    }
}
