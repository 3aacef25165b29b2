use scene_core::{format, VectorState};

impl super::Controls {
    /// Parse the raw fields into a new state and reformat the result text.
    pub fn apply_inputs(&mut self) {
        self.state = VectorState::parse(&self.raw_x, &self.raw_y, &self.raw_k, &self.raw_name);
        self.result_text = format::describe(&self.state);
        log::debug!("applied inputs: {:?}", self.state);
    }

    /// Restore the fields and the state to the fixed defaults.
    pub fn reset(&mut self) {
        let state = VectorState::default();
        self.raw_x = state.x.to_string();
        self.raw_y = state.y.to_string();
        self.raw_k = state.k.to_string();
        self.raw_name = state.name.clone();
        self.result_text = format::describe(&state);
        self.state = state;
    }
}
