impl super::Controls {
    pub fn render(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.heading("Scalar × Vector");
        ui.separator();

        let mut submitted = false;
        egui::Grid::new("input_grid").num_columns(2).show(ui, |ui| {
            ui.label("x");
            submitted |= input_field(ui, "input_x", &mut self.raw_x);
            ui.end_row();
            ui.label("y");
            submitted |= input_field(ui, "input_y", &mut self.raw_y);
            ui.end_row();
            ui.label("k");
            submitted |= input_field(ui, "input_k", &mut self.raw_k);
            ui.end_row();
            ui.label("name");
            submitted |= input_field(ui, "input_name", &mut self.raw_name);
            ui.end_row();
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Calculate").clicked() {
                submitted = true;
            }
            if ui.button("Reset").clicked() {
                self.reset();
            }
        });
        if submitted {
            self.apply_inputs();
        }

        ui.separator();
        ui.label(self.result_text.as_str());
    }
}

/// A single form field; reports true when Enter confirmed the input.
fn input_field(ui: &mut egui::Ui, id: &str, buffer: &mut String) -> bool {
    let response = ui.add(
        egui::TextEdit::singleline(buffer)
            .id(egui::Id::new(id))
            .desired_width(80.0),
    );
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
