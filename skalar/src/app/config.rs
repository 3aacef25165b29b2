use std::io::Read;

use scene_core::scale::MIN_CANVAS_SIDE;
use scene_core::string_error::ErrorStringExt;

/// Settings read from the `.skalar` file in the home directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub svg_width: u64,
    pub svg_height: u64,
    pub min_canvas_side: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            svg_width: 800,
            svg_height: 600,
            min_canvas_side: MIN_CANVAS_SIDE,
        }
    }
}

impl Config {
    pub fn from_config_file() -> Result<Self, String> {
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        let config_raw = {
            let path = home.join(".skalar");
            let mut file = std::fs::File::open(path).err_to_string("could not open config file")?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)
                .err_to_string("could not load config file")?;
            buf
        };
        Ok(Self::parse(&config_raw))
    }

    /// Parse `key=value` lines; a malformed value keeps the default for
    /// that key.
    fn parse(raw: &str) -> Self {
        let mut config = Self::default();
        for line in raw.lines() {
            // Lines starting with "#" are considered comments.
            if line.starts_with('#') {
                continue;
            }
            let mut iter = line.split('=');
            let key = iter.next();
            let val = iter.next();
            match (key, val) {
                (Some("svg_width"), Some(width_str)) => {
                    if let Ok(width) = width_str.parse::<u64>() {
                        config.svg_width = width;
                    } else {
                        log::warn!("could not parse 'svg_width' as number")
                    }
                }
                (Some("svg_height"), Some(height_str)) => {
                    if let Ok(height) = height_str.parse::<u64>() {
                        config.svg_height = height;
                    } else {
                        log::warn!("could not parse 'svg_height' as number")
                    }
                }
                (Some("min_canvas_side"), Some(side_str)) => {
                    if let Ok(side) = side_str.parse::<f32>() {
                        config.min_canvas_side = side;
                    } else {
                        log::warn!("could not parse 'min_canvas_side' as number")
                    }
                }
                _ => continue,
            }
        }
        config
    }

    pub fn render(&mut self, ui: &mut egui::Ui) {
        ui.heading("Preferences");
        ui.separator();
        egui::Grid::new("preferences_grid")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("SVG export width");
                ui.add(egui::DragValue::new(&mut self.svg_width).range(100..=4000));
                ui.end_row();
                ui.label("SVG export height");
                ui.add(egui::DragValue::new(&mut self.svg_height).range(100..=4000));
                ui.end_row();
                ui.label("Minimum canvas side");
                ui.add(egui::DragValue::new(&mut self.min_canvas_side).range(100.0..=1000.0));
                ui.end_row();
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_skips_comments() {
        let _ = env_logger::builder().is_test(true).try_init();

        let raw = "# a comment\nsvg_width=1024\nsvg_height=abc\nmin_canvas_side=300\nnonsense\n";
        let config = Config::parse(raw);
        assert_eq!(config.svg_width, 1024);
        assert_eq!(config.svg_height, 600);
        assert_eq!(config.min_canvas_side, 300.0);
    }

    #[test]
    fn empty_input_keeps_defaults() {
        assert_eq!(Config::parse(""), Config::default());
    }
}
