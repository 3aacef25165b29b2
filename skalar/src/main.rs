#![warn(clippy::all, rust_2018_idioms)]

use skalar::{Config, EguiApp};

const WINDOW_NAME: &str = "Skalar";
const WINDOW_WIDTH: f32 = 720.0;
const WINDOW_HEIGHT: f32 = 540.0;

fn main() -> eframe::Result {
    env_logger::init();

    let config = if let Ok(config) = Config::from_config_file() {
        config
    } else {
        log::warn!("unable to load config file \".skalar\" from home directory");
        Config::default()
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(EguiApp::new(cc, config)))),
    )
}
