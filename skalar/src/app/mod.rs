mod components;
pub mod config;
mod events;

use self::components::{Controls, Viewport};
use config::Config;
use events::{EventQueue, ExportSceneRequested};

pub struct EguiApp {
    config: Config,
    controls: Controls,
    viewport: Viewport,
    event_queue: EventQueue<Self>,
    help_modal_open: bool,
    ui_selection: UISelection,
    request_redraw: Option<()>,
}

#[derive(Debug, PartialEq, Eq)]
enum UISelection {
    Scene,
    Preferences,
}

impl EguiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self {
            config,
            controls: Controls::new(),
            viewport: Viewport::new(),
            event_queue: EventQueue::<Self>::new(),
            help_modal_open: false,
            ui_selection: UISelection::Scene,
            request_redraw: None,
        }
    }

    pub fn request_redraw(&mut self) {
        self.request_redraw = Some(());
    }

    fn spawn_export_dialog(&mut self) {
        log::debug!("open dialog to select svg export path");
        let handle = std::thread::spawn(|| {
            rfd::FileDialog::new()
                .set_file_name("scene.svg")
                .save_file()
        });
        self.event_queue
            .queue_event(Box::new(ExportSceneRequested::new(Some(handle))));
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.request_redraw.take().is_some() {
            ctx.request_repaint();
        }

        self.run_events();

        let mut should_quit = false;
        let mut should_export = false;

        // Handle keyboard input.
        ctx.input(|i| {
            // Help window.
            if i.key_pressed(egui::Key::F1) {
                self.help_modal_open = !self.help_modal_open;
            }
            // Close app.
            if i.key_pressed(egui::Key::F10) {
                should_quit = true;
            }
            // Open preferences.
            if i.key_pressed(egui::Key::F12) {
                self.ui_selection = UISelection::Preferences;
            }
            if i.key_pressed(egui::Key::P) && i.modifiers.ctrl {
                should_export = true;
            }
        });
        if should_export {
            self.spawn_export_dialog();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_help_modal(ctx);
            self.menu(ui, ctx);
        });

        egui::SidePanel::left("controls_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.controls.render(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.ui_selection {
            UISelection::Scene => self.viewport.render(self.controls.state(), &self.config, ui),
            UISelection::Preferences => self.config.render(ui),
        });

        if should_quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl EguiApp {
    fn menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Export SVG").clicked() {
                    self.spawn_export_dialog();
                }
                if ui.button("Reset").clicked() {
                    self.controls.reset();
                }
                if ui.button("Preferences").clicked() {
                    self.ui_selection = UISelection::Preferences;
                }
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // Selection of ui view.
            ui.menu_button("View", |ui| {
                ui.selectable_value(&mut self.ui_selection, UISelection::Scene, "Scene");
                ui.selectable_value(
                    &mut self.ui_selection,
                    UISelection::Preferences,
                    "Preferences",
                );
            });

            ui.toggle_value(&mut self.help_modal_open, "Help (F1)");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_theme_preference_buttons(ui);
            });
        });
    }

    fn render_help_modal(&mut self, ctx: &egui::Context) {
        if self.help_modal_open
            && egui::Modal::new("help_modal".into())
                .show(ctx, |ui| {
                    ui.heading("Keyboard Shortcuts");
                    ui.separator();
                    ui.label("Enter = Apply the current inputs");
                    ui.separator();
                    ui.label("CTRL + P = Export the scene as SVG");
                    ui.separator();
                    ui.label("F1 = Show Keyboard Shortcuts");
                    ui.separator();
                    ui.label("F10 = Quit App");
                    ui.separator();
                    ui.label("F12 = Open Preferences");
                    ui.separator();
                })
                .should_close()
        {
            self.help_modal_open = false;
        }
    }
}
