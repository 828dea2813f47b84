use circle_chase::canvas::CanvasView;
use circle_chase::commands::{self, MenuPath, Routed};
use circle_chase::config::{Settings, CONFIG_FILE};
use circle_chase::dialog::NativeSaveDialog;
use circle_chase::plane::Plane;
use eframe::egui;
use std::path::Path;

const ABOUT_TEXT: &str =
    "circle_chase\n\nA small demo: start the program and the red circle chases your pointer.";

struct App {
    settings: Settings,
    plane: Plane,
    canvas: CanvasView,
    about_open: bool,
    status: String,
}

impl App {
    fn new(settings: Settings) -> App {
        App {
            settings,
            plane: Plane::new(),
            canvas: CanvasView::new(),
            about_open: false,
            status: String::new(),
        }
    }

    // one menu activation = one routed command
    fn activate(&mut self, path: MenuPath) {
        let routed = commands::route(
            &path,
            &mut self.plane,
            &mut self.about_open,
            &NativeSaveDialog,
            &self.settings.save_file_name,
        );
        match routed {
            Ok(Routed::Saved(path)) => self.status = format!("Saved {}", path.display()),
            Ok(Routed::SaveCancelled) => self.status = "Save cancelled".into(),
            Ok(_) => {}
            Err(e) => {
                log::error!("{}", e);
                self.status = format!("Save failed: {}", e);
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt);
        self.plane.step(self.settings.step_speed, dt);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                let mut clicked: Option<MenuPath> = None;
                ui.menu_button("Info", |ui| {
                    if ui.button("About").clicked() {
                        clicked = Some(MenuPath::new("Info", "About"));
                        ui.close_menu();
                    }
                });
                ui.menu_button("Program", |ui| {
                    if ui.button("Start").clicked() {
                        clicked = Some(MenuPath::new("Program", "Start"));
                        ui.close_menu();
                    }
                    if ui.button("Finish").clicked() {
                        clicked = Some(MenuPath::new("Program", "Finish"));
                        ui.close_menu();
                    }
                });
                ui.menu_button("File", |ui| {
                    if ui.button("Save").clicked() {
                        clicked = Some(MenuPath::new("File", "Save"));
                        ui.close_menu();
                    }
                });
                if let Some(path) = clicked {
                    self.activate(path);
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            if self.status.is_empty() {
                ui.label("Ready");
            } else {
                ui.label(&self.status);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas.show(ui, &mut self.plane);
        });

        if self.about_open {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(ABOUT_TEXT);
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            self.about_open = false;
                        }
                    });
                });
        }

        // keep frames coming while the circle is still traveling
        if self.plane.moving() {
            ctx.request_repaint();
        }
    }
}

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .ok();

    let settings = Settings::load_or_default(Path::new(CONFIG_FILE));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(settings.window),
        ..Default::default()
    };
    let _ = eframe::run_native(
        "Circle Chase",
        native_options,
        Box::new(|_cc| Box::new(App::new(settings))),
    );
}
