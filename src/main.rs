//! Sphere Gallery - portfolio projects showcase
//!
//! Shows the project catalogue on an interactive 3D sphere, with a grid
//! view alternative. Pass a catalogue JSON path as the first argument to
//! show your own projects.

use eframe::egui;
use std::path::PathBuf;

use sphere_gallery::constants::DEFAULT_WINDOW_SIZE;
use sphere_gallery::showcase::{projects, ProjectsShowcase};
use sphere_gallery::SphereConfig;

struct ShowcaseApp {
    showcase: ProjectsShowcase,
}

impl ShowcaseApp {
    fn new(cc: &eframe::CreationContext<'_>, catalogue: Option<PathBuf>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let projects = match catalogue {
            Some(path) => match projects::load_catalogue(&path) {
                Ok(projects) => {
                    log::info!("Loaded {} projects from {}", projects.len(), path.display());
                    projects
                }
                Err(e) => {
                    log::warn!("{}; using bundled catalogue", e);
                    projects::bundled_catalogue()
                }
            },
            None => projects::bundled_catalogue(),
        };

        let showcase = match SphereConfig::default_path() {
            Some(path) if path.exists() => {
                ProjectsShowcase::with_config(projects, SphereConfig::load_or_default())
            }
            _ => ProjectsShowcase::new(projects),
        };

        Self { showcase }
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.showcase.show(ui);
            });
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let catalogue = std::env::args().nth(1).map(PathBuf::from);
    log::info!("Starting sphere gallery");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(DEFAULT_WINDOW_SIZE)
            .with_title("Projects"),
        ..Default::default()
    };

    eframe::run_native(
        "Sphere Gallery",
        options,
        Box::new(|cc| Ok(Box::new(ShowcaseApp::new(cc, catalogue)))),
    )
}
