//! Projects section: the sphere gallery with a grid view alternative

pub mod grid;
pub mod projects;

use egui::{Hyperlink, RichText, Ui};

use crate::config::SphereConfig;
use crate::constants::showcase::{SPHERE_CONTAINER_SIZE, SPHERE_RADIUS, SPHERE_REPEAT};
use crate::widget::SphereGallery;
pub use projects::Project;

const GITHUB_PROFILE: &str = "https://github.com/praneethreddie";

/// Which presentation the projects section is using
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Sphere,
    Grid,
}

/// The projects section
pub struct ProjectsShowcase {
    projects: Vec<Project>,
    view: ViewMode,
    expanded: Option<String>,
    sphere: SphereGallery,
}

impl ProjectsShowcase {
    /// Showcase with the sphere defaults used by the portfolio page
    pub fn new(projects: Vec<Project>) -> Self {
        let config = SphereConfig::default()
            .with_container_size(SPHERE_CONTAINER_SIZE)
            .with_sphere_radius(SPHERE_RADIUS)
            .with_auto_rotate(true);
        Self::with_config(projects, config)
    }

    pub fn with_config(projects: Vec<Project>, config: SphereConfig) -> Self {
        let items = projects::sphere_items(&projects, SPHERE_REPEAT);
        log::info!("Showcase ready with {} projects ({} sphere items)", projects.len(), items.len());
        Self {
            projects,
            view: ViewMode::Sphere,
            expanded: None,
            sphere: SphereGallery::new("projects-sphere", config, items),
        }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn sphere(&self) -> &SphereGallery {
        &self.sphere
    }

    /// Switches view. Leaving the sphere unmounts it.
    pub fn set_view(&mut self, view: ViewMode) {
        if view == self.view {
            return;
        }
        if self.view == ViewMode::Sphere {
            self.sphere.unmount();
        }
        log::debug!("Projects view {:?} -> {:?}", self.view, view);
        self.view = view;
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Projects").size(28.0).strong());
            ui.horizontal_wrapped(|ui| {
                ui.label("Here are some of my open-source and productivity-focused projects. Discover more on my");
                ui.add(Hyperlink::from_label_and_url("GitHub", GITHUB_PROFILE).open_in_new_tab(true));
            });
            ui.add_space(12.0);

            let mut requested = self.view;
            ui.horizontal(|ui| {
                ui.selectable_value(&mut requested, ViewMode::Sphere, "3D Sphere");
                ui.selectable_value(&mut requested, ViewMode::Grid, "Grid View");
            });
            self.set_view(requested);
            ui.add_space(16.0);
        });

        match self.view {
            ViewMode::Sphere => {
                ui.vertical_centered(|ui| {
                    self.sphere.show(ui);
                });
            }
            ViewMode::Grid => {
                grid::show_grid(ui, &self.projects, &mut self.expanded);
            }
        }
    }
}
