//! Grid view: one card per project

use egui::{CornerRadius, Frame, Hyperlink, Margin, RichText, Sense, Stroke, Ui, Vec2};

use super::projects::{short_description, Project};
use crate::constants::showcase::SHORT_DESCRIPTION_LEN;
use crate::theme::colors;
use crate::widget::rendering::paint_visual;

const CARD_WIDTH: f32 = 280.0;

/// Which card is expanded after toggling `name`. At most one is open.
pub fn toggle_expanded(current: Option<&str>, name: &str) -> Option<String> {
    if current == Some(name) {
        None
    } else {
        Some(name.to_string())
    }
}

/// Draws all cards; `expanded` holds the name of the open card
pub fn show_grid(ui: &mut Ui, projects: &[Project], expanded: &mut Option<String>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = Vec2::splat(16.0);
        for project in projects {
            show_card(ui, project, expanded);
        }
    });
}

fn show_card(ui: &mut Ui, project: &Project, expanded: &mut Option<String>) {
    let c = colors();
    let is_expanded = expanded.as_deref() == Some(project.name.as_str());

    Frame::group(ui.style())
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(Vec2::splat(48.0), Sense::hover());
                    paint_visual(ui, &project.visual(), rect.center(), 24.0, 1.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("📁 {}", project.name)).strong().size(16.0));
                        ui.horizontal_wrapped(|ui| {
                            for tag in &project.tech {
                                Frame::new()
                                    .fill(c.tag_background)
                                    .stroke(Stroke::new(1.0, c.tag_border))
                                    .corner_radius(CornerRadius::same(4))
                                    .inner_margin(Margin::symmetric(6, 2))
                                    .show(ui, |ui| {
                                        ui.label(RichText::new(tag).small().color(c.tag_text));
                                    });
                            }
                        });
                    });
                });

                ui.add_space(6.0);
                let text = if is_expanded {
                    project.description.clone()
                } else {
                    short_description(&project.description, SHORT_DESCRIPTION_LEN)
                };
                ui.label(RichText::new(text).color(c.muted_text));

                if project.description.chars().count() > SHORT_DESCRIPTION_LEN {
                    let label = if is_expanded { "Show less −" } else { "Show more +" };
                    if ui.small_button(label).clicked() {
                        *expanded = toggle_expanded(expanded.as_deref(), &project.name);
                    }
                }

                ui.add_space(6.0);
                if let Some(web) = &project.web {
                    ui.add(Hyperlink::from_label_and_url("🔗 Web App", web).open_in_new_tab(true));
                }
                ui.add(Hyperlink::from_label_and_url("🔗 View Project", &project.link).open_in_new_tab(true));
            });
        });
}
