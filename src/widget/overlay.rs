//! Detail overlay for the selected item

use egui::{Align, Button, CornerRadius, Frame, Layout, Margin, RichText, Sense, Ui, Vec2};

use super::rendering::paint_visual;
use crate::sphere::item::SphereItem;
use crate::theme::{colors, dimensions};

/// What the user did with the overlay this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayAction {
    None,
    /// Close button, backdrop click or Escape
    Dismiss,
    /// A link was followed and handed to the platform
    OpenedLink(String),
}

/// Shows the spotlight modal for `item`
pub fn show_overlay(ctx: &egui::Context, id: egui::Id, item: &SphereItem) -> OverlayAction {
    let mut action = OverlayAction::None;

    let response = egui::Modal::new(id).show(ctx, |ui| {
        ui.set_width(dimensions().overlay_width);
        if render_header(ui, item) {
            action = OverlayAction::Dismiss;
        }
        ui.add_space(8.0);
        if let Some(url) = render_body(ui, item) {
            action = OverlayAction::OpenedLink(url);
        }
    });

    if response.should_close() && action == OverlayAction::None {
        action = OverlayAction::Dismiss;
    }
    action
}

/// Visual strip with a close button. Returns true if close was clicked.
fn render_header(ui: &mut Ui, item: &SphereItem) -> bool {
    let d = dimensions();
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), d.overlay_visual_height),
        Sense::hover(),
    );
    ui.painter().rect_filled(rect, CornerRadius::ZERO, colors().visual_background);
    paint_visual(ui, &item.resolved_visual(), rect.center(), d.overlay_visual_size * 0.5, 1.0);

    let close_rect = egui::Rect::from_min_size(
        rect.right_top() + Vec2::new(-44.0, 12.0),
        Vec2::splat(32.0),
    );
    ui.put(close_rect, Button::new("✕").corner_radius(CornerRadius::same(16))).clicked()
}

/// Title, tags, description and links. Returns the followed link, if any.
fn render_body(ui: &mut Ui, item: &SphereItem) -> Option<String> {
    let c = colors();
    let mut opened = None;

    ui.heading(RichText::new(item.display_title()).strong());

    if !item.tech.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for tag in &item.tech {
                Frame::new()
                    .fill(c.tag_background)
                    .stroke(egui::Stroke::new(1.0, c.tag_border))
                    .corner_radius(CornerRadius::same(10))
                    .inner_margin(Margin::symmetric(8, 2))
                    .show(ui, |ui| {
                        ui.label(RichText::new(tag).small().color(c.tag_text));
                    });
            }
        });
    }

    if let Some(description) = &item.description {
        ui.add_space(4.0);
        ui.label(RichText::new(description).color(c.muted_text));
    }

    ui.add_space(8.0);
    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
        if let Some(url) = &item.live_link {
            if ui.add(Button::new("🔗 Live Demo")).clicked() {
                opened = Some(url.clone());
            }
        }
        if let Some(url) = &item.source_link {
            if ui.add(Button::new("🔗 View Code")).clicked() {
                opened = Some(url.clone());
            }
        }
    });

    if let Some(url) = &opened {
        log::info!("Opening {}", url);
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }
    opened
}
