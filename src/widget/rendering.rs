//! Painting of sphere items and placeholder states

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Shape, Stroke, Ui, Vec2};

use crate::config::SphereConfig;
use crate::sphere::item::{ItemVisual, SphereItem};
use crate::sphere::projection::{draw_order, WorldPosition};
use crate::theme::{colors, dimensions};

/// Screen placement of one visible item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemGeometry {
    pub index: usize,
    pub center: Pos2,
    pub radius: f32,
    pub opacity: f32,
    pub hovered: bool,
}

/// Extra scale for the hovered item, capped so it never exceeds `hover_scale` overall
pub fn hover_factor(scale: f32, hover_scale: f32) -> f32 {
    if scale <= 0.0 {
        return hover_scale;
    }
    hover_scale.min(hover_scale / scale)
}

/// Places visible items inside `rect`, ordered back to front
pub fn layout_items(
    world: &[WorldPosition],
    rect: Rect,
    config: &SphereConfig,
    hovered: Option<usize>,
) -> Vec<ItemGeometry> {
    let base = config.base_item_size();
    let center = rect.center();

    draw_order(world)
        .into_iter()
        .map(|index| {
            let pos = &world[index];
            let is_hovered = hovered == Some(index);
            let factor = if is_hovered {
                hover_factor(pos.scale, config.hover_scale)
            } else {
                1.0
            };
            ItemGeometry {
                index,
                center: center + Vec2::new(pos.x, pos.y),
                radius: base * pos.scale * factor * 0.5,
                opacity: pos.fade_opacity,
                hovered: is_hovered,
            }
        })
        .collect()
}

/// Topmost item under `pos`
pub fn hit_test(geometry: &[ItemGeometry], pos: Pos2) -> Option<usize> {
    geometry
        .iter()
        .rev()
        .find(|g| g.center.distance(pos) <= g.radius)
        .map(|g| g.index)
}

fn faded(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

/// Draws one item bubble
pub fn paint_item(ui: &Ui, item: &SphereItem, geometry: &ItemGeometry) {
    let painter = ui.painter();
    let c = colors();
    let d = dimensions();
    let radius = geometry.radius;
    let opacity = geometry.opacity;

    painter.circle_filled(geometry.center, radius, faded(c.item_background, opacity));
    paint_visual(ui, &item.resolved_visual(), geometry.center, radius, opacity);
    painter.circle_stroke(
        geometry.center,
        radius,
        Stroke::new(d.item_border_width, faded(c.item_border, opacity)),
    );

    if geometry.hovered {
        painter.circle_stroke(
            geometry.center,
            radius + d.item_border_width,
            Stroke::new(d.hover_ring_width, faded(c.hover_ring, opacity)),
        );
    }
}

/// Draws an item visual clipped to a circle of `radius` around `center`
pub fn paint_visual(ui: &Ui, visual: &ItemVisual, center: Pos2, radius: f32, opacity: f32) {
    match visual {
        ItemVisual::Image { uri } => {
            let rect = Rect::from_center_size(center, Vec2::splat(radius * 2.0));
            egui::Image::new(uri.as_str())
                .corner_radius(CornerRadius::same(radius.clamp(0.0, 255.0) as u8))
                .tint(Color32::WHITE.gamma_multiply(opacity.clamp(0.0, 1.0)))
                .paint_at(ui, rect);
        }
        ItemVisual::Glyph { label, color } => {
            let fill = Color32::from_rgb(color[0], color[1], color[2]);
            ui.painter().circle_filled(center, radius, faded(fill, opacity));
            ui.painter().text(
                center,
                Align2::CENTER_CENTER,
                label,
                FontId::proportional((radius * dimensions().glyph_text_ratio).max(1.0)),
                faded(colors().item_text, opacity),
            );
        }
        ItemVisual::Missing => {
            // resolved_visual never yields Missing
            ui.painter().circle_filled(center, radius, faded(colors().placeholder_text, opacity));
        }
    }
}

/// Placeholder shown before the widget has mounted
pub fn paint_loading(ui: &Ui, rect: Rect) {
    let c = colors();
    let painter = ui.painter();
    painter.rect_filled(
        rect,
        CornerRadius::same(dimensions().placeholder_corner_radius),
        c.loading_background,
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "Loading...",
        FontId::proportional(14.0),
        c.placeholder_text,
    );
}

/// Placeholder shown when there are no items
pub fn paint_empty(ui: &Ui, rect: Rect) {
    let c = colors();
    let d = dimensions();
    let painter = ui.painter();

    painter.rect_filled(rect, CornerRadius::same(d.placeholder_corner_radius), c.empty_background);

    let border = rect.shrink(d.dashed_border_width * 0.5);
    let outline = [
        border.left_top(),
        border.right_top(),
        border.right_bottom(),
        border.left_bottom(),
        border.left_top(),
    ];
    painter.extend(Shape::dashed_line(
        &outline,
        Stroke::new(d.dashed_border_width, c.empty_border),
        d.dash_length,
        d.dash_gap,
    ));

    painter.text(
        rect.center() - Vec2::new(0.0, 10.0),
        Align2::CENTER_CENTER,
        "No images provided",
        FontId::proportional(14.0),
        c.placeholder_text,
    );
    painter.text(
        rect.center() + Vec2::new(0.0, 10.0),
        Align2::CENTER_CENTER,
        "Add images to the images prop",
        FontId::proportional(12.0),
        c.placeholder_text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(index: usize, x: f32, y: f32, z: f32, scale: f32) -> WorldPosition {
        WorldPosition {
            x,
            y,
            z,
            scale,
            z_index: (1000.0 + z).round() as i32,
            is_visible: z > -30.0,
            fade_opacity: 1.0,
            original_index: index,
        }
    }

    #[test]
    fn test_hover_factor_caps_total_scale() {
        assert_eq!(hover_factor(0.5, 1.2), 1.2);
        assert!((hover_factor(1.1, 1.2) * 1.1 - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_layout_positions_relative_to_center() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(400.0));
        let config = SphereConfig::default();
        let geometry = layout_items(&[world(0, 30.0, -40.0, 50.0, 1.0)], rect, &config, None);
        assert_eq!(geometry.len(), 1);
        assert_eq!(geometry[0].center, Pos2::new(240.0, 180.0));
        assert!((geometry[0].radius - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_culled_items_are_skipped() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(400.0));
        let world = [world(0, 0.0, 0.0, -150.0, 1.0), world(1, 0.0, 0.0, 150.0, 1.0)];
        let geometry = layout_items(&world, rect, &SphereConfig::default(), None);
        assert_eq!(geometry.iter().map(|g| g.index).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_hit_test_prefers_front_item() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(400.0));
        let world = [world(0, 0.0, 0.0, 10.0, 1.0), world(1, 5.0, 0.0, 90.0, 1.0)];
        let geometry = layout_items(&world, rect, &SphereConfig::default(), None);
        assert_eq!(hit_test(&geometry, Pos2::new(200.0, 200.0)), Some(1));
        assert_eq!(hit_test(&geometry, Pos2::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_hovered_item_grows() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(400.0));
        let world = [world(0, 0.0, 0.0, 10.0, 0.5)];
        let config = SphereConfig::default();
        let plain = layout_items(&world, rect, &config, None)[0];
        let hovered = layout_items(&world, rect, &config, Some(0))[0];
        assert!(hovered.hovered);
        assert!((hovered.radius - plain.radius * 1.2).abs() < 1e-4);
    }
}
