//! Centralized theme and styling constants for the sphere gallery
//!
//! This module provides a single source of truth for all colors and
//! dimensions used when painting the widget, its placeholders and overlay.

use egui::Color32;

/// Color palette for the sphere gallery
pub struct Colors {
    // Placeholders
    pub loading_background: Color32,
    pub empty_background: Color32,
    pub empty_border: Color32,
    pub placeholder_text: Color32,

    // Items
    pub item_background: Color32,
    pub item_border: Color32,
    pub item_text: Color32,
    pub hover_ring: Color32,

    // Overlay
    pub visual_background: Color32,
    pub tag_background: Color32,
    pub tag_text: Color32,
    pub tag_border: Color32,
    pub muted_text: Color32,
}

impl Colors {
    /// Get the default color palette
    pub fn default() -> Self {
        Self {
            loading_background: Color32::from_rgb(243, 244, 246),
            empty_background: Color32::from_rgb(249, 250, 251),
            empty_border: Color32::from_rgb(209, 213, 219),
            placeholder_text: Color32::from_rgb(156, 163, 175),

            item_background: Color32::WHITE,
            item_border: Color32::from_white_alpha(51),
            item_text: Color32::WHITE,
            hover_ring: Color32::from_rgb(100, 150, 255),

            visual_background: Color32::from_gray(40),
            tag_background: Color32::from_rgba_unmultiplied(100, 150, 255, 26),
            tag_text: Color32::from_rgb(120, 170, 255),
            tag_border: Color32::from_rgba_unmultiplied(100, 150, 255, 51),
            muted_text: Color32::from_gray(160),
        }
    }
}

/// Dimension constants for the sphere gallery
pub struct Dimensions {
    pub placeholder_corner_radius: u8,
    pub dash_length: f32,
    pub dash_gap: f32,
    pub dashed_border_width: f32,

    pub item_border_width: f32,
    pub hover_ring_width: f32,
    /// Glyph label height relative to the item radius
    pub glyph_text_ratio: f32,

    pub overlay_width: f32,
    pub overlay_visual_height: f32,
    pub overlay_visual_size: f32,
}

impl Dimensions {
    /// Get the default dimensions
    pub fn default() -> Self {
        Self {
            placeholder_corner_radius: 8,
            dash_length: 6.0,
            dash_gap: 4.0,
            dashed_border_width: 2.0,

            item_border_width: 2.0,
            hover_ring_width: 1.5,
            glyph_text_ratio: 0.7,

            overlay_width: 512.0,
            overlay_visual_height: 192.0,
            overlay_visual_size: 128.0,
        }
    }
}

/// Complete theme containing all styling constants
pub struct Theme {
    pub colors: Colors,
    pub dimensions: Dimensions,
}

impl Theme {
    /// Get the default theme
    pub fn default() -> Self {
        Self {
            colors: Colors::default(),
            dimensions: Dimensions::default(),
        }
    }
}

/// Global theme instance
static GLOBAL_THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get the global theme
pub fn theme() -> &'static Theme {
    &GLOBAL_THEME
}

/// Convenience functions for commonly used values
pub fn colors() -> &'static Colors {
    &theme().colors
}

pub fn dimensions() -> &'static Dimensions {
    &theme().dimensions
}
