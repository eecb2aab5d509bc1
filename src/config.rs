//! Sphere widget configuration
//!
//! Every field is optional in JSON; missing fields take the defaults from
//! `constants::defaults`. Bad values never fail, they fall back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::sphere::motion::MotionSettings;

/// Tunables for a `SphereGallery`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub container_size: f32,
    /// Non-positive means half the container size
    pub sphere_radius: f32,
    pub drag_sensitivity: f32,
    pub momentum_decay: f32,
    pub max_rotation_speed: f32,
    pub base_image_scale: f32,
    pub hover_scale: f32,
    /// Perspective depth for hosts that apply a 3D transform to the surface.
    /// The built-in projection is orthographic and ignores it.
    pub perspective: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            container_size: defaults::CONTAINER_SIZE,
            sphere_radius: defaults::SPHERE_RADIUS,
            drag_sensitivity: defaults::DRAG_SENSITIVITY,
            momentum_decay: defaults::MOMENTUM_DECAY,
            max_rotation_speed: defaults::MAX_ROTATION_SPEED,
            base_image_scale: defaults::BASE_IMAGE_SCALE,
            hover_scale: defaults::HOVER_SCALE,
            perspective: defaults::PERSPECTIVE,
            auto_rotate: false,
            auto_rotate_speed: defaults::AUTO_ROTATE_SPEED,
        }
    }
}

fn positive_or(value: f32, fallback: f32, name: &str) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("Invalid {} {}, using {}", name, value, fallback);
        fallback
    }
}

impl SphereConfig {
    pub fn with_container_size(mut self, size: f32) -> Self {
        self.container_size = size;
        self
    }

    pub fn with_sphere_radius(mut self, radius: f32) -> Self {
        self.sphere_radius = radius;
        self
    }

    pub fn with_auto_rotate(mut self, enabled: bool) -> Self {
        self.auto_rotate = enabled;
        self
    }

    /// Copy with every field forced into a usable range
    pub fn sanitized(&self) -> Self {
        let container_size = positive_or(self.container_size, defaults::CONTAINER_SIZE, "container_size");

        let sphere_radius = if self.sphere_radius.is_finite() && self.sphere_radius > 0.0 {
            self.sphere_radius
        } else {
            container_size * 0.5
        };

        let momentum_decay = if self.momentum_decay.is_finite()
            && self.momentum_decay > 0.0
            && self.momentum_decay < 1.0
        {
            self.momentum_decay
        } else {
            log::warn!("Invalid momentum_decay {}, using {}", self.momentum_decay, defaults::MOMENTUM_DECAY);
            defaults::MOMENTUM_DECAY
        };

        let auto_rotate_speed = if self.auto_rotate_speed.is_finite() {
            self.auto_rotate_speed
        } else {
            defaults::AUTO_ROTATE_SPEED
        };

        Self {
            container_size,
            sphere_radius,
            drag_sensitivity: positive_or(self.drag_sensitivity, defaults::DRAG_SENSITIVITY, "drag_sensitivity"),
            momentum_decay,
            max_rotation_speed: positive_or(self.max_rotation_speed, defaults::MAX_ROTATION_SPEED, "max_rotation_speed"),
            base_image_scale: positive_or(self.base_image_scale, defaults::BASE_IMAGE_SCALE, "base_image_scale"),
            hover_scale: positive_or(self.hover_scale, defaults::HOVER_SCALE, "hover_scale"),
            perspective: positive_or(self.perspective, defaults::PERSPECTIVE, "perspective"),
            auto_rotate: self.auto_rotate,
            auto_rotate_speed,
        }
    }

    /// Radius actually used for layout and projection
    pub fn effective_radius(&self) -> f32 {
        if self.sphere_radius > 0.0 {
            self.sphere_radius
        } else {
            self.container_size * 0.5
        }
    }

    /// Diameter of an item at scale 1.0
    pub fn base_item_size(&self) -> f32 {
        self.container_size * self.base_image_scale
    }

    pub fn motion_settings(&self) -> MotionSettings {
        MotionSettings {
            momentum_decay: self.momentum_decay,
            max_rotation_speed: self.max_rotation_speed,
            auto_rotate: self.auto_rotate,
            auto_rotate_speed: self.auto_rotate_speed,
        }
    }

    /// Default location: `<config dir>/sphere-gallery/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sphere-gallery").join("config.json"))
    }

    /// Load a configuration file
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: SphereConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
        Ok(config.sanitized())
    }

    /// Write this configuration as pretty JSON, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write config: {}", e))
    }

    /// Loads from the default location, falling back to defaults on any problem
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) if path.exists() => match Self::load_from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded sphere config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("{}; using defaults", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}
