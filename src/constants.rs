//! Application-wide constants and default values
//!
//! Centralized location for all hard-coded values to improve maintainability

/// Widget defaults, used by `SphereConfig::default` and as sanitization fallbacks
pub mod defaults {
    /// Side length of the square widget surface in points
    pub const CONTAINER_SIZE: f32 = 400.0;

    /// Sphere radius in points
    pub const SPHERE_RADIUS: f32 = 200.0;

    /// Degrees of rotation per point of pointer movement
    pub const DRAG_SENSITIVITY: f32 = 0.5;

    /// Per-frame velocity multiplier once the pointer is released
    pub const MOMENTUM_DECAY: f32 = 0.95;

    /// Upper bound on per-frame rotation in degrees, per axis
    pub const MAX_ROTATION_SPEED: f32 = 5.0;

    /// Item diameter as a fraction of the container size
    pub const BASE_IMAGE_SCALE: f32 = 0.12;

    /// Scale multiplier for the hovered item
    pub const HOVER_SCALE: f32 = 1.2;

    /// Perspective depth in points
    pub const PERSPECTIVE: f32 = 1000.0;

    /// Yaw added per frame when auto-rotation is on
    pub const AUTO_ROTATE_SPEED: f32 = 0.3;
}

/// Sphere layout constants
pub mod layout {
    /// Smallest polar angle an item may sit at (degrees)
    pub const MIN_POLAR_DEG: f32 = 5.0;

    /// Largest polar angle an item may sit at (degrees)
    pub const MAX_POLAR_DEG: f32 = 175.0;

    /// Total width of the random azimuth jitter band (degrees)
    pub const AZIMUTH_JITTER_DEG: f32 = 20.0;
}

/// Projection tuning. These were picked by eye.
pub mod projection {
    /// Depth at which items start fading out
    pub const FADE_NEAR: f32 = -10.0;

    /// Depth beyond which items are not drawn at all
    pub const FADE_FAR: f32 = -30.0;

    /// Smallest center-bias scale, reached on the rim
    pub const CENTER_SCALE_FLOOR: f32 = 0.3;

    /// How strongly planar distance from the center shrinks an item
    pub const CENTER_FALLOFF: f32 = 0.7;

    /// Smallest depth-bias scale
    pub const DEPTH_SCALE_FLOOR: f32 = 0.5;

    pub const DEPTH_SCALE_BASE: f32 = 0.8;
    pub const DEPTH_SCALE_GAIN: f32 = 0.3;

    /// Added to depth so every stacking key is positive
    pub const Z_INDEX_OFFSET: f32 = 1000.0;
}

/// Initial sphere orientation in degrees (pitch, yaw, roll)
pub const INITIAL_ROTATION: [f32; 3] = [15.0, 15.0, 0.0];

/// Showcase constants
pub mod showcase {
    /// How many times the project catalogue is repeated to fill the sphere
    pub const SPHERE_REPEAT: usize = 10;

    /// Container size used by the projects sphere
    pub const SPHERE_CONTAINER_SIZE: f32 = 600.0;

    /// Sphere radius used by the projects sphere
    pub const SPHERE_RADIUS: f32 = 280.0;

    /// Description length shown on collapsed grid cards
    pub const SHORT_DESCRIPTION_LEN: usize = 90;
}

/// Default window size for the demo application
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1000.0, 820.0];
