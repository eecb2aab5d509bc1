//! Sphere gallery library
//!
//! An interactive 3D sphere of items for egui: Fibonacci-sphere layout,
//! drag and touch rotation with momentum, optional auto-rotation, depth-based
//! scale and fade, and a spotlight overlay for the selected item.

pub mod config;
pub mod constants;
pub mod showcase;
pub mod sphere;
pub mod theme;
pub mod widget;

// Re-export commonly used types
pub use config::SphereConfig;
pub use sphere::{SphereEvent, SphereItem, SphereWidgetState, ItemVisual};
pub use widget::SphereGallery;
