//! Sphere layout, projection and interaction state
//!
//! `SphereWidgetState` owns everything that changes while the widget is on
//! screen. All mutation goes through `update`, so the interaction logic can
//! be driven and tested without a rendering surface.

pub mod input;
pub mod item;
pub mod layout;
pub mod lifecycle;
pub mod math;
pub mod motion;
pub mod projection;
pub mod selection;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SphereConfig;
pub use input::{GestureSource, InputController, VelocityState};
pub use item::{ItemVisual, SphereItem};
pub use layout::SphericalPosition;
pub use projection::{RotationState, WorldPosition};
pub use selection::{Selected, SelectionState};

/// Everything that can happen to the sphere
#[derive(Debug, Clone, PartialEq)]
pub enum SphereEvent {
    PointerDown(Vec2),
    PointerMove(Vec2),
    /// Pointer released anywhere on the surface
    PointerUp,
    TouchStart { id: u64, pos: Vec2 },
    TouchMove { id: u64, pos: Vec2 },
    TouchEnd { id: u64 },
    /// Abandon any active drag, mouse or touch
    CancelGesture,
    /// One animation frame elapsed
    Frame,
    HoverEnter(usize),
    HoverLeave(usize),
    Click(usize),
    /// Overlay closed via its close button or backdrop
    DismissOverlay,
}

/// Full interaction state of one sphere widget
#[derive(Debug, Clone)]
pub struct SphereWidgetState {
    config: SphereConfig,
    items: Vec<SphereItem>,
    positions: Vec<SphericalPosition>,
    rotation: RotationState,
    velocity: VelocityState,
    input: InputController,
    selection: SelectionState,
    rng: StdRng,
}

impl SphereWidgetState {
    /// Creates state with an OS-seeded layout jitter
    pub fn new(config: SphereConfig, items: Vec<SphereItem>) -> Self {
        Self::with_rng(config, items, StdRng::from_os_rng())
    }

    /// Creates state with a fixed seed, for reproducible layouts
    pub fn with_seed(config: SphereConfig, items: Vec<SphereItem>, seed: u64) -> Self {
        Self::with_rng(config, items, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SphereConfig, items: Vec<SphereItem>, rng: StdRng) -> Self {
        let mut state = Self {
            config: config.sanitized(),
            items,
            positions: Vec::new(),
            rotation: RotationState::default(),
            velocity: VelocityState::ZERO,
            input: InputController::new(),
            selection: SelectionState::new(),
            rng,
        };
        state.regenerate_layout();
        state
    }

    fn regenerate_layout(&mut self) {
        self.positions = layout::generate_positions(
            self.items.len(),
            self.config.effective_radius(),
            &mut self.rng,
        );
    }

    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    pub fn items(&self) -> &[SphereItem] {
        &self.items
    }

    pub fn positions(&self) -> &[SphericalPosition] {
        &self.positions
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn velocity(&self) -> VelocityState {
        self.velocity
    }

    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn set_rotation(&mut self, rotation: RotationState) {
        self.rotation = RotationState::new(
            math::normalize_angle(rotation.pitch),
            math::normalize_angle(rotation.yaw),
        );
    }

    /// Replaces the item collection. The layout is rebuilt only when the
    /// count or identities change.
    pub fn set_items(&mut self, items: Vec<SphereItem>) {
        let same_identity = items.len() == self.items.len()
            && items.iter().zip(&self.items).all(|(a, b)| a.id == b.id);
        self.items = items;
        if !same_identity {
            log::debug!("Item set changed, rebuilding layout for {} items", self.items.len());
            self.selection.clear();
            self.regenerate_layout();
        }
    }

    /// Applies a new configuration, rebuilding the layout if the radius changed
    pub fn set_config(&mut self, config: SphereConfig) {
        let config = config.sanitized();
        let radius_changed = config.effective_radius() != self.config.effective_radius();
        self.config = config;
        if radius_changed {
            self.regenerate_layout();
        }
    }

    /// Screen-space projection for the current rotation
    pub fn project(&self) -> Vec<WorldPosition> {
        projection::project_all(&self.positions, &self.rotation, self.config.effective_radius())
    }

    /// Applies one event in place
    pub fn update(&mut self, event: SphereEvent) {
        let sensitivity = self.config.drag_sensitivity;
        let max_speed = self.config.max_rotation_speed;

        match event {
            SphereEvent::PointerDown(pos) => {
                self.input.begin(GestureSource::Pointer, pos, &mut self.velocity);
            }
            SphereEvent::PointerMove(pos) => {
                if self.input.source() == Some(GestureSource::Pointer) {
                    self.input.drag_to(pos, sensitivity, max_speed, &mut self.rotation, &mut self.velocity);
                }
            }
            SphereEvent::PointerUp => {
                if self.input.source() == Some(GestureSource::Pointer) {
                    self.input.end();
                }
            }
            SphereEvent::TouchStart { id, pos } => {
                self.input.touch_start(id, pos, &mut self.velocity);
            }
            SphereEvent::TouchMove { id, pos } => {
                self.input.touch_move(id, pos, sensitivity, max_speed, &mut self.rotation, &mut self.velocity);
            }
            SphereEvent::TouchEnd { id } => {
                self.input.touch_end(id);
            }
            SphereEvent::CancelGesture => {
                self.input.cancel();
            }
            SphereEvent::Frame => {
                motion::step(
                    &mut self.rotation,
                    &mut self.velocity,
                    self.input.is_dragging(),
                    &self.config.motion_settings(),
                );
            }
            SphereEvent::HoverEnter(index) => {
                if index < self.items.len() {
                    self.selection.hover_enter(index);
                }
            }
            SphereEvent::HoverLeave(index) => {
                self.selection.hover_leave(index);
            }
            SphereEvent::Click(index) => {
                if let Some(item) = self.items.get(index) {
                    self.selection.select(index, item.clone());
                }
            }
            SphereEvent::DismissOverlay => {
                self.selection.dismiss();
            }
        }
    }

    /// Pure form of `update`: consumes the state and returns the next one
    pub fn transition(mut self, event: SphereEvent) -> Self {
        self.update(event);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<SphereItem> {
        (0..n)
            .map(|i| SphereItem::new(format!("item-{}", i), ItemVisual::Missing).with_title(format!("Item {}", i)))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = SphereWidgetState::with_seed(SphereConfig::default(), items(12), 1);
        assert_eq!(state.positions().len(), 12);
        assert_eq!(state.rotation(), RotationState::new(15.0, 15.0));
        assert!(state.velocity().is_zero());
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_empty_items_project_nothing() {
        let state = SphereWidgetState::with_seed(SphereConfig::default(), Vec::new(), 1);
        assert!(state.is_empty());
        assert!(state.project().is_empty());
    }

    #[test]
    fn test_set_items_same_ids_keeps_layout() {
        let mut state = SphereWidgetState::with_seed(SphereConfig::default(), items(8), 5);
        let before = state.positions().to_vec();
        state.set_items(items(8));
        assert_eq!(state.positions(), before.as_slice());

        state.set_items(items(9));
        assert_eq!(state.positions().len(), 9);
    }

    #[test]
    fn test_set_items_clears_stale_selection() {
        let mut state = SphereWidgetState::with_seed(SphereConfig::default(), items(4), 5);
        state.update(SphereEvent::Click(3));
        state.set_items(items(2));
        assert!(state.selection().selected().is_none());
    }

    #[test]
    fn test_pointer_move_ignored_during_touch_gesture() {
        let state = SphereWidgetState::with_seed(SphereConfig::default(), items(3), 2)
            .transition(SphereEvent::TouchStart { id: 7, pos: Vec2::ZERO })
            .transition(SphereEvent::PointerMove(Vec2::new(10.0, 0.0)));
        assert_eq!(state.rotation().yaw, 15.0);
        let state = state.transition(SphereEvent::TouchMove { id: 7, pos: Vec2::new(2.0, 0.0) });
        assert_eq!(state.rotation().yaw, 16.0);
    }

    #[test]
    fn test_cancel_ends_touch_gesture() {
        let config = SphereConfig::default().with_auto_rotate(true);
        let state = SphereWidgetState::with_seed(config, items(3), 2)
            .transition(SphereEvent::TouchStart { id: 1, pos: Vec2::ZERO })
            .transition(SphereEvent::PointerUp);
        assert!(state.is_dragging());

        let state = state.transition(SphereEvent::CancelGesture);
        assert!(!state.is_dragging());
        let state = state.transition(SphereEvent::Frame);
        assert!((state.rotation().yaw - 15.3).abs() < 1e-4);
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let state = SphereWidgetState::with_seed(SphereConfig::default(), items(3), 2)
            .transition(SphereEvent::Click(10));
        assert!(state.selection().selected().is_none());
    }

    #[test]
    fn test_radius_change_rebuilds_layout() {
        let mut state = SphereWidgetState::with_seed(SphereConfig::default(), items(5), 2);
        state.set_config(SphereConfig::default().with_sphere_radius(120.0));
        assert!(state.positions().iter().all(|p| p.radius == 120.0));
    }
}
