//! Drag handling (mouse and primary touch)

use glam::Vec2;

use super::math::{clamp_speed, normalize_angle};
use super::projection::RotationState;

/// Angular velocity in degrees per frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VelocityState {
    pub pitch: f32,
    pub yaw: f32,
}

impl VelocityState {
    pub const ZERO: Self = Self { pitch: 0.0, yaw: 0.0 };

    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    /// Both axes clamped to `[-max, max]`
    pub fn clamped(self, max: f32) -> Self {
        Self {
            pitch: clamp_speed(self.pitch, max),
            yaw: clamp_speed(self.yaw, max),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.pitch == 0.0 && self.yaw == 0.0
    }
}

/// Where a gesture came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSource {
    Pointer,
    Touch(u64),
}

/// Converts a screen-space movement into a rotation delta.
///
/// Vertical movement drives pitch (inverted), horizontal movement drives yaw.
pub fn rotation_delta(delta: Vec2, sensitivity: f32) -> VelocityState {
    VelocityState {
        pitch: -delta.y * sensitivity,
        yaw: delta.x * sensitivity,
    }
}

/// Tracks the single active drag gesture
#[derive(Debug, Clone, Default)]
pub struct InputController {
    source: Option<GestureSource>,
    last_pos: Vec2,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<GestureSource> {
        self.source
    }

    /// Starts a gesture at `pos`, replacing any gesture already active, and kills momentum
    pub fn begin(&mut self, source: GestureSource, pos: Vec2, velocity: &mut VelocityState) {
        if let Some(previous) = self.source {
            log::debug!("Gesture {:?} replaced by {:?}", previous, source);
        }
        self.source = Some(source);
        self.last_pos = pos;
        *velocity = VelocityState::ZERO;
        log::debug!("Drag started at ({:.1}, {:.1})", pos.x, pos.y);
    }

    /// Applies one move event. Returns false if no gesture is active.
    pub fn drag_to(
        &mut self,
        pos: Vec2,
        sensitivity: f32,
        max_speed: f32,
        rotation: &mut RotationState,
        velocity: &mut VelocityState,
    ) -> bool {
        if self.source.is_none() {
            return false;
        }

        let delta = rotation_delta(pos - self.last_pos, sensitivity).clamped(max_speed);
        rotation.pitch = normalize_angle(rotation.pitch + delta.pitch);
        rotation.yaw = normalize_angle(rotation.yaw + delta.yaw);
        *velocity = delta;
        self.last_pos = pos;
        true
    }

    /// Ends the gesture; velocity is left as-is so momentum can take over
    pub fn end(&mut self) {
        if self.source.take().is_some() {
            log::debug!("Drag ended");
        }
    }

    /// Drops the active gesture whatever its source. Velocity is kept.
    pub fn cancel(&mut self) {
        if let Some(source) = self.source.take() {
            log::debug!("Gesture {:?} cancelled", source);
        }
    }

    /// Starts a touch gesture unless a touch is already being tracked
    pub fn touch_start(&mut self, id: u64, pos: Vec2, velocity: &mut VelocityState) {
        if matches!(self.source, Some(GestureSource::Touch(_))) {
            return;
        }
        self.begin(GestureSource::Touch(id), pos, velocity);
    }

    /// Moves the tracked touch. Other fingers are ignored.
    pub fn touch_move(
        &mut self,
        id: u64,
        pos: Vec2,
        sensitivity: f32,
        max_speed: f32,
        rotation: &mut RotationState,
        velocity: &mut VelocityState,
    ) -> bool {
        if self.source != Some(GestureSource::Touch(id)) {
            return false;
        }
        self.drag_to(pos, sensitivity, max_speed, rotation, velocity)
    }

    /// Ends the gesture if `id` is the tracked touch
    pub fn touch_end(&mut self, id: u64) {
        if self.source == Some(GestureSource::Touch(id)) {
            self.end();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_zeroes_velocity() {
        let mut input = InputController::new();
        let mut velocity = VelocityState::new(3.0, -4.0);
        input.begin(GestureSource::Pointer, Vec2::new(10.0, 10.0), &mut velocity);
        assert!(input.is_dragging());
        assert!(velocity.is_zero());
    }

    #[test]
    fn test_drag_maps_axes() {
        let mut input = InputController::new();
        let mut rotation = RotationState::new(0.0, 0.0);
        let mut velocity = VelocityState::ZERO;
        input.begin(GestureSource::Pointer, Vec2::ZERO, &mut velocity);
        input.drag_to(Vec2::new(4.0, 6.0), 0.5, 5.0, &mut rotation, &mut velocity);
        assert_eq!(velocity, VelocityState::new(-3.0, 2.0));
        assert_eq!(rotation, RotationState::new(-3.0, 2.0));
    }

    #[test]
    fn test_drag_clamps_velocity() {
        let mut input = InputController::new();
        let mut rotation = RotationState::new(0.0, 0.0);
        let mut velocity = VelocityState::ZERO;
        input.begin(GestureSource::Pointer, Vec2::ZERO, &mut velocity);
        input.drag_to(Vec2::new(50.0, 0.0), 0.5, 5.0, &mut rotation, &mut velocity);
        assert_eq!(velocity.yaw, 5.0);
        assert_eq!(rotation.yaw, 5.0);

        input.drag_to(Vec2::new(50.0, -400.0), 0.5, 5.0, &mut rotation, &mut velocity);
        assert_eq!(velocity, VelocityState::new(5.0, 0.0));
    }

    #[test]
    fn test_move_without_gesture_is_ignored() {
        let mut input = InputController::new();
        let mut rotation = RotationState::new(1.0, 1.0);
        let mut velocity = VelocityState::ZERO;
        assert!(!input.drag_to(Vec2::new(30.0, 30.0), 0.5, 5.0, &mut rotation, &mut velocity));
        assert_eq!(rotation, RotationState::new(1.0, 1.0));
    }

    #[test]
    fn test_end_keeps_velocity() {
        let mut input = InputController::new();
        let mut rotation = RotationState::new(0.0, 0.0);
        let mut velocity = VelocityState::ZERO;
        input.begin(GestureSource::Pointer, Vec2::ZERO, &mut velocity);
        input.drag_to(Vec2::new(2.0, 0.0), 0.5, 5.0, &mut rotation, &mut velocity);
        input.end();
        assert!(!input.is_dragging());
        assert_eq!(velocity.yaw, 1.0);
    }

    #[test]
    fn test_secondary_touch_is_ignored() {
        let mut input = InputController::new();
        let mut rotation = RotationState::new(0.0, 0.0);
        let mut velocity = VelocityState::ZERO;
        input.touch_start(1, Vec2::ZERO, &mut velocity);
        input.touch_start(2, Vec2::new(100.0, 100.0), &mut velocity);
        assert_eq!(input.source(), Some(GestureSource::Touch(1)));

        assert!(!input.touch_move(2, Vec2::new(140.0, 100.0), 0.5, 5.0, &mut rotation, &mut velocity));
        assert!(input.touch_move(1, Vec2::new(4.0, 0.0), 0.5, 5.0, &mut rotation, &mut velocity));
        assert_eq!(rotation.yaw, 2.0);

        input.touch_end(2);
        assert!(input.is_dragging());
        input.touch_end(1);
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_cancel_releases_tracked_touch() {
        let mut input = InputController::new();
        let mut rotation = RotationState::new(0.0, 0.0);
        let mut velocity = VelocityState::ZERO;
        input.touch_start(1, Vec2::ZERO, &mut velocity);
        input.cancel();
        assert!(!input.is_dragging());

        input.touch_start(2, Vec2::ZERO, &mut velocity);
        assert_eq!(input.source(), Some(GestureSource::Touch(2)));
        assert!(input.touch_move(2, Vec2::new(4.0, 0.0), 0.5, 5.0, &mut rotation, &mut velocity));
        assert_eq!(rotation.yaw, 2.0);
    }
}
