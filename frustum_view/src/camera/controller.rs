/// Free-fly camera controller.
///
/// Direct, unfiltered input-to-state mapping: one fixed step per key press,
/// yaw/pitch accumulated in degrees from raw mouse-drag deltas. No smoothing
/// and no pitch clamping, so camera motion is reproducible step for step.
/// A drag that would point the camera along its up vector is rejected.

use glam::{IVec2, Vec3};
use crate::engine_warn;
use super::orientation::{CameraOrientation, MIN_LOOK_UP_SEPARATION};

/// Discrete movement directions (W/A/S/D).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyController {
    /// Accumulated yaw in degrees
    pub yaw: f32,
    /// Accumulated pitch in degrees
    pub pitch: f32,
    /// Distance moved per key press, in units of the look direction
    pub move_speed: f32,
    /// Last cursor position while the look button is held
    drag: Option<IVec2>,
}

impl FlyController {
    pub fn new(yaw: f32, pitch: f32, move_speed: f32) -> Self {
        Self { yaw, pitch, move_speed, drag: None }
    }

    /// Translate the eye one step.
    ///
    /// Forward/backward follow the look direction as-is (unnormalized, like
    /// the initial scene setup). Strafing follows `normalize(direction × up)`
    /// and is skipped when that cross product is degenerate.
    pub fn move_camera(&self, orientation: &mut CameraOrientation, direction: MoveDirection) {
        match direction {
            MoveDirection::Forward => {
                orientation.eye += orientation.direction * self.move_speed;
            }
            MoveDirection::Backward => {
                orientation.eye -= orientation.direction * self.move_speed;
            }
            MoveDirection::Left | MoveDirection::Right => {
                let Some(right) = orientation.direction.cross(orientation.up).try_normalize() else {
                    engine_warn!("fv::FlyController",
                        "Strafe skipped: look direction {:?} is parallel to up {:?}",
                        orientation.direction, orientation.up);
                    return;
                };
                let delta = right * self.move_speed;
                if direction == MoveDirection::Left {
                    orientation.eye -= delta;
                } else {
                    orientation.eye += delta;
                }
            }
        }
    }

    /// Start a mouse-look drag at cursor position `(x, y)`.
    ///
    /// Ignored if a drag is already in progress.
    pub fn begin_drag(&mut self, x: i32, y: i32) {
        if self.drag.is_none() {
            self.drag = Some(IVec2::new(x, y));
        }
    }

    /// Stop the current drag.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Cursor moved to `(x, y)`.
    ///
    /// While dragging, adds the horizontal delta to yaw and the inverted
    /// vertical delta to pitch, then rewrites the look direction. Returns
    /// whether the orientation changed.
    ///
    /// A step that would leave the look direction (anti)parallel to
    /// `orientation.up` is dropped: yaw, pitch and direction keep their
    /// previous values and the anchor still moves to `(x, y)`.
    pub fn drag_to(&mut self, x: i32, y: i32, orientation: &mut CameraOrientation) -> bool {
        let Some(last) = self.drag else {
            return false;
        };
        self.drag = Some(IVec2::new(x, y));

        let (yaw, pitch) = (self.yaw, self.pitch);
        self.yaw += (x - last.x) as f32;
        self.pitch += (last.y - y) as f32;

        let direction = self.look_direction();
        if direction.cross(orientation.up.normalize_or_zero()).length() < MIN_LOOK_UP_SEPARATION {
            engine_warn!("fv::FlyController",
                "Mouse look skipped: pitch {} would align the view with up {:?}",
                self.pitch, orientation.up);
            self.yaw = yaw;
            self.pitch = pitch;
            return false;
        }

        orientation.direction = direction;
        true
    }

    /// Unit look direction for the current yaw/pitch.
    pub fn look_direction(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
