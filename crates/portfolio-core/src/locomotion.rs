//! Player character state and the damped-velocity locomotion step.
//!
//! Velocity is a per-frame displacement on the x/z plane: held input adds
//! `direction * speed * dt` to an axis, released input decays that axis by a
//! fixed factor each frame. Forward is -Z (into the scene, away from the
//! camera), right is +X.

use crate::camera::Camera;
use crate::constants::{
    CHARACTER_GROUND_Y, MOVE_SPEED, VELOCITY_DECAY_PER_FRAME,
};
use crate::input::InputState;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Character {
    pub position: Vec3,
    pub yaw: f32,
    /// x/z displacement applied per frame.
    pub velocity: Vec2,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, CHARACTER_GROUND_Y, 0.0),
            yaw: 0.0,
            velocity: Vec2::ZERO,
        }
    }
}

impl Character {
    /// Turn to face a world-space point on the ground plane.
    pub fn face_towards(&mut self, point: Vec3) {
        let dx = point.x - self.position.x;
        let dz = point.z - self.position.z;
        if dx != 0.0 || dz != 0.0 {
            self.yaw = dx.atan2(dz);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocomotionParams {
    pub speed: f32,
    pub decay_per_frame: f32,
}

impl Default for LocomotionParams {
    fn default() -> Self {
        Self {
            speed: MOVE_SPEED,
            decay_per_frame: VELOCITY_DECAY_PER_FRAME,
        }
    }
}

/// Input direction in world x/z (normalized, or zero).
pub fn input_direction(input: &InputState) -> Vec2 {
    let (right, forward) = input.axes();
    Vec2::new(right, -forward).normalize_or_zero()
}

/// One locomotion step. Returns `false` without touching anything when
/// `suspended` (a selection is active).
pub fn step(
    character: &mut Character,
    camera: &mut Camera,
    input: &InputState,
    params: &LocomotionParams,
    dt: f32,
    suspended: bool,
) -> bool {
    if suspended {
        return false;
    }
    let (axis_x, axis_z) = input.axes();
    let dir = input_direction(input);
    let accel = dir * params.speed * dt;

    // Opposing keys net to zero and decay like a released axis.
    if axis_x != 0.0 {
        character.velocity.x += accel.x;
    } else {
        character.velocity.x *= params.decay_per_frame;
    }
    if axis_z != 0.0 {
        character.velocity.y += accel.y;
    } else {
        character.velocity.y *= params.decay_per_frame;
    }

    character.position.x += character.velocity.x;
    character.position.z += character.velocity.y;

    if dir != Vec2::ZERO {
        character.yaw = dir.x.atan2(dir.y);
    }

    camera.follow(character.position);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;

    #[test]
    fn forward_moves_towards_negative_z_and_faces_it() {
        let mut c = Character::default();
        let mut cam = Camera::default();
        let mut input = InputState::default();
        input.key_down(Direction::Forward);
        step(&mut c, &mut cam, &input, &LocomotionParams::default(), 1.0 / 60.0, false);
        assert!(c.position.z < 0.0);
        assert!((c.yaw.abs() - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(cam.target, c.position);
    }

    #[test]
    fn diagonal_input_is_normalized() {
        let mut input = InputState::default();
        input.key_down(Direction::Forward);
        input.key_down(Direction::Right);
        assert!((input_direction(&input).length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn held_key_accumulates_speed_times_dt_each_frame() {
        let mut c = Character::default();
        let mut cam = Camera::default();
        let mut input = InputState::default();
        input.key_down(Direction::Forward);
        let params = LocomotionParams::default();
        let dt = 1.0 / 60.0;
        for n in 1..=60 {
            step(&mut c, &mut cam, &input, &params, dt, false);
            let expect = -(n as f32) * params.speed * dt;
            assert!((c.velocity.y - expect).abs() < 1e-4, "frame {n}: {}", c.velocity.y);
        }
        assert_eq!(c.velocity.x, 0.0);
        assert!((c.velocity.y + params.speed).abs() < 1e-3);
    }
}
