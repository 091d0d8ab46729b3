//! Player-driven third-person movement

use glam::{Quat, Vec2, Vec3};

use crate::agent::KinematicAgent;
use crate::config::ThirdPersonConfig;
use crate::steering::{move_towards_angle, yaw_of};
use crate::view::Camera;

/// One frame's worth of input, polled by the host
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveInput {
    /// Stick or key axis, x right / y forward, each in [-1, 1]
    pub axis: Vec2,
    /// Whether the jump control is down
    pub jump: bool,
}

/// Camera-relative movement driver for a player agent.
///
/// Consumes input snapshots; the host owns the actual devices. Jump triggers
/// on the rising edge of the control, movement maps the input axis onto the
/// camera's ground-plane forward and right.
#[derive(Debug, Clone)]
pub struct ThirdPersonUnit {
    config: ThirdPersonConfig,
    jump_was_down: bool,
}

impl ThirdPersonUnit {
    /// Create a third-person driver
    #[must_use]
    pub fn new(config: ThirdPersonConfig) -> Self {
        Self {
            config,
            jump_was_down: false,
        }
    }

    /// Frame-rate update: edge-detect the jump control
    pub fn frame_tick(&mut self, body: &mut dyn KinematicAgent, input: &MoveInput) {
        if input.jump && !self.jump_was_down {
            body.jump(self.config.jump_speed);
        }
        self.jump_was_down = input.jump;
    }

    /// Fixed-timestep update: drive planar velocity from the input axis.
    ///
    /// The vertical component is left alone so jumps survive the write.
    pub fn fixed_tick(&self, body: &mut dyn KinematicAgent, camera: &Camera, input: &MoveInput) {
        let direction = self.movement_dir(camera, input.axis);
        let mut velocity = direction * self.config.speed;
        velocity.y = body.velocity().y;
        body.set_velocity(velocity);
    }

    /// Late update: turn the facing toward the move direction
    pub fn late_tick(&self, body: &mut dyn KinematicAgent, dt: f32) {
        let mut heading = body.velocity();
        heading.y = 0.0;

        if heading.length_squared() < 1e-6 {
            return;
        }

        let current = yaw_of(body.rotation() * Vec3::Z);
        let target = yaw_of(heading);
        let yaw = move_towards_angle(current, target, self.config.facing_speed * dt);

        body.set_rotation(Quat::from_rotation_y(yaw));
    }

    /// Input axis mapped onto the camera's ground-plane basis
    #[must_use]
    pub fn movement_dir(&self, camera: &Camera, axis: Vec2) -> Vec3 {
        let mut forward = camera.direction;
        forward.y = 0.0;
        forward = forward.normalize_or_zero();

        let mut right = camera.direction.cross(camera.up);
        right.y = 0.0;
        right = right.normalize_or_zero();

        (forward * axis.y + right * axis.x).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::agent::AgentBody;

    fn behind_camera() -> Camera {
        // Behind and above the player, looking along +Z and down a bit
        Camera::look_at(Vec3::new(0.0, 5.0, -8.0), Vec3::ZERO, Vec3::Y)
    }

    fn unit() -> ThirdPersonUnit {
        ThirdPersonUnit::new(ThirdPersonConfig::default())
    }

    #[test]
    fn test_forward_input_moves_along_camera_forward() {
        let mut body = AgentBody::new(Vec3::ZERO, 0.5);
        let input = MoveInput {
            axis: Vec2::new(0.0, 1.0),
            jump: false,
        };

        unit().fixed_tick(&mut body, &behind_camera(), &input);

        assert!(body.velocity.z > 0.0);
        assert!(body.velocity.x.abs() < 0.001);
        assert!((body.velocity.length() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_strafe_input_moves_along_camera_right() {
        let mut body = AgentBody::new(Vec3::ZERO, 0.5);
        let input = MoveInput {
            axis: Vec2::new(1.0, 0.0),
            jump: false,
        };

        unit().fixed_tick(&mut body, &behind_camera(), &input);

        // Screen-right for a +z-facing camera is -x in a right-handed basis
        assert!(body.velocity.x < 0.0);
        assert!(body.velocity.z.abs() < 0.001);
    }

    #[test]
    fn test_zero_input_stops_planar_motion() {
        let mut body = AgentBody::new(Vec3::ZERO, 0.5);
        body.velocity = Vec3::new(3.0, 2.0, 1.0);

        unit().fixed_tick(&mut body, &behind_camera(), &MoveInput::default());

        assert!(body.velocity.x.abs() < 0.001);
        assert!(body.velocity.z.abs() < 0.001);
        // Vertical motion belongs to the host
        assert!((body.velocity.y - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_jump_fires_on_rising_edge_only() {
        let mut body = AgentBody::new(Vec3::ZERO, 0.5);
        let mut u = unit();
        let held = MoveInput {
            axis: Vec2::ZERO,
            jump: true,
        };

        u.frame_tick(&mut body, &held);
        assert!((body.velocity.y - 7.0).abs() < 0.001);

        // Still held: no second impulse even if vertical speed decayed
        body.velocity.y = 1.0;
        u.frame_tick(&mut body, &held);
        assert!((body.velocity.y - 1.0).abs() < 0.001);

        // Released then pressed again
        u.frame_tick(&mut body, &MoveInput::default());
        u.frame_tick(&mut body, &held);
        assert!((body.velocity.y - 7.0).abs() < 0.001);
    }

    #[test]
    fn test_late_tick_turns_toward_motion() {
        let mut body = AgentBody::new(Vec3::ZERO, 0.5);
        body.velocity = Vec3::new(1.0, 0.0, 0.0);
        let u = unit();

        for _ in 0..60 {
            u.late_tick(&mut body, 0.02);
        }

        let forward = body.rotation * Vec3::Z;
        assert!((forward.x - 1.0).abs() < 0.01);
    }
}
