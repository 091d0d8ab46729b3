//! Kinematic agent state

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Minimal rigid-body surface the steering components drive.
///
/// The physics/transform host owns the real body; anything that can answer
/// these queries can be steered. `AgentBody` is the plain data implementation
/// used by the spawner and the demo.
pub trait KinematicAgent {
    /// World-space position
    fn position(&self) -> Vec3;
    /// Bounding-sphere radius
    fn radius(&self) -> f32;
    /// Current linear velocity
    fn velocity(&self) -> Vec3;
    /// Current rotation
    fn rotation(&self) -> Quat;
    /// Overwrite the linear velocity
    fn set_velocity(&mut self, velocity: Vec3);
    /// Overwrite the rotation
    fn set_rotation(&mut self, rotation: Quat);
    /// Apply a vertical jump impulse
    fn jump(&mut self, speed: f32);
}

/// Plain data-owning agent body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgentBody {
    /// Position in world space
    pub position: Vec3,
    /// Rotation as a quaternion (yaw about +Y for grounded agents)
    pub rotation: Quat,
    /// Linear velocity
    pub velocity: Vec3,
    /// Bounding-sphere radius
    pub radius: f32,
}

impl AgentBody {
    /// Create a body at a position with the given radius
    #[must_use]
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            radius,
        }
    }

    /// Create a body with an initial yaw (radians about +Y)
    #[must_use]
    pub fn with_yaw(position: Vec3, radius: f32, yaw: f32) -> Self {
        Self {
            position,
            rotation: Quat::from_rotation_y(yaw),
            velocity: Vec3::ZERO,
            radius,
        }
    }

    /// Integrate position from velocity over a timestep
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

impl Default for AgentBody {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.5)
    }
}

impl KinematicAgent for AgentBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn jump(&mut self, speed: f32) {
        self.velocity.y = speed;
    }
}
