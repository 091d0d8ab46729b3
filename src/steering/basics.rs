//! Core steering primitive
//!
//! Bounded accelerations toward or away from points, velocity integration
//! with a speed clamp, and orientation toward the direction of travel.

use glam::{Quat, Vec3};

use crate::agent::KinematicAgent;
use crate::config::SteeringConfig;

/// Kinematic-limiting steering primitive.
///
/// Produces accelerations bounded by the configured maxima and applies them
/// to an agent's velocity and facing. Behaviors that need arrival or flee
/// output own one of these.
#[derive(Debug, Clone)]
pub struct SteeringBasics {
    config: SteeringConfig,
}

impl SteeringBasics {
    /// Create a steering primitive from limits
    #[must_use]
    pub fn new(config: SteeringConfig) -> Self {
        Self { config }
    }

    /// The configured limits
    #[must_use]
    pub fn config(&self) -> &SteeringConfig {
        &self.config
    }

    /// Max-acceleration steering toward a point
    #[must_use]
    pub fn seek(&self, agent: &dyn KinematicAgent, target: Vec3) -> Vec3 {
        let direction = (target - agent.position()).normalize_or_zero();
        direction * self.config.max_acceleration
    }

    /// Max-acceleration steering away from a point
    #[must_use]
    pub fn flee(&self, agent: &dyn KinematicAgent, from: Vec3) -> Vec3 {
        let direction = (agent.position() - from).normalize_or_zero();
        direction * self.config.max_acceleration
    }

    /// Steering toward a point that slows down on approach.
    ///
    /// Full speed outside `slow_radius`, proportionally slower inside it,
    /// zero acceleration inside `target_radius`. The result is clamped to
    /// `max_acceleration`.
    #[must_use]
    pub fn arrive(&self, agent: &dyn KinematicAgent, target: Vec3) -> Vec3 {
        let to_target = target - agent.position();
        let distance = to_target.length();

        if distance < self.config.target_radius {
            return Vec3::ZERO;
        }

        let target_speed = if distance > self.config.slow_radius {
            self.config.max_velocity
        } else {
            self.config.max_velocity * distance / self.config.slow_radius
        };

        let target_velocity = to_target.normalize_or_zero() * target_speed;
        let acceleration = (target_velocity - agent.velocity()) / self.config.time_to_target;

        if acceleration.length() > self.config.max_acceleration {
            return acceleration.normalize_or_zero() * self.config.max_acceleration;
        }

        acceleration
    }

    /// Integrate an acceleration into the agent's velocity.
    ///
    /// The resulting speed is clamped to `max_velocity`.
    pub fn steer(&self, agent: &mut dyn KinematicAgent, acceleration: Vec3, dt: f32) {
        let mut velocity = agent.velocity() + acceleration * dt;

        if velocity.length() > self.config.max_velocity {
            velocity = velocity.normalize_or_zero() * self.config.max_velocity;
        }

        agent.set_velocity(velocity);
    }

    /// Rotate the agent's yaw toward its horizontal velocity.
    ///
    /// Turns at most `turn_speed * dt` per call; near-zero velocity leaves
    /// the rotation untouched.
    pub fn look_where_youre_going(&self, agent: &mut dyn KinematicAgent, dt: f32) {
        let mut heading = agent.velocity();
        heading.y = 0.0;

        if heading.length_squared() < 1e-6 {
            return;
        }

        let current = yaw_of(agent.rotation() * Vec3::Z);
        let target = yaw_of(heading);
        let yaw = move_towards_angle(current, target, self.config.turn_speed * dt);

        agent.set_rotation(Quat::from_rotation_y(yaw));
    }
}

/// Yaw of a direction about +Y; zero faces +Z
pub(crate) fn yaw_of(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z)
}

/// Step an angle toward a target by at most `max_delta`, radians.
///
/// Takes the shortest arc, so stepping from just below PI to just above -PI
/// crosses the seam instead of going the long way around.
pub(crate) fn move_towards_angle(current: f32, target: f32, max_delta: f32) -> f32 {
    use std::f32::consts::{PI, TAU};

    let mut delta = (target - current) % TAU;
    if delta > PI {
        delta -= TAU;
    } else if delta < -PI {
        delta += TAU;
    }

    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}
