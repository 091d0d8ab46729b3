//! Constant-direction unit driver

use glam::Vec3;

use crate::agent::KinematicAgent;
use crate::steering::SteeringBasics;

/// Drives an agent along a fixed direction at the steering max speed.
#[derive(Debug, Clone)]
pub struct GoDirectionUnit {
    /// Direction the unit should move in; zero stops it
    pub direction: Vec3,
    steering: SteeringBasics,
}

impl GoDirectionUnit {
    /// Create a driver heading in `direction`
    #[must_use]
    pub fn new(direction: Vec3, steering: SteeringBasics) -> Self {
        Self {
            direction,
            steering,
        }
    }

    /// One fixed-timestep update
    pub fn fixed_tick(&self, body: &mut dyn KinematicAgent, dt: f32) {
        if self.direction == Vec3::ZERO {
            body.set_velocity(Vec3::ZERO);
            return;
        }

        let direction = self.direction.normalize_or_zero();
        body.set_velocity(direction * self.steering.config().max_velocity);
        self.steering.look_where_youre_going(body, dt);
    }
}
