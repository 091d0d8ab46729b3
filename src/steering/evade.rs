//! Evade behavior

use glam::Vec3;

use crate::agent::KinematicAgent;
use crate::config::EvadeConfig;
use crate::steering::SteeringBasics;

/// Steer away from a predicted future position of a moving target.
///
/// The look-ahead time is `distance / speed`, capped at `max_prediction`.
/// A slow or stationary target falls on the capped branch, so the predicted
/// point degenerates to its current position without any division by zero.
#[derive(Debug, Clone)]
pub struct Evade {
    config: EvadeConfig,
    steering: SteeringBasics,
}

impl Evade {
    /// Create an evade behavior
    #[must_use]
    pub fn new(config: EvadeConfig, steering: SteeringBasics) -> Self {
        Self { config, steering }
    }

    /// Flee acceleration away from the target's predicted position
    #[must_use]
    pub fn get_steering(
        &self,
        agent: &dyn KinematicAgent,
        target: &dyn KinematicAgent,
    ) -> Vec3 {
        let displacement = target.position() - agent.position();
        let distance = displacement.length();
        let speed = target.velocity().length();

        let prediction = if speed <= distance / self.config.max_prediction {
            self.config.max_prediction
        } else {
            distance / speed
        };

        let future = target.position() + target.velocity() * prediction;
        self.steering.flee(agent, future)
    }
}
