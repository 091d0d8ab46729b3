//! Wall avoidance behavior

use glam::{Quat, Vec3};
use smallvec::SmallVec;

use crate::agent::KinematicAgent;
use crate::config::WallAvoidanceConfig;
use crate::raycast::{RayCaster, RayHit};
use crate::steering::SteeringBasics;

/// Steer away from walls detected along the direction of travel.
///
/// Probes with a main whisker along the queried direction and two shorter
/// whiskers fanned out about +Y. The closest hit proposes a point
/// `avoid_distance` past the wall surface along its normal, and the result
/// seeks that point. With nothing hit the output is zero, which callers
/// treat as "no imminent wall".
#[derive(Debug, Clone)]
pub struct WallAvoidance {
    config: WallAvoidanceConfig,
    steering: SteeringBasics,
}

impl WallAvoidance {
    /// Create a wall-avoidance behavior
    #[must_use]
    pub fn new(config: WallAvoidanceConfig, steering: SteeringBasics) -> Self {
        Self { config, steering }
    }

    /// Avoidance acceleration for travel along `direction`, or zero
    #[must_use]
    pub fn get_steering(
        &self,
        agent: &dyn KinematicAgent,
        direction: Vec3,
        caster: &dyn RayCaster,
    ) -> Vec3 {
        let forward = direction.normalize_or_zero();
        if forward == Vec3::ZERO {
            return Vec3::ZERO;
        }

        let side = Quat::from_rotation_y(self.config.whisker_angle);
        let whiskers: SmallVec<[(Vec3, f32); 3]> = SmallVec::from_buf([
            (forward, self.config.main_whisker_len),
            (side * forward, self.config.side_whisker_len),
            (side.inverse() * forward, self.config.side_whisker_len),
        ]);

        let origin = agent.position();
        let mut closest: Option<RayHit> = None;

        for (dir, len) in whiskers {
            if let Some(hit) = caster.cast_ray(origin, dir, len)
                && closest.is_none_or(|best| hit.distance < best.distance)
            {
                closest = Some(hit);
            }
        }

        match closest {
            Some(hit) => {
                let target = hit.point + hit.normal * self.config.avoid_distance;
                self.steering.seek(agent, target)
            }
            None => Vec3::ZERO,
        }
    }
}
