//! Hide behavior
//!
//! Finds the best concealment point behind a set of candidate obstacles and
//! steers toward it, falling back to evasion when nothing usable exists.

use glam::Vec3;

use crate::agent::{AgentHandle, AgentSet, KinematicAgent};
use crate::config::HideConfig;
use crate::steering::{Evade, SteeringBasics};

/// Outcome of a single hide query.
///
/// Recomputed on every call; nothing here persists across ticks.
#[derive(Debug, Clone, Copy)]
pub struct HideResult {
    /// Steering acceleration to apply this tick
    pub acceleration: Vec3,
    /// Best hiding spot found, or the agent's own position when none was
    pub spot: Vec3,
    /// Whether a valid hiding spot was found
    pub found: bool,
}

/// Concealment-seeking steering behavior.
///
/// Collaborators are supplied at construction; nothing is discovered at
/// runtime. The candidate list may contain stale handles, which are skipped,
/// never treated as an error.
#[derive(Debug, Clone)]
pub struct Hide {
    config: HideConfig,
    steering: SteeringBasics,
    evade: Evade,
    /// Last spot handed to callers, kept for external visualization only
    last_spot: Vec3,
    has_spot: bool,
}

impl Hide {
    /// Create a hide behavior with its collaborators
    #[must_use]
    pub fn new(config: HideConfig, steering: SteeringBasics, evade: Evade) -> Self {
        Self {
            config,
            steering,
            evade,
            last_spot: Vec3::ZERO,
            has_spot: false,
        }
    }

    /// The configured search settings
    #[must_use]
    pub fn config(&self) -> &HideConfig {
        &self.config
    }

    /// Steering toward the best hiding spot from `target`.
    ///
    /// Scans `candidates` against `obstacles`, skipping stale handles and
    /// obstacles farther than `find_radius` from the agent. Each remaining
    /// obstacle proposes a point on its far side from the target, offset by
    /// `distance_from_boundary`; points on the wrong side of the target are
    /// rejected, and the closest surviving point wins. With no target the
    /// query is a no-op signal (zero acceleration, own position, not found);
    /// with no usable spot it falls back to evading the target.
    pub fn get_steering(
        &mut self,
        agent: &dyn KinematicAgent,
        target: Option<&dyn KinematicAgent>,
        obstacles: &AgentSet,
        candidates: &[AgentHandle],
    ) -> HideResult {
        let Some(target) = target else {
            return HideResult {
                acceleration: Vec3::ZERO,
                spot: agent.position(),
                found: false,
            };
        };

        let position = agent.position();
        let mut closest = f32::INFINITY;
        let mut best_spot = position;
        let mut found = false;

        for &handle in candidates {
            let Some(obstacle) = obstacles.get(handle) else {
                continue;
            };

            // An obstacle that is itself out of range is not a usable
            // concealment body, wherever its hiding point would land
            if obstacle.position.distance(position) > self.config.find_radius {
                continue;
            }

            let spot = self.hiding_position(obstacle.position, obstacle.radius, target.position());

            if !self.is_valid_spot(spot, position, target.position()) {
                continue;
            }

            let dist = spot.distance(position);
            if dist < closest {
                closest = dist;
                best_spot = spot;
                found = true;
            }
        }

        self.last_spot = best_spot;
        self.has_spot = found;

        if !found {
            return HideResult {
                acceleration: self.evade.get_steering(agent, target),
                spot: position,
                found: false,
            };
        }

        HideResult {
            acceleration: self.steering.arrive(agent, best_spot),
            spot: best_spot,
            found: true,
        }
    }

    /// Point on the far side of an obstacle from the target, offset by the
    /// configured safety margin
    fn hiding_position(&self, obstacle: Vec3, obstacle_radius: f32, target: Vec3) -> Vec3 {
        let away = (obstacle - target).normalize_or_zero();
        obstacle + away * (obstacle_radius + self.config.distance_from_boundary)
    }

    /// A spot is only valid on the same angular side of the target as the
    /// agent; the strictly-positive dot product rejects exactly
    /// perpendicular spots
    fn is_valid_spot(&self, spot: Vec3, agent: Vec3, target: Vec3) -> bool {
        let to_spot = (spot - target).normalize_or_zero();
        let to_agent = (agent - target).normalize_or_zero();
        to_spot.dot(to_agent) > 0.0
    }

    /// Last hiding spot handed out, for visualization.
    ///
    /// `None` until a query finds one, and again after a query falls back.
    #[must_use]
    pub fn last_hiding_spot(&self) -> Option<Vec3> {
        self.has_spot.then_some(self.last_spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentBody;
    use crate::config::{EvadeConfig, SteeringConfig};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn hide_with(config: HideConfig) -> Hide {
        let steering = SteeringBasics::new(SteeringConfig::default());
        let evade = Evade::new(EvadeConfig::default(), steering.clone());
        Hide::new(config, steering, evade)
    }

    fn hide() -> Hide {
        hide_with(HideConfig::default())
    }

    fn obstacle_set(positions: &[(Vec3, f32)]) -> (AgentSet, Vec<AgentHandle>) {
        let mut set = AgentSet::new();
        let handles = positions
            .iter()
            .map(|&(pos, radius)| set.insert(AgentBody::new(pos, radius)))
            .collect();
        (set, handles)
    }

    #[test]
    fn test_single_obstacle_scenario() {
        // Agent at origin, target at (10,0,0), obstacle at (5,0,0) r=1:
        // the spot sits 1.6 behind the obstacle center toward the agent
        let agent = AgentBody::new(Vec3::ZERO, 0.5);
        let target = AgentBody::new(Vec3::new(10.0, 0.0, 0.0), 0.5);
        let (set, handles) = obstacle_set(&[(Vec3::new(5.0, 0.0, 0.0), 1.0)]);

        let result = hide().get_steering(&agent, Some(&target), &set, &handles);

        assert!(result.found);
        assert!((result.spot - Vec3::new(3.4, 0.0, 0.0)).length() < 0.001);
        // Heads toward the spot
        assert!(result.acceleration.x > 0.0);
    }

    #[test]
    fn test_spot_distance_equals_radius_plus_margin() {
        let agent = AgentBody::new(Vec3::new(1.0, 0.0, 7.0), 0.5);
        let target = AgentBody::new(Vec3::new(-3.0, 0.0, -2.0), 0.5);
        let obstacle_pos = Vec3::new(2.0, 0.0, 3.0);
        let (set, handles) = obstacle_set(&[(obstacle_pos, 1.25)]);

        let result = hide().get_steering(&agent, Some(&target), &set, &handles);

        assert!(result.found);
        assert!((result.spot.distance(obstacle_pos) - 1.85).abs() < 1e-4);
    }

    #[test]
    fn test_out_of_range_obstacle_falls_back_to_evade() {
        let agent = AgentBody::new(Vec3::ZERO, 0.5);
        let target = AgentBody::new(Vec3::new(10.0, 0.0, 0.0), 0.5);
        let (set, handles) = obstacle_set(&[(Vec3::new(5.0, 0.0, 0.0), 1.0)]);

        let mut hide = hide_with(HideConfig {
            find_radius: 4.0,
            distance_from_boundary: 0.6,
        });
        let result = hide.get_steering(&agent, Some(&target), &set, &handles);

        assert!(!result.found);
        assert!((result.spot - agent.position).length() < 0.001);
        // Evade pushes away from the target
        assert!(result.acceleration.x < 0.0);
    }

    #[test]
    fn test_no_target_is_a_noop_signal() {
        let agent = AgentBody::new(Vec3::new(2.0, 0.0, 1.0), 0.5);
        let (set, handles) = obstacle_set(&[(Vec3::new(5.0, 0.0, 0.0), 1.0)]);

        let result = hide().get_steering(&agent, None, &set, &handles);

        assert!(!result.found);
        assert!(result.acceleration.length() < 0.001);
        assert!((result.spot - agent.position).length() < 0.001);
    }

    #[test]
    fn test_empty_candidates_fall_back() {
        let agent = AgentBody::new(Vec3::ZERO, 0.5);
        let target = AgentBody::new(Vec3::new(10.0, 0.0, 0.0), 0.5);
        let set = AgentSet::new();

        let result = hide().get_steering(&agent, Some(&target), &set, &[]);

        assert!(!result.found);
        assert!((result.spot - agent.position).length() < 0.001);
    }

    #[test]
    fn test_stale_handles_are_skipped() {
        let agent = AgentBody::new(Vec3::ZERO, 0.5);
        let target = AgentBody::new(Vec3::new(10.0, 0.0, 0.0), 0.5);
        let (mut set, handles) = obstacle_set(&[
            (Vec3::new(5.0, 0.0, 0.0), 1.0),
            (Vec3::new(4.0, 0.0, 0.0), 1.0),
        ]);

        // Despawn the obstacle whose spot would win; its stale handle stays
        // in the list
        set.remove(handles[1]);

        let result = hide().get_steering(&agent, Some(&target), &set, &handles);

        assert!(result.found);
        assert!((result.spot - Vec3::new(3.4, 0.0, 0.0)).length() < 0.001);
    }

    #[test]
    fn test_wrong_side_spot_rejected() {
        // The obstacle sits past the target, so its hiding point lands on
        // the opposite side of the target from the agent
        let agent = AgentBody::new(Vec3::ZERO, 0.5);
        let target = AgentBody::new(Vec3::new(6.0, 0.0, 0.0), 0.5);
        let (set, handles) = obstacle_set(&[(Vec3::new(9.0, 0.0, 0.0), 1.0)]);

        let result = hide().get_steering(&agent, Some(&target), &set, &handles);

        assert!(!result.found);
    }

    #[test]
    fn test_perpendicular_spot_rejected() {
        // Target at origin, agent along +Z: an obstacle along +X proposes a
        // spot whose bearing is exactly perpendicular, dot == 0, invalid
        let agent = AgentBody::new(Vec3::new(0.0, 0.0, 1.0), 0.5);
        let target = AgentBody::new(Vec3::ZERO, 0.5);
        let (set, handles) = obstacle_set(&[(Vec3::new(2.0, 0.0, 0.0), 0.5)]);

        let result = hide().get_steering(&agent, Some(&target), &set, &handles);

        assert!(!result.found);
    }

    #[test]
    fn test_nearest_valid_spot_wins() {
        let agent = AgentBody::new(Vec3::ZERO, 0.5);
        let target = AgentBody::new(Vec3::new(10.0, 0.0, 0.0), 0.5);
        let (set, handles) = obstacle_set(&[
            (Vec3::new(6.0, 0.0, 3.0), 1.0),
            (Vec3::new(5.0, 0.0, 0.0), 1.0),
        ]);

        let result = hide().get_steering(&agent, Some(&target), &set, &handles);

        assert!(result.found);
        // The second obstacle's spot at (3.4,0,0) is closer than the first's
        assert!((result.spot - Vec3::new(3.4, 0.0, 0.0)).length() < 0.001);
    }

    #[test]
    fn test_first_strict_minimum_wins_ties() {
        // Two mirror-image obstacles produce equidistant spots; the first
        // candidate in iteration order is kept. Exact-distance ties are
        // order-dependent by design.
        let agent = AgentBody::new(Vec3::ZERO, 0.5);
        let target = AgentBody::new(Vec3::new(10.0, 0.0, 0.0), 0.5);
        let a = (Vec3::new(5.0, 0.0, 2.0), 1.0);
        let b = (Vec3::new(5.0, 0.0, -2.0), 1.0);

        let (set_ab, handles_ab) = obstacle_set(&[a, b]);
        let (set_ba, handles_ba) = obstacle_set(&[b, a]);

        let forward = hide().get_steering(&agent, Some(&target), &set_ab, &handles_ab);
        let reversed = hide().get_steering(&agent, Some(&target), &set_ba, &handles_ba);

        assert!(forward.found && reversed.found);
        assert!(forward.spot.z > 0.0);
        assert!(reversed.spot.z < 0.0);
    }

    #[test]
    fn test_idempotent_under_identical_inputs() {
        let agent = AgentBody::new(Vec3::ZERO, 0.5);
        let target = AgentBody::new(Vec3::new(10.0, 0.0, 0.0), 0.5);
        let (set, handles) = obstacle_set(&[
            (Vec3::new(5.0, 0.0, 0.0), 1.0),
            (Vec3::new(4.0, 0.0, 3.0), 1.5),
        ]);

        let mut h = hide();
        let first = h.get_steering(&agent, Some(&target), &set, &handles);
        let second = h.get_steering(&agent, Some(&target), &set, &handles);

        assert_eq!(first.found, second.found);
        assert!((first.spot - second.spot).length() < 1e-6);
        assert!((first.acceleration - second.acceleration).length() < 1e-6);
    }

    #[test]
    fn test_last_hiding_spot_tracks_outcome() {
        let agent = AgentBody::new(Vec3::ZERO, 0.5);
        let target = AgentBody::new(Vec3::new(10.0, 0.0, 0.0), 0.5);
        let (set, handles) = obstacle_set(&[(Vec3::new(5.0, 0.0, 0.0), 1.0)]);

        let mut h = hide();
        assert!(h.last_hiding_spot().is_none());

        h.get_steering(&agent, Some(&target), &set, &handles);
        assert!(h.last_hiding_spot().is_some());

        h.get_steering(&agent, Some(&target), &AgentSet::new(), &[]);
        assert!(h.last_hiding_spot().is_none());
    }

    #[test]
    fn test_matches_brute_force_on_random_inputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let config = HideConfig::default();

        for _ in 0..200 {
            let agent = AgentBody::new(random_point(&mut rng, 8.0), 0.5);
            let target = AgentBody::new(random_point(&mut rng, 8.0), 0.5);

            let count = rng.gen_range(0..8);
            let obstacles: Vec<(Vec3, f32)> = (0..count)
                .map(|_| (random_point(&mut rng, 12.0), rng.gen_range(0.3..2.0)))
                .collect();
            let (set, handles) = obstacle_set(&obstacles);

            let result =
                hide_with(config).get_steering(&agent, Some(&target), &set, &handles);

            // Brute force: enumerate every candidate spot the algorithm is
            // allowed to pick and take the closest
            let mut expected: Option<Vec3> = None;
            let mut expected_dist = f32::INFINITY;
            for &(pos, radius) in &obstacles {
                if pos.distance(agent.position) > config.find_radius {
                    continue;
                }
                let away = (pos - target.position).normalize_or_zero();
                let spot = pos + away * (radius + config.distance_from_boundary);
                let to_spot = (spot - target.position).normalize_or_zero();
                let to_agent = (agent.position - target.position).normalize_or_zero();
                if to_spot.dot(to_agent) <= 0.0 {
                    continue;
                }
                let dist = spot.distance(agent.position);
                if dist < expected_dist {
                    expected_dist = dist;
                    expected = Some(spot);
                }
            }

            match expected {
                Some(spot) => {
                    assert!(result.found);
                    assert!((result.spot - spot).length() < 1e-5);
                }
                None => {
                    assert!(!result.found);
                    assert!((result.spot - agent.position).length() < 1e-5);
                }
            }
        }
    }

    fn random_point(rng: &mut ChaCha8Rng, extent: f32) -> Vec3 {
        Vec3::new(
            rng.gen_range(-extent..extent),
            0.0,
            rng.gen_range(-extent..extent),
        )
    }
}
