//! Hide unit driver
//!
//! Per-tick orchestration of the hide behavior: pulls the live obstacle list
//! from a named spawner, blends the hide steering with wall avoidance, and
//! applies the result through the steering primitive.

use glam::Vec3;

use crate::agent::{AgentSet, KinematicAgent};
use crate::config::HideUnitConfig;
use crate::raycast::RayCaster;
use crate::spawn::SpawnerRegistry;
use crate::steering::{Hide, SteeringBasics, WallAvoidance};

/// Lifecycle of a unit driver.
///
/// Resolution runs once; failure is terminal and the unit never partially
/// runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitState {
    /// Collaborators not yet resolved
    Uninitialized,
    /// Resolved and ticking
    Ready,
    /// Resolution failed; permanently disabled
    Failed,
}

/// Drives an agent to hide from a target behind spawned obstacles.
#[derive(Debug)]
pub struct HideUnit {
    config: HideUnitConfig,
    steering: SteeringBasics,
    hide: Hide,
    wall_avoidance: WallAvoidance,
    state: UnitState,
}

impl HideUnit {
    /// Create a hide unit with its collaborators
    #[must_use]
    pub fn new(
        config: HideUnitConfig,
        steering: SteeringBasics,
        hide: Hide,
        wall_avoidance: WallAvoidance,
    ) -> Self {
        Self {
            config,
            steering,
            hide,
            wall_avoidance,
            state: UnitState::Uninitialized,
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> UnitState {
        self.state
    }

    /// Resolve the obstacle source once.
    ///
    /// A spawner name that is not registered logs one error and disables the
    /// unit for good. An absent target only logs a warning; the unit stays
    /// usable and skips ticks until a target appears.
    pub fn resolve(&mut self, registry: &SpawnerRegistry, target: Option<&dyn KinematicAgent>) {
        if self.state != UnitState::Uninitialized {
            return;
        }

        if target.is_none() {
            log::warn!("no target assigned to hide unit");
        }

        if registry.contains(&self.config.spawner_name) {
            self.state = UnitState::Ready;
        } else {
            log::error!(
                "could not find obstacle spawner '{}', hide unit disabled",
                self.config.spawner_name
            );
            self.state = UnitState::Failed;
        }
    }

    /// One fixed-timestep update.
    ///
    /// No-op unless the unit is `Ready` and a target is present. Wall
    /// avoidance is probed along the path to the chosen hiding spot and
    /// wins over the hide acceleration when its magnitude reaches the
    /// configured threshold.
    pub fn fixed_tick(
        &mut self,
        body: &mut dyn KinematicAgent,
        target: Option<&dyn KinematicAgent>,
        registry: &SpawnerRegistry,
        agents: &AgentSet,
        caster: &dyn RayCaster,
        dt: f32,
    ) {
        if self.state != UnitState::Ready {
            return;
        }
        let Some(target) = target else {
            return;
        };
        let Some(spawner) = registry.get(&self.config.spawner_name) else {
            return;
        };

        let result = self
            .hide
            .get_steering(body, Some(target), agents, spawner.active());

        let mut acceleration =
            self.wall_avoidance
                .get_steering(body, result.spot - body.position(), caster);

        if acceleration.length() < self.config.wall_threshold {
            acceleration = result.acceleration;
        }

        self.steering.steer(body, acceleration, dt);
        self.steering.look_where_youre_going(body, dt);
    }

    /// Last hiding spot chosen, for visualization
    #[must_use]
    pub fn last_hiding_spot(&self) -> Option<Vec3> {
        self.hide.last_hiding_spot()
    }
}
