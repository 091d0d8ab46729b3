//! Procedural object placement
//!
//! Fills a rectangular area with randomly sized agents using rejection
//! sampling: a candidate position is thrown away when it overlaps a
//! configured avoid zone or sits too close to an already placed object.
//! Placement of each object is retried a bounded number of times; running
//! out of attempts logs a warning and moves on. Placed agents live in an
//! `AgentSet`, so despawned slots are recycled by later spawns.

use glam::Vec3;
use rand::Rng;

use crate::agent::{AgentBody, AgentHandle, AgentSet};
use crate::config::SpawnConfig;
use crate::view::{GroundPlane, ViewBounds};

/// Rectangular placement region
#[derive(Debug, Clone, Copy)]
pub struct SpawnArea {
    bottom_left: Vec3,
    width_height: Vec3,
    plane: GroundPlane,
}

impl SpawnArea {
    /// An explicit rectangle
    #[must_use]
    pub fn new(bottom_left: Vec3, width_height: Vec3, plane: GroundPlane) -> Self {
        Self {
            bottom_left,
            width_height,
            plane,
        }
    }

    /// The rectangle a camera sees at the agents' depth
    #[must_use]
    pub fn from_view(bounds: &ViewBounds, plane: GroundPlane) -> Self {
        Self::new(bounds.bottom_left, bounds.width_height, plane)
    }

    fn planar_axes(&self) -> [usize; 2] {
        match self.plane {
            GroundPlane::Xz => [0, 2],
            GroundPlane::Xy => [0, 1],
        }
    }

    /// Sample a position keeping `inset` clear of every edge.
    ///
    /// `None` when the inset leaves no room, which callers count as a failed
    /// placement attempt.
    fn sample(&self, inset: f32, rng: &mut impl Rng) -> Option<Vec3> {
        let mut position = self.bottom_left;

        for axis in self.planar_axes() {
            let lo = self.bottom_left[axis] + inset;
            let hi = self.bottom_left[axis] + self.width_height[axis] - inset;
            if hi <= lo {
                return None;
            }
            position[axis] = rng.gen_range(lo..hi);
        }

        Some(position)
    }
}

/// A region newly placed objects must keep clear of
#[derive(Debug, Clone, Copy)]
pub struct AvoidZone {
    /// Zone center
    pub position: Vec3,
    /// Zone radius
    pub radius: f32,
}

/// Rejection-sampling spawner.
///
/// Owns the live handle list of everything it has placed; that list is the
/// obstacle input the hide behavior searches over.
#[derive(Debug)]
pub struct Spawner {
    config: SpawnConfig,
    area: SpawnArea,
    avoid: Vec<AvoidZone>,
    active: Vec<AgentHandle>,
}

impl Spawner {
    /// Create a spawner over an area
    #[must_use]
    pub fn new(config: SpawnConfig, area: SpawnArea) -> Self {
        Self {
            config,
            area,
            avoid: Vec::new(),
            active: Vec::new(),
        }
    }

    /// Add zones placement must keep clear of
    #[must_use]
    pub fn with_avoid_zones(mut self, zones: Vec<AvoidZone>) -> Self {
        self.avoid = zones;
        self
    }

    /// Handles of every live placed object
    #[must_use]
    pub fn active(&self) -> &[AgentHandle] {
        &self.active
    }

    /// Place the configured number of objects.
    ///
    /// Each object gets up to `max_attempts` tries; exhausting them logs a
    /// warning and skips that object.
    pub fn populate(&mut self, agents: &mut AgentSet, rng: &mut impl Rng) {
        for index in 0..self.config.count {
            let mut placed = false;

            for _ in 0..self.config.max_attempts {
                if self.try_place(agents, rng) {
                    placed = true;
                    break;
                }
            }

            if !placed {
                log::warn!(
                    "failed to place object {index} after {} attempts",
                    self.config.max_attempts
                );
            }
        }
    }

    fn try_place(&mut self, agents: &mut AgentSet, rng: &mut impl Rng) -> bool {
        let (min_size, max_size) = self.config.size_range;
        let size = if max_size > min_size {
            rng.gen_range(min_size..max_size)
        } else {
            min_size
        };
        let half = size * 0.5;

        let Some(position) = self
            .area
            .sample(self.config.boundary_padding + half, rng)
        else {
            return false;
        };

        if !self.can_place(agents, half, position) {
            return false;
        }

        let yaw = if self.config.randomize_orientation {
            rng.gen_range(0.0..std::f32::consts::TAU)
        } else {
            0.0
        };

        let handle = agents.insert(AgentBody::with_yaw(position, half, yaw));
        self.active.push(handle);
        true
    }

    fn can_place(&self, agents: &AgentSet, half: f32, position: Vec3) -> bool {
        for zone in &self.avoid {
            if zone.position.distance(position) < half + zone.radius {
                return false;
            }
        }

        for &handle in &self.active {
            let Some(other) = agents.get(handle) else {
                continue;
            };
            if other.position.distance(position) < other.radius + self.config.spacing + half {
                return false;
            }
        }

        true
    }

    /// Place one object deliberately.
    ///
    /// Honors the avoid zones and inter-object spacing but not the sampling
    /// area, so scripted setups can put obstacles anywhere. Returns `None`
    /// when the position is too crowded.
    pub fn spawn_at(
        &mut self,
        agents: &mut AgentSet,
        position: Vec3,
        size: f32,
    ) -> Option<AgentHandle> {
        let half = size * 0.5;
        if !self.can_place(agents, half, position) {
            return None;
        }

        let handle = agents.insert(AgentBody::new(position, half));
        self.active.push(handle);
        Some(handle)
    }

    /// Remove a placed object and release its slot for recycling.
    ///
    /// Returns `false` when the handle was not one of this spawner's live
    /// objects.
    pub fn despawn(&mut self, agents: &mut AgentSet, handle: AgentHandle) -> bool {
        let Some(index) = self.active.iter().position(|&h| h == handle) else {
            return false;
        };

        self.active.swap_remove(index);
        agents.remove(handle);
        true
    }
}
