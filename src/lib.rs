//! Autonomous-agent movement behaviors
//!
//! This crate provides:
//! - Steering behaviors (arrive, evade, wall avoidance) with kinematic limits
//! - A concealment-seeking hide behavior with evade fallback
//! - Procedural obstacle spawning with placement constraints
//! - Wrap-around boundaries and camera-derived bounds
//!
//! Everything runs against a small kinematic-body abstraction; the physics
//! and rendering host stays external.

pub mod agent;
pub mod boundary;
pub mod config;
pub mod raycast;
pub mod spawn;
pub mod steering;
pub mod units;
pub mod view;

// Re-exports for convenience
pub use glam;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::agent::{AgentBody, AgentHandle, AgentSet, KinematicAgent};
    pub use crate::boundary::WrapBoundary;
    pub use crate::config::{
        ConfigError, EvadeConfig, HideConfig, HideUnitConfig, SimConfig, SpawnConfig,
        SteeringConfig, ThirdPersonConfig, WallAvoidanceConfig,
    };
    pub use crate::raycast::{RayCaster, RayHit, RectWalls, SphereSetCaster};
    pub use crate::spawn::{AvoidZone, SpawnArea, Spawner, SpawnerRegistry};
    pub use crate::steering::{Evade, Hide, HideResult, SteeringBasics, WallAvoidance};
    pub use crate::units::{GoDirectionUnit, HideUnit, MoveInput, ThirdPersonUnit, UnitState};
    pub use crate::view::{Camera, GroundPlane, ViewBounds};
    pub use glam::{Quat, Vec2, Vec3};
}
