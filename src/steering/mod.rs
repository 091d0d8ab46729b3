//! Steering behaviors for autonomous agents
//!
//! The bounded steering primitive plus the behaviors built on it: evasion,
//! concealment seeking, and wall avoidance.

mod basics;
mod evade;
mod hide;
mod wall_avoidance;

pub(crate) use basics::{move_towards_angle, yaw_of};

pub use basics::SteeringBasics;
pub use evade::Evade;
pub use hide::{Hide, HideResult};
pub use wall_avoidance::WallAvoidance;
