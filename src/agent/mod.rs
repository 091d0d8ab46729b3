//! Agent state and storage
//!
//! The kinematic body abstraction the steering components drive, plus the
//! pooled storage the spawner keeps live obstacles in.

mod body;
mod set;

pub use body::{AgentBody, KinematicAgent};
pub use set::{AgentHandle, AgentSet};
