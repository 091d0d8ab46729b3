//! Tick-level unit drivers
//!
//! Thin orchestration around the steering behaviors: each driver is clocked
//! by the host's fixed and frame ticks and owns no agent data.

mod go_direction;
mod hide_unit;
mod third_person;

pub use go_direction::GoDirectionUnit;
pub use hide_unit::{HideUnit, UnitState};
pub use third_person::{MoveInput, ThirdPersonUnit};
