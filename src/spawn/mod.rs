//! Procedural placement and the live obstacle supply

mod registry;
mod spawner;

pub use registry::SpawnerRegistry;
pub use spawner::{AvoidZone, SpawnArea, Spawner};
