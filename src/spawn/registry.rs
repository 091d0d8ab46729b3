//! Spawner lookup by name

use rustc_hash::FxHashMap;

use crate::spawn::Spawner;

/// Named spawner collection.
///
/// Units are configured with a spawner name and resolve it here once at
/// setup; a name that resolves today keeps resolving, so resolution failure
/// is a setup-time condition, not a per-tick one.
#[derive(Debug, Default)]
pub struct SpawnerRegistry {
    spawners: FxHashMap<String, Spawner>,
}

impl SpawnerRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            spawners: FxHashMap::default(),
        }
    }

    /// Register a spawner under a name, replacing any previous holder
    pub fn insert(&mut self, name: impl Into<String>, spawner: Spawner) {
        self.spawners.insert(name.into(), spawner);
    }

    /// Look up a spawner
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Spawner> {
        self.spawners.get(name)
    }

    /// Look up a spawner mutably
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Spawner> {
        self.spawners.get_mut(name)
    }

    /// Whether a name is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.spawners.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpawnConfig;
    use crate::spawn::SpawnArea;
    use crate::view::GroundPlane;
    use glam::Vec3;

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = SpawnerRegistry::new();
        let area = SpawnArea::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 10.0), GroundPlane::Xz);
        registry.insert("obstacles", Spawner::new(SpawnConfig::default(), area));

        assert!(registry.contains("obstacles"));
        assert!(registry.get("obstacles").is_some());
        assert!(registry.get("missing").is_none());
    }
}
