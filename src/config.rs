//! Component configuration
//!
//! Serde-backed config structs for every behavior, with RON and JSON
//! load/save helpers. Values are validated eagerly: a config that violates an
//! invariant is rejected before any component is built, so behaviors never
//! partially run with bad settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Kinematic limits and arrival shaping for the steering primitive
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SteeringConfig {
    /// Maximum speed an agent is driven at
    pub max_velocity: f32,
    /// Maximum acceleration a behavior may request
    pub max_acceleration: f32,
    /// Maximum turn rate in radians per second
    pub turn_speed: f32,
    /// Distance at which arrival starts slowing down
    pub slow_radius: f32,
    /// Distance inside which arrival considers itself done
    pub target_radius: f32,
    /// Time horizon for matching the arrival velocity
    pub time_to_target: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            max_velocity: 3.5,
            max_acceleration: 10.0,
            turn_speed: 12.0,
            slow_radius: 5.0,
            target_radius: 0.5,
            time_to_target: 0.1,
        }
    }
}

impl SteeringConfig {
    /// Check the strictly-positive invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(self.max_velocity, "steering.max_velocity")?;
        ensure_positive(self.max_acceleration, "steering.max_acceleration")?;
        ensure_positive(self.turn_speed, "steering.turn_speed")?;
        ensure_positive(self.slow_radius, "steering.slow_radius")?;
        ensure_non_negative(self.target_radius, "steering.target_radius")?;
        ensure_positive(self.time_to_target, "steering.time_to_target")?;
        Ok(())
    }
}

/// Evade prediction horizon
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvadeConfig {
    /// Upper bound on the look-ahead time when predicting the target
    pub max_prediction: f32,
}

impl Default for EvadeConfig {
    fn default() -> Self {
        Self { max_prediction: 1.0 }
    }
}

impl EvadeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(self.max_prediction, "evade.max_prediction")
    }
}

/// Concealment search settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HideConfig {
    /// Search cutoff: obstacles farther than this from the agent are ignored
    pub find_radius: f32,
    /// Safety margin kept behind an obstacle's boundary
    pub distance_from_boundary: f32,
}

impl Default for HideConfig {
    fn default() -> Self {
        Self {
            find_radius: 10.0,
            distance_from_boundary: 0.6,
        }
    }
}

impl HideConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(self.find_radius, "hide.find_radius")?;
        ensure_positive(self.distance_from_boundary, "hide.distance_from_boundary")?;
        Ok(())
    }
}

/// Whisker layout for wall avoidance
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WallAvoidanceConfig {
    /// Length of the forward whisker
    pub main_whisker_len: f32,
    /// Length of the two angled whiskers
    pub side_whisker_len: f32,
    /// Angle of the side whiskers off the forward direction, radians
    pub whisker_angle: f32,
    /// How far past the wall surface the avoid target is placed
    pub avoid_distance: f32,
}

impl Default for WallAvoidanceConfig {
    fn default() -> Self {
        Self {
            main_whisker_len: 1.25,
            side_whisker_len: 0.701,
            whisker_angle: std::f32::consts::FRAC_PI_4,
            avoid_distance: 0.5,
        }
    }
}

impl WallAvoidanceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(self.main_whisker_len, "wall_avoidance.main_whisker_len")?;
        ensure_positive(self.side_whisker_len, "wall_avoidance.side_whisker_len")?;
        ensure_positive(self.whisker_angle, "wall_avoidance.whisker_angle")?;
        ensure_positive(self.avoid_distance, "wall_avoidance.avoid_distance")?;
        Ok(())
    }
}

/// Hide-unit driver wiring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HideUnitConfig {
    /// Registry name of the spawner that supplies obstacles
    pub spawner_name: String,
    /// Wall-avoidance accelerations below this magnitude are ignored
    pub wall_threshold: f32,
}

impl Default for HideUnitConfig {
    fn default() -> Self {
        Self {
            spawner_name: String::from("obstacles"),
            wall_threshold: 0.005,
        }
    }
}

impl HideUnitConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawner_name.is_empty() {
            return Err(ConfigError::Invalid(String::from(
                "hide_unit.spawner_name must not be empty",
            )));
        }
        ensure_non_negative(self.wall_threshold, "hide_unit.wall_threshold")
    }
}

/// Procedural placement settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Diameter range objects are sampled from
    pub size_range: (f32, f32),
    /// How many objects to place
    pub count: usize,
    /// Give each placed object a random yaw
    pub randomize_orientation: bool,
    /// Margin kept between objects and the area edge
    pub boundary_padding: f32,
    /// Minimum clearance between placed objects
    pub spacing: f32,
    /// Placement attempts per object before giving up
    pub max_attempts: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            size_range: (1.0, 2.0),
            count: 10,
            randomize_orientation: false,
            boundary_padding: 1.0,
            spacing: 1.0,
            max_attempts: 10,
        }
    }
}

impl SpawnConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(self.size_range.0, "spawner.size_range.0")?;
        if self.size_range.1 < self.size_range.0 {
            return Err(ConfigError::Invalid(String::from(
                "spawner.size_range must be ordered (min <= max)",
            )));
        }
        ensure_non_negative(self.boundary_padding, "spawner.boundary_padding")?;
        ensure_non_negative(self.spacing, "spawner.spacing")?;
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid(String::from(
                "spawner.max_attempts must be at least 1",
            )));
        }
        Ok(())
    }
}

/// Player-driven movement settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThirdPersonConfig {
    /// Movement speed
    pub speed: f32,
    /// Maximum facing turn rate, radians per second
    pub facing_speed: f32,
    /// Vertical speed applied on jump
    pub jump_speed: f32,
}

impl Default for ThirdPersonConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            facing_speed: 4.0 * std::f32::consts::PI,
            jump_speed: 7.0,
        }
    }
}

impl ThirdPersonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(self.speed, "third_person.speed")?;
        ensure_positive(self.facing_speed, "third_person.facing_speed")?;
        ensure_positive(self.jump_speed, "third_person.jump_speed")?;
        Ok(())
    }
}

/// Aggregate configuration for a whole simulation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub steering: SteeringConfig,
    #[serde(default)]
    pub evade: EvadeConfig,
    #[serde(default)]
    pub hide: HideConfig,
    #[serde(default)]
    pub wall_avoidance: WallAvoidanceConfig,
    #[serde(default)]
    pub hide_unit: HideUnitConfig,
    #[serde(default)]
    pub spawner: SpawnConfig,
    #[serde(default)]
    pub third_person: ThirdPersonConfig,
}

impl SimConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.steering.validate()?;
        self.evade.validate()?;
        self.hide.validate()?;
        self.wall_avoidance.validate()?;
        self.hide_unit.validate()?;
        self.spawner.validate()?;
        self.third_person.validate()?;
        Ok(())
    }

    /// Save the configuration to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let ron_string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        fs::write(path, ron_string).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load and validate a configuration from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsing fails, or a
    /// value violates an invariant
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: Self =
            ron::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        fs::write(path, json_string).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsing fails, or a
    /// value violates an invariant
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn ensure_positive(value: f32, field: &str) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{field} must be > 0")))
    }
}

fn ensure_non_negative(value: f32, field: &str) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{field} must be >= 0")))
    }
}

/// Errors that can occur loading or validating configuration
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error
    IoError(String),
    /// Parse error
    ParseError(String),
    /// Serialization error
    SerializeError(String),
    /// A value violates an invariant
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::ParseError(e) => write!(f, "Parse error: {e}"),
            Self::SerializeError(e) => write!(f, "Serialization error: {e}"),
            Self::Invalid(e) => write!(f, "Invalid configuration: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
