//! # Unified Configuration System
//!
//! Configuration structures for the engine subsystems that setup code tunes:
//! physics (gravity, layer filtering, debug drawing) and frame timing.
//!
//! All sections implement [`Default`] and `serde`, so a partial file only
//! needs to name the values it overrides:
//!
//! ```toml
//! [physics]
//! gravity = [0.0, -9.8, 0.0]
//! disabled_layer_pairs = [[1, 2], [3, 3]]
//!
//! [time]
//! max_delta_time = 0.05
//! ```

use serde::{Serialize, Deserialize};

use crate::config::Config;
use crate::foundation::math::Vec3;
use crate::foundation::time::DEFAULT_MAX_DELTA_TIME;

/// Default gravity acceleration (negative Y)
pub const DEFAULT_GRAVITY: [f32; 3] = [0.0, -9.8, 0.0];

/// # Physics Configuration
///
/// Applied once by `CollisionManager::with_config`. Layer pairs listed in
/// `disabled_layer_pairs` start with collision turned off; every other pair of
/// the 32×32 matrix starts enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity vector handed to rigid body integration
    pub gravity: Vec3,
    /// Layer pairs that must never interact
    pub disabled_layer_pairs: Vec<(u32, u32)>,
    /// Start with collider debug drawing enabled
    pub debug_draw: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::from(DEFAULT_GRAVITY),
            disabled_layer_pairs: Vec::new(),
            debug_draw: false,
        }
    }
}

/// # Time Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Upper bound for a single frame delta, in seconds
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            max_delta_time: DEFAULT_MAX_DELTA_TIME,
        }
    }
}

/// # Application Configuration
///
/// Top-level file layout: one table per subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Physics settings
    pub physics: PhysicsConfig,
    /// Frame timing settings
    pub time: TimeConfig,
}

impl Config for ApplicationConfig {}
impl Config for PhysicsConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use approx::assert_relative_eq;
    
    #[test]
    fn test_defaults() {
        let config = ApplicationConfig::default();
        assert_relative_eq!(config.physics.gravity, Vec3::new(0.0, -9.8, 0.0));
        assert!(config.physics.disabled_layer_pairs.is_empty());
        assert!(!config.physics.debug_draw);
        assert_relative_eq!(config.time.max_delta_time, DEFAULT_MAX_DELTA_TIME);
    }
    
    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ApplicationConfig::from_toml_str(
            r#"
            [physics]
            disabled_layer_pairs = [[1, 2]]
            "#,
        ).unwrap();
        
        assert_eq!(config.physics.disabled_layer_pairs, vec![(1, 2)]);
        assert_relative_eq!(config.physics.gravity, Vec3::new(0.0, -9.8, 0.0));
        assert_relative_eq!(config.time.max_delta_time, DEFAULT_MAX_DELTA_TIME);
    }
    
    #[test]
    fn test_ron_physics_section() {
        let config = PhysicsConfig::from_ron_str(
            "(gravity: (0.0, -1.62, 0.0), debug_draw: true)",
        ).unwrap();
        
        assert_relative_eq!(config.gravity, Vec3::new(0.0, -1.62, 0.0));
        assert!(config.debug_draw);
    }
    
    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");
        
        let mut config = ApplicationConfig::default();
        config.physics.gravity = Vec3::new(0.0, -20.0, 0.0);
        config.physics.disabled_layer_pairs.push((4, 7));
        config.time.max_delta_time = 0.05;
        config.save_to_file(&path).unwrap();
        
        let loaded = ApplicationConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
    
    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        std::fs::write(&path, "{}").unwrap();
        
        let result = ApplicationConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
