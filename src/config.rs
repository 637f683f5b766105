//! Designer-tunable effect configuration.
//!
//! Every knob of the effect lives here: how many cubes the pool holds, how
//! long and how large spawned cubes are, how the fire sequence behaves and
//! which key triggers it. Values are read-only once the effect is built.
//!
//! ```ignore
//! let config = EffectConfig::new()
//!     .with_pool_size(32)
//!     .with_lifetime(1.0, 4.0)
//!     .with_size(0.05, 0.2)
//!     .with_fire(2.0, 1.5)
//!     .with_fire_key(KeyCode::Space);
//! ```
//!
//! No validation is performed: an inverted range (`min > max`) is normalized
//! at sample time, and a pool size of zero simply produces an effect that
//! never spawns anything.

use crate::input::KeyCode;
use glam::Vec3;

/// Tunable parameters for the cube effect.
#[derive(Debug, Clone, Copy)]
pub struct EffectConfig {
    /// Number of cubes created at startup. Zero means a permanently empty
    /// pool.
    pub pool_size: usize,
    /// Minimum lifespan of a spawned cube, seconds.
    pub min_lifetime: f32,
    /// Maximum lifespan of a spawned cube, seconds.
    pub max_lifetime: f32,
    /// Minimum edge length of a spawned cube.
    pub min_size: f32,
    /// Maximum edge length of a spawned cube.
    pub max_size: f32,
    /// Duration of the fire sequence, seconds.
    pub fire_time: f32,
    /// Outward speed of fired cubes, units per second.
    pub fire_speed: f32,
    /// Key that triggers the fire sequence.
    pub fire_key: KeyCode,
    /// Half-extent of the parent volume. The default `0.5` gives a unit
    /// cube.
    pub half_extent: f32,
    /// Rotation rate of the parent volume, degrees per second around each
    /// world axis.
    pub rotation_rate: Vec3,
}

impl EffectConfig {
    /// Create a configuration with sensible defaults.
    pub fn new() -> Self {
        Self {
            pool_size: 20,
            min_lifetime: 1.0,
            max_lifetime: 5.0,
            min_size: 0.05,
            max_size: 0.25,
            fire_time: 2.0,
            fire_speed: 1.0,
            fire_key: KeyCode::Space,
            half_extent: 0.5,
            rotation_rate: Vec3::new(0.0, 30.0, 0.0),
        }
    }

    /// Set the number of pooled cubes.
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Set the lifespan range in seconds.
    pub fn with_lifetime(mut self, min: f32, max: f32) -> Self {
        self.min_lifetime = min;
        self.max_lifetime = max;
        self
    }

    /// Set the cube edge length range.
    pub fn with_size(mut self, min: f32, max: f32) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    /// Set the fire sequence duration (seconds) and outward speed (units per
    /// second).
    pub fn with_fire(mut self, fire_time: f32, fire_speed: f32) -> Self {
        self.fire_time = fire_time;
        self.fire_speed = fire_speed;
        self
    }

    /// Set the key that triggers the fire sequence.
    pub fn with_fire_key(mut self, key: KeyCode) -> Self {
        self.fire_key = key;
        self
    }

    /// Set the half-extent of the parent volume.
    pub fn with_half_extent(mut self, half_extent: f32) -> Self {
        self.half_extent = half_extent;
        self
    }

    /// Set the parent rotation rate, degrees per second per world axis.
    pub fn with_rotation_rate(mut self, rate: Vec3) -> Self {
        self.rotation_rate = rate;
        self
    }
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = EffectConfig::new()
            .with_pool_size(8)
            .with_lifetime(0.5, 1.5)
            .with_size(0.1, 0.3)
            .with_fire(3.0, 2.0)
            .with_fire_key(KeyCode::F)
            .with_half_extent(1.0);

        assert_eq!(config.pool_size, 8);
        assert_eq!(config.min_lifetime, 0.5);
        assert_eq!(config.max_lifetime, 1.5);
        assert_eq!(config.fire_time, 3.0);
        assert_eq!(config.fire_speed, 2.0);
        assert_eq!(config.fire_key, KeyCode::F);
        assert_eq!(config.half_extent, 1.0);
    }

    #[test]
    fn test_default_parent_is_unit_cube() {
        assert_eq!(EffectConfig::default().half_extent, 0.5);
    }
}
