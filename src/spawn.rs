//! Spawn randomization for pooled cubes.
//!
//! Every spawn draws a size, a position inside the parent volume, a lifespan
//! and a color. [`SpawnContext`] wraps the RNG and provides helpers for each
//! of those draws so the pool manager never touches `rand` directly.
//!
//! ```ignore
//! let mut ctx = SpawnContext::new();
//! let size = ctx.random_range(0.05, 0.2);
//! let position = ctx.cube_position(0.5, size);
//! let color = ctx.random_color();
//! ```

use crate::color::Rgba;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Randomization context used by the pool when (re)initializing cubes.
///
/// Wraps a [`SmallRng`]. Use [`SpawnContext::with_seed`] in tests and demos
/// that need reproducible runs.
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a context seeded from the wall clock - different each run.
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);

        Self::with_seed(seed)
    }

    /// Create a context with an explicit seed for reproducible spawning.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random `f32` in `[min, max]`.
    ///
    /// An inverted range (`min > max`) is normalized by swapping the
    /// endpoints, so degenerate designer configuration samples instead of
    /// panicking.
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// Random opaque color over the full hue/saturation/value space.
    pub fn random_color(&mut self) -> Rgba {
        Rgba::random_hsv(&mut self.rng)
    }

    /// Random position for a cube of edge length `cube_size` inside a parent
    /// cube of half-extent `half_extent`, keeping the small cube entirely
    /// within the parent's edges.
    ///
    /// Each axis is drawn independently in
    /// `[-(half_extent - cube_size / 2), half_extent - cube_size / 2]`,
    /// giving a cube-shaped (not spherical) distribution. A cube larger than
    /// the parent volume collapses the margin to zero and spawns at the
    /// center.
    pub fn cube_position(&mut self, half_extent: f32, cube_size: f32) -> Vec3 {
        let margin = (half_extent - cube_size * 0.5).max(0.0);
        Vec3::new(
            margin * self.random_range(-1.0, 1.0),
            margin * self.random_range(-1.0, 1.0),
            margin * self.random_range(-1.0, 1.0),
        )
    }
}

impl Default for SpawnContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_range_bounds() {
        let mut ctx = SpawnContext::with_seed(1);
        for _ in 0..1000 {
            let v = ctx.random_range(0.25, 0.75);
            assert!((0.25..0.75).contains(&v));
        }
    }

    #[test]
    fn test_random_range_swaps_inverted_endpoints() {
        let mut ctx = SpawnContext::with_seed(2);
        for _ in 0..100 {
            let v = ctx.random_range(0.75, 0.25);
            assert!((0.25..0.75).contains(&v));
        }
    }

    #[test]
    fn test_random_range_degenerate() {
        let mut ctx = SpawnContext::with_seed(3);
        assert_eq!(ctx.random_range(0.5, 0.5), 0.5);
    }

    #[test]
    fn test_cube_position_containment() {
        let mut ctx = SpawnContext::with_seed(4);
        let half_extent = 0.5;
        let size = 0.2;
        let margin = half_extent - size * 0.5;
        for _ in 0..1000 {
            let p = ctx.cube_position(half_extent, size);
            assert!(p.x.abs() <= margin + 0.001);
            assert!(p.y.abs() <= margin + 0.001);
            assert!(p.z.abs() <= margin + 0.001);
        }
    }

    #[test]
    fn test_cube_position_oversized_cube_spawns_at_center() {
        let mut ctx = SpawnContext::with_seed(5);
        let p = ctx.cube_position(0.5, 2.0);
        assert_eq!(p, Vec3::ZERO);
    }

    #[test]
    fn test_seeded_context_is_reproducible() {
        let mut a = SpawnContext::with_seed(99);
        let mut b = SpawnContext::with_seed(99);
        for _ in 0..10 {
            assert_eq!(a.random_range(0.0, 1.0), b.random_range(0.0, 1.0));
        }
    }
}
