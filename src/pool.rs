//! The cube pool and its fire sequence.
//!
//! [`CubePool`] owns a fixed set of [`Cube`]s created once at startup and
//! recycled forever - nothing is allocated or dropped after construction.
//! Each tick the pool either advances the fire sequence or spawns at most one
//! cube into the first available slot, then ages every running cube.
//!
//! # Fire sequence
//!
//! Pressing the trigger key moves the pool from `Idle` to `Firing`:
//!
//! 1. Every cube stops aging and is detached from the parent volume (its
//!    local position is converted to world space using the parent's current
//!    rotation).
//! 2. Each tick, every cube is displaced along the direction from the volume
//!    center to the cube, at the configured speed in units per second.
//! 3. Once the accumulated elapsed time reaches the fire duration, every
//!    cube deactivates - regardless of remaining lifespan - and the pool
//!    returns to `Idle`.
//!
//! The sequence is plain resumable state ([`FireSequence`]) advanced once per
//! tick; a second trigger while `Firing` is ignored, so at most one sequence
//! is ever in flight. While firing, spawning is suspended entirely.

use crate::config::EffectConfig;
use crate::cube::Cube;
use crate::spawn::SpawnContext;
use glam::{Quat, Vec3};

/// Resumable state of an in-flight fire sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireSequence {
    /// Seconds accumulated since the sequence started.
    pub elapsed: f32,
}

/// Pool state machine: spawning normally, or driving a fire sequence.
///
/// An enum rather than a flag so further states can be added without
/// overloading a boolean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoolState {
    /// Spawning cubes whenever a slot is free.
    Idle,
    /// A fire sequence is in flight; no spawning, no aging.
    Firing(FireSequence),
}

/// Fixed-size pool of reusable cubes.
pub struct CubePool {
    cubes: Vec<Cube>,
    state: PoolState,
    config: EffectConfig,
    ctx: SpawnContext,
}

impl CubePool {
    /// Create a pool of `config.pool_size` inactive cubes.
    ///
    /// A pool size of zero is not an error; it yields a pool that never has
    /// anything to spawn.
    pub fn new(config: EffectConfig) -> Self {
        Self::with_context(config, SpawnContext::new())
    }

    /// Create a pool with an explicit spawn context, for reproducible runs.
    pub fn with_context(config: EffectConfig, ctx: SpawnContext) -> Self {
        let cubes = (0..config.pool_size).map(|_| Cube::new()).collect();
        Self {
            cubes,
            state: PoolState::Idle,
            config,
            ctx,
        }
    }

    /// Index of the first inactive cube, in pool insertion order.
    fn find_available(&self) -> Option<usize> {
        self.cubes.iter().position(|cube| !cube.is_active())
    }

    /// Whether any cube is available for reuse.
    pub fn has_available(&self) -> bool {
        self.cubes.iter().any(|cube| !cube.is_active())
    }

    /// Spawn one cube into the first available slot.
    ///
    /// Draws a uniform size, an in-volume position, a lifespan and an opaque
    /// color, then reinitializes and activates the cube. Returns `false`
    /// without effect when no cube is available or a fire sequence is in
    /// flight.
    pub fn spawn_one(&mut self) -> bool {
        if matches!(self.state, PoolState::Firing(_)) {
            return false;
        }

        let Some(index) = self.find_available() else {
            return false;
        };

        let size = self
            .ctx
            .random_range(self.config.min_size, self.config.max_size);
        let position = self.ctx.cube_position(self.config.half_extent, size);
        let lifespan = self
            .ctx
            .random_range(self.config.min_lifetime, self.config.max_lifetime);
        let color = self.ctx.random_color();

        let cube = &mut self.cubes[index];
        cube.init(position, Vec3::splat(size), color, lifespan);
        cube.activate();

        log::trace!(
            "spawned cube {index}: size {size:.3}, lifespan {lifespan:.2}s"
        );
        true
    }

    /// Start a fire sequence if the pool is idle.
    ///
    /// `parent_rotation` is the volume's current orientation; it converts
    /// each attached cube's local position to world space at detach time.
    /// Returns `false` (and does nothing) while a sequence is already in
    /// flight.
    pub fn begin_fire(&mut self, parent_rotation: Quat) -> bool {
        if matches!(self.state, PoolState::Firing(_)) {
            return false;
        }

        for cube in &mut self.cubes {
            cube.stop_running();
            if cube.is_attached() {
                let world = parent_rotation * cube.position();
                cube.detach(world);
            }
        }

        self.state = PoolState::Firing(FireSequence { elapsed: 0.0 });
        log::debug!("fire sequence started ({} cubes)", self.cubes.len());
        true
    }

    /// Advance an in-flight fire sequence by `dt` seconds.
    ///
    /// Displaces every cube away from the volume center and, once the fire
    /// duration has elapsed, deactivates the whole pool and returns to
    /// `Idle`.
    fn advance_fire(&mut self, dt: f32) {
        let PoolState::Firing(mut sequence) = self.state else {
            return;
        };

        for cube in &mut self.cubes {
            let direction = cube.position().normalize_or_zero();
            cube.set_position(cube.position() + direction * self.config.fire_speed * dt);
        }

        sequence.elapsed += dt;

        if sequence.elapsed >= self.config.fire_time {
            for cube in &mut self.cubes {
                cube.deactivate();
            }
            self.state = PoolState::Idle;
            log::debug!("fire sequence complete");
        } else {
            self.state = PoolState::Firing(sequence);
        }
    }

    /// Drive the pool for one tick.
    ///
    /// Order of operations: a trigger edge starts the fire sequence (ignored
    /// unless idle); an in-flight sequence advances - including on the tick
    /// it started, so fired cubes move immediately; otherwise at most one
    /// cube is spawned; finally every running cube ages by `dt`.
    pub fn tick(&mut self, dt: f32, fire_pressed: bool, parent_rotation: Quat) {
        if fire_pressed {
            self.begin_fire(parent_rotation);
        }

        if matches!(self.state, PoolState::Firing(_)) {
            self.advance_fire(dt);
        } else if self.has_available() {
            self.spawn_one();
        }

        for cube in &mut self.cubes {
            cube.tick(dt);
        }
    }

    /// Whether a fire sequence is in flight.
    pub fn is_firing(&self) -> bool {
        matches!(self.state, PoolState::Firing(_))
    }

    /// Current pool state.
    pub fn state(&self) -> PoolState {
        self.state
    }

    /// All pooled cubes, in insertion order.
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Number of pooled cubes (fixed at construction).
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    /// Whether the pool holds no cubes at all.
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Number of currently active cubes.
    pub fn active_count(&self) -> usize {
        self.cubes.iter().filter(|cube| cube.is_active()).count()
    }
}
