//! Top-level effect orchestration.
//!
//! [`CubeEffect`] wires the pieces together: the [`CubePool`] that spawns and
//! fires cubes, the [`Rotator`] that spins the parent volume, and the
//! configuration both read from. One [`CubeEffect::update`] per tick drives
//! everything; [`CubeEffect::sync_visuals`] then pushes the resulting state
//! into host-supplied [`Visual`]s.
//!
//! ```ignore
//! let mut effect = CubeEffect::new(EffectConfig::new().with_pool_size(16));
//!
//! // each frame:
//! effect.update(time.delta(), &input);
//! effect.sync_visuals(&mut parent_visual, &mut cube_visuals);
//! ```

use crate::config::EffectConfig;
use crate::input::Input;
use crate::pool::CubePool;
use crate::rotator::Rotator;
use crate::spawn::SpawnContext;
use crate::visual::Visual;
use glam::{Quat, Vec3};

/// The complete cube effect: pool, rotator and configuration.
pub struct CubeEffect {
    config: EffectConfig,
    pool: CubePool,
    rotator: Rotator,
}

impl CubeEffect {
    /// Build the effect from a configuration.
    pub fn new(config: EffectConfig) -> Self {
        Self::with_context(config, SpawnContext::new())
    }

    /// Build the effect with an explicit spawn context for reproducible
    /// runs.
    pub fn with_context(config: EffectConfig, ctx: SpawnContext) -> Self {
        Self {
            config,
            pool: CubePool::with_context(config, ctx),
            rotator: Rotator::new(config.rotation_rate),
        }
    }

    /// Advance the effect one tick, reading the trigger edge from `input`.
    pub fn update(&mut self, dt: f32, input: &Input) {
        let fire_pressed = input.key_pressed(self.config.fire_key);
        self.step(dt, fire_pressed);
    }

    /// Advance the effect one tick with an explicit trigger signal.
    ///
    /// Useful for tests and hosts with their own input handling.
    pub fn step(&mut self, dt: f32, fire_pressed: bool) {
        self.rotator.tick(dt);
        self.pool.tick(dt, fire_pressed, self.rotator.orientation());
    }

    /// Push the current state into visuals: one for the parent volume and
    /// one per pooled cube.
    ///
    /// Attached cubes report world transforms derived from the rotating
    /// parent; detached (fired) cubes report their own world positions.
    /// Extra or missing cube visuals are tolerated - pairs are matched in
    /// pool order.
    pub fn sync_visuals<V: Visual>(&self, parent: &mut V, cubes: &mut [V]) {
        let rotation = self.rotator.orientation();

        parent.set_visible(true);
        parent.set_position(Vec3::ZERO);
        parent.set_rotation(rotation);
        parent.set_scale(Vec3::splat(self.config.half_extent * 2.0));

        for (cube, visual) in self.pool.cubes().iter().zip(cubes.iter_mut()) {
            visual.set_visible(cube.is_active());
            if cube.is_attached() {
                visual.set_position(rotation * cube.position());
                visual.set_rotation(rotation);
            } else {
                visual.set_position(cube.position());
                visual.set_rotation(Quat::IDENTITY);
            }
            visual.set_scale(cube.scale());
            visual.set_color(cube.color());
        }
    }

    /// The pool driving spawn and fire behavior.
    pub fn pool(&self) -> &CubePool {
        &self.pool
    }

    /// The parent volume's rotator.
    pub fn rotator(&self) -> &Rotator {
        &self.rotator
    }

    /// The configuration the effect was built with.
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::input::KeyCode;

    #[derive(Debug, Clone, Copy)]
    struct RecordingVisual {
        visible: bool,
        position: Vec3,
        rotation: Quat,
        scale: Vec3,
        color: Rgba,
    }

    impl RecordingVisual {
        fn new() -> Self {
            Self {
                visible: false,
                position: Vec3::ZERO,
                rotation: Quat::IDENTITY,
                scale: Vec3::ONE,
                color: Rgba::WHITE,
            }
        }
    }

    impl Visual for RecordingVisual {
        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
        fn set_position(&mut self, position: Vec3) {
            self.position = position;
        }
        fn set_rotation(&mut self, rotation: Quat) {
            self.rotation = rotation;
        }
        fn set_scale(&mut self, scale: Vec3) {
            self.scale = scale;
        }
        fn set_color(&mut self, color: Rgba) {
            self.color = color;
        }
    }

    fn test_effect(pool_size: usize) -> CubeEffect {
        let config = EffectConfig::new()
            .with_pool_size(pool_size)
            .with_lifetime(5.0, 5.0)
            .with_size(0.1, 0.1)
            .with_fire(1.0, 1.0)
            .with_rotation_rate(Vec3::new(0.0, 90.0, 0.0));
        CubeEffect::with_context(config, SpawnContext::with_seed(11))
    }

    #[test]
    fn test_update_reads_trigger_edge_from_input() {
        let mut effect = test_effect(3);
        let mut input = Input::new();

        effect.update(0.1, &input);
        assert!(!effect.pool().is_firing());

        input.press(KeyCode::Space);
        effect.update(0.1, &input);
        assert!(effect.pool().is_firing());
    }

    #[test]
    fn test_parent_visual_follows_rotator() {
        let mut effect = test_effect(2);
        effect.step(0.5, false);

        let mut parent = RecordingVisual::new();
        let mut cubes = vec![RecordingVisual::new(); 2];
        effect.sync_visuals(&mut parent, &mut cubes);

        assert!(parent.visible);
        assert_eq!(parent.rotation, effect.rotator().orientation());
        assert_eq!(parent.scale, Vec3::ONE);
    }

    #[test]
    fn test_attached_cube_visual_is_rotated_into_world_space() {
        let mut effect = test_effect(1);
        effect.step(0.5, false);

        let mut parent = RecordingVisual::new();
        let mut cubes = vec![RecordingVisual::new()];
        effect.sync_visuals(&mut parent, &mut cubes);

        let cube = &effect.pool().cubes()[0];
        let expected = effect.rotator().orientation() * cube.position();
        assert!((cubes[0].position - expected).length() < 1e-6);
        assert!(cubes[0].visible);
    }

    #[test]
    fn test_detached_cube_visual_uses_world_position() {
        let mut effect = test_effect(1);
        effect.step(0.5, false);
        effect.step(0.5, true);

        let mut parent = RecordingVisual::new();
        let mut cubes = vec![RecordingVisual::new()];
        effect.sync_visuals(&mut parent, &mut cubes);

        let cube = &effect.pool().cubes()[0];
        assert!(!cube.is_attached());
        assert_eq!(cubes[0].position, cube.position());
        assert_eq!(cubes[0].rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_inactive_cube_visual_is_hidden() {
        let effect = test_effect(2);
        let mut parent = RecordingVisual::new();
        let mut cubes = vec![RecordingVisual::new(); 2];
        effect.sync_visuals(&mut parent, &mut cubes);
        assert!(cubes.iter().all(|v| !v.visible));
    }
}
