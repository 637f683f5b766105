//! The pooled cube entity.
//!
//! A [`Cube`] owns the transient state of one small cube: where it sits, how
//! big it is, how far through its fade it has aged, and whether it is
//! currently participating in the effect at all. Cubes are created once by
//! the pool and recycled forever after - [`Cube::init`] is the recycle
//! operation, overwriting whatever the previous life left behind.
//!
//! Two flags govern a cube's life:
//!
//! | Flag | Meaning |
//! |------|---------|
//! | `active` | The cube is visible and part of the effect |
//! | `running` | The cube keeps aging each tick |
//!
//! They are distinct because the fire sequence freezes aging
//! ([`Cube::stop_running`]) while cubes stay active and visible on their way
//! out of the volume.

use crate::color::Rgba;
use glam::Vec3;

/// One reusable small cube.
///
/// While attached its position is local to the (rotating) parent volume;
/// once detached by the fire sequence the position is world space.
#[derive(Debug, Clone)]
pub struct Cube {
    position: Vec3,
    scale: Vec3,
    start_color: Rgba,
    age: f32,
    lifespan: f32,
    active: bool,
    running: bool,
    attached: bool,
}

impl Cube {
    /// Create an inactive cube, ready to be pooled.
    pub(crate) fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            start_color: Rgba::WHITE,
            age: 0.0,
            lifespan: 0.0,
            active: false,
            running: false,
            attached: true,
        }
    }

    /// Reinitialize this cube for a new life.
    ///
    /// Resets position, scale, color and age, re-attaches the cube to the
    /// parent volume (it may have been detached by a fire sequence) and
    /// starts it aging. Always succeeds; prior state is overwritten.
    pub(crate) fn init(&mut self, position: Vec3, scale: Vec3, color: Rgba, lifespan: f32) {
        self.position = position;
        self.scale = scale;
        self.start_color = color;
        self.lifespan = lifespan;
        self.age = 0.0;
        self.running = true;
        self.attached = true;
    }

    /// Make the cube part of the effect (visible, aging).
    pub(crate) fn activate(&mut self) {
        self.active = true;
    }

    /// Remove the cube from the effect, making it available for reuse.
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    /// Freeze aging without deactivating. Used while the cube is being fired.
    pub(crate) fn stop_running(&mut self) {
        self.running = false;
    }

    /// Detach from the parent volume; `world_position` becomes the cube's
    /// position in world space.
    pub(crate) fn detach(&mut self, world_position: Vec3) {
        self.attached = false;
        self.position = world_position;
    }

    /// Move the cube. Used by the fire sequence for outward displacement.
    pub(crate) fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Advance the cube's age by `dt` seconds.
    ///
    /// No-op unless the cube is both active and running. The cube
    /// deactivates itself once its age exceeds its lifespan; a
    /// non-positive lifespan expires on the first tick.
    pub(crate) fn tick(&mut self, dt: f32) {
        if !self.running || !self.active {
            return;
        }

        self.age += dt;

        if self.lifespan <= 0.0 || self.age > self.lifespan {
            self.active = false;
        }
    }

    /// Current color: the start color faded linearly toward transparent
    /// black by `age / lifespan`, clamped at the endpoint.
    pub fn color(&self) -> Rgba {
        if self.lifespan <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        let t = (self.age / self.lifespan).min(1.0);
        self.start_color.lerp(Rgba::TRANSPARENT, t)
    }

    /// Position - local to the parent while attached, world space after a
    /// fire sequence detaches the cube.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Edge lengths of the cube (uniform at spawn).
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Seconds since this cube was last (re)initialized.
    pub fn age(&self) -> f32 {
        self.age
    }

    /// Lifespan drawn at spawn.
    pub fn lifespan(&self) -> f32 {
        self.lifespan
    }

    /// Whether the cube is part of the effect right now.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the cube is still aging.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the cube is parented to the volume (false after a fire
    /// sequence until the next spawn).
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawned_cube(lifespan: f32) -> Cube {
        let mut cube = Cube::new();
        cube.init(Vec3::ZERO, Vec3::splat(0.1), Rgba::WHITE, lifespan);
        cube.activate();
        cube
    }

    #[test]
    fn test_new_cube_is_inactive() {
        let cube = Cube::new();
        assert!(!cube.is_active());
        assert!(!cube.is_running());
        assert!(cube.is_attached());
    }

    #[test]
    fn test_init_resets_age_and_reattaches() {
        let mut cube = spawned_cube(5.0);
        cube.tick(3.0);
        cube.detach(Vec3::new(1.0, 2.0, 3.0));

        cube.init(Vec3::X, Vec3::splat(0.2), Rgba::WHITE, 2.0);
        assert_eq!(cube.age(), 0.0);
        assert!(cube.is_running());
        assert!(cube.is_attached());
        assert_eq!(cube.position(), Vec3::X);
    }

    #[test]
    fn test_expires_when_age_exceeds_lifespan() {
        let mut cube = spawned_cube(5.0);
        for _ in 0..5 {
            cube.tick(1.0);
        }
        // age == lifespan: fully faded but not yet expired
        assert!(cube.is_active());
        assert_eq!(cube.color(), Rgba::TRANSPARENT);

        cube.tick(1.0);
        assert!(!cube.is_active());
    }

    #[test]
    fn test_alpha_fades_monotonically() {
        let mut cube = spawned_cube(4.0);
        let mut last_alpha = cube.color().a;
        while cube.is_active() {
            cube.tick(0.5);
            let alpha = cube.color().a;
            assert!(alpha <= last_alpha);
            last_alpha = alpha;
        }
        assert_eq!(last_alpha, 0.0);
    }

    #[test]
    fn test_fade_fraction_is_clamped() {
        let mut cube = spawned_cube(1.0);
        cube.tick(0.9);
        cube.tick(0.9); // overshoots the lifespan
        let c = cube.color();
        assert!(c.a >= 0.0);
        assert_eq!(c, Rgba::TRANSPARENT);
    }

    #[test]
    fn test_zero_lifespan_expires_immediately() {
        let mut cube = spawned_cube(0.0);
        assert_eq!(cube.color(), Rgba::TRANSPARENT);
        cube.tick(0.016);
        assert!(!cube.is_active());
    }

    #[test]
    fn test_stopped_cube_does_not_age() {
        let mut cube = spawned_cube(2.0);
        cube.stop_running();
        cube.tick(10.0);
        assert_eq!(cube.age(), 0.0);
        assert!(cube.is_active());
    }

    #[test]
    fn test_inactive_cube_does_not_age() {
        let mut cube = spawned_cube(2.0);
        cube.deactivate();
        cube.tick(1.0);
        assert_eq!(cube.age(), 0.0);
    }
}
