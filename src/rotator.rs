//! Continuous rotation of the parent volume.

use glam::{EulerRot, Quat, Vec3};

/// Rotates the big-cube volume at a constant rate, scaled by delta time.
///
/// The rate is expressed in degrees per second around each world axis and
/// accumulates into a world-space orientation.
#[derive(Debug, Clone, Copy)]
pub struct Rotator {
    rate: Vec3,
    orientation: Quat,
}

impl Rotator {
    /// Create a rotator with the given per-axis rate in degrees per second.
    pub fn new(rate: Vec3) -> Self {
        Self {
            rate,
            orientation: Quat::IDENTITY,
        }
    }

    /// Advance the rotation by `dt` seconds.
    ///
    /// The per-tick step is applied in world space, so it premultiplies the
    /// accumulated orientation.
    pub fn tick(&mut self, dt: f32) {
        let step = self.rate * dt;
        let delta = Quat::from_euler(
            EulerRot::XYZ,
            step.x.to_radians(),
            step.y.to_radians(),
            step.z.to_radians(),
        );
        self.orientation = (delta * self.orientation).normalize();
    }

    /// Current orientation of the volume.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Configured rate, degrees per second per axis.
    pub fn rate(&self) -> Vec3 {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_identity() {
        let rotator = Rotator::new(Vec3::new(0.0, 90.0, 0.0));
        assert_eq!(rotator.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn test_quarter_turn_after_one_second() {
        let mut rotator = Rotator::new(Vec3::new(0.0, 90.0, 0.0));
        for _ in 0..60 {
            rotator.tick(1.0 / 60.0);
        }
        let expected = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let rotated = rotator.orientation() * Vec3::X;
        assert!((rotated - expected * Vec3::X).length() < 1e-3);
    }

    #[test]
    fn test_zero_rate_stays_put() {
        let mut rotator = Rotator::new(Vec3::ZERO);
        rotator.tick(5.0);
        assert_eq!(rotator.orientation(), Quat::IDENTITY);
    }
}
