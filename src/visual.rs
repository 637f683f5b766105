//! The seam toward a host renderer.
//!
//! The effect core never draws anything. It pushes per-frame state - world
//! transform, surface color, visibility - into [`Visual`] implementations
//! supplied by the host. A renderer backs each visual with whatever it draws
//! cubes with; tests and headless demos use [`NullVisual`] or a logging
//! implementation.

use crate::color::Rgba;
use glam::{Quat, Vec3};

/// One drawable object the effect can show, move, scale and tint.
pub trait Visual {
    /// Show or hide the object.
    fn set_visible(&mut self, visible: bool);

    /// Set the world-space position.
    fn set_position(&mut self, position: Vec3);

    /// Set the world-space orientation.
    fn set_rotation(&mut self, rotation: Quat);

    /// Set the edge lengths.
    fn set_scale(&mut self, scale: Vec3);

    /// Set the surface color, including alpha.
    fn set_color(&mut self, color: Rgba);
}

/// A visual that discards everything. Useful headless and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisual;

impl Visual for NullVisual {
    fn set_visible(&mut self, _visible: bool) {}
    fn set_position(&mut self, _position: Vec3) {}
    fn set_rotation(&mut self, _rotation: Quat) {}
    fn set_scale(&mut self, _scale: Vec3) {}
    fn set_color(&mut self, _color: Rgba) {}
}
