//! Windowed demo: drives the effect from a winit window and logs cube state
//! through a [`Visual`] that prints instead of drawing.
//!
//! Press Space to fire the cubes. Run with:
//! `RUST_LOG=debug cargo run --example windowed`

use cubeburst::prelude::*;

/// A visual that logs visibility changes rather than drawing.
struct LogVisual {
    name: String,
    visible: bool,
}

impl LogVisual {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: false,
        }
    }
}

impl Visual for LogVisual {
    fn set_visible(&mut self, visible: bool) {
        if visible != self.visible {
            log::info!("{} -> {}", self.name, if visible { "shown" } else { "hidden" });
            self.visible = visible;
        }
    }

    fn set_position(&mut self, _position: Vec3) {}
    fn set_rotation(&mut self, _rotation: Quat) {}
    fn set_scale(&mut self, _scale: Vec3) {}
    fn set_color(&mut self, _color: Rgba) {}
}

fn main() {
    env_logger::init();

    let config = EffectConfig::new()
        .with_pool_size(16)
        .with_lifetime(1.0, 4.0)
        .with_size(0.05, 0.2)
        .with_fire(2.0, 1.5)
        .with_fire_key(KeyCode::Space);

    let effect = CubeEffect::new(config);
    let parent = LogVisual::new("volume");
    let cubes = (0..config.pool_size)
        .map(|i| LogVisual::new(format!("cube {i}")))
        .collect();

    if let Err(e) = cubeburst::runner::run(effect, parent, cubes) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
