//! # Cubeburst
//!
//! A pooled cube effect: a rotating volume spawns smaller, randomly-sized,
//! randomly-colored cubes inside itself; each cube fades toward transparent
//! black over a random lifespan; a trigger key fires every cube outward for
//! a fixed duration, after which the spawn cycle resumes.
//!
//! The crate owns the pool, the lifecycle state machine and the
//! randomization. Rendering is the host's business - the effect pushes
//! transforms, colors and visibility into [`Visual`] implementations the
//! host supplies.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cubeburst::prelude::*;
//!
//! let config = EffectConfig::new()
//!     .with_pool_size(24)
//!     .with_lifetime(1.0, 4.0)
//!     .with_size(0.05, 0.2)
//!     .with_fire(2.0, 1.5)
//!     .with_fire_key(KeyCode::Space);
//!
//! let mut effect = CubeEffect::new(config);
//! let mut input = Input::new();
//! let mut time = Time::new();
//!
//! // each frame:
//! let (_, delta) = time.update();
//! effect.update(delta, &input);
//! effect.sync_visuals(&mut parent_visual, &mut cube_visuals);
//! input.begin_frame();
//! ```
//!
//! Or hand everything to the built-in winit driver:
//!
//! ```ignore
//! cubeburst::runner::run(effect, parent_visual, cube_visuals)?;
//! ```
//!
//! ## Core Concepts
//!
//! ### The pool
//!
//! Cubes are created once and recycled forever. Spawning reinitializes the
//! first inactive cube with fresh random parameters - at most one per tick,
//! so the volume fills gradually. With every cube active, spawning silently
//! waits for an expiry.
//!
//! ### The fire sequence
//!
//! The trigger key detaches every cube from the rotating volume, freezes
//! aging and propels the cubes outward from the center for a configured
//! duration. When it completes, the whole pool deactivates and normal
//! spawning resumes. Only one sequence can ever be in flight.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Designer-tunable parameters |
//! | [`effect`] | Top-level orchestrator |
//! | [`pool`] | Fixed pool, spawn and fire logic |
//! | [`cube`] | Per-cube lifecycle state |
//! | [`rotator`] | Parent volume rotation |
//! | [`spawn`] | Randomization helpers |
//! | [`color`] | RGBA colors and fading |
//! | [`visual`] | Render-side injection seam |
//! | [`input`] | Keyboard edge detection |
//! | [`time`] | Frame timing |
//! | [`runner`] | winit event-loop driver |

pub mod color;
pub mod config;
pub mod cube;
pub mod effect;
pub mod error;
pub mod input;
pub mod pool;
pub mod rotator;
pub mod runner;
pub mod spawn;
pub mod time;
pub mod visual;

pub use color::Rgba;
pub use config::EffectConfig;
pub use cube::Cube;
pub use effect::CubeEffect;
pub use error::RunError;
pub use glam::{Quat, Vec3};
pub use input::{Input, KeyCode};
pub use pool::{CubePool, FireSequence, PoolState};
pub use rotator::Rotator;
pub use spawn::SpawnContext;
pub use time::Time;
pub use visual::{NullVisual, Visual};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use cubeburst::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::EffectConfig;
    pub use crate::effect::CubeEffect;
    pub use crate::input::{Input, KeyCode};
    pub use crate::pool::{CubePool, PoolState};
    pub use crate::rotator::Rotator;
    pub use crate::spawn::SpawnContext;
    pub use crate::time::Time;
    pub use crate::visual::{NullVisual, Visual};
    pub use crate::{Quat, Vec3};
}
