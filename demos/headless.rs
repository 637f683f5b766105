//! Headless demo: steps the effect with a fixed delta and prints what the
//! pool is doing. Run with: `cargo run --example headless`

use cubeburst::prelude::*;

fn main() {
    env_logger::init();

    let config = EffectConfig::new()
        .with_pool_size(8)
        .with_lifetime(1.0, 3.0)
        .with_size(0.05, 0.2)
        .with_fire(1.5, 1.0);

    let mut effect = CubeEffect::with_context(config, SpawnContext::with_seed(2024));
    let mut time = Time::new();
    time.set_fixed_delta(Some(1.0 / 60.0));

    let mut parent = NullVisual;
    let mut cubes = vec![NullVisual; config.pool_size];

    for frame in 0..600 {
        let (_, delta) = time.update();

        // Fire once, two seconds in
        let fire = frame == 120;
        effect.step(delta, fire);
        effect.sync_visuals(&mut parent, &mut cubes);

        if frame % 30 == 0 {
            println!(
                "frame {frame:3}: {} active, firing: {}",
                effect.pool().active_count(),
                effect.pool().is_firing()
            );
        }
    }
}
