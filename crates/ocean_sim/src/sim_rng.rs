//! Deterministic session RNG resource.
//!
//! Wraps `ChaCha8Rng` so hazard placement and weather rolls are reproducible
//! across platforms. Systems take `ResMut<SimRng>` instead of
//! `rand::thread_rng()`, so identical seeds produce identical sessions.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed used when no explicit seed is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Deterministic RNG resource for all simulated randomness.
///
/// Systems that need randomness take `ResMut<SimRng>` and use `rng.0`
/// (a `ChaCha8Rng` implementing `rand::Rng`).
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

pub struct SimRngPlugin;

impl Plugin for SimRngPlugin {
    fn build(&self, app: &mut App) {
        let seed = app
            .world()
            .get_resource::<crate::ocean_params::OceanParams>()
            .map(|p| p.seed)
            .unwrap_or(DEFAULT_SEED);
        app.insert_resource(SimRng::from_seed_u64(seed));
    }
}
