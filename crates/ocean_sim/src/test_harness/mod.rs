//! # TestOcean: headless integration test harness
//!
//! Wraps a headless `App` + `OceanSimPlugin` with manual time, so tests
//! decide exactly when frames and fixed ticks happen.

mod assertions;
mod queries;
mod setup;

use bevy::app::App;

pub use setup::storm;

use crate::ocean_params::OceanParams;

/// A headless Bevy App running the map simulation.
///
/// Use the builder methods to set up the session, send commands, then query
/// or assert on the resulting state.
pub struct TestOcean {
    app: App,
}

impl Default for TestOcean {
    fn default() -> Self {
        Self::new()
    }
}

impl TestOcean {
    /// Session with default params (seed 42, exploration mode, 6 hazards).
    pub fn new() -> Self {
        Self::with_params(OceanParams::default())
    }

    pub fn with_params(params: OceanParams) -> Self {
        Self {
            app: crate::headless_app(params),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_params(OceanParams {
            seed,
            ..Default::default()
        })
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Run one frame.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Run `n` fixed ticks followed by one frame.
    pub fn tick(&mut self, n: u64) {
        crate::advance_ticks(&mut self.app, n);
    }
}
