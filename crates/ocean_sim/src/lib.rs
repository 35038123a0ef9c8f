use std::time::Duration;

use bevy::app::FixedMain;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

pub mod agent_protocol;
pub mod config;
pub mod hazards;
pub mod map_input;
pub mod observation;
pub mod ocean_params;
pub mod plane;
pub mod ports;
pub mod regional_weather;
pub mod regions;
pub mod route_plan;
pub mod route_risk;
pub mod sea_state;
pub mod sim_rng;
pub mod simulation_sets;

#[cfg(test)]
pub mod test_harness;

pub use simulation_sets::{MapUpdateSet, SimulationSet};

use ocean_params::OceanParams;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Global tick counter incremented each FixedUpdate.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub fn tick_counter(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}

pub struct OceanSimPlugin;

impl Plugin for OceanSimPlugin {
    fn build(&self, app: &mut App) {
        // Params must exist before the feature plugins read them in `build`.
        app.init_resource::<OceanParams>();
        let tick_hz = app.world().resource::<OceanParams>().tick_hz;

        app.insert_resource(Time::<Fixed>::from_hz(tick_hz))
            .init_resource::<TickCounter>()
            .add_systems(FixedUpdate, tick_counter.in_set(SimulationSet::PreSim));

        app.add_plugins((
            simulation_sets::SimulationSetsPlugin,
            sim_rng::SimRngPlugin,
            hazards::HazardsPlugin,
            map_input::MapInputPlugin,
            route_risk::RouteRiskPlugin,
            regional_weather::RegionalWeatherPlugin,
            observation::ObservationPlugin,
        ));
    }
}

// ---------------------------------------------------------------------------
// Headless driving
// ---------------------------------------------------------------------------

/// Build a headless app whose fixed ticks only advance through
/// [`advance_ticks`], so a session is fully reproducible from its params.
///
/// Startup has already run when this returns.
pub fn headless_app(params: OceanParams) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
    app.insert_resource(params);
    app.add_plugins(OceanSimPlugin);
    app.update();
    app
}

/// Run `ticks` fixed ticks, then one frame so derived state catches up.
///
/// Runs the whole `FixedMain` order rather than just `FixedUpdate` so event
/// buffers keep getting swapped in long headless sessions.
pub fn advance_ticks(app: &mut App, ticks: u64) {
    for _ in 0..ticks {
        app.world_mut().run_schedule(FixedMain);
    }
    app.update();
}
