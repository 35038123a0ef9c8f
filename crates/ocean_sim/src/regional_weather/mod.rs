//! Synthetic regional weather for the focused ocean region.
//!
//! Readings are plausible-looking numbers only; they are rolled from the
//! session RNG on startup, on every region change, and on a fixed interval.

pub mod generation;
pub mod systems;
mod tests_systems;
pub mod types;

pub use generation::{generate_regional_weather, regional_baseline};
pub use systems::{init_regional_weather, refresh_weather_on_region_change, tick_weather_refresh};
pub use types::{RegionalWeather, RegionalWeatherChanged, RegionalWeatherFeed, WeatherCondition};

use bevy::prelude::*;

use crate::simulation_sets::{MapUpdateSet, SimulationSet};

pub struct RegionalWeatherPlugin;

impl Plugin for RegionalWeatherPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RegionalWeatherFeed>()
            .add_event::<RegionalWeatherChanged>()
            // Hazards draw from the RNG first so a seed always yields the same field.
            .add_systems(
                Startup,
                init_regional_weather.after(crate::hazards::spawn_hazard_field),
            )
            .add_systems(
                Update,
                refresh_weather_on_region_change.in_set(MapUpdateSet::Analysis),
            )
            .add_systems(
                FixedUpdate,
                tick_weather_refresh.in_set(SimulationSet::Simulation),
            );
    }
}
