//! Hazard zones: circular storm/current areas routes are scored against.

pub mod generation;
pub mod types;

pub use generation::{generate_hazard_field, spawn_hazard_field, HAZARD_NAMES};
pub use types::{HazardField, HazardIntensity, HazardKind, HazardZone};

use bevy::prelude::*;

pub struct HazardsPlugin;

impl Plugin for HazardsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HazardField>()
            .add_systems(Startup, spawn_hazard_field);
    }
}
