//! Serializable snapshot of the whole map state, rebuilt at the end of every
//! frame for external consumers (agent protocol, logging, tests).

use bevy::prelude::*;
use serde::Serialize;

use crate::hazards::{HazardField, HazardZone};
use crate::map_input::MapMode;
use crate::regional_weather::{RegionalWeather, RegionalWeatherFeed};
use crate::regions::{MapView, OceanRegion, RegionView, SelectedRegion};
use crate::route_plan::RoutePlan;
use crate::route_risk::{RouteAnalysis, RouteAnalysisState};
use crate::simulation_sets::MapUpdateSet;
use crate::TickCounter;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapObservation {
    pub tick: u64,
    pub mode: MapMode,
    pub region: OceanRegion,
    pub view: RegionView,
    pub hazards: Vec<HazardZone>,
    pub route: RoutePlan,
    pub analysis: Option<RouteAnalysis>,
    pub weather: RegionalWeather,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CurrentObservation {
    pub observation: Option<MapObservation>,
}

#[allow(clippy::too_many_arguments)]
pub fn update_observation(
    tick: Res<TickCounter>,
    mode: Res<MapMode>,
    region: Res<SelectedRegion>,
    view: Res<MapView>,
    field: Res<HazardField>,
    plan: Res<RoutePlan>,
    analysis: Res<RouteAnalysisState>,
    weather: Res<RegionalWeatherFeed>,
    mut current: ResMut<CurrentObservation>,
) {
    current.observation = Some(MapObservation {
        tick: tick.0,
        mode: *mode,
        region: region.0,
        view: view.0,
        hazards: field.zones.clone(),
        route: RoutePlan::clone(&plan),
        analysis: analysis.analysis.clone(),
        weather: weather.current.clone(),
    });
}

pub struct ObservationPlugin;

impl Plugin for ObservationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentObservation>()
            .add_systems(Update, update_observation.in_set(MapUpdateSet::Report));
    }
}
