//! Read-only accessors for `TestOcean`.

use bevy::prelude::*;

use crate::hazards::HazardField;
use crate::map_input::MapMode;
use crate::observation::{CurrentObservation, MapObservation};
use crate::regional_weather::RegionalWeatherFeed;
use crate::regions::{MapView, OceanRegion, SelectedRegion};
use crate::route_plan::RoutePlan;
use crate::route_risk::{RouteAnalysis, RouteAnalysisChanged, RouteAnalysisState};
use crate::TickCounter;

use super::TestOcean;

impl TestOcean {
    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn hazards(&self) -> &HazardField {
        self.resource::<HazardField>()
    }

    pub fn route(&self) -> &RoutePlan {
        self.resource::<RoutePlan>()
    }

    pub fn analysis(&self) -> Option<&RouteAnalysis> {
        self.resource::<RouteAnalysisState>().analysis.as_ref()
    }

    pub fn mode(&self) -> MapMode {
        *self.resource::<MapMode>()
    }

    pub fn region(&self) -> OceanRegion {
        self.resource::<SelectedRegion>().0
    }

    pub fn view(&self) -> MapView {
        *self.resource::<MapView>()
    }

    pub fn weather(&self) -> &RegionalWeatherFeed {
        self.resource::<RegionalWeatherFeed>()
    }

    pub fn observation(&self) -> Option<&MapObservation> {
        self.resource::<CurrentObservation>().observation.as_ref()
    }

    pub fn tick_count(&self) -> u64 {
        self.resource::<TickCounter>().0
    }

    /// Number of `RouteAnalysisChanged` events still buffered.
    pub fn analysis_change_events(&self) -> usize {
        self.resource::<Events<RouteAnalysisChanged>>().len()
    }
}
