//! Route hazard scoring and the systems that keep the analysis current.

pub mod evaluator;
pub mod systems;
pub mod types;

pub use evaluator::{
    analysis_for_danger_level, analyze_route, danger_weight, evaluate_route, sample_segment,
    segment_crosses_hazard,
};
pub use systems::recompute_route_analysis;
pub use types::{RouteAnalysis, RouteAnalysisChanged, RouteAnalysisState, RouteStatus};

use bevy::prelude::*;

use crate::simulation_sets::MapUpdateSet;

pub struct RouteRiskPlugin;

impl Plugin for RouteRiskPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RouteAnalysisState>()
            .add_event::<RouteAnalysisChanged>()
            .add_systems(
                Update,
                recompute_route_analysis.in_set(MapUpdateSet::Analysis),
            );
    }
}
