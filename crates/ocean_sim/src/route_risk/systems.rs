use bevy::prelude::*;

use super::evaluator::evaluate_route;
use super::types::{RouteAnalysisChanged, RouteAnalysisState};
use crate::hazards::HazardField;
use crate::route_plan::RoutePlan;

/// Re-score the planned route whenever the plan or the hazard field changes.
///
/// The analysis is rebuilt from scratch every time; nothing is carried over
/// from the previous result.
pub fn recompute_route_analysis(
    plan: Res<RoutePlan>,
    field: Res<HazardField>,
    mut state: ResMut<RouteAnalysisState>,
    mut changed: EventWriter<RouteAnalysisChanged>,
) {
    if !plan.is_changed() && !field.is_changed() {
        return;
    }

    let analysis = evaluate_route(plan.start_point(), plan.end_point(), &field.zones);

    match &analysis {
        Some(a) => info!(
            "Route analysis: {} | safety {} | {} nm | {} hazard(s)",
            a.status.name(),
            a.safety_score,
            a.distance_rounded(),
            a.hazards.len()
        ),
        None => debug!("Route incomplete, no analysis"),
    }

    changed.send(RouteAnalysisChanged {
        status: analysis.as_ref().map(|a| a.status),
    });
    state.analysis = analysis;
}
