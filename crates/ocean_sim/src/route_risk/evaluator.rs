//! Route hazard scoring.
//!
//! A route is the straight segment between two map points. Each hazard is
//! tested by sampling the segment at `ROUTE_SAMPLE_STEPS + 1` evenly spaced
//! points; the route crosses the hazard if any sample lies strictly inside
//! its radius. Hazards narrower than the sampling step can slip between two
//! samples and go undetected.

use super::types::{RouteAnalysis, RouteStatus};
use crate::config::{ROUTE_DISTANCE_SCALE, ROUTE_SAMPLE_STEPS};
use crate::hazards::{HazardIntensity, HazardZone};
use crate::plane::MapPoint;
use crate::sea_state::{round_to_tenth, SeaVisibility};

/// Danger contributed by one intersected hazard.
pub fn danger_weight(intensity: HazardIntensity) -> u32 {
    match intensity {
        HazardIntensity::Severe => 2,
        HazardIntensity::Moderate | HazardIntensity::Extreme => 1,
    }
}

/// The sample points of a route, from `start` (t = 0) to `end` (t = 1).
pub fn sample_segment(start: MapPoint, end: MapPoint) -> impl Iterator<Item = MapPoint> {
    let steps = f64::from(ROUTE_SAMPLE_STEPS);
    (0..=ROUTE_SAMPLE_STEPS).map(move |i| start.lerp(end, f64::from(i) / steps))
}

/// True if any sample of the segment falls inside the hazard.
pub fn segment_crosses_hazard(start: MapPoint, end: MapPoint, hazard: &HazardZone) -> bool {
    sample_segment(start, end).any(|p| hazard.contains(p))
}

/// Derive the full analysis from a plane distance and accumulated danger.
pub fn analysis_for_danger_level(
    plane_distance: f64,
    danger_level: u32,
    hazards: Vec<String>,
) -> RouteAnalysis {
    let in_danger = danger_level > 0;
    RouteAnalysis {
        distance: plane_distance * ROUTE_DISTANCE_SCALE,
        danger_level,
        safety_score: 100u32.saturating_sub(danger_level.saturating_mul(30)),
        wave_height: round_to_tenth(f64::from(danger_level) * 2.5 + 1.2),
        wind_speed: danger_level.saturating_mul(20).saturating_add(15),
        precipitation: if in_danger {
            danger_level.saturating_mul(30).saturating_add(10)
        } else {
            5
        },
        visibility: if in_danger {
            SeaVisibility::NauticalMiles(2)
        } else {
            SeaVisibility::Unlimited
        },
        status: RouteStatus::from_danger_level(danger_level),
        hazards,
    }
}

/// Score the route `start -> end` against `hazards`.
pub fn analyze_route(start: MapPoint, end: MapPoint, hazards: &[HazardZone]) -> RouteAnalysis {
    let mut danger_level = 0u32;
    let mut crossed = Vec::new();

    for hazard in hazards {
        if segment_crosses_hazard(start, end, hazard) {
            danger_level = danger_level.saturating_add(danger_weight(hazard.intensity));
            crossed.push(hazard.description());
        }
    }

    analysis_for_danger_level(start.distance(end), danger_level, crossed)
}

/// Score a possibly incomplete route. Returns `None` unless both endpoints
/// are set.
pub fn evaluate_route(
    start: Option<MapPoint>,
    end: Option<MapPoint>,
    hazards: &[HazardZone],
) -> Option<RouteAnalysis> {
    match (start, end) {
        (Some(start), Some(end)) => Some(analyze_route(start, end, hazards)),
        _ => None,
    }
}
