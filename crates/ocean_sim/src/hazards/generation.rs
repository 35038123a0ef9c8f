use bevy::prelude::*;
use rand::Rng;

use super::types::{HazardField, HazardIntensity, HazardKind, HazardZone};
use crate::ocean_params::OceanParams;
use crate::plane::MapPoint;
use crate::sim_rng::SimRng;

/// Display names assigned to generated hazards, in order.
pub const HAZARD_NAMES: [&str; 6] = [
    "Cyclone Iota",
    "Typhoon Mawar",
    "Atlantic Swell",
    "Gulf Current",
    "Vortex Beta",
    "Polar Front",
];

/// Vertical band hazards are placed in (top offset).
pub const HAZARD_TOP_RANGE: (f64, f64) = (20.0, 80.0);
/// Horizontal band hazards are placed in (left offset).
pub const HAZARD_LEFT_RANGE: (f64, f64) = (10.0, 90.0);
/// Radius range of generated hazards. Strictly positive.
pub const HAZARD_RADIUS_RANGE: (f64, f64) = (5.0, 15.0);

/// Probability threshold: a draw above this makes the hazard severe.
const SEVERE_THRESHOLD: f64 = 0.6;
/// Probability threshold: a draw above this makes the hazard a storm.
const STORM_THRESHOLD: f64 = 0.5;

fn draw_in(rng: &mut impl Rng, (lo, hi): (f64, f64)) -> f64 {
    rng.gen::<f64>() * (hi - lo) + lo
}

/// Generate `count` hazard zones.
///
/// Names cycle through [`HAZARD_NAMES`]; ids are `H-<index>`.
pub fn generate_hazard_field(rng: &mut impl Rng, count: usize) -> Vec<HazardZone> {
    (0..count)
        .map(|i| {
            let top = draw_in(rng, HAZARD_TOP_RANGE);
            let left = draw_in(rng, HAZARD_LEFT_RANGE);
            let radius = draw_in(rng, HAZARD_RADIUS_RANGE);
            let intensity = if rng.gen::<f64>() > SEVERE_THRESHOLD {
                HazardIntensity::Severe
            } else {
                HazardIntensity::Moderate
            };
            let kind = if rng.gen::<f64>() > STORM_THRESHOLD {
                HazardKind::Storm
            } else {
                HazardKind::Current
            };

            // Built directly: HAZARD_RADIUS_RANGE keeps the radius positive.
            HazardZone {
                id: format!("H-{i}"),
                name: HAZARD_NAMES[i % HAZARD_NAMES.len()].to_string(),
                center: MapPoint::new(left, top),
                radius,
                intensity,
                kind,
            }
        })
        .collect()
}

/// Startup system: fill the `HazardField` for the session.
pub fn spawn_hazard_field(
    params: Res<OceanParams>,
    mut rng: ResMut<SimRng>,
    mut field: ResMut<HazardField>,
) {
    field.zones = generate_hazard_field(&mut rng.0, params.hazards.count);
    let severe = field
        .zones
        .iter()
        .filter(|z| z.intensity == HazardIntensity::Severe)
        .count();
    info!(
        "Hazard field generated: {} zones ({} severe)",
        field.len(),
        severe
    );
}
