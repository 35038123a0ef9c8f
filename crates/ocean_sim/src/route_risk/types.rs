use bevy::prelude::*;
use serde::Serialize;

use crate::sea_state::SeaVisibility;

/// Coarse route classification derived from the danger level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteStatus {
    Safe,
    Caution,
    Danger,
}

impl RouteStatus {
    /// `> 1` is danger, `> 0` caution, otherwise safe.
    pub fn from_danger_level(danger_level: u32) -> Self {
        if danger_level > 1 {
            RouteStatus::Danger
        } else if danger_level > 0 {
            RouteStatus::Caution
        } else {
            RouteStatus::Safe
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RouteStatus::Safe => "SAFE",
            RouteStatus::Caution => "CAUTION",
            RouteStatus::Danger => "DANGER",
        }
    }
}

/// Hazard assessment of a straight route between two map points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteAnalysis {
    /// Plane distance scaled to pseudo nautical miles.
    pub distance: f64,
    /// Sum of the weights of every intersected hazard.
    pub danger_level: u32,
    /// 0..=100, higher is safer.
    pub safety_score: u32,
    /// Metres, one decimal.
    pub wave_height: f64,
    /// Knots.
    pub wind_speed: u32,
    /// Percent chance.
    pub precipitation: u32,
    pub visibility: SeaVisibility,
    pub status: RouteStatus,
    /// `"<name> (<TYPE>)"` for each intersected hazard, in hazard order.
    pub hazards: Vec<String>,
}

impl RouteAnalysis {
    /// Distance rounded to whole miles, as shown in the route panel.
    pub fn distance_rounded(&self) -> u64 {
        self.distance.round() as u64
    }
}

/// Latest analysis of the planned route; `None` until both endpoints are set.
#[derive(Resource, Debug, Clone, Default)]
pub struct RouteAnalysisState {
    pub analysis: Option<RouteAnalysis>,
}

/// Fired every time the route analysis is recomputed.
#[derive(Event, Debug, Clone)]
pub struct RouteAnalysisChanged {
    /// Status of the new analysis, `None` when the route is incomplete.
    pub status: Option<RouteStatus>,
}
