//! Data-driven session parameters.
//!
//! Collects the tunables of a map session into a single [`OceanParams`]
//! resource so they can be supplied from a JSON file instead of being
//! hardcoded. Insert the resource before adding `OceanSimPlugin`; otherwise
//! the defaults are used.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_TICK_HZ, HAZARD_COUNT, MAX_HAZARD_COUNT, MAX_TICK_HZ, MIN_TICK_HZ,
    WEATHER_REFRESH_SECS,
};
use crate::map_input::MapMode;
use crate::sim_rng::DEFAULT_SEED;

// ---------------------------------------------------------------------------
// Hazard parameters
// ---------------------------------------------------------------------------

/// Tunables for the session hazard field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardParams {
    /// Number of hazard zones generated at session start.
    pub count: usize,
}

impl Default for HazardParams {
    fn default() -> Self {
        Self {
            count: HAZARD_COUNT,
        }
    }
}

// ---------------------------------------------------------------------------
// Weather parameters
// ---------------------------------------------------------------------------

/// Tunables for the regional weather feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherParams {
    /// Seconds between weather refreshes for the selected region.
    pub refresh_secs: f64,
}

impl Default for WeatherParams {
    fn default() -> Self {
        Self {
            refresh_secs: WEATHER_REFRESH_SECS,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level OceanParams resource
// ---------------------------------------------------------------------------

/// Central resource holding the session parameters.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanParams {
    /// Seed for every randomized generator of the session.
    pub seed: u64,
    /// Fixed-update rate in ticks per second.
    pub tick_hz: f64,
    /// Mode the map opens in.
    pub initial_mode: MapMode,
    pub hazards: HazardParams,
    pub weather: WeatherParams,
}

impl Default for OceanParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tick_hz: DEFAULT_TICK_HZ,
            initial_mode: MapMode::default(),
            hazards: HazardParams::default(),
            weather: WeatherParams::default(),
        }
    }
}

impl OceanParams {
    /// Parse and validate parameters from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let params: OceanParams =
            serde_json::from_str(json).map_err(|e| format!("JSON decode error: {e}"))?;
        params.validate()?;
        Ok(params)
    }

    /// Read and parse a JSON parameter file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_TICK_HZ..=MAX_TICK_HZ).contains(&self.tick_hz) {
            return Err(format!(
                "tick_hz must be within {MIN_TICK_HZ}..={MAX_TICK_HZ}, got {}",
                self.tick_hz
            ));
        }
        if self.hazards.count > MAX_HAZARD_COUNT {
            return Err(format!(
                "hazards.count must be at most {MAX_HAZARD_COUNT}, got {}",
                self.hazards.count
            ));
        }
        if !(self.weather.refresh_secs.is_finite() && self.weather.refresh_secs > 0.0) {
            return Err(format!(
                "weather.refresh_secs must be positive, got {}",
                self.weather.refresh_secs
            ));
        }
        Ok(())
    }

    /// Weather refresh interval converted to fixed ticks (at least 1).
    pub fn weather_refresh_ticks(&self) -> u64 {
        ((self.weather.refresh_secs * self.tick_hz).round() as u64).max(1)
    }
}
