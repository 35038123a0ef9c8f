use bevy::prelude::*;
use serde::Serialize;

use crate::regions::OceanRegion;
use crate::sea_state::SeaVisibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Stormy,
    Rain,
}

impl WeatherCondition {
    pub fn name(self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Stormy => "Stormy",
            WeatherCondition::Rain => "Rain",
        }
    }
}

/// Synthetic sea-state reading for one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalWeather {
    pub region: OceanRegion,
    /// Knots.
    pub wind_speed: u32,
    /// Metres, one decimal.
    pub wave_height: f64,
    /// Percent chance.
    pub precipitation: u32,
    pub visibility: SeaVisibility,
    pub condition: WeatherCondition,
    /// hPa.
    pub pressure: u32,
}

impl Default for RegionalWeather {
    fn default() -> Self {
        Self {
            region: OceanRegion::All,
            wind_speed: 15,
            wave_height: 1.2,
            precipitation: 0,
            visibility: SeaVisibility::Unlimited,
            condition: WeatherCondition::Clear,
            pressure: 1015,
        }
    }
}

/// Current weather for the selected region plus refresh bookkeeping.
#[derive(Resource, Debug, Clone, Default)]
pub struct RegionalWeatherFeed {
    pub current: RegionalWeather,
    /// Fixed ticks since the last refresh.
    pub ticks_since_refresh: u64,
    /// Readings produced this session, including the initial one.
    pub refresh_count: u64,
}

/// Fired each time a new weather reading is produced.
#[derive(Event, Debug, Clone)]
pub struct RegionalWeatherChanged {
    pub region: OceanRegion,
    pub condition: WeatherCondition,
}
