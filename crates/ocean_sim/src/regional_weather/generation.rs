use rand::Rng;

use super::types::{RegionalWeather, WeatherCondition};
use crate::regions::OceanRegion;
use crate::sea_state::{round_to_tenth, SeaVisibility};

/// Baseline (wind knots, wave metres) around which readings vary.
pub fn regional_baseline(region: OceanRegion) -> (f64, f64) {
    match region {
        OceanRegion::SouthernOcean => (35.0, 4.5),
        OceanRegion::NorthAtlantic => (25.0, 2.8),
        _ => (15.0, 1.2),
    }
}

/// High-latitude basins get the rough weather table.
fn is_rough_region(region: OceanRegion) -> bool {
    matches!(
        region,
        OceanRegion::SouthernOcean | OceanRegion::NorthAtlantic
    )
}

/// (condition, precipitation %, visibility, pressure hPa) for a uniform draw.
fn condition_for_draw(rough: bool, draw: f64) -> (WeatherCondition, u32, SeaVisibility, u32) {
    use SeaVisibility::NauticalMiles;

    if rough {
        if draw > 0.6 {
            (WeatherCondition::Stormy, 85, NauticalMiles(2), 985)
        } else if draw > 0.3 {
            (WeatherCondition::Rain, 60, NauticalMiles(5), 1002)
        } else {
            (WeatherCondition::Cloudy, 20, NauticalMiles(8), 1010)
        }
    } else if draw > 0.8 {
        (WeatherCondition::Rain, 40, NauticalMiles(6), 1008)
    } else if draw > 0.5 {
        (WeatherCondition::Cloudy, 10, NauticalMiles(9), 1012)
    } else {
        (WeatherCondition::Clear, 0, SeaVisibility::Unlimited, 1015)
    }
}

/// Roll a weather reading for `region`.
///
/// Wind varies by ±5 kn and waves by −0.5..+1.0 m around the regional
/// baseline; the condition comes from a third draw.
pub fn generate_regional_weather(rng: &mut impl Rng, region: OceanRegion) -> RegionalWeather {
    let (base_wind, base_wave) = regional_baseline(region);

    let wind = base_wind + rng.gen::<f64>() * 10.0 - 5.0;
    let wave = base_wave + rng.gen::<f64>() * 1.5 - 0.5;
    let (condition, precipitation, visibility, pressure) =
        condition_for_draw(is_rough_region(region), rng.gen::<f64>());

    RegionalWeather {
        region,
        wind_speed: wind.round().max(0.0) as u32,
        wave_height: round_to_tenth(wave),
        precipitation,
        visibility,
        condition,
        pressure,
    }
}
