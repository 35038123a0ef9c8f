use bevy::prelude::*;

use super::generation::generate_regional_weather;
use super::types::{RegionalWeatherChanged, RegionalWeatherFeed};
use crate::ocean_params::OceanParams;
use crate::regions::{OceanRegion, SelectedRegion};
use crate::sim_rng::SimRng;

fn refresh(
    feed: &mut RegionalWeatherFeed,
    rng: &mut SimRng,
    region: OceanRegion,
    changed: &mut EventWriter<RegionalWeatherChanged>,
) {
    feed.current = generate_regional_weather(&mut rng.0, region);
    feed.ticks_since_refresh = 0;
    feed.refresh_count += 1;
    debug!(
        "Weather {}: {} {} kn, {} m",
        region.name(),
        feed.current.condition.name(),
        feed.current.wind_speed,
        feed.current.wave_height
    );
    changed.send(RegionalWeatherChanged {
        region,
        condition: feed.current.condition,
    });
}

/// Startup: first reading for the initially selected region.
pub fn init_regional_weather(
    region: Res<SelectedRegion>,
    mut rng: ResMut<SimRng>,
    mut feed: ResMut<RegionalWeatherFeed>,
    mut changed: EventWriter<RegionalWeatherChanged>,
) {
    refresh(&mut feed, &mut rng, region.0, &mut changed);
}

/// Re-roll immediately when a different region is focused, restarting the
/// refresh interval.
pub fn refresh_weather_on_region_change(
    region: Res<SelectedRegion>,
    mut rng: ResMut<SimRng>,
    mut feed: ResMut<RegionalWeatherFeed>,
    mut changed: EventWriter<RegionalWeatherChanged>,
) {
    if !region.is_changed() || region.is_added() {
        return;
    }
    refresh(&mut feed, &mut rng, region.0, &mut changed);
}

/// FixedUpdate: re-roll once the configured interval has elapsed.
pub fn tick_weather_refresh(
    params: Res<OceanParams>,
    region: Res<SelectedRegion>,
    mut rng: ResMut<SimRng>,
    mut feed: ResMut<RegionalWeatherFeed>,
    mut changed: EventWriter<RegionalWeatherChanged>,
) {
    feed.ticks_since_refresh += 1;
    if feed.ticks_since_refresh < params.weather_refresh_ticks() {
        return;
    }
    refresh(&mut feed, &mut rng, region.0, &mut changed);
}
