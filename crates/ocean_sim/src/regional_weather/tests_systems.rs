#[cfg(test)]
mod tests {
    use crate::ocean_params::{OceanParams, WeatherParams};
    use crate::regional_weather::*;
    use crate::regions::OceanRegion;
    use crate::test_harness::TestOcean;

    #[test]
    fn test_startup_produces_initial_reading() {
        let ocean = TestOcean::new();
        let feed = ocean.weather();
        assert_eq!(feed.refresh_count, 1);
        assert_eq!(feed.ticks_since_refresh, 0);
        assert_eq!(feed.current.region, OceanRegion::All);
    }

    #[test]
    fn test_refresh_after_interval() {
        // Defaults: 10 s at 10 Hz.
        let mut ocean = TestOcean::new();
        ocean.tick(99);
        assert_eq!(ocean.weather().refresh_count, 1);
        assert_eq!(ocean.weather().ticks_since_refresh, 99);

        ocean.tick(1);
        assert_eq!(ocean.weather().refresh_count, 2);
        assert_eq!(ocean.weather().ticks_since_refresh, 0);
    }

    #[test]
    fn test_custom_refresh_interval() {
        let mut ocean = TestOcean::with_params(OceanParams {
            weather: WeatherParams { refresh_secs: 1.0 },
            ..Default::default()
        });
        ocean.tick(30);
        assert_eq!(ocean.weather().refresh_count, 4);
    }

    #[test]
    fn test_region_change_rerolls_and_restarts_interval() {
        let mut ocean = TestOcean::new();
        ocean.tick(50);

        ocean.focus(OceanRegion::SouthernOcean);
        let feed = ocean.weather();
        assert_eq!(feed.refresh_count, 2);
        assert_eq!(feed.ticks_since_refresh, 0);
        assert_eq!(feed.current.region, OceanRegion::SouthernOcean);
        assert_ne!(feed.current.condition, WeatherCondition::Clear);
    }

    #[test]
    fn test_refocusing_same_region_keeps_reading() {
        let mut ocean = TestOcean::new();
        ocean.focus(OceanRegion::Pacific);
        let before = ocean.weather().current.clone();

        ocean.focus(OceanRegion::Pacific);
        assert_eq!(ocean.weather().refresh_count, 2);
        assert_eq!(ocean.weather().current, before);
    }

    #[test]
    fn test_same_seed_same_weather() {
        let mut a = TestOcean::with_seed(7);
        let mut b = TestOcean::with_seed(7);
        for ocean in [&mut a, &mut b] {
            ocean.focus(OceanRegion::NorthAtlantic);
            ocean.tick(250);
        }
        assert_eq!(a.weather().current, b.weather().current);
        assert_eq!(a.weather().refresh_count, b.weather().refresh_count);
    }
}
