/// Side length of the normalized map plane. Positions are percentages of the
/// map viewport, so both axes run from 0 to `MAP_EXTENT`.
pub const MAP_EXTENT: f64 = 100.0;

/// Number of equal steps a route segment is divided into when testing it
/// against hazard zones. `ROUTE_SAMPLE_STEPS + 1` points are sampled.
pub const ROUTE_SAMPLE_STEPS: u32 = 10;

/// Scale turning plane units into the pseudo-nautical-mile distance figure.
pub const ROUTE_DISTANCE_SCALE: f64 = 60.0;

/// Number of hazard zones generated for a session.
pub const HAZARD_COUNT: usize = 6;

/// Largest hazard count a params file may request.
pub const MAX_HAZARD_COUNT: usize = 64;

/// Default fixed-tick rate of the simulation (ticks per second).
pub const DEFAULT_TICK_HZ: f64 = 10.0;

/// Accepted fixed-tick rates. Outside this range the fixed timestep would
/// round to zero or overflow `Duration`.
pub const MIN_TICK_HZ: f64 = 1.0;
pub const MAX_TICK_HZ: f64 = 1000.0;

/// Default interval between regional weather refreshes, in seconds.
pub const WEATHER_REFRESH_SECS: f64 = 10.0;
