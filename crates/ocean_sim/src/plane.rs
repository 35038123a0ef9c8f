//! Normalized map-plane geometry.
//!
//! The overlay has no geographic projection: every position is a percentage
//! of the map viewport, `x` across and `y` down, both in `0..=100`.

use serde::{Deserialize, Serialize};

use crate::config::MAP_EXTENT;

/// A position on the 0–100 map plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in plane units.
    pub fn distance(self, other: MapPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at parameter `t` along the segment `self -> to`.
    ///
    /// Computed as `start + delta * t` so that samples at exact multiples of
    /// the step land exactly on the expected coordinates.
    pub fn lerp(self, to: MapPoint, t: f64) -> MapPoint {
        MapPoint {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }

    /// True when both coordinates lie inside the map plane.
    pub fn is_on_map(self) -> bool {
        (0.0..=MAP_EXTENT).contains(&self.x) && (0.0..=MAP_EXTENT).contains(&self.y)
    }

    /// Clamp both coordinates into the map plane.
    pub fn clamped(self) -> MapPoint {
        MapPoint {
            x: self.x.clamp(0.0, MAP_EXTENT),
            y: self.y.clamp(0.0, MAP_EXTENT),
        }
    }
}
