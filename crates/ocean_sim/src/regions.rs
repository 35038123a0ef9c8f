//! Ocean regions the map can focus on, and the view transform for each.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OceanRegion {
    #[default]
    All,
    NorthAtlantic,
    Pacific,
    IndianOcean,
    SouthernOcean,
}

impl OceanRegion {
    pub const ALL: [OceanRegion; 5] = [
        OceanRegion::All,
        OceanRegion::NorthAtlantic,
        OceanRegion::Pacific,
        OceanRegion::IndianOcean,
        OceanRegion::SouthernOcean,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OceanRegion::All => "All",
            OceanRegion::NorthAtlantic => "North Atlantic",
            OceanRegion::Pacific => "Pacific",
            OceanRegion::IndianOcean => "Indian Ocean",
            OceanRegion::SouthernOcean => "Southern Ocean",
        }
    }

    /// Pan offset (percent of viewport) and zoom applied when focusing the region.
    pub fn view(self) -> RegionView {
        let (x, y, scale) = match self {
            OceanRegion::All => (0.0, 0.0, 1.0),
            OceanRegion::NorthAtlantic => (15.0, 25.0, 2.2),
            OceanRegion::Pacific => (-25.0, 5.0, 2.0),
            OceanRegion::IndianOcean => (-10.0, -10.0, 2.4),
            OceanRegion::SouthernOcean => (0.0, -35.0, 2.4),
        };
        RegionView { x, y, scale }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionView {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for RegionView {
    fn default() -> Self {
        OceanRegion::All.view()
    }
}

/// Region currently in focus.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedRegion(pub OceanRegion);

/// Current pan/zoom of the map.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct MapView(pub RegionView);
