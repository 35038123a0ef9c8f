//! Catalog of major maritime hubs selectable as route endpoints.

use serde::Serialize;

use crate::plane::MapPoint;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Port {
    pub name: &'static str,
    pub country: &'static str,
    pub position: MapPoint,
    /// Ocean basin label shown next to the port.
    pub region: &'static str,
}

const fn port(
    name: &'static str,
    country: &'static str,
    x: f64,
    y: f64,
    region: &'static str,
) -> Port {
    Port {
        name,
        country,
        position: MapPoint::new(x, y),
        region,
    }
}

pub const PORTS: [Port; 12] = [
    port("New York", "USA", 28.0, 32.0, "North Atlantic"),
    port("London", "UK", 46.0, 25.0, "North Atlantic"),
    port("Reykjavik", "Iceland", 40.0, 15.0, "North Atlantic"),
    port("Tokyo", "Japan", 85.0, 35.0, "Pacific"),
    port("Shanghai", "China", 80.0, 38.0, "Pacific"),
    port("Singapore", "Singapore", 72.0, 55.0, "Indian Ocean"),
    port("Sydney", "Australia", 88.0, 75.0, "Pacific"),
    port("Cape Town", "South Africa", 52.0, 75.0, "South Atlantic"),
    port("Rio de Janeiro", "Brazil", 32.0, 65.0, "South Atlantic"),
    port("Mumbai", "India", 62.0, 42.0, "Indian Ocean"),
    port("Los Angeles", "USA", 15.0, 38.0, "Pacific"),
    port("Honolulu", "USA", 5.0, 45.0, "Pacific"),
];

/// Exact-name lookup.
pub fn find_port(name: &str) -> Option<&'static Port> {
    PORTS.iter().find(|p| p.name == name)
}
