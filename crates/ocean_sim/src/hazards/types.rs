use bevy::prelude::*;
use serde::Serialize;

use crate::plane::MapPoint;

/// How dangerous a hazard zone is to cross.
///
/// Only `Moderate` and `Severe` are produced by the generator; `Extreme` is
/// accepted for hand-built fields and scores like `Moderate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardIntensity {
    Moderate,
    Severe,
    Extreme,
}

impl HazardIntensity {
    pub fn name(self) -> &'static str {
        match self {
            HazardIntensity::Moderate => "moderate",
            HazardIntensity::Severe => "severe",
            HazardIntensity::Extreme => "extreme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    Storm,
    Current,
    Ice,
}

impl HazardKind {
    pub fn name(self) -> &'static str {
        match self {
            HazardKind::Storm => "storm",
            HazardKind::Current => "current",
            HazardKind::Ice => "ice",
        }
    }

    /// Upper-case label used in route hazard descriptions.
    pub fn label(self) -> &'static str {
        match self {
            HazardKind::Storm => "STORM",
            HazardKind::Current => "CURRENT",
            HazardKind::Ice => "ICE",
        }
    }
}

/// A circular risk area on the map plane.
///
/// `center.x` is the zone's left offset and `center.y` its top offset, both
/// percentages of the map viewport. The radius is in the same units and is
/// always strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HazardZone {
    pub id: String,
    pub name: String,
    pub center: MapPoint,
    pub(crate) radius: f64,
    pub intensity: HazardIntensity,
    pub kind: HazardKind,
}

impl HazardZone {
    /// Build a zone, rejecting a radius that is not a positive finite number.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        center: MapPoint,
        radius: f64,
        intensity: HazardIntensity,
        kind: HazardKind,
    ) -> Result<Self, String> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(format!("hazard radius must be positive, got {radius}"));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            center,
            radius,
            intensity,
            kind,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// True when `point` lies strictly inside the zone.
    pub fn contains(&self, point: MapPoint) -> bool {
        point.distance(self.center) < self.radius
    }

    /// Human-readable description, e.g. `Cyclone Iota (STORM)`.
    pub fn description(&self) -> String {
        format!("{} ({})", self.name, self.kind.label())
    }
}

/// The hazard zones of the current session, in generation order.
///
/// Generated once at startup and never mutated by the simulation afterwards.
#[derive(Resource, Debug, Clone, Default)]
pub struct HazardField {
    pub zones: Vec<HazardZone>,
}

impl HazardField {
    pub fn new(zones: Vec<HazardZone>) -> Self {
        Self { zones }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
