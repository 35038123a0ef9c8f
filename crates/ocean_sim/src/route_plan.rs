//! The route being planned: an optional start and end on the map plane.
//!
//! Endpoints come either from the port catalog or from clicks on the map.
//! The plan is plain state; scoring happens in `route_risk`, which watches
//! this resource for changes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::plane::MapPoint;
use crate::ports::find_port;

pub const CUSTOM_ORIGIN_LABEL: &str = "Custom Origin";
pub const CUSTOM_DEST_LABEL: &str = "Custom Dest";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointSlot {
    Start,
    End,
}

/// What the user picked for one slot of the route.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum PortChoice {
    #[default]
    None,
    /// A port name. May name a port missing from the catalog, in which case
    /// the endpoint itself is left as it was.
    Port(String),
    /// A point placed by clicking the map.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEndpoint {
    pub point: MapPoint,
    pub label: String,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: Option<RouteEndpoint>,
    pub end: Option<RouteEndpoint>,
    pub start_choice: PortChoice,
    pub end_choice: PortChoice,
}

impl RoutePlan {
    pub fn endpoint(&self, slot: EndpointSlot) -> Option<&RouteEndpoint> {
        match slot {
            EndpointSlot::Start => self.start.as_ref(),
            EndpointSlot::End => self.end.as_ref(),
        }
    }

    pub fn choice(&self, slot: EndpointSlot) -> &PortChoice {
        match slot {
            EndpointSlot::Start => &self.start_choice,
            EndpointSlot::End => &self.end_choice,
        }
    }

    fn slot_mut(&mut self, slot: EndpointSlot) -> (&mut Option<RouteEndpoint>, &mut PortChoice) {
        match slot {
            EndpointSlot::Start => (&mut self.start, &mut self.start_choice),
            EndpointSlot::End => (&mut self.end, &mut self.end_choice),
        }
    }

    pub fn start_point(&self) -> Option<MapPoint> {
        self.start.as_ref().map(|e| e.point)
    }

    pub fn end_point(&self) -> Option<MapPoint> {
        self.end.as_ref().map(|e| e.point)
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Choose a port for `slot`, or clear the slot with `None` or an empty
    /// name.
    ///
    /// Returns `false` when the name is not in the catalog; the choice is
    /// still recorded but the endpoint is not moved.
    pub fn select_port(&mut self, slot: EndpointSlot, name: Option<&str>) -> bool {
        let (endpoint, choice) = self.slot_mut(slot);
        match name.filter(|n| !n.is_empty()) {
            None => {
                *endpoint = None;
                *choice = PortChoice::None;
                true
            }
            Some(name) => {
                *choice = PortChoice::Port(name.to_string());
                match find_port(name) {
                    Some(port) => {
                        *endpoint = Some(RouteEndpoint {
                            point: port.position,
                            label: port.name.to_string(),
                        });
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Place a clicked point: fills the start first, then the end.
    ///
    /// Returns the slot that was filled, or `None` if both were already set.
    pub fn place_custom_point(&mut self, point: MapPoint) -> Option<EndpointSlot> {
        let (slot, label) = if self.start.is_none() {
            (EndpointSlot::Start, CUSTOM_ORIGIN_LABEL)
        } else if self.end.is_none() {
            (EndpointSlot::End, CUSTOM_DEST_LABEL)
        } else {
            return None;
        };

        let (endpoint, choice) = self.slot_mut(slot);
        *endpoint = Some(RouteEndpoint {
            point,
            label: label.to_string(),
        });
        *choice = PortChoice::Custom;
        Some(slot)
    }

    /// One-line `"<start> -> <end>"` description for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} -> {}",
            self.slot_summary(EndpointSlot::Start),
            self.slot_summary(EndpointSlot::End)
        )
    }

    fn slot_summary(&self, slot: EndpointSlot) -> String {
        match (self.endpoint(slot), self.choice(slot)) {
            (Some(endpoint), _) => endpoint.label.clone(),
            (None, PortChoice::Port(name)) => format!("? ({name} unknown)"),
            (None, _) => "?".to_string(),
        }
    }

    /// Remove both endpoints and choices.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
