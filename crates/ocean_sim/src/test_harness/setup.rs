//! Builder methods for hazards, mode and route setup.

use crate::hazards::{HazardField, HazardIntensity, HazardKind, HazardZone};
use crate::map_input::{MapCommand, MapMode};
use crate::plane::MapPoint;
use crate::regions::OceanRegion;
use crate::route_plan::EndpointSlot;

use super::TestOcean;

impl TestOcean {
    /// Replace the generated hazard field and run a frame.
    pub fn with_hazards(mut self, zones: Vec<HazardZone>) -> Self {
        self.app.world_mut().insert_resource(HazardField::new(zones));
        self.app.update();
        self
    }

    /// Replace the hazard field with no hazards at all.
    pub fn without_hazards(self) -> Self {
        self.with_hazards(Vec::new())
    }

    pub fn in_routing_mode(mut self) -> Self {
        self.send(MapCommand::SetMode {
            mode: MapMode::Routing,
        });
        self
    }

    /// Queue a command and run the frame that applies it.
    pub fn send(&mut self, command: MapCommand) -> &mut Self {
        self.app.world_mut().send_event(command);
        self.app.update();
        self
    }

    pub fn select_port(&mut self, slot: EndpointSlot, port: Option<&str>) -> &mut Self {
        self.send(MapCommand::SelectPort {
            slot,
            port: port.map(str::to_string),
        })
    }

    pub fn click(&mut self, x: f64, y: f64) -> &mut Self {
        self.send(MapCommand::ClickMap {
            point: MapPoint::new(x, y),
        })
    }

    pub fn reset(&mut self) -> &mut Self {
        self.send(MapCommand::Reset)
    }

    pub fn focus(&mut self, region: OceanRegion) -> &mut Self {
        self.send(MapCommand::SelectRegion { region })
    }
}

/// Shorthand for a storm hazard in tests.
pub fn storm(id: &str, x: f64, y: f64, radius: f64, intensity: HazardIntensity) -> HazardZone {
    HazardZone::new(
        id,
        format!("Storm {id}"),
        MapPoint::new(x, y),
        radius,
        intensity,
        HazardKind::Storm,
    )
    .expect("test hazard radius must be positive")
}
