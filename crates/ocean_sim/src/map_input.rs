//! Map interaction: mode switching, region focus, and route editing.
//!
//! Front-ends (or the agent protocol) send [`MapCommand`] events; a single
//! system applies them in order at the start of the frame, so the route
//! analysis computed later in the same frame already sees the change.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::plane::MapPoint;
use crate::regions::{MapView, OceanRegion, SelectedRegion};
use crate::route_plan::{EndpointSlot, RoutePlan};
use crate::simulation_sets::MapUpdateSet;

/// What clicks on the map do.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapMode {
    /// Browse regions; a click resets the view.
    #[default]
    Exploration,
    /// Plan a route; a click places an endpoint.
    Routing,
}

#[derive(Event, Debug, Clone, PartialEq)]
pub enum MapCommand {
    /// Pick a catalog port for a route slot, or clear it with `None`.
    SelectPort {
        slot: EndpointSlot,
        port: Option<String>,
    },
    /// A click on the map plane.
    ClickMap { point: MapPoint },
    /// Reset the view (exploration) or the route (routing).
    Reset,
    SetMode { mode: MapMode },
    SelectRegion { region: OceanRegion },
}

fn focus_region(
    region: &mut ResMut<SelectedRegion>,
    view: &mut ResMut<MapView>,
    target: OceanRegion,
) {
    region.set_if_neq(SelectedRegion(target));
    view.set_if_neq(MapView(target.view()));
}

/// Apply every pending `MapCommand` in arrival order.
pub fn apply_map_commands(
    mut commands: EventReader<MapCommand>,
    mut mode: ResMut<MapMode>,
    mut plan: ResMut<RoutePlan>,
    mut region: ResMut<SelectedRegion>,
    mut view: ResMut<MapView>,
) {
    for command in commands.read() {
        match command {
            MapCommand::SelectPort { slot, port } => {
                if !plan.select_port(*slot, port.as_deref()) {
                    warn!(
                        "Unknown port {:?} for {:?} endpoint, keeping previous endpoint",
                        port, slot
                    );
                }
            }
            MapCommand::ClickMap { point } => match *mode {
                MapMode::Exploration => focus_region(&mut region, &mut view, OceanRegion::All),
                MapMode::Routing => {
                    if !point.is_on_map() {
                        debug!("Map click {:?} outside the plane, clamping", point);
                    }
                    match plan.place_custom_point(point.clamped()) {
                        Some(slot) => debug!("Custom {:?} endpoint placed", slot),
                        None => debug!("Route already has both endpoints, click ignored"),
                    }
                }
            },
            MapCommand::Reset => match *mode {
                MapMode::Exploration => focus_region(&mut region, &mut view, OceanRegion::All),
                MapMode::Routing => plan.clear(),
            },
            MapCommand::SetMode { mode: new_mode } => {
                if mode.set_if_neq(*new_mode) {
                    info!("Map mode: {:?}", new_mode);
                }
            }
            MapCommand::SelectRegion { region: target } => {
                focus_region(&mut region, &mut view, *target);
            }
        }
    }
}

pub struct MapInputPlugin;

impl Plugin for MapInputPlugin {
    fn build(&self, app: &mut App) {
        let initial_mode = app
            .world()
            .get_resource::<crate::ocean_params::OceanParams>()
            .map(|p| p.initial_mode)
            .unwrap_or_default();

        app.insert_resource(initial_mode)
            .init_resource::<RoutePlan>()
            .init_resource::<SelectedRegion>()
            .init_resource::<MapView>()
            .add_event::<MapCommand>()
            .add_systems(Update, apply_map_commands.in_set(MapUpdateSet::Input));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_mode(mode: MapMode) -> App {
        let mut app = App::new();
        app.insert_resource(crate::ocean_params::OceanParams {
            initial_mode: mode,
            ..Default::default()
        });
        app.add_plugins((crate::simulation_sets::SimulationSetsPlugin, MapInputPlugin));
        app.update();
        app
    }

    fn send(app: &mut App, command: MapCommand) {
        app.world_mut().send_event(command);
        app.update();
    }

    #[test]
    fn test_initial_mode_comes_from_params() {
        let app = app_with_mode(MapMode::Routing);
        assert_eq!(*app.world().resource::<MapMode>(), MapMode::Routing);
    }

    #[test]
    fn test_click_in_routing_mode_places_points() {
        let mut app = app_with_mode(MapMode::Routing);
        send(
            &mut app,
            MapCommand::ClickMap {
                point: MapPoint::new(10.0, 20.0),
            },
        );
        send(
            &mut app,
            MapCommand::ClickMap {
                point: MapPoint::new(130.0, 40.0),
            },
        );
        let plan = app.world().resource::<RoutePlan>();
        assert_eq!(plan.start_point(), Some(MapPoint::new(10.0, 20.0)));
        assert_eq!(plan.end_point(), Some(MapPoint::new(100.0, 40.0)));
    }

    #[test]
    fn test_click_in_exploration_mode_resets_region() {
        let mut app = app_with_mode(MapMode::Exploration);
        send(
            &mut app,
            MapCommand::SelectRegion {
                region: OceanRegion::Pacific,
            },
        );
        assert_eq!(
            app.world().resource::<SelectedRegion>().0,
            OceanRegion::Pacific
        );
        assert_eq!(
            app.world().resource::<MapView>().0,
            OceanRegion::Pacific.view()
        );

        send(
            &mut app,
            MapCommand::ClickMap {
                point: MapPoint::new(50.0, 50.0),
            },
        );
        assert_eq!(app.world().resource::<SelectedRegion>().0, OceanRegion::All);
        assert_eq!(app.world().resource::<MapView>().0, OceanRegion::All.view());
        assert!(!app.world().resource::<RoutePlan>().is_complete());
        assert!(app.world().resource::<RoutePlan>().start.is_none());
    }

    #[test]
    fn test_reset_depends_on_mode() {
        let mut app = app_with_mode(MapMode::Routing);
        send(
            &mut app,
            MapCommand::SelectPort {
                slot: EndpointSlot::Start,
                port: Some("London".into()),
            },
        );
        send(
            &mut app,
            MapCommand::SelectRegion {
                region: OceanRegion::NorthAtlantic,
            },
        );
        send(&mut app, MapCommand::Reset);
        // Routing reset clears the route but leaves the region alone.
        assert!(app.world().resource::<RoutePlan>().start.is_none());
        assert_eq!(
            app.world().resource::<SelectedRegion>().0,
            OceanRegion::NorthAtlantic
        );

        send(
            &mut app,
            MapCommand::SetMode {
                mode: MapMode::Exploration,
            },
        );
        send(&mut app, MapCommand::Reset);
        assert_eq!(app.world().resource::<SelectedRegion>().0, OceanRegion::All);
    }

    #[test]
    fn test_commands_apply_in_order_within_one_frame() {
        let mut app = app_with_mode(MapMode::Routing);
        app.world_mut().send_event(MapCommand::SelectPort {
            slot: EndpointSlot::Start,
            port: Some("Tokyo".into()),
        });
        app.world_mut().send_event(MapCommand::SelectPort {
            slot: EndpointSlot::Start,
            port: None,
        });
        app.world_mut().send_event(MapCommand::SelectPort {
            slot: EndpointSlot::End,
            port: Some("Sydney".into()),
        });
        app.update();
        let plan = app.world().resource::<RoutePlan>();
        assert!(plan.start.is_none());
        assert_eq!(plan.end.as_ref().unwrap().label, "Sydney");
    }
}
