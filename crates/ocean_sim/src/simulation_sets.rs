//! System ordering for the map simulation.
//!
//! # Update phases (`MapUpdateSet`)
//!
//! ```text
//! Input  →  Analysis  →  Report
//! ```
//!
//! * **Input** – Apply queued `MapCommand`s to the mode, region, view and
//!   route plan.
//! * **Analysis** – Recompute everything derived from that state: route
//!   analysis, weather for a newly selected region.
//! * **Report** – Read-only snapshotting for external consumers.
//!
//! A command sent before a frame is therefore reflected in the same frame's
//! analysis and observation.
//!
//! # FixedUpdate phases (`SimulationSet`)
//!
//! ```text
//! PreSim  →  Simulation
//! ```
//!
//! * **PreSim** – Tick counter.
//! * **Simulation** – Interval-driven generators (weather refresh).

use bevy::prelude::*;

/// Ordered phases for systems running in the `Update` schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MapUpdateSet {
    Input,
    Analysis,
    Report,
}

/// Ordered phases for systems running in the `FixedUpdate` schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    PreSim,
    Simulation,
}

pub struct SimulationSetsPlugin;

impl Plugin for SimulationSetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                MapUpdateSet::Input,
                MapUpdateSet::Analysis,
                MapUpdateSet::Report,
            )
                .chain(),
        )
        .configure_sets(
            FixedUpdate,
            (SimulationSet::PreSim, SimulationSet::Simulation).chain(),
        );
    }
}
