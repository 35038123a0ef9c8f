//! Agent text protocol for the headless `--agent` mode.
//!
//! External programs (scripts, test harnesses, the web front-end's bridge)
//! drive the map over newline-delimited JSON on stdin/stdout. Command and
//! response types plus the dispatcher live here so they can be tested
//! without the binary; the I/O loop lives in `crates/floatchat`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::map_input::{MapCommand, MapMode};
use crate::observation::{CurrentObservation, MapObservation};
use crate::plane::MapPoint;
use crate::ports::find_port;
use crate::regions::OceanRegion;
use crate::route_plan::EndpointSlot;
use crate::TickCounter;

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

/// Upper bound on ticks a single `step` may run.
pub const MAX_STEP_TICKS: u64 = 10_000;

// ---------------------------------------------------------------------------
// Commands (stdin → simulation)
// ---------------------------------------------------------------------------

/// A single command sent by the external agent. The `cmd` field is the tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Request the current map observation.
    Observe,
    /// Pick a port for a route slot; omit `port` or send `""` to clear it.
    SelectPort {
        slot: EndpointSlot,
        port: Option<String>,
    },
    /// Click the map at plane coordinates.
    ClickMap { x: f64, y: f64 },
    Reset,
    SetMode { mode: MapMode },
    SelectRegion { region: OceanRegion },
    /// Advance the simulation by `ticks` fixed ticks.
    Step { ticks: u64 },
    /// End the session.
    Quit,
}

impl AgentCommand {
    /// The map command this protocol command maps to, if any.
    pub fn to_map_command(&self) -> Option<MapCommand> {
        match self {
            AgentCommand::SelectPort { slot, port } => Some(MapCommand::SelectPort {
                slot: *slot,
                port: port.clone(),
            }),
            AgentCommand::ClickMap { x, y } => Some(MapCommand::ClickMap {
                point: MapPoint::new(*x, *y),
            }),
            AgentCommand::Reset => Some(MapCommand::Reset),
            AgentCommand::SetMode { mode } => Some(MapCommand::SetMode { mode: *mode }),
            AgentCommand::SelectRegion { region } => {
                Some(MapCommand::SelectRegion { region: *region })
            }
            AgentCommand::Observe | AgentCommand::Step { .. } | AgentCommand::Quit => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Responses (simulation → stdout)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponsePayload {
    /// The session is ready to accept commands.
    Ready,
    Observation { observation: MapObservation },
    /// The simulation advanced; reports the tick counter.
    StepComplete { tick: u64 },
    /// Generic acknowledgement.
    Ok,
    Error { message: String },
    /// Response to `quit`.
    Goodbye,
}

/// Wrap a payload with the current protocol version.
pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

/// Parse one line of input. Parse failures become `error` responses.
pub fn parse_command(line: &str) -> Result<AgentCommand, AgentResponse> {
    serde_json::from_str(line).map_err(|e| {
        make_response(ResponsePayload::Error {
            message: format!("Parse error: {e}"),
        })
    })
}

/// Serialize a response to one line of JSON.
pub fn encode_response(response: &AgentResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(
            "{{\"protocol_version\":{PROTOCOL_VERSION},\"type\":\"error\",\"message\":\"encode error: {e}\"}}"
        )
    })
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

fn observation_of(app: &App) -> Option<MapObservation> {
    app.world()
        .get_resource::<CurrentObservation>()
        .and_then(|c| c.observation.clone())
}

/// Execute one command against a headless app built by `headless_app`.
pub fn process_command(cmd: AgentCommand, app: &mut App) -> AgentResponse {
    if let AgentCommand::SelectPort {
        port: Some(name), ..
    } = &cmd
    {
        if !name.is_empty() && find_port(name).is_none() {
            return make_response(ResponsePayload::Error {
                message: format!("Unknown port: {name}"),
            });
        }
    }

    if let Some(map_command) = cmd.to_map_command() {
        app.world_mut().send_event(map_command);
        app.update();
        return make_response(ResponsePayload::Ok);
    }

    match cmd {
        AgentCommand::Observe => match observation_of(app) {
            Some(observation) => make_response(ResponsePayload::Observation { observation }),
            None => make_response(ResponsePayload::Error {
                message: "no observation available yet".to_string(),
            }),
        },
        AgentCommand::Step { ticks } => {
            crate::advance_ticks(app, ticks.min(MAX_STEP_TICKS));
            let tick = app
                .world()
                .get_resource::<TickCounter>()
                .map(|t| t.0)
                .unwrap_or(0);
            make_response(ResponsePayload::StepComplete { tick })
        }
        AgentCommand::Quit => make_response(ResponsePayload::Goodbye),
        // Map commands were handled above.
        _ => make_response(ResponsePayload::Ok),
    }
}
