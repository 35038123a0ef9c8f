//! Headless `--agent` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`ocean_sim::agent_protocol`] for the full schema.

use std::io::{BufRead, Write};

use ocean_sim::agent_protocol::{
    encode_response, make_response, parse_command, process_command, AgentCommand,
    AgentResponse, ResponsePayload, PROTOCOL_VERSION,
};
use ocean_sim::ocean_params::OceanParams;
use ocean_sim::route_plan::EndpointSlot;

fn emit(out: &mut impl Write, response: &AgentResponse) {
    let _ = writeln!(out, "{}", encode_response(response));
    let _ = out.flush();
}

pub fn run_agent_mode(params: OceanParams) {
    let seed = params.seed;
    let mut app = ocean_sim::headless_app(params);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    // Tell the external program we are live.
    emit(&mut stdout, &make_response(ResponsePayload::Ready));

    // Diagnostics go to stderr so they do not interfere with stdout.
    eprintln!("floatchat agent mode v{PROTOCOL_VERSION} ready (seed {seed})");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match parse_command(&line) {
            Ok(cmd) => process_command(cmd, &mut app),
            Err(error) => error,
        };
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        emit(&mut stdout, &response);

        if is_goodbye {
            break;
        }
    }

    eprintln!("floatchat agent mode shutting down");
}

/// One-shot: score the route between two catalog ports and print the
/// analysis as pretty JSON.
pub fn print_route(params: OceanParams, from: &str, to: &str) -> Result<(), String> {
    let mut app = ocean_sim::headless_app(params);

    for (slot, port) in [(EndpointSlot::Start, from), (EndpointSlot::End, to)] {
        let cmd = AgentCommand::SelectPort {
            slot,
            port: Some(port.to_string()),
        };
        if let ResponsePayload::Error { message } = process_command(cmd, &mut app).payload {
            return Err(message);
        }
    }

    let ResponsePayload::Observation { observation } =
        process_command(AgentCommand::Observe, &mut app).payload
    else {
        return Err("no observation available".to_string());
    };
    let analysis = observation
        .analysis
        .ok_or_else(|| "route has no analysis".to_string())?;
    let json = serde_json::to_string_pretty(&analysis).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
