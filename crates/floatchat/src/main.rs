mod agent_mode;

use std::path::Path;
use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use ocean_sim::ocean_params::OceanParams;
use ocean_sim::regional_weather::RegionalWeatherChanged;
use ocean_sim::route_plan::RoutePlan;
use ocean_sim::route_risk::RouteAnalysisChanged;

/// Path to a JSON `OceanParams` file.
const PARAMS_ENV: &str = "FLOATCHAT_PARAMS";
/// Overrides the seed from the params file.
const SEED_ENV: &str = "FLOATCHAT_SEED";
/// Any value selects agent mode, same as `--agent`.
const AGENT_ENV: &str = "FLOATCHAT_AGENT";

const USAGE: &str = "usage: floatchat [--agent | route <FROM> <TO>]";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let params = load_params();

    if std::env::var_os(AGENT_ENV).is_some() {
        agent_mode::run_agent_mode(params);
        return;
    }

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] => run_interactive(params),
        ["--agent"] => agent_mode::run_agent_mode(params),
        ["route", from, to] => {
            if let Err(e) = agent_mode::print_route(params, from, to) {
                eprintln!("floatchat: {e}");
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
}

/// Params from `FLOATCHAT_PARAMS`, falling back to defaults on any error.
fn load_params() -> OceanParams {
    let mut params = match std::env::var_os(PARAMS_ENV) {
        Some(path) => OceanParams::load(Path::new(&path)).unwrap_or_else(|e| {
            eprintln!("floatchat: {e}; using default params");
            OceanParams::default()
        }),
        None => OceanParams::default(),
    };

    if let Ok(seed) = std::env::var(SEED_ENV) {
        match seed.trim().parse::<u64>() {
            Ok(seed) => params.seed = seed,
            Err(e) => eprintln!("floatchat: ignoring {SEED_ENV}={seed:?}: {e}"),
        }
    }
    params
}

/// Real-time session with logging; runs until the process is stopped.
fn run_interactive(params: OceanParams) {
    let frame = Duration::from_secs_f64(1.0 / 60.0);
    let mut app = App::new();
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(frame)))
        .add_plugins(LogPlugin::default())
        .insert_resource(params)
        .add_plugins(ocean_sim::OceanSimPlugin)
        .add_systems(Update, (log_weather_changes, log_route_changes));
    app.run();
}

fn log_route_changes(plan: Res<RoutePlan>, mut changes: EventReader<RouteAnalysisChanged>) {
    for change in changes.read() {
        match change.status {
            Some(status) => info!("Route {}: {}", plan.summary(), status.name()),
            None => info!("Route {}: incomplete", plan.summary()),
        }
    }
}

fn log_weather_changes(mut changes: EventReader<RegionalWeatherChanged>) {
    for change in changes.read() {
        info!(
            "Weather update for {}: {}",
            change.region.name(),
            change.condition.name()
        );
    }
}
