use std::{net::SocketAddr, path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use routeforge::{RouteCalculationService, RouteSummary};
use routeforge_core::model::{Coordinate, RouteRequest, ServiceLevel, Weight, WeightUnit};
use routeforge_server::{AppState, ServerConfig, app_with};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Logistics route planning service
#[derive(Parser, Debug)]
#[command(name = "routeforge", version, about, long_about = None)]
struct Cli {
    /// Verbose output, repeat for more (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API (default)
    Serve(ServeArgs),
    /// Calculate a single route and print it as JSON
    Route(RouteArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Listen address, overrides `[server] bind`
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Origin as LAT,LON
    #[arg(long, value_parser = parse_coordinate)]
    from: Coordinate,

    /// Destination as LAT,LON
    #[arg(long, value_parser = parse_coordinate)]
    to: Coordinate,

    /// Package weight
    #[arg(long)]
    weight: Decimal,

    #[arg(long, default_value = "kg", value_parser = parse_unit)]
    unit: WeightUnit,

    #[arg(long, default_value = "standard", value_parser = parse_service_level)]
    service_level: ServiceLevel,

    /// Strategy name; all strategies are compared when omitted
    #[arg(long)]
    strategy: Option<String>,
}

fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{value}'"))?;
    let lat: Decimal = lat.trim().parse().map_err(|e| format!("latitude: {e}"))?;
    let lon: Decimal = lon.trim().parse().map_err(|e| format!("longitude: {e}"))?;
    Coordinate::new(lat, lon).map_err(|e| e.to_string())
}

fn parse_unit(value: &str) -> Result<WeightUnit, String> {
    value.parse().map_err(|e: routeforge_core::Error| e.to_string())
}

fn parse_service_level(value: &str) -> Result<ServiceLevel, String> {
    value.parse().map_err(|e: routeforge_core::Error| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ServerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("routeforge: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => ServerConfig::default(),
    };

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.server.log_filter)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Some(Command::Route(args)) => run_route(&config, args),
        Some(Command::Serve(args)) => serve(config, args).await,
        None => serve(config, ServeArgs::default()).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: ServerConfig, args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::from_engine_config(&config.engine)?;
    let app = app_with(state, &config.server);

    let addr = args.bind.unwrap_or(config.server.bind);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("routeforge listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("routeforge stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

fn run_route(config: &ServerConfig, args: RouteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = RouteCalculationService::with_defaults(&config.engine)?;
    let request = RouteRequest::new(
        args.from,
        args.to,
        Weight::new(args.weight, args.unit),
        args.service_level,
    );

    let output = match args.strategy {
        Some(name) => {
            let route = service.calculate(&name, &request)?;
            serde_json::to_string_pretty(&RouteSummary::from(&route))?
        }
        None => {
            let summaries: Vec<RouteSummary> = service
                .compare_all(&request)?
                .iter()
                .map(RouteSummary::from)
                .collect();
            serde_json::to_string_pretty(&summaries)?
        }
    };
    println!("{output}");
    Ok(())
}
