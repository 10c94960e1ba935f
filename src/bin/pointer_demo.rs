//! Pointer demo
//!
//! - `pointer-demo run` - open a window and drive a simulated pointer with the mouse
//! - `pointer-demo check` - run health checks headless and exit with their status

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use winit::event_loop::{ControlFlow, EventLoop};

use sim_pointer::app::App;
use sim_pointer::build_info;
use sim_pointer::config::AppConfig;
use sim_pointer::health;

#[derive(Parser)]
#[command(name = "pointer-demo")]
#[command(about = "Simulated UI pointer demo", version)]
struct Cli {
    /// Configuration profile; defaults to APP_PROFILE, then "release"
    #[arg(short, long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the demo window (default)
    Run,

    /// Run health checks and print a report
    Check,
}

fn load_config(profile: Option<&str>) -> AppConfig {
    let loaded = match profile {
        Some(profile) => AppConfig::load(profile),
        None => AppConfig::load_from_env(),
    };

    loaded.unwrap_or_else(|e| {
        // Logging is not up yet
        eprintln!("Failed to load config ({e}), using default configuration");
        AppConfig::default()
    })
}

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).init();
}

fn run(config: AppConfig) -> Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config).context("Failed to set up input")?;
    event_loop
        .run_app(&mut app)
        .context("Failed to run event loop")?;

    info!("Event loop finished");
    Ok(())
}

fn check() -> i32 {
    let report = health::run_all_checks();
    health::print_report(&report);

    if !report.is_healthy() {
        warn!(failed = report.failed(), "Health checks failed");
    }
    report.exit_code()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.profile.as_deref());
    init_logging(&config);

    info!(version = %build_info::version_string(), profile = %config.profile, "pointer-demo");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(config),
        Commands::Check => std::process::exit(check()),
    }
}
