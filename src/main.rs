//! LazyMotion - Terminal pose scrubber for motion tracking CSV files
//!
//! Load per-frame keypoint data, scrub through the frames while watching
//! the skeleton, flag frames of interest, and export the annotated CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lazymotion::cli::{ExportArgs, InspectArgs, RenderArgs, ResolveArgs};
use lazymotion::config::Config;
use lazymotion::constants::{APP_BINARY_NAME, APP_NAME};
use lazymotion::logging::{self, LogTarget};
use lazymotion::tui;

/// LazyMotion - Terminal pose scrubber for motion tracking CSV files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Motion CSV file to open in the interactive viewer
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show a load summary or a single frame
    Inspect(InspectArgs),
    /// Resolve a time in seconds to a frame index
    Resolve(ResolveArgs),
    /// Render a frame's skeleton as SVG
    Render(RenderArgs),
    /// Flag frames and write the annotated CSV
    Export(ExportArgs),
}

fn run_command(command: &Commands, cli: &Cli) {
    let target = cli
        .log_file
        .clone()
        .map_or(LogTarget::Stderr, LogTarget::File);
    if let Err(e) = logging::init(&target, cli.verbose) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let result = match command {
        Commands::Inspect(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Export(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run_interactive(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.file {
        if !path.exists() {
            eprintln!("Error: Motion file not found: {}", path.display());
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {APP_BINARY_NAME} recording.csv");
            eprintln!("  {APP_BINARY_NAME} inspect recording.csv");
            eprintln!();
            eprintln!("For more options, run:");
            eprintln!("  {APP_BINARY_NAME} --help");
            std::process::exit(1);
        }
    }

    // Logs go to a file so they never land on the alternate screen
    let log_path = match &cli.log_file {
        Some(path) => Some(path.clone()),
        None => logging::default_log_file().ok(),
    };
    if let Some(path) = log_path {
        if let Err(e) = logging::init(&LogTarget::File(path), cli.verbose) {
            eprintln!("Warning: logging disabled: {e:#}");
        }
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config, using defaults: {e:#}");
            Config::default()
        }
    };

    let mut app_state = tui::AppState::new(config);
    if let Some(path) = &cli.file {
        // Failures are shown in the error overlay once the UI is up
        app_state.load_file(path);
    }

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app_state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result?;

    println!("{APP_NAME} v{} closed", env!("CARGO_PKG_VERSION"));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(command) => {
            run_command(command, &cli);
            Ok(())
        }
        None => run_interactive(&cli),
    }
}
