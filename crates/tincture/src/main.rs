// ABOUTME: Command-line entry point for deriving, adapting, auditing and exporting palettes
// ABOUTME: Parses arguments, initializes logging and dispatches to command handlers

use std::panic;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tincture_logging::{Level, LoggingConfig, error};
use tincture_types::{ExportFormat, HarmonyMode, Rgb, Role};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "tinct")]
#[command(about = "Derive accessible color palettes from a seed color")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a tincture.toml configuration file
    #[arg(long, global = true, env = "TINCTURE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a full palette from a seed color
    Derive {
        /// Seed color as #rrggbb
        seed: Rgb,

        #[command(flatten)]
        generation: GenerationArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Regenerate a palette from locked colors, or a random hue when none carry one
    Random {
        /// Seed for the random source, for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        generation: GenerationArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Adapt an existing palette (JSON, `-` for stdin) to light or dark mode
    Adapt {
        palette: PathBuf,

        /// Target dark mode
        #[arg(long, conflicts_with = "light")]
        dark: bool,

        /// Target light mode
        #[arg(long)]
        light: bool,

        /// Role to keep exactly as it is (repeatable)
        #[arg(long = "lock", value_name = "ROLE")]
        locks: Vec<Role>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check a palette (JSON, `-` for stdin) against its contrast goals
    Audit { palette: PathBuf },

    /// Render a palette (JSON, `-` for stdin) in another format
    Export {
        palette: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show a color in every supported color model
    Convert {
        /// Color as #rrggbb
        color: Rgb,
    },
}

#[derive(clap::Args)]
struct GenerationArgs {
    /// Derive a dark mode palette
    #[arg(long)]
    dark: bool,

    /// Accent hue relationship: complementary or monochromatic
    #[arg(long)]
    harmony: Option<HarmonyMode>,

    /// Keep a role at a fixed color, as role=#rrggbb (repeatable)
    #[arg(long = "lock", value_name = "ROLE=HEX", value_parser = parse_lock)]
    locks: Vec<(Role, Rgb)>,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Output format: css, scss, tailwind or json
    #[arg(long, short)]
    format: Option<ExportFormat>,
}

fn parse_lock(value: &str) -> Result<(Role, Rgb), String> {
    let (role, color) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ROLE=HEX, got `{value}`"))?;
    let role: Role = role.parse().map_err(|e| format!("{e}"))?;
    let color: Rgb = color.parse().map_err(|e| format!("{e}"))?;
    Ok((role, color))
}

fn install_panic_handler() {
    panic::set_hook(Box::new(|info| {
        error!("Application panic: {info}");
        eprintln!("Fatal error: {info}");
        std::process::exit(1);
    }));
}

fn log_level(verbose: u8) -> Option<Level> {
    match verbose {
        0 => None,
        1 => Some(Level::INFO),
        2 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env()?;
    if let Some(level) = log_level(cli.verbose) {
        logging = logging.with_level(level);
    }
    let _logging_guard = tincture_logging::init_logging(logging)?;

    install_panic_handler();

    let settings = config::load(cli.config.as_deref())?;
    commands::run(cli.command, &settings)
}
