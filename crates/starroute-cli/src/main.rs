mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use starroute_cli::output::OutputFormat;
use starroute_lib::SessionConfig;

use crate::commands::jumps::{handle_jumps_command, JumpsCommandArgs};
use crate::commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Star system route distance calculator")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Largest route the exact optimizer will accept
    /// (overrides STARROUTE_MAX_OPTIMIZE_POINTS).
    #[arg(long, global = true)]
    max_optimize_points: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the entered and optimized route over a list of systems.
    Route {
        /// Route CSV file(s) to import, in order.
        #[arg(long = "import")]
        import: Vec<PathBuf>,
        /// Additional system as NAME=X,Y,Z, appended after imports.
        #[arg(long = "system")]
        system: Vec<String>,
        /// Ship jump range in light-years (overrides STARROUTE_JUMP_RANGE).
        #[arg(long, allow_negative_numbers = true)]
        jump_range: Option<f64>,
        /// Write the entered route as CSV to this path.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Estimate the jumps needed to cover a distance.
    Jumps {
        /// Distance in light-years.
        #[arg(long)]
        distance: f64,
        /// Ship jump range in light-years.
        #[arg(long, allow_negative_numbers = true)]
        jump_range: f64,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = SessionConfig::from_env();
    if let Some(max) = cli.max_optimize_points {
        config.max_optimize_points = max;
    }

    match cli.command {
        Command::Route {
            import,
            system,
            jump_range,
            export,
        } => {
            if let Some(range) = jump_range {
                config.jump_range = range.into();
            }
            let args = RouteCommandArgs {
                imports: import,
                systems: system,
                export,
            };
            handle_route_command(config, &args, cli.format)
        }
        Command::Jumps {
            distance,
            jump_range,
        } => handle_jumps_command(
            &JumpsCommandArgs {
                distance,
                jump_range: jump_range.into(),
            },
            cli.format,
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
