//! Jumps command handler for single-distance estimates.

use anyhow::Result;

use starroute_cli::output::{render_jump_estimate, OutputFormat};
use starroute_lib::{estimate_jumps, RangeLimit};

/// Arguments for the jumps command.
#[derive(Debug, Clone, Copy)]
pub struct JumpsCommandArgs {
    pub distance: f64,
    pub jump_range: RangeLimit,
}

/// Handle the jumps subcommand.
pub fn handle_jumps_command(args: &JumpsCommandArgs, format: OutputFormat) -> Result<()> {
    let estimate = estimate_jumps(args.distance, args.jump_range);
    print!(
        "{}",
        render_jump_estimate(args.distance, args.jump_range, estimate, format)?
    );
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
