//! Route command handler for calculating entered and optimized routes.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use starroute_cli::input::parse_system;
use starroute_cli::output::{render_calculation, OutputFormat};
use starroute_lib::{RouteSession, SessionConfig};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Route CSV files imported in order.
    pub imports: Vec<PathBuf>,
    /// Systems given as `NAME=X,Y,Z`, appended after imports.
    pub systems: Vec<String>,
    /// Destination for the entered route as CSV.
    pub export: Option<PathBuf>,
}

/// Handle the route subcommand.
pub fn handle_route_command(
    config: SessionConfig,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    config.validate().context("invalid session configuration")?;
    let mut session = RouteSession::new(config);

    for path in &args.imports {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read route from {}", path.display()))?;
        let imported = session
            .import_csv(&text)
            .with_context(|| format!("failed to import route from {}", path.display()))?;
        info!(path = %path.display(), imported, "imported route CSV");
    }

    for spec in &args.systems {
        session.add_system(parse_system(spec)?);
    }

    if let Some(path) = &args.export {
        let text = session
            .export_csv()
            .context("failed to encode route")?
            .context("no systems to export; add systems with --import or --system")?;
        fs::write(path, text)
            .with_context(|| format!("failed to export route to {}", path.display()))?;
        info!(path = %path.display(), "exported route CSV");
    }

    let Some(calculation) = session.calculate().context("failed to calculate route")? else {
        println!("Please add at least two systems");
        return Ok(());
    };

    print!(
        "{}",
        render_calculation(&calculation, session.history(), format)?
    );
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
