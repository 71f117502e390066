//! `geocell cells` - list the cells covering a viewport.

use clap::Args;
use geocell::grid::{self, CoverageStrategy};
use geocell::guard::CostGuard;
use tracing::info;

use super::common::{Context, ViewportArgs};
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct CellsArgs {
    #[command(flatten)]
    pub viewport: ViewportArgs,

    /// Code length (default from config)
    #[arg(long)]
    pub precision: Option<u8>,

    /// lattice or exact (default from config)
    #[arg(long)]
    pub coverage: Option<CoverageStrategy>,

    /// Refuse viewports needing more cells (default from config)
    #[arg(long)]
    pub max_cells: Option<usize>,

    /// Print only the count
    #[arg(long)]
    pub count: bool,
}

pub fn run(context: &Context, args: CellsArgs) -> Result<(), CliError> {
    let config = context.load_config()?;
    let _logging = context.init_logging(&config)?;

    let (bounds, _zoom) = args.viewport.resolve(&config)?;
    let precision = args.precision.unwrap_or(config.overlay.precision);
    let coverage = args.coverage.unwrap_or(config.overlay.coverage);
    let guard = CostGuard::new(args.max_cells.unwrap_or(config.overlay.max_cells));

    guard.check_lower_bound(
        grid::lower_bound_cell_count(&bounds, precision, coverage)?,
        coverage,
    )?;
    let cells = guard.check(grid::enumerate_with(&bounds, precision, coverage)?)?;

    info!(
        cells = cells.len(),
        precision,
        coverage = %coverage,
        "Enumerated viewport"
    );

    println!(
        "{} cells at precision {} ({}) for {}",
        cells.len(),
        precision,
        coverage,
        bounds
    );
    if !args.count {
        for code in &cells {
            println!("{}", code);
        }
    }
    Ok(())
}
