//! `geocell render` - run the overlay pipeline once for a viewport.

use clap::{Args, ValueEnum};
use geocell::active::ActiveSet;
use geocell::engine::{OverlayEngine, StaticHost};
use geocell::geohash::CellCode;
use geocell::overlay::{export, OverlayLayer, RecomputeOutcome};
use geocell::provider::find_provider;
use geocell::style::Theme;
use tracing::warn;

use super::common::{Context, ViewportArgs};
use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// GeoJSON FeatureCollection of the drawn cells
    Geojson,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub viewport: ViewportArgs,

    /// light or dark (default from config)
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Tile provider id (default from config)
    #[arg(long)]
    pub provider: Option<String>,

    /// Active cell codes (default from config)
    #[arg(long, value_name = "CODE", num_args = 1..)]
    pub active: Vec<CellCode>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(context: &Context, args: RenderArgs) -> Result<(), CliError> {
    let config = context.load_config()?;
    let _logging = context.init_logging(&config)?;

    let (bounds, zoom) = args.viewport.resolve(&config)?;
    let theme = args.theme.unwrap_or(config.map.theme);
    let provider_id = args
        .provider
        .map(|p| p.to_lowercase())
        .unwrap_or_else(|| config.map.tile_provider.clone());

    let provider = find_provider(&provider_id).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if let Err(e) = provider.check_zoom(zoom, theme) {
        warn!(provider = provider.id, zoom, "{}", e);
    }

    let active = if args.active.is_empty() {
        config.active_set()?
    } else {
        args.active.into_iter().collect::<ActiveSet>()
    };

    let host = StaticHost::new(bounds, zoom, theme, provider.id);
    let mut engine = OverlayEngine::new(host, config.overlay_config())?;
    let outcome = engine.on_viewport_settled(&active)?;
    let shown = engine.host().shown();

    match args.format {
        OutputFormat::Text => print_text(&outcome, shown),
        OutputFormat::Geojson => print_geojson(shown)?,
    }
    Ok(())
}

fn print_text(outcome: &RecomputeOutcome, shown: Option<&OverlayLayer>) {
    match outcome {
        RecomputeOutcome::BelowMinZoom { zoom, min_zoom } => {
            println!("Overlay hidden: zoom {} is below {}", zoom, min_zoom);
        }
        RecomputeOutcome::Rejected(exceeded) => {
            println!("Overlay not drawn: {}", exceeded);
        }
        RecomputeOutcome::Rendered { cells, shapes } => {
            println!("Overlay shown: {} of {} visible cells active", shapes, cells);
            if let Some(layer) = shown {
                let style = layer.style();
                println!(
                    "Style: border {} ({}px), fill {} at {}",
                    style.border_color, style.border_weight, style.fill_color, style.fill_opacity
                );
                for shape in layer.shapes() {
                    println!(
                        "  {}  {:.6},{:.6} .. {:.6},{:.6}",
                        shape.code,
                        shape.bounds.south,
                        shape.bounds.west,
                        shape.bounds.north,
                        shape.bounds.east
                    );
                }
            }
        }
    }
}

fn print_geojson(shown: Option<&OverlayLayer>) -> Result<(), CliError> {
    let value = match shown {
        Some(layer) => export::to_geojson(layer),
        None => export::empty_collection(),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
