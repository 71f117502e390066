//! `geocell providers` - tile provider catalog.

use geocell::provider::{providers, DEFAULT_TILE_PROVIDER, MIN_TILE_ZOOM};
use geocell::style::{border_color, Theme};

use crate::error::CliError;

pub fn run() -> Result<(), CliError> {
    println!("Tile Providers");
    println!("==============");
    println!();

    for provider in providers() {
        let marker = if provider.id == DEFAULT_TILE_PROVIDER {
            " (default)"
        } else {
            ""
        };
        println!("{}{}", provider.id, marker);
        println!("  Name:        {}", provider.name);
        println!(
            "  Zoom:        {}-{}",
            MIN_TILE_ZOOM,
            provider.source(Theme::Light).max_zoom
        );
        println!(
            "  Border:      {} light / {} dark",
            border_color(Theme::Light, provider.id),
            border_color(Theme::Dark, provider.id)
        );
        println!("  Attribution: {}", provider.light.attribution);
        println!();
    }

    Ok(())
}
