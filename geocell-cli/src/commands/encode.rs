//! `geocell encode` - coordinate to cell code.

use clap::Args;
use geocell::coord::GeoPoint;
use geocell::geohash;
use geocell::overlay::GEOHASH_PRECISION;

use crate::error::CliError;

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Code length (1-12)
    #[arg(long, default_value_t = GEOHASH_PRECISION)]
    pub precision: u8,
}

pub fn run(args: EncodeArgs) -> Result<(), CliError> {
    let point =
        GeoPoint::new(args.lat, args.lon).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let code = geohash::encode(point, args.precision)?;
    println!("{}", code);
    Ok(())
}
