//! `geocell decode` - cell code to bounds.

use clap::Args;
use geocell::geohash::{self, CellCode};

use crate::error::CliError;

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Cell code, e.g. sx8d9x3s
    pub code: String,
}

pub fn run(args: DecodeArgs) -> Result<(), CliError> {
    let code = CellCode::parse(&args.code)?;
    let bounds = geohash::decode_bounds(&code);

    println!("Cell:      {}", code);
    println!("Precision: {}", code.precision());
    println!("South:     {:.6}", bounds.south);
    println!("West:      {:.6}", bounds.west);
    println!("North:     {:.6}", bounds.north);
    println!("East:      {:.6}", bounds.east);
    println!("Center:    {}", bounds.center());
    Ok(())
}
