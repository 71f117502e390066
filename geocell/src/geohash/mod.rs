//! Geohash codec
//!
//! Converts between geographic points and fixed-length geohash cell codes.
//! Encoding interleaves longitude and latitude bisection bits (longitude
//! first) and packs every five bits into one base-32 character.
//!
//! # Example
//!
//! ```
//! use geocell::coord::GeoPoint;
//! use geocell::geohash::{decode_bounds, encode};
//!
//! let point = GeoPoint::new(57.64911, 10.40744).unwrap();
//! let code = encode(point, 11).unwrap();
//! assert_eq!(code.as_str(), "u4pruydqqvj");
//! assert!(decode_bounds(&code).contains(point, 1e-9));
//! ```

mod types;


pub use types::{CellBounds, CellCode, GeohashError, BASE32, MAX_PRECISION};

use crate::coord::{GeoPoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use types::char_index;

/// Checks that `precision` is in `1..=MAX_PRECISION`.
#[inline]
pub fn validate_precision(precision: u8) -> Result<u8, GeohashError> {
    if precision == 0 || precision > MAX_PRECISION {
        return Err(GeohashError::InvalidPrecision(precision));
    }
    Ok(precision)
}

/// Number of (latitude, longitude) bits a code of `precision` characters holds.
#[inline]
pub(crate) fn lattice_bits(precision: u8) -> (u32, u32) {
    let total = precision as u32 * 5;
    let lat_bits = total / 2;
    (lat_bits, total - lat_bits)
}

/// Encodes a point into the cell code containing it.
///
/// A coordinate sitting exactly on a bisection line goes to the upper
/// (north/east) half.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidPrecision`] for precision 0 or above
/// [`MAX_PRECISION`], and [`GeohashError::InvalidPoint`] for points outside
/// the world.
pub fn encode(point: GeoPoint, precision: u8) -> Result<CellCode, GeohashError> {
    validate_precision(precision)?;
    let point = GeoPoint::new(point.lat, point.lon)?;

    let mut lat_range = (MIN_LAT, MAX_LAT);
    let mut lon_range = (MIN_LON, MAX_LON);
    let mut even = true;
    let mut code = String::with_capacity(precision as usize);

    for _ in 0..precision {
        let mut index = 0usize;
        for _ in 0..5 {
            let (range, value) = if even {
                (&mut lon_range, point.lon)
            } else {
                (&mut lat_range, point.lat)
            };
            let mid = (range.0 + range.1) / 2.0;
            index <<= 1;
            if value >= mid {
                index |= 1;
                range.0 = mid;
            } else {
                range.1 = mid;
            }
            even = !even;
        }
        code.push(BASE32[index] as char);
    }

    Ok(CellCode::from_encoded(code))
}

/// Returns the bounding box of a cell.
pub fn decode_bounds(code: &CellCode) -> CellBounds {
    let mut lat_range = (MIN_LAT, MAX_LAT);
    let mut lon_range = (MIN_LON, MAX_LON);
    let mut even = true;

    for value in code.as_str().bytes().filter_map(char_index) {
        for shift in (0..5).rev() {
            let range = if even {
                &mut lon_range
            } else {
                &mut lat_range
            };
            let mid = (range.0 + range.1) / 2.0;
            if (value >> shift) & 1 == 1 {
                range.0 = mid;
            } else {
                range.1 = mid;
            }
            even = !even;
        }
    }

    CellBounds {
        south: lat_range.0,
        west: lon_range.0,
        north: lat_range.1,
        east: lon_range.1,
    }
}

/// Parses `code` and returns its bounding box.
///
/// Malformed codes are rejected here so nothing downstream renders them.
pub fn decode_bounds_str(code: &str) -> Result<CellBounds, GeohashError> {
    CellCode::parse(code).map(|code| decode_bounds(&code))
}

/// Returns the center point of a cell.
pub fn decode(code: &CellCode) -> GeoPoint {
    decode_bounds(code).center()
}

/// Height and width in degrees of every cell at `precision`.
///
/// At a fixed precision the geohash grid is a regular lat/lon lattice, so
/// all cells share these dimensions.
pub fn cell_size(precision: u8) -> Result<(f64, f64), GeohashError> {
    validate_precision(precision)?;
    let (lat_bits, lon_bits) = lattice_bits(precision);
    let height = (MAX_LAT - MIN_LAT) / 2.0_f64.powi(lat_bits as i32);
    let width = (MAX_LON - MIN_LON) / 2.0_f64.powi(lon_bits as i32);
    Ok((height, width))
}
