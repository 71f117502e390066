//! Geohash type definitions

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::coord::{CoordError, GeoPoint, ViewportBounds};

/// Geohash base-32 alphabet (no `a`, `i`, `l`, `o`).
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Longest code supported; 60 bits is the limit of f64 refinement.
pub const MAX_PRECISION: u8 = 12;

/// Returns the 5-bit value of an alphabet character.
#[inline]
pub(crate) fn char_index(byte: u8) -> Option<u8> {
    BASE32.iter().position(|&c| c == byte).map(|i| i as u8)
}

/// A validated geohash cell code.
///
/// Codes are always lowercase, non-empty, at most [`MAX_PRECISION`] long and
/// drawn from [`BASE32`]. Two codes name the same cell exactly when their
/// strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CellCode(String);

impl CellCode {
    /// Parses and validates a code. Uppercase input is accepted and folded.
    pub fn parse(code: &str) -> Result<Self, GeohashError> {
        let normalized = code.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(GeohashError::EmptyCode);
        }
        if normalized.len() > MAX_PRECISION as usize {
            return Err(GeohashError::CodeTooLong(normalized));
        }
        if let Some(ch) = normalized
            .chars()
            .find(|c| !c.is_ascii() || char_index(*c as u8).is_none())
        {
            return Err(GeohashError::InvalidCharacter {
                code: normalized,
                ch,
            });
        }
        Ok(Self(normalized))
    }

    /// Wraps a string the encoder produced.
    pub(crate) fn from_encoded(code: String) -> Self {
        Self(code)
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters, i.e. the precision the code was encoded at.
    pub fn precision(&self) -> u8 {
        self.0.len() as u8
    }
}

impl FromStr for CellCode {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CellCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CellCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Geographic box covered by one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl CellBounds {
    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Midpoint of the cell.
    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lat: (self.south + self.north) / 2.0,
            lon: (self.west + self.east) / 2.0,
        }
    }

    /// Returns true if `point` lies within the cell, widened by `epsilon`.
    pub fn contains(&self, point: GeoPoint, epsilon: f64) -> bool {
        point.lat >= self.south - epsilon
            && point.lat <= self.north + epsilon
            && point.lon >= self.west - epsilon
            && point.lon <= self.east + epsilon
    }

    /// Returns true if the cell overlaps the viewport (edges included).
    pub fn intersects(&self, viewport: &ViewportBounds) -> bool {
        viewport.intersects_box(self.south, self.west, self.north, self.east)
    }
}

/// Errors raised at the geohash codec boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeohashError {
    /// Precision is zero or longer than the codec supports
    #[error("Invalid geohash precision: {0} (must be between 1 and {})", MAX_PRECISION)]
    InvalidPrecision(u8),

    /// Empty code string
    #[error("Invalid geohash: code is empty")]
    EmptyCode,

    /// Code longer than [`MAX_PRECISION`]
    #[error("Invalid geohash '{0}': longer than {} characters", MAX_PRECISION)]
    CodeTooLong(String),

    /// Code contains a character outside the base-32 alphabet
    #[error("Invalid geohash '{code}': character '{ch}' is not in the geohash alphabet")]
    InvalidCharacter { code: String, ch: char },

    /// Point to encode lies outside the world
    #[error("Cannot encode point: {0}")]
    InvalidPoint(#[from] CoordError),
}
