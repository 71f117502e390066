//! Coordinate type definitions

use std::fmt;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Web Mercator latitude limit used by slippy-map viewports
pub const MERCATOR_MAX_LAT: f64 = 85.05112878;

/// Deepest zoom level a viewport can be derived for
pub const MAX_ZOOM: u8 = 22;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude (-90 to 90)
    pub lat: f64,
    /// Longitude (-180 to 180)
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a point, rejecting coordinates outside the world.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordError> {
        if !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(CoordError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Creates a point by clamping both coordinates into the valid range.
    ///
    /// NaN inputs collapse to 0.0.
    pub fn clamped(lat: f64, lon: f64) -> Self {
        let lat = if lat.is_nan() { 0.0 } else { lat };
        let lon = if lon.is_nan() { 0.0 } else { lon };
        Self {
            lat: lat.clamp(MIN_LAT, MAX_LAT),
            lon: lon.clamp(MIN_LON, MAX_LON),
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Rectangular map viewport.
///
/// The south-west corner never lies north or east of the north-east corner.
/// Viewports crossing the antimeridian are not representable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    south_west: GeoPoint,
    north_east: GeoPoint,
}

impl ViewportBounds {
    /// Creates viewport bounds from its two corners.
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Result<Self, CoordError> {
        if south_west.lat > north_east.lat || south_west.lon > north_east.lon {
            return Err(CoordError::InvertedBounds {
                south_west,
                north_east,
            });
        }
        Ok(Self {
            south_west,
            north_east,
        })
    }

    /// Creates viewport bounds from raw `south, west, north, east` values.
    pub fn from_edges(south: f64, west: f64, north: f64, east: f64) -> Result<Self, CoordError> {
        Self::new(GeoPoint::new(south, west)?, GeoPoint::new(north, east)?)
    }

    /// Creates viewport bounds from host-reported edges, clamping to the world.
    ///
    /// Map widgets report longitudes past ±180 when zoomed far out; those are
    /// pinned to the edge rather than wrapped.
    pub fn clamped(south: f64, west: f64, north: f64, east: f64) -> Result<Self, CoordError> {
        Self::new(
            GeoPoint::clamped(south, west),
            GeoPoint::clamped(north, east),
        )
    }

    /// South-west corner.
    pub fn south_west(&self) -> GeoPoint {
        self.south_west
    }

    /// North-east corner.
    pub fn north_east(&self) -> GeoPoint {
        self.north_east
    }

    /// Midpoint of the viewport.
    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lat: (self.south_west.lat + self.north_east.lat) / 2.0,
            lon: (self.south_west.lon + self.north_east.lon) / 2.0,
        }
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.north_east.lat - self.south_west.lat
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.north_east.lon - self.south_west.lon
    }

    /// Returns true if the point lies inside or on the edge of the viewport.
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lon..=self.north_east.lon).contains(&point.lon)
    }

    /// Returns true if the box `south, west, north, east` overlaps the viewport.
    ///
    /// Touching edges count as overlap.
    pub fn intersects_box(&self, south: f64, west: f64, north: f64, east: f64) -> bool {
        south <= self.north_east.lat
            && north >= self.south_west.lat
            && west <= self.north_east.lon
            && east >= self.south_west.lon
    }
}

impl fmt::Display for ViewportBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.south_west, self.north_east)
    }
}

/// Errors that can occur when building coordinates or viewports.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude is outside valid range (-90 to 90)
    InvalidLatitude(f64),
    /// Longitude is outside valid range (-180 to 180)
    InvalidLongitude(f64),
    /// Zoom level is above the supported maximum
    InvalidZoom(u8),
    /// South-west corner lies north or east of the north-east corner
    InvertedBounds {
        south_west: GeoPoint,
        north_east: GeoPoint,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be between {} and {})",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            CoordError::InvalidLongitude(lon) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lon, MIN_LON, MAX_LON
                )
            }
            CoordError::InvalidZoom(zoom) => {
                write!(f, "Invalid zoom level: {} (must be at most {})", zoom, MAX_ZOOM)
            }
            CoordError::InvertedBounds {
                south_west,
                north_east,
            } => {
                write!(
                    f,
                    "Invalid viewport: south-west corner {} is not south-west of north-east corner {}",
                    south_west, north_east
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}
