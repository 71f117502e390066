//! Coordinate types and viewport derivation
//!
//! Provides validated geographic points and viewport bounds, plus the
//! Web Mercator math a slippy map uses to turn a center and zoom level into
//! the bounds it displays.

mod types;

#[cfg(test)]
mod tests;

pub use types::{
    CoordError, GeoPoint, ViewportBounds, MAX_LAT, MAX_LON, MAX_ZOOM, MERCATOR_MAX_LAT, MIN_LAT,
    MIN_LON,
};

use std::f64::consts::PI;

/// Edge length of a map tile in pixels.
pub const TILE_SIZE_PX: f64 = 256.0;

/// Projects a point to global Web Mercator pixel coordinates at `zoom`.
///
/// Latitude is clamped to the Mercator limit first.
#[inline]
pub fn project(point: GeoPoint, zoom: u8) -> (f64, f64) {
    let scale = TILE_SIZE_PX * 2.0_f64.powi(zoom as i32);
    let lat = point.lat.clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT);

    let x = (point.lon + 180.0) / 360.0 * scale;
    let lat_rad = lat * PI / 180.0;
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * scale;

    (x, y)
}

/// Converts global Web Mercator pixel coordinates back to a point.
///
/// Pixels outside the world are clamped onto its edge.
#[inline]
pub fn unproject(x: f64, y: f64, zoom: u8) -> GeoPoint {
    let scale = TILE_SIZE_PX * 2.0_f64.powi(zoom as i32);
    let y = y.clamp(0.0, scale);

    let lon = x / scale * 360.0 - 180.0;
    let lat_rad = (PI * (1.0 - 2.0 * y / scale)).sinh().atan();
    let lat = lat_rad * 180.0 / PI;

    GeoPoint::clamped(lat, lon)
}

/// Derives the viewport a map of `width_px` × `height_px` shows when centered
/// on `center` at `zoom`.
///
/// # Errors
///
/// Returns [`CoordError::InvalidZoom`] if `zoom` exceeds [`MAX_ZOOM`].
pub fn viewport_around(
    center: GeoPoint,
    zoom: u8,
    width_px: u32,
    height_px: u32,
) -> Result<ViewportBounds, CoordError> {
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }

    let (cx, cy) = project(center, zoom);
    let half_w = width_px as f64 / 2.0;
    let half_h = height_px as f64 / 2.0;

    // Pixel y grows southwards.
    let south_west = unproject(cx - half_w, cy + half_h, zoom);
    let north_east = unproject(cx + half_w, cy - half_h, zoom);

    ViewportBounds::new(south_west, north_east)
}
