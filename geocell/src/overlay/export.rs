//! GeoJSON export of overlay layers.
//!
//! Produces a `FeatureCollection` with one closed polygon per shape. Style is
//! carried in simplestyle property names (`stroke`, `fill`, ...) so the
//! output renders as-is in most GeoJSON viewers.

use serde_json::{json, Value};

use super::layer::{OverlayLayer, OverlayShape};
use crate::style::OverlayStyle;

/// Converts a layer to a GeoJSON `FeatureCollection`.
pub fn to_geojson(layer: &OverlayLayer) -> Value {
    let features: Vec<Value> = layer
        .shapes()
        .iter()
        .map(|shape| feature(shape, layer.style()))
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// A `FeatureCollection` with no features, for when nothing is drawn.
pub fn empty_collection() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [],
    })
}

fn feature(shape: &OverlayShape, style: &OverlayStyle) -> Value {
    let b = &shape.bounds;
    // GeoJSON positions are [lon, lat]; rings close on their first vertex.
    let ring = vec![
        [b.west, b.south],
        [b.east, b.south],
        [b.east, b.north],
        [b.west, b.north],
        [b.west, b.south],
    ];

    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [ring],
        },
        "properties": {
            "code": shape.code,
            "active": shape.active,
            "tooltip": shape.tooltip,
            "stroke": style.border_color,
            "stroke-width": style.border_weight,
            "fill": style.fill_color,
            "fill-opacity": style.fill_opacity,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geohash::CellCode;
    use crate::style::{FillStyle, Theme};

    fn layer(codes: &[&str]) -> OverlayLayer {
        let shapes = codes
            .iter()
            .map(|c| OverlayShape::active(CellCode::parse(c).unwrap()))
            .collect();
        OverlayLayer::new(
            shapes,
            OverlayStyle::resolve(Theme::Light, "osm-standard", &FillStyle::default()),
        )
    }

    #[test]
    fn test_empty_layer() {
        let value = to_geojson(&layer(&[]));
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"].as_array().unwrap().len(), 0);
        assert_eq!(value, empty_collection());
    }

    #[test]
    fn test_feature_ring_is_closed_lon_lat() {
        let value = to_geojson(&layer(&["sx8d9x3s"]));
        let feature = &value["features"][0];
        assert_eq!(feature["geometry"]["type"], "Polygon");

        let ring = feature["geometry"]["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);

        let lon = ring[0][0].as_f64().unwrap();
        let lat = ring[0][1].as_f64().unwrap();
        assert!((lon - 23.271102905273438).abs() < 1e-12);
        assert!((lat - 42.66746520996094).abs() < 1e-12);
    }

    #[test]
    fn test_feature_properties() {
        let value = to_geojson(&layer(&["sx8d9x3s"]));
        let props = &value["features"][0]["properties"];
        assert_eq!(props["code"], "sx8d9x3s");
        assert_eq!(props["tooltip"], "sx8d9x3s");
        assert_eq!(props["active"], true);
        assert_eq!(props["stroke"], "#404040");
        assert_eq!(props["fill"], "#3388ff");
        assert_eq!(props["fill-opacity"], 0.5);
    }
}
