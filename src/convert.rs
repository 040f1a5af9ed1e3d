//! Emission of a classified coverage into the two output geometry dialects.
//!
//! Both emitters are pure functions over a [`SpatialCoverage`]; an
//! unclassifiable coverage yields `None` from each rather than an error, so
//! a batch of records always runs to completion.

use geojson::{Geometry, Value as GeoJsonValue};
use serde_json::{json, Value};

use crate::coverage::{ConversionWarning, GeometryKind, SpatialCoverage};
use crate::ring::format_ring;

/// Well-known id of the WGS84 geographic CRS. The source format declares no
/// CRS, so every emitted geometry is stamped with this one.
pub const WGS84_WKID: u32 = 4326;

/// Convert a coverage to an ESRI JSON geometry object.
///
/// Points and envelopes both emit the envelope shape: an envelope is the
/// more expressive of the two and a zero-extent envelope behaves the same as
/// a point. Elevations are converted to meters and carried as `zmin`/`zmax`;
/// an absent elevation serializes as `null`.
///
/// Polygons emit a `rings` object holding the outer ring and, when present,
/// the exclusion ring. Rings carry no z values in this dialect; only the
/// envelope shape does.
pub fn to_esri_geometry(coverage: &SpatialCoverage) -> Option<Value> {
    let geometry = match coverage.geometry_kind()? {
        GeometryKind::Polygon => {
            let outer = coverage.outer_ring.as_deref()?;
            let mut rings = vec![Value::Array(format_ring(outer, None))];
            if let Some(exclusion) = coverage.exclusion_ring.as_deref() {
                rings.push(Value::Array(format_ring(exclusion, None)));
            }
            json!({
                "rings": rings,
                "spatialReference": { "wkid": WGS84_WKID },
            })
        }
        GeometryKind::Point | GeometryKind::Envelope => {
            let bounds = coverage.bounds.as_ref()?;
            json!({
                "xmin": bounds.west,
                "ymin": bounds.south,
                "xmax": bounds.east,
                "ymax": bounds.north,
                "zmin": coverage.altitude_minimum_meters(),
                "zmax": coverage.altitude_maximum_meters(),
                "spatialReference": { "wkid": WGS84_WKID },
            })
        }
    };
    Some(geometry)
}

/// Convert a coverage to a GeoJSON geometry object.
///
/// A degenerate bounding box emits a `Point` at its western/northern corner;
/// any other bounding box emits a `Polygon` whose ring walks the four
/// corners counter-clockwise from the south-west. A listed ring emits a
/// `Polygon` built by [`format_ring`]; the exclusion ring is not part of
/// this dialect's output.
///
/// The dialect has no z range, so each vertex carries the single averaged z
/// from [`SpatialCoverage::average_altitude`] when one exists; collapsing a
/// real range pushes a warning into `warnings`. Absent z components are
/// omitted from their tuple, never emitted as `null`.
pub fn to_geojson_geometry(
    coverage: &SpatialCoverage,
    warnings: &mut Vec<ConversionWarning>,
) -> Option<Value> {
    match coverage.geometry_kind()? {
        GeometryKind::Point => {
            let bounds = coverage.bounds.as_ref()?;
            let mut position = vec![bounds.west, bounds.north];
            if let Some(z) = coverage.average_altitude(warnings) {
                position.push(z);
            }
            geometry_value(Geometry::new(GeoJsonValue::Point(position)))
        }
        GeometryKind::Envelope => {
            let bounds = coverage.bounds.as_ref()?;
            let z = coverage.average_altitude(warnings);
            let corners = [
                (bounds.west, bounds.south),
                (bounds.east, bounds.south),
                (bounds.east, bounds.north),
                (bounds.west, bounds.north),
                (bounds.west, bounds.south),
            ];
            let ring = corners
                .iter()
                .map(|&(x, y)| match z {
                    Some(z) => vec![x, y, z],
                    None => vec![x, y],
                })
                .collect();
            geometry_value(Geometry::new(GeoJsonValue::Polygon(vec![ring])))
        }
        GeometryKind::Polygon => {
            let outer = coverage.outer_ring.as_deref()?;
            let z = coverage.average_altitude(warnings);
            let ring = format_ring(outer, z);
            Some(json!({
                "type": "Polygon",
                "coordinates": [ring],
            }))
        }
    }
}

fn geometry_value(geometry: Geometry) -> Option<Value> {
    serde_json::to_value(&geometry).ok()
}
