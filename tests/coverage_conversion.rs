//! End-to-end conversion of coverage records into both output dialects.

use geocoverage::{convert_coverage, CoverageRecord, GeometryKind, SpatialCoverage};
use serde_json::json;

fn coverage_from(record: serde_json::Value) -> SpatialCoverage {
    let record: CoverageRecord = serde_json::from_value(record).unwrap();
    SpatialCoverage::from_record(&record)
}

#[test]
fn bounding_box_converts_to_envelope_and_polygon() {
    let coverage = coverage_from(json!({
        "description": "North-central California",
        "west": "-123.552",
        "east": "-120.83",
        "north": "40.441",
        "south": "39.804",
    }));
    let converted = convert_coverage(&coverage);

    assert_eq!(converted.kind, Some(GeometryKind::Envelope));
    assert_eq!(
        converted.esri,
        Some(json!({
            "xmin": -123.552,
            "ymin": 39.804,
            "xmax": -120.83,
            "ymax": 40.441,
            "zmin": null,
            "zmax": null,
            "spatialReference": { "wkid": 4326 },
        }))
    );
    assert_eq!(
        converted.geojson,
        Some(json!({
            "type": "Polygon",
            "coordinates": [[
                [-123.552, 39.804],
                [-120.83, 39.804],
                [-120.83, 40.441],
                [-123.552, 40.441],
                [-123.552, 39.804],
            ]],
        }))
    );
    assert!(converted.warnings.is_empty());
}

#[test]
fn degenerate_bounding_box_converts_to_point() {
    let coverage = coverage_from(json!({
        "west": "-72.22",
        "east": "-72.22",
        "north": "42.48",
        "south": "42.48",
    }));
    let converted = convert_coverage(&coverage);

    assert_eq!(converted.kind, Some(GeometryKind::Point));
    assert_eq!(
        converted.esri,
        Some(json!({
            "xmin": -72.22,
            "ymin": 42.48,
            "xmax": -72.22,
            "ymax": 42.48,
            "zmin": null,
            "zmax": null,
            "spatialReference": { "wkid": 4326 },
        }))
    );
    assert_eq!(
        converted.geojson,
        Some(json!({
            "type": "Point",
            "coordinates": [-72.22, 42.48],
        }))
    );
}

#[test]
fn point_with_elevation_range_averages_z_and_warns() {
    let coverage = coverage_from(json!({
        "west": "-157.875",
        "east": "-157.875",
        "north": "21.125",
        "south": "21.125",
        "altitude_minimum": "-15",
        "altitude_maximum": "0",
        "altitude_unit": "meter",
    }));
    let converted = convert_coverage(&coverage);

    assert_eq!(
        converted.esri,
        Some(json!({
            "xmin": -157.875,
            "ymin": 21.125,
            "xmax": -157.875,
            "ymax": 21.125,
            "zmin": -15.0,
            "zmax": 0.0,
            "spatialReference": { "wkid": 4326 },
        }))
    );
    assert_eq!(
        converted.geojson,
        Some(json!({
            "type": "Point",
            "coordinates": [-157.875, 21.125, -7.5],
        }))
    );
    assert_eq!(converted.warnings.len(), 1);
}

#[test]
fn polygon_ring_wins_over_the_accompanying_bounding_box() {
    let coverage = coverage_from(json!({
        "west": "-123.8222818",
        "east": "-123.7976226",
        "north": "39.3141049",
        "south": "39.2943269",
        "outer_ring": "-123.7976226,39.3085666 -123.8222818,39.3141049 -123.8166231,39.2943269",
        "exclusion_ring": "-123.8078563,39.3068951 -123.8163387,39.3086898 -123.813222,39.3022756 -123.8078177,39.3068354 -123.8078563,39.3068951",
    }));
    let converted = convert_coverage(&coverage);

    assert_eq!(converted.kind, Some(GeometryKind::Polygon));
    assert_eq!(
        converted.esri,
        Some(json!({
            "rings": [
                [
                    [-123.7976226, 39.3085666],
                    [-123.8222818, 39.3141049],
                    [-123.8166231, 39.2943269],
                    [-123.7976226, 39.3085666],
                ],
                [
                    [-123.8078563, 39.3068951],
                    [-123.8163387, 39.3086898],
                    [-123.813222, 39.3022756],
                    [-123.8078177, 39.3068354],
                    [-123.8078563, 39.3068951],
                ],
            ],
            "spatialReference": { "wkid": 4326 },
        }))
    );
    // The GeoJSON dialect carries the outer ring only.
    assert_eq!(
        converted.geojson,
        Some(json!({
            "type": "Polygon",
            "coordinates": [[
                [-123.7976226, 39.3085666],
                [-123.8222818, 39.3141049],
                [-123.8166231, 39.2943269],
                [-123.7976226, 39.3085666],
            ]],
        }))
    );
}

#[test]
fn envelope_with_elevation_range_carries_z_on_every_corner() {
    let coverage = coverage_from(json!({
        "west": "-126.125",
        "east": "-125.875",
        "north": "48.625",
        "south": "48.375",
        "altitude_minimum": "-150",
        "altitude_maximum": "-100",
        "altitude_unit": "meter",
    }));
    let converted = convert_coverage(&coverage);

    assert_eq!(
        converted.geojson,
        Some(json!({
            "type": "Polygon",
            "coordinates": [[
                [-126.125, 48.375, -125.0],
                [-125.875, 48.375, -125.0],
                [-125.875, 48.625, -125.0],
                [-126.125, 48.625, -125.0],
                [-126.125, 48.375, -125.0],
            ]],
        }))
    );
    assert_eq!(converted.warnings.len(), 1);
}

#[test]
fn zero_average_elevation_is_kept() {
    let coverage = coverage_from(json!({
        "west": "-72.22",
        "east": "-72.22",
        "north": "42.48",
        "south": "42.48",
        "altitude_minimum": "-5",
        "altitude_maximum": "5",
        "altitude_unit": "meter",
    }));
    let converted = convert_coverage(&coverage);

    assert_eq!(
        converted.geojson,
        Some(json!({
            "type": "Point",
            "coordinates": [-72.22, 42.48, 0.0],
        }))
    );
    assert_eq!(converted.warnings.len(), 1);
}

#[test]
fn unclassifiable_record_yields_no_geometries() {
    let coverage = coverage_from(json!({
        "description": "A location described only in words",
    }));
    let converted = convert_coverage(&coverage);

    assert_eq!(converted.kind, None);
    assert_eq!(converted.esri, None);
    assert_eq!(converted.geojson, None);
    assert!(converted.warnings.is_empty());
}

#[test]
fn records_convert_independently() {
    let records = json!([
        { "description": "unclassifiable" },
        { "west": "-72.22", "east": "-72.22", "north": "42.48", "south": "42.48" },
    ]);
    let records: Vec<CoverageRecord> = serde_json::from_value(records).unwrap();
    let converted: Vec<_> = records
        .iter()
        .map(|record| convert_coverage(&SpatialCoverage::from_record(record)))
        .collect();

    assert_eq!(converted[0].kind, None);
    assert_eq!(converted[1].kind, Some(GeometryKind::Point));
    assert!(converted[1].esri.is_some());
}
