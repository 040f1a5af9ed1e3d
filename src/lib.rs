//! Conversion of dataset geographic-coverage records into ESRI JSON and
//! GeoJSON geometry objects.
//!
//! A coverage record describes a dataset's spatial extent as a bounding box,
//! a point location, or a polygon ring, optionally with an elevation range.
//! The crate reads the record ([`SpatialCoverage::from_record`]), classifies
//! its geometry ([`SpatialCoverage::geometry_kind`]), and emits the
//! equivalent geometry object in both output dialects:
//!
//! - [`to_esri_geometry`]: an envelope or rings object carrying a fixed
//!   `spatialReference` of WKID 4326
//! - [`to_geojson_geometry`]: a standard GeoJSON `Point` or `Polygon`
//!
//! Every conversion stage is a pure transformation over an immutable
//! [`SpatialCoverage`]; nothing in the core performs I/O, and no failure in
//! a record is fatal. The [`batch`] module and the CLI binary wrap the core
//! for file-to-file processing.

pub mod batch;
pub mod convert;
pub mod coverage;
pub mod ring;
pub mod units;

pub use convert::{to_esri_geometry, to_geojson_geometry, WGS84_WKID};
pub use coverage::{
    AltitudeRange, BoundingBox, ConversionWarning, CoverageRecord, GeometryKind, SpatialCoverage,
};
pub use ring::format_ring;
pub use units::to_meters;

use serde_json::Value;

/// Both dialect outputs for one coverage record, along with any warnings
/// raised while producing them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedCoverage {
    pub kind: Option<GeometryKind>,
    pub esri: Option<Value>,
    pub geojson: Option<Value>,
    pub warnings: Vec<ConversionWarning>,
}

/// Convert one coverage into both output dialects.
///
/// An unclassifiable coverage yields `None` for both geometries; it is not
/// an error, so a batch of records always runs to completion.
pub fn convert_coverage(coverage: &SpatialCoverage) -> ConvertedCoverage {
    let mut warnings = Vec::new();
    ConvertedCoverage {
        kind: coverage.geometry_kind(),
        esri: to_esri_geometry(coverage),
        geojson: to_geojson_geometry(coverage, &mut warnings),
        warnings,
    }
}
