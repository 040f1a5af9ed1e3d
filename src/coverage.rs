//! Geographic-coverage data model, geometry classification, and elevation
//! averaging.
//!
//! A [`CoverageRecord`] is the raw bundle of optional text fields the
//! external document loader hands over for one coverage listing. Reading it
//! produces an immutable [`SpatialCoverage`], which the emitters in
//! [`crate::convert`] turn into the two output dialects.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::units::to_meters;

/// One coverage listing as delivered by the document loader, before any
/// numeric interpretation. Every field is optional; the source format leaves
/// most of them that way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverageRecord {
    pub description: Option<String>,
    pub west: Option<String>,
    pub east: Option<String>,
    pub north: Option<String>,
    pub south: Option<String>,
    pub altitude_minimum: Option<String>,
    pub altitude_maximum: Option<String>,
    pub altitude_unit: Option<String>,
    pub outer_ring: Option<String>,
    pub exclusion_ring: Option<String>,
}

/// Axis-aligned bounding coordinates of a coverage.
///
/// The source format requires all four coordinates together, so a partial
/// set never constructs a box. West may exceed east for extents crossing the
/// antimeridian; no normalization is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub east: f64,
    pub north: f64,
    pub south: f64,
}

impl BoundingBox {
    /// A box collapses to a point when both axes have zero extent.
    pub fn is_point(&self) -> bool {
        self.west == self.east && self.north == self.south
    }
}

/// Elevation range of a coverage. Minimum and maximum are independently
/// optional; the unit applies to both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AltitudeRange {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub unit: Option<String>,
}

/// A dataset's geographic extent: bounding box, point, or polygon ring,
/// optionally with an elevation range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpatialCoverage {
    pub description: Option<String>,
    pub bounds: Option<BoundingBox>,
    pub altitude: Option<AltitudeRange>,
    /// Raw space-separated `lon,lat` pairs of the polygon boundary.
    pub outer_ring: Option<String>,
    /// Raw ring describing a hole; only meaningful alongside `outer_ring`.
    pub exclusion_ring: Option<String>,
}

/// Geometric kind of a coverage, decided once and matched exhaustively by
/// the emitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Polygon,
    Point,
    Envelope,
}

impl GeometryKind {
    /// Plain geometry name used in the source format's vocabulary.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Polygon => "polygon",
            GeometryKind::Point => "point",
            GeometryKind::Envelope => "envelope",
        }
    }

    /// Geometry name in the ESRI dialect's vocabulary.
    pub fn esri_name(&self) -> &'static str {
        match self {
            GeometryKind::Polygon => "esriGeometryPolygon",
            GeometryKind::Point => "esriGeometryPoint",
            GeometryKind::Envelope => "esriGeometryEnvelope",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-fatal condition surfaced while converting a coverage. Warnings never
/// abort a conversion; they accompany the produced geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionWarning {
    #[error(
        "altitude minimum {minimum} m and maximum {maximum} m differ; \
         collapsed to their average {average} m"
    )]
    AltitudeRangeCollapsed {
        minimum: f64,
        maximum: f64,
        average: f64,
    },
}

impl SpatialCoverage {
    /// Read a raw record into a coverage.
    ///
    /// Scalars that are absent, non-numeric, or non-finite degrade to `None`;
    /// nothing in a record is treated as an error.
    pub fn from_record(record: &CoverageRecord) -> Self {
        let bounds = match (
            parse_scalar(record.west.as_deref()),
            parse_scalar(record.east.as_deref()),
            parse_scalar(record.north.as_deref()),
            parse_scalar(record.south.as_deref()),
        ) {
            (Some(west), Some(east), Some(north), Some(south)) => Some(BoundingBox {
                west,
                east,
                north,
                south,
            }),
            _ => None,
        };

        let minimum = parse_scalar(record.altitude_minimum.as_deref());
        let maximum = parse_scalar(record.altitude_maximum.as_deref());
        let unit = non_empty(record.altitude_unit.as_deref());
        let altitude = if minimum.is_none() && maximum.is_none() && unit.is_none() {
            None
        } else {
            Some(AltitudeRange {
                minimum,
                maximum,
                unit,
            })
        };

        SpatialCoverage {
            description: non_empty(record.description.as_deref()),
            bounds,
            altitude,
            outer_ring: non_empty(record.outer_ring.as_deref()),
            exclusion_ring: non_empty(record.exclusion_ring.as_deref()),
        }
    }

    /// Classify the geometric kind of this coverage.
    ///
    /// A listed polygon ring is the feature of interest and wins over any
    /// bounding box listed alongside it. Without a ring, present bounds
    /// classify as a point when degenerate, otherwise as an envelope. A
    /// coverage with neither is unclassifiable.
    pub fn geometry_kind(&self) -> Option<GeometryKind> {
        if self.outer_ring.is_some() {
            return Some(GeometryKind::Polygon);
        }
        let bounds = self.bounds.as_ref()?;
        if bounds.is_point() {
            Some(GeometryKind::Point)
        } else {
            Some(GeometryKind::Envelope)
        }
    }

    pub fn altitude_minimum(&self) -> Option<f64> {
        self.altitude.as_ref()?.minimum
    }

    pub fn altitude_maximum(&self) -> Option<f64> {
        self.altitude.as_ref()?.maximum
    }

    pub fn altitude_unit(&self) -> Option<&str> {
        self.altitude.as_ref()?.unit.as_deref()
    }

    /// Minimum elevation converted to meters.
    pub fn altitude_minimum_meters(&self) -> Option<f64> {
        to_meters(self.altitude_minimum(), self.altitude_unit())
    }

    /// Maximum elevation converted to meters.
    pub fn altitude_maximum_meters(&self) -> Option<f64> {
        to_meters(self.altitude_maximum(), self.altitude_unit())
    }

    /// Collapse the elevation range to a single z value in meters.
    ///
    /// The GeoJSON dialect has no notion of a z range. When both ends of the
    /// range are present they are averaged; a differing minimum and maximum
    /// raises a [`ConversionWarning::AltitudeRangeCollapsed`] in the
    /// caller's sink. A one-sided range yields `None` rather than a
    /// substitute value.
    pub fn average_altitude(&self, warnings: &mut Vec<ConversionWarning>) -> Option<f64> {
        let minimum = self.altitude_minimum_meters()?;
        let maximum = self.altitude_maximum_meters()?;
        let average = (minimum + maximum) / 2.0;
        if minimum != maximum {
            warn!(
                minimum,
                maximum, average, "altitude range collapsed to a single z value"
            );
            warnings.push(ConversionWarning::AltitudeRangeCollapsed {
                minimum,
                maximum,
                average,
            });
        }
        Some(average)
    }
}

fn parse_scalar(text: Option<&str>) -> Option<f64> {
    let value: f64 = text?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

fn non_empty(text: Option<&str>) -> Option<String> {
    let text = text?.trim();
    (!text.is_empty()).then(|| text.to_string())
}
