//! Length-unit conversion for elevation values.
//!
//! The source metadata format allows elevations in a small closed set of
//! length units. Output geometries carry z values in meters, so elevations
//! pass through a fixed factor table before emission.

/// Meters-per-unit factors for every length unit the source format allows.
///
/// The factors are part of the output contract; downstream consumers compare
/// converted values exactly.
pub const METERS_PER_UNIT: &[(&str, f64)] = &[
    ("meter", 1.0),
    ("decimeter", 1e-1),
    ("dekameter", 1e1),
    ("hectometer", 1e2),
    ("kilometer", 1e3),
    ("megameter", 1e6),
    ("Foot_US", 0.3048006),
    ("foot", 0.3048),
    ("Foot_Gold_Coast", 0.3047997),
    ("fathom", 1.8288),
    ("nauticalMile", 1852.0),
    ("yard", 0.9144),
    ("Yard_Indian", 0.914398530744440774),
    ("Link_Clarke", 0.2011661949),
    ("Yard_Sears", 0.91439841461602867),
    ("mile", 1609.344),
];

/// Look up the meters multiplier for a named unit.
pub fn meters_factor(unit: &str) -> Option<f64> {
    METERS_PER_UNIT
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|&(_, factor)| factor)
}

/// Convert a length to meters.
///
/// An absent value stays absent. An absent or unrecognized unit leaves the
/// value unchanged; the source format is permissive about units, so an
/// unknown unit is not an error.
pub fn to_meters(value: Option<f64>, unit: Option<&str>) -> Option<f64> {
    let value = value?;
    match unit.and_then(meters_factor) {
        Some(factor) => Some(value * factor),
        None => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_of_each_unit_converts_to_its_factor() {
        for &(unit, factor) in METERS_PER_UNIT {
            assert_eq!(to_meters(Some(1.0), Some(unit)), Some(factor));
        }
    }

    #[test]
    fn converts_feet_to_meters() {
        assert_eq!(to_meters(Some(10.0), Some("foot")), Some(3.048));
    }

    #[test]
    fn unknown_unit_passes_value_through() {
        assert_eq!(to_meters(Some(10.0), Some("cubit")), Some(10.0));
        // "meters" is not in the table; only the singular form is.
        assert_eq!(to_meters(Some(10.0), Some("meters")), Some(10.0));
    }

    #[test]
    fn absent_unit_passes_value_through() {
        assert_eq!(to_meters(Some(10.0), None), Some(10.0));
    }

    #[test]
    fn absent_value_stays_absent() {
        assert_eq!(to_meters(None, None), None);
        assert_eq!(to_meters(None, Some("meter")), None);
    }
}
