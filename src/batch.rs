//! File-to-file conversion of coverage records.
//!
//! One input file holds a single coverage record object or an array of them;
//! each record converts independently, so a record that cannot be classified
//! never stops its siblings.

use std::error::Error;
use std::fs::{create_dir_all, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::convert_coverage;
use crate::coverage::{CoverageRecord, SpatialCoverage};

/// Load coverage records from a JSON file.
pub fn load_records(path: &Path) -> Result<Vec<CoverageRecord>, Box<dyn Error>> {
    println!("Loading file: {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let value: Value = serde_json::from_reader(reader)?;
    let records = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<CoverageRecord>, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    println!("Loaded {} coverage records from file", records.len());
    Ok(records)
}

/// Convert every record of every input file and write one geometries file
/// per input into `output_dir`.
pub fn process_coverage_files(
    files: Vec<PathBuf>,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    create_dir_all(output_dir)?;

    for (file_index, file) in files.iter().enumerate() {
        println!(
            "\nProcessing file {}/{}: {}",
            file_index + 1,
            files.len(),
            file.display()
        );
        let records = load_records(file)?;
        let mut entries = Vec::with_capacity(records.len());
        let mut unclassifiable = 0;

        for record in &records {
            let coverage = SpatialCoverage::from_record(record);
            let converted = convert_coverage(&coverage);
            if converted.kind.is_none() {
                unclassifiable += 1;
            }
            for warning in &converted.warnings {
                println!("Warning: {}", warning);
            }
            entries.push(json!({
                "description": coverage.description.as_deref(),
                "geometry_kind": converted.kind.map(|kind| kind.name()),
                "esri": converted.esri,
                "geojson": converted.geojson,
                "warnings": converted
                    .warnings
                    .iter()
                    .map(|warning| warning.to_string())
                    .collect::<Vec<_>>(),
            }));
        }

        let output_path = output_path_for(file, output_dir);
        let out = File::create(&output_path)?;
        serde_json::to_writer_pretty(out, &Value::Array(entries))?;
        println!(
            "Written {} records ({} unclassifiable) to {}",
            records.len(),
            unclassifiable,
            output_path.display()
        );
    }

    Ok(())
}

fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    output_dir.join(format!("{}_geometries.json", stem))
}
