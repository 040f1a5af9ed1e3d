use clap::{Arg, Command};
use geocoverage::batch::process_coverage_files;
use std::path::PathBuf;

fn main() {
    tracing_subscriber::fmt::init();

    let matches = Command::new("Coverage Geometry Converter")
        .version("0.1.0")
        .about("Converts dataset geographic coverage records into ESRI JSON and GeoJSON geometries")
        .arg(
            Arg::new("files")
                .short('f')
                .long("files")
                .num_args(1..)
                .required(true)
                .help("Input JSON files holding coverage records"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .num_args(1)
                .default_value("output")
                .help("Directory the converted geometries are written to"),
        )
        .get_matches();

    let files: Vec<PathBuf> = matches
        .get_many::<String>("files")
        .unwrap()
        .map(PathBuf::from)
        .collect();

    let output_dir = PathBuf::from(matches.get_one::<String>("output").unwrap());

    for file in &files {
        if !file.exists() {
            eprintln!("Error: File not found: {}", file.display());
            std::process::exit(1);
        }
    }

    match process_coverage_files(files, &output_dir) {
        Ok(()) => println!("Processing completed successfully"),
        Err(e) => {
            eprintln!("Error processing files: {}", e);
            std::process::exit(1);
        }
    }
}
