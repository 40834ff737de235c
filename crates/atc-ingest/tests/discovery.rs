//! Tests for export file discovery.

use atc_ingest::{expand_inputs, list_csv_files};
use atc_model::Schema;
use std::fs;
use std::path::{Path, PathBuf};

fn temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("atc_ingest_{}_{stamp}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "week;day\n1;2\n").expect("write file");
    path
}

#[test]
fn expands_directories_and_keeps_explicit_files() {
    let dir = temp_dir();
    let _ = touch(&dir, "0301_config.csv");
    let _ = touch(&dir, "0301_sect_config.csv");
    let _ = touch(&dir, "0301_flights.csv");
    let _ = touch(&dir, "summary.csv");
    let explicit = dir.join("missing_flights.csv");

    let files = expand_inputs(&[dir.clone(), explicit.clone()]).expect("expand inputs");

    assert_eq!(files.len(), 5);
    assert_eq!(files[0].schema, Some(Schema::DailyConfig));
    assert_eq!(files[1].schema, Some(Schema::FlightRecord));
    assert_eq!(files[2].schema, Some(Schema::SectorConfig));
    assert_eq!(files[3].schema, None);
    assert_eq!(files[4].path, explicit);
    assert_eq!(files[4].schema, Some(Schema::FlightRecord));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn lists_csv_regardless_of_extension_case() {
    let dir = temp_dir();
    let _ = touch(&dir, "B_config.CSV");
    let _ = touch(&dir, "A_config.csv");
    let _ = touch(&dir, "A_config.txt");

    let files = list_csv_files(&dir).expect("list csv");
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["A_config.csv", "B_config.CSV"]);

    fs::remove_dir_all(&dir).expect("cleanup");
}
