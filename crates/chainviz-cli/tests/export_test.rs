//! End-to-end tests for the CLI export path.

use std::fs;

use tempfile::tempdir;

use chainviz_cli::{Args, Format};

fn args() -> Args {
    Args {
        slug: None,
        output: None,
        all: false,
        list: false,
        format: Format::Html,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn test_single_diagram_export() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("utxo.html");

    let args = Args {
        slug: Some("utxo-transaction".to_string()),
        output: Some(output.to_string_lossy().to_string()),
        ..args()
    };

    chainviz_cli::run(&args).expect("Export should succeed");

    let html = fs::read_to_string(&output).expect("Output file should exist");
    assert!(html.contains("UTXO Transaction Model"));
    assert!(html.contains("cv-diagram"));
}

#[test]
fn test_all_diagrams_export_as_json() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = Args {
        all: true,
        output: Some(temp_dir.path().to_string_lossy().to_string()),
        format: Format::Json,
        ..args()
    };

    chainviz_cli::run(&args).expect("Export should succeed");

    let files: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .flatten()
        .map(|entry| entry.path())
        .collect();
    assert_eq!(files.len(), 20);

    let sample = temp_dir.path().join("tendermint-round.json");
    let json = fs::read_to_string(sample).expect("Sample file should exist");
    assert!(json.contains("\"title\": \"Tendermint Consensus Round\""));
}

#[test]
fn test_unknown_slug_is_an_error() {
    let args = Args {
        slug: Some("no-such-diagram".to_string()),
        ..args()
    };

    let result = chainviz_cli::run(&args);
    assert!(result.is_err(), "Unknown slug should fail");
}

#[test]
fn test_no_selection_is_an_error() {
    let result = chainviz_cli::run(&args());
    assert!(result.is_err());
}
