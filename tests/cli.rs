//! Validates command-line parsing defaults, flags, and target validation

use boxcount::AnalysisError;
use boxcount::io::cli::{Cli, FileProcessor};
use clap::Parser;

#[test]
fn test_defaults_match_estimator_defaults() {
    let Ok(cli) = Cli::try_parse_from(["boxcount", "shape.png"]) else {
        unreachable!("A bare target should parse");
    };

    assert!(
        (cli.start - 1.0).abs() < f64::EPSILON,
        "Default sweep should start at 1.0"
    );
    assert!(
        (cli.stop - 5.0).abs() < f64::EPSILON,
        "Default sweep should stop at 5.0"
    );
    assert!(
        (cli.step - 0.2).abs() < f64::EPSILON,
        "Default sweep should step by 0.2"
    );
    assert_eq!(cli.cell_size, 2, "Default cell size should be 2");
    assert!(!cli.overlay, "Overlay export should be off by default");
    assert!(!cli.plot, "Plot export should be off by default");
    assert!(cli.should_show_progress(), "Progress should be on by default");
}

#[test]
fn test_sweep_and_artifact_flags() {
    let Ok(cli) = Cli::try_parse_from([
        "boxcount",
        "shapes",
        "--start",
        "2",
        "--stop",
        "3",
        "--step",
        "0.5",
        "--cell-size",
        "4",
        "--overlay",
        "--plot",
        "--quiet",
    ]) else {
        unreachable!("Valid flags should parse");
    };

    assert!(
        (cli.start - 2.0).abs() < f64::EPSILON,
        "Sweep start should be overridable"
    );
    assert!(
        (cli.step - 0.5).abs() < f64::EPSILON,
        "Sweep step should be overridable"
    );
    assert_eq!(cli.cell_size, 4, "Cell size should be overridable");
    assert!(cli.overlay && cli.plot, "Both artifact exports should be on");
    assert!(
        !cli.should_show_progress(),
        "Quiet mode should suppress progress"
    );
}

#[test]
fn test_missing_target_is_an_error() {
    assert!(
        Cli::try_parse_from(["boxcount"]).is_err(),
        "The target argument is required"
    );
}

// A target that is neither PNG nor directory is rejected with its path
#[test]
fn test_non_png_file_target_is_rejected() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("Temporary directory should be creatable");
    };
    let file_path = dir.path().join("notes.txt");
    assert!(
        std::fs::write(&file_path, b"not an image").is_ok(),
        "The fixture file should be writable"
    );
    let Some(target) = file_path.to_str() else {
        unreachable!("Temporary paths are valid UTF-8");
    };

    let Ok(cli) = Cli::try_parse_from(["boxcount", target, "--quiet"]) else {
        unreachable!("A plain file target should parse");
    };
    let mut processor = FileProcessor::new(cli);

    match processor.process() {
        Err(AnalysisError::InvalidTarget { path, .. }) => {
            assert_eq!(
                path, file_path,
                "The error should carry the rejected target path"
            );
        }
        _ => unreachable!("Expected an InvalidTarget error for a non-PNG file"),
    }
}

#[test]
fn test_nonexistent_target_is_rejected() {
    let Ok(cli) = Cli::try_parse_from(["boxcount", "no_such_shapes_dir", "--quiet"]) else {
        unreachable!("A plain path target should parse");
    };
    let mut processor = FileProcessor::new(cli);

    assert!(
        matches!(
            processor.process(),
            Err(AnalysisError::InvalidTarget { .. })
        ),
        "A path that is neither file nor directory should be rejected"
    );
}

// A directory containing no PNGs is an empty batch, not an error
#[test]
fn test_empty_directory_is_a_quiet_no_op() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("Temporary directory should be creatable");
    };
    let Some(target) = dir.path().to_str() else {
        unreachable!("Temporary paths are valid UTF-8");
    };

    let Ok(cli) = Cli::try_parse_from(["boxcount", target, "--quiet"]) else {
        unreachable!("A directory target should parse");
    };
    let mut processor = FileProcessor::new(cli);

    assert!(
        processor.process().is_ok(),
        "An empty directory should process successfully"
    );
}
