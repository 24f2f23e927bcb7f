//! Demo driver for the raybug logging registry.
//!
//! Runs a representative treatment-planning workflow through `bug` so the
//! generated debug and tracking logs can be inspected. An optional first
//! argument names a settings file; without it the stock defaults apply
//! (logs land under `logs/debug` and `logs/tracking`).

use std::env;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

use raybug_logging::{LogConfig, LogRegistry};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("raybug: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => LogConfig::from_file(Path::new(&path))?,
        None => LogConfig::default(),
    };
    let mut registry = LogRegistry::new(config)?;

    // Session initialization
    registry.bug("RayStation Treatment Planning Session", "debug", true)?;
    registry.bug("Loading patient database connection", "debug", false)?;

    // Patient and case management
    let patient_id = "MRN_12345";
    let case_name = "Prostate_IMRT";
    registry.bug(&format!("User opened patient {patient_id}"), "track", false)?;
    registry.bug(&format!("Loading case: {case_name}"), "debug", false)?;
    registry.bug(
        &format!("Patient {patient_id} case {case_name} loaded successfully"),
        "track",
        false,
    )?;

    // Structure creation and contouring
    registry.bug("Structure Set Management", "debug", true)?;
    registry.bug("User created PTV_Eval_High-03", "track", false)?;
    registry.bug("Importing physician contours from DICOM", "debug", false)?;
    registry.bug("User modified CTV_High contour on slice 15", "track", false)?;

    // Planning workflow
    registry.bug("Treatment Planning Phase", "debug", true)?;
    registry.bug("User initiated auto planning for IMRT technique", "track", false)?;
    registry.bug("Optimizing dose distribution - iteration 1", "debug", false)?;
    registry.bug("Optimizing dose distribution - iteration 2", "debug", false)?;

    // Plan evaluation
    registry.bug("Plan Evaluation", "debug", true)?;
    let ptv_coverage = 98.7;
    registry.bug(
        &format!("PTV coverage: {ptv_coverage:.1}% at prescription dose"),
        "debug",
        false,
    )?;
    registry.bug("Couch model missing from beam set", "warning", false)?;
    registry.bug("Dose grid resolution exceeds supported maximum", "error", false)?;

    // QA and export
    registry.bug("Quality Assurance", "debug", true)?;
    registry.bug("User approved treatment plan", "track", false)?;
    registry.bug("User exported plan to treatment delivery system", "track", false)?;
    registry.bug("Plan export completed successfully", "debug", false)?;

    // Direct logger usage
    registry.debug_logger().info("Direct diagnostic entry")?;
    registry.tracking_logger().info("Direct tracking entry")?;

    let debug_log = registry.debug_logger().log_file().map(Path::to_path_buf);
    let tracking_log = registry.tracking_logger().log_file().map(Path::to_path_buf);
    registry.close()?;

    println!();
    println!("Demo complete. Generated log files:");
    if let Some(path) = debug_log {
        println!("  debug:    {}", path.display());
    }
    if let Some(path) = tracking_log {
        println!("  tracking: {}", path.display());
    }
    Ok(())
}
