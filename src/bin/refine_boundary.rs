//! Refine a rough boundary from a JSON config and write the result.
//!
//! Usage: `refine_boundary <config.json>`
//!
//! The result file has the `{ refinedPoints, area, confidence,
//! detectedFeatures, notes }` shape consumed by the web front-end.
use boundary_refine::config::refine::load_config;
use boundary_refine::engine::BoundaryRefiner;
use boundary_refine::geometry::perimeter_meters;
use boundary_refine::image::io::write_json_file;
use boundary_refine::tile::{FileSource, ImageSource};
use boundary_refine::types::BoundaryPolygon;
use log::info;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let bounds = config.resolved_bounds().ok_or("Config contains no points")?;
    let source = config
        .image
        .as_ref()
        .map(|img| FileSource::new(img.path.clone(), img.size));

    let refiner = BoundaryRefiner::new(config.engine.clone());
    let rough = BoundaryPolygon::from_points(&config.points);
    let report = refiner
        .refine_detailed(
            &rough,
            &bounds,
            source.as_ref().map(|s| s as &dyn ImageSource),
        )
        .map_err(|e| e.to_string())?;

    write_json_file(&config.output.result_json, &report.result)?;
    if let Some(report_path) = &config.output.report_json {
        write_json_file(report_path, &report)?;
    }

    info!("{}", report.result.message());
    let refined = report.result.refined_polygon.points();
    println!(
        "{} vertices, area {:.1} m², perimeter {:.1} m, confidence {:.2}, features {:?}",
        refined.len(),
        report.result.area,
        perimeter_meters(&refined),
        report.result.confidence,
        report.result.detected_features
    );
    if let Some(ratio) = report.trace.area_change_ratio() {
        println!("Area change vs. rough boundary: {:+.1}%", ratio * 100.0);
    }
    if let Some(reason) = &report.trace.fallback_reason {
        println!("Fell back to geometric refinement: {reason}");
    }
    println!("Saved result to {}", config.output.result_json.display());
    Ok(())
}

fn usage() -> String {
    "Usage: refine_boundary <config.json>".to_string()
}
