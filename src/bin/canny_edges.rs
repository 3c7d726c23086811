//! Run the Canny pipeline on one tile and save the edge map.
//!
//! Usage: `canny_edges <config.json>`
use boundary_refine::config::edge::load_config;
use boundary_refine::diagnostics::TimingBreakdown;
use boundary_refine::edges::CannyEdgeDetector;
use boundary_refine::image::io::{read_bytes, save_grayscale_u8, write_json_file};
use boundary_refine::image::luma::decode_rgb;
use boundary_refine::image::ImageView;
use log::info;
use serde::Serialize;
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

    let bytes = read_bytes(&config.input)?;
    let rgb = decode_rgb(&bytes).map_err(|e| e.to_string())?;
    let detection = CannyEdgeDetector::new(config.canny)
        .detect_rgb(&rgb)
        .map_err(|e| e.to_string())?;
    let edges = detection.edges;

    save_grayscale_u8(edges.as_gray(), &config.output.edges_image)?;
    info!(
        "Saved {}x{} edge map to {}",
        edges.width(),
        edges.height(),
        config.output.edges_image.display()
    );

    if let Some(summary_path) = &config.output.summary_json {
        let summary = EdgeDetectionSummary {
            width: edges.width(),
            height: edges.height(),
            low_threshold: config.canny.low_threshold,
            high_threshold: config.canny.high_threshold,
            edge_count: edges.count_above(0),
            timings: detection.timings,
        };
        write_json_file(summary_path, &summary)?;
        info!("Saved edge summary to {}", summary_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: canny_edges <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeDetectionSummary {
    width: usize,
    height: usize,
    low_threshold: u8,
    high_threshold: u8,
    edge_count: usize,
    timings: TimingBreakdown,
}
