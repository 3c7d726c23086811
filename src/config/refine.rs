use crate::engine::EngineParams;
use crate::tile::DEFAULT_TILE_SIZE;
use crate::types::{GeoBounds, GeoPoint};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config of the `refine_boundary` tool.
#[derive(Debug, Deserialize)]
pub struct RefineToolConfig {
    pub points: Vec<GeoPoint>,
    /// Defaults to the bounding box of `points`.
    pub bounds: Option<GeoBounds>,
    /// Local tile covering `bounds`; omitted means geometric refinement.
    pub image: Option<TileImageConfig>,
    #[serde(default)]
    pub engine: EngineParams,
    pub output: RefineOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct TileImageConfig {
    pub path: PathBuf,
    #[serde(default = "default_tile_size")]
    pub size: u32,
}

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

#[derive(Debug, Deserialize)]
pub struct RefineOutputConfig {
    #[serde(rename = "result_json")]
    pub result_json: PathBuf,
    /// Full report with trace and timings.
    #[serde(rename = "report_json")]
    pub report_json: Option<PathBuf>,
}

impl RefineToolConfig {
    pub fn resolved_bounds(&self) -> Option<GeoBounds> {
        self.bounds.or_else(|| GeoBounds::enclosing(&self.points))
    }
}

pub fn load_config(path: &Path) -> Result<RefineToolConfig, String> {
    super::load_json(path)
}
