use crate::edges::CannyOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config of the `canny_edges` tool.
#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub canny: CannyOptions,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    #[serde(rename = "edges_image")]
    pub edges_image: PathBuf,
    #[serde(rename = "summary_json")]
    pub summary_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    super::load_json(path)
}
