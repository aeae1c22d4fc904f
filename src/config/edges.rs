use super::read_json;
use crate::classify::ColorClassifier;
use crate::render::RenderStyle;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub classify: ColorClassifier,
    #[serde(default)]
    pub render: RenderStyle,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    #[serde(rename = "edges_image")]
    pub edges_image: PathBuf,
    #[serde(rename = "segments_json")]
    pub segments_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    read_json(path)
}
