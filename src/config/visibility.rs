use super::read_json;
use crate::classify::ColorClassifier;
use crate::render::RenderStyle;
use crate::scene::SceneParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct VisibilityToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub classify: ColorClassifier,
    #[serde(default)]
    pub scene: SceneParams,
    #[serde(default)]
    pub render: RenderStyle,
    pub output: VisibilityOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct VisibilityOutputConfig {
    #[serde(rename = "rays_image")]
    pub rays_image: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
    /// Optional edge rendering of the same scene.
    #[serde(default)]
    pub edges_image: Option<PathBuf>,
}

/// Load the config and reject cast options that cannot form a closed fan.
pub fn load_config(path: &Path) -> Result<VisibilityToolConfig, String> {
    let config: VisibilityToolConfig = read_json(path)?;
    config
        .scene
        .cast
        .validate()
        .map_err(|e| format!("Invalid cast options in {}: {e}", path.display()))?;
    Ok(config)
}
