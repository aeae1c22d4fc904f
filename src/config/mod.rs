//! JSON configuration for the command-line tools.
//!
//! Every tool takes a single config file naming the input image, optional
//! classification/rendering/casting overrides, and the output paths.

pub mod edges;
pub mod visibility;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
