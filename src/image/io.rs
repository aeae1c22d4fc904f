//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned RGB buffer (alpha dropped).
//! - `save_rgb_image`: write a rendered canvas to disk.
//! - `write_json_file`: pretty-print a report or segment list to disk.
use super::RgbImageU8;
use image::RgbImage;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|p| p.0).collect();
    RgbImageU8::new(width, height, data)
}

/// Save an RGB canvas; the format follows the file extension.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<(), String> {
    create_parent_dirs(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Write a report or segment list as pretty JSON, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    create_parent_dirs(path)?;
    let file =
        File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))?;
    writer
        .flush()
        .map_err(|e| format!("Failed to flush {}: {e}", path.display()))
}

/// Create the parent directory of `path` when it names one.
fn create_parent_dirs(path: &Path) -> Result<(), String> {
    match path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create output directory {}: {e}", dir.display())),
        None => Ok(()),
    }
}
