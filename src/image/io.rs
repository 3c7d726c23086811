//! Disk helpers used by the bundled tools.
//!
//! - `read_bytes`: slurp a file with a readable error.
//! - `save_grayscale_u8`: write an 8-bit gray buffer (e.g. an edge map) to PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::u8::GrayImageU8;
use super::ImageView;
use image::{GrayImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn read_bytes(path: &Path) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))
}

/// Save an 8-bit grayscale buffer to a PNG, creating parent directories.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image: GrayImage = ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.as_raw().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
