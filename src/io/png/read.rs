//! Image reading operations.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

/// Decode any supported image file into straight-alpha RGBA.
pub(crate) fn read_image(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("[io::png::read] Failed to read image file: {}", path.display()))?;
    let image = image::load_from_memory(&bytes)
        .with_context(|| format!("[io::png::read] Failed to decode image {:?}", path))?;
    Ok(image.to_rgba8())
}
