//! PNG writing operations.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

/// Write `image` as a PNG, creating the parent directory if needed.
pub(crate) fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("[io::png::write] Failed to create output directory: {}", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        image.as_raw(),
        image.width(),
        image.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("[io::png::write] Failed to write PNG to {:?}", path))
}
