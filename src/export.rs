//! Pull the selected pixels out of the source image and save them.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::geometry::{Bounds, CropRect};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No image loaded to crop")]
    SourceUnavailable,

    #[error("Crop rectangle has no area ({width}x{height})")]
    DegenerateRect { width: f32, height: f32 },

    #[error("Failed to save cropped image: {0}")]
    Save(#[from] image::ImageError),
}

/// Pixel-grid rectangle: `rect` rounded to whole pixels and clipped to the
/// image. Fails when nothing is left.
pub fn pixel_rect(rect: &CropRect, image: Bounds) -> Result<(u32, u32, u32, u32), ExportError> {
    let degenerate = || ExportError::DegenerateRect {
        width: rect.width,
        height: rect.height,
    };
    if !rect.is_finite() || rect.width <= 0.0 || rect.height <= 0.0 {
        return Err(degenerate());
    }
    let x0 = rect.x.round().clamp(0.0, image.width);
    let y0 = rect.y.round().clamp(0.0, image.height);
    let x1 = rect.right().round().clamp(0.0, image.width);
    let y1 = rect.bottom().round().clamp(0.0, image.height);
    if x1 - x0 < 1.0 || y1 - y0 < 1.0 {
        return Err(degenerate());
    }
    Ok((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
}

/// Copy the `rect` sub-image of `source` at 1:1 scale.
///
/// `source` is `None` when the image never decoded.
pub fn export(source: Option<&DynamicImage>, rect: &CropRect) -> Result<DynamicImage, ExportError> {
    let source = source.ok_or(ExportError::SourceUnavailable)?;
    let (x, y, width, height) = pixel_rect(rect, Bounds::from_image(source))?;
    log::info!("Cropping {}x{} at {},{}", width, height, x, y);
    Ok(source.crop_imm(x, y, width, height))
}

/// `photo.jpg` becomes `photo_cropped.jpg`. Sources without an extension get
/// `png`.
pub fn cropped_file_name(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let ext = source
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    PathBuf::from(format!("{stem}_cropped.{ext}"))
}

/// Write `image` to `path`; the encoding follows the path's extension.
pub fn save(image: &DynamicImage, path: &Path) -> Result<(), ExportError> {
    image.save(path)?;
    log::info!("Saved {}x{} crop to {}", image.width(), image.height(), path.display());
    Ok(())
}
