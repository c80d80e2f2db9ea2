//! The current crop selection: the single source of truth for the rectangle.

use eframe::egui;

use crate::geometry::{CropRect, ImageBounds};

/// Smallest crop side, in display units. Converted to image space through
/// the coordinate mapper before it reaches the model.
pub const MIN_SIZE: f32 = 50.0;

/// Holds the selection and keeps it valid for the loaded image.
///
/// Every write goes through [`clamp`](Self::clamp), so the stored rectangle
/// always sits inside the image and is at least the minimum size (or the
/// whole image, for images smaller than that).
#[derive(Clone, Debug, PartialEq)]
pub struct CropModel {
    image: ImageBounds,
    rect: CropRect,
    min_size: egui::Vec2,
}

impl CropModel {
    pub fn new(image: ImageBounds) -> Self {
        Self {
            image,
            rect: CropRect::full(image),
            min_size: egui::Vec2::splat(MIN_SIZE),
        }
    }

    pub fn get(&self) -> CropRect {
        self.rect
    }

    pub fn image(&self) -> ImageBounds {
        self.image
    }

    /// The minimum side lengths actually enforced, in image space.
    pub fn min_size(&self) -> egui::Vec2 {
        egui::vec2(
            self.min_size.x.min(self.image.width),
            self.min_size.y.min(self.image.height),
        )
    }

    /// Update the image-space minimum (it follows the viewport scale).
    /// The stored rectangle is re-clamped against it.
    pub fn set_min_size(&mut self, min_size: egui::Vec2) {
        if !min_size.x.is_finite() || !min_size.y.is_finite() {
            return;
        }
        let min_size = min_size.max(egui::Vec2::ZERO);
        if min_size != self.min_size {
            self.min_size = min_size;
            self.rect = self.clamp(self.rect);
        }
    }

    pub fn set(&mut self, rect: CropRect) -> CropRect {
        self.rect = self.clamp(rect);
        self.rect
    }

    /// Back to the full image, or to a newly loaded one.
    pub fn reset(&mut self, image: ImageBounds) {
        self.image = image;
        self.rect = CropRect::full(image);
    }

    /// Force `rect` into the image and up to the minimum size.
    ///
    /// Width and height are settled first, then the origin is pulled inside,
    /// so an oversize rectangle shrinks rather than sliding off an edge.
    pub fn clamp(&self, rect: CropRect) -> CropRect {
        if !rect.is_finite() {
            log::warn!("discarding non-finite crop rect {rect:?}");
            return CropRect::full(self.image);
        }
        let min = self.min_size();
        let width = rect.width.max(min.x).min(self.image.width);
        let height = rect.height.max(min.y).min(self.image.height);
        CropRect::new(
            rect.x.min(self.image.width - width).max(0.0),
            rect.y.min(self.image.height - height).max(0.0),
            width,
            height,
        )
    }
}
