//! Conversion between viewport (display) coordinates and image pixel-space.
//!
//! The image is always stretched to fill the viewport, so the horizontal and
//! vertical scale factors are independent. Display points are relative to the
//! viewport's top-left corner.

use eframe::egui;

use crate::geometry::{CropRect, ImageBounds, ViewportBounds};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    pub viewport: ViewportBounds,
    pub image: ImageBounds,
}

impl CoordinateMapper {
    pub fn new(viewport: ViewportBounds, image: ImageBounds) -> Self {
        Self { viewport, image }
    }

    /// Image units per display unit on each axis.
    ///
    /// A collapsed viewport (zero or non-finite side) maps 1:1 on that axis.
    pub fn scale(&self) -> egui::Vec2 {
        let axis = |image: f32, viewport: f32| {
            if viewport > 0.0 && viewport.is_finite() && image.is_finite() {
                image / viewport
            } else {
                1.0
            }
        };
        egui::vec2(
            axis(self.image.width, self.viewport.width),
            axis(self.image.height, self.viewport.height),
        )
    }

    pub fn to_image_space(&self, display: egui::Pos2) -> egui::Pos2 {
        let s = self.scale();
        egui::pos2(display.x * s.x, display.y * s.y)
    }

    pub fn to_display_space(&self, image: egui::Pos2) -> egui::Pos2 {
        let s = self.scale();
        egui::pos2(image.x / s.x, image.y / s.y)
    }

    /// Scale a display-space extent (not a position) into image space.
    pub fn size_to_image_space(&self, display: egui::Vec2) -> egui::Vec2 {
        display * self.scale()
    }

    pub fn rect_to_display_space(&self, rect: &CropRect) -> egui::Rect {
        egui::Rect::from_min_max(
            self.to_display_space(rect.min()),
            self.to_display_space(rect.max()),
        )
    }
}

/// One-shot form of [`CoordinateMapper::to_image_space`].
pub fn to_image_space(
    display: egui::Pos2,
    viewport: ViewportBounds,
    image: ImageBounds,
) -> egui::Pos2 {
    CoordinateMapper::new(viewport, image).to_image_space(display)
}

/// One-shot form of [`CoordinateMapper::to_display_space`].
pub fn to_display_space(
    point: egui::Pos2,
    viewport: ViewportBounds,
    image: ImageBounds,
) -> egui::Pos2 {
    CoordinateMapper::new(viewport, image).to_display_space(point)
}
