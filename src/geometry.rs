//! Plain value types shared by the crop engine.
//!
//! Everything here is in `f32` so it lines up with egui's `Pos2`/`Vec2`.

use eframe::egui;

/// A width/height pair. Used both for the image's natural pixel size and for
/// the on-screen viewport it is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// Natural pixel dimensions of the loaded image.
pub type ImageBounds = Bounds;

/// Size of the rendered display area, in display units.
pub type ViewportBounds = Bounds;

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_image(image: &image::DynamicImage) -> Self {
        Self::new(image.width() as f32, image.height() as f32)
    }

    /// `width / height`, or `None` when either side is not a positive finite number.
    pub fn aspect(self) -> Option<f32> {
        if self.is_valid() {
            Some(self.width / self.height)
        } else {
            None
        }
    }

    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl From<egui::Vec2> for Bounds {
    fn from(v: egui::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// The crop selection, in image pixel-space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle covering the whole image.
    pub fn full(image: ImageBounds) -> Self {
        Self::new(0.0, 0.0, image.width, image.height)
    }

    pub fn min(&self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }

    pub fn max(&self) -> egui::Pos2 {
        egui::pos2(self.x + self.width, self.y + self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, p: egui::Pos2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// True when the rectangle lies fully inside `image`.
    pub fn is_within(&self, image: ImageBounds) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= image.width
            && self.bottom() <= image.height
    }

    pub fn to_egui(self) -> egui::Rect {
        egui::Rect::from_min_max(self.min(), self.max())
    }
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * a.abs().max(b.abs()).max(1.0)
}
