//! Runtime settings for the cropper window.
//!
//! Built from the command line in `main.rs`; everything has a default so the
//! window can also be started with no arguments at all.

use std::path::PathBuf;

use crate::aspect::AspectRatioSpec;
use crate::gesture::HANDLE_TOLERANCE;
use crate::model::MIN_SIZE;

#[derive(Clone, Debug, PartialEq)]
pub struct CropperConfig {
    /// Image to open at start-up.
    pub image: Option<PathBuf>,
    /// Initial aspect lock.
    pub aspect: AspectRatioSpec,
    /// Smallest crop side, display units.
    pub min_size: f32,
    /// Corner hit radius, display units.
    pub handle_tolerance: f32,
    /// Drawn corner handle radius.
    pub handle_radius: f32,
    /// Alpha of the dimming drawn outside the crop.
    pub overlay_alpha: u8,
    pub window_size: [f32; 2],
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            image: None,
            aspect: AspectRatioSpec::Free,
            min_size: MIN_SIZE,
            handle_tolerance: HANDLE_TOLERANCE,
            handle_radius: 6.0,
            overlay_alpha: 150,
            window_size: [800.0, 600.0],
        }
    }
}

impl CropperConfig {
    pub fn validate(&self) -> Result<(), String> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(format!("{name} must be a positive number, got {v}"))
            }
        };
        positive("min-size", self.min_size)?;
        positive("handle-tolerance", self.handle_tolerance)?;
        positive("handle-radius", self.handle_radius)?;
        if !self.aspect.is_free() && self.aspect.ratio().is_none() {
            return Err(format!("aspect {} has no usable ratio", self.aspect));
        }
        if let Some(path) = &self.image {
            if !path.exists() {
                return Err(format!("image not found: {}", path.display()));
            }
        }
        Ok(())
    }
}
