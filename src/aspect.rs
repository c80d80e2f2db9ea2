//! Aspect ratio selection and the centered-rectangle resolver.

use std::fmt;
use std::str::FromStr;

use crate::geometry::{CropRect, ImageBounds};

/// Largest part accepted for a custom ratio in the UI.
pub const MAX_RATIO_PART: u32 = 100;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("ratio parts must be positive, got {width_parts}:{height_parts}")]
    NonPositiveRatioPart { width_parts: i64, height_parts: i64 },

    #[error("ratio must be a positive finite number, got {0}")]
    InvalidRatio(f32),

    #[error("unrecognised aspect ratio `{0}` (expected free, W:H or a number)")]
    UnknownRatio(String),
}

/// What the crop rectangle's width/height is locked to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AspectRatioSpec {
    #[default]
    Free,
    Fixed(f32),
    Custom { width_parts: u32, height_parts: u32 },
}

impl AspectRatioSpec {
    pub fn fixed(ratio: f32) -> Result<Self, InputError> {
        if ratio.is_finite() && ratio > 0.0 {
            Ok(Self::Fixed(ratio))
        } else {
            Err(InputError::InvalidRatio(ratio))
        }
    }

    pub fn try_custom(width_parts: i64, height_parts: i64) -> Result<Self, InputError> {
        if width_parts < 1 || height_parts < 1 {
            return Err(InputError::NonPositiveRatioPart {
                width_parts,
                height_parts,
            });
        }
        Ok(Self::Custom {
            width_parts: width_parts.min(u32::MAX as i64) as u32,
            height_parts: height_parts.min(u32::MAX as i64) as u32,
        })
    }

    /// Build a custom ratio from raw UI input, replacing any part below 1 with 1.
    pub fn custom(width_parts: i64, height_parts: i64) -> Self {
        match Self::try_custom(width_parts, height_parts) {
            Ok(spec) => spec,
            Err(e) => {
                log::warn!("{e}; defaulting bad parts to 1");
                Self::Custom {
                    width_parts: width_parts.clamp(1, u32::MAX as i64) as u32,
                    height_parts: height_parts.clamp(1, u32::MAX as i64) as u32,
                }
            }
        }
    }

    /// `width / height`, or `None` for [`Free`](Self::Free) and for ratios
    /// that are not positive and finite.
    pub fn ratio(&self) -> Option<f32> {
        let r = match *self {
            Self::Free => return None,
            Self::Fixed(r) => r,
            Self::Custom {
                width_parts,
                height_parts,
            } => width_parts as f32 / height_parts as f32,
        };
        (r.is_finite() && r > 0.0).then_some(r)
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// The same lock with width and height exchanged.
    pub fn flipped(self) -> Self {
        match self {
            Self::Free => Self::Free,
            Self::Fixed(r) => Self::Fixed(1.0 / r),
            Self::Custom {
                width_parts,
                height_parts,
            } => Self::Custom {
                width_parts: height_parts,
                height_parts: width_parts,
            },
        }
    }
}

impl fmt::Display for AspectRatioSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Fixed(r) => write!(f, "{r}"),
            Self::Custom {
                width_parts,
                height_parts,
            } => write!(f, "{width_parts}:{height_parts}"),
        }
    }
}

impl FromStr for AspectRatioSpec {
    type Err = InputError;

    /// Accepts `free`, `W:H` with integer parts, or a decimal ratio such as `1.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("free") {
            return Ok(Self::Free);
        }
        if let Some((w, h)) = s.split_once(':') {
            let parse = |p: &str| {
                p.trim()
                    .parse::<i64>()
                    .map_err(|_| InputError::UnknownRatio(s.to_string()))
            };
            return Self::try_custom(parse(w)?, parse(h)?);
        }
        let ratio: f32 = s
            .parse()
            .map_err(|_| InputError::UnknownRatio(s.to_string()))?;
        Self::fixed(ratio)
    }
}

/// The presets offered in the ratio picker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AspectRatioMode {
    #[default]
    Free,
    Original,
    Square,
    // Landscape
    R3_2,
    R4_3,
    R16_9,
    R16_10,
    // Portrait
    R2_3,
    R3_4,
    R9_16,
    R10_16,
    Custom,
}

impl AspectRatioMode {
    pub const LANDSCAPE: [Self; 4] = [Self::R3_2, Self::R4_3, Self::R16_9, Self::R16_10];
    pub const PORTRAIT: [Self; 4] = [Self::R2_3, Self::R3_4, Self::R9_16, Self::R10_16];

    /// The same preset in the other orientation.
    pub fn counterpart(&self) -> Self {
        match self {
            Self::R3_2 => Self::R2_3,
            Self::R4_3 => Self::R3_4,
            Self::R16_9 => Self::R9_16,
            Self::R16_10 => Self::R10_16,
            Self::R2_3 => Self::R3_2,
            Self::R3_4 => Self::R4_3,
            Self::R9_16 => Self::R16_9,
            Self::R10_16 => Self::R16_10,
            other => *other,
        }
    }

    /// Resolve to a concrete lock. `Original` needs the image, `Custom` the
    /// user's parts.
    pub fn to_spec(self, image: ImageBounds, custom_w: u32, custom_h: u32) -> AspectRatioSpec {
        let parts = |w, h| AspectRatioSpec::Custom {
            width_parts: w,
            height_parts: h,
        };
        match self {
            Self::Free => AspectRatioSpec::Free,
            Self::Original => image
                .aspect()
                .map_or(AspectRatioSpec::Free, AspectRatioSpec::Fixed),
            Self::Square => parts(1, 1),
            Self::R3_2 => parts(3, 2),
            Self::R4_3 => parts(4, 3),
            Self::R16_9 => parts(16, 9),
            Self::R16_10 => parts(16, 10),
            Self::R2_3 => parts(2, 3),
            Self::R3_4 => parts(3, 4),
            Self::R9_16 => parts(9, 16),
            Self::R10_16 => parts(10, 16),
            Self::Custom => AspectRatioSpec::custom(custom_w as i64, custom_h as i64),
        }
    }
}

impl fmt::Display for AspectRatioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Free => "Free",
            Self::Original => "Original",
            Self::Square => "1:1",
            Self::R3_2 => "3:2",
            Self::R4_3 => "4:3",
            Self::R16_9 => "16:9",
            Self::R16_10 => "16:10",
            Self::R2_3 => "2:3",
            Self::R3_4 => "3:4",
            Self::R9_16 => "9:16",
            Self::R10_16 => "10:16",
            Self::Custom => "Custom",
        };
        write!(f, "{}", s)
    }
}

/// Largest rectangle of `ratio` that fits centered in `image`.
pub fn centered_rect(ratio: f32, image: ImageBounds) -> CropRect {
    let (width, height) = if image.width / image.height > ratio {
        // Image is wider than the ratio: height-limited.
        (image.height * ratio, image.height)
    } else {
        (image.width, image.width / ratio)
    };
    CropRect::new(
        (image.width - width) / 2.0,
        (image.height - height) / 2.0,
        width,
        height,
    )
}

/// Seed the crop rectangle for `spec`.
///
/// `Free` hands back `current` untouched. A lock whose ratio is not a
/// positive finite number is refused the same way, since upstream validation
/// should have stopped it.
pub fn apply(spec: AspectRatioSpec, image: ImageBounds, current: CropRect) -> CropRect {
    if spec.is_free() || !image.is_valid() {
        return current;
    }
    match spec.ratio() {
        Some(ratio) => {
            let rect = centered_rect(ratio, image);
            log::debug!("aspect {spec} on {}x{} -> {rect:?}", image.width, image.height);
            rect
        }
        None => {
            log::warn!("ignoring aspect lock with unusable ratio: {spec}");
            current
        }
    }
}
