//! Interactive crop-region engine and the egui window around it.
//!
//! The engine is a handful of value types and pure functions:
//! [`mapper`] converts between display and image pixel-space, [`aspect`]
//! seeds ratio-locked rectangles, [`model`] keeps the selection valid,
//! [`gesture`] turns pointer events into moves and corner resizes, and
//! [`export`] cuts the selected pixels out of the source image.

pub mod app;
pub mod aspect;
pub mod config;
pub mod export;
pub mod geometry;
pub mod gesture;
pub mod mapper;
pub mod model;

pub use aspect::{AspectRatioMode, AspectRatioSpec, InputError};
pub use config::CropperConfig;
pub use export::ExportError;
pub use geometry::{Bounds, CropRect, ImageBounds, ViewportBounds};
pub use gesture::{Corner, GestureMachine, GestureState, PointerEvent, PointerKind};
pub use mapper::CoordinateMapper;
pub use model::CropModel;
