#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cropper::aspect::AspectRatioSpec;
use cropper::app::ImageCropper;
use cropper::config::CropperConfig;
use eframe::egui;

/// Crop an image interactively: drag the selection, resize it from any
/// corner, optionally locked to an aspect ratio, then save the result.
#[derive(Parser, Debug)]
#[command(name = "cropper")]
struct Args {
    /// Image to open at start-up
    image: Option<PathBuf>,

    /// Aspect lock: `free`, `W:H` (e.g. 16:9) or a decimal ratio (e.g. 1.5)
    #[arg(short, long, default_value = "free")]
    aspect: AspectRatioSpec,

    /// Smallest crop side, in display units
    #[arg(long, default_value_t = cropper::model::MIN_SIZE)]
    min_size: f32,

    /// Corner grab radius, in display units
    #[arg(long, default_value_t = cropper::gesture::HANDLE_TOLERANCE)]
    handle_tolerance: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = CropperConfig {
        image: args.image,
        aspect: args.aspect,
        min_size: args.min_size,
        handle_tolerance: args.handle_tolerance,
        ..Default::default()
    };
    config.validate().map_err(anyhow::Error::msg)?;
    log::info!("Starting with aspect {}", config.aspect);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };
    eframe::run_native(
        "Image Cropper",
        options,
        Box::new(|cc| Ok(Box::new(ImageCropper::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
