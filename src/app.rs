use std::path::{Path, PathBuf};

use eframe::egui;
use image::DynamicImage;

use crate::aspect::{self, AspectRatioMode, AspectRatioSpec, MAX_RATIO_PART};
use crate::config::CropperConfig;
use crate::export;
use crate::geometry::{Bounds, CropRect};
use crate::gesture::{Corner, GestureMachine, PointerEvent, PointerKind};
use crate::mapper::CoordinateMapper;
use crate::model::CropModel;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

enum Status {
    Info(String),
    Error(String),
}

pub struct ImageCropper {
    config: CropperConfig,
    image: Option<DynamicImage>,
    source_path: Option<PathBuf>,
    texture: Option<egui::TextureHandle>,
    model: Option<CropModel>,
    gesture: GestureMachine,
    aspect_ratio_mode: AspectRatioMode,
    /// Lock in force; follows `aspect_ratio_mode` once the user touches the picker.
    aspect: AspectRatioSpec,
    custom_w: u32,
    custom_h: u32,
    is_portrait: bool,
    status: Option<Status>,
}

impl ImageCropper {
    pub fn new(cc: &eframe::CreationContext<'_>, config: CropperConfig) -> Self {
        let mut app = Self::with_config(config);
        if let Some(path) = app.config.image.clone() {
            app.open(&path, &cc.egui_ctx);
        }
        app
    }

    fn with_config(config: CropperConfig) -> Self {
        let (aspect_ratio_mode, custom_w, custom_h) = match config.aspect {
            AspectRatioSpec::Custom {
                width_parts,
                height_parts,
            } => (
                AspectRatioMode::Custom,
                width_parts.min(MAX_RATIO_PART),
                height_parts.min(MAX_RATIO_PART),
            ),
            _ => (AspectRatioMode::Free, 4, 3),
        };
        Self {
            gesture: GestureMachine::new(config.handle_tolerance, config.min_size),
            aspect: config.aspect,
            image: None,
            source_path: None,
            texture: None,
            model: None,
            aspect_ratio_mode,
            custom_w,
            custom_h,
            is_portrait: false,
            status: None,
            config,
        }
    }

    fn open(&mut self, path: &Path, ctx: &egui::Context) {
        match image::open(path) {
            Ok(img) => {
                log::info!(
                    "Loaded {} ({}x{})",
                    path.display(),
                    img.width(),
                    img.height()
                );
                self.image = Some(img);
                self.source_path = Some(path.to_path_buf());
                self.load_texture(ctx);
                self.status = None;
            }
            Err(e) => {
                log::error!("Failed to open {}: {}", path.display(), e);
                self.status = Some(Status::Error(format!("Could not open image: {e}")));
            }
        }
    }

    fn load_texture(&mut self, ctx: &egui::Context) {
        if let Some(image) = &self.image {
            let size = [image.width() as _, image.height() as _];
            let image_buffer = image.to_rgba8();
            let pixels = image_buffer.as_flat_samples();
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice());
            self.texture =
                Some(ctx.load_texture("image", color_image, egui::TextureOptions::LINEAR));

            let bounds = Bounds::from_image(image);
            self.model
                .get_or_insert_with(|| CropModel::new(bounds))
                .reset(bounds);
            self.gesture.cancel();
            if self.aspect_ratio_mode == AspectRatioMode::Original {
                self.aspect = self.selected_spec();
            }
            if !self.aspect.is_free() {
                self.apply_aspect_ratio();
            }
        }
    }

    fn selected_spec(&self) -> AspectRatioSpec {
        let bounds = self
            .model
            .as_ref()
            .map_or(Bounds::new(1.0, 1.0), |m| m.image());
        self.aspect_ratio_mode
            .to_spec(bounds, self.custom_w, self.custom_h)
    }

    /// Switch the picker to `mode` and re-seed the rectangle if the lock changed.
    ///
    /// Picking `Free` while a command-line lock is active clears that lock even
    /// though the picker already shows `Free`.
    fn pick_aspect(&mut self, mode: AspectRatioMode) {
        self.aspect_ratio_mode = mode;
        let spec = self.selected_spec();
        if spec != self.aspect {
            self.aspect = spec;
            self.apply_aspect_ratio();
        }
    }

    fn apply_aspect_ratio(&mut self) {
        if let Some(model) = &mut self.model {
            let rect = aspect::apply(self.aspect, model.image(), model.get());
            let stored = model.set(rect);
            log::info!("Aspect {} -> {:?}", self.aspect, stored);
        }
    }

    fn reset_crop(&mut self) {
        if let Some(model) = &mut self.model {
            self.gesture.cancel();
            model.reset(model.image());
            log::info!("Crop reset to {:?}", model.get());
        }
    }

    fn save_cropped(&mut self) {
        let rect = self
            .model
            .as_ref()
            .map_or(CropRect::new(0.0, 0.0, 0.0, 0.0), |m| m.get());
        let cropped = match export::export(self.image.as_ref(), &rect) {
            Ok(cropped) => cropped,
            Err(e) => {
                log::error!("{e}");
                self.status = Some(Status::Error(e.to_string()));
                return;
            }
        };

        let file_name = self
            .source_path
            .as_deref()
            .map_or_else(|| PathBuf::from("image_cropped.png"), export::cropped_file_name);
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", IMAGE_EXTENSIONS)
            .set_file_name(file_name.to_string_lossy())
            .save_file()
        else {
            return;
        };

        self.status = Some(match export::save(&cropped, &path) {
            Ok(()) => Status::Info(format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("{e}");
                Status::Error(e.to_string())
            }
        });
    }

    fn aspect_controls(&mut self, ui: &mut egui::Ui) {
        ui.label("Aspect Ratio:");
        let mut changed = false;
        let mut picked = None;
        let cli_lock = self.aspect_ratio_mode == AspectRatioMode::Free && !self.aspect.is_free();
        let selected_text = if cli_lock {
            self.aspect.to_string()
        } else {
            self.aspect_ratio_mode.to_string()
        };
        let oriented = if self.is_portrait {
            AspectRatioMode::PORTRAIT
        } else {
            AspectRatioMode::LANDSCAPE
        };
        let current = self.aspect_ratio_mode;
        egui::ComboBox::from_id_salt("params_aspect_ratio")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                let mut entry = |ui: &mut egui::Ui, mode: AspectRatioMode| {
                    if ui.selectable_label(current == mode, mode.to_string()).clicked() {
                        picked = Some(mode);
                    }
                };
                for mode in [
                    AspectRatioMode::Free,
                    AspectRatioMode::Original,
                    AspectRatioMode::Square,
                ] {
                    entry(ui, mode);
                }
                ui.separator();
                for mode in oriented {
                    entry(ui, mode);
                }
                ui.separator();
                entry(ui, AspectRatioMode::Custom);
            });
        if let Some(mode) = picked {
            self.pick_aspect(mode);
        }

        if ui.button("🔄").clicked() {
            self.is_portrait = !self.is_portrait;
            if self.aspect_ratio_mode == AspectRatioMode::Custom {
                std::mem::swap(&mut self.custom_w, &mut self.custom_h);
                changed = true;
            } else if self.aspect_ratio_mode == AspectRatioMode::Free {
                // A lock given on the command line has no preset; flip it directly.
                self.aspect = self.aspect.flipped();
                self.apply_aspect_ratio();
            } else {
                self.aspect_ratio_mode = self.aspect_ratio_mode.counterpart();
                changed = true;
            }
        }

        if self.aspect_ratio_mode == AspectRatioMode::Custom {
            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.custom_w)
                        .speed(0.1)
                        .range(1..=MAX_RATIO_PART),
                )
                .changed();
            ui.label(":");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.custom_h)
                        .speed(0.1)
                        .range(1..=MAX_RATIO_PART),
                )
                .changed();
        }

        if changed {
            self.pick_aspect(self.aspect_ratio_mode);
        }
    }

    /// Draws the image and crop overlay, and routes pointer input into the
    /// gesture machine.
    fn crop_view(&mut self, ui: &mut egui::Ui) {
        let (Some(texture), Some(model)) = (&self.texture, &mut self.model) else {
            return;
        };
        const PADDING: f32 = 20.0;
        let available_size = ui.available_size();
        let max_size = available_size - egui::vec2(PADDING * 2.0, PADDING * 2.0);
        let image_size = texture.size_vec2();

        // Calculate size to fit within available space while maintaining aspect ratio
        let scale = (max_size.x / image_size.x).min(max_size.y / image_size.y);
        let display_size = image_size * scale;

        let total_display_size = display_size + egui::vec2(PADDING * 2.0, PADDING * 2.0);

        // Manual centering
        let x_offset = (available_size.x - total_display_size.x) / 2.0;
        let y_offset = (available_size.y - total_display_size.y) / 2.0;
        let start_pos = ui.cursor().min + egui::vec2(x_offset.max(0.0), y_offset.max(0.0));

        let target_rect = egui::Rect::from_min_size(start_pos, total_display_size);

        let response = ui.allocate_rect(target_rect, egui::Sense::drag());
        let painter = ui.painter_at(target_rect);

        let image_rect = egui::Rect::from_min_size(
            target_rect.min + egui::vec2(PADDING, PADDING),
            display_size,
        );

        painter.image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        // Rebuilt every frame: the window may have been resized since the last event.
        let mapper = CoordinateMapper::new(Bounds::from(image_rect.size()), model.image());
        let local = |pos: egui::Pos2| (pos - image_rect.min).to_pos2();

        let event = if response.drag_started() {
            ui.input(|i| i.pointer.press_origin())
                .or(response.interact_pointer_pos())
                .map(|pos| PointerEvent::new(PointerKind::Down, local(pos)))
        } else if response.drag_stopped() {
            let pos = response.interact_pointer_pos().unwrap_or(image_rect.min);
            Some(PointerEvent::new(PointerKind::Up, local(pos)))
        } else if self.gesture.is_active() && !response.contains_pointer() {
            let pos = ui.input(|i| i.pointer.latest_pos()).unwrap_or(image_rect.min);
            Some(PointerEvent::new(PointerKind::Leave, local(pos)))
        } else if response.dragged() {
            response
                .interact_pointer_pos()
                .map(|pos| PointerEvent::new(PointerKind::Move, local(pos)))
        } else {
            None
        };
        if let Some(event) = event {
            if let Some(committed) = self.gesture.handle(event, model, &mapper, self.aspect) {
                log::debug!("Crop committed: {committed:?}");
            }
        }

        let screen_crop_rect = mapper
            .rect_to_display_space(&model.get())
            .translate(image_rect.min.to_vec2());

        // Draw overlay (dimmed area outside crop)
        let overlay_color = egui::Color32::from_black_alpha(self.config.overlay_alpha);

        // Top
        painter.rect_filled(
            egui::Rect::from_min_max(
                image_rect.min,
                egui::pos2(image_rect.max.x, screen_crop_rect.min.y),
            ),
            0.0,
            overlay_color,
        );
        // Bottom
        painter.rect_filled(
            egui::Rect::from_min_max(
                egui::pos2(image_rect.min.x, screen_crop_rect.max.y),
                image_rect.max,
            ),
            0.0,
            overlay_color,
        );
        // Left
        painter.rect_filled(
            egui::Rect::from_min_max(
                egui::pos2(image_rect.min.x, screen_crop_rect.min.y),
                egui::pos2(screen_crop_rect.min.x, screen_crop_rect.max.y),
            ),
            0.0,
            overlay_color,
        );
        // Right
        painter.rect_filled(
            egui::Rect::from_min_max(
                egui::pos2(screen_crop_rect.max.x, screen_crop_rect.min.y),
                egui::pos2(image_rect.max.x, screen_crop_rect.max.y),
            ),
            0.0,
            overlay_color,
        );

        painter.rect_stroke(
            screen_crop_rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::WHITE),
        );

        let handle_stroke = egui::Stroke::new(1.0, egui::Color32::BLACK);
        for corner in Corner::PRIORITY {
            painter.circle(
                corner.of(screen_crop_rect),
                self.config.handle_radius,
                egui::Color32::WHITE,
                handle_stroke,
            );
        }
    }
}

impl eframe::App for ImageCropper {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle dropped files
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .first()
                .and_then(|file| file.path.clone())
        });
        if let Some(path) = dropped {
            self.open(&path, ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open Image").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Image", IMAGE_EXTENSIONS)
                        .pick_file()
                    {
                        self.open(&path, ctx);
                    }
                }

                if self.texture.is_some() {
                    self.aspect_controls(ui);

                    if ui.button("Reset").clicked() {
                        self.reset_crop();
                    }
                    if ui.button("Save Cropped Image").clicked() {
                        self.save_cropped();
                    }
                }
            });

            ui.horizontal(|ui| {
                if let Some(model) = &self.model {
                    let r = model.get();
                    ui.monospace(format!(
                        "{:.0}, {:.0}  {:.0} × {:.0}",
                        r.x, r.y, r.width, r.height
                    ));
                }
                match &self.status {
                    Some(Status::Info(msg)) => {
                        ui.label(msg);
                    }
                    Some(Status::Error(msg)) => {
                        ui.colored_label(egui::Color32::LIGHT_RED, msg);
                    }
                    None => {}
                }
            });

            ui.separator();
            self.crop_view(ui);
        });
    }
}
