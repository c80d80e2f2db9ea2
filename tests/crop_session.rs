use cropper::aspect;
use cropper::export::{self, ExportError};
use cropper::{
    AspectRatioSpec, Bounds, CoordinateMapper, CropModel, CropRect, GestureMachine, PointerEvent,
    PointerKind,
};
use eframe::egui;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

fn ev(kind: PointerKind, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(kind, egui::pos2(x, y))
}

fn checkerboard(w: u32, h: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(w, h, |x, y| {
        if (x / 10 + y / 10) % 2 == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    }))
}

#[test]
fn scaled_view_session_exports_selected_region() {
    let source = checkerboard(1000, 800);
    let image = Bounds::from_image(&source);
    let mut model = CropModel::new(image);
    let mut gestures = GestureMachine::default();
    // Shown at half size.
    let mapper = CoordinateMapper::new(Bounds::new(500.0, 400.0), image);
    let spec = AspectRatioSpec::custom(1, 1);

    let seeded = model.set(aspect::apply(spec, image, model.get()));
    assert_eq!(seeded, CropRect::new(100.0, 0.0, 800.0, 800.0));

    // Grab the top-left handle (display 50,0) and pull it in by 100 display units.
    gestures.handle(ev(PointerKind::Down, 52.0, 3.0), &mut model, &mapper, spec);
    gestures.handle(ev(PointerKind::Move, 150.0, 80.0), &mut model, &mapper, spec);
    let committed = gestures
        .handle(ev(PointerKind::Up, 150.0, 80.0), &mut model, &mapper, spec)
        .expect("resize gesture should commit");
    assert_eq!(committed, CropRect::new(300.0, 200.0, 600.0, 600.0));

    // Drag the body far to the left; the rect stops at the image edge.
    gestures.handle(ev(PointerKind::Down, 300.0, 250.0), &mut model, &mapper, spec);
    gestures.handle(ev(PointerKind::Move, -400.0, 250.0), &mut model, &mapper, spec);
    gestures.handle(ev(PointerKind::Leave, -400.0, 250.0), &mut model, &mapper, spec);
    assert_eq!(model.get(), CropRect::new(0.0, 200.0, 600.0, 600.0));

    let out = export::export(Some(&source), &model.get()).unwrap();
    assert_eq!(out.dimensions(), (600, 600));
    assert_eq!(out.get_pixel(0, 0), source.get_pixel(0, 200));
}

#[test]
fn reset_after_gestures_restores_full_image() {
    let image = Bounds::new(640.0, 480.0);
    let mut model = CropModel::new(image);
    let mut gestures = GestureMachine::default();
    let mapper = CoordinateMapper::new(image, image);
    let free = AspectRatioSpec::Free;

    gestures.handle(ev(PointerKind::Down, 640.0, 480.0), &mut model, &mapper, free);
    gestures.handle(ev(PointerKind::Move, 300.0, 200.0), &mut model, &mapper, free);
    gestures.handle(ev(PointerKind::Up, 300.0, 200.0), &mut model, &mapper, free);
    gestures.handle(ev(PointerKind::Down, 100.0, 100.0), &mut model, &mapper, free);
    gestures.handle(ev(PointerKind::Move, 250.0, 260.0), &mut model, &mapper, free);
    gestures.handle(ev(PointerKind::Up, 250.0, 260.0), &mut model, &mapper, free);
    assert_ne!(model.get(), CropRect::full(image));

    model.reset(image);
    assert_eq!(model.get(), CropRect::new(0.0, 0.0, 640.0, 480.0));
}

#[test]
fn zero_ratio_part_never_yields_empty_bitmap() {
    let source = checkerboard(100, 100);
    let bad = CropRect::new(0.0, 0.0, 0.0, 100.0);
    assert!(matches!(
        export::export(Some(&source), &bad),
        Err(ExportError::DegenerateRect { .. })
    ));
    // The same input through the UI path is repaired to a 1:1 part instead.
    assert_eq!(AspectRatioSpec::custom(0, 1).ratio(), Some(1.0));
}
