//! Pointer gesture handling: move the crop rectangle or resize it from a corner.
//!
//! Every pointer-move recomputes the rectangle from the anchor captured at
//! pointer-down, never from the previous move, so dropped or reordered move
//! events cannot make the rectangle drift.

use eframe::egui;

use crate::aspect::AspectRatioSpec;
use crate::geometry::{CropRect, ImageBounds};
use crate::mapper::CoordinateMapper;
use crate::model::CropModel;

/// Corner hit radius, in display units.
pub const HANDLE_TOLERANCE: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Hit-test order. Earlier entries win when handles overlap.
    pub const PRIORITY: [Corner; 4] = [
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopRight,
        Corner::TopLeft,
    ];

    fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Position of this corner on `rect`.
    pub fn of(self, rect: egui::Rect) -> egui::Pos2 {
        match self {
            Corner::TopLeft => rect.left_top(),
            Corner::TopRight => rect.right_top(),
            Corner::BottomLeft => rect.left_bottom(),
            Corner::BottomRight => rect.right_bottom(),
        }
    }

    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }
}

/// Where a pointer-down landed relative to the crop rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    Corner(Corner),
    Body,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureState {
    Idle,
    /// `anchor` is the pointer's image-space offset from the rect's top-left.
    Dragging { anchor: egui::Vec2 },
    Resizing { corner: Corner, anchor_rect: CropRect },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Leave,
}

/// A pointer event in display space, relative to the viewport origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pos: egui::Pos2,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, pos: egui::Pos2) -> Self {
        Self { kind, pos }
    }
}

/// Classify a display-space point against the (image-space) crop rect.
pub fn hit_test(
    pos: egui::Pos2,
    rect: &CropRect,
    mapper: &CoordinateMapper,
    tolerance: f32,
) -> Option<Hit> {
    let screen = mapper.rect_to_display_space(rect);
    for corner in Corner::PRIORITY {
        if pos.distance(corner.of(screen)) < tolerance {
            return Some(Hit::Corner(corner));
        }
    }
    if rect.contains(mapper.to_image_space(pos)) {
        return Some(Hit::Body);
    }
    None
}

/// Rectangle after dragging, clamped so it stays fully inside the image.
pub fn drag_rect(
    start: &CropRect,
    anchor: egui::Vec2,
    pointer: egui::Pos2,
    image: ImageBounds,
) -> CropRect {
    let origin = pointer - anchor;
    CropRect::new(
        origin.x.min(image.width - start.width).max(0.0),
        origin.y.min(image.height - start.height).max(0.0),
        start.width,
        start.height,
    )
}

/// Rectangle after moving `corner` to `pointer`, with the opposite corner of
/// `anchor_rect` held fixed.
///
/// Free resizing tracks the pointer on both axes. Under a ratio lock the
/// horizontal extent drives the width and the height is always re-derived
/// from it, which also keeps the fixed corner in place when the image edge
/// stops the growth.
pub fn resize_rect(
    anchor_rect: &CropRect,
    corner: Corner,
    pointer: egui::Pos2,
    ratio: Option<f32>,
    min_size: egui::Vec2,
    image: ImageBounds,
) -> CropRect {
    let fixed = corner.opposite().of(anchor_rect.to_egui());
    // Room between the fixed corner and the image edge on the moving side.
    let (room_x, reach_x) = if corner.is_left() {
        (fixed.x, fixed.x - pointer.x)
    } else {
        (image.width - fixed.x, pointer.x - fixed.x)
    };
    let (room_y, reach_y) = if corner.is_top() {
        (fixed.y, fixed.y - pointer.y)
    } else {
        (image.height - fixed.y, pointer.y - fixed.y)
    };

    let (width, height) = match ratio {
        None => (reach_x.max(min_size.x), reach_y.max(min_size.y)),
        Some(r) => {
            let min_w = min_size.x.max(min_size.y * r);
            let max_w = room_x.min(room_y * r);
            let width = reach_x.max(min_w).min(max_w.max(0.0));
            (width, width / r)
        }
    };

    let x = if corner.is_left() { fixed.x - width } else { fixed.x };
    let y = if corner.is_top() { fixed.y - height } else { fixed.y };
    clamp_to_image(CropRect::new(x, y, width, height), image)
}

/// Trim a candidate so it lies inside the image: a negative origin eats into
/// the size, an overhanging far edge is cut back.
pub fn clamp_to_image(mut rect: CropRect, image: ImageBounds) -> CropRect {
    if rect.x < 0.0 {
        rect.width += rect.x;
        rect.x = 0.0;
    }
    if rect.y < 0.0 {
        rect.height += rect.y;
        rect.y = 0.0;
    }
    if rect.right() > image.width {
        rect.width = image.width - rect.x;
    }
    if rect.bottom() > image.height {
        rect.height = image.height - rect.y;
    }
    rect
}

/// Drives [`GestureState`] from pointer events and writes results into the
/// crop model.
#[derive(Clone, Debug)]
pub struct GestureMachine {
    state: GestureState,
    tolerance: f32,
    min_size: f32,
}

impl Default for GestureMachine {
    fn default() -> Self {
        Self::new(HANDLE_TOLERANCE, crate::model::MIN_SIZE)
    }
}

impl GestureMachine {
    /// `tolerance` and `min_size` are in display units.
    pub fn new(tolerance: f32, min_size: f32) -> Self {
        Self {
            state: GestureState::Idle,
            tolerance,
            min_size,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != GestureState::Idle
    }

    /// Drop any gesture in progress without touching the model
    /// (used when the image is replaced).
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Feed one pointer event. Returns the committed rectangle when the
    /// event ends a gesture.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        model: &mut CropModel,
        mapper: &CoordinateMapper,
        spec: AspectRatioSpec,
    ) -> Option<CropRect> {
        model.set_min_size(mapper.size_to_image_space(egui::Vec2::splat(self.min_size)));
        match event.kind {
            PointerKind::Down => {
                self.pointer_down(event.pos, model, mapper);
                None
            }
            PointerKind::Move => {
                self.pointer_move(event.pos, model, mapper, spec);
                None
            }
            PointerKind::Up | PointerKind::Leave => self.pointer_up(model),
        }
    }

    fn pointer_down(&mut self, pos: egui::Pos2, model: &CropModel, mapper: &CoordinateMapper) {
        let rect = model.get();
        self.state = match hit_test(pos, &rect, mapper, self.tolerance) {
            Some(Hit::Corner(corner)) => GestureState::Resizing {
                corner,
                anchor_rect: rect,
            },
            Some(Hit::Body) => GestureState::Dragging {
                anchor: mapper.to_image_space(pos) - rect.min(),
            },
            None => GestureState::Idle,
        };
        log::debug!("pointer down at {pos:?} -> {:?}", self.state);
    }

    fn pointer_move(
        &mut self,
        pos: egui::Pos2,
        model: &mut CropModel,
        mapper: &CoordinateMapper,
        spec: AspectRatioSpec,
    ) {
        let pointer = mapper.to_image_space(pos);
        let image = model.image();
        let candidate = match self.state {
            GestureState::Idle => return,
            GestureState::Dragging { anchor } => drag_rect(&model.get(), anchor, pointer, image),
            GestureState::Resizing {
                corner,
                anchor_rect,
            } => resize_rect(
                &anchor_rect,
                corner,
                pointer,
                spec.ratio(),
                model.min_size(),
                image,
            ),
        };
        let stored = model.set(candidate);
        log::trace!("pointer move {pos:?} -> {stored:?}");
    }

    fn pointer_up(&mut self, model: &CropModel) -> Option<CropRect> {
        if self.state == GestureState::Idle {
            return None;
        }
        self.state = GestureState::Idle;
        let rect = model.get();
        log::debug!("gesture committed {rect:?}");
        Some(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Bounds, approx_eq};

    fn session(image: Bounds, rect: CropRect) -> (GestureMachine, CropModel, CoordinateMapper) {
        let mut model = CropModel::new(image);
        model.set(rect);
        // Viewport the same size as the image: display == image space.
        (GestureMachine::default(), model, CoordinateMapper::new(image, image))
    }

    fn ev(kind: PointerKind, x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(kind, egui::pos2(x, y))
    }

    #[test]
    fn hit_test_picks_corner_body_or_nothing() {
        let image = Bounds::new(1000.0, 1000.0);
        let mapper = CoordinateMapper::new(image, image);
        let rect = CropRect::new(100.0, 100.0, 200.0, 200.0);
        let hit = |x, y| hit_test(egui::pos2(x, y), &rect, &mapper, HANDLE_TOLERANCE);
        assert_eq!(hit(103.0, 98.0), Some(Hit::Corner(Corner::TopLeft)));
        assert_eq!(hit(300.0, 105.0), Some(Hit::Corner(Corner::TopRight)));
        assert_eq!(hit(95.0, 300.0), Some(Hit::Corner(Corner::BottomLeft)));
        assert_eq!(hit(299.0, 299.0), Some(Hit::Corner(Corner::BottomRight)));
        assert_eq!(hit(200.0, 200.0), Some(Hit::Body));
        assert_eq!(hit(50.0, 50.0), None);
    }

    #[test]
    fn hit_test_tolerance_is_in_display_units() {
        let image = Bounds::new(1000.0, 1000.0);
        // 4x downscaled view: 10 display units == 40 image pixels.
        let mapper = CoordinateMapper::new(Bounds::new(250.0, 250.0), image);
        let rect = CropRect::new(400.0, 400.0, 400.0, 400.0);
        assert_eq!(
            hit_test(egui::pos2(108.0, 100.0), &rect, &mapper, HANDLE_TOLERANCE),
            Some(Hit::Corner(Corner::TopLeft))
        );
    }

    #[test]
    fn overlapping_handles_prefer_bottom_right() {
        let image = Bounds::new(100.0, 100.0);
        let mapper = CoordinateMapper::new(image, image);
        let rect = CropRect::new(10.0, 10.0, 4.0, 4.0);
        let hit = hit_test(egui::pos2(12.0, 12.0), &rect, &mapper, HANDLE_TOLERANCE);
        assert_eq!(hit, Some(Hit::Corner(Corner::BottomRight)));
        // Only the left-hand handles reach this point.
        let hit = hit_test(egui::pos2(2.0, 12.0), &rect, &mapper, HANDLE_TOLERANCE);
        assert_eq!(hit, Some(Hit::Corner(Corner::BottomLeft)));
    }

    #[test]
    fn press_outside_stays_idle() {
        let (mut gm, mut model, mapper) =
            session(Bounds::new(500.0, 500.0), CropRect::new(100.0, 100.0, 100.0, 100.0));
        let before = model.get();
        let free = AspectRatioSpec::Free;
        gm.handle(ev(PointerKind::Down, 400.0, 400.0), &mut model, &mapper, free);
        assert_eq!(gm.state(), GestureState::Idle);
        gm.handle(ev(PointerKind::Move, 450.0, 450.0), &mut model, &mapper, free);
        assert_eq!(model.get(), before);
        assert_eq!(
            gm.handle(ev(PointerKind::Up, 450.0, 450.0), &mut model, &mapper, free),
            None
        );
    }

    #[test]
    fn drag_is_clamped_to_image() {
        let (mut gm, mut model, mapper) =
            session(Bounds::new(200.0, 200.0), CropRect::new(10.0, 10.0, 100.0, 100.0));
        let free = AspectRatioSpec::Free;
        gm.handle(ev(PointerKind::Down, 50.0, 50.0), &mut model, &mapper, free);
        assert_eq!(
            gm.state(),
            GestureState::Dragging {
                anchor: egui::vec2(40.0, 40.0)
            }
        );
        gm.handle(ev(PointerKind::Move, 550.0, 550.0), &mut model, &mapper, free);
        assert_eq!(model.get(), CropRect::new(100.0, 100.0, 100.0, 100.0));
        let committed = gm.handle(ev(PointerKind::Up, 550.0, 550.0), &mut model, &mapper, free);
        assert_eq!(committed, Some(CropRect::new(100.0, 100.0, 100.0, 100.0)));
        assert!(!gm.is_active());
    }

    #[test]
    fn drag_recomputes_from_anchor() {
        let image = Bounds::new(1000.0, 1000.0);
        let start = CropRect::new(100.0, 100.0, 200.0, 200.0);
        let free = AspectRatioSpec::Free;

        let (mut gm, mut model, mapper) = session(image, start);
        gm.handle(ev(PointerKind::Down, 150.0, 150.0), &mut model, &mapper, free);
        for i in 0..100 {
            let t = i as f32;
            let step = ev(PointerKind::Move, 150.0 + t * 1.37, 150.0 + t * 0.73);
            gm.handle(step, &mut model, &mapper, free);
        }
        gm.handle(ev(PointerKind::Move, 287.0, 223.0), &mut model, &mapper, free);
        let walked = model.get();

        // Jumping straight to the final position lands in the same place.
        let (mut gm, mut model, mapper) = session(image, start);
        gm.handle(ev(PointerKind::Down, 150.0, 150.0), &mut model, &mapper, free);
        gm.handle(ev(PointerKind::Move, 287.0, 223.0), &mut model, &mapper, free);
        assert_eq!(model.get(), walked);
        assert_eq!(walked, CropRect::new(237.0, 173.0, 200.0, 200.0));
    }

    #[test]
    fn drag_keeps_rect_inside_after_every_move() {
        let image = Bounds::new(640.0, 480.0);
        let (mut gm, mut model, mapper) = session(image, CropRect::new(200.0, 150.0, 120.0, 90.0));
        let free = AspectRatioSpec::Free;
        gm.handle(ev(PointerKind::Down, 260.0, 195.0), &mut model, &mapper, free);
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let x = (seed >> 8) as f32 / (1u32 << 24) as f32 * 2000.0 - 700.0;
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let y = (seed >> 8) as f32 / (1u32 << 24) as f32 * 2000.0 - 700.0;
            gm.handle(ev(PointerKind::Move, x, y), &mut model, &mapper, free);
            let r = model.get();
            assert!(r.is_within(image), "{r:?} escaped after move to ({x}, {y})");
            assert_eq!((r.width, r.height), (120.0, 90.0));
        }
    }

    #[test]
    fn ratio_locked_bottom_right_resize() {
        let (mut gm, mut model, mapper) =
            session(Bounds::new(1000.0, 1000.0), CropRect::new(0.0, 0.0, 400.0, 300.0));
        let spec = AspectRatioSpec::custom(4, 3);
        gm.handle(ev(PointerKind::Down, 400.0, 300.0), &mut model, &mapper, spec);
        assert!(matches!(
            gm.state(),
            GestureState::Resizing {
                corner: Corner::BottomRight,
                ..
            }
        ));
        gm.handle(ev(PointerKind::Move, 600.0, 600.0), &mut model, &mapper, spec);
        let r = model.get();
        assert!(approx_eq(r.width / r.height, 4.0 / 3.0));
        assert!(approx_eq(r.right(), 600.0) && approx_eq(r.bottom(), 450.0));
        assert_eq!(r.min(), egui::pos2(0.0, 0.0));
    }

    #[test]
    fn ratio_locked_resize_stops_at_image_edge() {
        let image = Bounds::new(1000.0, 600.0);
        let (mut gm, mut model, mapper) = session(image, CropRect::new(100.0, 100.0, 400.0, 300.0));
        let spec = AspectRatioSpec::Fixed(4.0 / 3.0);
        gm.handle(ev(PointerKind::Down, 500.0, 400.0), &mut model, &mapper, spec);
        gm.handle(ev(PointerKind::Move, 990.0, 590.0), &mut model, &mapper, spec);
        let r = model.get();
        assert!(r.is_within(image));
        assert!(approx_eq(r.width / r.height, 4.0 / 3.0));
        // Height runs out first (500 px of room below the fixed corner).
        assert!(approx_eq(r.bottom(), 600.0));
        assert_eq!(r.min(), egui::pos2(100.0, 100.0));
    }

    #[test]
    fn ratio_locked_top_left_keeps_bottom_right_fixed() {
        let (mut gm, mut model, mapper) =
            session(Bounds::new(1000.0, 1000.0), CropRect::new(400.0, 400.0, 400.0, 200.0));
        let spec = AspectRatioSpec::custom(2, 1);
        gm.handle(ev(PointerKind::Down, 400.0, 400.0), &mut model, &mapper, spec);
        // Vertical motion is ignored: width comes from the horizontal reach.
        gm.handle(ev(PointerKind::Move, 200.0, 590.0), &mut model, &mapper, spec);
        let r = model.get();
        assert!(approx_eq(r.width, 600.0) && approx_eq(r.height, 300.0));
        assert!(approx_eq(r.right(), 800.0) && approx_eq(r.bottom(), 600.0));
    }

    #[test]
    fn free_resize_from_each_corner() {
        let image = Bounds::new(1000.0, 1000.0);
        let start = CropRect::new(300.0, 300.0, 400.0, 400.0);
        let cases = [
            (Corner::TopLeft, (250.0, 200.0), CropRect::new(250.0, 200.0, 450.0, 500.0)),
            (Corner::TopRight, (800.0, 350.0), CropRect::new(300.0, 350.0, 500.0, 350.0)),
            (Corner::BottomLeft, (100.0, 900.0), CropRect::new(100.0, 300.0, 600.0, 600.0)),
            (Corner::BottomRight, (500.0, 1200.0), CropRect::new(300.0, 300.0, 200.0, 700.0)),
        ];
        for (corner, (px, py), expected) in cases {
            let (mut gm, mut model, mapper) = session(image, start);
            let press = corner.of(start.to_egui());
            let free = AspectRatioSpec::Free;
            gm.handle(ev(PointerKind::Down, press.x, press.y), &mut model, &mapper, free);
            assert_eq!(
                gm.state(),
                GestureState::Resizing {
                    corner,
                    anchor_rect: start
                }
            );
            gm.handle(ev(PointerKind::Move, px, py), &mut model, &mapper, AspectRatioSpec::Free);
            assert_eq!(model.get(), expected, "{corner:?}");
        }
    }

    #[test]
    fn free_resize_past_fixed_corner_holds_minimum() {
        let (mut gm, mut model, mapper) =
            session(Bounds::new(1000.0, 1000.0), CropRect::new(300.0, 300.0, 400.0, 400.0));
        let free = AspectRatioSpec::Free;
        gm.handle(ev(PointerKind::Down, 700.0, 700.0), &mut model, &mapper, free);
        gm.handle(ev(PointerKind::Move, 100.0, 100.0), &mut model, &mapper, free);
        assert_eq!(model.get(), CropRect::new(300.0, 300.0, 50.0, 50.0));
    }

    #[test]
    fn leave_commits_last_rect() {
        let (mut gm, mut model, mapper) =
            session(Bounds::new(400.0, 400.0), CropRect::new(0.0, 0.0, 200.0, 200.0));
        let free = AspectRatioSpec::Free;
        gm.handle(ev(PointerKind::Down, 100.0, 100.0), &mut model, &mapper, free);
        gm.handle(ev(PointerKind::Move, 150.0, 120.0), &mut model, &mapper, free);
        let committed = gm.handle(ev(PointerKind::Leave, 999.0, 999.0), &mut model, &mapper, free);
        assert_eq!(committed, Some(CropRect::new(50.0, 20.0, 200.0, 200.0)));
        assert_eq!(gm.state(), GestureState::Idle);
    }

    #[test]
    fn ratio_locked_top_right_keeps_bottom_left_fixed() {
        let (mut gm, mut model, mapper) =
            session(Bounds::new(1000.0, 1000.0), CropRect::new(200.0, 400.0, 400.0, 200.0));
        let spec = AspectRatioSpec::custom(2, 1);
        gm.handle(ev(PointerKind::Down, 600.0, 400.0), &mut model, &mapper, spec);
        assert!(matches!(
            gm.state(),
            GestureState::Resizing {
                corner: Corner::TopRight,
                ..
            }
        ));
        gm.handle(ev(PointerKind::Move, 800.0, 100.0), &mut model, &mapper, spec);
        assert_eq!(model.get(), CropRect::new(200.0, 300.0, 600.0, 300.0));
    }

    #[test]
    fn ratio_locked_bottom_left_keeps_top_right_fixed() {
        let (mut gm, mut model, mapper) =
            session(Bounds::new(1000.0, 1000.0), CropRect::new(400.0, 200.0, 400.0, 200.0));
        let spec = AspectRatioSpec::custom(2, 1);
        gm.handle(ev(PointerKind::Down, 400.0, 400.0), &mut model, &mapper, spec);
        assert!(matches!(
            gm.state(),
            GestureState::Resizing {
                corner: Corner::BottomLeft,
                ..
            }
        ));
        gm.handle(ev(PointerKind::Move, 100.0, 250.0), &mut model, &mapper, spec);
        assert_eq!(model.get(), CropRect::new(100.0, 200.0, 700.0, 350.0));

        // Past the left edge the width stops at the room left of the fixed corner.
        gm.handle(ev(PointerKind::Move, -500.0, 0.0), &mut model, &mapper, spec);
        assert_eq!(model.get(), CropRect::new(0.0, 200.0, 800.0, 400.0));
    }

    #[test]
    fn locked_resize_stays_inside_and_on_ratio_after_every_move() {
        let image = Bounds::new(640.0, 480.0);
        let start = CropRect::new(200.0, 150.0, 160.0, 120.0);
        let specs = [AspectRatioSpec::Fixed(4.0 / 3.0), AspectRatioSpec::custom(9, 16)];
        let mut seed: u32 = 0x9e37_79b9;
        let mut next = || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 8) as f32 / (1u32 << 24) as f32 * 1300.0 - 330.0
        };
        for spec in specs {
            let ratio = spec.ratio().unwrap_or(1.0);
            for corner in Corner::PRIORITY {
                let (mut gm, mut model, mapper) = session(image, start);
                let press = corner.of(start.to_egui());
                gm.handle(ev(PointerKind::Down, press.x, press.y), &mut model, &mapper, spec);
                for _ in 0..300 {
                    let (x, y) = (next(), next());
                    gm.handle(ev(PointerKind::Move, x, y), &mut model, &mapper, spec);
                    let r = model.get();
                    let min = model.min_size();
                    assert!(r.x >= 0.0 && r.y >= 0.0, "{r:?} after ({x}, {y})");
                    assert!(r.right() <= image.width + 1e-3, "{r:?} after ({x}, {y})");
                    assert!(r.bottom() <= image.height + 1e-3, "{r:?} after ({x}, {y})");
                    assert!(r.width >= min.x && r.height >= min.y, "{r:?} below minimum");
                    assert!(approx_eq(r.width / r.height, ratio), "{corner:?} {r:?}");
                }
            }
        }
    }

    #[test]
    fn clamp_to_image_trims_overhang() {
        let image = Bounds::new(100.0, 100.0);
        assert_eq!(
            clamp_to_image(CropRect::new(-10.0, 90.0, 50.0, 30.0), image),
            CropRect::new(0.0, 90.0, 40.0, 10.0)
        );
    }
}
