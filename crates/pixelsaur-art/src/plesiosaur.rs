//! Plesiosaur anatomy.
//!
//! All boxes are relative to the scene base point unless noted otherwise.
//! Each `draw_*` function records one body part; the caller decides the
//! order, which is also the occlusion order.

use pixelsaur_engine::coords::{Point, Rect};

use crate::palette;
use crate::sketch::Sketch;

/// Torso. Spots and riders are placed relative to its origin.
pub const BODY: Rect = Rect::new(250, 30, 480, 130);

const BELLY: Rect = Rect::new(70, 23, 340, 85); // relative to BODY
const BELLY_HIGHLIGHT: Rect = Rect::new(110, 28, 250, 50); // relative to BODY

/// Neck segments from the shoulder up to the head, an S-curve.
pub const NECK: [Rect; 9] = [
    Rect::new(200, 60, 68, 58),
    Rect::new(168, 42, 66, 56),
    Rect::new(140, 25, 64, 54),
    Rect::new(116, 8, 62, 52),
    Rect::new(96, -8, 60, 50),
    Rect::new(80, -22, 58, 48),
    Rect::new(68, -35, 56, 46),
    Rect::new(60, -47, 54, 44),
    Rect::new(56, -58, 52, 42),
];

const HEAD: Rect = Rect::new(50, -78, 80, 50);
const SNOUT: Rect = Rect::new(28, -72, 60, 28);
const MOUTH_Y: i32 = -62;
const NOSTRIL: Point = Point::new(38, -65);

/// Eye anchor, relative to the head origin.
const EYE: Point = Point::new(48, 16);
const EYE_SIZE: i32 = 20;

/// Tail segments, tapering away from the body.
pub const TAIL: [Rect; 6] = [
    Rect::new(720, 68, 85, 72),
    Rect::new(795, 76, 75, 60),
    Rect::new(860, 83, 65, 50),
    Rect::new(915, 89, 55, 40),
    Rect::new(960, 94, 45, 32),
    Rect::new(995, 98, 35, 24),
];

/// A paddle-shaped flipper with a lighter overlay and bone lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Flipper {
    pub paddle: Rect,
    /// Relative to the paddle origin.
    pub overlay: Rect,
    pub bones: i32,
    /// First bone's top-left, relative to the paddle origin.
    pub bone_start: Point,
    pub bone_len: i32,
}

const BONE_SPACING: i32 = 26;

/// Front bottom, front top, back bottom, back top.
pub const FLIPPERS: [Flipper; 4] = [
    Flipper {
        paddle: Rect::new(310, 140, 140, 48),
        overlay: Rect::new(10, 5, 100, 30),
        bones: 4,
        bone_start: Point::new(30, 34),
        bone_len: 20,
    },
    Flipper {
        paddle: Rect::new(310, 2, 140, 42),
        overlay: Rect::new(10, 8, 100, 26),
        bones: 4,
        bone_start: Point::new(30, 0),
        bone_len: 16,
    },
    Flipper {
        paddle: Rect::new(580, 140, 120, 42),
        overlay: Rect::new(8, 4, 85, 26),
        bones: 3,
        bone_start: Point::new(28, 30),
        bone_len: 18,
    },
    Flipper {
        paddle: Rect::new(580, 10, 120, 38),
        overlay: Rect::new(8, 6, 85, 24),
        bones: 3,
        bone_start: Point::new(28, 0),
        bone_len: 14,
    },
];

/// Texture spots, relative to BODY.
pub const SPOTS: [Rect; 6] = [
    Rect::new(110, 42, 26, 26),
    Rect::new(190, 52, 32, 32),
    Rect::new(280, 48, 22, 22),
    Rect::new(240, 78, 28, 28),
    Rect::new(370, 60, 24, 24),
    Rect::new(420, 55, 20, 20),
];

/// Finer texture, drawn over `SPOTS`. Relative to BODY.
pub const SMALL_SPOTS: [Rect; 3] = [
    Rect::new(150, 70, 14, 14),
    Rect::new(320, 75, 16, 16),
    Rect::new(400, 80, 14, 14),
];

pub fn draw_body(s: &mut Sketch<'_>) {
    s.outlined_ellipse(BODY, palette::BODY, palette::OUTLINE);

    let mut torso = s.anchored(BODY.origin);
    torso.fill_ellipse(BELLY, palette::BELLY);
    torso.fill_ellipse(BELLY_HIGHLIGHT, palette::HIGHLIGHT);
}

pub fn draw_neck(s: &mut Sketch<'_>) {
    s.outlined_chain(&NECK, palette::BODY, palette::OUTLINE);
}

/// Head, snout, mouth, eye and nostril.
pub fn draw_head(s: &mut Sketch<'_>) {
    let g = s.grid();

    s.outlined_ellipse(HEAD, palette::BODY, palette::OUTLINE);
    s.outlined_ellipse(SNOUT, palette::BODY, palette::OUTLINE);

    // smile: a long band with a shorter one underneath
    s.fill_rect(Rect::new(35, MOUTH_Y, 50, g), palette::OUTLINE);
    s.fill_rect(Rect::new(40, MOUTH_Y + g, 40, g), palette::OUTLINE);

    {
        let mut eye = s.anchored(HEAD.origin + EYE);
        let socket = Rect::new(0, 0, EYE_SIZE, EYE_SIZE);
        eye.fill_rect(socket, palette::EYE_WHITE);
        eye.stroke_rect(socket, palette::OUTLINE);
        eye.fill_rect(Rect::new(7, 7, 9, 9), palette::PUPIL);
        eye.fill_rect(Rect::new(4, 4, 2 * g, 2 * g), palette::EYE_WHITE);
    }

    s.fill_rect(Rect::from_origin_size(NOSTRIL, Point::new(2 * g, g)), palette::OUTLINE);
}

pub fn draw_tail(s: &mut Sketch<'_>) {
    s.outlined_chain(&TAIL, palette::BODY, palette::OUTLINE);
}

pub fn draw_flippers(s: &mut Sketch<'_>) {
    for flipper in &FLIPPERS {
        draw_flipper(s, flipper);
    }
}

fn draw_flipper(s: &mut Sketch<'_>, flipper: &Flipper) {
    let g = s.grid();

    s.outlined_ellipse(flipper.paddle, palette::BODY, palette::OUTLINE);

    let mut paddle = s.anchored(flipper.paddle.origin);
    paddle.fill_ellipse(flipper.overlay, palette::BELLY);
    for i in 0..flipper.bones {
        let at = flipper.bone_start.offset(i * BONE_SPACING, 0);
        paddle.fill_rect(Rect::from_origin_size(at, Point::new(g, flipper.bone_len)), palette::OUTLINE);
    }
}

pub fn draw_spots(s: &mut Sketch<'_>) {
    let mut torso = s.anchored(BODY.origin);
    for &spot in SPOTS.iter().chain(SMALL_SPOTS.iter()) {
        torso.fill_ellipse(spot, palette::SPOT);
    }
}
