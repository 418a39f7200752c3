//! Fixed colors of the illustration.

use pixelsaur_engine::paint::Rgb;

// ── plesiosaur ────────────────────────────────────────────────────────────

pub const BODY: Rgb = Rgb::new(70, 150, 200);
pub const BELLY: Rgb = Rgb::new(150, 200, 230);
pub const OUTLINE: Rgb = Rgb::new(30, 60, 100);
pub const HIGHLIGHT: Rgb = Rgb::new(180, 220, 250);
pub const SPOT: Rgb = Rgb::new(50, 120, 170);
pub const EYE_WHITE: Rgb = Rgb::white();
pub const PUPIL: Rgb = Rgb::black();

// ── riders ────────────────────────────────────────────────────────────────

pub const SKIN: Rgb = Rgb::new(255, 220, 180);
pub const FACE: Rgb = Rgb::black();
pub const HAIR_BROWN: Rgb = Rgb::new(100, 60, 40);
pub const HAIR_DARK: Rgb = Rgb::new(40, 40, 40);
pub const SHIRT_RED: Rgb = Rgb::new(220, 80, 80);
pub const SHIRT_BLUE: Rgb = Rgb::new(80, 120, 220);
pub const PANTS_BLUE: Rgb = Rgb::new(60, 80, 120);
pub const PANTS_GREEN: Rgb = Rgb::new(80, 100, 60);
