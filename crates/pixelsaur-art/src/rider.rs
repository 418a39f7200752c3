//! Rider figures sitting on the plesiosaur's back.
//!
//! A rider is pure decoration data: where it sits and how it is dressed.
//! Every rider is drawn by the same routine.

use pixelsaur_engine::coords::{Point, Rect};
use pixelsaur_engine::paint::Rgb;

use crate::palette;
use crate::sketch::Sketch;

/// What the right arm is doing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ArmPose {
    /// Both arms hang beside the shirt.
    #[default]
    Resting,
    /// The right arm is raised above the shoulder.
    Waving,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rider {
    /// Top-left of the figure's head box, relative to the body origin.
    pub seat: Point,
    pub hair: Rgb,
    pub shirt: Rgb,
    pub pants: Rgb,
    pub pose: ArmPose,
}

impl Rider {
    /// Brown hair, red shirt, sitting on the front of the body.
    pub const fn front() -> Self {
        Self {
            seat: Point::new(120, -15),
            hair: palette::HAIR_BROWN,
            shirt: palette::SHIRT_RED,
            pants: palette::PANTS_BLUE,
            pose: ArmPose::Resting,
        }
    }

    /// Dark hair, blue shirt, waving from the back of the body.
    pub const fn back() -> Self {
        Self {
            seat: Point::new(280, -12),
            hair: palette::HAIR_DARK,
            shirt: palette::SHIRT_BLUE,
            pants: palette::PANTS_GREEN,
            pose: ArmPose::Waving,
        }
    }

    /// Records the figure into `s`, whose anchor must be the body origin.
    pub fn draw(&self, s: &mut Sketch<'_>) {
        let mut fig = s.anchored(self.seat);
        let g = fig.grid();
        let shirt = Rect::new(6, 12, 30, 20);

        fig.fill_rect(Rect::new(8, 30, 12, 24), self.pants);
        fig.fill_rect(Rect::new(22, 30, 12, 24), self.pants);
        fig.fill_rect(shirt, self.shirt);

        fig.fill_rect(Rect::new(0, 14, 8, 18), palette::SKIN);
        let right_arm_y = match self.pose {
            ArmPose::Resting => 14,
            ArmPose::Waving => 4,
        };
        fig.fill_rect(Rect::new(34, right_arm_y, 8, 18), palette::SKIN);

        fig.fill_ellipse(Rect::new(10, 0, 22, 22), palette::SKIN);
        fig.fill_ellipse(Rect::new(8, -6, 26, 14), self.hair);

        fig.fill_rect(Rect::new(14, 8, 4, 4), palette::FACE);
        fig.fill_rect(Rect::new(22, 8, 4, 4), palette::FACE);
        fig.fill_rect(Rect::new(14, 15, 12, g), palette::FACE);

        fig.stroke_rect(shirt, palette::OUTLINE);
    }
}

/// The two riders of the stock picture, front first.
pub fn stock_riders() -> Vec<Rider> {
    vec![Rider::front(), Rider::back()]
}
