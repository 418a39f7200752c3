use pixelsaur_engine::coords::{Point, Rect};
use pixelsaur_engine::scene::DrawList;
use pixelsaur_engine::RenderConfig;

use crate::plesiosaur::{self, BODY};
use crate::rider::{stock_riders, Rider};
use crate::sketch::Sketch;

// ── SceneSpec ─────────────────────────────────────────────────────────────

/// The swappable parts of the picture.
///
/// The anatomy itself is fixed; a `SceneSpec` only chooses where the animal
/// sits on the canvas and who rides it. Canvas size, grid and background come
/// from the `RenderConfig` passed to [`compose`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSpec {
    /// Point all anatomy tables are relative to.
    pub base: Point,
    /// Drawn in order on top of the animal.
    pub riders: Vec<Rider>,
}

impl SceneSpec {
    /// Stock picture for `config`'s canvas, animal left of center.
    pub fn for_config(config: &RenderConfig) -> Self {
        let (width, height) = canvas_size(config);
        Self {
            base: Point::new(width / 2 - 550, height / 2 + 20),
            riders: stock_riders(),
        }
    }

    pub fn with_riders(mut self, riders: Vec<Rider>) -> Self {
        self.riders = riders;
        self
    }

    pub fn with_base(mut self, base: Point) -> Self {
        self.base = base;
        self
    }
}

impl Default for SceneSpec {
    fn default() -> Self {
        Self::for_config(&RenderConfig::default())
    }
}

fn canvas_size(config: &RenderConfig) -> (i32, i32) {
    (
        i32::try_from(config.width).unwrap_or(i32::MAX),
        i32::try_from(config.height).unwrap_or(i32::MAX),
    )
}

// ── compose ───────────────────────────────────────────────────────────────

/// Records the whole picture for `config`'s canvas, back to front.
///
/// Order: background, body, neck, head, tail, flippers, spots, riders.
/// Outlines are one `config.grid` cell thick.
pub fn compose(spec: &SceneSpec, config: &RenderConfig) -> DrawList {
    let (width, height) = canvas_size(config);
    let grid = i32::try_from(config.grid).unwrap_or(i32::MAX);

    let mut list = DrawList::new();
    let mut s = Sketch::new(&mut list, grid);

    s.fill_rect(Rect::new(0, 0, width, height), config.background);

    {
        let mut animal = s.anchored(spec.base);
        plesiosaur::draw_body(&mut animal);
        plesiosaur::draw_neck(&mut animal);
        plesiosaur::draw_head(&mut animal);
        plesiosaur::draw_tail(&mut animal);
        plesiosaur::draw_flippers(&mut animal);
        plesiosaur::draw_spots(&mut animal);

        let mut back = animal.anchored(BODY.origin);
        for rider in &spec.riders {
            rider.draw(&mut back);
        }
    }

    log::debug!("composed scene: {} commands, {} riders", list.len(), spec.riders.len());
    list
}
