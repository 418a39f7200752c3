//! Pixelsaur art: the plesiosaur picture as data on top of `pixelsaur-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use pixelsaur_art::{compose, SceneSpec};
//! use pixelsaur_engine::output::{render, save_jpeg};
//! use pixelsaur_engine::RenderConfig;
//!
//! let config = RenderConfig::default();
//! let image = render(&compose(&SceneSpec::for_config(&config), &config), &config)?;
//! save_jpeg(&image, &config.output_path, config.jpeg_quality)?;
//! ```
//!
//! # Swapping riders
//!
//! Riders are plain values; a different cast only changes the data passed in:
//!
//! ```rust,ignore
//! let spec = SceneSpec::default().with_riders(vec![Rider::back()]);
//! let list = compose(&spec, &RenderConfig::default());
//! ```

pub mod palette;
pub mod plesiosaur;
pub mod rider;
pub mod scene;
pub mod sketch;

pub use rider::{stock_riders, ArmPose, Rider};
pub use scene::{compose, SceneSpec};
pub use sketch::Sketch;
