//! A generative flower garden.
//!
//! Flowers are placed on a jittered grid, one candidate per cell, rejecting any candidate
//! whose footprint overlaps a flower accepted before it ([`placement`]). Every frame each
//! flower is redrawn as a ring of wavy leaves whose length, sway and center size breathe
//! with coherent noise, scaled by the pointer position ([`flower`]). A field of drifting
//! sparkle dots floats over a two-panel gradient backdrop ([`sparkle`], [`scene`]).
//!
//! The sketch only talks to its host through three traits:
//! - [`Renderer`](render::Renderer): immediate-mode primitives and a transform stack
//! - [`NoiseSource`](noise::NoiseSource): coherent noise and uniform draws
//! - [`Export`](render::Export): writing the current frame to disk
//!
//! With the `drawing` feature, [`Canvas`](render::Canvas) implements both `Renderer` and
//! `Export` over an [`image::RgbaImage`], so the sketch runs headless.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   flower_field::{
//! #     config::SketchConfig,
//! #     error::Result,
//! #     noise::CoherentNoise,
//! #     render::{Canvas, Renderer},
//! #     scene::Sketch
//! #   },
//! #   euclid::Point2D
//! # };
//! # fn main() -> Result<()> {
//! let mut canvas = Canvas::new(1024, 768);
//! let mut sketch = Sketch::new(SketchConfig::default(), CoherentNoise::from_entropy())?;
//! sketch.setup(canvas.size());
//!
//! for i in 0..60 {
//!   // pointer x drives the leaf count, pointer y the flower size
//!   let pointer = Point2D::new(i as f32 * 16.0, 384.0);
//!   sketch.frame(&mut canvas, pointer);
//! }
//!
//! // window resized: anchors, sparkles and sphere sizes are regenerated
//! canvas.resize(1280, 720);
//! sketch.resize(canvas.size());
//! sketch.frame(&mut canvas, Point2D::new(640.0, 360.0));
//!
//! // the export key writes `flower-field-<frame>.jpg`
//! sketch.key_typed('s', &canvas)?;
//! #   Ok(())
//! # }
//! ```

pub mod error;
pub mod util;
pub mod geometry;
pub mod sdf;
pub mod color;
pub mod noise;
pub mod config;
pub mod render;
pub mod placement;
pub mod flower;
pub mod sparkle;
pub mod scene;
