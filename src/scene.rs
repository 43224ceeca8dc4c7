//! The sketch controller: owns the session state and drives one frame at a time.

use {
  std::path::{Path, PathBuf},
  euclid::Size2D,
  crate::{
    color::Color,
    config::{BackdropConfig, FlowerConfig, SketchConfig},
    error::Result,
    flower::{Flower, SphereSizes},
    geometry::{CanvasSize, LocalPoint, P2},
    noise::NoiseSource,
    placement::{self, MotifAnchor},
    render::{Export, Renderer},
    sparkle::SparkleField,
    util::remap
  }
};

/// Everything that survives from one frame to the next. Rebuilt wholesale on resize.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
  pub canvas: CanvasSize,
  pub anchors: Vec<MotifAnchor>,
  pub sparkles: SparkleField,
  pub sizes: SphereSizes,
}

impl SceneState {
  pub fn empty() -> Self {
    Self {
      canvas: Size2D::zero(),
      anchors: vec![],
      sparkles: SparkleField::empty(),
      sizes: SphereSizes { center: 0.0, end: 0.0, end_stroke: 0.0 },
    }
  }

  pub fn build<N: NoiseSource + ?Sized>(canvas: CanvasSize, config: &SketchConfig, source: &mut N) -> Self {
    let anchors = placement::generate(canvas, &config.placement, &config.palette, source);
    let sizes = SphereSizes::roll(&config.flower, source);
    let sparkles = SparkleField::generate(canvas, &config.sparkle, &config.palette, source);
    Self { canvas, anchors, sparkles, sizes }
  }
}

/// Pointer-driven scale factors for the current frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Multipliers {
  pub size: f32,
  pub leaf: f32,
}

impl Multipliers {
  /// Pointer y maps onto the size range, pointer x onto the leaf count range. Not clamped.
  pub fn from_pointer(pointer: P2, canvas: CanvasSize, config: &FlowerConfig) -> Self {
    Self {
      size: remap(pointer.y, 0.0, canvas.height, config.size_multiplier.start, config.size_multiplier.end),
      leaf: remap(pointer.x, 0.0, canvas.width, config.leaf_multiplier.start, config.leaf_multiplier.end),
    }
  }
}

/// Base color, then two translucent gradient panels meeting in the middle.
pub fn draw_backdrop<R: Renderer + ?Sized>(renderer: &mut R, config: &BackdropConfig) {
  let size = renderer.size();
  renderer.background(config.base);
  renderer.stroke_weight(1.0);
  gradient_panel(renderer, 0.0, size.width / 2.0, size.height, config.edge, config.center, config.alpha);
  gradient_panel(renderer, size.width / 2.0, size.width, size.height, config.center, config.edge, config.alpha);
}

fn gradient_panel<R: Renderer + ?Sized>(
  renderer: &mut R,
  min: f32,
  max: f32,
  height: f32,
  from: Color,
  to: Color,
  alpha: u8
) {
  let columns = (max - min).max(0.0).floor() as usize;
  for i in 0..=columns {
    let x = min + i as f32;
    let amt = remap(x, min, max, 0.0, 1.0);
    renderer.stroke(Some(from.lerp(to, amt).with_alpha(alpha)));
    renderer.line(LocalPoint::new(x, 0.0), LocalPoint::new(x, height));
  }
}

/// `<stem>-<frame>.<ext>` next to `base`.
pub fn export_name(base: &Path, frame: u64) -> PathBuf {
  let stem = base.file_stem()
    .and_then(|s| s.to_str())
    .unwrap_or("flower-field");
  let ext = base.extension()
    .and_then(|s| s.to_str())
    .unwrap_or("png");
  base.with_file_name(format!("{}-{:05}.{}", stem, frame, ext))
}

pub struct Sketch<N> {
  config: SketchConfig,
  source: N,
  state: SceneState,
  frame: u64,
}

impl<N: NoiseSource> Sketch<N> {
  pub fn new(config: SketchConfig, source: N) -> Result<Self> {
    config.validate()?;
    Ok(Self { config, source, state: SceneState::empty(), frame: 0 })
  }

  pub fn config(&self) -> &SketchConfig { &self.config }
  pub fn state(&self) -> &SceneState { &self.state }
  pub fn frame_count(&self) -> u64 { self.frame }

  pub fn setup(&mut self, canvas: CanvasSize) {
    self.state = SceneState::build(canvas, &self.config, &mut self.source);
    log::info!(
      "setup {}x{}: {} flowers, {} sparkles",
      canvas.width, canvas.height, self.state.anchors.len(), self.state.sparkles.len()
    );
  }

  /// Discard and regenerate everything for the new canvas. The leaf-tip stroke follows the
  /// canvas size from here on, unlike after `setup`.
  pub fn resize(&mut self, canvas: CanvasSize) {
    let mut state = SceneState::build(canvas, &self.config, &mut self.source);
    state.sizes = state.sizes.with_canvas_stroke(canvas, self.config.flower.resize_stroke_divisor);
    self.state = state;
    log::info!(
      "resize {}x{}: {} flowers, {} sparkles",
      canvas.width, canvas.height, self.state.anchors.len(), self.state.sparkles.len()
    );
  }

  /// Draw one frame: backdrop, every flower, then every sparkle. Never skips work.
  pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R, pointer: P2) {
    let Self { config, source, state, frame } = self;
    draw_backdrop(&mut *renderer, &config.backdrop);

    let multipliers = Multipliers::from_pointer(pointer, state.canvas, &config.flower);
    for anchor in state.anchors.iter_mut() {
      Flower { anchor: &*anchor, sizes: &state.sizes, config: &config.flower }
        .draw(&mut *renderer, &*source, multipliers.leaf, multipliers.size, anchor.phase);
      anchor.phase += config.flower.phase_step;
    }

    state.sparkles.update(&config.sparkle, &config.palette, &mut *source);
    state.sparkles.draw(renderer, config.sparkle.twinkle, &mut *source);
    *frame += 1;
  }

  /// Export the current frame when `key` is the configured export key.
  pub fn key_typed<E: Export + ?Sized>(&mut self, key: char, target: &E) -> Result<Option<PathBuf>> {
    if key != self.config.export_key {
      return Ok(None);
    }
    let path = export_name(&self.config.export_path, self.frame);
    target.export(&path)?;
    log::info!("exported frame {} to {}", self.frame, path.display());
    Ok(Some(path))
  }
}
