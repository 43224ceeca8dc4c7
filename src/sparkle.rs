//! Ambient dots drifting on coherent noise. A dot that leaves the canvas is replaced by a
//! fresh one at a random location; positions are never clamped.

use {
  euclid::Size2D,
  crate::{
    color::{Color, Palette},
    config::{SparkleConfig, Twinkle},
    geometry::{self, CanvasSize, P2},
    noise::NoiseSource,
    render::Renderer,
    util::remap
  }
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SparkleDot {
  pub position: P2,
  pub size: f32,
  pub color: Color,
  pub phase: f32,
}

/// Outcome of one update of a single dot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Step {
  Moved(SparkleDot),
  Respawned(SparkleDot),
}

impl Step {
  pub fn into_dot(self) -> SparkleDot {
    match self { Step::Moved(dot) | Step::Respawned(dot) => dot }
  }
}

impl SparkleDot {
  pub fn spawn<N: NoiseSource + ?Sized>(
    bounds: CanvasSize,
    config: &SparkleConfig,
    palette: &Palette,
    source: &mut N
  ) -> Self {
    Self {
      position: P2::new(source.uniform(0.0, bounds.width), source.uniform(0.0, bounds.height)),
      size: source.uniform(config.size.start, config.size.end),
      color: palette.pick(source),
      phase: source.uniform(config.phase.start, config.phase.end),
    }
  }

  /// Drift by the noise at the dot's phase, then respawn if it left `bounds`.
  pub fn step<N: NoiseSource + ?Sized>(
    self,
    bounds: CanvasSize,
    config: &SparkleConfig,
    palette: &Palette,
    source: &mut N
  ) -> Step {
    let drift = |v: f32| remap(v, 0.0, 1.0, config.drift.start, config.drift.end);
    let moved = Self {
      position: P2::new(
        self.position.x + drift(source.noise(self.phase)),
        self.position.y + drift(source.noise(self.phase + config.axis_offset))
      ),
      phase: self.phase + config.phase_step,
      ..self
    };
    if geometry::contains(bounds, moved.position) {
      Step::Moved(moved)
    } else {
      Step::Respawned(Self::spawn(bounds, config, palette, source))
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SparkleField {
  dots: Vec<SparkleDot>,
  bounds: CanvasSize,
}

impl SparkleField {
  pub fn generate<N: NoiseSource + ?Sized>(
    bounds: CanvasSize,
    config: &SparkleConfig,
    palette: &Palette,
    source: &mut N
  ) -> Self {
    let count = if geometry::is_drawable(bounds) {
      config.count.count(bounds.width, bounds.height)
    } else { 0 };
    let dots = (0..count)
      .map(|_| SparkleDot::spawn(bounds, config, palette, source))
      .collect();
    Self { dots, bounds }
  }

  pub fn empty() -> Self {
    Self { dots: vec![], bounds: Size2D::zero() }
  }

  pub fn dots(&self) -> &[SparkleDot] { &self.dots }
  pub fn len(&self) -> usize { self.dots.len() }
  pub fn is_empty(&self) -> bool { self.dots.is_empty() }
  pub fn bounds(&self) -> CanvasSize { self.bounds }

  /// Advance every dot one frame. Returns how many were respawned.
  pub fn update<N: NoiseSource + ?Sized>(
    &mut self,
    config: &SparkleConfig,
    palette: &Palette,
    source: &mut N
  ) -> usize {
    let bounds = self.bounds;
    let mut respawned = 0;
    for dot in self.dots.iter_mut() {
      let step = dot.step(bounds, config, palette, source);
      if let Step::Respawned(_) = step {
        respawned += 1;
      }
      *dot = step.into_dot();
    }
    if respawned > 0 {
      log::trace!("{} sparkle dots respawned", respawned);
    }
    respawned
  }

  pub fn draw<R, N>(&self, renderer: &mut R, twinkle: Twinkle, source: &mut N)
    where R: Renderer + ?Sized, N: NoiseSource + ?Sized
  {
    renderer.stroke(None);
    for dot in &self.dots {
      let (sx, sy) = match twinkle {
        Twinkle::Random => (source.uniform(0.0, 1.0), source.uniform(0.0, 1.0)),
        Twinkle::Fixed(k) => (k, k)
      };
      renderer.fill(Some(dot.color));
      renderer.ellipse(dot.position.cast_unit(), Size2D::new(dot.size * sx, dot.size * sy));
    }
  }
}
