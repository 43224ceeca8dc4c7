//! One animated radial flower: a center sphere and a ring of wavy leaves, each tipped with a
//! small stroked sphere. Leaf length and center size breathe with coherent noise; every leaf
//! sways on its own noise coordinate.

use {
  euclid::{Angle, Size2D},
  crate::{
    config::FlowerConfig,
    geometry::{CanvasSize, LocalPoint},
    noise::NoiseSource,
    placement::MotifAnchor,
    render::{Renderer, Scoped},
    util::remap
  }
};

/// Sphere dimensions shared by every flower of a session. Rolled at setup and on resize.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SphereSizes {
  pub center: f32,
  pub end: f32,
  pub end_stroke: f32,
}

impl SphereSizes {
  pub fn roll<N: NoiseSource + ?Sized>(config: &FlowerConfig, source: &mut N) -> Self {
    let center = source.uniform(config.center_sphere.start, config.center_sphere.end);
    let end = center / 2.0;
    Self { center, end, end_stroke: end / 3.0 }
  }

  /// Leaf-tip stroke tied to the canvas size; applied on resize only.
  pub fn with_canvas_stroke(self, size: CanvasSize, divisor: f32) -> Self {
    Self { end_stroke: size.width.min(size.height) / divisor, ..self }
  }
}

/// `round(leaf_count * multiplier)`, never negative.
pub fn effective_leaf_count(leaf_count: u32, multiplier: f32) -> u32 {
  let n = (leaf_count as f32 * multiplier).round();
  if n.is_finite() && n > 0.0 { n as u32 } else { 0 }
}

/// Wavy stem along the local x axis. Vertex `j` sits at `j / segments` of `length`.
pub fn leaf_curve(length: f32, config: &FlowerConfig) -> Vec<LocalPoint> {
  let segments = config.segments;
  (0..segments)
    .map(|j| LocalPoint::new(
      j as f32 / segments as f32 * length,
      Angle::degrees(j as f32 * config.wave_step).radians.sin() * config.wave_amplitude
    ))
    .collect()
}

pub struct Flower<'a> {
  pub anchor: &'a MotifAnchor,
  pub sizes: &'a SphereSizes,
  pub config: &'a FlowerConfig,
}

impl Flower<'_> {
  pub fn growth<N: NoiseSource + ?Sized>(&self, noise: &N, phase: f32) -> f32 {
    let growth = &self.config.growth;
    remap(noise.noise(phase), 0.0, 1.0, growth.start, growth.end)
  }

  pub fn draw<R, N>(
    &self,
    renderer: &mut R,
    noise: &N,
    leaf_multiplier: f32,
    size_multiplier: f32,
    phase: f32
  ) where R: Renderer + ?Sized, N: NoiseSource + ?Sized {
    let config = self.config;
    let colors = &self.anchor.colors;
    // an off-canvas pointer extrapolates the multiplier; the ring tops out at the range end
    let leaves = effective_leaf_count(self.anchor.leaf_count, leaf_multiplier)
      .min(effective_leaf_count(self.anchor.leaf_count, config.leaf_multiplier.end));
    let growth = self.growth(noise, phase);
    let curve = leaf_curve(self.anchor.radius * size_multiplier * growth, config);

    let mut frame = Scoped::new(renderer);
    frame.translate(self.anchor.position.to_vector().cast_unit());

    let step = if leaves > 0 { 360.0 / leaves as f32 } else { 0.0 };
    for i in 0..leaves {
      let sway = remap(
        noise.noise(phase + i as f32 * config.leaf_phase_step),
        0.0, 1.0, config.sway.start, config.sway.end
      );
      let mut leaf = Scoped::new(&mut *frame);
      leaf.rotate(Angle::degrees(i as f32 * step + sway));

      leaf.fill(None);
      leaf.stroke(Some(colors.leaf_stem));
      leaf.stroke_weight(config.stem_weight);
      leaf.polyline(&curve);

      if let Some(&tip) = curve.last() {
        leaf.fill(Some(colors.leaf_tip_fill));
        leaf.stroke(Some(colors.leaf_tip_stroke));
        leaf.stroke_weight(self.sizes.end_stroke);
        leaf.ellipse(tip, Size2D::splat(self.sizes.end));
      }
    }

    frame.fill(Some(colors.flower_center));
    frame.stroke(None);
    frame.ellipse(LocalPoint::origin(), Size2D::splat(self.sizes.center * growth));
  }
}
