//! Jittered grid placement with rejection: one candidate per cell, kept only when its
//! footprint is clear of every circle accepted before it.

use {
  crate::{
    color::{Palette, RoleColors},
    config::PlacementConfig,
    geometry::{self, CanvasSize, Circle, P2},
    noise::NoiseSource
  }
};

/// An accepted site for one flower.
#[derive(Debug, Clone, PartialEq)]
pub struct MotifAnchor {
  pub position: P2,
  pub radius: f32,
  pub leaf_count: u32,
  pub colors: RoleColors,
  /// Running noise coordinate; the only field that changes after placement
  pub phase: f32,
}

impl MotifAnchor {
  pub fn footprint(&self) -> Circle {
    Circle::new(self.position, self.radius)
  }
}

/// Cell edge, rows and columns of the placement grid. `None` for an undrawable canvas.
pub fn grid(size: CanvasSize, config: &PlacementConfig) -> Option<(f32, usize, usize)> {
  if !geometry::is_drawable(size) || !(config.grid_divisor > 0.0) {
    return None;
  }
  let edge = size.width / config.grid_divisor;
  let rows = (size.height / edge).ceil() as usize;
  let cols = (size.width / edge).ceil() as usize;
  Some((edge, rows, cols))
}

/// Visit the grid in row-major order, drawing one candidate per cell. The number of
/// accepted anchors is not fixed; a cell whose candidate overlaps is simply skipped.
pub fn generate<N: NoiseSource + ?Sized>(
  size: CanvasSize,
  config: &PlacementConfig,
  palette: &Palette,
  source: &mut N
) -> Vec<MotifAnchor> {
  let (edge, rows, cols) = match grid(size, config) {
    Some(x) => x,
    None => return vec![]
  };
  let (lo, hi) = (edge * config.cell_margin, edge * (1.0 - config.cell_margin));
  let mut anchors: Vec<MotifAnchor> = vec![];

  for (row, col) in itertools::iproduct!(0..rows, 0..cols) {
    let candidate = Circle::new(
      P2::new(
        col as f32 * edge + source.uniform(lo, hi),
        row as f32 * edge + source.uniform(lo, hi)
      ),
      source.uniform(config.radius.start, config.radius.end)
    );

    if anchors.iter().any(|other| candidate.overlaps(&other.footprint())) {
      log::trace!("cell ({}, {}) rejected", row, col);
      continue;
    }

    anchors.push(MotifAnchor {
      position: candidate.center,
      radius: candidate.r,
      leaf_count: source.uniform(config.leaf_count.start, config.leaf_count.end).floor() as u32,
      colors: palette.pick_roles(source),
      phase: source.uniform(config.phase.start, config.phase.end),
    });
  }
  anchors
}

#[cfg(test)] mod tests;
