//! Sketch parameters. [`SketchConfig::default`] is the pink-and-purple garden; the
//! `with_*` methods switch to the alternative variant choices.

use {
  std::{ops::Range, path::PathBuf},
  crate::{
    color::{Color, Palette},
    error::{Error, Result}
  }
};

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementConfig {
  /// Grid cell edge is `canvas width / grid_divisor`
  pub grid_divisor: f32,
  /// Fraction of the cell edge the jittered point keeps clear on each side
  pub cell_margin: f32,
  pub radius: Range<f32>,
  /// Leaf count is `floor(uniform(leaf_count))`
  pub leaf_count: Range<f32>,
  pub phase: Range<f32>,
}

impl Default for PlacementConfig {
  fn default() -> Self {
    Self {
      grid_divisor: 5.0,
      cell_margin: 0.2,
      radius: 50.0..100.0,
      leaf_count: 8.0..15.0,
      phase: 0.0..300.0,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowerConfig {
  pub segments: u32,
  /// Perpendicular wave of the leaf stem: `sin(j * wave_step) * wave_amplitude`, degrees
  pub wave_step: f32,
  pub wave_amplitude: f32,
  pub stem_weight: f32,
  pub growth: Range<f32>,
  /// Per-leaf sway in degrees
  pub sway: Range<f32>,
  /// Noise coordinate offset between consecutive leaves
  pub leaf_phase_step: f32,
  pub center_sphere: Range<f32>,
  /// Advance of every anchor's phase per frame
  pub phase_step: f32,
  /// Pointer y over the canvas height maps onto this size multiplier
  pub size_multiplier: Range<f32>,
  /// Pointer x over the canvas width maps onto this leaf count multiplier
  pub leaf_multiplier: Range<f32>,
  /// Divisor of `min(width, height)` giving the leaf-tip stroke after a resize
  pub resize_stroke_divisor: f32,
}

impl Default for FlowerConfig {
  fn default() -> Self {
    Self {
      segments: 15,
      wave_step: 10.0,
      wave_amplitude: 50.0,
      stem_weight: 5.0,
      growth: 0.8..1.2,
      sway: -5.0..10.0,
      leaf_phase_step: 0.1,
      center_sphere: 10.0..30.0,
      phase_step: 0.01,
      size_multiplier: 0.8..1.5,
      leaf_multiplier: 1.0..1.2,
      resize_stroke_divisor: 250.0,
    }
  }
}

/// How many sparkle dots a canvas gets.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DotCount {
  /// `width / n`
  PerWidth(f32),
  /// `width * height / n`
  PerArea(f32),
}

impl DotCount {
  pub fn count(self, width: f32, height: f32) -> usize {
    let n = match self {
      DotCount::PerWidth(n) => width / n,
      DotCount::PerArea(n) => width * height / n,
    };
    if n.is_finite() && n > 0.0 { n as usize } else { 0 }
  }
}

/// Per-frame size jitter of the sparkle dots.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Twinkle {
  /// Independent uniform `[0, 1)` factor on each axis, every frame
  Random,
  /// Constant shrink
  Fixed(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SparkleConfig {
  pub count: DotCount,
  pub size: Range<f32>,
  pub phase: Range<f32>,
  /// Displacement per frame on each axis
  pub drift: Range<f32>,
  pub phase_step: f32,
  /// Noise coordinate offset between the x and y displacement
  pub axis_offset: f32,
  pub twinkle: Twinkle,
}

impl Default for SparkleConfig {
  fn default() -> Self {
    Self {
      count: DotCount::PerWidth(5.0),
      size: 5.0..15.0,
      phase: 0.0..300.0,
      drift: -2.0..2.0,
      phase_step: 0.01,
      axis_offset: 100.0,
      twinkle: Twinkle::Random,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackdropConfig {
  pub base: Color,
  /// Color at the left and right edges
  pub edge: Color,
  /// Color where the two panels meet
  pub center: Color,
  pub alpha: u8,
}

impl Default for BackdropConfig {
  fn default() -> Self {
    Self {
      base: Color::rgb(20, 0, 50),
      edge: Color::rgb(250, 200, 200),
      center: Color::rgb(50, 0, 50),
      alpha: 80,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
  pub palette: Palette,
  pub placement: PlacementConfig,
  pub flower: FlowerConfig,
  pub sparkle: SparkleConfig,
  pub backdrop: BackdropConfig,
  pub export_key: char,
  /// Exports are written as `<stem>-<frame>.<ext>`
  pub export_path: PathBuf,
}

impl Default for SketchConfig {
  fn default() -> Self {
    Self {
      palette: Palette::default(),
      placement: PlacementConfig::default(),
      flower: FlowerConfig::default(),
      sparkle: SparkleConfig::default(),
      backdrop: BackdropConfig::default(),
      export_key: 's',
      export_path: PathBuf::from("flower-field.jpg"),
    }
  }
}

impl SketchConfig {
  pub fn with_palette(mut self, palette: Palette) -> Self {
    self.palette = palette;
    self
  }

  pub fn with_dot_count(mut self, count: DotCount) -> Self {
    self.sparkle.count = count;
    self
  }

  pub fn with_twinkle(mut self, twinkle: Twinkle) -> Self {
    self.sparkle.twinkle = twinkle;
    self
  }

  pub fn with_backdrop(mut self, backdrop: BackdropConfig) -> Self {
    self.backdrop = backdrop;
    self
  }

  pub fn with_export(mut self, key: char, path: impl Into<PathBuf>) -> Self {
    self.export_key = key;
    self.export_path = path.into();
    self
  }

  pub fn validate(&self) -> Result<()> {
    let ranges = [
      ("placement.radius", &self.placement.radius),
      ("placement.leaf_count", &self.placement.leaf_count),
      ("placement.phase", &self.placement.phase),
      ("flower.growth", &self.flower.growth),
      ("flower.center_sphere", &self.flower.center_sphere),
      ("sparkle.size", &self.sparkle.size),
      ("sparkle.phase", &self.sparkle.phase),
    ];
    if let Some((name, range)) = ranges.iter().find(|(_, r)| !(r.start <= r.end)) {
      return Err(Error::InvalidConfig(format!("{} is inverted: {:?}", name, range)));
    }
    if !(self.placement.grid_divisor > 0.0) {
      return Err(Error::InvalidConfig("placement.grid_divisor must be positive".into()));
    }
    if !(0.0..0.5).contains(&self.placement.cell_margin) {
      return Err(Error::InvalidConfig("placement.cell_margin must be in [0, 0.5)".into()));
    }
    if self.placement.radius.start < 0.0 || self.placement.leaf_count.start < 0.0 {
      return Err(Error::InvalidConfig("placement radius and leaf count must be non-negative".into()));
    }
    if self.flower.segments == 0 {
      return Err(Error::InvalidConfig("flower.segments must be positive".into()));
    }
    match self.sparkle.count {
      DotCount::PerWidth(n) | DotCount::PerArea(n) if !(n > 0.0) =>
        return Err(Error::InvalidConfig("sparkle.count divisor must be positive".into())),
      _ => ()
    }
    if self.palette.colors().is_empty() {
      return Err(Error::InvalidConfig("palette is empty".into()));
    }
    Ok(())
  }
}
