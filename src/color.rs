//! Colors, the sketch palette and the per-motif role assignment.

use crate::{
  error::{Error, Result},
  noise::NoiseSource
};

/// 8-bit RGBA, straight (non-premultiplied) alpha.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 4]);

impl Color {
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self([r, g, b, 255]) }
  pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self([r, g, b, a]) }

  /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` or a CSS color name.
  pub fn parse(s: &str) -> Result<Self> {
    let invalid = || Error::InvalidColor(s.to_owned());
    let hex = match s.trim().strip_prefix('#') {
      Some(hex) => hex,
      None => return named(s.trim()).ok_or_else(invalid)
    };
    let digits = hex.chars()
      .map(|c| c.to_digit(16).map(|d| d as u8))
      .collect::<Option<Vec<_>>>()
      .ok_or_else(invalid)?;
    let pair = |i: usize| digits[i] << 4 | digits[i + 1];
    match digits.len() {
      3 => Ok(Self::rgb(digits[0] * 17, digits[1] * 17, digits[2] * 17)),
      6 => Ok(Self::rgb(pair(0), pair(2), pair(4))),
      8 => Ok(Self::rgba(pair(0), pair(2), pair(4), pair(6))),
      _ => Err(invalid())
    }
  }

  /// Per-channel linear interpolation, `t` clamped to `[0, 1]`.
  pub fn lerp(self, other: Self, t: f32) -> Self {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let mut out = [0u8; 4];
    out.iter_mut()
      .zip(self.0.iter().zip(other.0.iter()))
      .for_each(|(o, (&a, &b))| *o = (a as f32 + (b as f32 - a as f32) * t).round() as u8);
    Self(out)
  }

  pub fn with_alpha(self, alpha: u8) -> Self {
    let [r, g, b, _] = self.0;
    Self([r, g, b, alpha])
  }

  pub fn alpha(self) -> u8 { self.0[3] }
}

fn named(name: &str) -> Option<Color> {
  Some(match name.to_ascii_lowercase().as_str() {
    "black" => Color::rgb(0, 0, 0),
    "white" => Color::rgb(255, 255, 255),
    "red" => Color::rgb(255, 0, 0),
    "green" => Color::rgb(0, 128, 0),
    "blue" => Color::rgb(0, 0, 255),
    "purple" => Color::rgb(128, 0, 128),
    "pink" => Color::rgb(255, 192, 203),
    "orange" => Color::rgb(255, 165, 0),
    "gold" => Color::rgb(255, 215, 0),
    "crimson" => Color::rgb(220, 20, 60),
    "maroon" => Color::rgb(128, 0, 0),
    "teal" => Color::rgb(0, 128, 128),
    _ => return None
  })
}

#[cfg(feature = "drawing")]
impl From<Color> for image::Rgba<u8> {
  fn from(c: Color) -> Self { image::Rgba(c.0) } }

/// Colors of the semantic slots of one flower, each drawn independently.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RoleColors {
  pub flower_center: Color,
  pub leaf_stem: Color,
  pub leaf_tip_fill: Color,
  pub leaf_tip_stroke: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
  colors: Vec<Color>
}

impl Palette {
  pub fn new(colors: Vec<Color>) -> Result<Self> {
    if colors.is_empty() {
      return Err(Error::InvalidConfig("palette is empty".into()));
    }
    Ok(Self { colors })
  }

  pub fn from_strs<'a>(colors: impl IntoIterator<Item = &'a str>) -> Result<Self> {
    Self::new(colors.into_iter()
      .map(Color::parse)
      .collect::<Result<Vec<_>>>()?)
  }

  pub fn colors(&self) -> &[Color] { &self.colors }

  pub fn pick<N: NoiseSource + ?Sized>(&self, source: &mut N) -> Color {
    self.colors[source.index(self.colors.len())]
  }

  /// One independent draw per role.
  pub fn pick_roles<N: NoiseSource + ?Sized>(&self, source: &mut N) -> RoleColors {
    RoleColors {
      flower_center: self.pick(source),
      leaf_stem: self.pick(source),
      leaf_tip_fill: self.pick(source),
      leaf_tip_stroke: self.pick(source),
    }
  }
}

impl Default for Palette {
  fn default() -> Self {
    Self { colors: vec![
      Color::rgb(0xE5, 0x43, 0x79),
      Color::rgb(0xCB, 0x01, 0x0B),
      Color::rgb(0x78, 0x22, 0x21),
      Color::rgb(128, 0, 128),
    ]}
  }
}
