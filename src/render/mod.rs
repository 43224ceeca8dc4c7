//! Drawing capabilities the sketch consumes from its host.
//!
//! [`Renderer`] mirrors an immediate-mode canvas: style state (fill, stroke, stroke weight),
//! a transform stack, and a handful of primitives. Coordinates passed to primitives are in
//! the current local frame; angles are degrees.

use {
  std::{
    ops::{Deref, DerefMut},
    path::Path
  },
  euclid::{Angle, Size2D, Transform2D},
  crate::{
    color::Color,
    error::Result,
    geometry::{CanvasSize, LocalPoint, LocalSpace, LocalVector, Rigid}
  }
};

#[cfg(feature = "drawing")]
mod raster;
#[cfg(feature = "drawing")]
pub use raster::Canvas;
#[cfg(test)]
pub(crate) mod recorder;

pub trait Renderer {
  fn size(&self) -> CanvasSize;
  /// Replace every pixel, ignoring the transform.
  fn background(&mut self, color: Color);
  /// `None` disables filling.
  fn fill(&mut self, color: Option<Color>);
  /// `None` disables stroking.
  fn stroke(&mut self, color: Option<Color>);
  fn stroke_weight(&mut self, weight: f32);

  fn line(&mut self, from: LocalPoint, to: LocalPoint);
  /// `size` is the full width and height.
  fn ellipse(&mut self, center: LocalPoint, size: Size2D<f32, LocalSpace>);
  /// Open, stroke-only chain through `vertices`.
  fn polyline(&mut self, vertices: &[LocalPoint]);

  /// Save transform and style.
  fn push(&mut self);
  /// Restore the last saved transform and style.
  fn pop(&mut self);
  fn translate(&mut self, offset: LocalVector);
  fn rotate(&mut self, angle: Angle<f32>);
  /// Number of saved, not yet restored, states.
  fn depth(&self) -> usize;
}

/// Writes the current frame to disk.
pub trait Export {
  fn export(&self, path: &Path) -> Result<()>;
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
  pub fill: Option<Color>,
  pub stroke: Option<Color>,
  pub stroke_weight: f32,
}

impl Default for Style {
  fn default() -> Self {
    Self {
      fill: Some(Color::rgb(255, 255, 255)),
      stroke: Some(Color::rgb(0, 0, 0)),
      stroke_weight: 1.0
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawState {
  pub transform: Rigid,
  pub style: Style,
}

impl Default for DrawState {
  fn default() -> Self {
    Self { transform: Rigid::identity(), style: Style::default() }
  }
}

/// Transform and style bookkeeping shared by renderer implementations.
#[derive(Debug, Clone, Default)]
pub struct StateStack {
  pub current: DrawState,
  saved: Vec<DrawState>,
}

impl StateStack {
  pub fn push(&mut self) {
    self.saved.push(self.current);
  }

  pub fn pop(&mut self) {
    match self.saved.pop() {
      Some(state) => self.current = state,
      None => log::warn!("pop without matching push")
    }
  }

  pub fn translate(&mut self, offset: LocalVector) {
    self.current.transform = Transform2D::<f32, LocalSpace, LocalSpace>::translation(offset.x, offset.y)
      .then(&self.current.transform);
  }

  pub fn rotate(&mut self, angle: Angle<f32>) {
    self.current.transform = Transform2D::<f32, LocalSpace, LocalSpace>::rotation(angle)
      .then(&self.current.transform);
  }

  pub fn depth(&self) -> usize { self.saved.len() }

  /// Drop all saved states and reset to the identity frame.
  pub fn reset(&mut self) {
    *self = Self::default();
  }
}

/// Saves the renderer state on creation and restores it on drop, on every exit path.
pub struct Scoped<'a, R: Renderer + ?Sized> {
  renderer: &'a mut R
}

impl<'a, R: Renderer + ?Sized> Scoped<'a, R> {
  pub fn new(renderer: &'a mut R) -> Self {
    renderer.push();
    Self { renderer }
  }
}

impl<R: Renderer + ?Sized> Deref for Scoped<'_, R> {
  type Target = R;
  fn deref(&self) -> &R { self.renderer } }

impl<R: Renderer + ?Sized> DerefMut for Scoped<'_, R> {
  fn deref_mut(&mut self) -> &mut R { self.renderer } }

impl<R: Renderer + ?Sized> Drop for Scoped<'_, R> {
  fn drop(&mut self) { self.renderer.pop() } }
