//! Test double: records primitives with their canvas-space positions and active style.

use {
  euclid::{Angle, Size2D},
  crate::{
    color::Color,
    geometry::{CanvasSize, LocalPoint, LocalSpace, LocalVector, P2}
  },
  super::{Renderer, StateStack, Style}
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
  Background(Color),
  Line { from: P2, to: P2, style: Style },
  Ellipse { center: P2, size: Size2D<f32, LocalSpace>, style: Style },
  Polyline { vertices: Vec<P2>, style: Style },
}

#[derive(Debug, Clone)]
pub struct Recorder {
  size: CanvasSize,
  stack: StateStack,
  pub calls: Vec<Call>,
  pub max_depth: usize,
}

impl Recorder {
  pub fn new(size: CanvasSize) -> Self {
    Self { size, stack: StateStack::default(), calls: vec![], max_depth: 0 }
  }

  fn to_canvas(&self, p: LocalPoint) -> P2 {
    self.stack.current.transform.transform_point(p)
  }

  pub fn ellipses(&self) -> impl Iterator<Item = (&P2, &Size2D<f32, LocalSpace>, &Style)> {
    self.calls.iter().filter_map(|call| match call {
      Call::Ellipse { center, size, style } => Some((center, size, style)),
      _ => None
    })
  }

  pub fn polylines(&self) -> impl Iterator<Item = (&Vec<P2>, &Style)> {
    self.calls.iter().filter_map(|call| match call {
      Call::Polyline { vertices, style } => Some((vertices, style)),
      _ => None
    })
  }
}

impl Renderer for Recorder {
  fn size(&self) -> CanvasSize { self.size }
  fn background(&mut self, color: Color) { self.calls.push(Call::Background(color)) }
  fn fill(&mut self, color: Option<Color>) { self.stack.current.style.fill = color }
  fn stroke(&mut self, color: Option<Color>) { self.stack.current.style.stroke = color }
  fn stroke_weight(&mut self, weight: f32) { self.stack.current.style.stroke_weight = weight }

  fn line(&mut self, from: LocalPoint, to: LocalPoint) {
    let (from, to) = (self.to_canvas(from), self.to_canvas(to));
    self.calls.push(Call::Line { from, to, style: self.stack.current.style });
  }

  fn ellipse(&mut self, center: LocalPoint, size: Size2D<f32, LocalSpace>) {
    let center = self.to_canvas(center);
    self.calls.push(Call::Ellipse { center, size, style: self.stack.current.style });
  }

  fn polyline(&mut self, vertices: &[LocalPoint]) {
    let vertices = vertices.iter().map(|&v| self.to_canvas(v)).collect();
    self.calls.push(Call::Polyline { vertices, style: self.stack.current.style });
  }

  fn push(&mut self) {
    self.stack.push();
    self.max_depth = self.max_depth.max(self.stack.depth());
  }
  fn pop(&mut self) { self.stack.pop() }
  fn translate(&mut self, offset: LocalVector) { self.stack.translate(offset) }
  fn rotate(&mut self, angle: Angle<f32>) { self.stack.rotate(angle) }
  fn depth(&self) -> usize { self.stack.depth() }
}
