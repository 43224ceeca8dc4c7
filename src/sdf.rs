use {
  euclid::{Box2D, Point2D},
  crate::geometry::BoundingBox
};

/// Signed distance function: negative inside, zero on the boundary.
pub trait SDF<S> {
  fn sdf(&self, pixel: Point2D<f32, S>) -> f32;
}

impl<S, F> SDF<S> for F where F: Fn(Point2D<f32, S>) -> f32 {
  fn sdf(&self, pixel: Point2D<f32, S>) -> f32 { self(pixel) }
}

/// Band of `width` centered on the boundary of `shape`; a stroke outline.
#[derive(Clone, Copy, Debug)]
pub struct Outline<T> {
  pub shape: T,
  pub width: f32
}

impl<S, T> SDF<S> for Outline<T> where T: SDF<S> {
  fn sdf(&self, pixel: Point2D<f32, S>) -> f32 {
    self.shape.sdf(pixel).abs() - self.width / 2.0
  }}

impl<S, T> BoundingBox<S> for Outline<T> where T: BoundingBox<S> {
  fn bounding_box(&self) -> Box2D<f32, S> {
    self.shape.bounding_box().inflate(self.width / 2.0, self.width / 2.0)
  }}
