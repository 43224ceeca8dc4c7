//! Coordinate spaces and shapes.
//!
//! The origin of the canvas coordinate system is in the top-left corner, `y` pointing down,
//! one unit per pixel. Drawing primitives are specified in [`LocalSpace`] and mapped onto
//! [`CanvasSpace`] by the renderer's current [`Rigid`] transform.

use euclid::{Point2D, Box2D, Size2D, Transform2D, Vector2D};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis of the canvas
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasSpace;
/// Coordinate basis of the active drawing frame
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LocalSpace;

pub type P2 = Point2D<f32, CanvasSpace>;
pub type V2 = Vector2D<f32, CanvasSpace>;
pub type LocalPoint = Point2D<f32, LocalSpace>;
pub type LocalVector = Vector2D<f32, LocalSpace>;
pub type CanvasSize = Size2D<f32, CanvasSpace>;
/// Rotation + translation, local frame onto the canvas
pub type Rigid = Transform2D<f32, LocalSpace, CanvasSpace>;

pub trait BoundingBox<S> {
  fn bounding_box(&self) -> Box2D<f32, S>;
}

/// `true` when the size is positive and finite on both axes.
pub fn is_drawable(size: CanvasSize) -> bool {
  size.width.is_finite() && size.height.is_finite()
    && size.width > 0.0 && size.height > 0.0
}

/// Half-open containment: `[0, width) × [0, height)`.
pub fn contains(size: CanvasSize, point: P2) -> bool {
  point.x >= 0.0 && point.x < size.width &&
  point.y >= 0.0 && point.y < size.height
}

/// Image of a local bounding box under a transform, as an axis-aligned box.
pub fn transform_bounding_box(
  bounding: Box2D<f32, LocalSpace>,
  transform: &Rigid
) -> Box2D<f32, CanvasSpace> {
  let pts = [
    [bounding.min.x, bounding.min.y],
    [bounding.max.x, bounding.min.y],
    [bounding.max.x, bounding.max.y],
    [bounding.min.x, bounding.max.y],
  ];
  let pts = pts.iter().cloned()
    .map(|p| transform.transform_point(p.into()));
  Box2D::from_points(pts)
}
