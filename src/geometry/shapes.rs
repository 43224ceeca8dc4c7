use {
  super::{BoundingBox, CanvasSpace, LocalSpace},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2}
};

/// Disc used as a placement footprint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle<S = CanvasSpace> {
  pub center: Point2D<f32, S>,
  pub r: f32
}

impl<S> Circle<S> {
  pub fn new(center: Point2D<f32, S>, r: f32) -> Self { Self { center, r } }

  /// Touching circles do not overlap.
  pub fn overlaps(&self, other: &Self) -> bool {
    self.center.distance_to(other.center) < self.r + other.r
  }
}

impl<S> BoundingBox<S> for Circle<S> {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      self.center - V2::splat(self.r),
      self.center + V2::splat(self.r)
    )}}

impl<S> SDF<S> for Circle<S> {
  fn sdf(&self, pixel: Point2D<f32, S>) -> f32 {
    pixel.distance_to(self.center) - self.r
  }
}

/// Axis-aligned ellipse given by its full width and height, like `ellipse(cx, cy, w, h)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipse {
  pub center: Point2D<f32, LocalSpace>,
  pub size: Size2D<f32, LocalSpace>
}

impl BoundingBox<LocalSpace> for Ellipse {
  fn bounding_box(&self) -> Box2D<f32, LocalSpace> {
    let half = self.size.to_vector() / 2.0;
    Box2D::new(self.center - half, self.center + half)
  }}

impl SDF<LocalSpace> for Ellipse {
  fn sdf(&self, pixel: Point2D<f32, LocalSpace>) -> f32 {
    let p = pixel - self.center;
    let (rx, ry) = (self.size.width / 2.0, self.size.height / 2.0);
    if !(rx > 0.0 && ry > 0.0) {
      return f32::INFINITY; // empty: covers no pixel
    }
    // first order approximation, exact for circles
    let k0 = V2::<f32, LocalSpace>::new(p.x / rx, p.y / ry).length();
    let k1 = V2::<f32, LocalSpace>::new(p.x / (rx * rx), p.y / (ry * ry)).length();
    if k1 == 0.0 {
      return -rx.min(ry);
    }
    k0 * (k0 - 1.0) / k1
  }
}

/// Line segment with round caps, `width` across.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Capsule {
  pub a: Point2D<f32, LocalSpace>,
  pub b: Point2D<f32, LocalSpace>,
  pub width: f32
}

impl BoundingBox<LocalSpace> for Capsule {
  fn bounding_box(&self) -> Box2D<f32, LocalSpace> {
    Box2D::from_points([self.a, self.b])
      .inflate(self.width / 2.0, self.width / 2.0)
  }}

impl SDF<LocalSpace> for Capsule {
  fn sdf(&self, pixel: Point2D<f32, LocalSpace>) -> f32 {
    let pa = pixel - self.a;
    let ba = self.b - self.a;
    let len2 = ba.square_length();
    let h = if len2 > 0.0 { (pa.dot(ba) / len2).clamp(0.0, 1.0) } else { 0.0 };
    (pa - ba * h).length() - self.width / 2.0
  }
}

/// Open chain of capsules, like `beginShape(); vertex(..)*; endShape()` without fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
  pub vertices: Vec<Point2D<f32, LocalSpace>>,
  pub width: f32
}

impl Polyline {
  pub fn segments(&self) -> impl Iterator<Item = Capsule> + '_ {
    self.vertices.windows(2)
      .map(move |w| Capsule { a: w[0], b: w[1], width: self.width })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  type P = Point2D<f32, LocalSpace>;

  #[test] fn circle_overlap() {
    let a = Circle::<CanvasSpace>::new([0.0, 0.0].into(), 50.0);
    let touching = Circle::new([100.0, 0.0].into(), 50.0);
    let inside = Circle::new([99.0, 0.0].into(), 50.0);
    assert!(!a.overlaps(&touching));
    assert!(a.overlaps(&inside));
  }

  #[test] fn ellipse_is_exact_for_circles() {
    let e = Ellipse { center: P::new(10.0, 10.0), size: Size2D::new(20.0, 20.0) };
    assert!((e.sdf(P::new(30.0, 10.0)) - 10.0).abs() < 1e-4);
    assert!((e.sdf(P::new(10.0, 10.0)) + 10.0).abs() < 1e-4);
    assert!(e.sdf(P::new(10.0, 15.0)) < 0.0);
  }

  #[test] fn empty_ellipse_is_never_inside() {
    for size in [Size2D::new(0.0, 4.0), Size2D::new(4.0, 0.0), Size2D::zero(), Size2D::new(-2.0, 3.0)] {
      let e = Ellipse { center: P::new(0.0, 0.0), size };
      assert_eq!(e.sdf(P::new(0.0, 0.0)), f32::INFINITY);
      assert_eq!(e.sdf(P::new(3.0, 4.0)), f32::INFINITY);
    }
  }

  #[test] fn capsule_distance() {
    let c = Capsule { a: P::new(0.0, 0.0), b: P::new(10.0, 0.0), width: 2.0 };
    assert!((c.sdf(P::new(5.0, 3.0)) - 2.0).abs() < 1e-5);
    assert!((c.sdf(P::new(13.0, 0.0)) - 2.0).abs() < 1e-5);
    assert!(c.sdf(P::new(5.0, 0.5)) < 0.0);
  }

  #[test] fn polyline_segments() {
    let line = Polyline {
      vertices: vec![P::new(0.0, 0.0), P::new(10.0, 0.0), P::new(10.0, 10.0)],
      width: 1.0
    };
    let segments = line.segments().collect::<Vec<_>>();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1], Capsule { a: P::new(10.0, 0.0), b: P::new(10.0, 10.0), width: 1.0 });
    assert!((segments[1].sdf(P::new(12.0, 5.0)) - 1.5).abs() < 1e-5);
    let single = Polyline { vertices: vec![P::new(1.0, 1.0)], width: 1.0 };
    assert_eq!(single.segments().count(), 0);
  }
}
