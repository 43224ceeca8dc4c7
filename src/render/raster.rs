use {
  std::path::Path,
  euclid::{Angle, Box2D, Point2D, Size2D},
  image::{DynamicImage, Rgba, RgbaImage},
  rayon::prelude::*,
  crate::{
    color::Color,
    error::Result,
    geometry::{self, BoundingBox, CanvasSize, CanvasSpace, Capsule, Ellipse, LocalPoint, LocalSpace, LocalVector, Polyline, Rigid},
    sdf::{Outline, SDF}
  },
  super::{Export, Renderer, StateStack}
};

/// Headless raster canvas. Shapes are rasterized from their signed distance, with one pixel
/// of antialiasing, and alpha-blended over the existing content.
pub struct Canvas {
  image: RgbaImage,
  stack: StateStack,
}

impl Canvas {
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      image: RgbaImage::new(width, height),
      stack: StateStack::default()
    }
  }

  /// Reallocate the framebuffer. Content and drawing state are discarded.
  pub fn resize(&mut self, width: u32, height: u32) {
    self.image = RgbaImage::new(width, height);
    self.stack.reset();
  }

  pub fn image(&self) -> &RgbaImage { &self.image }

  fn paint<T>(&mut self, shape: &T, color: Color)
    where T: SDF<LocalSpace> + BoundingBox<LocalSpace>
  {
    if color.alpha() == 0 {
      return;
    }
    let transform = self.stack.current.transform;
    let bounding_box = match clip_bounding_box(shape.bounding_box(), &transform, self.image.dimensions()) {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };
    let inverse = match transform.inverse() {
      Some(x) => x,
      None => return
    };
    let color: Rgba<u8> = color.into();

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .for_each(|(y, x)| {
        let center = Point2D::<f32, CanvasSpace>::new(x as f32 + 0.5, y as f32 + 0.5);
        let sdf = shape.sdf(inverse.transform_point(center));
        let pixel = self.image.get_pixel_mut(x, y);
        *pixel = sdf_overlay_aa(sdf, *pixel, color);
      });
  }
}

// pixel-space box covering the transformed shape, clipped to the image
fn clip_bounding_box(
  bounding_box: Box2D<f32, LocalSpace>,
  transform: &Rigid,
  (width, height): (u32, u32)
) -> Option<Box2D<u32, CanvasSpace>> {
  geometry::transform_bounding_box(bounding_box, transform)
    .round_out()
    .intersection(&Box2D::from_size(Size2D::new(width as f32, height as f32)))
    .map(|x| x.to_u32())
}

fn sdf_overlay_aa(sdf: f32, col1: Rgba<u8>, col2: Rgba<u8>) -> Rgba<u8> {
  let coverage = (0.5 - sdf).clamp(0.0, 1.0); // antialias over one pixel
  if coverage <= 0.0 {
    return col1;
  }
  alpha_over(col1, col2, coverage)
}

// source-over compositing, straight alpha; an opaque destination stays opaque
fn alpha_over(dst: Rgba<u8>, src: Rgba<u8>, coverage: f32) -> Rgba<u8> {
  let a_src = src.0[3] as f32 / 255.0 * coverage;
  let a_dst = dst.0[3] as f32 / 255.0;
  let a_out = a_src + a_dst * (1.0 - a_src);
  if a_out <= 0.0 {
    return dst;
  }
  let mut out = [0u8; 4];
  for i in 0..3 {
    let c = (src.0[i] as f32 * a_src + dst.0[i] as f32 * a_dst * (1.0 - a_src)) / a_out;
    out[i] = c.round().clamp(0.0, 255.0) as u8;
  }
  out[3] = (a_out * 255.0).round().clamp(0.0, 255.0) as u8;
  Rgba(out)
}

impl Renderer for Canvas {
  fn size(&self) -> CanvasSize {
    let (width, height) = self.image.dimensions();
    Size2D::new(width as f32, height as f32)
  }

  fn background(&mut self, color: Color) {
    let buf: &mut [u8] = &mut self.image;
    buf.par_chunks_exact_mut(4)
      .for_each(|px| px.copy_from_slice(&color.0));
  }

  fn fill(&mut self, color: Option<Color>) { self.stack.current.style.fill = color }
  fn stroke(&mut self, color: Option<Color>) { self.stack.current.style.stroke = color }
  fn stroke_weight(&mut self, weight: f32) { self.stack.current.style.stroke_weight = weight }

  fn line(&mut self, from: LocalPoint, to: LocalPoint) {
    let style = self.stack.current.style;
    if let (Some(stroke), true) = (style.stroke, style.stroke_weight > 0.0) {
      self.paint(&Capsule { a: from, b: to, width: style.stroke_weight }, stroke);
    }
  }

  fn ellipse(&mut self, center: LocalPoint, size: Size2D<f32, LocalSpace>) {
    let style = self.stack.current.style;
    let shape = Ellipse { center, size };
    if let Some(fill) = style.fill {
      self.paint(&shape, fill);
    }
    if let (Some(stroke), true) = (style.stroke, style.stroke_weight > 0.0) {
      self.paint(&Outline { shape, width: style.stroke_weight }, stroke);
    }
  }

  fn polyline(&mut self, vertices: &[LocalPoint]) {
    let style = self.stack.current.style;
    if vertices.is_empty() {
      return;
    }
    if let (Some(stroke), true) = (style.stroke, style.stroke_weight > 0.0) {
      // segment by segment: small bounding boxes instead of one box around the whole chain
      let line = Polyline { vertices: vertices.to_vec(), width: style.stroke_weight };
      line.segments().for_each(|segment| self.paint(&segment, stroke));
      if let [single] = vertices {
        self.paint(&Capsule { a: *single, b: *single, width: style.stroke_weight }, stroke);
      }
    }
  }

  fn push(&mut self) { self.stack.push() }
  fn pop(&mut self) { self.stack.pop() }
  fn translate(&mut self, offset: LocalVector) { self.stack.translate(offset) }
  fn rotate(&mut self, angle: Angle<f32>) { self.stack.rotate(angle) }
  fn depth(&self) -> usize { self.stack.depth() }
}

impl Export for Canvas {
  /// JPEG has no alpha channel; the frame is flattened to RGB for it.
  fn export(&self, path: &Path) -> Result<()> {
    let is_jpeg = path.extension()
      .and_then(|ext| ext.to_str())
      .map_or(false, |ext| matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "jpeg"));
    if is_jpeg {
      DynamicImage::ImageRgba8(self.image.clone()).to_rgb8().save(path)?;
    } else {
      self.image.save(path)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::render::Scoped
  };

  const RED: Color = Color::rgb(255, 0, 0);

  #[test] fn background_floods() {
    let mut canvas = Canvas::new(8, 4);
    canvas.background(Color::rgb(20, 0, 50));
    assert!(canvas.image().pixels().all(|px| px.0 == [20, 0, 50, 255]));
  }

  #[test] fn filled_circle() {
    let mut canvas = Canvas::new(64, 64);
    canvas.background(Color::rgb(0, 0, 0));
    canvas.fill(Some(RED));
    canvas.stroke(None);
    canvas.ellipse(LocalPoint::new(32.0, 32.0), Size2D::new(20.0, 20.0));
    assert_eq!(canvas.image().get_pixel(32, 32).0, [255, 0, 0, 255]);
    assert_eq!(canvas.image().get_pixel(32, 50).0, [0, 0, 0, 255]);
    assert_eq!(canvas.image().get_pixel(2, 2).0, [0, 0, 0, 255]);
  }

  #[test] fn stroke_only_ring() {
    let mut canvas = Canvas::new(64, 64);
    canvas.background(Color::rgb(0, 0, 0));
    canvas.fill(None);
    canvas.stroke(Some(RED));
    canvas.stroke_weight(4.0);
    canvas.ellipse(LocalPoint::new(32.0, 32.0), Size2D::new(40.0, 40.0));
    assert_eq!(canvas.image().get_pixel(32, 32).0, [0, 0, 0, 255]);
    assert_eq!(canvas.image().get_pixel(52, 32).0, [255, 0, 0, 255]);
  }

  #[test] fn transformed_line() {
    let mut canvas = Canvas::new(32, 32);
    canvas.background(Color::rgb(0, 0, 0));
    canvas.stroke(Some(RED));
    canvas.stroke_weight(3.0);
    {
      let mut frame = Scoped::new(&mut canvas);
      frame.translate(LocalVector::new(16.0, 4.0));
      frame.rotate(Angle::degrees(90.0));
      frame.line(LocalPoint::new(0.0, 0.0), LocalPoint::new(20.0, 0.0));
    }
    // vertical after rotation: x = 16, y in [4, 24]
    assert_eq!(canvas.image().get_pixel(16, 14).0, [255, 0, 0, 255]);
    assert_eq!(canvas.image().get_pixel(26, 14).0, [0, 0, 0, 255]);
    assert_eq!(canvas.depth(), 0);
  }

  #[test] fn offscreen_shapes_are_clipped() {
    let mut canvas = Canvas::new(16, 16);
    canvas.fill(Some(RED));
    canvas.ellipse(LocalPoint::new(-100.0, -100.0), Size2D::new(10.0, 10.0));
    canvas.ellipse(LocalPoint::new(16.0, 16.0), Size2D::new(10.0, 10.0));
    assert_eq!(canvas.image().get_pixel(15, 15).0[0], 255);
  }

  #[test] fn translucent_blend() {
    let mut canvas = Canvas::new(4, 4);
    canvas.background(Color::rgb(0, 0, 0));
    canvas.fill(Some(Color::rgba(255, 255, 255, 128)));
    canvas.stroke(None);
    canvas.ellipse(LocalPoint::new(2.0, 2.0), Size2D::new(20.0, 20.0));
    let px = canvas.image().get_pixel(1, 1).0;
    assert!(px[0] > 100 && px[0] < 160, "{:?}", px);
    assert_eq!(px[3], 255);
  }

  #[test] fn opaque_destination_stays_opaque() {
    let dst = Rgba([20, 0, 50, 255]);
    for alpha in 0..=255u8 {
      for coverage in [0.1, 0.37, 0.5, 1.0] {
        let out = alpha_over(dst, Rgba([250, 200, 200, alpha]), coverage);
        assert_eq!(out.0[3], 255, "alpha {} coverage {}", alpha, coverage);
      }
    }
    let half = alpha_over(Rgba([0, 0, 0, 255]), Rgba([255, 255, 255, 255]), 0.5);
    assert_eq!(half.0, [128, 128, 128, 255]);
  }

  #[test] fn over_transparent_keeps_source_color() {
    let out = alpha_over(Rgba([0, 0, 0, 0]), Rgba([255, 0, 0, 128]), 1.0);
    assert_eq!(out.0, [255, 0, 0, 128]);
    assert_eq!(alpha_over(Rgba([9, 9, 9, 0]), Rgba([255, 0, 0, 0]), 1.0).0, [9, 9, 9, 0]);
  }

  #[test] fn zero_size_ellipse_paints_nothing() {
    let mut canvas = Canvas::new(8, 8);
    canvas.background(Color::rgb(0, 0, 0));
    canvas.fill(Some(RED));
    canvas.stroke(None);
    canvas.ellipse(LocalPoint::new(4.0, 4.0), Size2D::new(0.0, 6.0));
    canvas.ellipse(LocalPoint::new(4.5, 4.5), Size2D::new(0.0, 0.0));
    assert!(canvas.image().pixels().all(|px| px.0 == [0, 0, 0, 255]));
  }

  #[test] fn resize_resets() {
    let mut canvas = Canvas::new(4, 4);
    canvas.push();
    canvas.resize(10, 6);
    assert_eq!(canvas.size(), Size2D::new(10.0, 6.0));
    assert_eq!(canvas.depth(), 0);
  }

  #[test] fn export_png_and_jpg() -> Result<()> {
    let dir = std::env::temp_dir().join("flower-field-raster-test");
    std::fs::create_dir_all(&dir)?;
    let mut canvas = Canvas::new(16, 16);
    canvas.background(Color::rgb(20, 0, 50));
    for name in ["frame.png", "frame.jpg"] {
      let path = dir.join(name);
      canvas.export(&path)?;
      let loaded = image::open(&path)?.to_rgba8();
      assert_eq!(loaded.dimensions(), (16, 16));
    }
    Ok(())
  }
}
