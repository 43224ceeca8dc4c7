//! Headless host: plays a scripted pointer path over the sketch, delivers one resize
//! midway, and exports the last frame.

use {
  std::f32::consts::TAU,
  flower_field::{
    config::SketchConfig,
    geometry::{CanvasSize, P2},
    noise::{CoherentNoise, NoiseSource},
    profile,
    render::{Canvas, Renderer},
    scene::Sketch
  },
  anyhow::Result
};

const FRAMES: u32 = 90;
const RESIZE_AT: u32 = 45;

/// Lissajous sweep over the canvas, `t` in `[0, 1)`.
fn pointer(t: f32, size: CanvasSize) -> P2 {
  P2::new(
    size.width * (0.5 + 0.45 * (TAU * t * 2.0).sin()),
    size.height * (0.5 + 0.45 * (TAU * t * 3.0).cos())
  )
}

/// Play `frames` frames along the pointer path, resizing to `resized` at frame `resize_at`.
fn play<N: NoiseSource>(
  sketch: &mut Sketch<N>,
  canvas: &mut Canvas,
  frames: u32,
  resize_at: u32,
  resized: (u32, u32)
) {
  for i in 0..frames {
    if i == resize_at {
      canvas.resize(resized.0, resized.1);
      sketch.resize(canvas.size());
    }
    let size = canvas.size();
    sketch.frame(&mut *canvas, pointer(i as f32 / frames as f32, size));
  }
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let config = SketchConfig::default().with_export('s', "out.jpg");
  let mut sketch = Sketch::new(config, CoherentNoise::from_entropy())?;
  let mut canvas = Canvas::new(960, 640);
  sketch.setup(canvas.size());

  profile!("animation", {
    play(&mut sketch, &mut canvas, FRAMES, RESIZE_AT, (1280, 720));
  });

  if let Some(path) = sketch.key_typed('s', &canvas)? {
    println!("{}", path.display());
  }
  Ok(())
}
