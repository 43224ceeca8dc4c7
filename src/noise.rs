//! Randomness consumed by the sketch: smooth coherent noise and uniform draws.

use {
  ::noise::{NoiseFn, Perlin},
  rand::prelude::*,
  rand_pcg::Pcg64
};

pub trait NoiseSource {
  /// Coherent noise at `x`, in `[0, 1]`. Nearby inputs give nearby outputs.
  fn noise(&self, x: f32) -> f32;
  /// Uniform in `[min, max)`. Returns `min` when the range is empty.
  fn uniform(&mut self, min: f32, max: f32) -> f32;
  /// Uniform in `0..len`; `len` must be positive.
  fn index(&mut self, len: usize) -> usize;
}

/// Fractal Perlin noise sampled along a line, plus a PCG generator for uniform draws.
#[derive(Clone)]
pub struct CoherentNoise {
  perlin: Perlin,
  rng: Pcg64,
}

impl CoherentNoise {
  // keeps the 1D slice off the integer lattice, where Perlin is identically zero
  const SLICE_Y: f64 = 0.371;
  const OCTAVES: u32 = 4;
  /// Amplitude ratio between consecutive octaves
  const FALLOFF: f64 = 0.5;

  pub fn seed_from_u64(seed: u64) -> Self {
    Self::with_rng(Pcg64::seed_from_u64(seed))
  }

  pub fn from_entropy() -> Self {
    Self::with_rng(Pcg64::from_entropy())
  }

  fn with_rng(mut rng: Pcg64) -> Self {
    Self {
      perlin: Perlin::new(rng.gen()),
      rng,
    }
  }
}

impl NoiseSource for CoherentNoise {
  fn noise(&self, x: f32) -> f32 {
    let (mut amp, mut freq, mut sum, mut norm) = (1.0, 1.0, 0.0, 0.0);
    for _ in 0..Self::OCTAVES {
      sum += self.perlin.get([x as f64 * freq, Self::SLICE_Y * freq]) * amp;
      norm += amp;
      amp *= Self::FALLOFF;
      freq *= 2.0;
    }
    let val = if norm > 0.0 { sum / norm } else { 0.0 }; // [-1, 1]
    (((val + 1.0) * 0.5) as f32).clamp(0.0, 1.0)
  }

  fn uniform(&mut self, min: f32, max: f32) -> f32 {
    if !(min < max) {
      return min;
    }
    self.rng.gen_range(min..max)
  }

  fn index(&mut self, len: usize) -> usize {
    self.rng.gen_range(0..len)
  }
}

/// Test double: constant noise, deterministic uniform draws.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ConstantNoise {
  pub value: f32,
  pub rng: Pcg64,
}

#[cfg(test)]
impl ConstantNoise {
  pub fn new(value: f32) -> Self {
    Self { value, rng: Pcg64::seed_from_u64(0) }
  }
}

#[cfg(test)]
impl NoiseSource for ConstantNoise {
  fn noise(&self, _: f32) -> f32 { self.value }
  fn uniform(&mut self, min: f32, max: f32) -> f32 {
    if !(min < max) { return min; }
    self.rng.gen_range(min..max)
  }
  fn index(&mut self, len: usize) -> usize { self.rng.gen_range(0..len) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn noise_in_unit_range() {
    let source = CoherentNoise::seed_from_u64(0);
    for i in 0..10_000 {
      let v = source.noise(i as f32 * 0.037 - 50.0);
      assert!((0.0..=1.0).contains(&v), "{}", v);
    }
  }

  #[test] fn noise_is_smooth() {
    let source = CoherentNoise::seed_from_u64(1);
    let mut x = 0.0f32;
    while x < 20.0 {
      assert!((source.noise(x) - source.noise(x + 0.01)).abs() < 0.1);
      x += 0.05;
    }
  }

  #[test] fn noise_is_deterministic_per_instance() {
    let source = CoherentNoise::seed_from_u64(7);
    assert_eq!(source.noise(3.3), source.noise(3.3));
  }

  #[test] fn uniform_bounds() {
    let mut source = CoherentNoise::seed_from_u64(2);
    for _ in 0..1000 {
      let v = source.uniform(50.0, 100.0);
      assert!((50.0..100.0).contains(&v));
      assert!(source.index(4) < 4);
    }
    assert_eq!(source.uniform(3.0, 3.0), 3.0);
    assert_eq!(source.uniform(5.0, 1.0), 5.0);
  }

  #[test] fn seeded_sources_agree() {
    let mut a = CoherentNoise::seed_from_u64(11);
    let mut b = CoherentNoise::seed_from_u64(11);
    assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
    assert_eq!(a.noise(0.25), b.noise(0.25));
  }
}
