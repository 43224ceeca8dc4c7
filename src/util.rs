use num_traits::Float;

/// Time a block and report it at debug level.
#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
  }}
);

/// Linear remap of `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`.
/// Not clamped: values outside the input range extrapolate.
/// A degenerate input range maps everything to `out_lo`.
pub fn remap<T: Float>(value: T, in_lo: T, in_hi: T, out_lo: T, out_hi: T) -> T {
  let span = in_hi - in_lo;
  if span == T::zero() || !span.is_finite() {
    return out_lo;
  }
  out_lo + (value - in_lo) / span * (out_hi - out_lo)
}
