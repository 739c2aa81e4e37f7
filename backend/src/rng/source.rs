//! The randomness capability handed to every generator.

/// A stateful source of 32-bit signed integers, unit floats and bytes.
///
/// Generators take `&mut impl RandomSource` instead of reaching for a
/// global, so tests can substitute scripted sequences.
pub trait RandomSource {
    /// Uniform `i32` in `[min, max)`. The upper bound is exclusive.
    ///
    /// # Panics
    /// Implementations panic if `min >= max`.
    fn next_in_range(&mut self, min: i32, max: i32) -> i32;

    /// Uniform `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Fill `buf` with uniform bytes (each 0..=255).
    fn fill_bytes(&mut self, buf: &mut [u8]);
}

