//! xorshift64* random number generator
//!
//! Fast 64-bit PRNG backing the benchmark's shared random source.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Seeding
//!
//! The benchmark seeds from OS entropy ([`RngManager::from_entropy`]) so
//! successive runs see different sequences. Tests seed explicitly: same
//! seed, same sequence.

use serde::{Deserialize, Serialize};

use super::source::RandomSource;

/// Random number generator using xorshift64*
///
/// # Example
/// ```
/// use random_u64_core::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let range_value = rng.range(0, 100); // [0, 100)
/// assert!((0..100).contains(&range_value));
/// # let _ = value;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced by 1 (xorshift state must be non-zero).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use random_u64_core::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let value = rng.range(i32::MIN as i64, i32::MAX as i64);
    /// assert!(value < i32::MAX as i64);
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Get current RNG state
    ///
    /// `RngManager::new(state)` resumes the sequence from this point.
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use random_u64_core::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let probability = rng.next_f64();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Top 53 bits fill the mantissa
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}

impl RandomSource for RngManager {
    fn next_in_range(&mut self, min: i32, max: i32) -> i32 {
        self.range(min as i64, max as i64) as i32
    }

    fn next_f64(&mut self) -> f64 {
        RngManager::next_f64(self)
    }

    fn fill_bytes(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(8) {
            let bytes = self.next().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
