//! The six ways of assembling a `u64` from a 32-bit signed source.
//!
//! Each function draws only through [`RandomSource`] and returns one value.

use crate::rng::RandomSource;

/// Draw over the full signed range `[i32::MIN, i32::MAX)`.
#[inline]
fn full_range_i32(rng: &mut impl RandomSource) -> i32 {
    rng.next_in_range(i32::MIN, i32::MAX)
}

/// Sum of 32 draws, each reinterpreted as `u32`.
///
/// Does not populate all 64 bits: the result never exceeds `32 * u32::MAX`
/// and clusters around its midpoint.
pub fn accumulate_32(rng: &mut impl RandomSource) -> u64 {
    let mut result = 0u64;

    for _ in 0..32 {
        result += full_range_i32(rng) as u32 as u64;
    }

    result
}

/// High word from the first draw, low word from the second.
pub fn pair_concat(rng: &mut impl RandomSource) -> u64 {
    let x1 = full_range_i32(rng);
    let x2 = full_range_i32(rng);

    let mut y = x1 as u32 as u64;
    y <<= 32;
    y | x2 as u32 as u64
}

/// One float draw per bit; the bit is set when the draw is strictly above 0.5.
pub fn float_threshold(rng: &mut impl RandomSource) -> u64 {
    let mut result = 0u64;

    for power in 0..64 {
        if rng.next_f64() > 0.5 {
            result |= 1u64 << power;
        }
    }

    result
}

/// One `[0, 1)` integer draw per bit; the bit is set when the draw is 1.
///
/// The upper bound is exclusive, so the draw is always 0 and so is the
/// result.
pub fn coin_flip(rng: &mut impl RandomSource) -> u64 {
    let mut result = 0u64;

    for power in 0..64 {
        if rng.next_in_range(0, 1) == 1 {
            result |= 1u64 << power;
        }
    }

    result
}

/// Eight random bytes read as a little-endian `u64`.
pub fn byte_array(rng: &mut impl RandomSource) -> u64 {
    let mut bytes = [0u8; 8];
    rng.fill_bytes(&mut bytes);
    u64::from_le_bytes(bytes)
}

/// Same draws as [`pair_concat`], reinterpreted through the raw bytes of the
/// `i32` rather than an `as` cast.
pub fn reinterpret(rng: &mut impl RandomSource) -> u64 {
    let high = u32::from_ne_bytes(full_range_i32(rng).to_ne_bytes());
    let mut result = high as u64;
    result <<= 32;

    let low = u32::from_ne_bytes(full_range_i32(rng).to_ne_bytes());
    result | low as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RngManager;

    /// Returns a fixed value for every integer draw.
    struct Constant(i32);

    impl RandomSource for Constant {
        fn next_in_range(&mut self, _min: i32, _max: i32) -> i32 {
            self.0
        }

        fn next_f64(&mut self) -> f64 {
            0.0
        }

        fn fill_bytes(&mut self, buf: &mut [u8]) {
            buf.fill(0);
        }
    }

    #[test]
    fn test_pair_concat_places_first_draw_high() {
        let mut rng = Constant(-1);
        assert_eq!(pair_concat(&mut rng), u64::MAX);

        let mut rng = Constant(1);
        assert_eq!(pair_concat(&mut rng), 0x0000_0001_0000_0001);
    }

    #[test]
    fn test_reinterpret_of_negative_one_is_all_ones() {
        let mut rng = Constant(-1);
        assert_eq!(reinterpret(&mut rng), u64::MAX);
    }

    #[test]
    fn test_accumulate_32_of_constant_draw() {
        let mut rng = Constant(-1);
        assert_eq!(accumulate_32(&mut rng), 32 * u32::MAX as u64);

        let mut rng = Constant(3);
        assert_eq!(accumulate_32(&mut rng), 96);
    }

    #[test]
    fn test_coin_flip_ignores_zero_draws() {
        let mut rng = Constant(0);
        assert_eq!(coin_flip(&mut rng), 0);
    }

    #[test]
    fn test_coin_flip_sets_every_bit_on_ones() {
        // A source that ignores the bound shows which bits would be set
        let mut rng = Constant(1);
        assert_eq!(coin_flip(&mut rng), u64::MAX);
    }

    #[test]
    fn test_float_threshold_zero_draws() {
        let mut rng = Constant(0);
        assert_eq!(float_threshold(&mut rng), 0);
    }

    #[test]
    fn test_byte_array_consumes_one_fill() {
        let mut a = RngManager::new(11);
        let mut b = RngManager::new(11);

        let value = byte_array(&mut a);
        assert_eq!(value, b.next());
    }
}
