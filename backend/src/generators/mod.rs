//! Generator set
//!
//! [`Method`] enumerates the benchmarked strategies with an explicit
//! identifier and display label; [`strategies`] holds the implementations.

pub mod strategies;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;

pub use strategies::{
    accumulate_32, byte_array, coin_flip, float_threshold, pair_concat, reinterpret,
};

/// One of the six `u64` generation strategies
///
/// Declaration order is benchmark order; `id()` numbers them from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Sum of 32 reinterpreted 32-bit draws
    Accumulate32,
    /// Two 32-bit draws concatenated high/low
    PairConcat,
    /// Per-bit float draw against a 0.5 threshold
    FloatThreshold,
    /// Per-bit `[0, 1)` integer draw
    CoinFlip,
    /// Eight random bytes, little-endian
    ByteArray,
    /// Two 32-bit draws reinterpreted through their raw bytes
    Reinterpret,
}

impl Method {
    /// All methods in benchmark order
    pub const ALL: [Method; 6] = [
        Method::Accumulate32,
        Method::PairConcat,
        Method::FloatThreshold,
        Method::CoinFlip,
        Method::ByteArray,
        Method::Reinterpret,
    ];

    /// Numeric identifier used in the ranking line
    ///
    /// # Example
    /// ```
    /// use random_u64_core::Method;
    ///
    /// assert_eq!(Method::Accumulate32.id(), 1);
    /// assert_eq!(Method::Reinterpret.id(), 6);
    /// ```
    pub fn id(self) -> u8 {
        match self {
            Method::Accumulate32 => 1,
            Method::PairConcat => 2,
            Method::FloatThreshold => 3,
            Method::CoinFlip => 4,
            Method::ByteArray => 5,
            Method::Reinterpret => 6,
        }
    }

    /// Display label, e.g. `Method3`
    pub fn label(self) -> String {
        self.to_string()
    }

    /// Produce one value with this strategy
    pub fn generate(self, rng: &mut impl RandomSource) -> u64 {
        match self {
            Method::Accumulate32 => accumulate_32(rng),
            Method::PairConcat => pair_concat(rng),
            Method::FloatThreshold => float_threshold(rng),
            Method::CoinFlip => coin_flip(rng),
            Method::ByteArray => byte_array(rng),
            Method::Reinterpret => reinterpret(rng),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method{}", self.id())
    }
}
