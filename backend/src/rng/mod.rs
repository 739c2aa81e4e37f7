//! Random number sources
//!
//! Every generator draws through the [`RandomSource`] trait, which models a
//! source that natively produces 32-bit signed integers, floats in [0, 1)
//! and raw bytes. The production source is [`RngManager`] (xorshift64*).

mod source;
mod xorshift;

pub use source::RandomSource;
pub use xorshift::RngManager;
