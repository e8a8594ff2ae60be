#![no_std]

mod error;
mod pool;

pub use error::*;
pub use pool::*;

/// Numerator of the input multiplier applied before pricing a swap.
/// 997 / 1000 leaves 0.3% of every input in the pool.
pub const FEE_NUMERATOR: u32 = 997;

/// Denominator of the input multiplier
pub const FEE_DENOMINATOR: u32 = 1000;
