#![no_std]

#[cfg(test)]
extern crate std;

pub mod full_math;
pub mod liquidity;
pub mod pricing;

#[cfg(test)]
mod proptest_properties;

pub use full_math::*;
pub use liquidity::*;
pub use pricing::*;
