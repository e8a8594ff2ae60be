// ============================================================================
// INVARIANTS - properties every pool must keep across operations
// ============================================================================
//
// 1. ORDERING     token0 < token1 for every stored pool
// 2. PRODUCT      reserve0 * reserve1 never decreases across a swap
// 3. RATIO        a non-first deposit keeps reserve0 : reserve1 up to rounding
//
// Products are compared in 256 bits; i128 reserves overflow when multiplied.
// ============================================================================

use amm_math::{product, to_u256};
use amm_types::Pool;
use soroban_sdk::Env;

/// Invariant: token0 sorts strictly before token1
pub fn tokens_ordered(pool: &Pool) -> bool {
    pool.token0 < pool.token1
}

/// Invariant: constant product does not shrink
///
/// Property:
///   after.0 * after.1 >= before.0 * before.1
pub fn product_non_decreasing(env: &Env, before: (i128, i128), after: (i128, i128)) -> bool {
    if after.0 < 0 || after.1 < 0 {
        return false;
    }
    product(env, after.0, after.1) >= product(env, before.0, before.1)
}

/// Invariant: deposit preserves the price
///
/// Property:
///   |after.0 * before.1 - after.1 * before.0| < max(before.0, before.1)
///
/// Each side of a clipped deposit is floored once, so the cross-products
/// differ by less than one unit of the larger reserve.
pub fn ratio_preserved(env: &Env, before: (i128, i128), after: (i128, i128)) -> bool {
    let lhs = to_u256(env, after.0).mul(&to_u256(env, before.1));
    let rhs = to_u256(env, after.1).mul(&to_u256(env, before.0));
    let drift = if lhs > rhs { lhs.sub(&rhs) } else { rhs.sub(&lhs) };

    drift < to_u256(env, before.0.max(before.1))
}
