use amm_types::AmmError;
use soroban_sdk::{Env, U256};

/// Widen a non-negative token amount to 256 bits.
/// Callers validate the sign; a negative amount here is a bug.
pub fn to_u256(env: &Env, amount: i128) -> U256 {
    if amount < 0 {
        panic!("Negative amount");
    }
    U256::from_u128(env, amount as u128)
}

/// Narrow a 256-bit intermediate back to a token amount
pub fn from_u256(env: &Env, value: &U256) -> Result<i128, AmmError> {
    let max_amount = U256::from_u128(env, i128::MAX as u128);
    if value.gt(&max_amount) {
        return Err(AmmError::Overflow);
    }
    value
        .to_u128()
        .map(|v| v as i128)
        .ok_or(AmmError::Overflow)
}

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns floor((a * b) / denominator)
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Result<i128, AmmError> {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let product = to_u256(env, a).mul(&to_u256(env, b));
    let result = product.div(&to_u256(env, denominator));

    from_u256(env, &result)
}

/// reserve0 * reserve1 without overflow
pub fn product(env: &Env, reserve0: i128, reserve1: i128) -> U256 {
    to_u256(env, reserve0).mul(&to_u256(env, reserve1))
}
