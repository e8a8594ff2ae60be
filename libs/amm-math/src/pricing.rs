use crate::full_math::{from_u256, mul_div, to_u256};
use amm_types::{AmmError, FEE_DENOMINATOR, FEE_NUMERATOR};
use soroban_sdk::{Env, U256};

/// Amount of token B worth `amount_a` of token A at the current reserve ratio
///
/// quote = floor(amount_a * reserve_b / reserve_a)
pub fn quote(env: &Env, amount_a: i128, reserve_a: i128, reserve_b: i128) -> Result<i128, AmmError> {
    if amount_a <= 0 {
        return Err(AmmError::InsufficientAmount);
    }
    if reserve_a <= 0 || reserve_b <= 0 {
        return Err(AmmError::InsufficientLiquidity);
    }

    mul_div(env, amount_a, reserve_b, reserve_a)
}

/// Output of an exact-input swap against constant-product reserves
///
/// ```text
/// amount_in_with_fee = amount_in * 997
/// amount_out = floor(amount_in_with_fee * reserve_out / (reserve_in * 1000 + amount_in_with_fee))
/// ```
///
/// The result is always strictly below `reserve_out`. Empty reserves price
/// to zero; the caller decides whether that is an error.
pub fn get_amount_out(
    env: &Env,
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
) -> Result<i128, AmmError> {
    if amount_in <= 0 {
        return Err(AmmError::InsufficientInputAmount);
    }
    if reserve_in < 0 || reserve_out < 0 {
        return Err(AmmError::InsufficientLiquidity);
    }

    let amount_in_with_fee = to_u256(env, amount_in).mul(&U256::from_u32(env, FEE_NUMERATOR));
    let numerator = amount_in_with_fee.mul(&to_u256(env, reserve_out));
    let denominator = to_u256(env, reserve_in)
        .mul(&U256::from_u32(env, FEE_DENOMINATOR))
        .add(&amount_in_with_fee);

    from_u256(env, &numerator.div(&denominator))
}
