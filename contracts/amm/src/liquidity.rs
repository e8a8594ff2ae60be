use crate::custody::Custody;
use crate::invariants::ratio_preserved;
use crate::lock::with_pool_lock;
use crate::pairs::{lookup, store_reserves};
use amm_math::optimal_deposit;
use amm_types::AmmError;
use soroban_sdk::{log, panic_with_error, Address, Env};

/// Deposit into the pool for `{token_a, token_b}` at its current ratio.
///
/// # Returns
/// (amount_a, amount_b) - Amounts actually taken, in argument order
pub fn add_liquidity(
    env: &Env,
    sender: &Address,
    token_a: &Address,
    token_b: &Address,
    amount_a_desired: i128,
    amount_b_desired: i128,
) -> Result<(i128, i128), AmmError> {
    if token_a == token_b {
        return Err(AmmError::IdenticalAssets);
    }
    if amount_a_desired <= 0 || amount_b_desired <= 0 {
        return Err(AmmError::InsufficientAmount);
    }

    let pool = lookup(env, token_a, token_b)?;

    with_pool_lock(env, &pool.token0, &pool.token1, || {
        // Re-read under the lock
        let mut pool = lookup(env, token_a, token_b)?;
        let (reserve_a, reserve_b) = pool.reserves_for(token_a);

        let (amount_a, amount_b) =
            match optimal_deposit(env, amount_a_desired, amount_b_desired, reserve_a, reserve_b) {
                Err(AmmError::OptimalAmountExceedsDesired) => {
                    log!(
                        env,
                        "deposit math exceeded desired amount",
                        amount_a_desired,
                        amount_b_desired,
                        reserve_a,
                        reserve_b
                    );
                    panic_with_error!(env, AmmError::OptimalAmountExceedsDesired);
                }
                result => result?,
            };

        // Take the tokens before touching any reserve
        let custody = Custody::new(env);
        custody.pull(token_a, sender, amount_a);
        custody.pull(token_b, sender, amount_b);

        let (amount0, amount1) = pool.to_canonical(token_a, amount_a, amount_b);
        let reserve0 = pool
            .reserve0
            .checked_add(amount0)
            .ok_or(AmmError::Overflow)?;
        let reserve1 = pool
            .reserve1
            .checked_add(amount1)
            .ok_or(AmmError::Overflow)?;

        debug_assert!(
            pool.is_empty()
                || ratio_preserved(env, (pool.reserve0, pool.reserve1), (reserve0, reserve1))
        );

        store_reserves(env, &mut pool, reserve0, reserve1)?;
        log!(env, "liquidity added", sender.clone(), amount_a, amount_b);

        Ok((amount_a, amount_b))
    })
}
