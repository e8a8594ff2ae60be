use crate::custody::Custody;
use crate::events::Swap;
use crate::invariants::product_non_decreasing;
use crate::lock::with_pool_lock;
use crate::pairs::{lookup, store_reserves};
use amm_math::get_amount_out;
use amm_types::AmmError;
use soroban_sdk::{log, panic_with_error, Address, Env};

/// Execute an exact-input swap of `amount_in` of `token_in` for `token_out`.
///
/// Reserves are not derived from the swap amounts: after both transfers the
/// pool's real held balances are read back and become the new reserves, so
/// tokens sent to the contract outside the engine are absorbed here.
pub fn execute_swap(
    env: &Env,
    sender: &Address,
    amount_in: i128,
    token_in: &Address,
    token_out: &Address,
) -> Result<i128, AmmError> {
    if amount_in <= 0 {
        return Err(AmmError::InsufficientInputAmount);
    }
    if token_in == token_out {
        return Err(AmmError::IdenticalAssets);
    }

    let pool = lookup(env, token_in, token_out)?;

    with_pool_lock(env, &pool.token0, &pool.token1, || {
        let mut pool = lookup(env, token_in, token_out)?;
        let (reserve_in, reserve_out) = pool.reserves_for(token_in);

        let amount_out = get_amount_out(env, amount_in, reserve_in, reserve_out)?;
        if amount_out <= 0 {
            return Err(AmmError::InsufficientOutputAmount);
        }

        let custody = Custody::new(env);
        custody.ensure_covered(&pool.token0)?;
        custody.ensure_covered(&pool.token1)?;

        custody.pull(token_in, sender, amount_in);
        custody.push(token_out, sender, amount_out);

        // Reconcile against real balances
        let reserve0 = custody.held_balance(&pool.token0, pool.reserve0)?;
        let reserve1 = custody.held_balance(&pool.token1, pool.reserve1)?;

        if !product_non_decreasing(env, (pool.reserve0, pool.reserve1), (reserve0, reserve1)) {
            log!(
                env,
                "constant product decreased",
                pool.reserve0,
                pool.reserve1,
                reserve0,
                reserve1
            );
            panic_with_error!(env, AmmError::ConstantProductViolated);
        }

        store_reserves(env, &mut pool, reserve0, reserve1)?;

        Swap {
            sender: sender.clone(),
            amount_in,
            amount_out,
            token_in: token_in.clone(),
            token_out: token_out.clone(),
        }
        .publish(env);
        log!(env, "swap", amount_in, amount_out, reserve0, reserve1);

        Ok(amount_out)
    })
}
