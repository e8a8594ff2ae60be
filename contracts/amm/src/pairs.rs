use crate::custody::rebook;
use crate::events::PairCreated;
use crate::invariants::tokens_ordered;
use crate::storage::{
    get_pair_at, get_pair_count, get_pool, has_pool, is_registered, set_pair_at, set_pair_count,
    set_pool, MAX_PAGE_SIZE,
};
use amm_types::{sort_tokens, AmmError, Pool};
use soroban_sdk::{log, Address, Env, Vec};

/// Create the empty pool for `{token_a, token_b}`
pub fn create(env: &Env, token_a: &Address, token_b: &Address) -> Result<Pool, AmmError> {
    if token_a == token_b {
        return Err(AmmError::IdenticalAssets);
    }
    if !is_registered(env, token_a) || !is_registered(env, token_b) {
        return Err(AmmError::AssetNotRegistered);
    }

    let (token0, token1) = sort_tokens(token_a, token_b);
    if has_pool(env, &token0, &token1) {
        return Err(AmmError::PairAlreadyExists);
    }

    let pool = Pool::new(token0.clone(), token1.clone());
    debug_assert!(tokens_ordered(&pool));
    set_pool(env, &pool);

    // Indexed storage - O(1) append
    let pair_count = get_pair_count(env);
    set_pair_at(env, pair_count, &token0, &token1);
    set_pair_count(env, pair_count + 1);

    PairCreated {
        token0: token0.clone(),
        token1: token1.clone(),
    }
    .publish(env);
    log!(env, "pair created", token0, token1, pair_count);

    Ok(pool)
}

/// Find the pool for `{token_a, token_b}` in either argument order
pub fn lookup(env: &Env, token_a: &Address, token_b: &Address) -> Result<Pool, AmmError> {
    let (token0, token1) = sort_tokens(token_a, token_b);
    get_pool(env, &token0, &token1).ok_or(AmmError::PairNotFound)
}

/// Overwrite a pool's reserves, keeping the per-token booked totals in step
pub fn store_reserves(
    env: &Env,
    pool: &mut Pool,
    reserve0: i128,
    reserve1: i128,
) -> Result<(), AmmError> {
    rebook(env, &pool.token0, pool.reserve0, reserve0)?;
    rebook(env, &pool.token1, pool.reserve1, reserve1)?;

    pool.reserve0 = reserve0;
    pool.reserve1 = reserve1;
    set_pool(env, pool);

    Ok(())
}

pub fn pair_count(env: &Env) -> u32 {
    get_pair_count(env)
}

pub fn pair_at(env: &Env, index: u32) -> Option<Pool> {
    let (token0, token1) = get_pair_at(env, index)?;
    get_pool(env, &token0, &token1)
}

/// Up to `limit` pools (capped at MAX_PAGE_SIZE) starting at `start_index`
pub fn paginated(env: &Env, start_index: u32, limit: u32) -> Vec<Pool> {
    let safe_limit = limit.min(MAX_PAGE_SIZE);
    let end_index = start_index
        .saturating_add(safe_limit)
        .min(get_pair_count(env));

    let mut pools: Vec<Pool> = Vec::new(env);
    for i in start_index..end_index {
        if let Some(pool) = pair_at(env, i) {
            pools.push_back(pool);
        }
    }
    pools
}
