use crate::storage::DataKey;
use amm_types::AmmError;
use soroban_sdk::{log, Address, Env};

/// Run `op` while holding the pool's lock.
///
/// The flag lives in temporary storage and is cleared on both `Ok` and `Err`
/// returns. A panic inside `op` aborts the invocation and the host discards
/// the flag write together with everything else.
pub fn with_pool_lock<T>(
    env: &Env,
    token0: &Address,
    token1: &Address,
    op: impl FnOnce() -> Result<T, AmmError>,
) -> Result<T, AmmError> {
    let key = DataKey::Lock(token0.clone(), token1.clone());
    if env.storage().temporary().has(&key) {
        log!(env, "pool locked", token0.clone(), token1.clone());
        return Err(AmmError::PoolLocked);
    }

    env.storage().temporary().set(&key, &true);
    let result = op();
    env.storage().temporary().remove(&key);

    result
}

#[cfg(test)]
pub fn is_locked(env: &Env, token0: &Address, token1: &Address) -> bool {
    let key = DataKey::Lock(token0.clone(), token1.clone());
    env.storage().temporary().has(&key)
}
