use amm_types::Pool;
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// SOROBAN RESOURCE LIMITS - constraints that shape the storage layout:
// ============================================================================
// - Ledger entry size: 128 KiB max per entry
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design considerations:
// - Each pool (~140 bytes) is its own persistent entry keyed by the sorted pair
// - The pair list uses indexed storage (PairCount + PairAt) instead of a Vec
// - Booked totals are one entry per token, shared by every pool holding it
// - Pool locks live in temporary storage and never outlive an invocation
//
// A swap touches: 1 pool, 2 booked totals, 1 lock, plus the token contracts.
// ============================================================================

/// Maximum pools returned by one paginated query
pub const MAX_PAGE_SIZE: u32 = 50;

/// Storage keys for the AMM contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Token -> registered flag (Persistent storage)
    Registered(Address),
    /// (token0, token1) -> Pool (Persistent storage)
    Pair(Address, Address),
    /// Number of pools created (Instance storage)
    PairCount,
    /// Creation index -> (token0, token1) (Persistent storage)
    PairAt(u32),
    /// Token -> sum of that token's reserves over all pools (Persistent storage)
    Booked(Address),
    /// (token0, token1) -> operation in flight (Temporary storage)
    Lock(Address, Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
pub const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Asset registry ===

pub fn is_registered(env: &Env, token: &Address) -> bool {
    let key = DataKey::Registered(token.clone());
    let registered = env.storage().persistent().get(&key).unwrap_or(false);
    if registered {
        extend_persistent_ttl(env, &key);
    }
    registered
}

pub fn set_registered(env: &Env, token: &Address) {
    let key = DataKey::Registered(token.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent_ttl(env, &key);
}

// === Pools ===

pub fn has_pool(env: &Env, token0: &Address, token1: &Address) -> bool {
    let key = DataKey::Pair(token0.clone(), token1.clone());
    env.storage().persistent().has(&key)
}

pub fn get_pool(env: &Env, token0: &Address, token1: &Address) -> Option<Pool> {
    let key = DataKey::Pair(token0.clone(), token1.clone());
    let pool = env.storage().persistent().get(&key);
    if pool.is_some() {
        extend_persistent_ttl(env, &key);
    }
    pool
}

pub fn set_pool(env: &Env, pool: &Pool) {
    let key = DataKey::Pair(pool.token0.clone(), pool.token1.clone());
    env.storage().persistent().set(&key, pool);
    extend_persistent_ttl(env, &key);
}

// === Pair index ===

pub fn get_pair_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::PairCount)
        .unwrap_or(0)
}

pub fn set_pair_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::PairCount, &count);
}

pub fn get_pair_at(env: &Env, index: u32) -> Option<(Address, Address)> {
    let key = DataKey::PairAt(index);
    let pair = env.storage().persistent().get(&key);
    if pair.is_some() {
        extend_persistent_ttl(env, &key);
    }
    pair
}

pub fn set_pair_at(env: &Env, index: u32, token0: &Address, token1: &Address) {
    let key = DataKey::PairAt(index);
    env.storage()
        .persistent()
        .set(&key, &(token0.clone(), token1.clone()));
    extend_persistent_ttl(env, &key);
}

// === Custody bookkeeping ===

pub fn get_booked(env: &Env, token: &Address) -> i128 {
    let key = DataKey::Booked(token.clone());
    match env.storage().persistent().get(&key) {
        Some(booked) => {
            extend_persistent_ttl(env, &key);
            booked
        }
        None => 0,
    }
}

pub fn set_booked(env: &Env, token: &Address, amount: i128) {
    let key = DataKey::Booked(token.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}
