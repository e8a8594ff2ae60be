#![no_std]

mod custody;
mod events;
mod invariants;
mod liquidity;
mod lock;
mod pairs;
mod registry;
mod storage;
mod swap;

use amm_types::{AmmError, Pool};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};
use storage::extend_instance_ttl;

contractmeta!(
    key = "Description",
    val = "Constant-product AMM: token registry, pair registry and x*y=k swaps"
);

#[contract]
pub struct Amm;

#[contractimpl]
impl Amm {
    // === Asset registry ===

    /// Admit a token so it can be paired
    pub fn register_token(env: Env, token: Address) -> Result<(), AmmError> {
        extend_instance_ttl(&env);
        registry::register(&env, &token)
    }

    pub fn is_registered(env: Env, token: Address) -> bool {
        extend_instance_ttl(&env);
        storage::is_registered(&env, &token)
    }

    // === Pool registry ===

    /// Create the pool for a pair of registered tokens.
    /// Argument order does not matter; the stored pool is sorted.
    pub fn create_pair(env: Env, token_a: Address, token_b: Address) -> Result<Pool, AmmError> {
        extend_instance_ttl(&env);
        pairs::create(&env, &token_a, &token_b)
    }

    /// Get the pool for a pair in either order
    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Result<Pool, AmmError> {
        extend_instance_ttl(&env);
        pairs::lookup(&env, &token_a, &token_b)
    }

    /// Reserves of a pair, in argument order
    pub fn get_reserves(
        env: Env,
        token_a: Address,
        token_b: Address,
    ) -> Result<(i128, i128), AmmError> {
        extend_instance_ttl(&env);
        let pool = pairs::lookup(&env, &token_a, &token_b)?;
        Ok(pool.reserves_for(&token_a))
    }

    /// Get total number of pools created
    pub fn all_pairs_length(env: Env) -> u32 {
        extend_instance_ttl(&env);
        pairs::pair_count(&env)
    }

    /// Get pool at creation index
    pub fn get_pair_at(env: Env, index: u32) -> Option<Pool> {
        extend_instance_ttl(&env);
        pairs::pair_at(&env, index)
    }

    /// Get pools with pagination
    /// Returns up to `limit` pools starting from `start_index`
    /// Maximum limit is 50 to stay within Soroban's read entry limits
    pub fn get_pairs_paginated(env: Env, start_index: u32, limit: u32) -> Vec<Pool> {
        extend_instance_ttl(&env);
        pairs::paginated(&env, start_index, limit)
    }

    // === Reserve invariant engine ===

    /// Add liquidity at the pool's current ratio
    ///
    /// # Returns
    /// (amount_a, amount_b) - Amounts taken from `sender`, in argument order
    pub fn add_liquidity(
        env: Env,
        sender: Address,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
    ) -> Result<(i128, i128), AmmError> {
        sender.require_auth();
        extend_instance_ttl(&env);
        liquidity::add_liquidity(
            &env,
            &sender,
            &token_a,
            &token_b,
            amount_a_desired,
            amount_b_desired,
        )
    }

    /// Swap an exact amount of `token_in` for as much `token_out` as the pool pays
    ///
    /// # Returns
    /// Amount of `token_out` sent to `sender`
    pub fn swap(
        env: Env,
        sender: Address,
        amount_in: i128,
        token_in: Address,
        token_out: Address,
    ) -> Result<i128, AmmError> {
        sender.require_auth();
        extend_instance_ttl(&env);
        swap::execute_swap(&env, &sender, amount_in, &token_in, &token_out)
    }

    // === Pricing views ===

    /// floor(amount_a * reserve_b / reserve_a)
    pub fn quote(env: Env, amount_a: i128, reserve_a: i128, reserve_b: i128) -> Result<i128, AmmError> {
        amm_math::quote(&env, amount_a, reserve_a, reserve_b)
    }

    /// Output an exact-input swap would pay against the given reserves
    pub fn get_amount_out(
        env: Env,
        amount_in: i128,
        reserve_in: i128,
        reserve_out: i128,
    ) -> Result<i128, AmmError> {
        amm_math::get_amount_out(&env, amount_in, reserve_in, reserve_out)
    }
}
