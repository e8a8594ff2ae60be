//! Property-based checks of the pricing math.
//!
//! 1. `quote` equals exact floor division.
//! 2. Swap output never reaches the output reserve and does not fall as input grows.
//! 3. `reserve_in * reserve_out` never decreases across a swap.
//! 4. Non-first deposits keep the reserve ratio up to one unit of rounding.

use proptest::prelude::*;
use soroban_sdk::Env;

use crate::{get_amount_out, optimal_deposit, product, quote};

const MAX_RESERVE: i128 = 1_000_000_000_000_000;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn quote_is_floor_division(
        amount in 1i128..MAX_RESERVE,
        reserve_a in 1i128..MAX_RESERVE,
        reserve_b in 1i128..MAX_RESERVE,
    ) {
        let env = Env::default();
        let expected = amount * reserve_b / reserve_a;
        prop_assert_eq!(quote(&env, amount, reserve_a, reserve_b), Ok(expected));
    }

    #[test]
    fn amount_out_bounded_and_monotonic(
        amount_in in 1i128..MAX_RESERVE,
        step in 0i128..MAX_RESERVE,
        reserve_in in 1i128..MAX_RESERVE,
        reserve_out in 1i128..MAX_RESERVE,
    ) {
        let env = Env::default();
        let Ok(small) = get_amount_out(&env, amount_in, reserve_in, reserve_out) else {
            panic!("positive input must price");
        };
        let Ok(large) = get_amount_out(&env, amount_in + step, reserve_in, reserve_out) else {
            panic!("positive input must price");
        };

        prop_assert!(small < reserve_out);
        prop_assert!(large < reserve_out);
        prop_assert!(large >= small);
    }

    #[test]
    fn swap_never_shrinks_product(
        amount_in in 1i128..MAX_RESERVE,
        reserve_in in 1i128..MAX_RESERVE,
        reserve_out in 1i128..MAX_RESERVE,
    ) {
        let env = Env::default();
        let Ok(amount_out) = get_amount_out(&env, amount_in, reserve_in, reserve_out) else {
            panic!("positive input must price");
        };

        let before = product(&env, reserve_in, reserve_out);
        let after = product(&env, reserve_in + amount_in, reserve_out - amount_out);
        prop_assert!(after > before);
    }

    #[test]
    fn deposit_keeps_ratio(
        desired_a in 1i128..MAX_RESERVE,
        desired_b in 1i128..MAX_RESERVE,
        reserve_a in 1i128..MAX_RESERVE,
        reserve_b in 1i128..MAX_RESERVE,
    ) {
        let env = Env::default();
        let Ok((used_a, used_b)) = optimal_deposit(&env, desired_a, desired_b, reserve_a, reserve_b) else {
            panic!("live pool must accept positive deposits");
        };

        prop_assert!(used_a <= desired_a);
        prop_assert!(used_b <= desired_b);

        // Cross-multiplied ratio drift is less than one unit of the larger reserve
        let drift = (reserve_a + used_a) * reserve_b - (reserve_b + used_b) * reserve_a;
        prop_assert!(drift.abs() < reserve_a.max(reserve_b));
    }
}
