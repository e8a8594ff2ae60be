use crate::pricing::quote;
use amm_types::AmmError;
use soroban_sdk::Env;

/// Amounts a depositor actually contributes, in the depositor's (a, b) order.
///
/// An empty pool takes the desired amounts as-is and the first depositor
/// sets the price. Otherwise the deposit is clipped on one side so that it
/// matches `reserve_a : reserve_b`, never exceeding either desired amount.
pub fn optimal_deposit(
    env: &Env,
    amount_a_desired: i128,
    amount_b_desired: i128,
    reserve_a: i128,
    reserve_b: i128,
) -> Result<(i128, i128), AmmError> {
    if reserve_a == 0 && reserve_b == 0 {
        return Ok((amount_a_desired, amount_b_desired));
    }

    let amount_b_optimal = quote(env, amount_a_desired, reserve_a, reserve_b)?;
    if amount_b_optimal <= amount_b_desired {
        return Ok((amount_a_desired, amount_b_optimal));
    }

    let amount_a_optimal = quote(env, amount_b_desired, reserve_b, reserve_a)?;
    // Holds by construction; tripping it means the quote math is wrong
    if amount_a_optimal > amount_a_desired {
        return Err(AmmError::OptimalAmountExceedsDesired);
    }

    Ok((amount_a_optimal, amount_b_desired))
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_first_deposit_taken_verbatim() {
        let env = Env::default();
        assert_eq!(optimal_deposit(&env, 500, 200, 0, 0), Ok((500, 200)));
    }

    #[test]
    fn test_b_side_clipped() {
        let env = Env::default();
        // Pool 1000:2000, offering 100 A and 500 B uses 100 A and 200 B
        assert_eq!(optimal_deposit(&env, 100, 500, 1000, 2000), Ok((100, 200)));
    }

    #[test]
    fn test_a_side_clipped() {
        let env = Env::default();
        // Pool 1000:2000, offering 100 A and 100 B uses 50 A and 100 B
        assert_eq!(optimal_deposit(&env, 100, 100, 1000, 2000), Ok((50, 100)));
    }

    #[test]
    fn test_exact_ratio_uses_everything() {
        let env = Env::default();
        assert_eq!(optimal_deposit(&env, 30, 60, 1000, 2000), Ok((30, 60)));
    }

    #[test]
    fn test_zero_desired_on_live_pool() {
        let env = Env::default();
        assert_eq!(
            optimal_deposit(&env, 0, 100, 1000, 1000),
            Err(AmmError::InsufficientAmount)
        );
        // A fits but B is zero: falls through to quoting zero B
        assert_eq!(
            optimal_deposit(&env, 100, 0, 1000, 1000),
            Err(AmmError::InsufficientAmount)
        );
    }

    #[test]
    fn test_one_sided_reserves_cannot_be_quoted() {
        let env = Env::default();
        assert_eq!(
            optimal_deposit(&env, 100, 100, 1000, 0),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn test_rounding_favours_the_pool() {
        let env = Env::default();
        // floor(10 * 3 / 7) = 4 B for 10 A
        assert_eq!(optimal_deposit(&env, 10, 100, 7, 3), Ok((10, 4)));
    }
}
