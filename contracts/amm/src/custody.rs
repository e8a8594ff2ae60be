use crate::storage::{get_booked, set_booked};
use amm_types::AmmError;
use soroban_sdk::{token, Address, Env};

/// Token movements in and out of the contract's own account.
///
/// Every pool shares the contract address as its custody account, so a
/// pool's share of a token is tracked through the per-token booked total:
/// the sum of that token's reserves across all pools.
pub struct Custody<'a> {
    env: &'a Env,
    vault: Address,
}

impl<'a> Custody<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self {
            env,
            vault: env.current_contract_address(),
        }
    }

    /// Move `amount` of `token` from `from` into custody.
    /// A failed transfer traps the whole invocation.
    pub fn pull(&self, token: &Address, from: &Address, amount: i128) {
        if amount > 0 {
            token::Client::new(self.env, token).transfer(from, &self.vault, &amount);
        }
    }

    /// Move `amount` of `token` out of custody to `to`
    pub fn push(&self, token: &Address, to: &Address, amount: i128) {
        if amount > 0 {
            token::Client::new(self.env, token).transfer(&self.vault, to, &amount);
        }
    }

    /// Fails with `CustodyShortfall` when the contract holds less `token` than
    /// all pools together are booked for.
    pub fn ensure_covered(&self, token: &Address) -> Result<(), AmmError> {
        let balance = token::Client::new(self.env, token).balance(&self.vault);
        if balance < get_booked(self.env, token) {
            return Err(AmmError::CustodyShortfall);
        }
        Ok(())
    }

    /// Real balance of `token` available to a pool currently booked at `own_reserve`:
    /// the contract's balance minus what every other pool is booked for.
    pub fn held_balance(&self, token: &Address, own_reserve: i128) -> Result<i128, AmmError> {
        let balance = token::Client::new(self.env, token).balance(&self.vault);
        let booked_elsewhere = get_booked(self.env, token)
            .checked_sub(own_reserve)
            .ok_or(AmmError::Overflow)?;

        let held = balance
            .checked_sub(booked_elsewhere)
            .ok_or(AmmError::Overflow)?;
        if held < 0 {
            return Err(AmmError::CustodyShortfall);
        }

        Ok(held)
    }
}

/// Replace one pool's contribution to `token`'s booked total
pub fn rebook(env: &Env, token: &Address, old_reserve: i128, new_reserve: i128) -> Result<(), AmmError> {
    let booked = get_booked(env, token)
        .checked_sub(old_reserve)
        .and_then(|rest| rest.checked_add(new_reserve))
        .ok_or(AmmError::Overflow)?;

    set_booked(env, token, booked);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Amm;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{token, Address, Env};

    fn create_token<'a>(env: &Env) -> token::StellarAssetClient<'a> {
        let admin = Address::generate(env);
        let address = env.register_stellar_asset_contract_v2(admin).address();
        token::StellarAssetClient::new(env, &address)
    }

    #[test]
    fn test_rebook_accumulates_across_pools() {
        let env = Env::default();
        let contract_id = env.register(Amm, ());
        let token = Address::generate(&env);

        env.as_contract(&contract_id, || {
            rebook(&env, &token, 0, 300).unwrap();
            rebook(&env, &token, 0, 200).unwrap();
            assert_eq!(get_booked(&env, &token), 500);

            // First pool moves from 300 to 250
            rebook(&env, &token, 300, 250).unwrap();
            assert_eq!(get_booked(&env, &token), 450);
        });
    }

    #[test]
    fn test_held_balance_excludes_other_pools() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register(Amm, ());
        let sac = create_token(&env);

        // Two pools booked at 300 and 200, plus 40 unattributed
        sac.mint(&contract_id, &540);

        env.as_contract(&contract_id, || {
            rebook(&env, &sac.address, 0, 300).unwrap();
            rebook(&env, &sac.address, 0, 200).unwrap();

            let custody = Custody::new(&env);
            assert_eq!(custody.held_balance(&sac.address, 300), Ok(340));
            assert_eq!(custody.held_balance(&sac.address, 200), Ok(240));
        });
    }

    #[test]
    fn test_shortfall_detected_before_any_transfer() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register(Amm, ());
        let sac = create_token(&env);

        sac.mint(&contract_id, &100);

        env.as_contract(&contract_id, || {
            rebook(&env, &sac.address, 0, 100).unwrap();
            let custody = Custody::new(&env);
            assert_eq!(custody.ensure_covered(&sac.address), Ok(()));

            // A second pool booked at 50 against the same 100
            rebook(&env, &sac.address, 0, 50).unwrap();
            assert_eq!(
                custody.ensure_covered(&sac.address),
                Err(AmmError::CustodyShortfall)
            );
        });
    }

    #[test]
    fn test_held_balance_below_other_pools_is_shortfall() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register(Amm, ());
        let sac = create_token(&env);

        sac.mint(&contract_id, &100);

        env.as_contract(&contract_id, || {
            rebook(&env, &sac.address, 0, 120).unwrap();
            rebook(&env, &sac.address, 0, 30).unwrap();

            let custody = Custody::new(&env);
            // The other pool alone claims 120 of the 100 held
            assert_eq!(
                custody.held_balance(&sac.address, 30),
                Err(AmmError::CustodyShortfall)
            );
        });
    }

    #[test]
    fn test_pull_and_push_move_balances() {
        let env = Env::default();
        env.mock_all_auths_allowing_non_root_auth();
        let contract_id = env.register(Amm, ());
        let sac = create_token(&env);
        let user = Address::generate(&env);
        let balances = token::Client::new(&env, &sac.address);

        sac.mint(&user, &1_000);

        env.as_contract(&contract_id, || {
            let custody = Custody::new(&env);
            custody.pull(&sac.address, &user, 600);
            custody.push(&sac.address, &user, 100);
            // Zero amounts are skipped
            custody.pull(&sac.address, &user, 0);
        });

        assert_eq!(balances.balance(&user), 500);
        assert_eq!(balances.balance(&contract_id), 500);
    }
}
