use crate::events::TokenRegistered;
use crate::storage::{is_registered, set_registered};
use amm_types::AmmError;
use soroban_sdk::{contractclient, log, token, Address, Env};

// Optional extension some token contracts expose; SEP-41 does not require it.
#[allow(unused)]
#[contractclient(name = "SupplyClient")]
pub trait SupplyInterface {
    fn total_supply(env: Env) -> i128;
}

/// Admit `token` to the registry. Registration is permanent.
pub fn register(env: &Env, token: &Address) -> Result<(), AmmError> {
    if is_registered(env, token) {
        return Err(AmmError::AlreadyRegistered);
    }

    probe_asset(env, token)?;

    set_registered(env, token);
    TokenRegistered {
        token: token.clone(),
    }
    .publish(env);
    log!(env, "token registered", token.clone());

    Ok(())
}

/// A token is acceptable if it reports a positive total supply, or, when it
/// has no `total_supply`, if it at least answers the SEP-41 `decimals` call.
fn probe_asset(env: &Env, token: &Address) -> Result<(), AmmError> {
    match SupplyClient::new(env, token).try_total_supply() {
        Ok(Ok(supply)) if supply > 0 => Ok(()),
        Ok(_) => Err(AmmError::InvalidAsset),
        Err(_) => match token::Client::new(env, token).try_decimals() {
            Ok(Ok(_)) => Ok(()),
            _ => Err(AmmError::InvalidAsset),
        },
    }
}
