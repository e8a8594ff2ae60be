use soroban_sdk::{contractevent, Address};

/// A token was admitted to the registry
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenRegistered {
    #[topic]
    pub token: Address,
}

/// A pool was created for a sorted pair
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairCreated {
    #[topic]
    pub token0: Address,
    #[topic]
    pub token1: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Swap {
    #[topic]
    pub sender: Address,
    pub amount_in: i128,
    pub amount_out: i128,
    pub token_in: Address,
    pub token_out: Address,
}
