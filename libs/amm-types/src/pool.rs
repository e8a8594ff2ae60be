use soroban_sdk::{contracttype, Address};

/// A constant-product pool for one canonical token pair
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    /// Lower token address
    pub token0: Address,
    /// Higher token address
    pub token1: Address,
    /// Amount of token0 held for this pool
    pub reserve0: i128,
    /// Amount of token1 held for this pool
    pub reserve1: i128,
}

impl Pool {
    /// Empty pool for an already sorted pair
    pub fn new(token0: Address, token1: Address) -> Self {
        Self {
            token0,
            token1,
            reserve0: 0,
            reserve1: 0,
        }
    }

    /// True until the first deposit lands
    pub fn is_empty(&self) -> bool {
        self.reserve0 == 0 && self.reserve1 == 0
    }

    pub fn contains(&self, token: &Address) -> bool {
        *token == self.token0 || *token == self.token1
    }

    /// Reserves oriented around `token`: (reserve of token, reserve of the other side)
    pub fn reserves_for(&self, token: &Address) -> (i128, i128) {
        debug_assert!(self.contains(token));
        if *token == self.token0 {
            (self.reserve0, self.reserve1)
        } else {
            (self.reserve1, self.reserve0)
        }
    }

    /// Reorders an (a, b) amount pair keyed by `token_a` into (token0, token1) order
    pub fn to_canonical(&self, token_a: &Address, amount_a: i128, amount_b: i128) -> (i128, i128) {
        debug_assert!(self.contains(token_a));
        if *token_a == self.token0 {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        }
    }
}

/// Canonical ordering of a token pair.
///
/// Uses `Ord for Address`, i.e. the host's `ScAddress` comparison: address
/// kind first, then the 32-byte id. `{a, b}` and `{b, a}` always produce the
/// same tuple.
pub fn sort_tokens(token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}
