use soroban_sdk::contracterror;

/// Every way an AMM operation can be refused.
///
/// Codes 1-10 are precondition violations detected before any state is
/// touched. Codes 11-15 signal a broken internal invariant or an
/// environment the engine refuses to operate in; they are raised with
/// `panic_with_error!` where noted and must never fire in a healthy pool.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AmmError {
    /// Token is already in the registry
    AlreadyRegistered = 1,
    /// Token contract failed the supply / interface probe
    InvalidAsset = 2,
    /// Both sides of a pair are the same token
    IdenticalAssets = 3,
    /// One side of a pair was never registered
    AssetNotRegistered = 4,
    /// A pool already exists for the canonical pair
    PairAlreadyExists = 5,
    /// No pool exists for the canonical pair
    PairNotFound = 6,
    /// Quote or deposit amount is zero or negative
    InsufficientAmount = 7,
    /// A reserve needed for quoting is empty
    InsufficientLiquidity = 8,
    /// Swap input is zero or negative
    InsufficientInputAmount = 9,
    /// Swap would pay out nothing
    InsufficientOutputAmount = 10,
    /// Ratio-preserving deposit produced more than the depositor offered
    OptimalAmountExceedsDesired = 11,
    /// reserve0 * reserve1 decreased across a swap
    ConstantProductViolated = 12,
    /// Contract holds less of a token than the pools are booked for
    CustodyShortfall = 13,
    /// Arithmetic result does not fit an i128 amount
    Overflow = 14,
    /// Pool is already inside a state-changing operation
    PoolLocked = 15,
}
