use thiserror::Error;

/// Rule violations raised by the loot engine and the settlement planner.
///
/// All variants describe a problem with the request itself, so they are reported to the user
/// unchanged and never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EconomyError {
    /// The wallet cannot cover the cost of the requested bait.
    ///
    /// Checked before the settlement transaction writes anything.
    #[error("You need {cost:.2} credits but only have {balance:.2}.")]
    InsufficientFunds {
        /// Current wallet balance
        balance: f64,
        /// Total cost of the request
        cost: f64,
    },

    /// A sale matched no sellable units after favorites and the keep-one rule were applied.
    #[error("There is nothing to sell.")]
    NothingToSell,

    /// The catalog has no item a cast with this bait grade could ever catch.
    #[error("Nothing in these waters bites on grade {grade} bait.")]
    NoEligibleItems {
        /// Bait grade that was requested
        grade: u8,
    },

    /// Bait grade outside `1..=4`.
    #[error("Bait grade must be between 1 and 4, got {0}.")]
    InvalidBait(i64),

    /// Cast or sale quantity outside the accepted range.
    #[error("Quantity must be between 1 and {max}, got {value}.")]
    InvalidQuantity {
        /// Requested quantity
        value: i64,
        /// Largest accepted quantity
        max: u32,
    },

    /// Rarity tier outside `1..=5`.
    #[error("Rarity tier must be between 1 and 5, got {0}.")]
    InvalidTier(i64),

    /// Named item or favorite does not exist for this user.
    #[error("{0}")]
    NotFound(String),
}
