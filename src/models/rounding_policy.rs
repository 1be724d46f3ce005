//! Rounding policy for converting fractional hours to billable hours.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The rule used to turn a fractional-hour duration into whole billable hours.
///
/// Every variant except [`RoundingPolicy::Exact`] can be installed on a
/// biller. `Exact` means "no rounding permitted", which cannot hold for
/// sub-intervals with leftover minutes, so it is rejected at configuration time.
///
/// # Example
///
/// ```
/// use sitter_pay_engine::models::RoundingPolicy;
///
/// assert!(RoundingPolicy::HalfEven.strategy().is_ok());
/// assert!(RoundingPolicy::Exact.strategy().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Round toward zero (truncate).
    #[default]
    Down,
    /// Round away from zero.
    Up,
    /// Round to nearest, ties away from zero.
    HalfUp,
    /// Round to nearest, ties toward zero.
    HalfDown,
    /// Round to nearest, ties to the even neighbour.
    HalfEven,
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward negative infinity.
    Floor,
    /// No rounding permitted. Never accepted by a biller.
    Exact,
}

impl RoundingPolicy {
    /// All policy variants, including the rejected [`RoundingPolicy::Exact`].
    pub const ALL: [RoundingPolicy; 8] = [
        RoundingPolicy::Down,
        RoundingPolicy::Up,
        RoundingPolicy::HalfUp,
        RoundingPolicy::HalfDown,
        RoundingPolicy::HalfEven,
        RoundingPolicy::Ceiling,
        RoundingPolicy::Floor,
        RoundingPolicy::Exact,
    ];

    /// Returns the decimal rounding strategy implementing this policy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for [`RoundingPolicy::Exact`].
    pub fn strategy(self) -> EngineResult<RoundingStrategy> {
        match self {
            RoundingPolicy::Down => Ok(RoundingStrategy::ToZero),
            RoundingPolicy::Up => Ok(RoundingStrategy::AwayFromZero),
            RoundingPolicy::HalfUp => Ok(RoundingStrategy::MidpointAwayFromZero),
            RoundingPolicy::HalfDown => Ok(RoundingStrategy::MidpointTowardZero),
            RoundingPolicy::HalfEven => Ok(RoundingStrategy::MidpointNearestEven),
            RoundingPolicy::Ceiling => Ok(RoundingStrategy::ToPositiveInfinity),
            RoundingPolicy::Floor => Ok(RoundingStrategy::ToNegativeInfinity),
            RoundingPolicy::Exact => Err(EngineError::InvalidConfiguration {
                message: format!("rounding policy '{}' is not supported", self),
            }),
        }
    }
}

impl std::fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingPolicy::Down => write!(f, "down"),
            RoundingPolicy::Up => write!(f, "up"),
            RoundingPolicy::HalfUp => write!(f, "half_up"),
            RoundingPolicy::HalfDown => write!(f, "half_down"),
            RoundingPolicy::HalfEven => write!(f, "half_even"),
            RoundingPolicy::Ceiling => write!(f, "ceiling"),
            RoundingPolicy::Floor => write!(f, "floor"),
            RoundingPolicy::Exact => write!(f, "exact"),
        }
    }
}
