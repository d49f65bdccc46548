//! Value objects for the order domain.

use serde::{Deserialize, Serialize};

/// Monetary amount in whole euros.
///
/// Serialized as a bare integer so it matches the `costEur` wire field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a new Money amount from euros.
    pub fn from_eur(eur: i64) -> Self {
        Self(eur)
    }

    /// Returns the amount in euros.
    pub fn eur(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            write!(f, "-€{}", self.0.unsigned_abs())
        } else {
            write!(f, "€{}", self.0)
        }
    }
}

/// Sum of item costs, in whole euros.
///
/// Held as `i128`: a sum of at most `u64::MAX` costs, each at most
/// `i64::MAX`, stays below `i128::MAX`, so accumulating stored costs cannot
/// overflow. Serialized as a bare integer (`totalAmountEur`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TotalAmount(i128);

impl TotalAmount {
    /// Creates a total from euros.
    pub fn from_eur(eur: i128) -> Self {
        Self(eur)
    }

    /// Returns the total in euros.
    pub fn eur(&self) -> i128 {
        self.0
    }

    /// Adds one item cost to the total.
    pub fn add_cost(&mut self, cost: Money) {
        self.0 += i128::from(cost.eur());
    }
}
