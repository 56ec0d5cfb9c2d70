//! Fixed-point asset amounts.
//!
//! Amounts are signed 64-bit integers scaled by 10^8 (the maximum asset
//! precision). The smallest unit is 1 raw.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// Raw units per whole coin.
pub const RAW_PER_COIN: i64 = 100_000_000;

/// A fixed-point amount with eight fractional decimal digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fixed64(i64);

impl Fixed64 {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Whole coins, e.g. `Fixed64::from_coins(3)` is 3.00000000.
    pub fn from_coins(coins: i64) -> Option<Self> {
        coins.checked_mul(RAW_PER_COIN).map(Self)
    }

    /// The underlying integer value in raw units.
    pub fn int_value(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl Add for Fixed64 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Fixed64 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Fixed64 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Fixed64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = RAW_PER_COIN as u64;
        write!(f, "{}{}.{:08}", sign, abs / per, abs % per)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_eight_decimals() {
        assert_eq!(Fixed64::new(150_000_000).to_string(), "1.50000000");
        assert_eq!(Fixed64::new(-1).to_string(), "-0.00000001");
        assert_eq!(Fixed64::ZERO.to_string(), "0.00000000");
    }

    #[test]
    fn from_coins_scales() {
        assert_eq!(Fixed64::from_coins(3).unwrap().int_value(), 300_000_000);
        assert!(Fixed64::from_coins(i64::MAX).is_none());
    }

    #[test]
    fn sum_of_amounts() {
        let total: Fixed64 = [1, 2, 3].into_iter().map(Fixed64::new).sum();
        assert_eq!(total, Fixed64::new(6));
    }

    #[test]
    fn checked_add_overflow() {
        assert!(Fixed64::new(i64::MAX).checked_add(Fixed64::new(1)).is_none());
    }
}
