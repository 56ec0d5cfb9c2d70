//! Asset amount precision.

use sidechain_types::Fixed64;

/// Whether `amount` is exactly representable with `precision` fractional
/// digits, given that raw amounts carry `max_precision` digits.
///
/// Fails closed: a `precision` above `max_precision` is never precise.
pub fn check_amount_precise(amount: Fixed64, precision: u8, max_precision: u8) -> bool {
    let Some(exp) = max_precision.checked_sub(precision) else {
        return false;
    };
    match 10i64.checked_pow(u32::from(exp)) {
        Some(unit) => amount.int_value() % unit == 0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_coin_at_zero_precision() {
        assert!(check_amount_precise(Fixed64::new(100_000_000), 0, 8));
    }

    #[test]
    fn fraction_at_zero_precision_rejected() {
        assert!(!check_amount_precise(Fixed64::new(150_000_000), 0, 8));
    }

    #[test]
    fn full_precision_accepts_anything() {
        assert!(check_amount_precise(Fixed64::new(1), 8, 8));
        assert!(check_amount_precise(Fixed64::new(123_456_789), 8, 8));
    }

    #[test]
    fn intermediate_precision() {
        // two decimals: multiples of 10^6 raw
        assert!(check_amount_precise(Fixed64::new(1_230_000_000), 2, 8));
        assert!(!check_amount_precise(Fixed64::new(1_234_000_000), 2, 8));
    }

    #[test]
    fn precision_above_max_fails_closed() {
        assert!(!check_amount_precise(Fixed64::new(0), 9, 8));
    }

    #[test]
    fn zero_amount_is_precise() {
        assert!(check_amount_precise(Fixed64::ZERO, 0, 8));
    }
}
