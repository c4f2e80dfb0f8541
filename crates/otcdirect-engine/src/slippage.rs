//! Slippage bounds.
//!
//! Limits are computed in human units; the truncation toward the contract's
//! integer unit happens at base-unit conversion.

use rust_decimal::Decimal;

/// Lowest receive amount the caller will accept for a sell.
///
/// A zero tolerance passes the raw quote through, leaving no slack against
/// quote staleness between quoting and execution.
pub fn min_acceptable_receive(quote: Decimal, tolerance: Decimal) -> Decimal {
    quote * (Decimal::ONE - tolerance)
}

/// Highest pay amount the caller will accept for a buy.
pub fn max_acceptable_pay(quote: Decimal, tolerance: Decimal) -> Decimal {
    quote * (Decimal::ONE + tolerance)
}
