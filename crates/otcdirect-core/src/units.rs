//! Human-unit to base-unit amount conversion.

use crate::error::ConversionError;
use alloy::primitives::U256;
use rust_decimal::Decimal;

fn out_of_range(amount: impl ToString, decimals: u8) -> ConversionError {
    ConversionError::OutOfRange {
        amount: amount.to_string(),
        decimals,
    }
}

/// 10^decimals as a Decimal, if representable.
fn scale_factor(decimals: u8) -> Option<Decimal> {
    let ten = Decimal::from(10u8);
    let mut scale = Decimal::ONE;
    for _ in 0..decimals {
        scale = scale.checked_mul(ten)?;
    }
    Some(scale)
}

/// Convert a human-unit amount into the asset's smallest unit.
///
/// Rounds toward zero: sub-unit dust is dropped, never raised to an error.
pub fn to_base_units(amount: Decimal, decimals: u8) -> Result<U256, ConversionError> {
    if amount.is_sign_negative() {
        return Err(ConversionError::Negative(amount.to_string()));
    }
    let scale = scale_factor(decimals).ok_or_else(|| out_of_range(amount, decimals))?;
    let scaled = amount
        .checked_mul(scale)
        .ok_or_else(|| out_of_range(amount, decimals))?
        .trunc()
        .normalize();
    let digits = scaled.to_string();
    let digits = digits.split('.').next().unwrap_or(&digits);
    U256::from_str_radix(digits, 10).map_err(|_| out_of_range(amount, decimals))
}

/// Convert a base-unit amount back into human units.
pub fn from_base_units(amount: U256, decimals: u8) -> Result<Decimal, ConversionError> {
    let scale = scale_factor(decimals).ok_or_else(|| out_of_range(amount, decimals))?;
    let raw = amount
        .to_string()
        .parse::<Decimal>()
        .map_err(|_| out_of_range(amount, decimals))?;
    raw.checked_div(scale)
        .ok_or_else(|| out_of_range(amount, decimals))
}
