use crate::error::ConfigError;
use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, U256},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the transaction manager assigns to a submitted order.
pub type OrderId = String;

/// A fungible asset the engine can trade.
///
/// The native currency has no contract of its own; wherever a call requires
/// an address it is represented by the wrapped-native token instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// The chain's base currency.
    Native,
    /// A contract-backed token, identified by its registry symbol.
    Token(String),
}

impl Asset {
    pub fn token(symbol: impl Into<String>) -> Self {
        Asset::Token(symbol.into())
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Native => write!(f, "native"),
            Asset::Token(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// Which amount a trade request fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Fixed give amount: sell all of it for as much as the book yields.
    Sell,
    /// Fixed receive amount: buy exactly it, paying as little as possible.
    Buy,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Sell => write!(f, "sell"),
            Side::Buy => write!(f, "buy"),
        }
    }
}

/// The concrete exchange entry points the engine can select.
///
/// Eight methods across the two sides, five distinct argument shapes; see
/// [`CallMethod::name`] for the on-chain method names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallMethod {
    SellAllAmount,
    SellAllAmountBuyNative,
    SellAllAmountPayNative,
    CreateAndSellAllAmountPayNative,
    BuyAllAmount,
    BuyAllAmountBuyNative,
    BuyAllAmountPayNative,
    CreateAndBuyAllAmountPayNative,
}

impl CallMethod {
    /// On-chain method name.
    pub fn name(&self) -> &'static str {
        match self {
            CallMethod::SellAllAmount => "sellAllAmount",
            CallMethod::SellAllAmountBuyNative => "sellAllAmountBuyNative",
            CallMethod::SellAllAmountPayNative => "sellAllAmountPayNative",
            CallMethod::CreateAndSellAllAmountPayNative => "createAndSellAllAmountPayNative",
            CallMethod::BuyAllAmount => "buyAllAmount",
            CallMethod::BuyAllAmountBuyNative => "buyAllAmountBuyNative",
            CallMethod::BuyAllAmountPayNative => "buyAllAmountPayNative",
            CallMethod::CreateAndBuyAllAmountPayNative => "createAndBuyAllAmountPayNative",
        }
    }

    /// The trade side this entry point serves.
    pub fn side(&self) -> Side {
        match self {
            CallMethod::SellAllAmount
            | CallMethod::SellAllAmountBuyNative
            | CallMethod::SellAllAmountPayNative
            | CallMethod::CreateAndSellAllAmountPayNative => Side::Sell,
            CallMethod::BuyAllAmount
            | CallMethod::BuyAllAmountBuyNative
            | CallMethod::BuyAllAmountPayNative
            | CallMethod::CreateAndBuyAllAmountPayNative => Side::Buy,
        }
    }

    /// Whether the caller pays in native currency attached to the call.
    pub fn pays_native(&self) -> bool {
        matches!(
            self,
            CallMethod::SellAllAmountPayNative
                | CallMethod::CreateAndSellAllAmountPayNative
                | CallMethod::BuyAllAmountPayNative
                | CallMethod::CreateAndBuyAllAmountPayNative
        )
    }

    /// Whether the caller receives native currency, settled as wrapped-native.
    pub fn buys_native(&self) -> bool {
        matches!(
            self,
            CallMethod::SellAllAmountBuyNative | CallMethod::BuyAllAmountBuyNative
        )
    }

    /// Whether this entry point deploys the caller's proxy in the same
    /// transaction instead of routing through a pre-existing one.
    pub fn is_atomic_create(&self) -> bool {
        matches!(
            self,
            CallMethod::CreateAndSellAllAmountPayNative
                | CallMethod::CreateAndBuyAllAmountPayNative
        )
    }
}

impl fmt::Display for CallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A point-in-time exchange quote for a fixed counter amount.
///
/// Computed once per order construction and threaded through to the
/// slippage calculation; never cached across constructions.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Quoted amount in human units.
    pub amount: Decimal,
    /// The same amount in the asset's smallest indivisible unit.
    pub base_amount: U256,
    /// When the exchange answered.
    pub quoted_at: DateTime<Utc>,
}

/// Native-value attachment and routing for a built call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxOptions {
    /// Native value to attach, in base units.
    pub attached_value: Option<U256>,
    /// Whether the call must be executed through the caller's proxy.
    pub route_through_proxy: bool,
}

/// A fully-specified contract call, ready for submission.
///
/// Built in one pass per request and never mutated afterwards; construction
/// failure at any step means no descriptor is produced at all.
#[derive(Debug, Clone)]
pub struct CallDescriptor {
    /// Selected entry-point variant.
    pub method: CallMethod,
    /// Positional arguments in the exact order the entry point expects.
    pub args: Vec<DynSolValue>,
    /// Native value to attach, if any.
    pub attached_value: Option<U256>,
    /// Whether submission must route the call through the caller's proxy.
    pub route_through_proxy: bool,
    /// Token contract the caller ends up holding (wrapped-native when the
    /// bought side is the native currency).
    pub settlement: Address,
}

/// The order value handed to the transaction manager.
#[derive(Debug, Clone)]
pub struct OrderTicket {
    pub side: Side,
    /// Resolved exchange contract.
    pub exchange: Address,
    pub call: CallDescriptor,
    pub created_at: DateTime<Utc>,
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum acceptable adverse price movement, as a fraction in (0, 1).
    pub slippage_tolerance: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            slippage_tolerance: Decimal::new(2, 2), // 2%
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tolerance(self.slippage_tolerance)
    }
}

/// Check that a slippage fraction lies strictly inside (0, 1).
pub fn validate_tolerance(tolerance: Decimal) -> Result<(), ConfigError> {
    if tolerance <= Decimal::ZERO || tolerance >= Decimal::ONE {
        return Err(ConfigError::InvalidValue {
            field: "slippage_tolerance".to_string(),
            message: format!("{} is outside (0, 1)", tolerance),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn method_names_match_entry_points() {
        assert_eq!(CallMethod::SellAllAmount.name(), "sellAllAmount");
        assert_eq!(
            CallMethod::CreateAndSellAllAmountPayNative.name(),
            "createAndSellAllAmountPayNative"
        );
        assert_eq!(CallMethod::BuyAllAmountPayNative.name(), "buyAllAmountPayNative");
        assert_eq!(CallMethod::BuyAllAmountBuyNative.name(), "buyAllAmountBuyNative");
    }

    #[test]
    fn atomic_create_variants_are_pay_native() {
        assert!(CallMethod::CreateAndSellAllAmountPayNative.pays_native());
        assert!(CallMethod::CreateAndBuyAllAmountPayNative.pays_native());
        assert!(CallMethod::CreateAndSellAllAmountPayNative.is_atomic_create());
        assert!(!CallMethod::SellAllAmountPayNative.is_atomic_create());
    }

    #[test]
    fn default_tolerance_is_two_percent() {
        let config = EngineConfig::default();
        assert_eq!(config.slippage_tolerance, dec!(0.02));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn tolerance_bounds_are_exclusive() {
        assert!(validate_tolerance(dec!(0)).is_err());
        assert!(validate_tolerance(dec!(1)).is_err());
        assert!(validate_tolerance(dec!(-0.1)).is_err());
        assert!(validate_tolerance(dec!(1.5)).is_err());
        assert!(validate_tolerance(dec!(0.001)).is_ok());
        assert!(validate_tolerance(dec!(0.999)).is_ok());
    }
}
