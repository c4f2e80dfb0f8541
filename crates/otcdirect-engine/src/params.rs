//! Positional-argument assembly per entry point.

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, U256},
};
use otcdirect_core::CallMethod;

/// System contracts an argument list can reference.
#[derive(Debug, Clone, Copy)]
pub struct CallTargets {
    /// The matching-market contract.
    pub exchange: Address,
    /// The proxy registry, which takes the exchange slot's place in atomic
    /// create-and-execute calls.
    pub proxy_registry: Address,
}

/// Build the ordered positional arguments for `method`.
///
/// `fixed_addr`/`fixed_base` is the side whose amount the request fixes
/// (pay for sells, buy for buys), `counter_addr` the opposite side, and
/// `limit_base` the slippage-protected bound. The native currency never
/// appears here directly: callers resolve it to the wrapped-native address
/// first, and pay-native shapes carry the pay amount as attached value
/// rather than as an argument.
pub fn build_args(
    method: CallMethod,
    targets: CallTargets,
    fixed_addr: Address,
    fixed_base: U256,
    counter_addr: Address,
    limit_base: U256,
) -> Vec<DynSolValue> {
    match method {
        // full five-argument form
        CallMethod::SellAllAmount
        | CallMethod::SellAllAmountBuyNative
        | CallMethod::BuyAllAmount
        | CallMethod::BuyAllAmountBuyNative => vec![
            DynSolValue::Address(targets.exchange),
            DynSolValue::Address(fixed_addr),
            DynSolValue::Uint(fixed_base, 256),
            DynSolValue::Address(counter_addr),
            DynSolValue::Uint(limit_base, 256),
        ],
        // pay amount travels as attached value
        CallMethod::SellAllAmountPayNative => vec![
            DynSolValue::Address(targets.exchange),
            DynSolValue::Address(fixed_addr),
            DynSolValue::Address(counter_addr),
            DynSolValue::Uint(limit_base, 256),
        ],
        // the attached value itself is the pay limit
        CallMethod::BuyAllAmountPayNative => vec![
            DynSolValue::Address(targets.exchange),
            DynSolValue::Address(fixed_addr),
            DynSolValue::Uint(fixed_base, 256),
            DynSolValue::Address(counter_addr),
        ],
        // proxy registry replaces the exchange slot
        CallMethod::CreateAndSellAllAmountPayNative => vec![
            DynSolValue::Address(targets.proxy_registry),
            DynSolValue::Address(targets.exchange),
            DynSolValue::Address(counter_addr),
            DynSolValue::Uint(limit_base, 256),
        ],
        CallMethod::CreateAndBuyAllAmountPayNative => vec![
            DynSolValue::Address(targets.proxy_registry),
            DynSolValue::Address(targets.exchange),
            DynSolValue::Address(fixed_addr),
            DynSolValue::Uint(fixed_base, 256),
        ],
    }
}
