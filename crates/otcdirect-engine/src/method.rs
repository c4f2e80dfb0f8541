//! Entry-point selection.

use otcdirect_core::{CallMethod, Side};

/// Select the exchange entry point for a trade.
///
/// First match wins:
/// 1. buying the native currency uses the buy-native variant;
/// 2. paying native without a proxy uses the atomic create-and-execute
///    variant, since the attached value can fund the trade in the same
///    transaction that deploys the proxy;
/// 3. paying native with a proxy uses the pay-native variant;
/// 4. anything else is the plain token-to-token call through the proxy.
pub fn select_method(
    side: Side,
    sell_is_native: bool,
    buy_is_native: bool,
    has_proxy: bool,
) -> CallMethod {
    match side {
        Side::Sell => {
            if buy_is_native {
                CallMethod::SellAllAmountBuyNative
            } else if sell_is_native && !has_proxy {
                CallMethod::CreateAndSellAllAmountPayNative
            } else if sell_is_native {
                CallMethod::SellAllAmountPayNative
            } else {
                CallMethod::SellAllAmount
            }
        }
        Side::Buy => {
            if buy_is_native {
                CallMethod::BuyAllAmountBuyNative
            } else if sell_is_native && !has_proxy {
                CallMethod::CreateAndBuyAllAmountPayNative
            } else if sell_is_native {
                CallMethod::BuyAllAmountPayNative
            } else {
                CallMethod::BuyAllAmount
            }
        }
    }
}
