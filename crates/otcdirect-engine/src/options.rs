//! Native-value attachment and proxy routing.

use alloy::primitives::U256;
use otcdirect_core::{CallMethod, Side, TxOptions};

/// Decide what native value a call attaches and whether it runs through
/// the caller's proxy.
///
/// Pay-native sells attach `fixed_base`, the exact native amount being
/// sold. Pay-native buys cannot know the exact pay amount up front and
/// attach `limit_base`, the worst-case pay. Every other variant attaches
/// nothing. Atomic create-and-execute calls deploy the proxy themselves
/// and are not pre-routed.
pub fn build_options(method: CallMethod, fixed_base: U256, limit_base: U256) -> TxOptions {
    let attached_value = if method.pays_native() {
        match method.side() {
            Side::Sell => Some(fixed_base),
            Side::Buy => Some(limit_base),
        }
    } else {
        None
    };

    TxOptions {
        attached_value,
        route_through_proxy: !method.is_atomic_create(),
    }
}
