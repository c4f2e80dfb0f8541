//! Proxy resolution.

use alloy::primitives::Address;
use otcdirect_core::{ProxyError, ProxyService};
use tracing::info;

/// Resolve the proxy a trade should run through.
///
/// An existing proxy is always reused. Selling a token requires one, so a
/// missing proxy is deployed before anything else happens; this blocks on
/// the setup transaction. Selling the native currency needs no proxy up
/// front: the atomic create-and-execute entry point deploys one in the same
/// call, funded by the attached value.
pub async fn resolve_proxy(
    proxies: &dyn ProxyService,
    sell_is_native: bool,
) -> Result<Option<Address>, ProxyError> {
    if let Some(proxy) = proxies.current_proxy().await? {
        return Ok(Some(proxy));
    }

    if !sell_is_native {
        let proxy = proxies.ensure_proxy().await?;
        info!(proxy = %proxy, "deployed proxy for token sell");
        return Ok(Some(proxy));
    }

    Ok(None)
}
