use crate::error::{AllowanceError, ProxyError, QuoteError, RegistryError, SubmitError};
use crate::types::{Asset, OrderId, OrderTicket};
use alloy::primitives::{Address, U256};
use async_trait::async_trait;

/// Per-caller proxy contract lookup and deployment
#[async_trait]
pub trait ProxyService: Send + Sync {
    /// The caller's deployed proxy, if any. Looked up fresh on every order.
    async fn current_proxy(&self) -> Result<Option<Address>, ProxyError>;

    /// Deploy a proxy for the caller, blocking until it exists.
    ///
    /// May submit a setup transaction of its own.
    async fn ensure_proxy(&self) -> Result<Address, ProxyError>;
}

/// Token and system-contract address registry
#[async_trait]
pub trait TokenRegistry: Send + Sync {
    /// Contract address for an asset.
    ///
    /// [`Asset::Native`] resolves to the wrapped-native token; the native
    /// currency is never an address of its own.
    async fn address_of(&self, asset: &Asset) -> Result<Address, RegistryError>;

    /// Decimal places of the asset's smallest indivisible unit.
    async fn decimals_of(&self, asset: &Asset) -> Result<u8, RegistryError>;

    /// The exchange (matching market) contract.
    async fn exchange(&self) -> Result<Address, RegistryError>;

    /// The proxy registry contract used by atomic create-and-execute calls.
    async fn proxy_registry(&self) -> Result<Address, RegistryError>;
}

/// Allowance precondition management
#[async_trait]
pub trait AllowanceService: Send + Sync {
    /// Make sure `proxy` may pull `asset` from the caller before an order
    /// is submitted.
    async fn require_allowance(&self, asset: &Asset, proxy: Address)
        -> Result<(), AllowanceError>;
}

/// Read-only quote queries against the exchange, in base units both ways
#[async_trait]
pub trait ExchangeQuotes: Send + Sync {
    /// How much of `buy` the book yields for a fixed `pay_amount` of `pay`.
    async fn buy_amount(
        &self,
        buy: Address,
        pay: Address,
        pay_amount: U256,
    ) -> Result<U256, QuoteError>;

    /// How much of `pay` the book charges for a fixed `buy_amount` of `buy`.
    async fn pay_amount(
        &self,
        pay: Address,
        buy: Address,
        buy_amount: U256,
    ) -> Result<U256, QuoteError>;
}

/// Downstream order submission and lifecycle tracking
#[async_trait]
pub trait TransactionManager: Send + Sync {
    /// Submit a finished order and return its tracking id.
    async fn submit_order(&self, order: OrderTicket) -> Result<OrderId, SubmitError>;
}
