//! Order construction facade.

use std::sync::Arc;

use alloy::primitives::Address;
use chrono::Utc;
use otcdirect_core::{
    to_base_units, validate_tolerance, AllowanceService, Asset, CallDescriptor, ConfigError,
    EngineConfig, ExchangeQuotes, OrderError, OrderId, OrderTicket, ProxyService, Side,
    TokenRegistry, TransactionManager,
};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::method::select_method;
use crate::options::build_options;
use crate::params::{build_args, CallTargets};
use crate::proxy::resolve_proxy;
use crate::quotes::QuoteResolver;
use crate::slippage::{max_acceptable_pay, min_acceptable_receive};

/// Turns trade intents into submitted exchange orders.
///
/// One instance serves concurrent requests. The only shared mutable state
/// is the slippage tolerance, which each construction snapshots exactly
/// once before doing anything else; an update mid-flight never splits a
/// single construction across two tolerances.
pub struct OrderEngine {
    registry: Arc<dyn TokenRegistry>,
    proxies: Arc<dyn ProxyService>,
    allowances: Arc<dyn AllowanceService>,
    exchange: Arc<dyn ExchangeQuotes>,
    transactions: Arc<dyn TransactionManager>,
    config: RwLock<EngineConfig>,
}

impl OrderEngine {
    /// Create a new engine over the injected collaborators.
    ///
    /// The config is taken as-is; use [`EngineConfig::validate`] when it
    /// comes from an untrusted source.
    pub fn new(
        registry: Arc<dyn TokenRegistry>,
        proxies: Arc<dyn ProxyService>,
        allowances: Arc<dyn AllowanceService>,
        exchange: Arc<dyn ExchangeQuotes>,
        transactions: Arc<dyn TransactionManager>,
        config: EngineConfig,
    ) -> Self {
        Self {
            registry,
            proxies,
            allowances,
            exchange,
            transactions,
            config: RwLock::new(config),
        }
    }

    /// Update the slippage tolerance.
    ///
    /// Rejects fractions outside (0, 1). Constructions already past their
    /// snapshot keep the value they started with.
    pub async fn set_slippage_limit(&self, fraction: Decimal) -> Result<(), ConfigError> {
        validate_tolerance(fraction)?;
        let mut config = self.config.write().await;
        config.slippage_tolerance = fraction;
        info!(tolerance = %fraction, "slippage tolerance updated");
        Ok(())
    }

    /// The currently configured slippage tolerance.
    pub async fn slippage_limit(&self) -> Decimal {
        self.config.read().await.slippage_tolerance
    }

    /// Display passthrough: how much `buy` a fixed `pay_amount` of `pay`
    /// currently yields, in human units.
    pub async fn buy_amount(
        &self,
        buy: &Asset,
        pay: &Asset,
        pay_amount: Decimal,
    ) -> Result<Decimal, OrderError> {
        let quote = self.quote_resolver().buy_amount(buy, pay, pay_amount).await?;
        Ok(quote.amount)
    }

    /// Display passthrough: how much `pay` a fixed `buy_amount` of `buy`
    /// currently costs, in human units.
    pub async fn pay_amount(
        &self,
        pay: &Asset,
        buy: &Asset,
        buy_amount: Decimal,
    ) -> Result<Decimal, OrderError> {
        let quote = self.quote_resolver().pay_amount(pay, buy, buy_amount).await?;
        Ok(quote.amount)
    }

    /// Sell a fixed `amount` of `sell_asset` for as much `buy_asset` as the
    /// book yields, bounded below by the slippage limit.
    pub async fn sell(
        &self,
        sell_asset: &Asset,
        buy_asset: &Asset,
        amount: Decimal,
    ) -> Result<OrderId, OrderError> {
        let tolerance = self.tolerance_snapshot().await;
        let proxy = resolve_proxy(self.proxies.as_ref(), sell_asset.is_native()).await?;
        let method = select_method(
            Side::Sell,
            sell_asset.is_native(),
            buy_asset.is_native(),
            proxy.is_some(),
        );

        let targets = self.call_targets().await?;
        let pay_addr = self.registry.address_of(sell_asset).await?;
        let buy_addr = self.registry.address_of(buy_asset).await?;
        let pay_decimals = self.registry.decimals_of(sell_asset).await?;
        let buy_decimals = self.registry.decimals_of(buy_asset).await?;

        let pay_base = to_base_units(amount, pay_decimals)?;
        let quote = self
            .quote_resolver()
            .buy_amount(buy_asset, sell_asset, amount)
            .await?;
        let min_receive = min_acceptable_receive(quote.amount, tolerance);
        let limit_base = to_base_units(min_receive, buy_decimals)?;
        debug!(quote = %quote.amount, limit = %min_receive, "sell limit");

        let args = build_args(method, targets, pay_addr, pay_base, buy_addr, limit_base);
        let options = build_options(method, pay_base, limit_base);
        self.require_allowance_if_needed(sell_asset, proxy).await?;

        let ticket = OrderTicket {
            side: Side::Sell,
            exchange: targets.exchange,
            call: CallDescriptor {
                method,
                args,
                attached_value: options.attached_value,
                route_through_proxy: options.route_through_proxy,
                settlement: buy_addr,
            },
            created_at: Utc::now(),
        };
        info!(
            method = %method,
            sell = %sell_asset,
            buy = %buy_asset,
            amount = %amount,
            "sell order built"
        );
        Ok(self.transactions.submit_order(ticket).await?)
    }

    /// Buy exactly `amount` of `buy_asset`, paying with `pay_asset` up to
    /// the slippage-bounded worst-case pay amount.
    pub async fn buy(
        &self,
        buy_asset: &Asset,
        pay_asset: &Asset,
        amount: Decimal,
    ) -> Result<OrderId, OrderError> {
        let tolerance = self.tolerance_snapshot().await;
        let proxy = resolve_proxy(self.proxies.as_ref(), pay_asset.is_native()).await?;
        let method = select_method(
            Side::Buy,
            pay_asset.is_native(),
            buy_asset.is_native(),
            proxy.is_some(),
        );

        let targets = self.call_targets().await?;
        let buy_addr = self.registry.address_of(buy_asset).await?;
        let pay_addr = self.registry.address_of(pay_asset).await?;
        let buy_decimals = self.registry.decimals_of(buy_asset).await?;
        let pay_decimals = self.registry.decimals_of(pay_asset).await?;

        let buy_base = to_base_units(amount, buy_decimals)?;
        let quote = self
            .quote_resolver()
            .pay_amount(pay_asset, buy_asset, amount)
            .await?;
        let max_pay = max_acceptable_pay(quote.amount, tolerance);
        let limit_base = to_base_units(max_pay, pay_decimals)?;
        debug!(quote = %quote.amount, limit = %max_pay, "buy limit");

        let args = build_args(method, targets, buy_addr, buy_base, pay_addr, limit_base);
        let options = build_options(method, buy_base, limit_base);
        self.require_allowance_if_needed(pay_asset, proxy).await?;

        let ticket = OrderTicket {
            side: Side::Buy,
            exchange: targets.exchange,
            call: CallDescriptor {
                method,
                args,
                attached_value: options.attached_value,
                route_through_proxy: options.route_through_proxy,
                settlement: buy_addr,
            },
            created_at: Utc::now(),
        };
        info!(
            method = %method,
            buy = %buy_asset,
            pay = %pay_asset,
            amount = %amount,
            "buy order built"
        );
        Ok(self.transactions.submit_order(ticket).await?)
    }

    fn quote_resolver(&self) -> QuoteResolver<'_> {
        QuoteResolver::new(self.registry.as_ref(), self.exchange.as_ref())
    }

    async fn tolerance_snapshot(&self) -> Decimal {
        let tolerance = self.config.read().await.slippage_tolerance;
        if tolerance.is_zero() {
            warn!("zero slippage tolerance, limits will equal raw quotes");
        }
        tolerance
    }

    async fn call_targets(&self) -> Result<CallTargets, OrderError> {
        Ok(CallTargets {
            exchange: self.registry.exchange().await?,
            proxy_registry: self.registry.proxy_registry().await?,
        })
    }

    /// Allowance precondition: only meaningful when a proxy will pull a
    /// token from the caller. Awaited before submission; failure aborts
    /// the order.
    async fn require_allowance_if_needed(
        &self,
        outgoing: &Asset,
        proxy: Option<Address>,
    ) -> Result<(), OrderError> {
        if outgoing.is_native() {
            return Ok(());
        }
        if let Some(proxy) = proxy {
            self.allowances.require_allowance(outgoing, proxy).await?;
        }
        Ok(())
    }
}
