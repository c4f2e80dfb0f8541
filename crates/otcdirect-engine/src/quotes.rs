//! Exchange quote resolution.

use chrono::Utc;
use otcdirect_core::{
    from_base_units, to_base_units, Asset, ExchangeQuotes, OrderError, Quote, TokenRegistry,
};
use rust_decimal::Decimal;
use tracing::debug;

/// Resolves fixed-amount quotes against the exchange.
///
/// Amounts cross the boundary in base units; results come back in human
/// units alongside the raw integer so the slippage step can reuse the same
/// quote without re-querying.
pub struct QuoteResolver<'a> {
    registry: &'a dyn TokenRegistry,
    exchange: &'a dyn ExchangeQuotes,
}

impl<'a> QuoteResolver<'a> {
    pub fn new(registry: &'a dyn TokenRegistry, exchange: &'a dyn ExchangeQuotes) -> Self {
        Self { registry, exchange }
    }

    /// How much of `buy` a fixed `pay_amount` of `pay` currently yields.
    pub async fn buy_amount(
        &self,
        buy: &Asset,
        pay: &Asset,
        pay_amount: Decimal,
    ) -> Result<Quote, OrderError> {
        let buy_addr = self.registry.address_of(buy).await?;
        let pay_addr = self.registry.address_of(pay).await?;
        let pay_decimals = self.registry.decimals_of(pay).await?;
        let buy_decimals = self.registry.decimals_of(buy).await?;

        let pay_base = to_base_units(pay_amount, pay_decimals)?;
        let base_amount = self.exchange.buy_amount(buy_addr, pay_addr, pay_base).await?;
        let amount = from_base_units(base_amount, buy_decimals)?;
        debug!(buy = %buy, pay = %pay, pay_amount = %pay_amount, quote = %amount, "buy-amount quote");

        Ok(Quote {
            amount,
            base_amount,
            quoted_at: Utc::now(),
        })
    }

    /// How much of `pay` a fixed `buy_amount` of `buy` currently costs.
    pub async fn pay_amount(
        &self,
        pay: &Asset,
        buy: &Asset,
        buy_amount: Decimal,
    ) -> Result<Quote, OrderError> {
        let pay_addr = self.registry.address_of(pay).await?;
        let buy_addr = self.registry.address_of(buy).await?;
        let buy_decimals = self.registry.decimals_of(buy).await?;
        let pay_decimals = self.registry.decimals_of(pay).await?;

        let buy_base = to_base_units(buy_amount, buy_decimals)?;
        let base_amount = self.exchange.pay_amount(pay_addr, buy_addr, buy_base).await?;
        let amount = from_base_units(base_amount, pay_decimals)?;
        debug!(pay = %pay, buy = %buy, buy_amount = %buy_amount, quote = %amount, "pay-amount quote");

        Ok(Quote {
            amount,
            base_amount,
            quoted_at: Utc::now(),
        })
    }
}
