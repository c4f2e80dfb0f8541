//! Mock collaborators for engine tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use otcdirect_core::{
    AllowanceError, AllowanceService, Asset, EngineConfig, ExchangeQuotes, OrderId, OrderTicket,
    ProxyError, ProxyService, QuoteError, RegistryError, SubmitError, TokenRegistry,
    TransactionManager,
};

use crate::engine::OrderEngine;

pub const WETH: Address = Address::repeat_byte(0xee);
pub const MKR: Address = Address::repeat_byte(0x11);
pub const DAI: Address = Address::repeat_byte(0x33);
pub const USDX: Address = Address::repeat_byte(0x22);
pub const OTC: Address = Address::repeat_byte(0x0c);
pub const PROXY_REGISTRY: Address = Address::repeat_byte(0x9e);
pub const PROXY: Address = Address::repeat_byte(0x71);

/// Registry over a fixed symbol table; the native asset resolves to [`WETH`].
pub struct FixedRegistry {
    tokens: HashMap<String, (Address, u8)>,
}

impl FixedRegistry {
    pub fn with_defaults() -> Self {
        let mut tokens = HashMap::new();
        tokens.insert("MKR".to_string(), (MKR, 18));
        tokens.insert("DAI".to_string(), (DAI, 18));
        tokens.insert("USDX".to_string(), (USDX, 6));
        Self { tokens }
    }

    fn entry(&self, asset: &Asset) -> Result<(Address, u8), RegistryError> {
        match asset {
            Asset::Native => Ok((WETH, 18)),
            Asset::Token(symbol) => self
                .tokens
                .get(symbol)
                .copied()
                .ok_or_else(|| RegistryError::UnresolvedAsset(symbol.clone())),
        }
    }
}

#[async_trait]
impl TokenRegistry for FixedRegistry {
    async fn address_of(&self, asset: &Asset) -> Result<Address, RegistryError> {
        Ok(self.entry(asset)?.0)
    }

    async fn decimals_of(&self, asset: &Asset) -> Result<u8, RegistryError> {
        Ok(self.entry(asset)?.1)
    }

    async fn exchange(&self) -> Result<Address, RegistryError> {
        Ok(OTC)
    }

    async fn proxy_registry(&self) -> Result<Address, RegistryError> {
        Ok(PROXY_REGISTRY)
    }
}

/// Proxy service with a configurable existing proxy and ensure-call capture.
pub struct StubProxies {
    existing: Option<Address>,
    fail_creation: bool,
    pub ensured: AtomicUsize,
}

impl StubProxies {
    pub fn with_proxy() -> Self {
        Self {
            existing: Some(PROXY),
            fail_creation: false,
            ensured: AtomicUsize::new(0),
        }
    }

    pub fn without_proxy() -> Self {
        Self {
            existing: None,
            fail_creation: false,
            ensured: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            existing: None,
            fail_creation: true,
            ensured: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ProxyService for StubProxies {
    async fn current_proxy(&self) -> Result<Option<Address>, ProxyError> {
        Ok(self.existing)
    }

    async fn ensure_proxy(&self) -> Result<Address, ProxyError> {
        if self.fail_creation {
            return Err(ProxyError::CreationFailed("deploy reverted".to_string()));
        }
        self.ensured.fetch_add(1, Ordering::SeqCst);
        Ok(PROXY)
    }
}

/// Exchange that quotes double the fixed amount, in base units.
#[derive(Default)]
pub struct DoublingExchange {
    fail: bool,
}

impl DoublingExchange {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl ExchangeQuotes for DoublingExchange {
    async fn buy_amount(
        &self,
        buy: Address,
        pay: Address,
        pay_amount: U256,
    ) -> Result<U256, QuoteError> {
        if self.fail {
            return Err(QuoteError::NoLiquidity {
                pay: pay.to_string(),
                buy: buy.to_string(),
            });
        }
        Ok(pay_amount * U256::from(2))
    }

    async fn pay_amount(
        &self,
        pay: Address,
        buy: Address,
        buy_amount: U256,
    ) -> Result<U256, QuoteError> {
        if self.fail {
            return Err(QuoteError::NoLiquidity {
                pay: pay.to_string(),
                buy: buy.to_string(),
            });
        }
        Ok(buy_amount * U256::from(2))
    }
}

/// Allowance service that records every call.
#[derive(Default)]
pub struct RecordingAllowances {
    pub calls: Mutex<Vec<(Asset, Address)>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl AllowanceService for RecordingAllowances {
    async fn require_allowance(
        &self,
        asset: &Asset,
        proxy: Address,
    ) -> Result<(), AllowanceError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AllowanceError::NotGranted {
                asset: asset.to_string(),
                message: "approval reverted".to_string(),
            });
        }
        self.calls.lock().unwrap().push((asset.clone(), proxy));
        Ok(())
    }
}

/// Transaction manager that captures submitted tickets.
#[derive(Default)]
pub struct CapturingTx {
    pub submitted: Mutex<Vec<OrderTicket>>,
}

#[async_trait]
impl TransactionManager for CapturingTx {
    async fn submit_order(&self, order: OrderTicket) -> Result<OrderId, SubmitError> {
        let mut submitted = self.submitted.lock().unwrap();
        let id = format!("tx-{}", submitted.len());
        submitted.push(order);
        Ok(id)
    }
}

/// An engine wired to mocks, with handles kept for assertions.
pub struct Harness {
    pub engine: OrderEngine,
    pub tx: Arc<CapturingTx>,
    pub proxies: Arc<StubProxies>,
    pub allowances: Arc<RecordingAllowances>,
}

pub fn harness(proxies: StubProxies) -> Harness {
    harness_with(proxies, DoublingExchange::default(), EngineConfig::default())
}

pub fn harness_with(
    proxies: StubProxies,
    exchange: DoublingExchange,
    config: EngineConfig,
) -> Harness {
    let proxies = Arc::new(proxies);
    let tx = Arc::new(CapturingTx::default());
    let allowances = Arc::new(RecordingAllowances::default());
    let engine = OrderEngine::new(
        Arc::new(FixedRegistry::with_defaults()),
        proxies.clone(),
        allowances.clone(),
        Arc::new(exchange),
        tx.clone(),
        config,
    );
    Harness {
        engine,
        tx,
        proxies,
        allowances,
    }
}
