//! Otcdirect Engine
//!
//! Turns a high-level trade intent into a fully-specified exchange call:
//! entry-point selection, quote-derived slippage limits, positional
//! arguments, and native-value attachment, handed off to an injected
//! transaction manager.

pub mod engine;
pub mod method;
pub mod options;
pub mod params;
pub mod proxy;
pub mod quotes;
pub mod slippage;

#[cfg(test)]
mod testutil;

pub use engine::OrderEngine;
pub use method::select_method;
pub use quotes::QuoteResolver;
