use thiserror::Error;

/// Token registry errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("asset not resolvable: {0}")]
    UnresolvedAsset(String),

    #[error("registry lookup failed: {0}")]
    LookupFailed(String),
}

/// Proxy lookup and deployment errors
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("proxy lookup failed: {0}")]
    LookupFailed(String),

    #[error("proxy creation failed: {0}")]
    CreationFailed(String),

    #[error("proxy creation rejected: {0}")]
    Rejected(String),
}

/// Exchange quote errors
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("no liquidity for {pay} -> {buy}")]
    NoLiquidity { pay: String, buy: String },

    #[error("quote query failed: {0}")]
    QueryFailed(String),
}

/// Allowance precondition errors
#[derive(Error, Debug)]
pub enum AllowanceError {
    #[error("allowance not granted for {asset}: {message}")]
    NotGranted { asset: String, message: String },
}

/// Order submission errors
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("order submission failed: {0}")]
    SubmissionFailed(String),

    #[error("order rejected: {0}")]
    Rejected(String),
}

/// Amount conversion errors
///
/// Truncation toward zero is not an error; only amounts that cannot be
/// represented at all end up here.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("amount {amount} does not fit into {decimals} decimals")]
    OutOfRange { amount: String, decimals: u8 },

    #[error("negative amount: {0}")]
    Negative(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Order construction failure, surfacing the failing collaborator's error
/// unchanged.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error(transparent)]
    UnresolvedAsset(#[from] RegistryError),

    #[error(transparent)]
    ProxyCreationFailed(#[from] ProxyError),

    #[error(transparent)]
    QuoteUnavailable(#[from] QuoteError),

    #[error(transparent)]
    AllowanceFailed(#[from] AllowanceError),

    #[error(transparent)]
    SubmissionFailed(#[from] SubmitError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
