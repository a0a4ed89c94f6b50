use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Strategy not found: {0}")]
    StrategyNotFound(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        latitude: Decimal,
        longitude: Decimal,
    },
    #[error("Invalid weight: {0}")]
    InvalidWeight(String),
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },
    #[error("Unknown node: {0}")]
    UnknownNode(String),
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Errors caused by the caller's input rather than by the engine
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::StrategyNotFound(_)
                | Error::InvalidRequest(_)
                | Error::InvalidCoordinate { .. }
                | Error::InvalidWeight(_)
                | Error::Parse(_)
        )
    }
}
