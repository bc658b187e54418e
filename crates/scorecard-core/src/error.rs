use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScorecardError {
    /// The metrics provider could not deliver data (network, parse, unknown symbol).
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Invalid quoteType: {0}")]
    InvalidQuoteType(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
