//! Error types

/// Errors from the checked naming entry points
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllionError {
    #[error("expected a decimal digit at byte {index}, found {found:?}")]
    NonDigit { index: usize, found: char },
}

/// Errors from loading or validating a generator configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("chunk ladder step {step} has a zero chunk length")]
    InvalidChunkLen { step: usize, chunk_len: usize },

    #[error("chunk ladder steps must have strictly decreasing min_len (step {step} is out of order)")]
    UnorderedLadder { step: usize },

    #[error("invalid value {value:?} for environment variable {var}")]
    InvalidEnvValue { var: &'static str, value: String },
}
