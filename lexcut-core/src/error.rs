//! Error types for tokenization and affix-table loading

use thiserror::Error;

/// Errors that abort a tokenization
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// Input is not valid in the expected codeset. Fatal to the sentence.
    #[error("unable to decode input as {codeset} at byte offset {offset}")]
    Decode {
        /// Byte offset of the first undecodable byte
        offset: usize,
        /// Name of the codeset the input was expected in
        codeset: &'static str,
    },

    /// Affix table failed to load or validate
    #[error("affix table error: {0}")]
    Affix(#[from] AffixError),

    /// Tokenizer assembled without a required collaborator
    #[error("tokenizer configuration error: {0}")]
    Config(String),
}

/// Errors from affix-table configuration
#[derive(Debug, Error)]
pub enum AffixError {
    /// TOML syntax or schema error
    #[error("failed to parse affix config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Semantic validation failure
    #[error("invalid affix config: {0}")]
    Invalid(String),

    /// Unknown embedded language code
    #[error("unknown affix language: {0}")]
    UnknownLanguage(String),
}

/// Result type for tokenization operations
pub type Result<T> = std::result::Result<T, TokenizeError>;
