use num_bigint::{BigInt, BigUint};
use thiserror::Error;

/// Errors raised by the gfp codec and its parameter loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GfpError {
    /// Encode was called with a value above the configured prime.
    #[error("value must not be larger than {prime}, got {value}")]
    ValueTooLarge { prime: BigUint, value: BigInt },
    /// Encode was called with a negative value.
    #[error("value must not be negative, got {value}")]
    NegativeValue { value: BigInt },
    /// A word or share buffer does not have its fixed width.
    #[error("gfp byte representation must have a length of {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// A concatenated word stream does not split into whole words.
    #[error("gfp word stream must have a length that is a multiple of {width}, got {actual}")]
    InvalidStreamLength { width: usize, actual: usize },
    /// A codec parameter was absent from the configuration.
    #[error("missing codec parameter `{0}`")]
    MissingParameter(&'static str),
    /// A codec parameter is present but unusable.
    #[error("invalid codec parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    /// The parameter configuration could not be parsed.
    #[error("cannot parse codec parameters: {0}")]
    Config(String),
}

impl From<toml::de::Error> for GfpError {
    fn from(err: toml::de::Error) -> Self {
        GfpError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GfpError>;
