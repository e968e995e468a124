use crate::tier::Tier;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{tier}: {field} must be a fraction in [0, 1], got {value}")]
    InvalidRate {
        tier: Tier,
        field: &'static str,
        value: f64,
    },

    #[error("{tier}: monthly cost must be positive, got {value}")]
    NonPositiveCost { tier: Tier, value: f64 },

    #[error("{tier}: feature index {index} out of range (catalog has {len} features)")]
    UnknownFeature { tier: Tier, index: usize, len: usize },

    #[error("{tier}: feature index {index} listed more than once")]
    DuplicateFeature { tier: Tier, index: usize },

    #[error("Unknown tier '{name}' (expected revolution, equity or catalyst)")]
    UnknownTier { name: String },
}

pub type CalcResult<T> = Result<T, CalcError>;
