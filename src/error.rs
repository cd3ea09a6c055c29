use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrengthError {
    /// The scoring strategy reported a max strength level of zero.
    #[error("Invalid scoring configuration: max strength level must be positive, got {max_level}")]
    InvalidConfiguration { max_level: u32 },
    #[cfg(feature = "async")]
    #[error("Evaluation cancelled")]
    Cancelled,
}
