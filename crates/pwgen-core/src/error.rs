use thiserror::Error;

/// Core error type shared across pwgen crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The policy can never be satisfied as written.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
    /// Exclusions removed every character of a required class.
    #[error("no {0} characters left in the valid set")]
    EmptyAlphabet(String),
}

/// Convenience alias for results returned by pwgen crates.
pub type Result<T> = std::result::Result<T, Error>;
