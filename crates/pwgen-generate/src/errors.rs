use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error(transparent)]
    Policy(#[from] pwgen_core::Error),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("random source failure: {0}")]
    RandomSource(String),
    #[error("random source exhausted after {consumed} draws")]
    RandomSourceExhausted { consumed: usize },
    #[error("no password satisfied the policy within {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },
}
