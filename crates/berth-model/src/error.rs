use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid submission: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
