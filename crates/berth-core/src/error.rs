use thiserror::Error;

use berth_model::ModelError;

/// Errors surfaced by step selection and pipeline execution.
///
/// `ReservedLabel`, `LocalDependencies` and `Model` are user-input errors:
/// they abort the submission synchronously, before any step runs. `Defect`
/// means malformed captured state reached a step and is a bug, never an
/// expected runtime failure. Nothing here is retried.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("label key {0:?} is reserved and cannot be supplied via configuration")]
    ReservedLabel(String),

    #[error("local dependencies are not supported by cluster submission: {0}")]
    LocalDependencies(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("defect: {0}")]
    Defect(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
