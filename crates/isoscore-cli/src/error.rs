use isoscore::core::catalog::reference::ReferenceLoadError;
use isoscore::core::formula::params::ParamLoadError;
use isoscore::engine::error::EvaluationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Params(#[from] ParamLoadError),

    #[error(transparent)]
    References(#[from] ReferenceLoadError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
