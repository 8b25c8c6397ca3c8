use cdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use cdb_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// A referenced user, project or comment is absent.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Business(BError::Parameter(err)) => err.is_not_found(),
            Self::Business(BError::Repo(RepoError::NotFound)) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
