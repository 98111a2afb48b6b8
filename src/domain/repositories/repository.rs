use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("store call failed: {0}")]
    Store(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
