use async_trait::async_trait;

use crate::domain::models::account::Account;

use super::repository::RepositoryResult;

#[derive(Debug, Clone)]
pub enum FindBy {
    Id(String),
    Credentials { email: String, hash: String },
}

impl std::fmt::Display for FindBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(_) => write!(f, "id"),
            Self::Credentials { .. } => write!(f, "email and hash"),
        }
    }
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_one(&self, by: FindBy) -> RepositoryResult<Option<Account>>;
    /// Inserts when `account.id` is empty, otherwise updates in place.
    async fn save(&self, account: Account) -> RepositoryResult<Account>;
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}
