use async_trait::async_trait;

use crate::domain::models::account::Account;

/// Key of a cached account. Point lookups and logins live in separate namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Account(String),
    Login { email: String, hash: String },
}

impl CacheKey {
    pub fn account(id: &str) -> Self {
        CacheKey::Account(id.to_owned())
    }

    pub fn login(email: &str, hash: &str) -> Self {
        CacheKey::Login {
            email: email.to_owned(),
            hash: hash.to_owned(),
        }
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Account(id) => write!(f, "account:{id}"),
            Self::Login { email, hash } => write!(f, "login:{email}:{hash}"),
        }
    }
}

#[async_trait]
pub trait AccountCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<Account>;
    async fn put(&self, key: &str, account: Account);
    async fn evict(&self, key: &str);
}
