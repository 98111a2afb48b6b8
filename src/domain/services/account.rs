use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, Credentials};
use crate::domain::models::outcome::Outcome;

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn create(&self, new_account: Account) -> AppResult<Outcome<Account>>;
    async fn read(&self, id: &str) -> AppResult<Outcome<Account>>;
    async fn login(&self, credentials: Credentials) -> AppResult<Outcome<Account>>;
    async fn update(&self, id: &str, patch: Account) -> AppResult<Outcome<Account>>;
    async fn delete(&self, id: &str) -> AppResult<Outcome<Account>>;

    /// Alias of [`AccountService::read`].
    async fn list(&self, id: &str) -> AppResult<Outcome<Account>> {
        self.read(id).await
    }
}
