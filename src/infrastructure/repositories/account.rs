use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::Account;
use crate::domain::repositories::account::{AccountRepository, FindBy};
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountContent};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    #[tracing::instrument(skip_all, fields(by = %by))]
    async fn find_one(&self, by: FindBy) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = match by {
            FindBy::Id(id) => self.db.select((ACCOUNT, id)).await?,
            FindBy::Credentials { email, hash } => self
                .db
                .query(
                    "SELECT * FROM type::table($table) WHERE email = type::string($email) AND hash = type::string($hash) LIMIT 1",
                )
                .bind(("table", ACCOUNT))
                .bind(("email", email))
                .bind(("hash", hash))
                .await?
                .take(0)?,
        };

        Ok(account.map(Into::into))
    }

    #[tracing::instrument(skip_all, fields(id = %account.id))]
    async fn save(&self, account: Account) -> RepositoryResult<Account> {
        let id = account.id.clone();
        let content = SurrealAccountContent::from(account);

        let saved: Option<SurrealAccount> = if id.is_empty() {
            self.db.create(ACCOUNT).content(content).await?
        } else {
            self.db.update((ACCOUNT, id.as_str())).content(content).await?
        };

        saved
            .map(Into::into)
            .ok_or_else(|| RepositoryError::Store(format!("{ACCOUNT} '{id}' was not written")))
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let _: Option<SurrealAccount> = self.db.delete((ACCOUNT, id)).await?;

        Ok(())
    }
}
