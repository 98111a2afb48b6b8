use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::domain::models::account::Account;

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    #[serde(default)]
    name: String,
    email: String,
    hash: String,
}

/// Persisted fields of an account. There is no password column.
#[derive(Serialize)]
pub struct SurrealAccountContent {
    name: String,
    email: String,
    hash: String,
}

impl From<Account> for SurrealAccountContent {
    fn from(acc: Account) -> Self {
        SurrealAccountContent {
            name: acc.name,
            email: acc.email,
            hash: acc.hash,
        }
    }
}

impl From<SurrealAccount> for Account {
    fn from(acc: SurrealAccount) -> Self {
        Account {
            id: acc.id.id.to_string(),
            name: acc.name,
            email: acc.email,
            hash: acc.hash,
            password: String::new(),
        }
    }
}
