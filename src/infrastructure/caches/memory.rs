use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::caches::account::AccountCache;
use crate::domain::models::account::Account;

/// Process-local cache. Entries are replaced whole, so readers never see a
/// partially written account.
#[derive(Default)]
pub struct InMemoryAccountCache {
    entries: DashMap<String, Account>,
}

#[async_trait]
impl AccountCache for InMemoryAccountCache {
    async fn get(&self, key: &str) -> Option<Account> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    async fn put(&self, key: &str, account: Account) {
        self.entries.insert(key.to_owned(), account);
    }

    async fn evict(&self, key: &str) {
        self.entries.remove(key);
    }
}

/// Used when caching is disabled: every read goes to the store.
pub struct NoopAccountCache;

#[async_trait]
impl AccountCache for NoopAccountCache {
    async fn get(&self, _key: &str) -> Option<Account> {
        None
    }

    async fn put(&self, _key: &str, _account: Account) {}

    async fn evict(&self, _key: &str) {}
}
