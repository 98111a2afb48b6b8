use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::domain::caches::account::{AccountCache, CacheKey};
use crate::domain::models::account::Account;
use crate::domain::models::outcome::Outcome;

/// Read-through, write-through and evict policies around an [`AccountCache`].
///
/// Every write or eviction bumps `generation`. A read-through load only
/// remembers its value when no write happened while it was loading, so a
/// value read before a concurrent `update` or `delete` cannot land in the
/// cache after that write. The racing read itself may still return the old
/// value.
#[derive(Clone)]
pub struct CachePolicy {
    cache: Arc<dyn AccountCache>,
    generation: Arc<AtomicU64>,
}

impl CachePolicy {
    pub fn new(cache: Arc<dyn AccountCache>) -> Self {
        Self {
            cache,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Answers from the cache when possible, otherwise loads and remembers a found value.
    pub async fn read_through<F, Fut>(&self, key: &CacheKey, load: F) -> Outcome<Account>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<Account>>,
    {
        let key = key.to_string();

        if let Some(account) = self.cache.get(&key).await {
            debug!(key = %key, "cache hit");
            return Outcome::Found(account);
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let outcome = load().await;

        if let Outcome::Found(account) = &outcome {
            if self.generation.load(Ordering::SeqCst) != generation {
                debug!(key = %key, "cache skip, written while loading");
                return outcome;
            }

            self.cache.put(&key, account.clone()).await;

            if self.generation.load(Ordering::SeqCst) != generation {
                self.cache.evict(&key).await;
            }
        }

        outcome
    }

    /// Stores the result of a successful write under `key`.
    pub async fn write_through(
        &self,
        key: &CacheKey,
        outcome: Outcome<Account>,
    ) -> Outcome<Account> {
        if let Outcome::Found(account) = &outcome {
            self.generation.fetch_add(1, Ordering::SeqCst);
            self.cache.put(&key.to_string(), account.clone()).await;
        }

        outcome
    }

    pub async fn evict(&self, key: &CacheKey) {
        let key = key.to_string();
        debug!(key = %key, "cache evict");
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.cache.evict(&key).await;
    }
}
