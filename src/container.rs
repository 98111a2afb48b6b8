use std::sync::Arc;
use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::config::{AppConfig, CacheConfig, ResilienceConfig};
use crate::domain::caches::account::AccountCache;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;
use crate::services::fallback::{CircuitBreaker, CircuitBreakerConfig};
use crate::services::hasher::{CredentialHasher, HasherError};

use crate::infrastructure::caches::memory::{InMemoryAccountCache, NoopAccountCache};
use crate::infrastructure::repositories::account::AccountRepositoryImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
}

impl Container {
    /// Fails when the configured digest algorithm is not supported.
    pub fn new(conn: Surreal<Client>, config: &AppConfig) -> Result<Self, HasherError> {
        let db = Arc::new(conn);
        let hasher = CredentialHasher::new(&config.hashing.algorithm)?;

        Ok(Container {
            account_service: account_service(
                db,
                account_cache(&config.cache),
                hasher,
                account_breaker(&config.resilience),
            ),
        })
    }
}

fn account_cache(cache_config: &CacheConfig) -> Arc<dyn AccountCache> {
    if cache_config.enabled {
        Arc::new(InMemoryAccountCache::default())
    } else {
        Arc::new(NoopAccountCache)
    }
}

fn account_breaker(resilience_config: &ResilienceConfig) -> CircuitBreaker {
    CircuitBreaker::new(
        "account-store",
        CircuitBreakerConfig {
            failure_threshold: resilience_config.failure_threshold,
            open_for: Duration::from_secs(resilience_config.open_seconds),
            half_open_calls: resilience_config.half_open_calls,
        },
    )
}

fn account_service(
    db: Arc<Surreal<Client>>,
    cache: Arc<dyn AccountCache>,
    hasher: CredentialHasher,
    breaker: CircuitBreaker,
) -> Arc<dyn AccountService> {
    let account_repository: Arc<dyn AccountRepository> = Arc::new(AccountRepositoryImpl::new(db));

    Arc::new(AccountServiceImpl::new(
        account_repository,
        cache,
        hasher,
        breaker,
    ))
}
