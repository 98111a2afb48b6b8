use std::sync::Arc;

use crate::domain::{
    caches::account::{AccountCache, CacheKey},
    error::{AppError, AppResult},
    models::account::{Account, Credentials},
    models::outcome::Outcome,
    repositories::account::{AccountRepository, FindBy},
    services::account::AccountService,
};
use crate::services::cache::CachePolicy;
use crate::services::fallback::CircuitBreaker;
use crate::services::hasher::CredentialHasher;

use async_trait::async_trait;
use futures::TryFutureExt;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
    cache: CachePolicy,
    hasher: CredentialHasher,
    breaker: CircuitBreaker,
}

impl AccountServiceImpl {
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        cache: Arc<dyn AccountCache>,
        hasher: CredentialHasher,
        breaker: CircuitBreaker,
    ) -> Self {
        Self {
            repository,
            cache: CachePolicy::new(cache),
            hasher,
            breaker,
        }
    }

    async fn find_by_id(&self, id: &str) -> Outcome<Account> {
        self.breaker
            .guard("read", || self.repository.find_one(FindBy::Id(id.to_owned())))
            .await
    }

    fn hash_patch(&self, mut patch: Account) -> Account {
        if !patch.password.is_empty() {
            patch.hash = self.hasher.hash(&patch.password);
            patch.password.clear();
        }

        patch
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    #[tracing::instrument(skip(self, new_account), fields(email = %new_account.email))]
    async fn create(&self, new_account: Account) -> AppResult<Outcome<Account>> {
        require("password", &new_account.password)?;

        let account = Account {
            id: String::new(),
            hash: self.hasher.hash(&new_account.password),
            password: String::new(),
            ..new_account
        };

        let outcome = self
            .breaker
            .guard("create", || self.repository.save(account).map_ok(Some))
            .await;

        let key = match &outcome {
            Outcome::Found(created) => CacheKey::account(&created.id),
            _ => return Ok(outcome),
        };

        Ok(self.cache.write_through(&key, outcome).await)
    }

    #[tracing::instrument(skip(self))]
    async fn read(&self, id: &str) -> AppResult<Outcome<Account>> {
        require("id", id)?;

        Ok(self
            .cache
            .read_through(&CacheKey::account(id), || self.find_by_id(id))
            .await)
    }

    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn login(&self, credentials: Credentials) -> AppResult<Outcome<Account>> {
        require("password", &credentials.password)?;

        let hash = self.hasher.hash(&credentials.password);
        let key = CacheKey::login(&credentials.email, &hash);

        let lookup = FindBy::Credentials {
            email: credentials.email,
            hash,
        };

        Ok(self
            .cache
            .read_through(&key, || {
                self.breaker
                    .guard("login", || self.repository.find_one(lookup))
            })
            .await)
    }

    #[tracing::instrument(skip(self, patch))]
    async fn update(&self, id: &str, patch: Account) -> AppResult<Outcome<Account>> {
        require("id", id)?;

        let current = match self.find_by_id(id).await {
            Outcome::Found(account) => account,
            other => return Ok(other),
        };

        let stale_login = CacheKey::login(&current.email, &current.hash);
        let merged = current.merge(self.hash_patch(patch));

        let outcome = self
            .breaker
            .guard("update", || self.repository.save(merged).map_ok(Some))
            .await;

        if let Outcome::Found(_) = &outcome {
            self.cache.evict(&stale_login).await;
        }

        Ok(self.cache.write_through(&CacheKey::account(id), outcome).await)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &str) -> AppResult<Outcome<Account>> {
        require("id", id)?;

        let outcome = match self.find_by_id(id).await {
            Outcome::Found(account) => {
                self.breaker
                    .guard("delete", || {
                        self.repository.delete(id).map_ok(|()| Some(account))
                    })
                    .await
            }
            other => other,
        };

        self.cache.evict(&CacheKey::account(id)).await;

        if let Outcome::Found(deleted) = &outcome {
            self.cache
                .evict(&CacheKey::login(&deleted.email, &deleted.hash))
                .await;
        }

        Ok(outcome)
    }
}

fn require(name: &str, value: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::InvalidArgument(format!("{name} must not be empty")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use super::*;
    use crate::infrastructure::caches::memory::InMemoryAccountCache;
    use crate::infrastructure::repositories::account::mock::AccountRepositoryImpl;
    use crate::services::fallback::CircuitBreakerConfig;
    use rstest::*;

    const SECRET_HASH: &str = "K7gNU3sdo+OL0wNhqoVWhr3g6s1xYv72ol/pe/Unols=";

    struct Harness {
        service: AccountServiceImpl,
        repository: Arc<AccountRepositoryImpl>,
    }

    #[fixture]
    fn harness() -> Harness {
        harness_with(CircuitBreakerConfig::default())
    }

    fn harness_with(breaker: CircuitBreakerConfig) -> Harness {
        let repository = Arc::new(AccountRepositoryImpl::with_accounts(vec![Account {
            id: "1".to_string(),
            name: "Test".to_string(),
            email: "test_account@spacecraft.com".to_string(),
            hash: CredentialHasher::default().hash("p4ssw0rd"),
            password: String::new(),
        }]));

        let service = AccountServiceImpl::new(
            repository.clone(),
            Arc::new(InMemoryAccountCache::default()),
            CredentialHasher::default(),
            CircuitBreaker::new("account-store", breaker),
        );

        Harness {
            service,
            repository,
        }
    }

    fn ana() -> Account {
        Account {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_account_lifecycle(harness: Harness) {
        let service = harness.service;

        let created = service.create(ana()).await.unwrap().found().unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.hash, SECRET_HASH);
        assert!(created.password.is_empty());

        let logged_in = service.login(credentials("a@x.com", "secret")).await.unwrap();
        assert_eq!(logged_in, Outcome::Found(created.clone()));

        let wrong = service.login(credentials("a@x.com", "wrong")).await.unwrap();
        assert_eq!(wrong, Outcome::NotFound);

        let patch = Account {
            name: "Ana M.".to_string(),
            ..Default::default()
        };
        let updated = service
            .update(&created.id, patch)
            .await
            .unwrap()
            .found()
            .unwrap();

        assert_eq!(updated.name, "Ana M.");
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.hash, created.hash);

        let deleted = service.delete(&created.id).await.unwrap();
        assert_eq!(deleted, Outcome::Found(updated));

        let read = service.read(&created.id).await.unwrap();
        assert_eq!(read, Outcome::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn test_read_returns_created_account(harness: Harness) {
        let created = harness.service.create(ana()).await.unwrap().found().unwrap();

        let read = harness.service.read(&created.id).await.unwrap();

        assert_eq!(read, Outcome::Found(created));
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_never_persists_password(harness: Harness) {
        harness.service.create(ana()).await.unwrap();

        let accounts = harness.repository.accounts.lock().await;

        assert!(accounts.iter().all(|a| a.password.is_empty()));
        assert!(accounts.iter().any(|a| a.hash == SECRET_HASH));
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_without_password(harness: Harness) {
        let result = harness
            .service
            .create(Account {
                password: String::new(),
                ..ana()
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            AppError::InvalidArgument("password must not be empty")
        );
    }

    #[rstest]
    #[case::read("read")]
    #[case::update("update")]
    #[case::delete("delete")]
    #[tokio::test]
    async fn test_empty_id_is_invalid(harness: Harness, #[case] operation: &str) {
        let result = match operation {
            "read" => harness.service.read("").await,
            "update" => harness.service.update("", Account::default()).await,
            _ => harness.service.delete("").await,
        };

        assert_eq!(result.unwrap_err().code, 400);
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_reads_by_id(harness: Harness) {
        let listed = harness.service.list("1").await.unwrap().found().unwrap();

        assert_eq!(listed.email, "test_account@spacecraft.com");
    }

    #[rstest]
    #[case::unknown_email("fake_account@spacecraft.com", "p4ssw0rd")]
    #[case::wrong_password("test_account@spacecraft.com", "wrongpassword")]
    #[tokio::test]
    async fn test_login_not_found(harness: Harness, #[case] email: &str, #[case] password: &str) {
        let result = harness.service.login(credentials(email, password)).await;

        assert_eq!(result.unwrap(), Outcome::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn test_cached_login_does_not_leak_to_other_passwords(harness: Harness) {
        let service = harness.service;

        let ok = service
            .login(credentials("test_account@spacecraft.com", "p4ssw0rd"))
            .await
            .unwrap();
        assert!(ok.found().is_some());

        let wrong = service
            .login(credentials("test_account@spacecraft.com", "wrongpassword"))
            .await
            .unwrap();
        assert_eq!(wrong, Outcome::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_without_password(harness: Harness) {
        let result = harness
            .service
            .login(credentials("test_account@spacecraft.com", ""))
            .await;

        assert_eq!(
            result.unwrap_err(),
            AppError::InvalidArgument("password must not be empty")
        );
        assert_eq!(harness.repository.calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_invalidates_cached_login(harness: Harness) {
        let service = harness.service;

        let logged_in = service
            .login(credentials("test_account@spacecraft.com", "p4ssw0rd"))
            .await
            .unwrap();
        assert!(logged_in.found().is_some());

        assert!(service.delete("1").await.unwrap().found().is_some());

        let again = service
            .login(credentials("test_account@spacecraft.com", "p4ssw0rd"))
            .await
            .unwrap();
        assert_eq!(again, Outcome::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn test_cache_hit_skips_store(harness: Harness) {
        harness.service.read("1").await.unwrap();
        let calls = harness.repository.calls.load(Ordering::SeqCst);

        harness.service.read("1").await.unwrap();

        assert_eq!(harness.repository.calls.load(Ordering::SeqCst), calls);
    }

    #[rstest]
    #[tokio::test]
    async fn test_password_change_invalidates_login(harness: Harness) {
        let service = harness.service;

        service
            .login(credentials("test_account@spacecraft.com", "p4ssw0rd"))
            .await
            .unwrap();

        let patch = Account {
            password: "n3wp4ssw0rd".to_string(),
            ..Default::default()
        };
        let updated = service.update("1", patch).await.unwrap().found().unwrap();

        assert_eq!(updated.hash, CredentialHasher::default().hash("n3wp4ssw0rd"));
        assert!(updated.password.is_empty());

        let old = service
            .login(credentials("test_account@spacecraft.com", "p4ssw0rd"))
            .await
            .unwrap();
        assert_eq!(old, Outcome::NotFound);

        let new = service
            .login(credentials("test_account@spacecraft.com", "n3wp4ssw0rd"))
            .await
            .unwrap();
        assert_eq!(new, Outcome::Found(updated));
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_refreshes_cached_read(harness: Harness) {
        let service = harness.service;

        service.read("1").await.unwrap();

        let patch = Account {
            email: "moved@spacecraft.com".to_string(),
            ..Default::default()
        };
        service.update("1", patch).await.unwrap();

        let read = service.read("1").await.unwrap().found().unwrap();

        assert_eq!(read.email, "moved@spacecraft.com");
        assert_eq!(read.name, "Test");
    }

    #[rstest]
    #[tokio::test]
    async fn test_missing_record(harness: Harness) {
        let service = harness.service;

        assert_eq!(service.read("404").await.unwrap(), Outcome::NotFound);
        assert_eq!(
            service.update("404", Account::default()).await.unwrap(),
            Outcome::NotFound
        );
        assert_eq!(service.delete("404").await.unwrap(), Outcome::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn test_store_failure_degrades(harness: Harness) {
        harness.repository.fail(true);

        let service = harness.service;

        assert!(service.create(ana()).await.unwrap().is_degraded());
        assert!(service.read("1").await.unwrap().is_degraded());
        assert!(
            service
                .login(credentials("test_account@spacecraft.com", "p4ssw0rd"))
                .await
                .unwrap()
                .is_degraded()
        );
        assert!(
            service
                .update("1", Account::default())
                .await
                .unwrap()
                .is_degraded()
        );
        assert!(service.delete("1").await.unwrap().is_degraded());
    }

    #[rstest]
    #[tokio::test]
    async fn test_cached_read_survives_store_failure(harness: Harness) {
        let before = harness.service.read("1").await.unwrap();

        harness.repository.fail(true);

        assert_eq!(harness.service.read("1").await.unwrap(), before);
    }

    #[rstest]
    #[tokio::test]
    async fn test_degraded_results_are_not_cached(harness: Harness) {
        harness.repository.fail(true);
        assert!(harness.service.read("1").await.unwrap().is_degraded());

        harness.repository.fail(false);
        assert!(harness.service.read("1").await.unwrap().found().is_some());
    }

    #[tokio::test]
    async fn test_outage_opens_circuit() {
        let harness = harness_with(CircuitBreakerConfig {
            failure_threshold: 3,
            open_for: Duration::from_secs(60),
            half_open_calls: 1,
        });
        harness.repository.fail(true);

        for _ in 0..20 {
            assert!(harness.service.read("1").await.unwrap().is_degraded());
        }

        assert_eq!(harness.repository.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_circuit_recovers_after_outage() {
        let harness = harness_with(CircuitBreakerConfig {
            failure_threshold: 1,
            open_for: Duration::ZERO,
            half_open_calls: 1,
        });

        harness.repository.fail(true);
        assert!(harness.service.read("1").await.unwrap().is_degraded());

        harness.repository.fail(false);
        assert!(harness.service.read("1").await.unwrap().found().is_some());
    }
}
