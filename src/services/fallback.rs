use std::future::Future;
use std::sync::atomic::{AtomicU8, AtomicU32, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::domain::models::outcome::Outcome;
use crate::domain::repositories::repository::RepositoryResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CircuitState {
    /// Store calls go through.
    Closed = 0,
    /// Store calls are skipped and answered with the fallback.
    Open = 1,
    /// A limited number of trial calls decide whether to close again.
    HalfOpen = 2,
}

impl From<u8> for CircuitState {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Open,
            2 => Self::HalfOpen,
            _ => Self::Closed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CircuitBreakerConfig {
    /// Consecutive failures that open the circuit.
    pub failure_threshold: u32,
    /// Time spent open before trial calls are let through.
    pub open_for: Duration,
    /// Trial calls allowed while half-open.
    pub half_open_calls: u32,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            open_for: Duration::from_secs(30),
            half_open_calls: 1,
        }
    }
}

/// Named fallback policy around store calls.
///
/// A failed call answers [`Outcome::Degraded`]. After `failure_threshold`
/// consecutive failures the circuit opens and calls are answered with the
/// fallback without reaching the store until `open_for` has elapsed. No call
/// is ever retried.
pub struct CircuitBreaker {
    name: &'static str,
    state: AtomicU8,
    failures: AtomicU32,
    trials: AtomicU32,
    started: Instant,
    opened_at_ms: AtomicU64,
    config: CircuitBreakerConfig,
}

impl CircuitBreaker {
    pub fn new(name: &'static str, config: CircuitBreakerConfig) -> Self {
        Self {
            name,
            state: AtomicU8::new(CircuitState::Closed as u8),
            failures: AtomicU32::new(0),
            trials: AtomicU32::new(0),
            started: Instant::now(),
            opened_at_ms: AtomicU64::new(0),
            config,
        }
    }

    pub fn state(&self) -> CircuitState {
        CircuitState::from(self.state.load(Ordering::SeqCst))
    }

    /// Runs a store call under the breaker. `Ok(Some)` is `Found`, `Ok(None)`
    /// is `NotFound`, and a failure or an open circuit is `Degraded`.
    pub async fn guard<T, F, Fut>(&self, operation: &'static str, call: F) -> Outcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RepositoryResult<Option<T>>>,
    {
        if !self.allow_request() {
            debug!(breaker = self.name, operation, "circuit open, answering with fallback");
            return Outcome::Degraded;
        }

        match call().await {
            Ok(value) => {
                self.record_success();
                value.map_or(Outcome::NotFound, Outcome::Found)
            }
            Err(error) => {
                self.record_failure();
                warn!(
                    breaker = self.name,
                    operation,
                    error = %error,
                    "store call failed, answering with fallback"
                );
                Outcome::Degraded
            }
        }
    }

    fn allow_request(&self) -> bool {
        match self.state() {
            CircuitState::Closed => true,
            CircuitState::Open => {
                let opened_at = self.opened_at_ms.load(Ordering::SeqCst);
                let open_for = self.elapsed_ms().saturating_sub(opened_at);

                if u128::from(open_for) < self.config.open_for.as_millis() {
                    return false;
                }

                if self
                    .state
                    .compare_exchange(
                        CircuitState::Open as u8,
                        CircuitState::HalfOpen as u8,
                        Ordering::SeqCst,
                        Ordering::SeqCst,
                    )
                    .is_ok()
                {
                    self.trials.store(0, Ordering::SeqCst);
                    debug!(breaker = self.name, "circuit half-open");
                }

                self.take_trial()
            }
            CircuitState::HalfOpen => self.take_trial(),
        }
    }

    fn take_trial(&self) -> bool {
        self.trials.fetch_add(1, Ordering::SeqCst) < self.config.half_open_calls
    }

    fn record_success(&self) {
        self.failures.store(0, Ordering::SeqCst);

        if self.state() == CircuitState::HalfOpen {
            self.state.store(CircuitState::Closed as u8, Ordering::SeqCst);
            debug!(breaker = self.name, "circuit closed");
        }
    }

    fn record_failure(&self) {
        match self.state() {
            CircuitState::Closed => {
                let failures = self.failures.fetch_add(1, Ordering::SeqCst) + 1;

                if failures >= self.config.failure_threshold {
                    self.trip(failures);
                }
            }
            CircuitState::HalfOpen => self.trip(1),
            CircuitState::Open => {}
        }
    }

    fn trip(&self, failures: u32) {
        self.opened_at_ms.store(self.elapsed_ms(), Ordering::SeqCst);
        self.failures.store(0, Ordering::SeqCst);
        self.state.store(CircuitState::Open as u8, Ordering::SeqCst);
        warn!(breaker = self.name, failures, "circuit opened");
    }

    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
