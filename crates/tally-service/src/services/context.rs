//! Service context - dependency container for services
//!
//! Holds the stores and the voting rules every service reads.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tally_common::VotingConfig;
use tally_core::traits::{CooldownStore, RepoResult, TallyStore};
use tally_core::DomainError;
use tracing::warn;

use super::error::{ServiceError, ServiceResult};

/// Default bound on a single store call
pub const DEFAULT_STORAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    tally_store: Arc<dyn TallyStore>,
    cooldown_store: Arc<dyn CooldownStore>,
    voting: VotingConfig,
    storage_timeout: Duration,
}

impl ServiceContext {
    pub fn new(
        tally_store: Arc<dyn TallyStore>,
        cooldown_store: Arc<dyn CooldownStore>,
        voting: VotingConfig,
        storage_timeout: Duration,
    ) -> Self {
        Self {
            tally_store,
            cooldown_store,
            voting,
            storage_timeout,
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    pub fn tally_store(&self) -> &dyn TallyStore {
        self.tally_store.as_ref()
    }

    pub fn cooldown_store(&self) -> &dyn CooldownStore {
        self.cooldown_store.as_ref()
    }

    pub fn voting(&self) -> &VotingConfig {
        &self.voting
    }

    pub fn storage_timeout(&self) -> Duration {
        self.storage_timeout
    }

    /// Await a store call, failing with `StorageUnavailable` once the storage
    /// timeout passes. The call itself is dropped, not cancelled remotely.
    pub async fn bounded<T, F>(&self, operation: &'static str, call: F) -> RepoResult<T>
    where
        F: Future<Output = RepoResult<T>>,
    {
        match tokio::time::timeout(self.storage_timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                let timeout_ms = self.storage_timeout.as_millis() as u64;
                warn!(operation, timeout_ms, "Store call timed out");
                Err(DomainError::storage(format!(
                    "{operation} timed out after {timeout_ms}ms"
                )))
            }
        }
    }

    /// Probe both stores
    pub async fn health_check(&self) -> ServiceResult<()> {
        self.bounded("tally.health_check", self.tally_store.health_check())
            .await?;
        self.bounded("cooldown.health_check", self.cooldown_store.health_check())
            .await?;
        Ok(())
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("tally_store", &"dyn TallyStore")
            .field("cooldown_store", &"dyn CooldownStore")
            .field("voting", &self.voting)
            .field("storage_timeout", &self.storage_timeout)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    tally_store: Option<Arc<dyn TallyStore>>,
    cooldown_store: Option<Arc<dyn CooldownStore>>,
    voting: VotingConfig,
    storage_timeout: Duration,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            tally_store: None,
            cooldown_store: None,
            voting: VotingConfig::default(),
            storage_timeout: DEFAULT_STORAGE_TIMEOUT,
        }
    }

    pub fn tally_store(mut self, store: Arc<dyn TallyStore>) -> Self {
        self.tally_store = Some(store);
        self
    }

    pub fn cooldown_store(mut self, store: Arc<dyn CooldownStore>) -> Self {
        self.cooldown_store = Some(store);
        self
    }

    pub fn voting(mut self, voting: VotingConfig) -> Self {
        self.voting = voting;
        self
    }

    pub fn storage_timeout(mut self, timeout: Duration) -> Self {
        self.storage_timeout = timeout;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if either store is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.tally_store
                .ok_or_else(|| ServiceError::validation("tally_store is required"))?,
            self.cooldown_store
                .ok_or_else(|| ServiceError::validation("cooldown_store is required"))?,
            self.voting,
            self.storage_timeout,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
