//! Key-value store port for session durability.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Key under which the signed-in user record is stored.
pub const SESSION_USER_KEY: &str = "session.user";

/// Key under which the company profile is stored.
pub const COMPANY_PROFILE_KEY: &str = "workspace.company";

/// Key under which the team roster is stored.
pub const TEAM_ROSTER_KEY: &str = "workspace.roster";

/// Key under which the task list is stored.
pub const TASK_LIST_KEY: &str = "workspace.tasks";

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Simple get/set/remove persistence contract.
///
/// Values are opaque JSON strings; the store carries no core logic. Date
/// fields inside the stored JSON are re-hydrated by serde on load.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend read fails.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend write fails.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend removal fails.
    async fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Backend-layer failure.
    #[error("store backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
