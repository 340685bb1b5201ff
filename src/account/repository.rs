use super::model::{Account, NewAccountRecord};
use anyhow::Result;
use async_trait::async_trait;

/// Result of an insert attempt.
#[derive(Debug)]
pub enum InsertOutcome {
    Created(Account),
    /// The username is already taken (unique constraint).
    Conflict,
}

/// Storage seam for accounts.
///
/// Every method runs as a single statement in its own transaction, so a failed
/// or dropped call never leaves a partially written row.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn exists(&self, username: &str) -> Result<bool>;

    /// Insert a new row. Must report a duplicate username as
    /// [`InsertOutcome::Conflict`] even when racing another insert.
    async fn insert(&self, record: NewAccountRecord) -> Result<InsertOutcome>;

    async fn find(&self, username: &str) -> Result<Option<Account>>;

    /// Returns `false` when no row matched.
    async fn update_name(&self, username: &str, name: &str) -> Result<bool>;

    /// Returns `false` when no row matched.
    async fn delete(&self, username: &str) -> Result<bool>;

    async fn ping(&self) -> Result<()>;
}
