//! In-process account repository for development and tests.
//!
//! Data lives only as long as the process. A single mutex serializes every
//! call, which makes the duplicate check and the insert atomic.

use super::{
    model::{Account, NewAccountRecord},
    repository::{AccountRepository, InsertOutcome},
};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<String, Account>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryRepository {
    table: Mutex<Table>,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.lock().await.rows.is_empty()
    }
}

#[async_trait]
impl AccountRepository for MemoryRepository {
    async fn exists(&self, username: &str) -> Result<bool> {
        Ok(self.table.lock().await.rows.contains_key(username))
    }

    async fn insert(&self, record: NewAccountRecord) -> Result<InsertOutcome> {
        let mut table = self.table.lock().await;
        if table.rows.contains_key(&record.username) {
            return Ok(InsertOutcome::Conflict);
        }

        // ids keep growing after deletes, like an identity column
        table.last_id += 1;
        let account = Account {
            id: table.last_id,
            username: record.username,
            password_hash: record.password_hash,
            name: record.name,
            phone_number: record.phone_number,
            email: record.email,
            birth: record.birth,
        };
        table
            .rows
            .insert(account.username.clone(), account.clone());

        Ok(InsertOutcome::Created(account))
    }

    async fn find(&self, username: &str) -> Result<Option<Account>> {
        Ok(self.table.lock().await.rows.get(username).cloned())
    }

    async fn update_name(&self, username: &str, name: &str) -> Result<bool> {
        let mut table = self.table.lock().await;
        Ok(table.rows.get_mut(username).map_or(false, |account| {
            account.name = name.to_string();
            true
        }))
    }

    async fn delete(&self, username: &str) -> Result<bool> {
        Ok(self.table.lock().await.rows.remove(username).is_some())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
