//! PostgreSQL account repository.

use super::{
    model::{Account, NewAccountRecord},
    repository::{AccountRepository, InsertOutcome},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{postgres::PgRow, Connection, PgPool, Row};
use tracing::{info_span, Instrument, Span};

pub const SCHEMA_SQL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/sql/schema.sql"));

const SELECT_ACCOUNT: &str = r"
    SELECT id, username, password, name, phonenumber, email, birth
    FROM userinfo
    WHERE username = $1
";

#[derive(Debug, Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `userinfo` table when missing.
    ///
    /// # Errors
    /// Returns an error if any schema statement fails.
    pub async fn apply_schema(&self) -> Result<()> {
        for (index, statement) in split_sql_statements(SCHEMA_SQL).iter().enumerate() {
            sqlx::query(statement)
                .execute(&self.pool)
                .instrument(query_span("DDL", statement))
                .await
                .with_context(|| format!("failed to execute schema statement {}", index + 1))?;
        }
        Ok(())
    }
}

fn query_span(operation: &str, statement: &str) -> Span {
    info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = operation,
        db.statement = statement
    )
}

fn account_from_row(row: &PgRow) -> Account {
    Account {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: row.get("password"),
        name: row.get("name"),
        phone_number: row.get("phonenumber"),
        email: row.get("email"),
        birth: row.get("birth"),
    }
}

/// SQLSTATE 23505 is `unique_violation`.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}

/// Split a schema file into statements, dropping comment-only lines.
fn split_sql_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();

    for line in sql.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }
        current.push_str(line);
        current.push('\n');
        if trimmed.ends_with(';') {
            statements.push(current.trim().to_string());
            current.clear();
        }
    }

    if !current.trim().is_empty() {
        statements.push(current.trim().to_string());
    }

    statements
}

#[async_trait]
impl AccountRepository for PgRepository {
    async fn exists(&self, username: &str) -> Result<bool> {
        let query = "SELECT EXISTS(SELECT 1 FROM userinfo WHERE username = $1) AS exists";
        let row = sqlx::query(query)
            .bind(username)
            .fetch_one(&self.pool)
            .instrument(query_span("SELECT", query))
            .await
            .context("failed to check if account exists")?;

        Ok(row.get("exists"))
    }

    async fn insert(&self, record: NewAccountRecord) -> Result<InsertOutcome> {
        let query = r"
            INSERT INTO userinfo
                (username, password, name, phonenumber, email, birth)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, password, name, phonenumber, email, birth
        ";
        let row = sqlx::query(query)
            .bind(&record.username)
            .bind(&record.password_hash)
            .bind(&record.name)
            .bind(&record.phone_number)
            .bind(&record.email)
            .bind(&record.birth)
            .fetch_one(&self.pool)
            .instrument(query_span("INSERT", query))
            .await;

        match row {
            Ok(row) => Ok(InsertOutcome::Created(account_from_row(&row))),
            Err(err) if is_unique_violation(&err) => Ok(InsertOutcome::Conflict),
            Err(err) => Err(err).context("failed to insert account"),
        }
    }

    async fn find(&self, username: &str) -> Result<Option<Account>> {
        let row = sqlx::query(SELECT_ACCOUNT)
            .bind(username)
            .fetch_optional(&self.pool)
            .instrument(query_span("SELECT", SELECT_ACCOUNT))
            .await
            .context("failed to find account")?;

        Ok(row.as_ref().map(account_from_row))
    }

    async fn update_name(&self, username: &str, name: &str) -> Result<bool> {
        let query = "UPDATE userinfo SET name = $2 WHERE username = $1";
        let result = sqlx::query(query)
            .bind(username)
            .bind(name)
            .execute(&self.pool)
            .instrument(query_span("UPDATE", query))
            .await
            .context("failed to update account name")?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, username: &str) -> Result<bool> {
        let query = "DELETE FROM userinfo WHERE username = $1";
        let result = sqlx::query(query)
            .bind(username)
            .execute(&self.pool)
            .instrument(query_span("DELETE", query))
            .await
            .context("failed to delete account")?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        let acquire_span = info_span!(
            "db.acquire",
            db.system = "postgresql",
            db.operation = "ACQUIRE"
        );
        let mut conn = self
            .pool
            .acquire()
            .instrument(acquire_span)
            .await
            .context("failed to acquire database connection")?;

        let ping_span = info_span!("db.ping", db.system = "postgresql", db.operation = "PING");
        conn.ping()
            .instrument(ping_span)
            .await
            .context("failed to ping database")
    }
}
