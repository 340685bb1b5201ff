use super::{
    error::AccountError,
    model::{Account, Identity, NewAccount, NewAccountRecord},
    password::Hasher,
    repository::{AccountRepository, InsertOutcome},
};
use anyhow::anyhow;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::{debug, info, instrument};

type Result<T> = std::result::Result<T, AccountError>;

/// Account operations on top of a repository and a password hasher.
#[derive(Clone)]
pub struct AccountStore {
    repository: Arc<dyn AccountRepository>,
    hasher: Hasher,
}

impl std::fmt::Debug for AccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountStore")
            .field("hasher", &self.hasher)
            .finish_non_exhaustive()
    }
}

impl AccountStore {
    #[must_use]
    pub fn new(repository: Arc<dyn AccountRepository>, hasher: Hasher) -> Self {
        Self { repository, hasher }
    }

    /// Register a new account.
    ///
    /// # Errors
    /// `InvalidInput` for an empty username or password, `DuplicateUsername`
    /// when the username is taken (including a concurrent create winning the
    /// race), `Storage`/`Hashing` for internal failures.
    #[instrument(skip_all, fields(username = %input.username))]
    pub async fn create(&self, input: NewAccount) -> Result<Account> {
        if input.username.is_empty() {
            return Err(AccountError::InvalidInput("username"));
        }
        if input.password.expose_secret().is_empty() {
            return Err(AccountError::InvalidInput("password"));
        }

        if self
            .repository
            .exists(&input.username)
            .await
            .map_err(AccountError::Storage)?
        {
            debug!("username already registered");
            return Err(AccountError::DuplicateUsername);
        }

        let password_hash = self.hash_password(input.password.clone()).await?;
        let record = NewAccountRecord::from_input(input, password_hash);

        match self
            .repository
            .insert(record)
            .await
            .map_err(AccountError::Storage)?
        {
            InsertOutcome::Created(account) => {
                info!(id = account.id, "account created");
                Ok(account)
            }
            InsertOutcome::Conflict => {
                debug!("username registered concurrently");
                Err(AccountError::DuplicateUsername)
            }
        }
    }

    /// Check a username/password pair.
    ///
    /// # Errors
    /// `NotFound` when no account has this username, `InvalidPassword` when
    /// the password does not match the stored hash.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: SecretString) -> Result<Identity> {
        let account = self.find(username).await?;

        if self
            .verify_password(account.password_hash.clone(), password)
            .await?
        {
            debug!("password verified");
            Ok(Identity::from(account))
        } else {
            debug!("password mismatch");
            Err(AccountError::InvalidPassword)
        }
    }

    /// Return the display name of an account.
    ///
    /// # Errors
    /// `NotFound` when no account has this username.
    #[instrument(skip(self))]
    pub async fn get(&self, username: &str) -> Result<String> {
        self.find(username).await.map(|account| account.name)
    }

    /// Permanently remove an account.
    ///
    /// # Errors
    /// `NotFound` when no account has this username, so a second delete fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, username: &str) -> Result<()> {
        if self
            .repository
            .delete(username)
            .await
            .map_err(AccountError::Storage)?
        {
            info!("account deleted");
            Ok(())
        } else {
            Err(AccountError::NotFound)
        }
    }

    /// Overwrite the display name of an account.
    ///
    /// # Errors
    /// `NotFound` when no account has this username.
    #[instrument(skip(self, new_name))]
    pub async fn update_name(&self, username: &str, new_name: &str) -> Result<()> {
        if self
            .repository
            .update_name(username, new_name)
            .await
            .map_err(AccountError::Storage)?
        {
            debug!("account name updated");
            Ok(())
        } else {
            Err(AccountError::NotFound)
        }
    }

    /// Check that storage is reachable.
    ///
    /// # Errors
    /// `Storage` when the repository does not answer.
    pub async fn ping(&self) -> Result<()> {
        self.repository.ping().await.map_err(AccountError::Storage)
    }

    async fn find(&self, username: &str) -> Result<Account> {
        self.repository
            .find(username)
            .await
            .map_err(AccountError::Storage)?
            .ok_or(AccountError::NotFound)
    }

    // argon2 is CPU bound, keep it off the async workers
    async fn hash_password(&self, password: SecretString) -> Result<String> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AccountError::Hashing(anyhow!("hashing task failed: {e}")))?
            .map_err(AccountError::Hashing)
    }

    async fn verify_password(&self, stored_hash: String, candidate: SecretString) -> Result<bool> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&stored_hash, &candidate))
            .await
            .map_err(|e| AccountError::Hashing(anyhow!("verification task failed: {e}")))?
            .map_err(AccountError::Hashing)
    }
}
