use secrecy::SecretString;
use std::fmt;

/// A stored account row.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub birth: String,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"***")
            .field("name", &self.name)
            .field("phone_number", &self.phone_number)
            .field("email", &self.email)
            .field("birth", &self.birth)
            .finish()
    }
}

/// Signup input, password still in plaintext.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: SecretString,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub birth: String,
}

/// Row handed to the repository once the password has been hashed.
#[derive(Clone)]
pub struct NewAccountRecord {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub birth: String,
}

impl NewAccountRecord {
    pub(super) fn from_input(input: NewAccount, password_hash: String) -> Self {
        Self {
            username: input.username,
            password_hash,
            name: input.name,
            phone_number: input.phone_number,
            email: input.email,
            birth: input.birth,
        }
    }
}

impl fmt::Debug for NewAccountRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccountRecord")
            .field("username", &self.username)
            .field("password_hash", &"***")
            .finish_non_exhaustive()
    }
}

/// Public identity returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub name: String,
}

impl From<Account> for Identity {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
            name: account.name,
        }
    }
}
