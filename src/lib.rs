//! # Userinfo (user account service)
//!
//! `userinfo` stores user accounts in a single `userinfo` table and exposes
//! signup, login, read, update and delete over HTTP.
//!
//! ## Accounts
//!
//! - **Usernames** are unique and matched exactly; no case folding or
//!   trimming is applied. Uniqueness is enforced by the storage layer, so two
//!   concurrent signups for the same name produce one account.
//! - **Passwords** are stored as salted Argon2id PHC strings and verified by
//!   re-deriving the hash. Neither the plaintext nor the hash is ever returned
//!   or logged.
//! - **Profile fields** (`name`, `phonenumber`, `email`, `birth`) are required
//!   but not format-checked. Only `name` can be changed after signup.
//!
//! ## Storage
//!
//! Accounts live in PostgreSQL (`postgres://` DSN) or, for development, in
//! process memory (`memory://`). Each operation is a single statement.

pub mod account;
pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}
