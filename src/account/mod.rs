//! Account store: credential checks and account mutations over a repository.

pub mod error;
pub mod memory;
pub mod model;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod store;

pub use self::error::AccountError;
pub use self::memory::MemoryRepository;
pub use self::model::{Account, Identity, NewAccount};
pub use self::password::{HashCost, Hasher};
pub use self::postgres::PgRepository;
pub use self::repository::{AccountRepository, InsertOutcome};
pub use self::store::AccountStore;
