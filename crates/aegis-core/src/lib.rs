//! Aegis Core: domain models, error taxonomy, query options and the
//! collaborator traits shared by every other crate.

pub mod boxing;
pub mod context;
pub mod error;
pub mod models;
pub mod query;
pub mod repository;
pub mod storage;

pub use context::CallContext;
pub use error::{AegisError, AegisResult, StorageError, StorageResult};
pub use query::{PageResult, PaginatedResult, QueryOptions};

/// Unix timestamp in seconds.
pub type Timestamp = i64;

/// Current time as a [`Timestamp`].
pub fn now() -> Timestamp {
    chrono::Utc::now().timestamp()
}
