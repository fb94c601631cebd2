//! `curio-store` — persistence layer for the catalog.
//!
//! Store traits plus two backends: an in-memory table set (tests/dev) and
//! Postgres (production). Both enforce the same contract: atomic mutations,
//! cascade delete of items with their category, and a unique email guard.

pub mod error;
pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use error::StoreError;
pub use in_memory::InMemoryStore;
pub use postgres::PostgresStore;
pub use traits::{CatalogStore, IdentityStore, StoreResult};
