//! File-backed storage for user profiles and draft history.
//!
//! Profiles live in a single JSON file that is read and rewritten
//! wholesale on every update. That keeps the store dependency-free and
//! easy to inspect, at the cost of last-writer-wins semantics when two
//! processes update the same file concurrently. A single assistant
//! process never races with itself because every mutation is one
//! read-modify-write sequence.
//!
//! # Example
//!
//! ```no_run
//! use profile_store::ProfileStore;
//!
//! # async fn run() -> Result<(), profile_store::StoreError> {
//! let store = ProfileStore::new("profiles.json");
//! store
//!     .append_draft("u1", "Q3 report", "info_request", "formal")
//!     .await?;
//! let profile = store.load("u1").await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

pub use error::{Result, StoreError};
pub use store::ProfileStore;
