//! SQLite storage backend.
//!
//! `rusqlite` for the queries, `tokio-rusqlite` to run them off the async
//! runtime on a dedicated connection thread.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
