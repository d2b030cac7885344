//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `reelscout_core::storage`, selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMaps behind `tokio::sync::RwLock`, nothing persisted
//! - `sqlite`: SQLite storage using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive.
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p reelscout --no-default-features --features sqlite
//! ```

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite' feature. \
    Example: cargo build -p reelscout --no-default-features --features sqlite"
);

pub mod cached;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
