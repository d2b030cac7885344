//! In-memory storage backend.
//!
//! Stores everything in HashMaps wrapped in `Arc<RwLock<_>>`. Data is lost
//! when the process exits; used for development, demos and tests.

mod repository;

pub use repository::InMemoryRepository;
