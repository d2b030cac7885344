//! Cache backend implementations.
//!
//! Concrete implementations of `reelscout_core::cache::Cache`. A single
//! instance is shared by the cached repositories and the enrichment service.

pub mod memory;

pub use memory::MemoryCache;
