//! Functional core for reelscout.
//!
//! Pure domain types and functions for scouting and comparing film locations.
//! Nothing in this crate performs I/O; storage, caching and third-party
//! enrichment are expressed as traits implemented by the server crate.

pub mod cache;
pub mod comparison;
pub mod enrichment;
pub mod location;
pub mod project;
pub mod serde;
pub mod storage;
