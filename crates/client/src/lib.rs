//! reelscout_client - CLI client for the reelscout API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::ReelscoutClient;
pub use error::{ClientError, Result};
