pub mod comparisons;
pub mod enrichment;
pub mod error;
pub mod health;
pub mod locations;
pub mod projects;

pub use error::AppError;
