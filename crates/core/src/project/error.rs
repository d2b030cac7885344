use thiserror::Error;

/// Errors that can occur when validating a project.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project name cannot be empty")]
    EmptyName,
    #[error("Project name too long (max 120 characters)")]
    NameTooLong,
    #[error("Daily budget must be a positive amount")]
    InvalidBudget,
    #[error("Invalid production base coordinates")]
    InvalidBase,
    #[error("Shoot window must end on or after its start date")]
    InvalidShootWindow,
}
