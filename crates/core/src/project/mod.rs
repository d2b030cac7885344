mod error;
mod operations;
mod requests;
mod types;

pub use error::ProjectError;
pub use operations::validate_project;
pub use requests::{CreateProjectRequest, ProjectField, UpdateProjectRequest};
pub use types::{Project, TenantId};
