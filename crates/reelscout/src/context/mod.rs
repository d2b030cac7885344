//! Request-scoped context module.
//!
//! Provides the `RequestContext` extractor: the calling tenant and a request
//! id, complementing the application-scoped `AppState`.

mod extractor;
mod types;

pub use extractor::{TenantRejection, REQUEST_ID_HEADER, TENANT_HEADER};
pub use types::{RequestContext, RequestId};
