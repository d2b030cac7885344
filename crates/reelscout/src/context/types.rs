//! Pure types for request-scoped context.

use reelscout_core::project::TenantId;
use uuid::Uuid;

/// Unique identifier for a request, used for tracing and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request-scoped context available to all `/api` handlers.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    /// Tenant every read and write is scoped to.
    pub tenant_id: TenantId,
    /// Unique request identifier for tracing.
    pub request_id: RequestId,
}
