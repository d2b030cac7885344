//! Axum extractor for RequestContext.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use reelscout_core::project::TenantId;
use uuid::Uuid;

use super::types::{RequestContext, RequestId};

pub const TENANT_HEADER: &str = "x-tenant-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Why a request carried no usable tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantRejection {
    Missing,
    Invalid(String),
}

impl IntoResponse for TenantRejection {
    fn into_response(self) -> Response {
        let message = match self {
            TenantRejection::Missing => format!("Missing {TENANT_HEADER} header"),
            TenantRejection::Invalid(value) => {
                format!("Invalid {TENANT_HEADER} header: {value:?} is not a UUID")
            }
        };
        (StatusCode::BAD_REQUEST, message).into_response()
    }
}

fn extract_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(RequestId::from_uuid)
        .unwrap_or_else(RequestId::new)
}

fn extract_tenant_id(headers: &HeaderMap) -> Result<TenantId, TenantRejection> {
    let value = headers
        .get(TENANT_HEADER)
        .ok_or(TenantRejection::Missing)?;
    let value = value
        .to_str()
        .map_err(|_| TenantRejection::Invalid(String::from_utf8_lossy(value.as_bytes()).into()))?;
    value
        .parse()
        .map_err(|_| TenantRejection::Invalid(value.to_string()))
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = TenantRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = extract_request_id(&parts.headers);
        let tenant_id = extract_tenant_id(&parts.headers).inspect_err(|rejection| {
            tracing::debug!(request_id = %request_id, ?rejection, "Rejected request without tenant");
        })?;

        Ok(RequestContext {
            tenant_id,
            request_id,
        })
    }
}
