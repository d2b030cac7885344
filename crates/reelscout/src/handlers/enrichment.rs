use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use reelscout_core::comparison::CompareQuery;
use reelscout_core::enrichment::LocationEnrichment;

use crate::{
    context::RequestContext,
    handlers::{locations::load_location, projects::load_project, AppError},
    state::AppState,
};

/// Third-party data for one location (GET /api/locations/{id}/enrichment).
///
/// `?refresh=true` skips cached facets.
pub async fn get_enrichment(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<Uuid>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<LocationEnrichment>, AppError> {
    let location = load_location(&state, ctx.tenant_id, id).await?;
    let project = load_project(&state, ctx.tenant_id, location.project_id).await?;

    let enrichment = state
        .enrichment
        .enrich(&location, &project, query.refresh)
        .await;

    if !enrichment.warnings.is_empty() {
        tracing::debug!(
            request_id = %ctx.request_id,
            location_id = %id,
            warnings = enrichment.warnings.len(),
            "Served partial enrichment"
        );
    }

    Ok(Json(enrichment))
}
