use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use reelscout_core::comparison::{
    compare_locations, select_candidates, CompareQuery, Comparison, ComparisonError,
    ComparisonRequest, ComparisonResult, SaveComparisonRequest,
};
use reelscout_core::storage::RepositoryError;

use crate::{
    context::RequestContext,
    handlers::{projects::load_project, AppError},
    state::AppState,
};

/// Scores the requested locations of a project.
async fn run_comparison(
    state: &AppState,
    ctx: &RequestContext,
    project_id: Uuid,
    request: &ComparisonRequest,
    refresh: bool,
) -> Result<ComparisonResult, AppError> {
    request.validate()?;
    let project = load_project(state, ctx.tenant_id, project_id).await?;
    let locations = state
        .location_repo
        .list_locations(ctx.tenant_id, project_id)
        .await?;

    // Tell "in another project" apart from "does not exist".
    for id in &request.location_ids {
        if !locations.iter().any(|l| l.id == *id)
            && state
                .location_repo
                .get_location(ctx.tenant_id, *id)
                .await?
                .is_some()
        {
            return Err(ComparisonError::ForeignLocation(*id).into());
        }
    }

    let candidates = select_candidates(request, locations)?;
    let enrichments = state
        .enrichment
        .enrich_many(&candidates, &project, refresh || request.refresh)
        .await;
    let result = compare_locations(
        &project,
        &candidates,
        &enrichments,
        &request.effective_weights(),
    );

    tracing::info!(
        request_id = %ctx.request_id,
        project_id = %project_id,
        locations = candidates.len(),
        recommended = ?result.recommendation.as_ref().map(|r| r.location_id),
        "Compared locations"
    );

    Ok(result)
}

/// Compare locations without saving (POST /api/projects/{id}/compare).
///
/// The body is optional; without one every non-rejected location is compared
/// with the default weights.
pub async fn compare(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(project_id): Path<Uuid>,
    Query(query): Query<CompareQuery>,
    payload: Option<Json<ComparisonRequest>>,
) -> Result<Json<ComparisonResult>, AppError> {
    let request = payload.map(|Json(r)| r).unwrap_or_default();
    let result = run_comparison(&state, &ctx, project_id, &request, query.refresh).await?;
    Ok(Json(result))
}

/// List saved comparisons, newest first (GET /api/projects/{id}/comparisons).
pub async fn list_comparisons(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Vec<Comparison>>, AppError> {
    load_project(&state, ctx.tenant_id, project_id).await?;

    let comparisons = state
        .comparison_repo
        .list_comparisons(ctx.tenant_id, project_id)
        .await?;

    Ok(Json(comparisons))
}

/// Run a comparison and save it (POST /api/projects/{id}/comparisons).
pub async fn save_comparison(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(project_id): Path<Uuid>,
    Query(query): Query<CompareQuery>,
    payload: Option<Json<SaveComparisonRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let SaveComparisonRequest { label, comparison } =
        payload.map(|Json(r)| r).unwrap_or_default();

    let result = run_comparison(&state, &ctx, project_id, &comparison, query.refresh).await?;
    let saved = Comparison::new(ctx.tenant_id, result, label);
    state.comparison_repo.create_comparison(&saved).await?;

    tracing::info!(
        request_id = %ctx.request_id,
        project_id = %project_id,
        comparison_id = %saved.id,
        "Saved comparison"
    );

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Get a saved comparison (GET /api/comparisons/{id}).
pub async fn get_comparison(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Comparison>, AppError> {
    state
        .comparison_repo
        .get_comparison(ctx.tenant_id, id)
        .await?
        .map(Json)
        .ok_or_else(|| RepositoryError::not_found("Comparison", id).into())
}

/// Delete a saved comparison (DELETE /api/comparisons/{id}).
pub async fn delete_comparison(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .comparison_repo
        .delete_comparison(ctx.tenant_id, id)
        .await?;

    tracing::info!(request_id = %ctx.request_id, comparison_id = %id, "Deleted comparison");

    Ok(StatusCode::NO_CONTENT)
}
