use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use reelscout_core::location::{
    filter_locations, validate_location, CreateLocationRequest, ListLocationsQuery, Location,
    UpdateLocationRequest,
};
use reelscout_core::project::TenantId;
use reelscout_core::storage::RepositoryError;

use crate::{
    context::RequestContext,
    handlers::{projects::load_project, AppError},
    state::AppState,
};

/// Loads a location of the calling tenant or fails with `NotFound`.
pub(crate) async fn load_location(
    state: &AppState,
    tenant_id: TenantId,
    id: Uuid,
) -> Result<Location, AppError> {
    state
        .location_repo
        .get_location(tenant_id, id)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Location", id).into())
}

/// List a project's locations (GET /api/projects/{id}/locations).
///
/// Supports `?status=` and `?include_rejected=`.
pub async fn list_locations(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(project_id): Path<Uuid>,
    Query(query): Query<ListLocationsQuery>,
) -> Result<Json<Vec<Location>>, AppError> {
    load_project(&state, ctx.tenant_id, project_id).await?;

    let locations = state
        .location_repo
        .list_locations(ctx.tenant_id, project_id)
        .await?;

    Ok(Json(
        filter_locations(&locations, &query)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

/// Add a location to a project (POST /api/projects/{id}/locations).
pub async fn create_location(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<impl IntoResponse, AppError> {
    load_project(&state, ctx.tenant_id, project_id).await?;

    let location = payload.into_location(ctx.tenant_id, project_id);
    validate_location(&location)?;
    state.location_repo.create_location(&location).await?;

    tracing::info!(
        request_id = %ctx.request_id,
        project_id = %project_id,
        location_id = %location.id,
        name = %location.name,
        "Created location"
    );

    Ok((StatusCode::CREATED, Json(location)))
}

/// Get a location by ID (GET /api/locations/{id}).
pub async fn get_location(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Location>, AppError> {
    Ok(Json(load_location(&state, ctx.tenant_id, id).await?))
}

/// Update a location (PUT /api/locations/{id}).
pub async fn update_location(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLocationRequest>,
) -> Result<Json<Location>, AppError> {
    let mut location = load_location(&state, ctx.tenant_id, id).await?;
    let moved = payload.moves_location(&location);

    payload.apply_to(&mut location);
    validate_location(&location)?;
    state.location_repo.update_location(&location).await?;

    tracing::info!(request_id = %ctx.request_id, location_id = %id, moved, "Updated location");

    Ok(Json(location))
}

/// Delete a location (DELETE /api/locations/{id}).
pub async fn delete_location(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.location_repo.delete_location(ctx.tenant_id, id).await?;

    tracing::info!(request_id = %ctx.request_id, location_id = %id, "Deleted location");

    Ok(StatusCode::NO_CONTENT)
}
