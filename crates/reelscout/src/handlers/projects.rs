use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use reelscout_core::project::{
    validate_project, CreateProjectRequest, Project, TenantId, UpdateProjectRequest,
};
use reelscout_core::storage::RepositoryError;

use crate::{context::RequestContext, handlers::AppError, state::AppState};

/// Loads a project of the calling tenant or fails with `NotFound`.
pub(crate) async fn load_project(
    state: &AppState,
    tenant_id: TenantId,
    id: Uuid,
) -> Result<Project, AppError> {
    state
        .project_repo
        .get_project(tenant_id, id)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Project", id).into())
}

/// List the tenant's projects (GET /api/projects).
pub async fn list_projects(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = state.project_repo.list_projects(ctx.tenant_id).await?;
    Ok(Json(projects))
}

/// Create a project (POST /api/projects).
pub async fn create_project(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    let project = payload.into_project(ctx.tenant_id);
    validate_project(&project)?;

    state.project_repo.create_project(&project).await?;

    tracing::info!(
        request_id = %ctx.request_id,
        project_id = %project.id,
        name = %project.name,
        "Created project"
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// Get a project by ID (GET /api/projects/{id}).
pub async fn get_project(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, AppError> {
    Ok(Json(load_project(&state, ctx.tenant_id, id).await?))
}

/// Partially update a project (PUT /api/projects/{id}).
pub async fn update_project(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, AppError> {
    let mut project = load_project(&state, ctx.tenant_id, id).await?;

    payload.apply_to(&mut project);
    validate_project(&project)?;
    state.project_repo.update_project(&project).await?;

    tracing::info!(request_id = %ctx.request_id, project_id = %id, "Updated project");

    Ok(Json(project))
}

/// Delete a project (DELETE /api/projects/{id}).
///
/// Also deletes the project's locations and saved comparisons.
pub async fn delete_project(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    load_project(&state, ctx.tenant_id, id).await?;

    let locations = state
        .location_repo
        .delete_project_locations(ctx.tenant_id, id)
        .await?;
    let comparisons = state
        .comparison_repo
        .delete_project_comparisons(ctx.tenant_id, id)
        .await?;
    state.project_repo.delete_project(ctx.tenant_id, id).await?;

    tracing::info!(
        request_id = %ctx.request_id,
        project_id = %id,
        locations,
        comparisons,
        "Deleted project"
    );

    Ok(StatusCode::NO_CONTENT)
}
