//! SQLite repository implementation.
//!
//! Implements the repository traits from `reelscout_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use reelscout_core::comparison::Comparison;
use reelscout_core::location::Location;
use reelscout_core::project::{Project, TenantId};
use reelscout_core::storage::{
    ComparisonRepository, LocationRepository, ProjectRepository, RepositoryError, Result,
};

use super::conversions::{
    format_date, format_datetime, result_to_json, row_to_comparison, row_to_location,
    row_to_project,
};
use super::error::map_tokio_rusqlite_error;
use super::schema;

fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Fails with `QueryReturnedNoRows` when a write touched nothing.
fn expect_rows(rows: usize) -> std::result::Result<(), tokio_rusqlite::Error> {
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// SQLite-based repository implementation.
///
/// A single connection serves all three repositories. Foreign keys cascade
/// project deletes to locations and comparisons.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a database file and initializes the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a repository backed by an in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// ProjectRepository implementation
// ============================================================================

#[async_trait]
impl ProjectRepository for SqliteRepository {
    async fn get_project(&self, tenant_id: TenantId, id: Uuid) -> Result<Option<Project>> {
        let tenant = tenant_id.to_string();
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(&schema::select_project_by_id())
                    .map_err(wrap_err)?;
                match stmt.query_row([&tenant, &id_str], row_to_project) {
                    Ok(project) => Ok(Some(project)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Project", id.to_string()))
    }

    async fn list_projects(&self, tenant_id: TenantId) -> Result<Vec<Project>> {
        let tenant = tenant_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(&schema::select_projects_by_tenant())
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([&tenant], row_to_project).map_err(wrap_err)?;

                let mut projects = Vec::new();
                for row_result in rows {
                    projects.push(row_result.map_err(wrap_err)?);
                }
                Ok(projects)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create_project(&self, project: &Project) -> Result<()> {
        let id = project.id.to_string();
        let tenant = project.tenant_id.to_string();
        let name = project.name.clone();
        let description = project.description.clone();
        let base_latitude = project.base.map(|b| b.latitude);
        let base_longitude = project.base.map(|b| b.longitude);
        let window_start = project.shoot_window.as_ref().map(|w| format_date(&w.start));
        let window_end = project.shoot_window.as_ref().map(|w| format_date(&w.end));
        let daily_budget = project.daily_budget;
        let created_at = format_datetime(&project.created_at);
        let updated_at = format_datetime(&project.updated_at);
        let project_id = project.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_PROJECT,
                    rusqlite::params![
                        id,
                        tenant,
                        name,
                        description,
                        base_latitude,
                        base_longitude,
                        window_start,
                        window_end,
                        daily_budget,
                        created_at,
                        updated_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Project", project_id))
    }

    async fn update_project(&self, project: &Project) -> Result<()> {
        let id = project.id.to_string();
        let tenant = project.tenant_id.to_string();
        let name = project.name.clone();
        let description = project.description.clone();
        let base_latitude = project.base.map(|b| b.latitude);
        let base_longitude = project.base.map(|b| b.longitude);
        let window_start = project.shoot_window.as_ref().map(|w| format_date(&w.start));
        let window_end = project.shoot_window.as_ref().map(|w| format_date(&w.end));
        let daily_budget = project.daily_budget;
        let updated_at = format_datetime(&project.updated_at);
        let project_id = project.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_PROJECT,
                        rusqlite::params![
                            tenant,
                            id,
                            name,
                            description,
                            base_latitude,
                            base_longitude,
                            window_start,
                            window_end,
                            daily_budget,
                            updated_at
                        ],
                    )
                    .map_err(wrap_err)?;
                expect_rows(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Project", project_id))
    }

    async fn delete_project(&self, tenant_id: TenantId, id: Uuid) -> Result<()> {
        let tenant = tenant_id.to_string();
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_PROJECT, [&tenant, &id_str])
                    .map_err(wrap_err)?;
                expect_rows(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Project", id.to_string()))
    }
}

// ============================================================================
// LocationRepository implementation
// ============================================================================

#[async_trait]
impl LocationRepository for SqliteRepository {
    async fn get_location(&self, tenant_id: TenantId, id: Uuid) -> Result<Option<Location>> {
        let tenant = tenant_id.to_string();
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(&schema::select_location_by_id())
                    .map_err(wrap_err)?;
                match stmt.query_row([&tenant, &id_str], row_to_location) {
                    Ok(location) => Ok(Some(location)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location", id.to_string()))
    }

    async fn list_locations(&self, tenant_id: TenantId, project_id: Uuid) -> Result<Vec<Location>> {
        let tenant = tenant_id.to_string();
        let project = project_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(&schema::select_locations_by_project())
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&tenant, &project], row_to_location)
                    .map_err(wrap_err)?;

                let mut locations = Vec::new();
                for row_result in rows {
                    locations.push(row_result.map_err(wrap_err)?);
                }
                Ok(locations)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create_location(&self, location: &Location) -> Result<()> {
        let id = location.id.to_string();
        let tenant = location.tenant_id.to_string();
        let project = location.project_id.to_string();
        let name = location.name.clone();
        let address = location.address.clone();
        let latitude = location.coordinates.latitude;
        let longitude = location.coordinates.longitude;
        let daily_rate = location.daily_rate;
        let permit = location.permit.as_str();
        let facilities = location.facilities;
        let status = location.status.as_str();
        let notes = location.notes.clone();
        let created_at = format_datetime(&location.created_at);
        let updated_at = format_datetime(&location.updated_at);
        let location_id = location.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_LOCATION,
                    rusqlite::params![
                        id,
                        tenant,
                        project,
                        name,
                        address,
                        latitude,
                        longitude,
                        daily_rate,
                        permit,
                        facilities.parking_spaces,
                        facilities.power_available,
                        facilities.restrooms,
                        facilities.holding_area,
                        status,
                        notes,
                        created_at,
                        updated_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location", location_id))
    }

    async fn update_location(&self, location: &Location) -> Result<()> {
        let id = location.id.to_string();
        let tenant = location.tenant_id.to_string();
        let name = location.name.clone();
        let address = location.address.clone();
        let latitude = location.coordinates.latitude;
        let longitude = location.coordinates.longitude;
        let daily_rate = location.daily_rate;
        let permit = location.permit.as_str();
        let facilities = location.facilities;
        let status = location.status.as_str();
        let notes = location.notes.clone();
        let updated_at = format_datetime(&location.updated_at);
        let location_id = location.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_LOCATION,
                        rusqlite::params![
                            tenant,
                            id,
                            name,
                            address,
                            latitude,
                            longitude,
                            daily_rate,
                            permit,
                            facilities.parking_spaces,
                            facilities.power_available,
                            facilities.restrooms,
                            facilities.holding_area,
                            status,
                            notes,
                            updated_at
                        ],
                    )
                    .map_err(wrap_err)?;
                expect_rows(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location", location_id))
    }

    async fn delete_location(&self, tenant_id: TenantId, id: Uuid) -> Result<()> {
        let tenant = tenant_id.to_string();
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_LOCATION, [&tenant, &id_str])
                    .map_err(wrap_err)?;
                expect_rows(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location", id.to_string()))
    }

    async fn delete_project_locations(
        &self,
        tenant_id: TenantId,
        project_id: Uuid,
    ) -> Result<usize> {
        let tenant = tenant_id.to_string();
        let project = project_id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_LOCATIONS_BY_PROJECT, [&tenant, &project])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// ComparisonRepository implementation
// ============================================================================

#[async_trait]
impl ComparisonRepository for SqliteRepository {
    async fn get_comparison(&self, tenant_id: TenantId, id: Uuid) -> Result<Option<Comparison>> {
        let tenant = tenant_id.to_string();
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_COMPARISON_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([&tenant, &id_str], row_to_comparison) {
                    Ok(comparison) => Ok(Some(comparison)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Comparison", id.to_string()))
    }

    async fn list_comparisons(
        &self,
        tenant_id: TenantId,
        project_id: Uuid,
    ) -> Result<Vec<Comparison>> {
        let tenant = tenant_id.to_string();
        let project = project_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_COMPARISONS_BY_PROJECT)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&tenant, &project], row_to_comparison)
                    .map_err(wrap_err)?;

                let mut comparisons = Vec::new();
                for row_result in rows {
                    comparisons.push(row_result.map_err(wrap_err)?);
                }
                Ok(comparisons)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create_comparison(&self, comparison: &Comparison) -> Result<()> {
        let id = comparison.id.to_string();
        let tenant = comparison.tenant_id.to_string();
        let project = comparison.project_id.to_string();
        let label = comparison.label.clone();
        let result = result_to_json(&comparison.result)?;
        let created_at = format_datetime(&comparison.created_at);
        let comparison_id = comparison.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_COMPARISON,
                    rusqlite::params![id, tenant, project, label, result, created_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Comparison", comparison_id))
    }

    async fn delete_comparison(&self, tenant_id: TenantId, id: Uuid) -> Result<()> {
        let tenant = tenant_id.to_string();
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_COMPARISON, [&tenant, &id_str])
                    .map_err(wrap_err)?;
                expect_rows(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Comparison", id.to_string()))
    }

    async fn delete_project_comparisons(
        &self,
        tenant_id: TenantId,
        project_id: Uuid,
    ) -> Result<usize> {
        let tenant = tenant_id.to_string();
        let project = project_id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_COMPARISONS_BY_PROJECT, [&tenant, &project])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}
