//! SQLite schema definitions and SQL query constants.
//!
//! Every statement that reads or changes a row filters on `tenant_id`, so a
//! row owned by another tenant behaves as if it did not exist.

/// Enables foreign keys and creates all tables.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS projects (
    id TEXT PRIMARY KEY,
    tenant_id TEXT NOT NULL,
    name TEXT NOT NULL,
    description TEXT,
    base_latitude REAL,
    base_longitude REAL,
    window_start TEXT,
    window_end TEXT,
    daily_budget REAL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS locations (
    id TEXT PRIMARY KEY,
    tenant_id TEXT NOT NULL,
    project_id TEXT NOT NULL,
    name TEXT NOT NULL,
    address TEXT,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    daily_rate REAL,
    permit TEXT NOT NULL,
    parking_spaces INTEGER NOT NULL DEFAULT 0,
    power_available INTEGER NOT NULL DEFAULT 0,
    restrooms INTEGER NOT NULL DEFAULT 0,
    holding_area INTEGER NOT NULL DEFAULT 0,
    status TEXT NOT NULL,
    notes TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (project_id) REFERENCES projects(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS comparisons (
    id TEXT PRIMARY KEY,
    tenant_id TEXT NOT NULL,
    project_id TEXT NOT NULL,
    label TEXT,
    result TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (project_id) REFERENCES projects(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_projects_tenant ON projects(tenant_id);
CREATE INDEX IF NOT EXISTS idx_locations_project ON locations(tenant_id, project_id);
CREATE INDEX IF NOT EXISTS idx_comparisons_project ON comparisons(tenant_id, project_id);
"#;

const PROJECT_COLUMNS: &str = "id, tenant_id, name, description, base_latitude, base_longitude, \
    window_start, window_end, daily_budget, created_at, updated_at";

// Project queries
pub const INSERT_PROJECT: &str = r#"
INSERT INTO projects (id, tenant_id, name, description, base_latitude, base_longitude,
                      window_start, window_end, daily_budget, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
"#;

pub fn select_project_by_id() -> String {
    format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE tenant_id = ?1 AND id = ?2")
}

pub fn select_projects_by_tenant() -> String {
    format!(
        "SELECT {PROJECT_COLUMNS} FROM projects WHERE tenant_id = ?1 ORDER BY created_at ASC, id ASC"
    )
}

pub const UPDATE_PROJECT: &str = r#"
UPDATE projects
SET name = ?3, description = ?4, base_latitude = ?5, base_longitude = ?6,
    window_start = ?7, window_end = ?8, daily_budget = ?9, updated_at = ?10
WHERE tenant_id = ?1 AND id = ?2
"#;

pub const DELETE_PROJECT: &str = r#"
DELETE FROM projects
WHERE tenant_id = ?1 AND id = ?2
"#;

const LOCATION_COLUMNS: &str = "id, tenant_id, project_id, name, address, latitude, longitude, \
    daily_rate, permit, parking_spaces, power_available, restrooms, holding_area, status, notes, \
    created_at, updated_at";

// Location queries
pub const INSERT_LOCATION: &str = r#"
INSERT INTO locations (id, tenant_id, project_id, name, address, latitude, longitude,
                       daily_rate, permit, parking_spaces, power_available, restrooms,
                       holding_area, status, notes, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
"#;

pub fn select_location_by_id() -> String {
    format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE tenant_id = ?1 AND id = ?2")
}

pub fn select_locations_by_project() -> String {
    format!(
        "SELECT {LOCATION_COLUMNS} FROM locations WHERE tenant_id = ?1 AND project_id = ?2 \
         ORDER BY created_at ASC, id ASC"
    )
}

pub const UPDATE_LOCATION: &str = r#"
UPDATE locations
SET name = ?3, address = ?4, latitude = ?5, longitude = ?6, daily_rate = ?7, permit = ?8,
    parking_spaces = ?9, power_available = ?10, restrooms = ?11, holding_area = ?12,
    status = ?13, notes = ?14, updated_at = ?15
WHERE tenant_id = ?1 AND id = ?2
"#;

pub const DELETE_LOCATION: &str = r#"
DELETE FROM locations
WHERE tenant_id = ?1 AND id = ?2
"#;

pub const DELETE_LOCATIONS_BY_PROJECT: &str = r#"
DELETE FROM locations
WHERE tenant_id = ?1 AND project_id = ?2
"#;

// Comparison queries
pub const INSERT_COMPARISON: &str = r#"
INSERT INTO comparisons (id, tenant_id, project_id, label, result, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_COMPARISON_BY_ID: &str = r#"
SELECT id, tenant_id, project_id, label, result, created_at
FROM comparisons
WHERE tenant_id = ?1 AND id = ?2
"#;

pub const SELECT_COMPARISONS_BY_PROJECT: &str = r#"
SELECT id, tenant_id, project_id, label, result, created_at
FROM comparisons
WHERE tenant_id = ?1 AND project_id = ?2
ORDER BY created_at DESC, id ASC
"#;

pub const DELETE_COMPARISON: &str = r#"
DELETE FROM comparisons
WHERE tenant_id = ?1 AND id = ?2
"#;

pub const DELETE_COMPARISONS_BY_PROJECT: &str = r#"
DELETE FROM comparisons
WHERE tenant_id = ?1 AND project_id = ?2
"#;
