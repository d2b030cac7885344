use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    context::{REQUEST_ID_HEADER, TENANT_HEADER},
    handlers::{
        comparisons::{
            compare, delete_comparison, get_comparison, list_comparisons, save_comparison,
        },
        enrichment::get_enrichment,
        health::{healthz, livez},
        locations::{create_location, delete_location, get_location, list_locations, update_location},
        projects::{create_project, delete_project, get_project, list_projects, update_project},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(TENANT_HEADER),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ]);

    let api_routes = Router::new()
        // Project routes
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/projects/{id}/locations",
            get(list_locations).post(create_location),
        )
        .route("/projects/{id}/compare", post(compare))
        .route(
            "/projects/{id}/comparisons",
            get(list_comparisons).post(save_comparison),
        )
        // Location routes
        .route(
            "/locations/{id}",
            get(get_location)
                .put(update_location)
                .delete(delete_location),
        )
        .route("/locations/{id}/enrichment", get(get_enrichment))
        // Saved comparisons
        .route(
            "/comparisons/{id}",
            get(get_comparison).delete(delete_comparison),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use reelscout_core::enrichment::Facet;
    use reelscout_core::project::TenantId;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::enrichment::MockEnrichmentProvider;

    struct TestApp {
        router: Router,
        tenant: TenantId,
    }

    impl TestApp {
        fn new() -> Self {
            Self::with_state(AppState::default())
        }

        fn with_state(state: AppState) -> Self {
            Self {
                router: create_app(state, Duration::from_secs(10)),
                tenant: TenantId::new(),
            }
        }

        async fn send_as(
            &self,
            tenant: Option<TenantId>,
            method: Method,
            uri: &str,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut request = Request::builder().method(method).uri(uri);
            if let Some(tenant) = tenant {
                request = request.header(TENANT_HEADER, tenant.to_string());
            }
            let request = match body {
                Some(body) => request
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => request.body(Body::empty()).unwrap(),
            };

            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let value = serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
            (status, value)
        }

        async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            self.send_as(Some(self.tenant), method, uri, body).await
        }

        async fn create_project(&self, body: Value) -> String {
            let (status, project) = self.send(Method::POST, "/api/projects", Some(body)).await;
            assert_eq!(status, StatusCode::CREATED, "{project}");
            project["id"].as_str().unwrap().to_string()
        }

        async fn create_location(&self, project_id: &str, body: Value) -> String {
            let (status, location) = self
                .send(
                    Method::POST,
                    &format!("/api/projects/{project_id}/locations"),
                    Some(body),
                )
                .await;
            assert_eq!(status, StatusCode::CREATED, "{location}");
            location["id"].as_str().unwrap().to_string()
        }

        /// A budgeted project with a base and three locations.
        async fn seeded(&self) -> (String, Vec<String>) {
            let project_id = self
                .create_project(json!({
                    "name": "Coastal Thriller",
                    "base": {"latitude": 43.2965, "longitude": 5.3698},
                    "daily_budget": 3000.0
                }))
                .await;
            let mut ids = Vec::new();
            for (name, lat, lon, rate) in [
                ("Old Port", 43.2951, 5.3740, 1200.0),
                ("Calanques", 43.2100, 5.4500, 2500.0),
                ("Cassis Cliffs", 43.2140, 5.5370, 4000.0),
            ] {
                ids.push(
                    self.create_location(
                        &project_id,
                        json!({
                            "name": name,
                            "coordinates": {"latitude": lat, "longitude": lon},
                            "daily_rate": rate,
                            "facilities": {"parking_spaces": 10, "power_available": true}
                        }),
                    )
                    .await,
                );
            }
            (project_id, ids)
        }
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = TestApp::new();

        let (status, _) = app.send_as(None, Method::GET, "/livez", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, health) = app.send_as(None, Method::GET, "/healthz", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(health["status"], "ok");
        assert_eq!(health["storage"], "inmemory");
        assert_eq!(health["enrichment_provider"], "mock");
    }

    #[tokio::test]
    async fn test_api_requires_tenant_header() {
        let app = TestApp::new();

        let (status, body) = app
            .send_as(None, Method::GET, "/api/projects", None)
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.as_str().unwrap().contains(TENANT_HEADER));
    }

    #[tokio::test]
    async fn test_project_crud() {
        let app = TestApp::new();
        let id = app.create_project(json!({"name": "Night Shift"})).await;

        let (status, projects) = app.send(Method::GET, "/api/projects", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(projects.as_array().unwrap().len(), 1);

        let (status, updated) = app
            .send(
                Method::PUT,
                &format!("/api/projects/{id}"),
                Some(json!({"daily_budget": 1500.0})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Night Shift");
        assert_eq!(updated["daily_budget"], 1500.0);

        let (status, _) = app
            .send(Method::DELETE, &format!("/api/projects/{id}"), None)
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = app.send(Method::GET, &format!("/api/projects/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_project_is_400() {
        let app = TestApp::new();

        let (status, body) = app
            .send(Method::POST, "/api/projects", Some(json!({"name": "   "})))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Project name cannot be empty");
    }

    #[tokio::test]
    async fn test_foreign_tenant_gets_404() {
        let app = TestApp::new();
        let (project_id, location_ids) = app.seeded().await;
        let intruder = Some(TenantId::new());

        for uri in [
            format!("/api/projects/{project_id}"),
            format!("/api/projects/{project_id}/locations"),
            format!("/api/locations/{}", location_ids[0]),
            format!("/api/locations/{}/enrichment", location_ids[0]),
        ] {
            let (status, _) = app.send_as(intruder, Method::GET, &uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }

        let (status, _) = app
            .send_as(
                intruder,
                Method::POST,
                &format!("/api/projects/{project_id}/compare"),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app
            .send_as(intruder, Method::DELETE, &format!("/api/projects/{project_id}"), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_location_filters_and_update() {
        let app = TestApp::new();
        let (project_id, ids) = app.seeded().await;

        let (status, rejected) = app
            .send(
                Method::PUT,
                &format!("/api/locations/{}", ids[2]),
                Some(json!({"status": "rejected"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(rejected["status"], "rejected");

        let list = format!("/api/projects/{project_id}/locations");
        let (_, visible) = app.send(Method::GET, &list, None).await;
        assert_eq!(visible.as_array().unwrap().len(), 2);

        let (_, everything) = app
            .send(Method::GET, &format!("{list}?include_rejected=true"), None)
            .await;
        assert_eq!(everything.as_array().unwrap().len(), 3);

        let (_, only_rejected) = app
            .send(Method::GET, &format!("{list}?status=rejected"), None)
            .await;
        assert_eq!(only_rejected[0]["id"], ids[2].as_str());

        let (status, _) = app
            .send(
                Method::PUT,
                &format!("/api/locations/{}", ids[0]),
                Some(json!({"coordinates": {"latitude": 123.0, "longitude": 0.0}})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_enrichment_endpoint_uses_cache() {
        let provider = Arc::new(MockEnrichmentProvider::new());
        let app = TestApp::with_state(AppState::with_provider(provider.clone()));
        let (_, ids) = app.seeded().await;
        let uri = format!("/api/locations/{}/enrichment", ids[0]);

        let (status, enrichment) = app.send(Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(enrichment["location_id"], ids[0].as_str());
        assert_eq!(provider.calls(), 4);

        app.send(Method::GET, &uri, None).await;
        assert_eq!(provider.calls(), 4);

        app.send(Method::GET, &format!("{uri}?refresh=true"), None)
            .await;
        assert_eq!(provider.calls(), 8);
    }

    #[tokio::test]
    async fn test_compare_ranks_all_active_locations() {
        let app = TestApp::new();
        let (project_id, ids) = app.seeded().await;

        let (status, result) = app
            .send(
                Method::POST,
                &format!("/api/projects/{project_id}/compare"),
                None,
            )
            .await;

        assert_eq!(status, StatusCode::OK, "{result}");
        let ranking = result["ranking"].as_array().unwrap();
        assert_eq!(ranking.len(), 3);
        let ranks: Vec<u64> = ranking.iter().map(|s| s["rank"].as_u64().unwrap()).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        for score in ranking {
            let total = score["total"].as_f64().unwrap();
            assert!((0.0..=100.0).contains(&total));
            assert!(ids.contains(&score["location_id"].as_str().unwrap().to_string()));
        }
        assert_eq!(
            result["recommendation"]["location_id"],
            ranking[0]["location_id"]
        );
    }

    #[tokio::test]
    async fn test_compare_with_degraded_enrichment() {
        let provider = Arc::new(
            MockEnrichmentProvider::new()
                .with_failing(Facet::Hotels)
                .with_failing(Facet::Route),
        );
        let app = TestApp::with_state(AppState::with_provider(provider));
        let (project_id, _) = app.seeded().await;

        let (status, result) = app
            .send(
                Method::POST,
                &format!("/api/projects/{project_id}/compare"),
                Some(json!({})),
            )
            .await;

        assert_eq!(status, StatusCode::OK, "{result}");
        for score in result["ranking"].as_array().unwrap() {
            assert_eq!(score["missing"], json!(["accommodation"]));
            assert!(!score["warnings"].as_array().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_compare_errors() {
        let app = TestApp::new();
        let (project_id, ids) = app.seeded().await;
        let other_project = app.create_project(json!({"name": "Other"})).await;
        let stray = app
            .create_location(
                &other_project,
                json!({"name": "Stray", "coordinates": {"latitude": 1.0, "longitude": 1.0}}),
            )
            .await;
        let uri = format!("/api/projects/{project_id}/compare");

        let (status, _) = app
            .send(Method::POST, &uri, Some(json!({"location_ids": [ids[0]]})))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = app
            .send(
                Method::POST,
                &uri,
                Some(json!({"location_ids": [ids[0], uuid::Uuid::new_v4()]})),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = app
            .send(Method::POST, &uri, Some(json!({"location_ids": [ids[0], stray]})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.as_str().unwrap().contains("different project"));

        let (status, _) = app
            .send(
                Method::POST,
                &uri,
                Some(json!({"weights": {"cost": -1.0}})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let empty = app.create_project(json!({"name": "Empty"})).await;
        let (status, _) = app
            .send(Method::POST, &format!("/api/projects/{empty}/compare"), None)
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_saved_comparisons() {
        let app = TestApp::new();
        let (project_id, ids) = app.seeded().await;
        let collection = format!("/api/projects/{project_id}/comparisons");

        let (status, saved) = app
            .send(
                Method::POST,
                &collection,
                Some(json!({"label": "Cheapest two", "location_ids": [ids[0], ids[1]]})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{saved}");
        assert_eq!(saved["label"], "Cheapest two");
        assert_eq!(saved["result"]["ranking"].as_array().unwrap().len(), 2);
        let saved_id = saved["id"].as_str().unwrap().to_string();

        let (_, listed) = app.send(Method::GET, &collection, None).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let item = format!("/api/comparisons/{saved_id}");
        let (status, fetched) = app.send(Method::GET, &item, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, saved);

        let (status, _) = app
            .send_as(Some(TenantId::new()), Method::GET, &item, None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app.send(Method::DELETE, &item, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = app.send(Method::GET, &item, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_project_cascades() {
        let app = TestApp::new();
        let (project_id, ids) = app.seeded().await;
        let (_, saved) = app
            .send(
                Method::POST,
                &format!("/api/projects/{project_id}/comparisons"),
                None,
            )
            .await;
        let saved_id = saved["id"].as_str().unwrap().to_string();
        // Warm the location cache so the delete has something to invalidate.
        app.send(Method::GET, &format!("/api/locations/{}", ids[0]), None)
            .await;

        let (status, _) = app
            .send(Method::DELETE, &format!("/api/projects/{project_id}"), None)
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        for uri in [
            format!("/api/locations/{}", ids[0]),
            format!("/api/locations/{}", ids[1]),
            format!("/api/comparisons/{saved_id}"),
        ] {
            let (status, _) = app.send(Method::GET, &uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }
}
