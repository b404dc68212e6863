pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::placements::{handlers, EXPORT_DOWNLOAD_PATH};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/placements",
            get(handlers::handle_list)
                .post(handlers::handle_add)
                .delete(handlers::handle_remove),
        )
        .route(
            "/api/v1/placements/labels",
            get(handlers::handle_removal_options),
        )
        .route("/api/v1/placements/chart", get(handlers::handle_chart))
        .route(
            "/api/v1/eligibility",
            post(handlers::handle_check_eligibility),
        )
        .route(EXPORT_DOWNLOAD_PATH, get(handlers::handle_download_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::storage::CsvPlacementStore;

    fn app(dir: &tempfile::TempDir) -> Router {
        let config = Config {
            placements_csv: dir.path().join("placements.csv"),
            eligible_export_csv: dir.path().join("eligible_companies.csv"),
            port: 0,
            rust_log: "info".to_string(),
        };
        let store = CsvPlacementStore::new(
            config.placements_csv.clone(),
            config.eligible_export_csv.clone(),
        );
        build_router(AppState {
            store: Arc::new(store),
            config,
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = send(app, method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn acme() -> Value {
        json!({
            "company": "Acme",
            "role": "Engineer",
            "package": 10.0,
            "eligibility_cgpa": 7.5,
            "backlogs_allowed": 1,
            "eligibility_10th": 60.0,
            "eligibility_12th": 60.0
        })
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send_json(&app(&dir), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_empty_reports_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send_json(&app(&dir), Method::GET, "/api/v1/placements", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "no_data");
    }

    #[tokio::test]
    async fn test_add_then_list_with_search_and_sort() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);
        let (status, body) = send_json(&app, Method::POST, "/api/v1/placements", Some(acme())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Acme added successfully!");
        assert_eq!(body["reload"], true);

        let mut globex = acme();
        globex["company"] = json!("Globex");
        globex["package"] = json!(14.0);
        send_json(&app, Method::POST, "/api/v1/placements", Some(globex)).await;

        let (_, body) = send_json(
            &app,
            Method::GET,
            "/api/v1/placements?search=ENG&sort=desc",
            None,
        )
        .await;
        assert_eq!(body["status"], "rows");
        assert_eq!(body["placements"][0]["Company"], "Globex");
        assert_eq!(body["placements"][1]["Company"], "Acme");
        assert_eq!(body["placements"][1]["Package(LPA)"], 10.0);
    }

    #[tokio::test]
    async fn test_add_out_of_range_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let mut bad = acme();
        bad["eligibility_10th"] = json!(120.0);
        let (status, body) =
            send_json(&app(&dir), Method::POST, "/api/v1/placements", Some(bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_eligibility_and_download() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);
        let (status, _) = send(&app, Method::GET, EXPORT_DOWNLOAD_PATH, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        send_json(&app, Method::POST, "/api/v1/placements", Some(acme())).await;
        let profile = json!({"cgpa": 8.0, "backlogs": 0, "pct_10th": 70.0, "pct_12th": 70.0});
        let (status, body) =
            send_json(&app, Method::POST, "/api/v1/eligibility", Some(profile)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "eligible");
        assert_eq!(body["companies"][0]["Company"], "Acme");
        assert_eq!(body["download_path"], EXPORT_DOWNLOAD_PATH);

        let (status, bytes) = send(&app, Method::GET, EXPORT_DOWNLOAD_PATH, None).await;
        assert_eq!(status, StatusCode::OK);
        let csv = String::from_utf8(bytes).unwrap();
        assert!(csv.starts_with("Company,Role,Package(LPA)\n"));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("eligible_companies.csv")).unwrap(),
            csv
        );

        let strict = json!({"cgpa": 7.0, "backlogs": 0, "pct_10th": 70.0, "pct_12th": 70.0});
        let (_, body) = send_json(&app, Method::POST, "/api/v1/eligibility", Some(strict)).await;
        assert_eq!(body["status"], "no_eligible_companies");
    }

    #[tokio::test]
    async fn test_chart_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);
        let (_, body) = send_json(&app, Method::GET, "/api/v1/placements/chart", None).await;
        assert_eq!(body["status"], "nothing_to_visualize");

        send_json(&app, Method::POST, "/api/v1/placements", Some(acme())).await;
        let (_, body) = send_json(&app, Method::GET, "/api/v1/placements/chart", None).await;
        assert_eq!(body["status"], "chart");
        assert_eq!(body["chart"]["bars"][0]["label"], "Engineer");

        let (_, body) = send_json(&app, Method::GET, "/api/v1/placements/labels", None).await;
        assert_eq!(body["labels"], json!(["Acme - Engineer"]));

        let (status, body) = send_json(
            &app,
            Method::DELETE,
            "/api/v1/placements?label=Acme%20-%20Engineer",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["removed_count"], 1);

        let (_, body) = send_json(&app, Method::GET, "/api/v1/placements", None).await;
        assert_eq!(body["status"], "no_data");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("placements.csv"), "Company,Role\nAcme,Engineer\n").unwrap();
        let (status, body) =
            send_json(&app(&dir), Method::GET, "/api/v1/placements", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "STORAGE_ERROR");
    }
}
