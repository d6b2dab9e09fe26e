//! Integration tests for the webserver with real service implementations

mod helpers;

use std::time::Duration;

use axum::http::StatusCode;
use fixtures::*;
use helpers::*;
use planner::{Planner, PlannerConfig, RealExportArchive, RealScheduleStore};
use tempfile::TempDir;
use webserver::{WebServer, WebServerState};

#[tokio::test]
async fn test_download_archives_server_copy() {
    let static_dir = TempDir::new().unwrap();
    let export_dir = TempDir::new().unwrap();
    let router = create_router_with_archive(static_dir.path(), RealExportArchive::new(export_dir.path()));
    post_json(&router, "/planer/generate", &generate_payload(&FOUR_PLAYERS, 4)).await;

    let response = get(&router, "/planer/download").await;

    assert_eq!(response.status, StatusCode::OK);
    let server_file = response.headers["x-server-file"].to_str().unwrap().to_string();
    assert!(server_file.starts_with(export_dir.path().to_str().unwrap()));
    let archived = tokio::fs::read(&server_file).await.unwrap();
    assert_eq!(archived, response.body.to_vec());
}

#[tokio::test]
async fn test_regenerate_replaces_schedule() {
    let static_dir = TempDir::new().unwrap();
    let router = create_test_router(static_dir.path());

    let first = post_json(&router, "/planer/generate", &generate_payload(&FOUR_PLAYERS, 3)).await.json();
    let second = post_json(&router, "/planer/generate", &generate_payload(&["X", "Y"], 6)).await.json();
    assert_ne!(first["id"], second["id"]);

    let usage = get(&router, "/planer/player-usage").await.json();
    assert_eq!(usage.as_object().unwrap().len(), 2);
    assert_eq!(usage["X"]["appearances"], 6);
}

#[tokio::test]
async fn test_server_stops_on_shutdown_signal() {
    let static_dir = TempDir::new().unwrap();
    let planner = Planner::new(
        PlannerConfig::default(),
        RealScheduleStore::new(),
        planner::DisabledExportArchive,
    );
    let state = WebServerState::new("127.0.0.1:0".parse().unwrap(), static_dir.path());
    let server = WebServer::new(state, planner);

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        server.run(tokio::time::sleep(Duration::from_millis(50))),
    )
    .await;

    assert!(matches!(result, Ok(Ok(()))));
}

#[tokio::test]
async fn test_shipped_ui_is_served_and_escapes_names() {
    let static_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
    let router = create_test_router(&static_dir);

    let index = get(&router, "/index.html").await;
    assert_eq!(index.status, StatusCode::OK);

    let script = get(&router, "/app.js").await;
    assert_eq!(script.status, StatusCode::OK);
    let source = String::from_utf8(script.body.to_vec()).unwrap();
    assert!(source.contains("textContent"));
    assert!(!source.contains("innerHTML"));
}
