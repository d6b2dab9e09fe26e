//! Test helper utilities for webserver router tests

use std::net::SocketAddr;
use std::path::Path;

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use planner::{
    DisabledExportArchive, ExportArchive, Planner, PlannerConfig, RealScheduleStore, ScheduleStore,
};
use serde_json::Value;
use tower::ServiceExt;
use webserver::{WebServer, WebServerState};

/// Create test socket address for testing
pub fn create_test_address() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

/// Router over a planner built from the given config and services
pub fn create_configured_router<S, A>(
    static_dir: &Path,
    config: PlannerConfig,
    store: S,
    archive: A,
) -> Router
where
    S: ScheduleStore + 'static,
    A: ExportArchive + 'static,
{
    let planner = Planner::new(config, store, archive);
    let state = WebServerState::new(create_test_address(), static_dir);
    WebServer::new(state, planner).build_router()
}

/// Router over a default-configured planner built from the given services
pub fn create_router_with_services<S, A>(static_dir: &Path, store: S, archive: A) -> Router
where
    S: ScheduleStore + 'static,
    A: ExportArchive + 'static,
{
    create_configured_router(static_dir, PlannerConfig::default(), store, archive)
}

/// Router over a fresh store with the given archive
pub fn create_router_with_archive<A>(static_dir: &Path, archive: A) -> Router
where
    A: ExportArchive + 'static,
{
    create_router_with_services(static_dir, RealScheduleStore::new(), archive)
}

pub fn create_test_router(static_dir: &Path) -> Router {
    create_router_with_archive(static_dir, DisabledExportArchive)
}

/// Response parts collected from a single request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse { status, headers, body }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(router: &Router, uri: &str, body: &Value) -> TestResponse {
    post_raw(router, uri, body.to_string()).await
}

pub async fn post_raw(router: &Router, uri: &str, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    send(router, request).await
}
