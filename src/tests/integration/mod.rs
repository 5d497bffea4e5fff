//! Integration tests for the configuration service
//!
//! Startup validation through `HttpServer::new` and the HTTP surface through
//! the full route tree.

use crate::{
    infrastructure::http::server::HttpServer,
    shared::error::AppError,
    tests::{
        common::{assertions, fixtures},
        config, TestResult,
    },
};
use serde_json::Value;
use warp::http::StatusCode;
use warp::test::request;

#[tokio::test]
async fn test_demo_configuration_is_served() -> TestResult<()> {
    config::init();
    let server = HttpServer::new(fixtures::demo_settings())?;

    let res = request()
        .method("GET")
        .path("/api/config")
        .reply(&server.routes())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/json");
    assert_eq!(
        std::str::from_utf8(res.body())?,
        r#"{"name":"Demo","maxUsers":10,"features":["a","b"]}"#
    );
    Ok(())
}

#[tokio::test]
async fn test_repeated_requests_return_identical_bodies() -> TestResult<()> {
    config::init();
    let server = HttpServer::new(fixtures::demo_settings())?;
    let routes = server.routes();

    let first = request().method("GET").path("/api/config").reply(&routes).await;
    for _ in 0..10 {
        let next = request().method("GET").path("/api/config").reply(&routes).await;
        assert_eq!(next.status(), StatusCode::OK);
        assert_eq!(next.body(), first.body());
    }
    Ok(())
}

#[tokio::test]
async fn test_served_values_round_trip() -> TestResult<()> {
    config::init();
    let app = fixtures::raw_app("  Portal  ", 250_000, &["beta", "", "beta"]);
    let server = HttpServer::new(fixtures::settings_with(app))?;

    let res = request()
        .method("GET")
        .path("/api/config")
        .reply(&server.routes())
        .await;

    let body: Value = serde_json::from_slice(res.body())?;
    assert_eq!(body["name"], "  Portal  ");
    assert_eq!(body["maxUsers"], 250_000);
    assert_eq!(body["features"], serde_json::json!(["beta", "", "beta"]));
    Ok(())
}

#[test]
fn test_startup_aborts_on_empty_name() {
    config::init();
    let settings = fixtures::settings_with(fixtures::raw_app("", 10, &["a"]));

    let err = HttpServer::new(settings).err().unwrap();
    assertions::assert_rejected_on(&err, "app.name");
    if let AppError::Validation(e) = &err {
        assertions::assert_message(e, "application name must not be empty");
    }
}

#[test]
fn test_startup_aborts_on_zero_max_users() {
    config::init();
    let settings = fixtures::settings_with(fixtures::raw_app("Demo", 0, &["a"]));

    let err = HttpServer::new(settings).err().unwrap();
    assertions::assert_rejected_on(&err, "app.maxUsers");
    if let AppError::Validation(e) = &err {
        assertions::assert_message(e, "minimum number of users must be greater than zero");
    }
}

#[test]
fn test_startup_aborts_on_empty_features() {
    config::init();
    let settings = fixtures::settings_with(fixtures::raw_app("Demo", 5, &[]));

    let err = HttpServer::new(settings).err().unwrap();
    assertions::assert_rejected_on(&err, "app.features");
    if let AppError::Validation(e) = &err {
        assertions::assert_message(e, "feature list must not be empty");
    }
}

#[test]
fn test_startup_aborts_on_missing_app_section() {
    config::init();
    let err = HttpServer::new(crate::config::Settings::default()).err().unwrap();
    assertions::assert_rejected_on(&err, "app.name");
}
