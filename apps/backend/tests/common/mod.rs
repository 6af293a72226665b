#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::{HeaderName, CONTENT_TYPE};
use actix_web::{test, web, App, Error};
use serde_json::{json, Value};

use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::middleware::RequestTrace;
use backend::routes;
use backend::state::app_state::AppState;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend::test_bootstrap::logging::init();
}

/// Fresh app state backed by an in-memory SQLite database with the
/// schema migrated. Each call gets its own database.
pub async fn test_state() -> AppState {
    build_state()
        .with_db(DbProfile::Test)
        .build()
        .await
        .expect("failed to build test state")
}

/// Full application wired the same way as main: trace middleware plus
/// every route.
pub async fn test_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

/// Create a game through the API and return its id.
pub async fn create_game<S>(app: &S) -> i64
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post().uri("/api/v1/games").to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let body: Value = test::read_body_json(resp).await;
    body["game_id"].as_i64().expect("game_id should be an i64")
}

/// Submit one roll and return (status, body).
pub async fn submit_roll<S>(app: &S, game_id: i64, pins: i64) -> (u16, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/games/{game_id}/rolls"))
        .set_json(json!({ "roll": { "pins": pins } }))
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

/// Submit a sequence of rolls, asserting each one is accepted.
pub async fn play<S>(app: &S, game_id: i64, rolls: &[i64])
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    for &pins in rolls {
        let (status, body) = submit_roll(app, game_id, pins).await;
        assert_eq!(status, 201, "roll of {pins} rejected: {body}");
    }
}

/// Fetch the score body for a game.
pub async fn get_score<S>(app: &S, game_id: i64) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/games/{game_id}/score"))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    test::read_body_json(resp).await
}

/// Validate that an error response follows the ProblemDetails structure
/// and that trace_id matches the X-Trace-Id header.
pub async fn assert_problem_details_structure(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail: &str,
) {
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/problem+json"),
        "expected problem+json content type, got {content_type}"
    );

    let trace_hdr = HeaderName::from_static("x-trace-id");
    let header_trace_id = headers
        .get(&trace_hdr)
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present")
        .to_string();

    let json: Value = test::read_body_json(resp).await;

    assert_eq!(json["status"].as_u64(), Some(expected_status as u64));
    assert_eq!(json["code"].as_str(), Some(expected_code));
    assert_eq!(json["detail"].as_str(), Some(expected_detail));
    assert!(json["title"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(json["type"]
        .as_str()
        .is_some_and(|t| t.ends_with(expected_code)));
    assert_eq!(json["trace_id"].as_str(), Some(header_trace_id.as_str()));
}
