use axum::{body::Body, http::StatusCode, response::Response};
use axum_test::{TestResponse, TestServer};
use serde_json::{Value, json};

use crate::{AppState, build_router};

pub(crate) fn get_test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state))
}

pub(crate) async fn json_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");

    serde_json::from_slice(&body).expect("Response body is not JSON")
}

#[track_caller]
pub(crate) fn assert_error_body(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    response.assert_json(&json!({
        "success": false,
        "error": status.as_u16(),
        "message": message,
    }));
}
