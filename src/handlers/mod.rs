pub mod booking;
pub mod health;
pub mod inquiry;

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

/// Each endpoint attaches its own CORS header set to every response it
/// produces, errors included.
fn apply_cors(res: &mut Response, cors: &[(&'static str, &'static str)]) {
    for &(name, value) in cors {
        res.headers_mut()
            .insert(name, HeaderValue::from_static(value));
    }
}

fn json_with_cors(
    status: StatusCode,
    body: Value,
    cors: &[(&'static str, &'static str)],
) -> Response {
    let mut res = (status, axum::Json(body)).into_response();
    apply_cors(&mut res, cors);
    res
}

/// Preflight short-circuit: 200 with a bare "ok" body, no body processing.
fn preflight(cors: &[(&'static str, &'static str)]) -> Response {
    let mut res = (StatusCode::OK, "ok").into_response();
    apply_cors(&mut res, cors);
    res
}
