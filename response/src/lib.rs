mod error;

pub use error::{classify, ApiError, ErrorKind};

use lambda_http::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
        StatusCode,
    },
    Body, Response,
};
use serde::Serialize;
use serde_json::json;

fn respond(status: StatusCode, body: Body) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_CREDENTIALS, "true")
        .body(body)
        .expect("failed to render response")
}

fn error_body(message: &str) -> Body {
    Body::Text(json!({ "error": message }).to_string())
}

pub fn ok<T>(body: T) -> Response<Body>
where
    T: Serialize,
{
    match serde_json::to_string(&body) {
        Ok(text) => respond(StatusCode::OK, Body::Text(text)),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize response body");
            respond(StatusCode::INTERNAL_SERVER_ERROR, error_body(&err.to_string()))
        }
    }
}

pub fn empty() -> Response<Body> {
    respond(StatusCode::OK, Body::Empty)
}

pub fn error(err: &(dyn std::error::Error + 'static)) -> Response<Body> {
    respond(classify(err).status(), error_body(&err.to_string()))
}
