use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_router_core::Error;
use serde_json::json;

/// Error returned by handlers, rendered as `{"error": kind, "message": text}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            kind,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
    }

    pub fn off_campus() -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "off_campus",
            "Location is outside the campus. Choose a start on campus.",
        )
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let kind = err.kind();
        match err {
            Error::NoGraphData | Error::NoNearestNode => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                kind,
                "Paths are still caching. Try again.",
            ),
            Error::Unreachable => Self::new(
                StatusCode::NOT_FOUND,
                kind,
                "No walking path found between the points.",
            ),
            Error::DegenerateRequest => {
                Self::new(StatusCode::BAD_REQUEST, kind, "Start and destination match.")
            }
            Error::UnknownPlace(id) => Self::new(
                StatusCode::NOT_FOUND,
                kind,
                format!("Destination unavailable: {id}"),
            ),
            other => Self::new(StatusCode::INTERNAL_SERVER_ERROR, kind, other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(kind = self.kind, "{}", self.message);
        }
        let body = json!({ "error": self.kind, "message": self.message });
        (self.status, Json(body)).into_response()
    }
}
