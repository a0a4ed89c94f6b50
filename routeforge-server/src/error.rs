//! Maps engine errors to JSON HTTP responses

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// Caller input the engine cannot accept
    #[error("{0}")]
    Validation(String),

    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<routeforge_core::Error> for AppError {
    fn from(err: routeforge_core::Error) -> Self {
        match err {
            routeforge_core::Error::StrategyNotFound(_) => AppError::NotFound(err.to_string()),
            e if e.is_client_error() => AppError::Validation(e.to_string()),
            e => AppError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("route calculation aborted: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        }
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeforge_core::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn engine_errors_map_to_statuses() {
        let cases = [
            (Error::StrategyNotFound("Scenic".into()), StatusCode::NOT_FOUND),
            (Error::InvalidRequest("same".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (
                Error::InvalidCoordinate {
                    latitude: dec!(91),
                    longitude: dec!(0),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                Error::InvalidConfig("bad".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                Error::UnknownNode("X".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn message_keeps_engine_wording() {
        let err = AppError::from(Error::StrategyNotFound("Scenic".into()));
        assert_eq!(err.to_string(), "Strategy not found: Scenic");
    }
}
