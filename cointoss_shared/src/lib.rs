use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub use cointoss_core::FlipOutcome;

/// Body of `GET /flip`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct FlipResponse {
    pub result: FlipOutcome,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_response_wire_shape() {
        let body = serde_json::to_string(&FlipResponse {
            result: FlipOutcome::Tails,
        })
        .unwrap();
        assert_eq!(body, r#"{"result":"tails"}"#);
        let parsed: FlipResponse = serde_json::from_str(r#"{"result":"heads"}"#).unwrap();
        assert_eq!(parsed.result, FlipOutcome::Heads);
    }

    #[test]
    fn unknown_outcome_is_rejected() {
        assert!(serde_json::from_str::<FlipResponse>(r#"{"result":"edge"}"#).is_err());
    }

    #[test]
    fn error_status_mapping() {
        let resp = ApiError::NotFound("/x".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
