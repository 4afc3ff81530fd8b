use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::entities::LocationSide;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

pub fn invalid_input_error() -> Error {
    Error {
        code: 100,
        message: "invalid input".into(),
    }
}

pub fn location_not_found_error(side: LocationSide) -> Error {
    Error {
        code: 101,
        message: format!("location not found: {}", side),
    }
}

pub fn unknown_vehicle_tier_error(token: &str) -> Error {
    Error {
        code: 102,
        message: format!("unknown cab type: {:?}, expected one of mini, sedan, suv", token),
    }
}

pub fn advisory_unavailable_error(what: &str) -> Error {
    Error {
        code: 103,
        message: format!("could not fetch {}", what),
    }
}

pub fn config_error(key: &str) -> Error {
    Error {
        code: 1,
        message: format!("invalid configuration value for {}", key),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    tracing::warn!("http client error: {}", err);

    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: Error) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn client_errors_keep_their_message() {
        let (status, body) = body_json(location_not_found_error(LocationSide::Dropoff)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 101);
        assert_eq!(body["error"], "location not found: dropoff");
    }

    #[tokio::test]
    async fn internal_errors_hide_their_message() {
        let (status, body) = body_json(config_error("CABFARE_PORT")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal Server Error");
    }

    #[test]
    fn unknown_tier_names_the_token() {
        let err = unknown_vehicle_tier_error("bike");

        assert_eq!(err.code, 102);
        assert!(err.message.contains("\"bike\""));
    }
}
