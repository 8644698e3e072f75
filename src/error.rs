//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::pricing::BookingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Catalog upstream error: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Upstream(e) => {
                tracing::error!("Catalog upstream error: {}", e);
                (StatusCode::BAD_GATEWAY, "Catalog upstream error".to_string())
            }
            AppError::Booking(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
        };

        // JSON body; callers read `message` off failed responses
        (status, Json(json!({ "message": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream_error() -> reqwest::Error {
        // A URL without a host never becomes a request
        reqwest::Client::new()
            .get("http://")
            .build()
            .expect_err("url without a host must fail")
    }

    #[test]
    fn test_booking_errors_are_unprocessable() {
        let err = AppError::from(BookingError::UnknownVehicle {
            car_model: "Phantom".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_upstream_response_body_is_generic() {
        let response = AppError::Upstream(upstream_error()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Catalog upstream error");
    }

    #[test]
    fn test_booking_error_message_passes_through() {
        let err = AppError::from(BookingError::MissingVehicle);
        assert_eq!(
            err.to_string(),
            "Request carries neither a car model nor a daily rate"
        );
    }
}
