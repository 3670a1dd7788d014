use crate::utils::error::PortfolioError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl PortfolioError {
    pub fn status_code(&self) -> (StatusCode, &'static str) {
        match self {
            PortfolioError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            PortfolioError::HttpError(_) | PortfolioError::DeliveryError { .. } => {
                (StatusCode::BAD_GATEWAY, "DELIVERY_FAILED")
            }
            PortfolioError::InvalidRating { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_code();
        if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", self);
        }

        let body = ErrorResponse {
            error: self.user_friendly_message(),
            code,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let not_found = PortfolioError::NotFound {
            resource: "resume.pdf".to_string(),
        };
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let delivery = PortfolioError::DeliveryError {
            message: "502".to_string(),
        };
        assert_eq!(delivery.into_response().status(), StatusCode::BAD_GATEWAY);

        let config = PortfolioError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(
            config.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
