use axum::{
    Json,
    extract::{multipart::MultipartError, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Everything that can go wrong while serving a generation request.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("No image file part in the request")]
    MissingImage,

    #[error("No product description provided.")]
    MissingDescription,

    #[error("{}", .0.body_text())]
    Body(#[from] BytesRejection),

    #[error("failed to read upload: {0}")]
    Upload(#[from] MultipartError),

    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("model request failed: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("model output is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("model output does not match the requested schema: {0}")]
    Schema(#[source] serde_json::Error),
}

impl RelayError {
    /// Missing or unreadable inputs are the caller's fault, the rest is ours.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingImage | RelayError::MissingDescription => StatusCode::BAD_REQUEST,
            RelayError::Body(rejection) => rejection.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// The string placed under the `error` key of the response body.
    pub fn message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            format!("An error occurred on the server: {self}")
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.message() }))).into_response()
    }
}
