use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, model::CopyModel};

/// Default cap on request bodies, in megabytes.
pub const DEFAULT_MAX_UPLOAD_MB: usize = 16;

/// Converts the `--max-upload-mb` flag to bytes, clamping instead of overflowing.
pub fn megabytes(mb: usize) -> usize {
    mb.saturating_mul(1024 * 1024)
}

/// Builds the HTTP surface around a configured model.
///
/// Cross-origin requests are accepted from any origin.
pub fn router<M: CopyModel>(model: Arc<M>, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate_product::<M>))
        .route("/generate-suggestions", post(handlers::generate_suggestions::<M>))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .with_state(model)
}
