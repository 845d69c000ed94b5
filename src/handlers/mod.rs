use axum::http::Uri;

use crate::errors::ServiceError;

pub mod index;

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> ServiceError {
    ServiceError::NotFound(format!("No route for {}", uri.path()))
}
