use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::{errors::ServiceError, AppState};

/// Body of `GET /` when no template is configured.
pub const GREETING: &str = "Hello World! O sistema está funcionando!";

/// Serves the landing page.
///
/// Without `index_template` this is the plain-text greeting. With it, the
/// file is read on every request so edits show up without a restart.
pub async fn index(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let Some(path) = state.config.index_template.as_ref() else {
        return Ok(GREETING.into_response());
    };

    debug!(template = %path.display(), "Rendering index template");
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ServiceError::TemplateError(format!("{}: {}", path.display(), e)))?;

    Ok(Html(body).into_response())
}
