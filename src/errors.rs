use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::{DbErr, SqlErr};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::NUMERIC_OVERFLOW;

fn current_request_id() -> Option<String> {
    crate::tracing::current_request_id().map(|rid| rid.as_str().to_string())
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status category (e.g., "Conflict", "Internal Server Error")
    pub error: String,
    /// Human-readable error description
    pub message: String,
    /// Constraint that rejected the write, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<ConstraintKind>,
    /// Unique request identifier for support and debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// RFC 3339 timestamp when the error occurred
    pub timestamp: String,
}

/// Storage-level integrity rule that rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// Duplicate value in a UNIQUE column (`cnpj_cpf`, `cpf`, `email`).
    Unique,
    /// Reference to a row that does not exist.
    ForeignKey,
    /// Required column left empty.
    NotNull,
    /// Fixed-point value wider than its column.
    NumericOverflow,
}

impl ConstraintKind {
    /// Classifies a database error, returning `None` for anything that is
    /// not an integrity violation (I/O, pool exhaustion, syntax...).
    pub fn classify(err: &DbErr) -> Option<Self> {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => return Some(Self::Unique),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => return Some(Self::ForeignKey),
            _ => {}
        }

        // Engine messages for the cases sea-orm does not map.
        let message = err.to_string();
        if message.contains("NOT NULL constraint failed")
            || message.contains("violates not-null constraint")
        {
            Some(Self::NotNull)
        } else if message.contains("FOREIGN KEY constraint failed") {
            Some(Self::ForeignKey)
        } else if message.contains("UNIQUE constraint failed") {
            Some(Self::Unique)
        } else if message.contains(NUMERIC_OVERFLOW) || message.contains("numeric field overflow")
        {
            Some(Self::NumericOverflow)
        } else {
            None
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unique => "unique",
            Self::ForeignKey => "foreign key",
            Self::NotNull => "not null",
            Self::NumericOverflow => "numeric overflow",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(DbErr),

    #[error("Constraint violation ({kind}): {message}")]
    ConstraintViolation {
        kind: ConstraintKind,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        Self::from_db(err)
    }
}

impl ServiceError {
    /// Wraps a database error, splitting integrity violations out of the
    /// generic database failure.
    pub fn from_db(err: DbErr) -> Self {
        match ConstraintKind::classify(&err) {
            Some(kind) => ServiceError::ConstraintViolation {
                kind,
                message: err.to_string(),
            },
            None => ServiceError::DatabaseError(err),
        }
    }

    /// Constraint kind, if this error is an integrity violation.
    pub fn constraint(&self) -> Option<ConstraintKind> {
        match self {
            Self::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the HTTP status code for this error.
    /// This is the single source of truth for error-to-status mapping.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ConstraintViolation {
                kind: ConstraintKind::Unique,
                ..
            } => StatusCode::CONFLICT,
            Self::ConstraintViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(_)
            | Self::TemplateError(_)
            | Self::InternalError(_)
            | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error message suitable for HTTP responses.
    /// Internal errors return generic messages to avoid leaking implementation details.
    pub fn response_message(&self) -> String {
        match self {
            Self::DatabaseError(_) => "Database error".to_string(),
            Self::ConstraintViolation { kind, .. } => {
                format!("Constraint violation: {}", kind)
            }
            Self::TemplateError(_) | Self::InternalError(_) | Self::Other(_) => {
                "Internal server error".to_string()
            }
            Self::NotFound(_) | Self::ValidationError(_) => self.to_string(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let err = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.response_message(),
            constraint: self.constraint(),
            request_id: current_request_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(err)).into_response()
    }
}

pub type AppError = ServiceError;
