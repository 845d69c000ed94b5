/*!
 * # Health Check Module
 *
 * `GET /health` reports whether the database answers and whether every
 * table of the schema exists. It answers 200 when both hold and 503
 * otherwise, with the individual checks in the body.
 */

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, warn};

use crate::{db, AppState};

/// Basic health status
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
    Down,
}

/// Health check detail
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthDetail {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthDetail {
    fn up() -> Self {
        Self {
            status: HealthStatus::Up,
            message: None,
        }
    }

    fn down(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Down,
            message: Some(message.into()),
        }
    }
}

/// Overall health information
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthInfo {
    pub status: HealthStatus,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub checks: BTreeMap<String, HealthDetail>,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthInfo>) {
    let mut checks = BTreeMap::new();

    let database = match db::check_connection(&state.db).await {
        Ok(()) => HealthDetail::up(),
        Err(e) => {
            error!("Database health check failed: {}", e);
            HealthDetail::down("database unreachable")
        }
    };

    let schema = if database.status == HealthStatus::Up {
        match db::missing_tables(&state.db).await {
            Ok(missing) if missing.is_empty() => HealthDetail::up(),
            Ok(missing) => {
                warn!(?missing, "Schema is incomplete");
                HealthDetail::down(format!("missing tables: {}", missing.join(", ")))
            }
            Err(e) => {
                error!("Schema health check failed: {}", e);
                HealthDetail::down("schema inspection failed")
            }
        }
    } else {
        HealthDetail::down("database unreachable")
    };

    checks.insert("database".to_string(), database);
    checks.insert("schema".to_string(), schema);

    let status = if checks.values().all(|c| c.status == HealthStatus::Up) {
        HealthStatus::Up
    } else {
        HealthStatus::Down
    };

    let code = match status {
        HealthStatus::Up => StatusCode::OK,
        HealthStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        code,
        Json(HealthInfo {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            checks,
        }),
    )
}
