//! Dashboard and lookup endpoints.

use axum::extract::{rejection::QueryRejection, Query, State};
use chrono::{Datelike, Utc};
use serde::Deserialize;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::DashboardStats;
use crate::AppState;

/// Dashboard query parameters.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Year counted as "new hires" (default: current year).
    #[serde(default)]
    pub year: Option<i32>,
}

/// GET /api/dashboard - Summary figures.
pub async fn get_dashboard(
    State(state): State<AppState>,
    params: Result<Query<DashboardQuery>, QueryRejection>,
) -> ApiResult<DashboardStats> {
    let revision_id = state.store.revision().await;

    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return error(rejection.into(), revision_id),
    };
    let year = params.year.unwrap_or_else(|| Utc::now().year());

    if !(1..=9999).contains(&year) {
        return error(
            AppError::BadRequest(format!("Year {} is out of range", year)),
            revision_id,
        );
    }

    success(state.store.stats(year).await, revision_id)
}

/// GET /api/departments - Distinct departments for the filter dropdown.
pub async fn list_departments(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let revision_id = state.store.revision().await;
    success(state.store.departments().await, revision_id)
}
