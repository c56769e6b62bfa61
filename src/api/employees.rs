//! Employee API endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Employee, EmployeeFilter, EmployeeInput};
use crate::AppState;

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Employee {} not found", id))
}

/// GET /api/employees - List employees, optionally filtered.
pub async fn list_employees(
    State(state): State<AppState>,
    filter: Result<Query<EmployeeFilter>, QueryRejection>,
) -> ApiResult<Vec<Employee>> {
    let (employees, revision_id) = state.store.snapshot().await;

    match filter {
        Ok(Query(filter)) => success(filter.apply(&employees), revision_id),
        Err(rejection) => error(rejection.into(), revision_id),
    }
}

/// GET /api/employees/:id - Get a single employee.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Employee> {
    let revision_id = state.store.revision().await;

    match state.store.get(&id).await {
        Some(employee) => success(employee, revision_id),
        None => error(not_found(&id), revision_id),
    }
}

/// POST /api/employees - Create a new employee.
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<Employee> {
    let revision_id = state.store.revision().await;

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return error(rejection.into(), revision_id),
    };

    if let Err(e) = request.validate() {
        return error(e, revision_id);
    }

    match state.store.add(request).await {
        Ok(applied) => success(applied.value, applied.revision),
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/employees/:id - Replace an employee's fields.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<Employee> {
    let revision_id = state.store.revision().await;

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return error(rejection.into(), revision_id),
    };

    if let Err(e) = request.validate() {
        return error(e, revision_id);
    }

    match state.store.update(&id, request).await {
        Ok(Some(applied)) => success(applied.value, applied.revision),
        Ok(None) => error(not_found(&id), revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/employees/:id - Delete an employee.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let revision_id = state.store.revision().await;

    match state.store.delete(&id).await {
        Ok(Some(applied)) => success((), applied.revision),
        Ok(None) => error(not_found(&id), revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/employees/reset - Restore the starter records.
pub async fn reset_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let revision_id = state.store.revision().await;

    match state.store.reset().await {
        Ok(applied) => success(applied.value, applied.revision),
        Err(e) => error(e, revision_id),
    }
}
