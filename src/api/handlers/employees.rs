//! Employee CRUD request handlers.
//!
//! Exposes the employee service as a JSON-over-HTTP surface under
//! `/api/employee`. Targets are addressed by the `employeeId` query
//! parameter.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::EMPLOYEE_TAG;
use crate::api::dto::{
    CreateEmployeeRequest, DeleteEmployeeResponse, EmployeeIdQuery, EmployeePageParams,
    EmployeeResponse, ErrorResponse, PagedResponse, UpdateEmployeeRequest,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

/// Creates employee-related routes.
///
/// Routes:
/// - POST   /create           - Create a new employee
/// - GET    /getAll           - List all employees
/// - GET    /getAllPaginated  - List employees page by page
/// - GET    /getById          - Get employee by id
/// - PUT    /updateById       - Update employee by id
/// - DELETE /deleteById       - Delete employee by id
pub fn employee_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_employee))
        .routes(routes!(get_all_employees))
        .routes(routes!(get_all_employees_paginated))
        .routes(routes!(get_employee_by_id))
        .routes(routes!(update_employee_by_id))
        .routes(routes!(delete_employee_by_id))
}

/// POST /api/employee/create - Create a new employee
///
/// Fails with 409 when the email is already taken.
#[utoipa::path(
    post,
    path = "/create",
    tag = EMPLOYEE_TAG,
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse)
    )
)]
async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let employee = state
        .services
        .employees
        .create(payload.into_new_employee())
        .await?;
    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

/// GET /api/employee/getAll - List all employees
#[utoipa::path(
    get,
    path = "/getAll",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "All employees", body = Vec<EmployeeResponse>)
    )
)]
async fn get_all_employees(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.services.employees.list().await?;
    let responses = employees.into_iter().map(EmployeeResponse::from).collect();
    Ok(Json(responses))
}

/// GET /api/employee/getAllPaginated - List employees page by page
///
/// Page numbers are 0-based; sorting covers id/name/age/email in either
/// direction.
#[utoipa::path(
    get,
    path = "/getAllPaginated",
    tag = EMPLOYEE_TAG,
    params(EmployeePageParams),
    responses(
        (status = 200, description = "One page of employees", body = PagedResponse<EmployeeResponse>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse)
    )
)]
async fn get_all_employees_paginated(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<EmployeePageParams>,
) -> AppResult<Json<PagedResponse<EmployeeResponse>>> {
    let (employees, total) = state
        .services
        .employees
        .list_paginated(params.to_page_request())
        .await?;
    let data = employees.into_iter().map(EmployeeResponse::from).collect();
    Ok(Json(PagedResponse::new(data, &params, total)))
}

/// GET /api/employee/getById - Get employee by id
#[utoipa::path(
    get,
    path = "/getById",
    tag = EMPLOYEE_TAG,
    params(EmployeeIdQuery),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
async fn get_employee_by_id(
    State(state): State<AppState>,
    Query(query): Query<EmployeeIdQuery>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state
        .services
        .employees
        .get_by_id(query.employee_id)
        .await?
        .ok_or_else(|| AppError::employee_not_found(query.employee_id))?;
    Ok(Json(EmployeeResponse::from(employee)))
}

/// PUT /api/employee/updateById - Update employee by id
///
/// Fetches the existing employee first (404 if absent), overlays
/// name/age/email from the request body and writes it back. The id never
/// changes.
#[utoipa::path(
    put,
    path = "/updateById",
    tag = EMPLOYEE_TAG,
    params(EmployeeIdQuery),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
async fn update_employee_by_id(
    State(state): State<AppState>,
    Query(query): Query<EmployeeIdQuery>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    let existing = state
        .services
        .employees
        .get_by_id(query.employee_id)
        .await?
        .ok_or_else(|| AppError::employee_not_found(query.employee_id))?;

    let updated = state
        .services
        .employees
        .update(existing.id, payload.into_changes())
        .await?;
    Ok(Json(EmployeeResponse::from(updated)))
}

/// DELETE /api/employee/deleteById - Delete employee by id
///
/// Idempotent: deleting an absent id yields `deleteCount: 0`, not an error.
#[utoipa::path(
    delete,
    path = "/deleteById",
    tag = EMPLOYEE_TAG,
    params(EmployeeIdQuery),
    responses(
        (status = 200, description = "Delete count", body = DeleteEmployeeResponse)
    )
)]
async fn delete_employee_by_id(
    State(state): State<AppState>,
    Query(query): Query<EmployeeIdQuery>,
) -> AppResult<Json<DeleteEmployeeResponse>> {
    let delete_count = state
        .services
        .employees
        .delete_by_id(query.employee_id)
        .await?;
    Ok(Json(DeleteEmployeeResponse { delete_count }))
}
