use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::auth::middleware::validate_request_token;
use crate::db::EMPLOYEE_CACHE_KEY;
use crate::employee::models::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use crate::surat::Validator;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Name or NIP fragment
    pub q: String,
}

#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Employee",
    responses(
        (status = 200, description = "List of all employees", body = [Employee])
    )
)]
pub async fn get_all_employees(state: web::Data<AppState>) -> impl Responder {
    if let Some(employees) = state.employee_cache.get(EMPLOYEE_CACHE_KEY).await {
        return HttpResponse::Ok().json(employees);
    }

    match state.get_all_employees().await {
        Ok(employees) => {
            state
                .employee_cache
                .insert(EMPLOYEE_CACHE_KEY.to_string(), employees.clone())
                .await;
            HttpResponse::Ok().json(employees)
        }
        Err(e) => {
            log::error!("Failed to list employees: {:?}", e);
            HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Failed to list employees"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/employees/search",
    tag = "Employee",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching employees (max 10)", body = [Employee])
    )
)]
pub async fn search_employees(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    match state.search_employees(&query.q).await {
        Ok(employees) => HttpResponse::Ok().json(employees),
        Err(e) => {
            log::error!("Employee search failed: {:?}", e);
            HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Employee search failed"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "Employee",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee_by_id(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match state.get_employee_by_id(path.into_inner()).await {
        Ok(Some(employee)) => HttpResponse::Ok().json(employee),
        Ok(None) => {
            HttpResponse::NotFound().json(crate::ErrorResponse::not_found("Employee not found"))
        }
        Err(e) => {
            log::error!("Failed to get employee: {:?}", e);
            HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Failed to get employee"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Employee",
    request_body = CreateEmployeeRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateEmployeeRequest>,
) -> impl Responder {
    if let Err(e) = validate_request_token(&req) {
        return e.error_response();
    }

    if let Err(message) = body.validate() {
        return HttpResponse::BadRequest().json(crate::ErrorResponse::bad_request(&message));
    }

    match state.create_employee(&body).await {
        Ok(employee) => {
            state.employee_cache.invalidate(EMPLOYEE_CACHE_KEY).await;
            HttpResponse::Created().json(employee)
        }
        Err(e) => {
            log::error!("Failed to create employee: {:?}", e);
            HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Failed to create employee"))
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "Employee",
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = UpdateEmployeeRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateEmployeeRequest>,
) -> impl Responder {
    if let Err(e) = validate_request_token(&req) {
        return e.error_response();
    }

    if let Err(message) = body.validate() {
        return HttpResponse::BadRequest().json(crate::ErrorResponse::bad_request(&message));
    }

    match state.update_employee(path.into_inner(), &body).await {
        Ok(Some(employee)) => {
            state.employee_cache.invalidate(EMPLOYEE_CACHE_KEY).await;
            // Joined history rows embed employee data; refresh them too.
            state
                .leave_request_cache
                .invalidate(crate::db::LEAVE_REQUEST_CACHE_KEY)
                .await;
            HttpResponse::Ok().json(employee)
        }
        Ok(None) => {
            HttpResponse::NotFound().json(crate::ErrorResponse::not_found("Employee not found"))
        }
        Err(e) => {
            log::error!("Failed to update employee: {:?}", e);
            HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Failed to update employee"))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "Employee",
    params(("id" = i32, Path, description = "Employee ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    if let Err(e) = validate_request_token(&req) {
        return e.error_response();
    }

    match state.delete_employee(path.into_inner()).await {
        Ok(true) => {
            state.employee_cache.invalidate(EMPLOYEE_CACHE_KEY).await;
            state
                .leave_request_cache
                .invalidate(crate::db::LEAVE_REQUEST_CACHE_KEY)
                .await;
            HttpResponse::NoContent().finish()
        }
        Ok(false) => {
            HttpResponse::NotFound().json(crate::ErrorResponse::not_found("Employee not found"))
        }
        Err(e) => {
            log::error!("Failed to delete employee: {:?}", e);
            HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Failed to delete employee"))
        }
    }
}
