use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::auth::middleware::validate_request_token;
use crate::db::LEAVE_REQUEST_CACHE_KEY;
use crate::leave_request::models::{
    CreateLeaveRequestRequest, LeaveRequest, LeaveRequestWithEmployee, UpdateLeaveRequestRequest,
};
use crate::surat::{Generator, SuratCutiData, SuratCutiGenerator, Validator};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/leave-requests",
    tag = "Leave Request",
    responses(
        (status = 200, description = "Leave-request history, newest first", body = [LeaveRequestWithEmployee])
    )
)]
pub async fn get_all_leave_requests(state: web::Data<AppState>) -> impl Responder {
    if let Some(requests) = state.leave_request_cache.get(LEAVE_REQUEST_CACHE_KEY).await {
        return HttpResponse::Ok().json(requests);
    }

    match state.get_all_leave_requests().await {
        Ok(requests) => {
            state
                .leave_request_cache
                .insert(LEAVE_REQUEST_CACHE_KEY.to_string(), requests.clone())
                .await;
            HttpResponse::Ok().json(requests)
        }
        Err(e) => {
            log::error!("Failed to list leave requests: {:?}", e);
            HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to list leave requests",
            ))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/leave-requests/{id}",
    tag = "Leave Request",
    params(("id" = i32, Path, description = "Leave request ID")),
    responses(
        (status = 200, description = "Leave request found", body = LeaveRequestWithEmployee),
        (status = 404, description = "Leave request not found")
    )
)]
pub async fn get_leave_request_by_id(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    match state.get_leave_request_by_id(path.into_inner()).await {
        Ok(Some(record)) => HttpResponse::Ok().json(record),
        Ok(None) => HttpResponse::NotFound()
            .json(crate::ErrorResponse::not_found("Leave request not found")),
        Err(e) => {
            log::error!("Failed to get leave request: {:?}", e);
            HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to get leave request",
            ))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/leave-requests",
    tag = "Leave Request",
    request_body = CreateLeaveRequestRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Leave request created", body = LeaveRequest),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn create_leave_request(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateLeaveRequestRequest>,
) -> impl Responder {
    if let Err(e) = validate_request_token(&req) {
        return e.error_response();
    }

    if let Err(message) = body.validate() {
        return HttpResponse::BadRequest().json(crate::ErrorResponse::bad_request(&message));
    }

    // The request must attach to an existing employee.
    match state.get_employee_by_id(body.employee_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(crate::ErrorResponse::not_found("Employee not found"));
        }
        Err(e) => {
            log::error!("Failed to resolve employee: {:?}", e);
            return HttpResponse::InternalServerError().json(
                crate::ErrorResponse::internal_error("Failed to create leave request"),
            );
        }
    }

    match state.create_leave_request(&body).await {
        Ok(request) => {
            state
                .leave_request_cache
                .invalidate(LEAVE_REQUEST_CACHE_KEY)
                .await;
            HttpResponse::Created().json(request)
        }
        Err(e) => {
            log::error!("Failed to create leave request: {:?}", e);
            HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to create leave request",
            ))
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/leave-requests/{id}",
    tag = "Leave Request",
    params(("id" = i32, Path, description = "Leave request ID")),
    request_body = UpdateLeaveRequestRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Leave request updated", body = LeaveRequest),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Leave request not found")
    )
)]
pub async fn update_leave_request(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateLeaveRequestRequest>,
) -> impl Responder {
    if let Err(e) = validate_request_token(&req) {
        return e.error_response();
    }

    if let Err(message) = body.validate() {
        return HttpResponse::BadRequest().json(crate::ErrorResponse::bad_request(&message));
    }

    match state.update_leave_request(path.into_inner(), &body).await {
        Ok(Some(request)) => {
            state
                .leave_request_cache
                .invalidate(LEAVE_REQUEST_CACHE_KEY)
                .await;
            HttpResponse::Ok().json(request)
        }
        Ok(None) => HttpResponse::NotFound()
            .json(crate::ErrorResponse::not_found("Leave request not found")),
        Err(e) => {
            log::error!("Failed to update leave request: {:?}", e);
            HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to update leave request",
            ))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/leave-requests/{id}",
    tag = "Leave Request",
    params(("id" = i32, Path, description = "Leave request ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Leave request deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Leave request not found")
    )
)]
pub async fn delete_leave_request(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    if let Err(e) = validate_request_token(&req) {
        return e.error_response();
    }

    match state.delete_leave_request(path.into_inner()).await {
        Ok(true) => {
            state
                .leave_request_cache
                .invalidate(LEAVE_REQUEST_CACHE_KEY)
                .await;
            HttpResponse::NoContent().finish()
        }
        Ok(false) => HttpResponse::NotFound()
            .json(crate::ErrorResponse::not_found("Leave request not found")),
        Err(e) => {
            log::error!("Failed to delete leave request: {:?}", e);
            HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to delete leave request",
            ))
        }
    }
}

/// Render the printable leave form for one request.
#[utoipa::path(
    get,
    path = "/api/pdf/{id}",
    tag = "Leave Request",
    params(("id" = i32, Path, description = "Leave request ID")),
    responses(
        (status = 200, description = "Rendered leave form", body = Vec<u8>, content_type = "application/pdf"),
        (status = 404, description = "Leave request not found"),
        (status = 500, description = "Rendering failed")
    )
)]
pub async fn render_leave_form_pdf(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    let id = path.into_inner();

    let record = match state.get_leave_request_by_id(id).await {
        Ok(Some(record)) => record,
        Ok(None) => return HttpResponse::NotFound().body("Leave request not found"),
        Err(e) => {
            log::error!("Failed to load leave request {}: {:?}", id, e);
            return HttpResponse::InternalServerError().json(
                crate::ErrorResponse::internal_error("Failed to load leave request"),
            );
        }
    };

    let generator = SuratCutiGenerator::new();
    match generator.generate(SuratCutiData::from(record)) {
        Ok(doc) => {
            log::info!("Rendered leave form {} as {}", id, doc.filename);
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("inline; filename=\"{}\"", doc.filename),
                ))
                .body(doc.pdf)
        }
        Err(e) => {
            log::error!("Failed to render leave form {}: {:?}", id, e);
            HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Failed to render leave form"))
        }
    }
}
