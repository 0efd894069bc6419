use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod auth;
pub mod db;
pub mod employee;
pub mod leave_request;
pub mod surat;

pub use crate::db::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::employee::handlers::get_all_employees,
            crate::employee::handlers::search_employees,
            crate::employee::handlers::get_employee_by_id,
            crate::employee::handlers::create_employee,
            crate::employee::handlers::update_employee,
            crate::employee::handlers::delete_employee,
            crate::leave_request::handlers::get_all_leave_requests,
            crate::leave_request::handlers::get_leave_request_by_id,
            crate::leave_request::handlers::create_leave_request,
            crate::leave_request::handlers::update_leave_request,
            crate::leave_request::handlers::delete_leave_request,
            crate::leave_request::handlers::render_leave_form_pdf,
            crate::auth::handlers::get_auth_status,
            crate::auth::handlers::login,
            crate::auth::handlers::refresh_token,
            crate::auth::handlers::list_users,
            crate::auth::handlers::create_user,
            crate::auth::handlers::delete_user,
            crate::auth::handlers::update_profile
        ),
        components(
            schemas(
                employee::models::Employee,
                employee::models::CreateEmployeeRequest,
                employee::models::UpdateEmployeeRequest,
                leave_request::models::LeaveRequest,
                leave_request::models::LeaveRequestWithEmployee,
                leave_request::models::CreateLeaveRequestRequest,
                leave_request::models::UpdateLeaveRequestRequest,
                auth::model::UserInfo,
                auth::model::LoginRequest,
                auth::model::TokenResponse,
                auth::model::RefreshRequest,
                auth::model::CreateUserRequest,
                auth::model::UpdateProfileRequest,
                auth::model::AuthStatusResponse,
                ErrorResponse,
            )
        ),
        modifiers(&SecurityAddon),
        tags(
            (name = "Employee", description = "Employee master-data endpoints."),
            (name = "Leave Request", description = "Leave-request CRUD and printable form endpoints."),
            (name = "Authentication", description = "Login, token, and user management endpoints.")
        )
    )]
    struct ApiDoc;

    let app_state = match AppState::new().await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to connect to database. Please check your DATABASE_URL in .env and ensure the database is running. Error: {}", e);
            std::process::exit(1);
        }
    };

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(cors)
            .app_data(app_state)
            .service(
                web::scope("/api")
                    .configure(auth::handlers::config)
                    .service(
                        web::resource("/employees")
                            .route(web::get().to(employee::handlers::get_all_employees))
                            .route(web::post().to(employee::handlers::create_employee)),
                    )
                    .service(
                        web::resource("/employees/search")
                            .route(web::get().to(employee::handlers::search_employees)),
                    )
                    .service(
                        web::resource("/employees/{id}")
                            .route(web::get().to(employee::handlers::get_employee_by_id))
                            .route(web::put().to(employee::handlers::update_employee))
                            .route(web::delete().to(employee::handlers::delete_employee)),
                    )
                    .service(
                        web::resource("/leave-requests")
                            .route(web::get().to(leave_request::handlers::get_all_leave_requests))
                            .route(web::post().to(leave_request::handlers::create_leave_request)),
                    )
                    .service(
                        web::resource("/leave-requests/{id}")
                            .route(web::get().to(leave_request::handlers::get_leave_request_by_id))
                            .route(web::put().to(leave_request::handlers::update_leave_request))
                            .route(
                                web::delete().to(leave_request::handlers::delete_leave_request),
                            ),
                    )
                    .service(
                        web::resource("/pdf/{id}")
                            .route(web::get().to(leave_request::handlers::render_leave_form_pdf)),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .backlog(8192)
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(bind_addr)?
    .run()
    .await
}
