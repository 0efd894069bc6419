use actix_web::{web, HttpRequest, HttpResponse, Responder};
use bcrypt::{hash, verify, DEFAULT_COST};

use super::jwt::{
    generate_access_token, generate_refresh_token, get_access_token_expiry, validate_token,
};
use super::middleware::validate_request_token;
use super::model::{
    AuthStatusResponse, CreateUserRequest, LoginRequest, RefreshRequest, TokenResponse,
    UpdateProfileRequest, UserInfo,
};
use crate::AppState;

const DEFAULT_ADMIN_EMAIL: &str = "admin@lapas.go.id";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Check if setup is required (no users exist)
#[utoipa::path(
    get,
    path = "/api/auth/status",
    tag = "Authentication",
    responses(
        (status = 200, description = "Auth status", body = AuthStatusResponse)
    )
)]
pub async fn get_auth_status(state: web::Data<AppState>) -> impl Responder {
    let count = state.get_user_count().await.unwrap_or(0);
    HttpResponse::Ok().json(AuthStatusResponse {
        has_users: count > 0,
        setup_required: count == 0,
    })
}

/// Login endpoint
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(state: web::Data<AppState>, body: web::Json<LoginRequest>) -> impl Responder {
    let user_count = state.get_user_count().await.unwrap_or(0);

    // First-time setup mode: allow login with the seeded default credentials
    if user_count == 0 {
        if body.email == DEFAULT_ADMIN_EMAIL && body.password == DEFAULT_ADMIN_PASSWORD {
            let temp_id = "setup-mode";
            let access_token = match generate_access_token(temp_id, &body.email) {
                Ok(t) => t,
                Err(e) => {
                    log::error!("Failed to generate access token: {:?}", e);
                    return HttpResponse::InternalServerError().json(
                        crate::ErrorResponse::internal_error("Failed to generate token"),
                    );
                }
            };

            let refresh_token = match generate_refresh_token(temp_id, &body.email) {
                Ok(t) => t,
                Err(e) => {
                    log::error!("Failed to generate refresh token: {:?}", e);
                    return HttpResponse::InternalServerError().json(
                        crate::ErrorResponse::internal_error("Failed to generate token"),
                    );
                }
            };

            return HttpResponse::Ok().json(TokenResponse {
                access_token,
                refresh_token,
                token_type: "Bearer".to_string(),
                expires_in: get_access_token_expiry(),
                setup_mode: true,
            });
        } else {
            return HttpResponse::Unauthorized().json(crate::ErrorResponse::new(
                "Unauthorized",
                "Invalid credentials. Use admin@lapas.go.id/admin123 for first-time setup.",
            ));
        }
    }

    // Normal login flow
    let user = match state.get_user_by_email(&body.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return HttpResponse::Unauthorized().json(crate::ErrorResponse::new(
                "Unauthorized",
                "Invalid email or password",
            ));
        }
        Err(e) => {
            log::error!("Database error during login: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Login failed"));
        }
    };

    // Verify password
    let password_valid = verify(&body.password, &user.password_hash).unwrap_or(false);
    if !password_valid {
        return HttpResponse::Unauthorized().json(crate::ErrorResponse::new(
            "Unauthorized",
            "Invalid email or password",
        ));
    }

    // Generate tokens
    let user_id = user.id.to_string();
    let access_token = match generate_access_token(&user_id, &user.email) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Failed to generate access token: {:?}", e);
            return HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to generate token",
            ));
        }
    };

    let refresh_token = match generate_refresh_token(&user_id, &user.email) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Failed to generate refresh token: {:?}", e);
            return HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to generate token",
            ));
        }
    };

    // Store refresh token in database (invalidates any previous session)
    if let Err(e) = state.update_user_refresh_token(user.id, &refresh_token).await {
        log::error!("Failed to store refresh token: {:?}", e);
        // Continue anyway, token is still valid
    }

    HttpResponse::Ok().json(TokenResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: get_access_token_expiry(),
        setup_mode: false,
    })
}

/// Refresh access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "Authentication",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "Token refreshed", body = TokenResponse),
        (status = 401, description = "Invalid refresh token")
    )
)]
pub async fn refresh_token(
    state: web::Data<AppState>,
    body: web::Json<RefreshRequest>,
) -> impl Responder {
    // Validate refresh token
    let claims = match validate_token(&body.refresh_token) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Invalid refresh token: {:?}", e);
            return HttpResponse::Unauthorized().json(crate::ErrorResponse::new(
                "Unauthorized",
                "Invalid or expired refresh token",
            ));
        }
    };

    if claims.token_type != "refresh" {
        return HttpResponse::Unauthorized().json(crate::ErrorResponse::new(
            "Unauthorized",
            "Invalid token type",
        ));
    }

    // Check if this refresh token matches what's in database (single device session)
    let user = match state.get_user_by_refresh_token(&body.refresh_token).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return HttpResponse::Unauthorized().json(crate::ErrorResponse::new(
                "Unauthorized",
                "Session expired. Please login again.",
            ));
        }
        Err(e) => {
            log::error!("Database error during refresh: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Refresh failed"));
        }
    };

    // Generate new access token only (keep same refresh token)
    let user_id = user.id.to_string();
    let access_token = match generate_access_token(&user_id, &user.email) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Failed to generate access token: {:?}", e);
            return HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to generate token",
            ));
        }
    };

    HttpResponse::Ok().json(TokenResponse {
        access_token,
        refresh_token: body.refresh_token.clone(),
        token_type: "Bearer".to_string(),
        expires_in: get_access_token_expiry(),
        setup_mode: false,
    })
}

/// Create new user (protected)
#[utoipa::path(
    post,
    path = "/api/auth/users",
    tag = "Authentication",
    request_body = CreateUserRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "User created", body = UserInfo),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_user(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> impl Responder {
    if let Err(e) = validate_request_token(&req) {
        return e.error_response();
    }

    // Check if email already exists
    if let Ok(Some(_)) = state.get_user_by_email(&body.email).await {
        return HttpResponse::Conflict().json(crate::ErrorResponse::new(
            "Conflict",
            "Email already exists",
        ));
    }

    // Hash password
    let password_hash = match hash(&body.password, DEFAULT_COST) {
        Ok(h) => h,
        Err(e) => {
            log::error!("Failed to hash password: {:?}", e);
            return HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to create user",
            ));
        }
    };

    // Create user
    let user = match state.create_user(&body.email, &body.name, &password_hash).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("Failed to create user: {:?}", e);
            return HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to create user",
            ));
        }
    };

    HttpResponse::Created().json(UserInfo::from(user))
}

/// List all users (protected)
#[utoipa::path(
    get,
    path = "/api/auth/users",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User list", body = Vec<UserInfo>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_users(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    if let Err(e) = validate_request_token(&req) {
        return e.error_response();
    }

    match state.get_all_users().await {
        Ok(users) => {
            let user_infos: Vec<UserInfo> = users.into_iter().map(UserInfo::from).collect();
            HttpResponse::Ok().json(user_infos)
        }
        Err(e) => {
            log::error!("Failed to get users: {:?}", e);
            HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Failed to get users"))
        }
    }
}

/// Delete user (protected)
#[utoipa::path(
    delete,
    path = "/api/auth/users/{id}",
    tag = "Authentication",
    params(("id" = i32, Path, description = "User ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    let claims = match validate_request_token(&req) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let user_id = path.into_inner();

    // Prevent self-deletion
    if claims.sub == user_id.to_string() {
        return HttpResponse::BadRequest().json(crate::ErrorResponse::bad_request(
            "Cannot delete your own account",
        ));
    }

    // Ensure at least one user remains
    let user_count = state.get_user_count().await.unwrap_or(0);
    if user_count <= 1 {
        return HttpResponse::BadRequest().json(crate::ErrorResponse::bad_request(
            "Cannot delete the last user",
        ));
    }

    match state.delete_user(user_id).await {
        Ok(true) => HttpResponse::Ok().finish(),
        Ok(false) => {
            HttpResponse::NotFound().json(crate::ErrorResponse::not_found("User not found"))
        }
        Err(e) => {
            log::error!("Failed to delete user: {:?}", e);
            HttpResponse::InternalServerError().json(crate::ErrorResponse::internal_error(
                "Failed to delete user",
            ))
        }
    }
}

/// Update own profile (protected); password change requires the current one.
#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = "Authentication",
    request_body = UpdateProfileRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile updated", body = UserInfo),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_profile(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let claims = match validate_request_token(&req) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let user_id: i32 = match claims.sub.parse() {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::Unauthorized().json(crate::ErrorResponse::new(
                "Unauthorized",
                "Profile updates require a full account",
            ));
        }
    };

    let user = match state.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(crate::ErrorResponse::not_found("User not found"));
        }
        Err(e) => {
            log::error!("Database error during profile update: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Profile update failed"));
        }
    };

    // If changing password, verify the current password first
    let mut password_hash = None;
    if let Some(new_password) = body.new_password.as_deref().filter(|p| !p.is_empty()) {
        let current = match body.current_password.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => {
                return HttpResponse::BadRequest().json(crate::ErrorResponse::bad_request(
                    "Current password required",
                ));
            }
        };
        if !verify(current, &user.password_hash).unwrap_or(false) {
            return HttpResponse::BadRequest().json(crate::ErrorResponse::bad_request(
                "Current password is incorrect",
            ));
        }
        password_hash = match hash(new_password, DEFAULT_COST) {
            Ok(h) => Some(h),
            Err(e) => {
                log::error!("Failed to hash password: {:?}", e);
                return HttpResponse::InternalServerError().json(
                    crate::ErrorResponse::internal_error("Profile update failed"),
                );
            }
        };
    }

    // If changing email, make sure it is not already taken
    let email = body
        .email
        .as_deref()
        .filter(|e| !e.is_empty() && *e != user.email);
    if let Some(new_email) = email {
        if let Ok(Some(_)) = state.get_user_by_email(new_email).await {
            return HttpResponse::Conflict().json(crate::ErrorResponse::new(
                "Conflict",
                "Email already in use",
            ));
        }
    }

    let name = body
        .name
        .as_deref()
        .filter(|n| !n.is_empty() && *n != user.name);

    match state
        .update_user_profile(user_id, email, name, password_hash.as_deref())
        .await
    {
        Ok(Some(updated)) => HttpResponse::Ok().json(UserInfo::from(updated)),
        Ok(None) => {
            HttpResponse::NotFound().json(crate::ErrorResponse::not_found("User not found"))
        }
        Err(e) => {
            log::error!("Failed to update profile: {:?}", e);
            HttpResponse::InternalServerError()
                .json(crate::ErrorResponse::internal_error("Profile update failed"))
        }
    }
}

/// Configure auth routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/status", web::get().to(get_auth_status))
            .route("/login", web::post().to(login))
            .route("/refresh", web::post().to(refresh_token))
            .route("/users", web::get().to(list_users))
            .route("/users", web::post().to(create_user))
            .route("/users/{id}", web::delete().to(delete_user))
            .route("/profile", web::put().to(update_profile)),
    );
}
