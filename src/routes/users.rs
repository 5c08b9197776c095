use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, NewUser, RegisterUserRequest, RegisterUserResponse};
use crate::routes::AppState;

/// Configure user registration and match-history routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::post().to(register_user))
        .route("/users/{user_id}/matches", web::get().to(get_user_matches));
}

/// Register a new user
///
/// POST /api/users
async fn register_user(
    state: web::Data<AppState>,
    req: web::Json<RegisterUserRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for register request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let new_user = NewUser::from(req.into_inner());

    match state.store.register_user(&new_user).await {
        Ok(user_id) => {
            tracing::info!("Registered user {} ({})", user_id, new_user.name);
            HttpResponse::Ok().json(RegisterUserResponse {
                success: true,
                user_id,
                message: "User created successfully".to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to register user: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to register user".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Match history for a user, best score first
///
/// GET /api/users/{user_id}/matches
async fn get_user_matches(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> impl Responder {
    let user_id = path.into_inner();

    match state.store.get_user_matches(user_id).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            tracing::error!("Failed to fetch matches for user {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch matches".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
