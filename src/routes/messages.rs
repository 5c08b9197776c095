use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, SendMessageRequest, SendMessageResponse};
use crate::routes::AppState;

/// Configure message routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/messages", web::post().to(send_message))
        .route("/messages/{match_id}", web::get().to(get_messages));
}

/// Store a message within a match
///
/// POST /api/messages
async fn send_message(
    state: web::Data<AppState>,
    req: web::Json<SendMessageRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .store
        .send_message(req.match_id, req.sender_id, &req.content)
        .await
    {
        Ok(message_id) => HttpResponse::Ok().json(SendMessageResponse {
            success: true,
            message_id,
            message: "Message sent successfully".to_string(),
        }),
        Err(e) => {
            tracing::error!("Failed to store message for match {}: {}", req.match_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to send message".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Messages of a match, oldest first
///
/// GET /api/messages/{match_id}
async fn get_messages(state: web::Data<AppState>, path: web::Path<u64>) -> impl Responder {
    let match_id = path.into_inner();

    match state.store.get_messages(match_id).await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(e) => {
            tracing::error!("Failed to fetch messages for match {}: {}", match_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch messages".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
