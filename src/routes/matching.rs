use actix_web::{web, HttpResponse, Responder};

use crate::models::{
    CalculateCompatibilityRequest, CompatibilityResponse, ErrorResponse, HealthResponse,
    PartnerProfile,
};
use crate::routes::AppState;
use crate::services::StoreError;

/// Configure health, catalog and compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/partners", web::get().to(list_partners))
        .route(
            "/calculate-compatibility",
            web::post().to(calculate_compatibility),
        );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List all active partner profiles
///
/// GET /api/partners
async fn list_partners(state: web::Data<AppState>) -> impl Responder {
    match fetch_partner_catalog(&state).await {
        Ok(partners) => HttpResponse::Ok().json(partners),
        Err(e) => {
            tracing::error!("Failed to fetch partners: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch partners".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Score and rank all active partners for a user
///
/// POST /api/calculate-compatibility
///
/// Request body:
/// ```json
/// {
///   "userId": 42,
///   "userData": { "name": "...", "age": 30, "city": "...", ... },
///   "filters": { "city": "", "minAge": 18, "maxAge": 99 },
///   "sortBy": "compatibility"
/// }
/// ```
async fn calculate_compatibility(
    state: web::Data<AppState>,
    req: web::Json<CalculateCompatibilityRequest>,
) -> impl Responder {
    let req = req.into_inner();

    tracing::info!(
        "Calculating compatibility for user {} (sort: {:?})",
        req.user_id,
        req.sort_by
    );

    let partners = match fetch_partner_catalog(&state).await {
        Ok(partners) => partners,
        Err(e) => {
            tracing::error!("Failed to fetch partners for user {}: {}", req.user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch partners".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Scoring {} partners for user {}", partners.len(), req.user_id);

    let outcome = state
        .matchmaker
        .rank(&req.user_data, partners, &req.filters, req.sort_by);

    // Match history is best-effort; a failed insert never fails the request
    for scored in &outcome.scored {
        if let Err(e) = state
            .store
            .record_match(req.user_id, scored.partner.id, scored.compatibility_score)
            .await
        {
            tracing::warn!(
                "Failed to record match {} -> {}: {}",
                req.user_id,
                scored.partner.id,
                e
            );
        }
    }

    let response = CompatibilityResponse {
        total_results: outcome.total_results,
        best_match: outcome.best_match,
        matches: outcome.ranked,
    };

    tracing::info!(
        "Returning {} of {} partners for user {}",
        response.total_results,
        outcome.scored.len(),
        req.user_id
    );

    HttpResponse::Ok().json(response)
}

/// Partner catalog, read through the cache when one is configured
async fn fetch_partner_catalog(state: &AppState) -> Result<Vec<PartnerProfile>, StoreError> {
    if let Some(cache) = &state.cache {
        if let Some(partners) = cache.get_partners().await {
            return Ok(partners);
        }
    }

    let partners = state.store.fetch_partners().await?;

    if let Some(cache) = &state.cache {
        cache.put_partners(&partners).await;
    }

    Ok(partners)
}
