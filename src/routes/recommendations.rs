use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Recommender;
use crate::models::{CatalogResponse, ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse};
use crate::services::CatalogStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub recommender: Recommender,
    pub max_limit: usize,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations/find", web::post().to(find_recommendations))
        .route("/catalog", web::get().to(get_catalog));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find recommendations endpoint
///
/// POST /api/v1/recommendations/find
///
/// Request body:
/// ```json
/// {
///   "expertise_category": "Backend Development",
///   "skills": ["Python", "Go"],
///   "position_level": "Senior",
///   "experience_years": 5,
///   "limit": 3
/// }
/// ```
async fn find_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for find_recommendations request: field_errors={:?}",
            errors
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req.limit.min(state.max_limit);
    let profile = req.profile();

    tracing::info!(
        "Finding recommendations for category: {}, skills: {}, limit: {}",
        profile.expertise_category,
        profile.skills.len(),
        limit
    );

    // The loader is fail-soft: an unavailable source shows up here as an
    // empty catalog and the recommender substitutes the fallback.
    let catalog = state.catalog.load().await;

    let mut rng = rand::rng();
    let result = state
        .recommender
        .recommend(&profile, catalog.as_ref().clone(), limit, &mut rng);

    let response = RecommendResponse {
        recommendations: result.recommendations,
        total_items: result.total_items,
        fallback_used: result.fallback_used,
    };

    tracing::info!(
        "Returning {} recommendations (from {} catalog items, fallback: {})",
        response.recommendations.len(),
        response.total_items,
        response.fallback_used
    );

    HttpResponse::Ok().json(response)
}

/// Catalog listing endpoint
///
/// GET /api/v1/catalog
///
/// Returns the currently loaded catalog, for client-side display and
/// debugging purposes.
async fn get_catalog(state: web::Data<AppState>) -> impl Responder {
    let items = state.catalog.load().await;

    HttpResponse::Ok().json(CatalogResponse {
        count: items.len(),
        items: items.as_ref().clone(),
    })
}
