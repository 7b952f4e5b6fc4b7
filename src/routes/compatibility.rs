use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::MatchEvaluator;
use crate::models::{
    ErrorResponse, EvaluatePairRequest, EvaluatePairResponse, FilterCandidatesRequest,
    FilterCandidatesResponse, HealthResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub evaluator: MatchEvaluator,
    pub max_candidates: usize,
}

/// Configure all compatibility-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/compatibility/evaluate", web::post().to(evaluate_pair))
        .route(
            "/compatibility/candidates",
            web::post().to(filter_candidates),
        );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Pair evaluation endpoint
///
/// POST /api/v1/compatibility/evaluate
///
/// Request body:
/// ```json
/// {
///   "player": { ... },
///   "candidate": { ... }
/// }
/// ```
async fn evaluate_pair(
    state: web::Data<AppState>,
    req: web::Json<EvaluatePairRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for evaluate_pair request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let compatible = state.evaluator.is_match(&req.player, &req.candidate);

    tracing::info!(
        "Evaluated pair {} vs {}: compatible={}",
        req.player.player_id,
        req.candidate.player_id,
        compatible
    );

    HttpResponse::Ok().json(EvaluatePairResponse {
        player_id: req.player.player_id.clone(),
        candidate_id: req.candidate.player_id.clone(),
        compatible,
    })
}

/// Candidate filter endpoint
///
/// POST /api/v1/compatibility/candidates
///
/// Evaluates one player against a candidate list and returns the ids of
/// the compatible candidates, in input order.
async fn filter_candidates(
    state: web::Data<AppState>,
    req: web::Json<FilterCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for filter_candidates request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let total_candidates = req.candidates.len();

    // Cap the batch to keep a single request from monopolizing a worker
    let candidates = &req.candidates[..total_candidates.min(state.max_candidates)];
    if candidates.len() < total_candidates {
        tracing::debug!(
            "Truncated candidate list for {} from {} to {}",
            req.player.player_id,
            total_candidates,
            candidates.len()
        );
    }

    let compatible_ids: Vec<String> = state
        .evaluator
        .filter_candidates(&req.player, candidates)
        .into_iter()
        .map(|candidate| candidate.player_id.clone())
        .collect();

    tracing::info!(
        "Filtered candidates for {}: {}/{} compatible",
        req.player.player_id,
        compatible_ids.len(),
        candidates.len()
    );

    HttpResponse::Ok().json(FilterCandidatesResponse {
        compatible_ids,
        total_candidates,
    })
}
