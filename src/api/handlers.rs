use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::{
    api::models::*, config::Settings, ranker::RankerIndex, utils::parse_allergen_list, Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<RankerIndex>,
    pub settings: Settings,
}

/// GET /api/recommend - Rank recipes against an ingredient list
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendResponse>> {
    debug!("Recommend request: {:?}", params);

    let top_n = state.settings.resolve_top_n(params.limit);
    let exclude = params
        .exclude
        .as_deref()
        .map(parse_allergen_list)
        .unwrap_or_default();

    let scored = state.index.query(&params.q, top_n, &exclude)?;

    let results: Vec<RecommendationCard> = scored
        .into_iter()
        .enumerate()
        .map(|(i, recipe)| RecommendationCard::from_scored(i + 1, recipe))
        .collect();

    Ok(Json(RecommendResponse {
        total: results.len(),
        results,
    }))
}

/// GET /api/allergens - Allergens offered for exclusion
pub async fn list_allergens(State(state): State<AppState>) -> Result<Json<AllergensResponse>> {
    Ok(Json(AllergensResponse {
        allergens: state.settings.ranker.allergen_options.clone(),
    }))
}

/// GET /api/stats - Index statistics
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Stats>> {
    debug!("Get stats request");

    Ok(Json(Stats {
        total_recipes: state.index.len(),
        vocabulary_size: state.index.vocabulary_size(),
        max_vocab_size: state.index.max_vocab_size(),
    }))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

/// GET /ready - Readiness check endpoint
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<ReadinessResponse>> {
    // The index is built before the router exists, so an empty catalog is
    // the only degraded state
    let total_recipes = state.index.len();
    let ready = total_recipes > 0;

    Ok(Json(ReadinessResponse {
        ready,
        catalog: if ready { "ok" } else { "empty" }.to_string(),
        total_recipes,
    }))
}
