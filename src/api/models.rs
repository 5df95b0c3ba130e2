use serde::{Deserialize, Serialize};

use crate::ranker::ScoredRecipe;
use crate::utils::format_match_percent;

/// Recommendation request parameters
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendParams {
    #[serde(default)]
    pub q: String, // Free-text ingredient list
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub exclude: Option<String>, // Comma-separated allergens
}

/// Recommendation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub results: Vec<RecommendationCard>,
    pub total: usize,
}

/// One ranked recipe as shown to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationCard {
    pub rank: usize,
    pub name: String,
    pub ingredients: String,
    pub allergens: String,
    pub allergen_warning: Option<String>,
    pub similarity: f64,
    pub match_percent: String,
}

impl RecommendationCard {
    pub fn from_scored(rank: usize, scored: ScoredRecipe) -> Self {
        let allergen_warning = scored.allergen_warning().map(str::to_string);

        Self {
            rank,
            match_percent: format_match_percent(scored.similarity),
            similarity: scored.similarity,
            allergen_warning,
            name: scored.name,
            ingredients: scored.ingredients,
            allergens: scored.allergens,
        }
    }
}

/// Allergen choices offered for exclusion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllergensResponse {
    pub allergens: Vec<String>,
}

/// Index statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub total_recipes: usize,
    pub vocabulary_size: usize,
    pub max_vocab_size: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Readiness check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub catalog: String,
    pub total_recipes: usize,
}
