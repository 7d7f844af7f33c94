use serde::{Deserialize, Serialize};

use crate::scoring::ScoreWeights;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=No+Image";

/// Bucket sizes and scoring table for the homepage engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub recommended_limit: usize,
    pub popular_limit: usize,
    pub newest_limit: usize,
    /// Slots reserved for favorite-food matches before cuisines are considered
    pub favorite_food_limit: usize,
    pub placeholder_image: String,
    pub scoring: ScoreWeights,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            recommended_limit: 8,
            popular_limit: 4,
            newest_limit: 4,
            favorite_food_limit: 4,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_owned(),
            scoring: ScoreWeights::default(),
        }
    }
}
