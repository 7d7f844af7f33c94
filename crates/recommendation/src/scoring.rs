use recipehub_shared::{NormalizedRecipe, RecipeSource, ScoredRecipe, UNTITLED_RECIPE};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PLACEHOLDER_IMAGE;

/// Point table for display-quality scoring.
///
/// Defaults reproduce the homepage weights:
/// title 10, description 5, ingredients 10, instructions 5, image 20,
/// cuisine 10, dietary tag 5, rating up to 10, manual +5, external +3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub title: u32,
    pub description: u32,
    pub description_min_chars: usize,
    pub ingredients: u32,
    pub ingredients_min_count: usize,
    pub instructions: u32,
    pub instructions_min_chars: usize,
    pub image: u32,
    pub cuisine: u32,
    pub dietary: u32,
    pub rating_multiplier: f64,
    pub rating_cap: u32,
    pub saved_bonus: u32,
    pub manual_bonus: u32,
    pub external_bonus: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title: 10,
            description: 5,
            description_min_chars: 50,
            ingredients: 10,
            ingredients_min_count: 5,
            instructions: 5,
            instructions_min_chars: 100,
            image: 20,
            cuisine: 10,
            dietary: 5,
            rating_multiplier: 2.0,
            rating_cap: 10,
            saved_bonus: 0,
            manual_bonus: 5,
            external_bonus: 3,
        }
    }
}

/// Completeness/engagement scorer. Pure: the same recipe always gets the same score.
#[derive(Debug, Clone)]
pub struct QualityScorer {
    weights: ScoreWeights,
    placeholder_image: String,
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::new(ScoreWeights::default(), DEFAULT_PLACEHOLDER_IMAGE)
    }
}

impl QualityScorer {
    pub fn new(weights: ScoreWeights, placeholder_image: impl Into<String>) -> Self {
        Self {
            weights,
            placeholder_image: placeholder_image.into(),
        }
    }

    pub fn score(&self, recipe: &NormalizedRecipe) -> u32 {
        let w = &self.weights;
        let mut score = 0;

        if !recipe.title.is_empty() && recipe.title != UNTITLED_RECIPE {
            score += w.title;
        }

        if recipe.description.chars().count() > w.description_min_chars {
            score += w.description;
        }

        if recipe.ingredients.len() >= w.ingredients_min_count {
            score += w.ingredients;
        }

        if recipe.instructions.chars().count() > w.instructions_min_chars {
            score += w.instructions;
        }

        if self.has_real_image(recipe) {
            score += w.image;
        }

        if recipe.has_known_cuisine() {
            score += w.cuisine;
        }

        if !recipe.dietary_restrictions.is_empty() {
            score += w.dietary;
        }

        score += self.rating_points(recipe);

        score
            + match recipe.source_type {
                RecipeSource::Saved => w.saved_bonus,
                RecipeSource::Manual => w.manual_bonus,
                RecipeSource::External => w.external_bonus,
            }
    }

    pub fn score_recipe(&self, recipe: NormalizedRecipe) -> ScoredRecipe {
        ScoredRecipe {
            quality_score: self.score(&recipe),
            recipe,
        }
    }

    pub fn score_all(&self, recipes: &[NormalizedRecipe]) -> Vec<ScoredRecipe> {
        recipes
            .iter()
            .map(|recipe| self.score_recipe(recipe.clone()))
            .collect()
    }

    fn has_real_image(&self, recipe: &NormalizedRecipe) -> bool {
        !recipe.image.is_empty()
            && recipe.image != self.placeholder_image
            && !recipe.image.to_lowercase().contains("placeholder")
    }

    /// `min(cap, average * multiplier)`, rounded to the nearest point.
    fn rating_points(&self, recipe: &NormalizedRecipe) -> u32 {
        let points = (recipe.average_rating() * self.weights.rating_multiplier)
            .clamp(0.0, self.weights.rating_cap as f64);

        points.round() as u32
    }
}
