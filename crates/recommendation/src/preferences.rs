//! Preference matcher
//!
//! Ranks the local pool against a user's preferences in three tiers:
//!
//! 1. favorite foods (any cuisine), up to `favorite_food_limit` recipes
//! 2. favorite cuisines, round-robin across cuisines when more than one is set
//! 3. leftover cuisine matches, until the budget is filled
//!
//! Tiers 2 and 3 are one pass of [`distribute_by_cuisine`]: once a cuisine
//! runs out, the others keep taking turns, which appends their leftovers.
//!
//! Dietary restrictions are a hard filter applied before any tier. Recipes
//! matching no tier are never used to pad the result.

use std::collections::HashSet;

use recipehub_shared::{NormalizedRecipe, RecipeKey, UserPreferences};

use crate::dietary::filter_by_dietary_restrictions;
use crate::distributor::{distribute_by_cuisine, matches_any_cuisine};

/// Takes up to `take` recipes matching a favorite food, in input order,
/// skipping and recording keys in `selected`.
pub(crate) fn pick_favorite_foods<'a>(
    eligible: &[&'a NormalizedRecipe],
    foods: &[String],
    take: usize,
    selected: &mut HashSet<RecipeKey>,
) -> Vec<&'a NormalizedRecipe> {
    if foods.is_empty() {
        return Vec::new();
    }

    let mut picked = Vec::with_capacity(take);

    for recipe in eligible.iter().copied() {
        if picked.len() >= take {
            break;
        }

        if matches_favorite_food(recipe, foods) && selected.insert(recipe.key()) {
            picked.push(recipe);
        }
    }

    picked
}

/// Whether any favorite-food token appears in the title or an ingredient name.
pub fn matches_favorite_food(recipe: &NormalizedRecipe, foods: &[String]) -> bool {
    let title = recipe.title.to_lowercase();
    let ingredients: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|i| i.name.to_lowercase())
        .collect();

    foods.iter().any(|food| {
        title.contains(food.as_str()) || ingredients.iter().any(|name| name.contains(food.as_str()))
    })
}

#[derive(Debug, Clone)]
pub struct PreferenceMatcher {
    limit: usize,
    favorite_food_limit: usize,
}

impl Default for PreferenceMatcher {
    fn default() -> Self {
        Self::new(8, 4)
    }
}

impl PreferenceMatcher {
    pub fn new(limit: usize, favorite_food_limit: usize) -> Self {
        Self {
            limit,
            favorite_food_limit,
        }
    }

    pub fn select(
        &self,
        pool: &[NormalizedRecipe],
        preferences: &UserPreferences,
    ) -> Vec<NormalizedRecipe> {
        let eligible = filter_by_dietary_restrictions(pool, &preferences.dietary_tokens());
        let mut selected: HashSet<RecipeKey> = HashSet::new();

        let mut picked = pick_favorite_foods(
            &eligible,
            &preferences.food_tokens(),
            self.favorite_food_limit.min(self.limit),
            &mut selected,
        );
        let food_matches = picked.len();

        let cuisines = preferences.cuisine_tokens();
        let cuisine_candidates: Vec<&NormalizedRecipe> = eligible
            .iter()
            .copied()
            .filter(|recipe| !selected.contains(&recipe.key()))
            .filter(|recipe| matches_any_cuisine(recipe, &cuisines))
            .collect();

        let budget = self.limit.saturating_sub(picked.len());
        picked.extend(distribute_by_cuisine(
            &cuisine_candidates,
            &cuisines,
            budget,
            &mut selected,
        ));

        tracing::debug!(
            pool = pool.len(),
            eligible = eligible.len(),
            food_matches,
            cuisine_matches = picked.len() - food_matches,
            "preference matching complete"
        );

        picked.into_iter().cloned().collect()
    }
}
