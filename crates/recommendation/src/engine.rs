use std::collections::HashSet;

use recipehub_shared::{
    BackendResponse, NormalizedRecipe, RawRecipe, RecipeKey, RecipeSource, RecommendationSet,
    ScoredRecipe, UserPreferences,
};

use crate::config::RecommendationConfig;
use crate::dietary::filter_by_dietary_restrictions;
use crate::distributor::{distribute_by_cuisine, matches_any_cuisine};
use crate::diversity::select_diverse;
use crate::normalizer::RecipeNormalizer;
use crate::preferences::{PreferenceMatcher, pick_favorite_foods};
use crate::scoring::QualityScorer;

/// Snapshots of the four providers. `None` means not loaded yet, or failed,
/// and behaves like an empty source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationSources {
    pub saved: Option<Vec<RawRecipe>>,
    pub manual: Option<Vec<RawRecipe>>,
    pub backend: Option<BackendResponse>,
    pub popular: Option<Vec<RawRecipe>>,
}

/// Builds the homepage buckets. Stateless: every call recomputes from its inputs.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
    normalizer: RecipeNormalizer,
    scorer: QualityScorer,
    matcher: PreferenceMatcher,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(RecommendationConfig::default())
    }
}

/// Builds a [`RecommendationSet`] with the default configuration.
pub fn build_recommendation_set(
    sources: &RecommendationSources,
    authenticated: bool,
    preferences: Option<&UserPreferences>,
) -> RecommendationSet {
    RecommendationEngine::default().build(sources, authenticated, preferences)
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self {
            normalizer: RecipeNormalizer::new(config.placeholder_image.to_owned()),
            scorer: QualityScorer::new(config.scoring.clone(), config.placeholder_image.to_owned()),
            matcher: PreferenceMatcher::new(config.recommended_limit, config.favorite_food_limit),
            config,
        }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &RecipeNormalizer {
        &self.normalizer
    }

    pub fn build(
        &self,
        sources: &RecommendationSources,
        authenticated: bool,
        preferences: Option<&UserPreferences>,
    ) -> RecommendationSet {
        let pool = self.build_pool(sources);

        let recommended = match preferences {
            Some(preferences) if authenticated && preferences.is_meaningful() => {
                self.recommend(&pool, sources.backend.as_ref(), preferences)
            }
            _ => Vec::new(),
        };

        let placed: HashSet<RecipeKey> = recommended.iter().map(NormalizedRecipe::key).collect();
        let mut remaining: Vec<NormalizedRecipe> = pool
            .into_iter()
            .filter(|recipe| !placed.contains(&recipe.key()))
            .collect();

        let popular = self.popular(&remaining, sources.popular.as_deref());

        let placed: HashSet<RecipeKey> = popular.iter().map(NormalizedRecipe::key).collect();
        remaining.retain(|recipe| !placed.contains(&recipe.key()));

        let newest: Vec<NormalizedRecipe> = remaining
            .into_iter()
            .rev()
            .take(self.config.newest_limit)
            .collect();

        tracing::debug!(
            authenticated,
            has_preferences = preferences.is_some(),
            recommended = recommended.len(),
            popular = popular.len(),
            newest = newest.len(),
            "recommendation set built"
        );

        RecommendationSet {
            recommended,
            popular,
            newest,
        }
    }

    /// Saved, then manual, then backend recipes, first occurrence of each
    /// `(id, source)` kept.
    ///
    /// A record without an id gets `<source>#<position>` so that distinct
    /// id-less recipes from one provider do not collapse into one key.
    pub fn build_pool(&self, sources: &RecommendationSources) -> Vec<NormalizedRecipe> {
        let saved = sources
            .saved
            .iter()
            .flatten()
            .enumerate()
            .map(|(position, raw)| (position, raw, RecipeSource::Saved));
        let manual = sources
            .manual
            .iter()
            .flatten()
            .enumerate()
            .map(|(position, raw)| (position, raw, RecipeSource::Manual));
        let external = sources
            .backend
            .iter()
            .flat_map(BackendResponse::recipes)
            .enumerate()
            .map(|(position, raw)| (position, raw, RecipeSource::External));

        let mut keys: HashSet<RecipeKey> = HashSet::new();

        saved
            .chain(manual)
            .chain(external)
            .map(|(position, raw, source)| {
                let mut recipe = self.normalizer.normalize_as(raw, source);
                if recipe.id.is_empty() {
                    recipe.id = format!("{source}#{position}");
                }
                recipe
            })
            .filter(|recipe| keys.insert(recipe.key()))
            .collect()
    }

    pub fn score_pool(&self, recipes: &[NormalizedRecipe]) -> Vec<ScoredRecipe> {
        self.scorer.score_all(recipes)
    }

    fn recommend(
        &self,
        pool: &[NormalizedRecipe],
        backend: Option<&BackendResponse>,
        preferences: &UserPreferences,
    ) -> Vec<NormalizedRecipe> {
        let precomputed: Vec<NormalizedRecipe> = backend
            .and_then(BackendResponse::recommendations)
            .unwrap_or_default()
            .iter()
            .map(|raw| self.normalizer.normalize_as(raw, RecipeSource::External))
            .collect();

        let rebalanced = self.rebalance(&precomputed, preferences);
        if !rebalanced.is_empty() {
            tracing::debug!(
                precomputed = precomputed.len(),
                recommended = rebalanced.len(),
                "using backend recommendations"
            );

            return rebalanced;
        }

        if !precomputed.is_empty() {
            tracing::warn!(
                precomputed = precomputed.len(),
                "no backend recommendation passed the dietary filter, matching locally"
            );
        }

        self.matcher.select(pool, preferences)
    }

    /// Re-orders a precomputed list: favorite-food matches first, then
    /// favorite-cuisine matches round-robin, then the rest in backend order.
    fn rebalance(
        &self,
        precomputed: &[NormalizedRecipe],
        preferences: &UserPreferences,
    ) -> Vec<NormalizedRecipe> {
        let limit = self.config.recommended_limit;
        let eligible = filter_by_dietary_restrictions(precomputed, &preferences.dietary_tokens());
        let mut selected: HashSet<RecipeKey> = HashSet::new();

        let mut picked = pick_favorite_foods(
            &eligible,
            &preferences.food_tokens(),
            self.config.favorite_food_limit.min(limit),
            &mut selected,
        );

        let cuisines = preferences.cuisine_tokens();
        if !cuisines.is_empty() {
            let candidates: Vec<&NormalizedRecipe> = eligible
                .iter()
                .copied()
                .filter(|recipe| !selected.contains(&recipe.key()))
                .filter(|recipe| matches_any_cuisine(recipe, &cuisines))
                .collect();

            let budget = limit.saturating_sub(picked.len());
            picked.extend(distribute_by_cuisine(
                &candidates,
                &cuisines,
                budget,
                &mut selected,
            ));
        }

        for recipe in eligible {
            if picked.len() >= limit {
                break;
            }

            if selected.insert(recipe.key()) {
                picked.push(recipe);
            }
        }

        picked.into_iter().cloned().collect()
    }

    fn popular(
        &self,
        remaining: &[NormalizedRecipe],
        supplied: Option<&[RawRecipe]>,
    ) -> Vec<NormalizedRecipe> {
        let limit = self.config.popular_limit;

        if let Some(supplied) = supplied.filter(|s| !s.is_empty()) {
            let mut keys: HashSet<RecipeKey> = HashSet::new();

            return supplied
                .iter()
                .map(|raw| self.normalizer.normalize_as(raw, RecipeSource::External))
                .filter(|recipe| keys.insert(recipe.key()))
                .take(limit)
                .collect();
        }

        tracing::debug!(
            remaining = remaining.len(),
            "no popular recipes supplied, selecting by quality"
        );

        select_diverse(&self.score_pool(remaining), limit)
            .into_iter()
            .map(|scored| scored.recipe)
            .collect()
    }
}
