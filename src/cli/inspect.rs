use std::path::Path;

use recipehub::{Config, sources};
use recipehub_recommendation::{RecipeNormalizer, RecommendationEngine};
use recipehub_shared::{NormalizedRecipe, RawRecipe, RecipeSource, ScoredRecipe};

fn normalize_file(
    normalizer: &RecipeNormalizer,
    path: &Path,
    source: Option<RecipeSource>,
) -> anyhow::Result<Vec<NormalizedRecipe>> {
    let recipes = sources::load_recipes(path)?
        .into_iter()
        .map(|raw| match source {
            Some(source) => raw.tagged(source),
            None => raw,
        })
        .map(|raw: RawRecipe| normalizer.normalize(&raw))
        .collect();

    Ok(recipes)
}

/// Normalized and scored, best first. Equal scores keep file order.
pub fn score_file(
    config: &Config,
    path: &Path,
    source: Option<RecipeSource>,
) -> anyhow::Result<Vec<ScoredRecipe>> {
    let engine = RecommendationEngine::new(config.recommendation.clone());

    let recipes = normalize_file(engine.normalizer(), path, source)?;
    let mut scored = engine.score_pool(&recipes);
    scored.sort_by(|a, b| b.quality_score.cmp(&a.quality_score));

    Ok(scored)
}

#[tracing::instrument(skip(config))]
pub fn score(
    config: Config,
    path: &Path,
    source: Option<RecipeSource>,
    pretty: bool,
) -> anyhow::Result<()> {
    let scored = score_file(&config, path, source)?;
    tracing::info!(recipes = scored.len(), "recipes scored");

    super::write_json(std::io::stdout().lock(), &scored, pretty)
}

#[tracing::instrument(skip(config))]
pub fn normalize(
    config: Config,
    path: &Path,
    source: Option<RecipeSource>,
    pretty: bool,
) -> anyhow::Result<()> {
    let normalizer = RecipeNormalizer::new(config.recommendation.placeholder_image);
    let recipes = normalize_file(&normalizer, path, source)?;
    tracing::info!(recipes = recipes.len(), "recipes normalized");

    super::write_json(std::io::stdout().lock(), &recipes, pretty)
}
