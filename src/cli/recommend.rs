use std::path::PathBuf;

use recipehub::{Config, SourcePaths, sources};
use recipehub_recommendation::RecommendationEngine;
use recipehub_shared::RecommendationSet;

pub struct RecommendArgs {
    pub paths: SourcePaths,
    pub preferences: Option<PathBuf>,
    pub authenticated: bool,
    pub pretty: bool,
}

pub fn build_set(config: &Config, args: &RecommendArgs) -> anyhow::Result<RecommendationSet> {
    let sources = args.paths.load()?;
    let preferences = match &args.preferences {
        Some(path) => sources::load_preferences(path)?,
        None => None,
    };

    if args.authenticated && preferences.is_none() {
        tracing::info!("authenticated without preferences, skipping personalization");
    }

    let engine = RecommendationEngine::new(config.recommendation.clone());
    Ok(engine.build(&sources, args.authenticated, preferences.as_ref()))
}

#[tracing::instrument(skip_all, fields(authenticated = args.authenticated))]
pub fn recommend(config: Config, args: RecommendArgs) -> anyhow::Result<()> {
    let set = build_set(&config, &args)?;

    tracing::info!(
        recommended = set.recommended.len(),
        popular = set.popular.len(),
        newest = set.newest.len(),
        "recommendations ready"
    );

    super::write_json(std::io::stdout().lock(), &set, args.pretty)
}
