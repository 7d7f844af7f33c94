pub mod config;
pub mod dietary;
pub mod distributor;
pub mod diversity;
pub mod engine;
pub mod normalizer;
pub mod preferences;
pub mod scoring;

pub use config::RecommendationConfig;
pub use dietary::filter_by_dietary_restrictions;
pub use distributor::distribute_by_cuisine;
pub use diversity::select_diverse;
pub use engine::{RecommendationEngine, RecommendationSources, build_recommendation_set};
pub use normalizer::RecipeNormalizer;
pub use preferences::PreferenceMatcher;
pub use scoring::{QualityScorer, ScoreWeights};
