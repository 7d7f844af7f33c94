pub mod raw;

pub use raw::*;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Fallback title for records that arrive without one.
pub const UNTITLED_RECIPE: &str = "Untitled Recipe";

/// Cuisine label used when a recipe carries no cuisine tag at all.
pub const UNKNOWN_CUISINE: &str = "Unknown";

pub const DEFAULT_SERVINGS: u32 = 4;

/// Where a recipe record came from.
///
/// Identifiers are only unique within one source, so any identity check
/// must combine the id with the source (see [`RecipeKey`]).
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RecipeSource {
    /// Saved in browser-local storage by the user
    #[default]
    Saved,
    /// Curated by hand through the recipe list endpoint
    Manual,
    /// Pulled from the external recipe provider
    External,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeKey {
    pub id: String,
    pub source: RecipeSource,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Canonical recipe shape every downstream component works with.
///
/// Field names match the ones [`RawRecipe`] accepts, so a serialized
/// normalized recipe can be fed back through the normalizer unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub cuisines: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub ratings: Vec<f64>,
    pub source_type: RecipeSource,
}

impl NormalizedRecipe {
    pub fn key(&self) -> RecipeKey {
        RecipeKey {
            id: self.id.to_owned(),
            source: self.source_type,
        }
    }

    pub fn primary_cuisine(&self) -> &str {
        self.cuisines
            .first()
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CUISINE)
    }

    pub fn has_known_cuisine(&self) -> bool {
        self.cuisines
            .iter()
            .any(|c| !c.eq_ignore_ascii_case(UNKNOWN_CUISINE))
    }

    /// Mean of every attached rating, 0.0 when unrated.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }

        self.ratings.iter().sum::<f64>() / self.ratings.len() as f64
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: NormalizedRecipe,
    pub quality_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn recipe(cuisines: Vec<&str>, ratings: Vec<f64>) -> NormalizedRecipe {
        NormalizedRecipe {
            id: "42".to_owned(),
            title: "Risotto".to_owned(),
            description: String::new(),
            image: String::new(),
            cuisines: cuisines.into_iter().map(str::to_owned).collect(),
            dietary_restrictions: vec![],
            ready_in_minutes: None,
            servings: DEFAULT_SERVINGS,
            ingredients: vec![],
            instructions: String::new(),
            source_url: None,
            ratings,
            source_type: RecipeSource::External,
        }
    }

    #[test]
    fn test_source_parses_case_insensitive() {
        assert_eq!(
            RecipeSource::from_str("Manual").unwrap(),
            RecipeSource::Manual
        );
        assert_eq!(RecipeSource::External.to_string(), "external");
    }

    #[test]
    fn test_key_combines_id_and_source() {
        let a = recipe(vec![], vec![]);
        let mut b = a.clone();
        b.source_type = RecipeSource::Saved;

        assert_ne!(a.key(), b.key());
        assert_eq!(a.key(), a.clone().key());
    }

    #[test]
    fn test_primary_cuisine_falls_back_to_unknown() {
        assert_eq!(recipe(vec![], vec![]).primary_cuisine(), UNKNOWN_CUISINE);
        assert_eq!(
            recipe(vec!["Thai", "Asian"], vec![]).primary_cuisine(),
            "Thai"
        );
        assert!(!recipe(vec!["unknown"], vec![]).has_known_cuisine());
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(recipe(vec![], vec![]).average_rating(), 0.0);
        assert_eq!(recipe(vec![], vec![4.0, 5.0]).average_rating(), 4.5);
    }
}
