use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Dietary and taste preferences a signed-in user filled in during onboarding.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub dietary_restrictions: Vec<String>,
    pub favorite_cuisines: Vec<String>,
    pub favorite_foods: Vec<String>,
    pub cooking_skill_level: Option<SkillLevel>,
    pub health_goals: Vec<String>,
}

impl UserPreferences {
    /// True when at least one preference list holds a non-blank entry.
    ///
    /// Skill level alone does not personalise anything.
    pub fn is_meaningful(&self) -> bool {
        [
            &self.dietary_restrictions,
            &self.favorite_cuisines,
            &self.favorite_foods,
            &self.health_goals,
        ]
        .into_iter()
        .any(|list| list.iter().any(|value| !value.trim().is_empty()))
    }

    pub fn dietary_tokens(&self) -> Vec<String> {
        tokens(&self.dietary_restrictions)
    }

    pub fn cuisine_tokens(&self) -> Vec<String> {
        tokens(&self.favorite_cuisines)
    }

    pub fn food_tokens(&self) -> Vec<String> {
        tokens(&self.favorite_foods)
    }
}

/// Trimmed, lower-cased, non-empty and deduplicated, in first-seen order.
fn tokens(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());

    for value in values {
        let token = value.trim().to_lowercase();
        if !token.is_empty() && !out.contains(&token) {
            out.push(token);
        }
    }

    out
}
