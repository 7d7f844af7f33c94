//! Record shapes as they arrive from the saved, manual and external providers.
//!
//! The three providers disagree on field names and on the JSON type of
//! several fields, so every field here is optional, the loosely-typed ones
//! are modelled as untagged enums, and each field is decoded on its own.
//! Turning a [`RawRecipe`] into the canonical shape is the normalizer's job.

use std::fmt;

use serde::Deserialize;

use super::RecipeSource;

/// Recipe identifier: the external provider uses numbers, everything else strings.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Text(value) => write!(f, "{}", value.trim()),
            RawId::Number(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value).iter(),
            OneOrMany::Many(values) => values.iter(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Number(value) => write!(f, "{}", value),
            RawAmount::Text(value) => write!(f, "{}", value.trim()),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct RawIngredient {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::amount")]
    pub amount: Option<RawAmount>,
    #[serde(deserialize_with = "lenient::text")]
    pub unit: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawRating {
    Score(f64),
    Detailed { score: Option<f64> },
}

impl RawRating {
    pub fn score(&self) -> Option<f64> {
        match self {
            RawRating::Score(value) => Some(*value),
            RawRating::Detailed { score } => *score,
        }
        .filter(|value| value.is_finite())
    }
}

/// Union of the saved, manual and external record shapes.
///
/// Each field decodes on its own: a value of the wrong JSON type reads as
/// absent instead of rejecting the record, and list entries of the wrong
/// type are dropped.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecipe {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<RawId>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient::source")]
    pub source_type: Option<RecipeSource>,
    #[serde(deserialize_with = "lenient::count")]
    pub ready_in_minutes: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub servings: Option<u32>,
    #[serde(deserialize_with = "lenient::strings")]
    pub cuisines: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::one_or_many")]
    pub cuisine: Option<OneOrMany<String>>,
    #[serde(deserialize_with = "lenient::strings")]
    pub diets: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::strings")]
    pub dietary_restrictions: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::flag")]
    pub vegetarian: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub vegan: Option<bool>,
    #[serde(deserialize_with = "lenient::ingredients")]
    pub extended_ingredients: Option<Vec<RawIngredient>>,
    #[serde(deserialize_with = "lenient::ingredients")]
    pub ingredients: Option<Vec<RawIngredient>>,
    #[serde(deserialize_with = "lenient::one_or_many")]
    pub instructions: Option<OneOrMany<String>>,
    #[serde(deserialize_with = "lenient::text")]
    pub source_url: Option<String>,
    #[serde(deserialize_with = "lenient::ratings")]
    pub ratings: Option<Vec<RawRating>>,
}

impl RawRecipe {
    /// Stamps the record with the provider it was fetched from.
    pub fn tagged(mut self, source: RecipeSource) -> Self {
        self.source_type = Some(source);
        self
    }
}

/// Field decoders that never fail: anything they cannot make sense of is `None`.
mod lenient {
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::{OneOrMany, RawAmount, RawId, RawIngredient, RawRating, RecipeSource};

    type Field<T, E> = Result<Option<T>, E>;

    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Field<RawId, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(value) => Some(RawId::Text(value)),
            Value::Number(value) => Some(RawId::Number(value)),
            _ => None,
        })
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Field<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(value) => Some(value),
            _ => None,
        })
    }

    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Field<bool, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(value) => Some(value),
            Value::String(value) => value.trim().to_ascii_lowercase().parse().ok(),
            _ => None,
        })
    }

    /// Case-insensitive; unknown sources read as untagged.
    pub fn source<'de, D: Deserializer<'de>>(deserializer: D) -> Field<RecipeSource, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(value) => RecipeSource::from_str(value.trim()).ok(),
            _ => None,
        })
    }

    /// Non-negative whole numbers, also when sent as `30.0` or `"4"`.
    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Field<u32, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(value) => value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .or_else(|| value.as_f64().and_then(whole)),
            Value::String(value) => {
                let value = value.trim();
                value
                    .parse::<u32>()
                    .ok()
                    .or_else(|| value.parse::<f64>().ok().and_then(whole))
            }
            _ => None,
        })
    }

    fn whole(value: f64) -> Option<u32> {
        let in_range = value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX);
        (in_range && value.fract() == 0.0).then_some(value as u32)
    }

    fn string_entries(items: Vec<Value>) -> Vec<String> {
        items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    pub fn strings<'de, D: Deserializer<'de>>(deserializer: D) -> Field<Vec<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Some(string_entries(items)),
            Value::String(value) => Some(vec![value]),
            _ => None,
        })
    }

    pub fn one_or_many<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Field<OneOrMany<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(value) => Some(OneOrMany::One(value)),
            Value::Array(items) => Some(OneOrMany::Many(string_entries(items))),
            _ => None,
        })
    }

    pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Field<RawAmount, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(value) => value.as_f64().map(RawAmount::Number),
            Value::String(value) => Some(RawAmount::Text(value)),
            _ => None,
        })
    }

    /// Objects decode as ingredients, plain strings become `{ name }`.
    pub fn ingredients<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Field<Vec<RawIngredient>, D::Error> {
        let Value::Array(items) = Value::deserialize(deserializer)? else {
            return Ok(None);
        };

        let ingredients = items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(RawIngredient {
                    name: Some(name),
                    ..Default::default()
                }),
                item @ Value::Object(_) => serde_json::from_value(item).ok(),
                _ => None,
            })
            .collect();

        Ok(Some(ingredients))
    }

    pub fn ratings<'de, D: Deserializer<'de>>(deserializer: D) -> Field<Vec<RawRating>, D::Error> {
        let Value::Array(items) = Value::deserialize(deserializer)? else {
            return Ok(None);
        };

        Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ))
    }
}
