//! Recipe normalizer
//!
//! Folds the three provider record shapes into one [`NormalizedRecipe`].
//! Normalization is total: anything missing or malformed degrades to a
//! documented default instead of failing.

use recipehub_shared::{
    DEFAULT_SERVINGS, Ingredient, NormalizedRecipe, OneOrMany, RawIngredient, RawRecipe,
    RecipeSource, UNTITLED_RECIPE,
};

use crate::config::DEFAULT_PLACEHOLDER_IMAGE;

#[derive(Debug, Clone)]
pub struct RecipeNormalizer {
    placeholder_image: String,
}

impl Default for RecipeNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_IMAGE)
    }
}

impl RecipeNormalizer {
    pub fn new(placeholder_image: impl Into<String>) -> Self {
        Self {
            placeholder_image: placeholder_image.into(),
        }
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    /// Normalizes a record, keeping the source it was tagged with
    /// (saved when untagged).
    pub fn normalize(&self, raw: &RawRecipe) -> NormalizedRecipe {
        self.normalize_as(raw, raw.source_type.unwrap_or_default())
    }

    /// Normalizes a record as coming from `source`, whatever tag it carries.
    pub fn normalize_as(&self, raw: &RawRecipe, source: RecipeSource) -> NormalizedRecipe {
        NormalizedRecipe {
            id: raw.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            title: first_non_blank([raw.title.as_deref()])
                .unwrap_or(UNTITLED_RECIPE)
                .to_owned(),
            description: first_non_blank([raw.description.as_deref(), raw.summary.as_deref()])
                .unwrap_or_default()
                .to_owned(),
            image: first_non_blank([raw.image.as_deref(), raw.image_url.as_deref()])
                .unwrap_or(&self.placeholder_image)
                .to_owned(),
            cuisines: merge_cuisines(raw),
            dietary_restrictions: merge_dietary_restrictions(raw),
            ready_in_minutes: raw.ready_in_minutes,
            servings: raw
                .servings
                .filter(|servings| *servings > 0)
                .unwrap_or(DEFAULT_SERVINGS),
            ingredients: map_ingredients(raw),
            instructions: raw
                .instructions
                .as_ref()
                .map(join_instructions)
                .unwrap_or_default(),
            source_url: first_non_blank([raw.source_url.as_deref()]).map(str::to_owned),
            ratings: raw
                .ratings
                .iter()
                .flatten()
                .filter_map(|rating| rating.score())
                .collect(),
            source_type: source,
        }
    }
}

fn first_non_blank<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// `cuisines[]` then `cuisine`, case preserved, first spelling wins.
fn merge_cuisines(raw: &RawRecipe) -> Vec<String> {
    let mut cuisines: Vec<String> = Vec::new();
    let candidates = raw
        .cuisines
        .iter()
        .flatten()
        .chain(raw.cuisine.iter().flat_map(OneOrMany::iter));

    for candidate in candidates {
        let cuisine = candidate.trim();
        if cuisine.is_empty() || cuisines.iter().any(|c| c.eq_ignore_ascii_case(cuisine)) {
            continue;
        }

        cuisines.push(cuisine.to_owned());
    }

    cuisines
}

/// `diets[]`, `dietaryRestrictions[]` and the vegetarian/vegan flags, lower-cased.
fn merge_dietary_restrictions(raw: &RawRecipe) -> Vec<String> {
    let flags = [
        (raw.vegetarian, "vegetarian"),
        (raw.vegan, "vegan"),
    ]
    .into_iter()
    .filter(|(flag, _)| flag.unwrap_or(false))
    .map(|(_, tag)| tag);

    let mut tags: Vec<String> = Vec::new();
    let candidates = raw
        .diets
        .iter()
        .flatten()
        .chain(raw.dietary_restrictions.iter().flatten())
        .map(String::as_str)
        .chain(flags);

    for candidate in candidates {
        let tag = candidate.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    tags
}

fn map_ingredients(raw: &RawRecipe) -> Vec<Ingredient> {
    let Some(ingredients) = raw
        .extended_ingredients
        .as_ref()
        .or(raw.ingredients.as_ref())
    else {
        return Vec::new();
    };

    ingredients.iter().filter_map(map_ingredient).collect()
}

fn map_ingredient(ingredient: &RawIngredient) -> Option<Ingredient> {
    let name = first_non_blank([ingredient.name.as_deref()])?;

    Some(Ingredient {
        name: name.to_owned(),
        amount: ingredient
            .amount
            .as_ref()
            .map(|amount| amount.to_string())
            .filter(|amount| !amount.is_empty()),
        unit: first_non_blank([ingredient.unit.as_deref()]).map(str::to_owned),
    })
}

fn join_instructions(instructions: &OneOrMany<String>) -> String {
    instructions
        .iter()
        .map(|step| step.trim())
        .filter(|step| !step.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
