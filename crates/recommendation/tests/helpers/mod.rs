#![allow(dead_code)]

use recipehub_recommendation::RecipeNormalizer;
use recipehub_shared::{NormalizedRecipe, RawRecipe, RecipeSource};
use serde_json::{Value, json};

pub fn raw(value: Value) -> RawRecipe {
    serde_json::from_value(value).expect("fixture should decode as a raw recipe")
}

pub fn raw_recipe(id: impl Into<Value>, title: &str, cuisine: &str) -> RawRecipe {
    raw(json!({
        "id": id.into(),
        "title": title,
        "cuisine": cuisine,
    }))
}

pub fn raw_with_diets(
    id: impl Into<Value>,
    title: &str,
    cuisine: &str,
    diets: &[&str],
) -> RawRecipe {
    raw(json!({
        "id": id.into(),
        "title": title,
        "cuisines": [cuisine],
        "diets": diets,
    }))
}

pub fn recipe(id: &str, title: &str, cuisine: &str, source: RecipeSource) -> NormalizedRecipe {
    RecipeNormalizer::default().normalize_as(&raw_recipe(id, title, cuisine), source)
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn ids(recipes: &[NormalizedRecipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.id.as_str()).collect()
}

/// A recipe that earns points in every scoring category but ratings.
pub fn complete_manual_recipe() -> RawRecipe {
    raw(json!({
        "id": "complete",
        "title": "Lemon Ricotta Pasta",
        "description": "Bright, creamy pasta tossed with lemon zest and fresh ricotta.",
        "image": "https://cdn.example.com/recipes/lemon-ricotta.jpg",
        "cuisine": "Italian",
        "dietaryRestrictions": ["Vegetarian"],
        "ingredients": [
            { "name": "spaghetti", "amount": 400, "unit": "g" },
            { "name": "ricotta", "amount": 250, "unit": "g" },
            { "name": "lemon", "amount": 1 },
            { "name": "parmesan", "amount": "50", "unit": "g" },
            { "name": "black pepper" },
            { "name": "basil" }
        ],
        "instructions": concat!(
            "Cook the pasta in salted water. Meanwhile whisk ricotta with lemon zest, ",
            "juice and parmesan. Toss everything with a splash of pasta water."
        ),
        "sourceType": "manual"
    }))
}
