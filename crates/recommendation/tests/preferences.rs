use recipehub_recommendation::{PreferenceMatcher, RecipeNormalizer};
use recipehub_recommendation::dietary::{parse_requirements, satisfies_all};
use recipehub_shared::{NormalizedRecipe, RecipeSource, UserPreferences};

mod helpers;

use helpers::{ids, strings};

fn dietary_pool() -> Vec<NormalizedRecipe> {
    let normalizer = RecipeNormalizer::default();
    let tags: [&[&str]; 6] = [
        &["vegetarian"],
        &["veg", "gluten free"],
        &[],
        &["glutenfree", "vegetarian"],
        &["vegan"],
        &["Gluten-Free"],
    ];

    tags.iter()
        .enumerate()
        .map(|(i, diets)| {
            let raw = helpers::raw_with_diets(format!("d{i}"), "Veggie Pasta", "Italian", diets);
            normalizer.normalize_as(&raw, RecipeSource::Manual)
        })
        .collect()
}

#[test]
fn test_every_result_satisfies_every_restriction() {
    let pool = dietary_pool();

    let cases: [&[&str]; 3] = [
        &["vegetarian"],
        &["gluten-free"],
        &["Vegetarian", "Gluten Free"],
    ];

    for restrictions in cases {
        let preferences = UserPreferences {
            dietary_restrictions: strings(restrictions),
            favorite_foods: strings(&["pasta"]),
            favorite_cuisines: strings(&["italian"]),
            ..Default::default()
        };
        let requirements = parse_requirements(&preferences.dietary_restrictions);

        let picked = PreferenceMatcher::default().select(&pool, &preferences);

        assert!(!picked.is_empty());
        assert!(picked.iter().all(|r| satisfies_all(r, &requirements)));
    }
}

#[test]
fn test_combined_restrictions() {
    let preferences = UserPreferences {
        dietary_restrictions: strings(&["Vegetarian", "Gluten Free"]),
        favorite_cuisines: strings(&["italian"]),
        ..Default::default()
    };

    let picked = PreferenceMatcher::default().select(&dietary_pool(), &preferences);
    assert_eq!(ids(&picked), vec!["d1", "d3"]);
}

#[test]
fn test_fewer_matches_are_not_padded() {
    let pool = vec![
        helpers::recipe("1", "Pad Thai", "Thai", RecipeSource::Saved),
        helpers::recipe("2", "Goulash", "Hungarian", RecipeSource::Saved),
        helpers::recipe("3", "Burger", "American", RecipeSource::Manual),
        helpers::recipe("4", "Green Curry", "Thai", RecipeSource::External),
    ];
    let preferences = UserPreferences {
        favorite_cuisines: strings(&["thai"]),
        favorite_foods: strings(&["burrito"]),
        ..Default::default()
    };

    let picked = PreferenceMatcher::default().select(&pool, &preferences);
    assert_eq!(ids(&picked), vec!["1", "4"]);
}

#[test]
fn test_favorite_food_before_favorite_cuisine() {
    let pool = vec![
        helpers::recipe("B", "Chicken Soup", "Mexican", RecipeSource::Saved),
        helpers::recipe("A", "Tacos", "American", RecipeSource::Saved),
    ];
    let preferences = UserPreferences {
        favorite_foods: strings(&["tacos"]),
        favorite_cuisines: strings(&["mexican"]),
        ..Default::default()
    };

    let picked = PreferenceMatcher::default().select(&pool, &preferences);
    assert_eq!(ids(&picked), vec!["A", "B"]);
}

#[test]
fn test_cuisines_alternate() {
    let pool = vec![
        helpers::recipe("i1", "Risotto", "Italian", RecipeSource::Saved),
        helpers::recipe("i2", "Lasagna", "Italian", RecipeSource::Saved),
        helpers::recipe("i3", "Gnocchi", "Italian", RecipeSource::Manual),
        helpers::recipe("m1", "Mole", "Mexican", RecipeSource::Manual),
        helpers::recipe("m2", "Pozole", "Mexican", RecipeSource::External),
        helpers::recipe("m3", "Tamales", "Mexican", RecipeSource::External),
    ];
    let preferences = UserPreferences {
        favorite_cuisines: strings(&["italian", "mexican"]),
        ..Default::default()
    };

    let picked = PreferenceMatcher::new(4, 4).select(&pool, &preferences);
    assert_eq!(ids(&picked), vec!["i1", "m1", "i2", "m2"]);
}
