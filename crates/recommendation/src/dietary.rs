use recipehub_shared::NormalizedRecipe;

/// Spellings treated as the same restriction. Anything not listed here only
/// matches itself.
const SYNONYMS: &[&[&str]] = &[
    &["vegetarian", "veg"],
    &["gluten-free", "gluten free", "glutenfree"],
    &["dairy-free", "dairy free", "dairyfree"],
    &["keto", "ketogenic"],
    &["paleo", "paleolithic"],
    &["low-carb", "low carb", "lowcarb"],
    &["low-calorie", "low calorie", "lowcalorie"],
    &["high-protein", "high protein", "highprotein"],
];

/// One requested restriction together with every tag that satisfies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DietaryRequirement {
    accepted: Vec<String>,
}

impl DietaryRequirement {
    /// `None` for blank input.
    pub fn parse(restriction: &str) -> Option<Self> {
        let restriction = restriction.trim().to_lowercase();
        if restriction.is_empty() {
            return None;
        }

        let accepted = SYNONYMS
            .iter()
            .find(|group| group.contains(&restriction.as_str()))
            .map(|group| group.iter().map(|tag| tag.to_string()).collect())
            .unwrap_or_else(|| vec![restriction]);

        Some(Self { accepted })
    }

    pub fn is_satisfied_by(&self, recipe: &NormalizedRecipe) -> bool {
        recipe
            .dietary_restrictions
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .any(|tag| self.accepted.contains(&tag))
    }
}

pub fn parse_requirements(restrictions: &[String]) -> Vec<DietaryRequirement> {
    restrictions
        .iter()
        .filter_map(|r| DietaryRequirement::parse(r))
        .collect()
}

pub fn satisfies_all(recipe: &NormalizedRecipe, requirements: &[DietaryRequirement]) -> bool {
    requirements.iter().all(|r| r.is_satisfied_by(recipe))
}

/// Keeps only recipes satisfying every restriction (AND logic).
///
/// Recipes without dietary tags never pass a non-empty restriction list.
/// An empty (or all-blank) list keeps everything.
pub fn filter_by_dietary_restrictions<'a>(
    recipes: impl IntoIterator<Item = &'a NormalizedRecipe>,
    restrictions: &[String],
) -> Vec<&'a NormalizedRecipe> {
    let requirements = parse_requirements(restrictions);

    recipes
        .into_iter()
        .filter(|recipe| satisfies_all(recipe, &requirements))
        .collect()
}
