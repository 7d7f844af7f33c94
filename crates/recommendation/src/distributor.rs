use std::collections::{HashSet, VecDeque};

use recipehub_shared::{NormalizedRecipe, RecipeKey};

/// Whether `cuisine` (already trimmed and lower-cased) appears in any of the
/// recipe's cuisine tags or in its title.
pub fn matches_cuisine(recipe: &NormalizedRecipe, cuisine: &str) -> bool {
    recipe
        .cuisines
        .iter()
        .any(|tag| tag.to_lowercase().contains(cuisine))
        || recipe.title.to_lowercase().contains(cuisine)
}

pub fn matches_any_cuisine(recipe: &NormalizedRecipe, cuisines: &[String]) -> bool {
    cuisines.iter().any(|cuisine| matches_cuisine(recipe, cuisine))
}

/// Round-robins `candidates` across `cuisines`, one recipe per cuisine per round.
///
/// Each cuisine draws from its own matches in candidate order. A recipe
/// matching several cuisines goes to whichever cuisine reaches it first.
/// Cuisines that run out are skipped while the others keep their turn order,
/// so the result only depends on the input order. Stops after `budget`
/// picks or when every cuisine is exhausted. Keys of picked recipes are
/// added to `selected`, and recipes already in it are never picked.
pub fn distribute_by_cuisine<'a>(
    candidates: &[&'a NormalizedRecipe],
    cuisines: &[String],
    budget: usize,
    selected: &mut HashSet<RecipeKey>,
) -> Vec<&'a NormalizedRecipe> {
    let mut queues: Vec<VecDeque<&'a NormalizedRecipe>> = cuisines
        .iter()
        .map(|cuisine| {
            candidates
                .iter()
                .copied()
                .filter(|recipe| matches_cuisine(recipe, cuisine))
                .collect()
        })
        .collect();

    let mut picked = Vec::new();

    'rounds: loop {
        let mut progressed = false;

        for queue in queues.iter_mut() {
            if picked.len() >= budget {
                break 'rounds;
            }

            while let Some(recipe) = queue.pop_front() {
                if selected.insert(recipe.key()) {
                    picked.push(recipe);
                    progressed = true;
                    break;
                }
            }
        }

        if !progressed {
            break;
        }
    }

    picked
}
