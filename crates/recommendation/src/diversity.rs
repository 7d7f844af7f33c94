use std::collections::HashSet;

use recipehub_shared::{RecipeKey, RecipeSource, ScoredRecipe};

/// Picks up to `count` recipes, best scores first, spreading cuisines and sources.
///
/// The highest-scoring recipe is always taken first. Until half of the slots
/// are filled, the next pick is the best remaining recipe whose cuisine or
/// source has not been picked yet; once half are filled, or when no such
/// recipe is left, the next pick is simply the best remaining one, so slots
/// skipped for repetition are filled from the skipped recipes in score order.
///
/// Returns `min(count, distinct recipes in pool)` recipes; the pool is not
/// modified and ties keep their pool order.
pub fn select_diverse(pool: &[ScoredRecipe], count: usize) -> Vec<ScoredRecipe> {
    let mut keys: HashSet<RecipeKey> = HashSet::new();
    let mut remaining: Vec<&ScoredRecipe> = pool
        .iter()
        .filter(|candidate| keys.insert(candidate.recipe.key()))
        .collect();
    remaining.sort_by(|a, b| b.quality_score.cmp(&a.quality_score));

    let mut selected: Vec<&ScoredRecipe> = Vec::with_capacity(count.min(remaining.len()));
    let mut cuisines: HashSet<String> = HashSet::new();
    let mut sources: HashSet<RecipeSource> = HashSet::new();

    while selected.len() < count && !remaining.is_empty() {
        let diversity_phase = !selected.is_empty() && selected.len() * 2 < count;
        let position = if diversity_phase {
            remaining
                .iter()
                .position(|candidate| {
                    !cuisines.contains(&cuisine_of(candidate))
                        || !sources.contains(&candidate.recipe.source_type)
                })
                .unwrap_or(0)
        } else {
            0
        };

        let candidate = remaining.remove(position);
        cuisines.insert(cuisine_of(candidate));
        sources.insert(candidate.recipe.source_type);
        selected.push(candidate);
    }

    tracing::debug!(
        pool = pool.len(),
        requested = count,
        selected = selected.len(),
        "diverse selection complete"
    );

    selected.into_iter().cloned().collect()
}

fn cuisine_of(candidate: &ScoredRecipe) -> String {
    candidate.recipe.primary_cuisine().to_lowercase()
}
