use serde::{Deserialize, Serialize};

use crate::recipe::{NormalizedRecipe, RawRecipe};

/// Payload of the backend recipe provider.
///
/// Older deployments answer with a flat list of recipes; newer ones wrap a
/// precomputed, per-user list in `{ "recommendations": [...] }`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum BackendResponse {
    List(Vec<RawRecipe>),
    Recommendations { recommendations: Vec<RawRecipe> },
}

impl Default for BackendResponse {
    fn default() -> Self {
        BackendResponse::List(Vec::new())
    }
}

impl BackendResponse {
    pub fn recipes(&self) -> &[RawRecipe] {
        match self {
            BackendResponse::List(recipes) => recipes,
            BackendResponse::Recommendations { recommendations } => recommendations,
        }
    }

    /// The precomputed recommendation list, if the backend sent one.
    pub fn recommendations(&self) -> Option<&[RawRecipe]> {
        match self {
            BackendResponse::List(_) => None,
            BackendResponse::Recommendations { recommendations } => Some(recommendations),
        }
    }
}

/// Homepage carousels. Derived on every input change, never stored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RecommendationSet {
    pub recommended: Vec<NormalizedRecipe>,
    pub popular: Vec<NormalizedRecipe>,
    pub newest: Vec<NormalizedRecipe>,
}

impl RecommendationSet {
    pub fn is_empty(&self) -> bool {
        self.recommended.is_empty() && self.popular.is_empty() && self.newest.is_empty()
    }
}
