//! Reads provider snapshots from JSON files.
//!
//! A file that cannot be read, or is not JSON at all, is an error. Inside a
//! valid file, entries that are not JSON objects are skipped with a warning.
//! Objects always decode; fields of the wrong type read as absent and are
//! filled in by the normalizer.

use std::fs;
use std::path::{Path, PathBuf};

use recipehub_recommendation::RecommendationSources;
use recipehub_shared::{BackendResponse, RawRecipe, UserPreferences};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, Result};

/// Snapshot files for one `recommend` run. Missing paths mean "not loaded".
#[derive(Debug, Clone, Default)]
pub struct SourcePaths {
    pub saved: Option<PathBuf>,
    pub manual: Option<PathBuf>,
    pub backend: Option<PathBuf>,
    pub popular: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BackendFile {
    List(Vec<Value>),
    Envelope { recommendations: Vec<Value> },
}

impl SourcePaths {
    pub fn load(&self) -> Result<RecommendationSources> {
        Ok(RecommendationSources {
            saved: self.saved.as_deref().map(load_recipes).transpose()?,
            manual: self.manual.as_deref().map(load_recipes).transpose()?,
            backend: self.backend.as_deref().map(load_backend).transpose()?,
            popular: self.popular.as_deref().map(load_recipes).transpose()?,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| AppError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| AppError::JsonError {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_records(path: &Path, records: Vec<Value>) -> Vec<RawRecipe> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(recipe) => Some(recipe),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    index,
                    error = %err,
                    "skipping malformed recipe record"
                );
                None
            }
        })
        .collect()
}

/// A JSON array of recipe records. `null` reads as an empty list.
pub fn load_recipes(path: &Path) -> Result<Vec<RawRecipe>> {
    let records: Option<Vec<Value>> = read_json(path)?;
    let recipes = decode_records(path, records.unwrap_or_default());

    tracing::debug!(path = %path.display(), recipes = recipes.len(), "recipes loaded");

    Ok(recipes)
}

/// Either a flat recipe array or `{ "recommendations": [...] }`.
pub fn load_backend(path: &Path) -> Result<BackendResponse> {
    let response = match read_json::<Option<BackendFile>>(path)? {
        None => BackendResponse::default(),
        Some(BackendFile::List(records)) => BackendResponse::List(decode_records(path, records)),
        Some(BackendFile::Envelope { recommendations }) => BackendResponse::Recommendations {
            recommendations: decode_records(path, recommendations),
        },
    };

    tracing::debug!(
        path = %path.display(),
        recipes = response.recipes().len(),
        precomputed = response.recommendations().is_some(),
        "backend response loaded"
    );

    Ok(response)
}

/// `None` for a `null` file. A JSON value that is not a preferences object
/// is treated the same way, with a warning.
pub fn load_preferences(path: &Path) -> Result<Option<UserPreferences>> {
    let Some(value) = read_json::<Option<Value>>(path)? else {
        return Ok(None);
    };

    match serde_json::from_value(value) {
        Ok(preferences) => Ok(Some(preferences)),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "ignoring undecodable preferences"
            );
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipehub_recommendation::RecipeNormalizer;
    use recipehub_shared::{DEFAULT_SERVINGS, RecipeSource};
    use temp_dir::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.child(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_non_object_records_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "saved.json",
            r#"[{"id": "a", "title": "Soup"}, 42, {"id": "b", "servings": "lots"}, {"id": "c"}]"#,
        );

        let recipes = load_recipes(&path).unwrap();
        let ids: Vec<String> = recipes
            .iter()
            .filter_map(|r| r.id.as_ref().map(|id| id.to_string()))
            .collect();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_off_type_fields_degrade_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "manual.json",
            r#"[{"id": "b", "servings": "lots", "sourceType": "Manual",
                 "cuisines": [null, "Thai"]}]"#,
        );

        let recipes = load_recipes(&path).unwrap();
        let recipe = RecipeNormalizer::default().normalize(&recipes[0]);

        assert_eq!(recipe.id, "b");
        assert_eq!(recipe.servings, DEFAULT_SERVINGS);
        assert_eq!(recipe.source_type, RecipeSource::Manual);
        assert_eq!(recipe.cuisines, vec!["Thai"]);
    }

    #[test]
    fn test_null_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "manual.json", "null");

        assert!(load_recipes(&path).unwrap().is_empty());
        assert_eq!(load_backend(&path).unwrap(), BackendResponse::default());
        assert_eq!(load_preferences(&path).unwrap(), None);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "saved.json", "[{");

        assert!(matches!(load_recipes(&path), Err(AppError::JsonError { .. })));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();

        let err = load_recipes(&dir.child("nope.json")).unwrap_err();
        assert!(matches!(err, AppError::IoError { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_backend_envelope() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "backend.json",
            r#"{"recommendations": [{"id": 1, "title": "Pho"}, "junk"]}"#,
        );

        let response = load_backend(&path).unwrap();
        assert_eq!(response.recommendations().map(<[RawRecipe]>::len), Some(1));
    }

    #[test]
    fn test_preferences_of_wrong_shape_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "prefs.json", r#"{"favoriteCuisines": "italian"}"#);

        assert_eq!(load_preferences(&path).unwrap(), None);
    }

    #[test]
    fn test_unset_paths_stay_unloaded() {
        let dir = TempDir::new().unwrap();
        let paths = SourcePaths {
            saved: Some(write(&dir, "saved.json", r#"[{"id": "s1"}]"#)),
            ..Default::default()
        };

        let sources = paths.load().unwrap();
        assert_eq!(sources.saved.map(|s| s.len()), Some(1));
        assert!(sources.manual.is_none());
        assert!(sources.backend.is_none());
    }
}
