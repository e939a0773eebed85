use compara_error::{ComparaError, Result};
use compara_registry::SpecCategory;
use serde::{Deserialize, Serialize};

use crate::ComparableSpec;

/// Which finished rows a surface displays.
///
/// Filtering happens after the comparison, so winners and deltas are the
/// same whichever options a surface picks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComparisonOptions {
    /// Hide rows where every product has the same value.
    pub only_differences: bool,
    /// Restrict to these categories. Empty means all.
    pub categories: Vec<SpecCategory>,
}

impl ComparisonOptions {
    /// The "show only differences" toggle.
    pub fn differences_only() -> Self {
        Self {
            only_differences: true,
            ..Self::default()
        }
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = SpecCategory>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Decode options persisted by a surface.
    ///
    /// # Errors
    ///
    /// Returns [`ComparaError::MalformedOptions`] if the JSON does not decode.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ComparaError::malformed_options)
    }

    pub fn accepts(&self, row: &ComparableSpec) -> bool {
        if self.only_differences && !row.is_different {
            return false;
        }
        self.categories.is_empty() || self.categories.contains(&row.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accepts_everything() {
        let options = ComparisonOptions::default();
        assert!(!options.only_differences);
        assert!(options.categories.is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options = ComparisonOptions::from_json(r#"{"onlyDifferences": true}"#).unwrap();
        assert_eq!(options, ComparisonOptions::differences_only());
    }

    #[test]
    fn categories_decode_snake_case() {
        let options =
            ComparisonOptions::from_json(r#"{"categories": ["price", "memory"]}"#).unwrap();
        assert_eq!(
            options.categories,
            [SpecCategory::Price, SpecCategory::Memory]
        );
    }

    #[test]
    fn bad_json_is_reported() {
        let err = ComparisonOptions::from_json(r#"{"categories": ["gpu"]}"#).unwrap_err();
        assert!(matches!(err, ComparaError::MalformedOptions { .. }));
    }
}
