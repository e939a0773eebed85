use std::collections::BTreeSet;
use std::sync::LazyLock;

use compara_error::{ComparaError, Result};
use tracing::debug;

use crate::definition::{SpecCategory, SpecDefinition};
use crate::standard::standard_definitions;

static STANDARD: LazyLock<SpecRegistry> = LazyLock::new(|| SpecRegistry {
    definitions: standard_definitions(),
});

/// Ordered, read-only table of [`SpecDefinition`]s.
///
/// The process-wide [`SpecRegistry::standard`] instance is built on first
/// use and never mutated afterwards, so it can be shared across threads
/// without locking.
#[derive(Debug, Clone)]
pub struct SpecRegistry {
    definitions: Vec<SpecDefinition>,
}

impl SpecRegistry {
    /// The standard laptop catalog.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Build a custom registry.
    ///
    /// # Errors
    ///
    /// - [`ComparaError::DuplicateSpecKey`] if two definitions share a key.
    /// - [`ComparaError::Internal`] if a missing-value policy would rank
    ///   absent data as the best value.
    pub fn from_definitions(definitions: Vec<SpecDefinition>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for def in &definitions {
            if !seen.insert(def.key) {
                return Err(ComparaError::DuplicateSpecKey {
                    key: def.key.to_owned(),
                });
            }
            if !def.missing.is_consistent_with(def.higher_is_better) {
                return Err(ComparaError::internal(format!(
                    "spec {}: missing-value policy {:?} favors absent data",
                    def.key, def.missing
                )));
            }
        }
        debug!(specs = definitions.len(), "spec registry built");
        Ok(Self { definitions })
    }

    /// Every definition in row order.
    pub fn list_all(&self) -> &[SpecDefinition] {
        &self.definitions
    }

    /// Look up a definition by key.
    ///
    /// # Errors
    ///
    /// Returns [`ComparaError::UnknownSpecKey`] if `key` is not registered.
    pub fn get(&self, key: &str) -> Result<&SpecDefinition> {
        self.definitions
            .iter()
            .find(|def| def.key == key)
            .ok_or_else(|| ComparaError::unknown_spec_key(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.definitions.iter().any(|def| def.key == key)
    }

    /// Definitions in `category`, in row order.
    pub fn by_category(&self, category: SpecCategory) -> Vec<&SpecDefinition> {
        self.definitions
            .iter()
            .filter(|def| def.category == category)
            .collect()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.definitions.iter().map(|def| def.key).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::MissingValue;
    use crate::standard::keys;

    #[test]
    fn standard_definitions_pass_validation() {
        let registry = SpecRegistry::from_definitions(standard_definitions()).unwrap();
        assert_eq!(registry.len(), SpecRegistry::standard().len());
    }

    #[test]
    fn list_all_is_stable_across_calls() {
        let first = SpecRegistry::standard().keys();
        let second = SpecRegistry::standard().keys();
        assert_eq!(first, second);
        assert_eq!(first.first(), Some(&keys::PROCESSOR));
        assert_eq!(first.last(), Some(&keys::QUOTA_MONTHLY));
    }

    #[test]
    fn get_known_key() {
        let def = SpecRegistry::standard().get(keys::RAM).unwrap();
        assert_eq!(def.label, "Memoria RAM");
        assert!(def.higher_is_better);
    }

    #[test]
    fn get_unknown_key_fails() {
        let err = SpecRegistry::standard().get("thunderbolt").unwrap_err();
        assert_eq!(
            err,
            ComparaError::UnknownSpecKey {
                key: "thunderbolt".to_owned()
            }
        );
        assert!(!SpecRegistry::standard().contains("thunderbolt"));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut defs = standard_definitions();
        let ram = *SpecRegistry::standard().get(keys::RAM).unwrap();
        defs.push(ram);
        let err = SpecRegistry::from_definitions(defs).unwrap_err();
        assert_eq!(
            err,
            ComparaError::DuplicateSpecKey {
                key: "ram".to_owned()
            }
        );
    }

    #[test]
    fn inconsistent_missing_policy_is_rejected() {
        let weight = SpecRegistry::standard()
            .get(keys::WEIGHT)
            .unwrap()
            .with_missing(MissingValue::Floor);
        let err = SpecRegistry::from_definitions(vec![weight]).unwrap_err();
        assert!(matches!(err, ComparaError::Internal(_)));
    }

    #[test]
    fn by_category_keeps_row_order() {
        let display: Vec<_> = SpecRegistry::standard()
            .by_category(SpecCategory::Display)
            .into_iter()
            .map(|def| def.key)
            .collect();
        assert_eq!(
            display,
            [
                keys::DISPLAY_SIZE,
                keys::DISPLAY_RESOLUTION,
                keys::REFRESH_RATE
            ]
        );
    }

    #[test]
    fn every_category_is_populated() {
        for category in SpecCategory::ALL {
            assert!(
                !SpecRegistry::standard().by_category(category).is_empty(),
                "no specs in {category}"
            );
        }
    }

    #[test]
    fn empty_registry_is_allowed() {
        let registry = SpecRegistry::from_definitions(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.list_all().is_empty());
    }
}
