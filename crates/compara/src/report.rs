use compara_engine::{
    ComparableSpec, PriceDifference, calculate_price_difference, compare_specs_with,
};
use compara_error::{ComparaError, Result};
use compara_registry::SpecRegistry;
use compara_types::Product;
use serde::Serialize;
use tracing::debug;

use crate::ComparisonOptions;

/// Everything a comparison surface renders for one selection.
///
/// A snapshot: valid only for the selection it was built from. Rebuild it
/// whenever the selection changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    /// Selected product ids, in column order.
    pub product_ids: Vec<String>,
    pub specs: Vec<ComparableSpec>,
    pub price_difference: PriceDifference,
}

impl ComparisonReport {
    /// Build against the standard registry.
    ///
    /// # Errors
    ///
    /// Propagates any engine error; no partial report is returned.
    pub fn build(products: &[Product]) -> Result<Self> {
        Self::build_with(SpecRegistry::standard(), products)
    }

    /// Build against a custom registry.
    ///
    /// # Errors
    ///
    /// Propagates any engine error; no partial report is returned.
    pub fn build_with(registry: &SpecRegistry, products: &[Product]) -> Result<Self> {
        let specs = compare_specs_with(registry, products)?;
        let price_difference = calculate_price_difference(products)?;
        debug!(products = products.len(), "comparison report built");
        Ok(Self {
            product_ids: products.iter().map(|product| product.id.clone()).collect(),
            specs,
            price_difference,
        })
    }

    /// Rows accepted by `options`, in registry order.
    pub fn rows(&self, options: &ComparisonOptions) -> Vec<&ComparableSpec> {
        self.specs.iter().filter(|row| options.accepts(row)).collect()
    }

    /// The row for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ComparaError::UnknownSpecKey`] if no row has that key.
    pub fn spec(&self, key: &str) -> Result<&ComparableSpec> {
        self.specs
            .iter()
            .find(|row| row.key == key)
            .ok_or_else(|| ComparaError::unknown_spec_key(key))
    }

    /// # Errors
    ///
    /// Returns [`ComparaError::Internal`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ComparaError::internal(format!("report encode failed: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compara_registry::keys;
    use compara_types::testutil::{laptop, laptop_with_ram};

    #[test]
    fn spec_lookup() {
        let report = ComparisonReport::build(&[laptop("a"), laptop_with_ram("b", 16)]).unwrap();
        assert_eq!(report.spec(keys::RAM).unwrap().winner, Some(1));
        assert!(matches!(
            report.spec("nfc"),
            Err(ComparaError::UnknownSpecKey { .. })
        ));
    }

    #[test]
    fn empty_selection_builds_empty_report() {
        let report = ComparisonReport::build(&[]).unwrap();
        assert!(report.product_ids.is_empty());
        assert!(report.specs.is_empty());
        assert_eq!(report.price_difference, PriceDifference::default());
    }
}
