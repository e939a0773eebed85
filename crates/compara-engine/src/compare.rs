//! Per-attribute comparison rows.
//!
//! Winner rules, in order:
//! 1. No variation across the selection: no winner.
//! 2. The extreme value (max when higher is better, min otherwise) held by
//!    exactly one product: that product wins.
//! 3. The extreme value shared by two or more products: no winner.

use compara_error::Result;
use compara_registry::{SpecCategory, SpecDefinition, SpecRegistry};
use compara_types::Product;
use serde::{Serialize, Serializer};
use tracing::{debug, info};

/// One comparison row. Vectors are indexed like the input selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparableSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub category: SpecCategory,
    pub higher_is_better: bool,
    /// Comparable magnitude per product. Serialized as JSON numbers, with
    /// the non-finite fallback for an unpublished attribute written as
    /// `null`. Read `missing` before ranking on the JSON side.
    #[serde(serialize_with = "serialize_magnitudes")]
    pub raw_values: Vec<f64>,
    /// `true` where the product does not publish the attribute and
    /// `raw_values` holds the missing-value fallback.
    pub missing: Vec<bool>,
    /// Display string per product.
    pub values: Vec<String>,
    /// `true` iff `raw_values` holds at least two distinct values.
    pub is_different: bool,
    /// Index of the product holding the unique best value.
    pub winner: Option<usize>,
}

impl ComparableSpec {
    pub fn is_winner(&self, index: usize) -> bool {
        self.winner == Some(index)
    }

    pub fn product_count(&self) -> usize {
        self.raw_values.len()
    }
}

fn serialize_magnitudes<S: Serializer>(
    values: &[f64],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|value| value.is_finite().then_some(*value)))
}

/// Compare `products` across the standard registry.
///
/// Returns one row per definition in registry order, or an empty list for an
/// empty selection. A single product yields rows without differences.
///
/// # Errors
///
/// - [`InvalidProductData`](compara_error::ComparaError::InvalidProductData)
///   if any product has a negative or non-finite price or quota.
/// - [`InvalidSpecValue`](compara_error::ComparaError::InvalidSpecValue) if
///   any attribute extracts to a non-finite or negative magnitude.
pub fn compare_specs(products: &[Product]) -> Result<Vec<ComparableSpec>> {
    compare_specs_with(SpecRegistry::standard(), products)
}

/// [`compare_specs`] against a caller-supplied registry.
///
/// # Errors
///
/// Same as [`compare_specs`].
pub fn compare_specs_with(
    registry: &SpecRegistry,
    products: &[Product],
) -> Result<Vec<ComparableSpec>> {
    if products.is_empty() {
        return Ok(Vec::new());
    }
    for product in products {
        product.validate()?;
    }

    let rows = registry
        .list_all()
        .iter()
        .map(|def| compare_spec(def, products))
        .collect::<Result<Vec<_>>>()?;

    info!(
        products = products.len(),
        specs = rows.len(),
        differing = rows.iter().filter(|row| row.is_different).count(),
        "specs compared"
    );
    Ok(rows)
}

fn compare_spec(def: &SpecDefinition, products: &[Product]) -> Result<ComparableSpec> {
    let raw_values = products
        .iter()
        .map(|product| def.extract_raw(product))
        .collect::<Result<Vec<_>>>()?;
    let missing = products
        .iter()
        .map(|product| !def.is_published(product))
        .collect();
    let values = products.iter().map(|product| def.format(product)).collect();

    let is_different = raw_values.windows(2).any(|pair| pair[0] != pair[1]);
    let winner = if is_different {
        unique_extreme(&raw_values, def.higher_is_better)
    } else {
        None
    };

    debug!(key = def.key, is_different, winner = ?winner, "spec compared");

    Ok(ComparableSpec {
        key: def.key,
        label: def.label,
        category: def.category,
        higher_is_better: def.higher_is_better,
        raw_values,
        missing,
        values,
        is_different,
        winner,
    })
}

/// Index of the single occurrence of the best value, or `None` when the best
/// value is shared.
fn unique_extreme(raw_values: &[f64], higher_is_better: bool) -> Option<usize> {
    let best = raw_values
        .iter()
        .copied()
        .reduce(|a, b| if higher_is_better { a.max(b) } else { a.min(b) })?;

    let mut holders = raw_values
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value == best)
        .map(|(index, _)| index);
    let first = holders.next()?;
    if holders.next().is_some() {
        return None;
    }
    Some(first)
}
