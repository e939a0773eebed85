//! Catalog JSON loading.
//!
//! The catalog collaborator hands over products as a JSON array. Loading is
//! all-or-nothing: a single malformed or invalid product rejects the batch.

use std::collections::BTreeSet;

use compara_error::{ComparaError, Result};
use tracing::debug;

use crate::Product;

/// Decode and validate a JSON array of products.
///
/// # Errors
///
/// - [`ComparaError::MalformedCatalog`] if the JSON does not decode or two
///   products share an id.
/// - [`ComparaError::InvalidProductData`] if a product breaks the money
///   invariants.
pub fn catalog_from_json(json: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> =
        serde_json::from_str(json).map_err(ComparaError::malformed_catalog)?;

    let mut seen = BTreeSet::new();
    for product in &products {
        product.validate()?;
        if !seen.insert(product.id.as_str()) {
            return Err(ComparaError::MalformedCatalog {
                detail: format!("duplicate product id {}", product.id),
            });
        }
    }

    debug!(products = products.len(), "catalog decoded");
    Ok(products)
}

/// Encode products as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`ComparaError::Internal`] if serialization fails.
pub fn catalog_to_json(products: &[Product]) -> Result<String> {
    serde_json::to_string_pretty(products)
        .map_err(|err| ComparaError::internal(format!("catalog encode failed: {err}")))
}
