//! Monthly quota deltas and yearly saving.

use compara_error::Result;
use compara_types::Product;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Instalments per year used to annualize the monthly delta.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Quota deltas for a selection, indexed like the input selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDifference {
    /// `quota_monthly - min(quota_monthly)` per product. Never negative.
    pub quota: Vec<f64>,
    /// `(max - min) * 12` over the selection's monthly quotas.
    pub annual_saving: f64,
}

impl PriceDifference {
    /// Indices of the products tied for the lowest monthly quota.
    pub fn cheapest(&self) -> Vec<usize> {
        self.quota
            .iter()
            .enumerate()
            .filter(|&(_, &delta)| delta == 0.0)
            .map(|(index, _)| index)
            .collect()
    }

    /// Largest monthly delta, i.e. the monthly saving of the cheapest over
    /// the most expensive product.
    pub fn max_monthly_delta(&self) -> f64 {
        self.quota.iter().copied().fold(0.0, f64::max)
    }
}

/// Monthly quota deltas and yearly saving for a selection.
///
/// Each delta is measured against the cheapest selected quota. The saving
/// is what choosing the cheapest over the most expensive saves in a year.
/// An empty selection yields no deltas and no saving.
///
/// # Errors
///
/// Returns [`InvalidProductData`](compara_error::ComparaError::InvalidProductData)
/// if any product has a negative or non-finite quota or price.
pub fn calculate_price_difference(products: &[Product]) -> Result<PriceDifference> {
    for product in products {
        product.validate()?;
    }
    let Some(first) = products.first() else {
        return Ok(PriceDifference::default());
    };

    let (min_quota, max_quota) = products.iter().fold(
        (first.quota_monthly, first.quota_monthly),
        |(lo, hi), product| (lo.min(product.quota_monthly), hi.max(product.quota_monthly)),
    );

    let quota = products
        .iter()
        .map(|product| product.quota_monthly - min_quota)
        .collect();
    let annual_saving = (max_quota - min_quota) * MONTHS_PER_YEAR;

    info!(
        products = products.len(),
        min_quota, max_quota, annual_saving, "price difference computed"
    );
    Ok(PriceDifference {
        quota,
        annual_saving,
    })
}
