//! Comparison engine.
//!
//! Two pure operations over a product selection:
//!
//! - [`compare_specs`]: one [`ComparableSpec`] row per registered attribute,
//!   with difference and winner detection.
//! - [`calculate_price_difference`]: monthly quota deltas against the
//!   cheapest selected product and the yearly saving.
//!
//! Both validate the whole selection before computing anything and either
//! return a complete result or an error. Neither holds state, so they can be
//! called from any number of threads at once.

mod compare;
mod price;

pub use compare::{ComparableSpec, compare_specs, compare_specs_with};
pub use price::{MONTHS_PER_YEAR, PriceDifference, calculate_price_difference};
