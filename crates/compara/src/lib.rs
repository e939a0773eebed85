//! Product comparison for financed laptops.
//!
//! Feed a selection of [`Product`]s in, get a [`ComparisonReport`] out: one
//! row per attribute with its winner, plus the monthly quota deltas and the
//! yearly saving. Presentation layers filter the finished rows through
//! [`ComparisonOptions`] but never recompute winners themselves.
//!
//! ```ignore
//! use compara::{ComparisonOptions, ComparisonReport, catalog_from_json};
//!
//! let products = catalog_from_json(&json)?;
//! let report = ComparisonReport::build(&products)?;
//! for row in report.rows(&ComparisonOptions::differences_only()) {
//!     println!("{}: winner {:?}", row.label, row.winner);
//! }
//! ```

mod options;
mod report;

pub use compara_engine::{
    ComparableSpec, MONTHS_PER_YEAR, PriceDifference, calculate_price_difference, compare_specs,
    compare_specs_with,
};
pub use compara_error::{ComparaError, Result};
pub use compara_registry::{
    MissingValue, SpecCategory, SpecDefinition, SpecRegistry, format, keys, standard_definitions,
};
pub use compara_types::{
    Gpu, Processor, Product, ProductSpecs, Ram, Screen, Storage, StorageKind, catalog_from_json,
    catalog_to_json,
};
pub use options::ComparisonOptions;
pub use report::ComparisonReport;
