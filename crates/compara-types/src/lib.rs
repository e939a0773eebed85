//! Product data model consumed by the comparison engine.
//!
//! Products arrive from the catalog/selection layer already shaped as
//! [`Product`]. This crate owns their serde representation (camelCase, to
//! match the catalog JSON) and the money invariants every engine operation
//! checks before computing anything.

mod catalog;
mod product;
#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

pub use catalog::{catalog_from_json, catalog_to_json};
pub use product::{Gpu, Processor, Product, ProductSpecs, Ram, Screen, Storage, StorageKind};
