//! Spec registry: every attribute that can appear in a comparison.
//!
//! A [`SpecDefinition`] says how to read one attribute from a
//! [`Product`](compara_types::Product) as a comparable magnitude, how to
//! render it for a table cell, and which direction is better. The
//! [`SpecRegistry`] holds the ordered list of definitions; that order is the
//! row order of every comparison table.
//!
//! Adding an attribute means adding one definition to
//! [`standard_definitions`]. Nothing else changes.

mod definition;
pub mod format;
mod registry;
mod standard;

pub use definition::{ExtractFn, FormatFn, MissingValue, SpecCategory, SpecDefinition};
pub use registry::SpecRegistry;
pub use standard::{keys, standard_definitions};
