use std::fmt;

use compara_error::{ComparaError, Result};
use compara_types::Product;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Grouping tag for presentation filters (tabs, collapsible sections).
///
/// The engine never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecCategory {
    Processor,
    Memory,
    Storage,
    Display,
    Graphics,
    Battery,
    Portability,
    Price,
}

impl SpecCategory {
    pub const ALL: [Self; 8] = [
        Self::Processor,
        Self::Memory,
        Self::Storage,
        Self::Display,
        Self::Graphics,
        Self::Battery,
        Self::Portability,
        Self::Price,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processor => "processor",
            Self::Memory => "memory",
            Self::Storage => "storage",
            Self::Display => "display",
            Self::Graphics => "graphics",
            Self::Battery => "battery",
            Self::Portability => "portability",
            Self::Price => "price",
        }
    }
}

impl fmt::Display for SpecCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Missing-value policy
// ---------------------------------------------------------------------------

/// How an absent optional attribute ranks.
///
/// The fallback always sits at the worst end of the scale, so a product that
/// does not publish an attribute can never be reported as its winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValue {
    /// The extractor always yields a value. Absence is a data error.
    Required,
    /// Absent ranks as `0.0`. Only valid when higher is better.
    Floor,
    /// Absent ranks as `+inf`. Only valid when lower is better.
    Ceiling,
}

impl MissingValue {
    /// The magnitude substituted for an absent attribute, if any.
    pub const fn fallback(self) -> Option<f64> {
        match self {
            Self::Required => None,
            Self::Floor => Some(0.0),
            Self::Ceiling => Some(f64::INFINITY),
        }
    }

    /// Whether the fallback lands on the losing side for the given polarity.
    pub const fn is_consistent_with(self, higher_is_better: bool) -> bool {
        match self {
            Self::Required => true,
            Self::Floor => higher_is_better,
            Self::Ceiling => !higher_is_better,
        }
    }
}

// ---------------------------------------------------------------------------
// Definition
// ---------------------------------------------------------------------------

/// Reads a comparable magnitude. `None` means the product does not publish
/// the attribute.
pub type ExtractFn = fn(&Product) -> Option<f64>;

/// Renders the table cell for a product.
pub type FormatFn = fn(&Product) -> String;

/// One comparable attribute.
#[derive(Clone, Copy)]
pub struct SpecDefinition {
    /// Unique key, e.g. `"ram"`.
    pub key: &'static str,
    /// Display label.
    pub label: &'static str,
    pub category: SpecCategory,
    /// Polarity: `true` when a larger magnitude is better.
    pub higher_is_better: bool,
    pub missing: MissingValue,
    extract: ExtractFn,
    format: FormatFn,
}

impl fmt::Debug for SpecDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecDefinition")
            .field("key", &self.key)
            .field("category", &self.category)
            .field("higher_is_better", &self.higher_is_better)
            .field("missing", &self.missing)
            .finish_non_exhaustive()
    }
}

impl SpecDefinition {
    /// A required attribute.
    pub const fn new(
        key: &'static str,
        label: &'static str,
        category: SpecCategory,
        higher_is_better: bool,
        extract: ExtractFn,
        format: FormatFn,
    ) -> Self {
        Self {
            key,
            label,
            category,
            higher_is_better,
            missing: MissingValue::Required,
            extract,
            format,
        }
    }

    /// Same definition with a different missing-value policy.
    pub const fn with_missing(mut self, missing: MissingValue) -> Self {
        self.missing = missing;
        self
    }

    /// Extract the comparable magnitude for `product`.
    ///
    /// Absent attributes resolve through [`MissingValue`]. The result is
    /// deterministic for a given product.
    ///
    /// # Errors
    ///
    /// Returns [`ComparaError::InvalidSpecValue`] when the extractor yields
    /// `NaN`, an infinity or a negative magnitude, or when a required
    /// attribute is absent.
    pub fn extract_raw(&self, product: &Product) -> Result<f64> {
        match (self.extract)(product) {
            // Magnitudes are non-negative, so nothing published can sort
            // below the `Floor` fallback.
            Some(value) if value.is_finite() && value >= 0.0 => Ok(value),
            Some(value) => Err(self.invalid_value(product, value.to_string())),
            None => self
                .missing
                .fallback()
                .ok_or_else(|| self.invalid_value(product, "missing".to_owned())),
        }
    }

    /// Whether `product` publishes the attribute, as opposed to falling back
    /// on the missing-value policy.
    pub fn is_published(&self, product: &Product) -> bool {
        (self.extract)(product).is_some()
    }

    /// Display string for the table cell.
    pub fn format(&self, product: &Product) -> String {
        (self.format)(product)
    }

    fn invalid_value(&self, product: &Product, value: String) -> ComparaError {
        ComparaError::InvalidSpecValue {
            key: self.key.to_owned(),
            product_id: product.id.clone(),
            value,
        }
    }
}
