//! Error taxonomy for the comparison engine.
//!
//! Every variant is a programmer or data-contract error. Nothing here is
//! transient, so callers never retry: they surface the error or fall back to
//! a non-comparison view.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ComparaError>;

/// Errors raised while building or querying a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparaError {
    /// A lookup referenced a spec key that is not registered.
    #[error("unknown spec key: {key}")]
    UnknownSpecKey { key: String },

    /// An extractor produced a non-finite or negative magnitude for a
    /// product, or a required attribute is absent.
    #[error("invalid value for spec {key} on product {product_id}: {value}")]
    InvalidSpecValue {
        key: String,
        product_id: String,
        value: String,
    },

    /// A monetary field is negative or not finite.
    #[error("invalid product data on {product_id}: {field} = {value}")]
    InvalidProductData {
        product_id: String,
        field: String,
        value: String,
    },

    /// A registry was assembled with the same key twice.
    #[error("duplicate spec key: {key}")]
    DuplicateSpecKey { key: String },

    /// Catalog JSON could not be decoded, or lists a product id twice.
    #[error("malformed catalog: {detail}")]
    MalformedCatalog { detail: String },

    /// Persisted comparison options could not be decoded.
    #[error("malformed options: {detail}")]
    MalformedOptions { detail: String },

    /// Invariant violation inside the engine.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ComparaError {
    /// Shorthand for [`ComparaError::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn unknown_spec_key(key: impl Into<String>) -> Self {
        Self::UnknownSpecKey { key: key.into() }
    }

    pub fn malformed_catalog(detail: impl ToString) -> Self {
        Self::MalformedCatalog {
            detail: detail.to_string(),
        }
    }

    pub fn malformed_options(detail: impl ToString) -> Self {
        Self::MalformedOptions {
            detail: detail.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_payload() {
        let err = ComparaError::InvalidProductData {
            product_id: "lap-01".to_owned(),
            field: "quota_monthly".to_owned(),
            value: "-5".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid product data on lap-01: quota_monthly = -5"
        );
    }

    #[test]
    fn malformed_input_names_its_source() {
        assert_eq!(
            ComparaError::malformed_catalog("eof").to_string(),
            "malformed catalog: eof"
        );
        assert_eq!(
            ComparaError::malformed_options("eof").to_string(),
            "malformed options: eof"
        );
    }

    #[test]
    fn internal_accepts_owned_and_borrowed() {
        assert_eq!(
            ComparaError::internal(String::from("x")),
            ComparaError::internal("x")
        );
    }
}
