use std::fmt;

use compara_error::{ComparaError, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// A financed product as offered by the catalog.
///
/// Money is expressed in currency units (soles), not minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier for the session.
    pub id: String,
    pub brand: String,
    pub display_name: String,
    /// Total cash price.
    pub price: f64,
    /// Monthly instalment amount.
    pub quota_monthly: f64,
    /// Number of instalments, when the offer states it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_count: Option<u16>,
    pub specs: ProductSpecs,
}

impl Product {
    /// Check the money invariants: `price` and `quota_monthly` must be finite
    /// and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ComparaError::InvalidProductData`] naming the first field
    /// that fails.
    pub fn validate(&self) -> Result<()> {
        check_amount(&self.id, "price", self.price)?;
        check_amount(&self.id, "quota_monthly", self.quota_monthly)
    }
}

fn check_amount(product_id: &str, field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    warn!(product_id, field, value, "rejecting product with invalid amount");
    Err(ComparaError::InvalidProductData {
        product_id: product_id.to_owned(),
        field: field.to_owned(),
        value: value.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Specs
// ---------------------------------------------------------------------------

/// The structured attribute bag of a product.
///
/// Attributes wrapped in `Option` are not published for every product; the
/// registry decides how a missing value ranks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpecs {
    pub processor: Processor,
    pub ram: Ram,
    pub storage: Storage,
    pub display: Screen,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<Gpu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Processor {
    pub brand: String,
    pub model: String,
    /// Ordinal performance class (e.g. 3 for Core i3 / Ryzen 3, 9 for i9).
    pub tier: u8,
    pub cores: u8,
    /// Maximum boost clock in GHz.
    pub max_ghz: f64,
}

impl Processor {
    /// `"Intel Core i5-1235U"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ram {
    pub size_gb: u32,
    /// Memory technology, e.g. `"DDR4"`.
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub size_gb: u32,
    pub kind: StorageKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKind {
    #[serde(rename = "SSD")]
    Ssd,
    #[serde(rename = "HDD")]
    Hdd,
    #[serde(rename = "eMMC")]
    Emmc,
}

impl StorageKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ssd => "SSD",
            Self::Hdd => "HDD",
            Self::Emmc => "eMMC",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// Diagonal in inches.
    pub size_inches: f64,
    pub width_px: u32,
    pub height_px: u32,
    pub refresh_hz: u16,
    /// Panel technology, e.g. `"IPS"` or `"OLED"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<String>,
}

impl Screen {
    pub const fn pixel_count(&self) -> u64 {
        self.width_px as u64 * self.height_px as u64
    }
}

/// Dedicated graphics. Products with integrated graphics only carry `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gpu {
    pub model: String,
    pub vram_gb: u32,
}
