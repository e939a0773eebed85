//! Product fixtures and proptest strategies shared by the engine tests.

use proptest::prelude::*;

use crate::{Gpu, Processor, Product, ProductSpecs, Ram, Screen, Storage, StorageKind};

/// A mid-range 15.6" laptop financed at S/ 250.00 per month.
///
/// Tests adjust individual fields on the returned value.
pub fn laptop(id: &str) -> Product {
    Product {
        id: id.to_owned(),
        brand: "Lenovo".to_owned(),
        display_name: format!("IdeaPad {id}"),
        price: 2_999.0,
        quota_monthly: 250.0,
        quota_count: Some(12),
        specs: ProductSpecs {
            processor: Processor {
                brand: "Intel".to_owned(),
                model: "Core i5-1235U".to_owned(),
                tier: 5,
                cores: 10,
                max_ghz: 4.4,
            },
            ram: Ram {
                size_gb: 8,
                kind: "DDR4".to_owned(),
            },
            storage: Storage {
                size_gb: 512,
                kind: StorageKind::Ssd,
            },
            display: Screen {
                size_inches: 15.6,
                width_px: 1920,
                height_px: 1080,
                refresh_hz: 60,
                panel: Some("IPS".to_owned()),
            },
            gpu: None,
            battery_hours: Some(8.0),
            weight_kg: Some(1.7),
            os: Some("Windows 11".to_owned()),
        },
    }
}

/// [`laptop`] with the given RAM size.
pub fn laptop_with_ram(id: &str, size_gb: u32) -> Product {
    let mut product = laptop(id);
    product.specs.ram.size_gb = size_gb;
    product
}

/// [`laptop`] with the given monthly quota.
pub fn laptop_with_quota(id: &str, quota_monthly: f64) -> Product {
    let mut product = laptop(id);
    product.quota_monthly = quota_monthly;
    product
}

/// Strategy for valid products with small, frequently colliding magnitudes
/// so that ties show up often.
pub fn arb_product() -> impl Strategy<Value = Product> {
    (
        "[a-z]{3}-[0-9]{2}",
        prop::sample::select(vec![4_u32, 8, 16, 32]),
        prop::sample::select(vec![256_u32, 512, 1024]),
        prop::sample::select(vec![3_u8, 5, 7]),
        prop::option::of(prop::sample::select(vec![1.2_f64, 1.6, 2.1])),
        prop::option::of(prop::sample::select(vec![0_u32, 4, 8])),
        0_u32..4_000,
        0_u32..600,
    )
        .prop_map(
            |(id, ram, storage, tier, weight, vram, half_soles, quota)| {
                let mut product = laptop(&id);
                product.specs.ram.size_gb = ram;
                product.specs.storage.size_gb = storage;
                product.specs.processor.tier = tier;
                product.specs.weight_kg = weight;
                product.specs.gpu = vram.map(|vram_gb| Gpu {
                    model: "GeForce RTX".to_owned(),
                    vram_gb,
                });
                product.price = f64::from(half_soles) / 2.0;
                product.quota_monthly = f64::from(quota);
                product
            },
        )
}

/// Strategy for selections of zero to six products.
pub fn arb_selection() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arb_product(), 0..=6)
}
