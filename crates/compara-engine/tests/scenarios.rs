//! Selection scenarios as a rendering surface would drive them.

use std::thread;

use compara_engine::{calculate_price_difference, compare_specs};
use compara_registry::keys;
use compara_types::Product;
use compara_types::testutil::{laptop, laptop_with_quota, laptop_with_ram};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn ram_row(products: &[Product]) -> compara_engine::ComparableSpec {
    compare_specs(products)
        .unwrap()
        .into_iter()
        .find(|row| row.key == keys::RAM)
        .unwrap()
}

#[test]
fn test_larger_ram_wins() {
    init_tracing();
    let row = ram_row(&[laptop_with_ram("a", 8), laptop_with_ram("b", 16)]);
    assert!(row.is_different);
    assert_eq!(row.winner, Some(1));
    assert_eq!(row.raw_values, [8.0, 16.0]);
    assert_eq!(row.values, ["8 GB DDR4", "16 GB DDR4"]);
}

#[test]
fn test_equal_ram_has_no_winner() {
    let row = ram_row(&[
        laptop_with_ram("a", 8),
        laptop_with_ram("b", 8),
        laptop_with_ram("c", 8),
    ]);
    assert!(!row.is_different);
    assert_eq!(row.winner, None);
}

#[test]
fn test_tied_best_ram_has_no_winner() {
    let row = ram_row(&[
        laptop_with_ram("a", 16),
        laptop_with_ram("b", 16),
        laptop_with_ram("c", 8),
    ]);
    assert!(row.is_different);
    assert_eq!(row.winner, None);
}

#[test]
fn test_quota_deltas_with_tied_cheapest() {
    init_tracing();
    let products = [
        laptop_with_quota("a", 458.0),
        laptop_with_quota("b", 380.0),
        laptop_with_quota("c", 380.0),
    ];
    let diff = calculate_price_difference(&products).unwrap();
    assert_eq!(diff.quota, [78.0, 0.0, 0.0]);
    assert_eq!(diff.annual_saving, 936.0);
}

#[test]
fn test_single_product_selection() {
    let diff = calculate_price_difference(&[laptop("solo")]).unwrap();
    assert_eq!(diff.quota, [0.0]);
    assert_eq!(diff.annual_saving, 0.0);
}

#[test]
fn test_empty_selection() {
    assert!(compare_specs(&[]).unwrap().is_empty());
    let diff = calculate_price_difference(&[]).unwrap();
    assert!(diff.quota.is_empty());
    assert_eq!(diff.annual_saving, 0.0);
}

#[test]
fn test_gaming_vs_office_laptop() {
    let office = laptop("office");
    let mut gaming = laptop("gaming");
    gaming.price = 4_799.0;
    gaming.quota_monthly = 399.9;
    gaming.specs.ram.size_gb = 16;
    gaming.specs.display.refresh_hz = 144;
    gaming.specs.weight_kg = Some(2.2);
    gaming.specs.gpu = Some(compara_types::Gpu {
        model: "GeForce RTX 4050".to_owned(),
        vram_gb: 6,
    });

    let rows = compare_specs(&[office, gaming]).unwrap();
    let winner_of = |key: &str| rows.iter().find(|row| row.key == key).unwrap().winner;

    assert_eq!(winner_of(keys::RAM), Some(1));
    assert_eq!(winner_of(keys::REFRESH_RATE), Some(1));
    assert_eq!(winner_of(keys::GPU), Some(1));
    assert_eq!(winner_of(keys::WEIGHT), Some(0));
    assert_eq!(winner_of(keys::PRICE), Some(0));
    assert_eq!(winner_of(keys::QUOTA_MONTHLY), Some(0));
    assert_eq!(winner_of(keys::STORAGE), None);
    assert_eq!(winner_of(keys::PROCESSOR), None);
}

#[test]
fn test_concurrent_callers_agree() {
    let selections: Vec<Vec<Product>> = (0..8_u32)
        .map(|i| {
            vec![
                laptop_with_ram("a", 8 << (i % 3)),
                laptop_with_quota("b", 200.0 + f64::from(i)),
            ]
        })
        .collect();
    let expected: Vec<_> = selections
        .iter()
        .map(|products| {
            (
                compare_specs(products).unwrap(),
                calculate_price_difference(products).unwrap(),
            )
        })
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = selections
            .iter()
            .map(|products| {
                scope.spawn(move || {
                    (
                        compare_specs(products).unwrap(),
                        calculate_price_difference(products).unwrap(),
                    )
                })
            })
            .collect();
        for (handle, expected) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}
