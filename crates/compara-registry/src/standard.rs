//! The standard laptop catalog.
//!
//! Order here is row order in every comparison table.

use compara_types::Product;

use crate::definition::{MissingValue, SpecCategory, SpecDefinition};
use crate::format::{format_decimal, format_soles, format_storage_gb};

/// Keys of the standard definitions.
pub mod keys {
    pub const PROCESSOR: &str = "processor";
    pub const CPU_CORES: &str = "cpu_cores";
    pub const CPU_FREQUENCY: &str = "cpu_frequency";
    pub const RAM: &str = "ram";
    pub const STORAGE: &str = "storage";
    pub const DISPLAY_SIZE: &str = "display_size";
    pub const DISPLAY_RESOLUTION: &str = "display_resolution";
    pub const REFRESH_RATE: &str = "refresh_rate";
    pub const GPU: &str = "gpu";
    pub const BATTERY: &str = "battery";
    pub const WEIGHT: &str = "weight";
    pub const PRICE: &str = "price";
    pub const QUOTA_MONTHLY: &str = "quota_monthly";
}

const NOT_SPECIFIED: &str = "No especificado";

/// All standard definitions, in row order.
///
/// Missing-value policy per optional attribute:
/// - `gpu` (dedicated VRAM, higher is better): absent ranks as `0` GB, the
///   same as integrated graphics.
/// - `battery` (hours, higher is better): absent ranks as `0` h.
/// - `weight` (kg, lower is better): absent ranks as `+inf`.
///
/// Every other attribute is required.
pub fn standard_definitions() -> Vec<SpecDefinition> {
    use SpecCategory as C;

    vec![
        SpecDefinition::new(
            keys::PROCESSOR,
            "Procesador",
            C::Processor,
            true,
            |p| Some(f64::from(p.specs.processor.tier)),
            |p| p.specs.processor.full_name(),
        ),
        SpecDefinition::new(
            keys::CPU_CORES,
            "Núcleos",
            C::Processor,
            true,
            |p| Some(f64::from(p.specs.processor.cores)),
            |p| format!("{} núcleos", p.specs.processor.cores),
        ),
        SpecDefinition::new(
            keys::CPU_FREQUENCY,
            "Frecuencia máxima",
            C::Processor,
            true,
            |p| Some(p.specs.processor.max_ghz),
            |p| format!("{} GHz", format_decimal(p.specs.processor.max_ghz, 2)),
        ),
        SpecDefinition::new(
            keys::RAM,
            "Memoria RAM",
            C::Memory,
            true,
            |p| Some(f64::from(p.specs.ram.size_gb)),
            |p| format!("{} GB {}", p.specs.ram.size_gb, p.specs.ram.kind),
        ),
        SpecDefinition::new(
            keys::STORAGE,
            "Almacenamiento",
            C::Storage,
            true,
            |p| Some(f64::from(p.specs.storage.size_gb)),
            |p| {
                format!(
                    "{} {}",
                    format_storage_gb(p.specs.storage.size_gb),
                    p.specs.storage.kind
                )
            },
        ),
        SpecDefinition::new(
            keys::DISPLAY_SIZE,
            "Pantalla",
            C::Display,
            true,
            |p| Some(p.specs.display.size_inches),
            format_display_size,
        ),
        SpecDefinition::new(
            keys::DISPLAY_RESOLUTION,
            "Resolución",
            C::Display,
            true,
            |p| Some(p.specs.display.pixel_count() as f64),
            |p| {
                format!(
                    "{} × {}",
                    p.specs.display.width_px, p.specs.display.height_px
                )
            },
        ),
        SpecDefinition::new(
            keys::REFRESH_RATE,
            "Tasa de refresco",
            C::Display,
            true,
            |p| Some(f64::from(p.specs.display.refresh_hz)),
            |p| format!("{} Hz", p.specs.display.refresh_hz),
        ),
        SpecDefinition::new(
            keys::GPU,
            "Tarjeta gráfica",
            C::Graphics,
            true,
            |p| p.specs.gpu.as_ref().map(|gpu| f64::from(gpu.vram_gb)),
            format_gpu,
        )
        .with_missing(MissingValue::Floor),
        SpecDefinition::new(
            keys::BATTERY,
            "Batería",
            C::Battery,
            true,
            |p| p.specs.battery_hours,
            |p| {
                p.specs.battery_hours.map_or_else(
                    || NOT_SPECIFIED.to_owned(),
                    |hours| format!("hasta {} h", format_decimal(hours, 1)),
                )
            },
        )
        .with_missing(MissingValue::Floor),
        SpecDefinition::new(
            keys::WEIGHT,
            "Peso",
            C::Portability,
            false,
            |p| p.specs.weight_kg,
            |p| {
                p.specs.weight_kg.map_or_else(
                    || NOT_SPECIFIED.to_owned(),
                    |kg| format!("{} kg", format_decimal(kg, 2)),
                )
            },
        )
        .with_missing(MissingValue::Ceiling),
        SpecDefinition::new(
            keys::PRICE,
            "Precio",
            C::Price,
            false,
            |p| Some(p.price),
            |p| format_soles(p.price),
        ),
        SpecDefinition::new(
            keys::QUOTA_MONTHLY,
            "Cuota mensual",
            C::Price,
            false,
            |p| Some(p.quota_monthly),
            format_quota,
        ),
    ]
}

fn format_display_size(product: &Product) -> String {
    let display = &product.specs.display;
    let size = format_decimal(display.size_inches, 1);
    match &display.panel {
        Some(panel) => format!("{size}\" {panel}"),
        None => format!("{size}\""),
    }
}

fn format_gpu(product: &Product) -> String {
    match &product.specs.gpu {
        Some(gpu) if gpu.vram_gb > 0 => format!("{} ({} GB)", gpu.model, gpu.vram_gb),
        Some(gpu) => gpu.model.clone(),
        None => "Integrada".to_owned(),
    }
}

fn format_quota(product: &Product) -> String {
    let quota = format_soles(product.quota_monthly);
    match product.quota_count {
        Some(count) => format!("{quota} x {count} meses"),
        None => format!("{quota} al mes"),
    }
}
