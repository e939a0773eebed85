//! Cell formatting helpers shared by the standard definitions.

/// Currency formatting for soles: `"S/ 3,499.00"`.
///
/// Rounds half away from zero to cents.
pub fn format_soles(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{sign}S/ {}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// `512 GB`, `1 TB`, `2 TB`. Whole terabytes in either binary (1024) or
/// decimal (1000) multiples are shown as TB.
pub fn format_storage_gb(size_gb: u32) -> String {
    if size_gb >= 1000 {
        if size_gb % 1024 == 0 {
            return format!("{} TB", size_gb / 1024);
        }
        if size_gb % 1000 == 0 {
            return format!("{} TB", size_gb / 1000);
        }
    }
    format!("{size_gb} GB")
}

/// Fixed-point rendering with trailing zeros trimmed: `15.6`, `4`, `1.25`.
pub fn format_decimal(value: f64, max_decimals: usize) -> String {
    let fixed = format!("{value:.max_decimals$}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        fixed
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
