//! Display formatting for dashboard values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a price as dollars with exactly two decimals.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Panel heading such as `"Users (3)"`.
#[must_use]
pub fn count_label(label: &str, total: usize) -> String {
    format!("{label} ({total})")
}
