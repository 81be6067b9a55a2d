//! Custom Askama template filters.

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a rating value with one decimal place.
///
/// Usage in templates: `{{ product.rating.rate|rating }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn rating(value: &f64, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("{value:.1}"))
}
