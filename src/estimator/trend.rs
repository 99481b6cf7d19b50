// src/estimator/trend.rs
use crate::domain::TrendPoint;
use crate::estimator::RandomSource;
use chrono::{Datelike, NaiveDate};

pub const TREND_MONTHS: usize = 12;

/// Per-month variance, as a fraction of the current price, subtracted from it.
/// Skewed so history tends to sit a little below today's value.
pub const TREND_VARIANCE: (f64, f64) = (-0.05, 0.10);

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Synthetic 12-month history ending at `today`'s month, oldest first.
/// Each month is an independent draw; there is no autocorrelation.
pub fn generate_trend(
    predicted_price: i64,
    today: NaiveDate,
    rng: &mut dyn RandomSource,
) -> Vec<TrendPoint> {
    let price = predicted_price as f64;

    trend_labels(today)
        .into_iter()
        .map(|month| {
            let (low, high) = TREND_VARIANCE;
            let variance = price * rng.uniform(low, high);
            TrendPoint {
                month: month.to_string(),
                price: (price - variance).round() as i64,
            }
        })
        .collect()
}

/// The twelve month abbreviations ending at `today`'s month, oldest first.
pub fn trend_labels(today: NaiveDate) -> [&'static str; TREND_MONTHS] {
    let current = today.month0() as i64;
    std::array::from_fn(|i| month_label(current - (TREND_MONTHS - 1 - i) as i64))
}

fn month_label(month0: i64) -> &'static str {
    MONTH_ABBREVIATIONS[month0.rem_euclid(12) as usize]
}
