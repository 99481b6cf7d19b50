// src/domain/estimate.rs

use serde::{Deserialize, Serialize};

/// One bar of the synthetic price history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Three-letter month abbreviation, e.g. "Oct".
    pub month: String,
    pub price: i64,
}

/// Output of one estimation. Ephemeral: it lives in the visitor's session
/// until the next submission or until the session expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEstimate {
    /// Whole dollars, multiple of 1,000 when produced locally.
    pub predicted_price: i64,
    /// Cosmetic percentage, 75..=95 locally.
    pub confidence_level: u8,
    pub price_range_lower: i64,
    pub price_range_upper: i64,
    pub price_per_square_foot: i64,
    /// Twelve months, oldest first, current month last.
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PredictionSource {
    Remote,
    LocalFallback,
}

/// What the results page shows: the estimate plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub estimate: PriceEstimate,
    pub source: PredictionSource,
    /// Set when the remote service failed and the local model answered instead.
    pub notice: Option<String>,
}

impl Prediction {
    pub fn local(estimate: PriceEstimate) -> Self {
        Self {
            estimate,
            source: PredictionSource::LocalFallback,
            notice: None,
        }
    }
}
