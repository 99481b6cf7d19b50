// src/predictor/wire.rs
//
// JSON shapes of the /predict endpoint. We serve the camelCase shape and, as
// a client, also accept the snake_case shape older deployments answer with.

use crate::domain::{PriceEstimate, PropertyAttributes, TrendPoint};
use crate::estimator::{
    generate_trend, trend_labels, Estimator, RandomSource, PRICE_BAND, TREND_MONTHS,
};
use crate::predictor::PredictorError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Anything above this from a remote service is treated as garbage.
pub const MAX_REMOTE_PRICE: f64 = 1_000_000_000.0;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub predicted_price: i64,
    pub confidence: u8,
    pub price_range: PriceRange,
    pub price_per_sq_ft: i64,
    pub trend_data: Vec<TrendPoint>,
}

#[derive(Debug, Serialize)]
pub struct PriceRange {
    pub lower: i64,
    pub upper: i64,
}

impl From<&PriceEstimate> for PredictResponse {
    fn from(est: &PriceEstimate) -> Self {
        Self {
            predicted_price: est.predicted_price,
            confidence: est.confidence_level,
            price_range: PriceRange {
                lower: est.price_range_lower,
                upper: est.price_range_upper,
            },
            price_per_sq_ft: est.price_per_square_foot,
            trend_data: est.trend.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// What a remote service may send back. Only the price is mandatory;
/// anything else missing is derived locally.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteResponse {
    #[serde(alias = "predicted_price")]
    pub predicted_price: f64,
    #[serde(default, alias = "confidence_level")]
    pub confidence: Option<f64>,
    #[serde(default, alias = "confidence_interval")]
    pub price_range: Option<RemoteRange>,
    #[serde(default, alias = "price_per_sq_ft")]
    pub price_per_sq_ft: Option<f64>,
    #[serde(default, alias = "trend_data")]
    pub trend_data: Vec<RemoteTrendPoint>,
}

#[derive(Debug, Deserialize)]
pub struct RemoteRange {
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Deserialize)]
pub struct RemoteTrendPoint {
    pub month: String,
    #[serde(alias = "value")]
    pub price: f64,
}

impl RemoteResponse {
    pub fn into_estimate(
        self,
        attrs: &PropertyAttributes,
        local: &Estimator,
        rng: &mut dyn RandomSource,
    ) -> Result<PriceEstimate, PredictorError> {
        if !is_plausible_price(self.predicted_price) {
            return Err(PredictorError::Transport(format!(
                "remote returned unusable price {}",
                self.predicted_price
            )));
        }

        let price = self.predicted_price;
        let predicted_price = price.round() as i64;

        let (lower, upper) = match self.price_range {
            // a band that does not contain the price is ignored
            Some(r)
                if r.lower.is_finite()
                    && r.upper.is_finite()
                    && r.lower <= price
                    && price <= r.upper =>
            {
                (r.lower, r.upper)
            }
            _ => (price * (1.0 - PRICE_BAND), price * (1.0 + PRICE_BAND)),
        };

        let price_per_sq_ft = self
            .price_per_sq_ft
            .filter(|v| is_plausible_price(*v))
            .unwrap_or_else(|| price / f64::from(attrs.square_feet));

        let trend = match usable_trend_prices(&self.trend_data) {
            Some(prices) => {
                let labels = trend_labels(local.today());
                if self.trend_data.iter().map(|p| p.month.as_str()).ne(labels) {
                    debug!("remote trend months do not end at the current month, relabelling");
                }
                labels
                    .into_iter()
                    .zip(prices)
                    .map(|(month, price)| TrendPoint {
                        month: month.to_string(),
                        price,
                    })
                    .collect()
            }
            None => {
                debug!(points = self.trend_data.len(), "remote trend unusable, generating locally");
                generate_trend(predicted_price, local.today(), rng)
            }
        };

        Ok(PriceEstimate {
            predicted_price,
            confidence_level: normalize_confidence(self.confidence),
            price_range_lower: lower.round() as i64,
            price_range_upper: upper.round() as i64,
            price_per_square_foot: price_per_sq_ft.round() as i64,
            trend,
        })
    }
}

/// Positive, finite and below [`MAX_REMOTE_PRICE`].
fn is_plausible_price(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= MAX_REMOTE_PRICE
}

/// Rounded prices of a full twelve-month trend, or `None` when the trend
/// is short, long or carries an implausible price.
fn usable_trend_prices(points: &[RemoteTrendPoint]) -> Option<Vec<i64>> {
    if points.len() != TREND_MONTHS {
        return None;
    }
    points
        .iter()
        .map(|p| is_plausible_price(p.price).then(|| p.price.round() as i64))
        .collect()
}

/// Accepts either a percentage (85) or a fraction (0.85).
fn normalize_confidence(raw: Option<f64>) -> u8 {
    match raw {
        Some(c) if c.is_finite() && c > 0.0 && c <= 1.0 => (c * 100.0).round() as u8,
        Some(c) if c.is_finite() && c > 1.0 => c.min(100.0).round() as u8,
        // service sent nothing usable
        _ => 75,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::sample_attributes;
    use crate::estimator::FixedSource;
    use chrono::NaiveDate;

    fn estimator() -> Estimator {
        Estimator::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    #[test]
    fn parses_backend_shape() {
        let months = [
            "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun",
        ];
        let trend: Vec<_> = months
            .iter()
            .map(|m| serde_json::json!({ "month": m, "price": 410000 }))
            .collect();
        let body = serde_json::json!({
            "predictedPrice": 425000.4,
            "confidence": 88,
            "priceRange": { "lower": 403750, "upper": 446250 },
            "pricePerSqFt": 236,
            "trendData": trend,
        });

        let resp: RemoteResponse = serde_json::from_value(body).unwrap();
        let est = resp
            .into_estimate(&sample_attributes(), &estimator(), &mut FixedSource::midpoint())
            .unwrap();

        assert_eq!(est.predicted_price, 425_000);
        assert_eq!(est.confidence_level, 88);
        assert_eq!(est.price_range_lower, 403_750);
        assert_eq!(est.price_range_upper, 446_250);
        assert_eq!(est.price_per_square_foot, 236);
        assert_eq!(est.trend.len(), 12);
        assert_eq!(est.trend[0].month, "Jul");
    }

    #[test]
    fn parses_snake_case_shape_and_fills_gaps() {
        let body = r#"{
            "predicted_price": 360000,
            "confidence_interval": { "lower": 342000, "upper": 378000 },
            "confidence_level": 0.8
        }"#;

        let resp: RemoteResponse = serde_json::from_str(body).unwrap();
        let est = resp
            .into_estimate(&sample_attributes(), &estimator(), &mut FixedSource::midpoint())
            .unwrap();

        assert_eq!(est.predicted_price, 360_000);
        assert_eq!(est.confidence_level, 80);
        assert_eq!(est.price_range_lower, 342_000);
        assert_eq!(est.price_per_square_foot, 200);
        assert_eq!(est.trend.len(), 12);
        assert_eq!(est.trend.last().unwrap().month, "Jun");
    }

    #[test]
    fn rejects_non_positive_price() {
        let resp: RemoteResponse = serde_json::from_str(r#"{"predictedPrice": -5}"#).unwrap();
        let err = resp
            .into_estimate(&sample_attributes(), &estimator(), &mut FixedSource::midpoint())
            .unwrap_err();
        assert!(matches!(err, PredictorError::Transport(_)));
    }

    fn remote_trend(months: &[&str], price: f64) -> Vec<serde_json::Value> {
        months
            .iter()
            .map(|m| serde_json::json!({ "month": m, "price": price }))
            .collect()
    }

    #[test]
    fn implausible_trend_price_is_regenerated() {
        let mut trend = remote_trend(&["Jan"; 11], 400_000.0);
        trend.push(serde_json::json!({ "month": "Feb", "price": 1e19 }));
        let body = serde_json::json!({ "predictedPrice": 400000, "trendData": trend });

        let resp: RemoteResponse = serde_json::from_value(body).unwrap();
        let est = resp
            .into_estimate(&sample_attributes(), &estimator(), &mut FixedSource::midpoint())
            .unwrap();

        assert_eq!(est.trend.len(), 12);
        assert!(est.trend.iter().all(|p| (360_000..=420_000).contains(&p.price)));
        assert_eq!(est.trend.last().unwrap().month, "Jun");
    }

    #[test]
    fn huge_predicted_price_is_a_transport_error() {
        let resp: RemoteResponse = serde_json::from_str(r#"{"predictedPrice": 1e19}"#).unwrap();
        let err = resp
            .into_estimate(&sample_attributes(), &estimator(), &mut FixedSource::midpoint())
            .unwrap_err();
        assert!(matches!(err, PredictorError::Transport(_)));
    }

    #[test]
    fn inverted_range_falls_back_to_band() {
        let body = serde_json::json!({
            "predictedPrice": 400000,
            "priceRange": { "lower": 900000, "upper": 1 },
        });

        let resp: RemoteResponse = serde_json::from_value(body).unwrap();
        let est = resp
            .into_estimate(&sample_attributes(), &estimator(), &mut FixedSource::midpoint())
            .unwrap();

        assert_eq!(est.price_range_lower, 380_000);
        assert_eq!(est.price_range_upper, 420_000);
    }

    #[test]
    fn repeated_months_are_relabelled() {
        let body = serde_json::json!({
            "predictedPrice": 400000,
            "trendData": remote_trend(&["Jan"; 12], 395_000.0),
        });

        let resp: RemoteResponse = serde_json::from_value(body).unwrap();
        let est = resp
            .into_estimate(&sample_attributes(), &estimator(), &mut FixedSource::midpoint())
            .unwrap();

        let months: Vec<&str> = est.trend.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, trend_labels(estimator().today()));
        assert!(est.trend.iter().all(|p| p.price == 395_000));
    }

    #[test]
    fn months_running_one_ahead_are_shifted_back() {
        // Aug..Jul while today is in June
        let months = [
            "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul",
        ];
        let body = serde_json::json!({
            "predictedPrice": 400000,
            "trendData": remote_trend(&months, 398_000.0),
        });

        let resp: RemoteResponse = serde_json::from_value(body).unwrap();
        let est = resp
            .into_estimate(&sample_attributes(), &estimator(), &mut FixedSource::midpoint())
            .unwrap();

        assert_eq!(est.trend.first().unwrap().month, "Jul");
        assert_eq!(est.trend.last().unwrap().month, "Jun");
    }

    #[test]
    fn response_serializes_backend_shape() {
        let est = PriceEstimate {
            predicted_price: 320_000,
            confidence_level: 85,
            price_range_lower: 304_000,
            price_range_upper: 336_000,
            price_per_square_foot: 178,
            trend: vec![TrendPoint {
                month: "Jun".into(),
                price: 318_000,
            }],
        };

        let json = serde_json::to_value(PredictResponse::from(&est)).unwrap();
        assert_eq!(json["predictedPrice"], 320_000);
        assert_eq!(json["confidence"], 85);
        assert_eq!(json["priceRange"]["upper"], 336_000);
        assert_eq!(json["pricePerSqFt"], 178);
        assert_eq!(json["trendData"][0]["month"], "Jun");
    }
}
