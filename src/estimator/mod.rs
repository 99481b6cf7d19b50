// src/estimator/mod.rs
//
// The valuation formula. A fixed base price nudged by linear adjustments,
// scaled by condition and neighborhood, plus amenity bonuses and a little
// market noise. Not a statistical model.

pub mod random;
pub mod trend;

pub use random::{FixedSource, RandomSource, RngSource};
pub use trend::{generate_trend, trend_labels, TREND_MONTHS};

use crate::domain::{Condition, Neighborhood, PriceEstimate, PropertyAttributes, ValidationError};
use chrono::{Datelike, Local, NaiveDate};

pub const BASE_PRICE: f64 = 250_000.0;

// (dollars per unit, reference value)
const SQUARE_FEET_ADJ: (f64, f64) = (200.0, 1800.0);
const BEDROOM_ADJ: (f64, f64) = (15_000.0, 3.0);
const BATHROOM_ADJ: (f64, f64) = (12_000.0, 2.0);
const LOT_SIZE_ADJ: (f64, f64) = (50_000.0, 0.25);
const AGE_PENALTY_PER_YEAR: f64 = 500.0;

pub const GARAGE_BONUS: f64 = 20_000.0;
pub const POOL_BONUS: f64 = 30_000.0;

pub const NOISE_RANGE: (f64, f64) = (0.90, 1.10);
pub const CONFIDENCE_RANGE: (u32, u32) = (75, 95);

/// Half-width of the displayed value range.
pub const PRICE_BAND: f64 = 0.05;
pub const PRICE_ROUNDING: f64 = 1_000.0;

/// Small, old houses in weak areas push the raw formula below zero.
/// The published price never goes under this.
pub const MIN_PREDICTED_PRICE: i64 = 1_000;

pub fn condition_factor(condition: Condition) -> f64 {
    match condition {
        Condition::Poor => 0.85,
        Condition::Fair => 0.95,
        Condition::Good => 1.05,
        Condition::Excellent => 1.15,
    }
}

pub fn neighborhood_factor(neighborhood: Neighborhood) -> f64 {
    match neighborhood {
        Neighborhood::Downtown => 1.20,
        Neighborhood::Midtown => 1.10,
        Neighborhood::Uptown => 1.15,
        Neighborhood::SuburbanNorth => 1.05,
        Neighborhood::SuburbanSouth => 0.95,
        Neighborhood::SuburbanEast => 1.00,
        Neighborhood::SuburbanWest => 1.10,
    }
}

/// Computes estimates as of a fixed date. The date drives both the age
/// penalty and the trend's month labels.
#[derive(Debug, Clone, Copy)]
pub struct Estimator {
    today: NaiveDate,
}

impl Estimator {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Estimator pinned to the server's local date.
    pub fn today_local() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn current_year(&self) -> i32 {
        self.today.year()
    }

    /// Base price plus the linear adjustments, before any multiplier.
    pub fn additive_base(&self, attrs: &PropertyAttributes) -> f64 {
        let age = f64::from(self.current_year() - attrs.year_built);

        BASE_PRICE
            + linear(SQUARE_FEET_ADJ, f64::from(attrs.square_feet))
            + linear(BEDROOM_ADJ, f64::from(attrs.bedrooms))
            + linear(BATHROOM_ADJ, attrs.bathrooms)
            + linear(LOT_SIZE_ADJ, attrs.lot_size)
            - AGE_PENALTY_PER_YEAR * age
    }

    /// Deterministic value before market noise.
    pub fn base_price(&self, attrs: &PropertyAttributes) -> f64 {
        let mut price = self.additive_base(attrs);
        price *= condition_factor(attrs.condition);
        price *= neighborhood_factor(attrs.neighborhood);

        if attrs.has_garage {
            price += GARAGE_BONUS;
        }
        if attrs.has_pool {
            price += POOL_BONUS;
        }
        price
    }

    /// Validates `attrs` and produces a full estimate, trend included.
    /// Consumes randomness for the noise multiplier, the confidence level
    /// and each trend month.
    pub fn estimate(
        &self,
        attrs: &PropertyAttributes,
        rng: &mut dyn RandomSource,
    ) -> Result<PriceEstimate, ValidationError> {
        attrs.validate(self.current_year())?;

        let (low, high) = NOISE_RANGE;
        let noisy = self.base_price(attrs) * rng.uniform(low, high);
        let predicted_price = round_to_thousand(noisy).max(MIN_PREDICTED_PRICE);

        let (low, high) = CONFIDENCE_RANGE;
        let confidence_level = rng.int_inclusive(low, high) as u8;

        let price = predicted_price as f64;
        Ok(PriceEstimate {
            predicted_price,
            confidence_level,
            price_range_lower: (price * (1.0 - PRICE_BAND)).round() as i64,
            price_range_upper: (price * (1.0 + PRICE_BAND)).round() as i64,
            price_per_square_foot: (price / f64::from(attrs.square_feet)).round() as i64,
            trend: generate_trend(predicted_price, self.today, rng),
        })
    }
}

fn linear((per_unit, reference): (f64, f64), value: f64) -> f64 {
    per_unit * (value - reference)
}

fn round_to_thousand(value: f64) -> i64 {
    ((value / PRICE_ROUNDING).round() * PRICE_ROUNDING) as i64
}
