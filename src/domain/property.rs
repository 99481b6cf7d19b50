// src/domain/property.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A field that fell outside its allowed domain, or could not be parsed at all.
/// `field` is the camelCase wire name so it lines up with form inputs and JSON.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub const BEDROOMS_RANGE: (u32, u32) = (1, 10);
pub const BATHROOMS_RANGE: (f64, f64) = (1.0, 10.0);
pub const SQUARE_FEET_RANGE: (u32, u32) = (500, 10_000);
pub const LOT_SIZE_RANGE: (f64, f64) = (0.1, 5.0);
pub const EARLIEST_YEAR_BUILT: i32 = 1900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Neighborhood {
    Downtown,
    Midtown,
    Uptown,
    SuburbanNorth,
    SuburbanSouth,
    SuburbanEast,
    SuburbanWest,
}

impl Neighborhood {
    pub const ALL: [Neighborhood; 7] = [
        Neighborhood::Downtown,
        Neighborhood::Midtown,
        Neighborhood::Uptown,
        Neighborhood::SuburbanNorth,
        Neighborhood::SuburbanSouth,
        Neighborhood::SuburbanEast,
        Neighborhood::SuburbanWest,
    ];

    /// Value used on the wire and in `<option value=..>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Neighborhood::Downtown => "downtown",
            Neighborhood::Midtown => "midtown",
            Neighborhood::Uptown => "uptown",
            Neighborhood::SuburbanNorth => "suburbanNorth",
            Neighborhood::SuburbanSouth => "suburbanSouth",
            Neighborhood::SuburbanEast => "suburbanEast",
            Neighborhood::SuburbanWest => "suburbanWest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Neighborhood::Downtown => "Downtown",
            Neighborhood::Midtown => "Midtown",
            Neighborhood::Uptown => "Uptown",
            Neighborhood::SuburbanNorth => "Suburban North",
            Neighborhood::SuburbanSouth => "Suburban South",
            Neighborhood::SuburbanEast => "Suburban East",
            Neighborhood::SuburbanWest => "Suburban West",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == raw.trim())
            .ok_or_else(|| ValidationError::new("neighborhood", "please select a neighborhood"))
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Poor,
        Condition::Fair,
        Condition::Good,
        Condition::Excellent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Poor => "poor",
            Condition::Fair => "fair",
            Condition::Good => "good",
            Condition::Excellent => "excellent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Condition::Poor => "Poor",
            Condition::Fair => "Fair",
            Condition::Good => "Good",
            Condition::Excellent => "Excellent",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == raw.trim())
            .ok_or_else(|| {
                ValidationError::new("condition", "must be one of poor, fair, good, excellent")
            })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the form collects about a house. Created per submission,
/// validated once, then handed to a predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAttributes {
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub square_feet: u32,
    /// Acres.
    pub lot_size: f64,
    pub year_built: i32,
    pub neighborhood: Neighborhood,
    pub condition: Condition,
    #[serde(default)]
    pub has_garage: bool,
    #[serde(default)]
    pub has_pool: bool,
}

impl PropertyAttributes {
    /// Checks every numeric field against its inclusive domain.
    /// Out-of-range input is rejected, never clamped.
    pub fn validate(&self, current_year: i32) -> Result<(), ValidationError> {
        let (lo, hi) = BEDROOMS_RANGE;
        if !(lo..=hi).contains(&self.bedrooms) {
            return Err(ValidationError::new(
                "bedrooms",
                format!("must be between {lo} and {hi}"),
            ));
        }

        let (lo, hi) = BATHROOMS_RANGE;
        if !self.bathrooms.is_finite() || self.bathrooms < lo || self.bathrooms > hi {
            return Err(ValidationError::new(
                "bathrooms",
                format!("must be between {lo} and {hi}"),
            ));
        }
        if (self.bathrooms * 2.0).fract() != 0.0 {
            return Err(ValidationError::new(
                "bathrooms",
                "must be a multiple of 0.5",
            ));
        }

        let (lo, hi) = SQUARE_FEET_RANGE;
        if !(lo..=hi).contains(&self.square_feet) {
            return Err(ValidationError::new(
                "squareFeet",
                format!("must be between {lo} and {hi}"),
            ));
        }

        let (lo, hi) = LOT_SIZE_RANGE;
        if !self.lot_size.is_finite() || self.lot_size < lo || self.lot_size > hi {
            return Err(ValidationError::new(
                "lotSize",
                format!("must be between {lo} and {hi} acres"),
            ));
        }

        if self.year_built < EARLIEST_YEAR_BUILT || self.year_built > current_year {
            return Err(ValidationError::new(
                "yearBuilt",
                format!("must be between {EARLIEST_YEAR_BUILT} and {current_year}"),
            ));
        }

        Ok(())
    }

    /// Builds attributes from `application/x-www-form-urlencoded` pairs.
    /// Checkboxes are only present when ticked, so a missing one means `false`.
    /// Domain checks are left to [`PropertyAttributes::validate`].
    pub fn from_form<'a, I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut form = FormFields::default();
        for (key, value) in pairs {
            match key {
                "bedrooms" => form.bedrooms = Some(value),
                "bathrooms" => form.bathrooms = Some(value),
                "squareFeet" => form.square_feet = Some(value),
                "lotSize" => form.lot_size = Some(value),
                "yearBuilt" => form.year_built = Some(value),
                "neighborhood" => form.neighborhood = Some(value),
                "condition" => form.condition = Some(value),
                "hasGarage" => form.has_garage = is_checked(value),
                "hasPool" => form.has_pool = is_checked(value),
                _ => {}
            }
        }

        Ok(Self {
            bedrooms: parse_field("bedrooms", form.bedrooms)?,
            bathrooms: parse_field("bathrooms", form.bathrooms)?,
            square_feet: parse_field("squareFeet", form.square_feet)?,
            lot_size: parse_field("lotSize", form.lot_size)?,
            year_built: parse_field("yearBuilt", form.year_built)?,
            neighborhood: Neighborhood::parse(form.neighborhood.unwrap_or_default())?,
            condition: Condition::parse(form.condition.unwrap_or_default())?,
            has_garage: form.has_garage,
            has_pool: form.has_pool,
        })
    }
}

#[derive(Default)]
struct FormFields<'a> {
    bedrooms: Option<&'a str>,
    bathrooms: Option<&'a str>,
    square_feet: Option<&'a str>,
    lot_size: Option<&'a str>,
    year_built: Option<&'a str>,
    neighborhood: Option<&'a str>,
    condition: Option<&'a str>,
    has_garage: bool,
    has_pool: bool,
}

fn is_checked(value: &str) -> bool {
    matches!(value, "on" | "true" | "1")
}

fn parse_field<T: std::str::FromStr>(
    field: &'static str,
    raw: Option<&str>,
) -> Result<T, ValidationError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ValidationError::new(field, "is required"))?;

    raw.parse()
        .map_err(|_| ValidationError::new(field, format!("'{raw}' is not a valid number")))
}

/// Values the form starts with on a fresh visit. There is no default
/// neighborhood; the visitor has to pick one.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefaults {
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub square_feet: u32,
    pub lot_size: f64,
    pub year_built: i32,
    pub neighborhood: Option<Neighborhood>,
    pub condition: Condition,
    pub has_garage: bool,
    pub has_pool: bool,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            bedrooms: 3,
            bathrooms: 2.0,
            square_feet: 1800,
            lot_size: 0.25,
            year_built: 2000,
            neighborhood: None,
            condition: Condition::Good,
            has_garage: true,
            has_pool: false,
        }
    }
}

impl From<&PropertyAttributes> for FormDefaults {
    fn from(attrs: &PropertyAttributes) -> Self {
        Self {
            bedrooms: attrs.bedrooms,
            bathrooms: attrs.bathrooms,
            square_feet: attrs.square_feet,
            lot_size: attrs.lot_size,
            year_built: attrs.year_built,
            neighborhood: Some(attrs.neighborhood),
            condition: attrs.condition,
            has_garage: attrs.has_garage,
            has_pool: attrs.has_pool,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_attributes() -> PropertyAttributes {
    PropertyAttributes {
        bedrooms: 3,
        bathrooms: 2.0,
        square_feet: 1800,
        lot_size: 0.25,
        year_built: 2000,
        neighborhood: Neighborhood::Downtown,
        condition: Condition::Good,
        has_garage: true,
        has_pool: false,
    }
}
