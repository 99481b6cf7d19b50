// templates/pages/predict.rs

use crate::domain::property::{
    BATHROOMS_RANGE, BEDROOMS_RANGE, EARLIEST_YEAR_BUILT, LOT_SIZE_RANGE, SQUARE_FEET_RANGE,
};
use crate::domain::{Condition, FormDefaults, Neighborhood, ValidationError};
use crate::templates::{
    components::{checkbox_field, field_error, number_field, NumberInput},
    desktop_layout,
};
use maud::{html, Markup};

/// What the form inputs show. Kept as raw strings so a rejected submission
/// is echoed back exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictForm {
    pub bedrooms: String,
    pub bathrooms: String,
    pub square_feet: String,
    pub lot_size: String,
    pub year_built: String,
    pub neighborhood: String,
    pub condition: String,
    pub has_garage: bool,
    pub has_pool: bool,
}

impl From<&FormDefaults> for PredictForm {
    fn from(d: &FormDefaults) -> Self {
        Self {
            bedrooms: d.bedrooms.to_string(),
            bathrooms: d.bathrooms.to_string(),
            square_feet: d.square_feet.to_string(),
            lot_size: d.lot_size.to_string(),
            year_built: d.year_built.to_string(),
            neighborhood: d
                .neighborhood
                .map(|n| n.as_str().to_string())
                .unwrap_or_default(),
            condition: d.condition.as_str().to_string(),
            has_garage: d.has_garage,
            has_pool: d.has_pool,
        }
    }
}

impl PredictForm {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut form = Self {
            bedrooms: String::new(),
            bathrooms: String::new(),
            square_feet: String::new(),
            lot_size: String::new(),
            year_built: String::new(),
            neighborhood: String::new(),
            condition: String::new(),
            has_garage: false,
            has_pool: false,
        };

        for (key, value) in pairs {
            match key {
                "bedrooms" => form.bedrooms = value.to_string(),
                "bathrooms" => form.bathrooms = value.to_string(),
                "squareFeet" => form.square_feet = value.to_string(),
                "lotSize" => form.lot_size = value.to_string(),
                "yearBuilt" => form.year_built = value.to_string(),
                "neighborhood" => form.neighborhood = value.to_string(),
                "condition" => form.condition = value.to_string(),
                "hasGarage" => form.has_garage = true,
                "hasPool" => form.has_pool = true,
                _ => {}
            }
        }
        form
    }
}

pub fn predict_page(
    form: &PredictForm,
    error: Option<&ValidationError>,
    current_year: i32,
) -> Markup {
    desktop_layout(
        "Predict",
        html! {
            main class="container narrow" {
                h1 { "Predict Your Home's Value" }
                p class="lead" {
                    "Fill in the details below to get an instant estimate of your property's market value."
                }

                @if let Some(err) = error {
                    div class="notice" role="alert" {
                        "Please check your input: " (err)
                    }
                }

                form class="card" action="/predict" method="post" {
                    div class="grid" {
                        (number_field(NumberInput {
                            name: "bedrooms",
                            label: "Bedrooms",
                            value: form.bedrooms.clone(),
                            min: BEDROOMS_RANGE.0.to_string(),
                            max: BEDROOMS_RANGE.1.to_string(),
                            step: "1",
                            hint: None,
                        }, error))
                        (number_field(NumberInput {
                            name: "bathrooms",
                            label: "Bathrooms",
                            value: form.bathrooms.clone(),
                            min: BATHROOMS_RANGE.0.to_string(),
                            max: BATHROOMS_RANGE.1.to_string(),
                            step: "0.5",
                            hint: Some("Half baths count as 0.5"),
                        }, error))
                        (number_field(NumberInput {
                            name: "squareFeet",
                            label: "Square Feet",
                            value: form.square_feet.clone(),
                            min: SQUARE_FEET_RANGE.0.to_string(),
                            max: SQUARE_FEET_RANGE.1.to_string(),
                            step: "1",
                            hint: None,
                        }, error))
                        (number_field(NumberInput {
                            name: "lotSize",
                            label: "Lot Size (acres)",
                            value: form.lot_size.clone(),
                            min: LOT_SIZE_RANGE.0.to_string(),
                            max: LOT_SIZE_RANGE.1.to_string(),
                            step: "0.01",
                            hint: None,
                        }, error))
                        (number_field(NumberInput {
                            name: "yearBuilt",
                            label: "Year Built",
                            value: form.year_built.clone(),
                            min: EARLIEST_YEAR_BUILT.to_string(),
                            max: current_year.to_string(),
                            step: "1",
                            hint: None,
                        }, error))
                    }

                    div class="grid" {
                        div class="field" {
                            label for="neighborhood" { "Neighborhood" }
                            select id="neighborhood" name="neighborhood" required {
                                option value="" disabled selected[form.neighborhood.is_empty()] {
                                    "Select a neighborhood"
                                }
                                @for n in Neighborhood::ALL {
                                    option value=(n.as_str()) selected[form.neighborhood == n.as_str()] {
                                        (n.label())
                                    }
                                }
                            }
                            (field_error("neighborhood", error))
                        }
                        div class="field" {
                            label for="condition" { "Property Condition" }
                            select id="condition" name="condition" required {
                                @for c in Condition::ALL {
                                    option value=(c.as_str()) selected[form.condition == c.as_str()] {
                                        (c.label())
                                    }
                                }
                            }
                            (field_error("condition", error))
                        }
                    }

                    div class="grid" style="margin-bottom: 1.5rem;" {
                        (checkbox_field("hasGarage", "Garage", "Does the property have a garage?", form.has_garage))
                        (checkbox_field("hasPool", "Swimming Pool", "Does the property have a pool?", form.has_pool))
                    }

                    button class="btn" type="submit" style="width: 100%;" { "Get Price Estimate" }
                }
            }
        },
    )
}
