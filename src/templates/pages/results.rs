use crate::domain::{Prediction, PropertyAttributes};
use crate::format::{
    format_currency, format_thousands, property_age, property_type_label, ChartSeries,
};
use crate::templates::{
    components::{notice, progress_bar, stat_card, trend_chart},
    desktop_layout,
};
use maud::{html, Markup};

pub struct ResultsVm<'a> {
    pub house: &'a PropertyAttributes,
    pub prediction: &'a Prediction,
    pub current_year: i32,
}

pub fn results_page(vm: &ResultsVm<'_>) -> Markup {
    let est = &vm.prediction.estimate;
    let series = ChartSeries::from_trend(&est.trend);

    desktop_layout(
        "Your Estimate",
        html! {
            main class="container" {
                h1 { "Your Property Valuation" }

                @if let Some(message) = &vm.prediction.notice {
                    (notice(message))
                }

                section class="card" {
                    div class="card-header" {
                        h2 style="margin: 0;" { "Predicted Property Value" }
                        p style="margin: .25rem 0 0; opacity: .8;" {
                            "Based on your property details and current market trends"
                        }
                    }
                    p class="price" { (format_currency(est.predicted_price as f64)) }
                    p style="text-align: center; color: var(--muted);" {
                        "Estimated value range: "
                        (format_currency(est.price_range_lower as f64))
                        " - "
                        (format_currency(est.price_range_upper as f64))
                    }
                    p { "Confidence Level: " (est.confidence_level) "%" }
                    (progress_bar(est.confidence_level))
                }

                div class="grid" style="margin-bottom: 1.5rem;" {
                    (stat_card("Price per SQ FT", &format_currency(est.price_per_square_foot as f64)))
                    (stat_card("Property Size", &format!("{} sq ft", format_thousands(vm.house.square_feet.into()))))
                    (stat_card("Property Type", &property_type_label(vm.house)))
                    (stat_card("Property Age", &format!("{} years", property_age(vm.house, vm.current_year))))
                }

                section class="card" {
                    h2 { "Price Trend (Last 12 Months)" }
                    @if series.is_empty() {
                        p class="hint" { "No trend data available." }
                    } @else {
                        (trend_chart(&series))
                    }
                }

                div style="display: flex; gap: 1rem;" {
                    a class="btn btn-outline" href="/predict" { "Back to Form" }
                    a class="btn" href="/" { "Home" }
                }
            }
        },
    )
}
