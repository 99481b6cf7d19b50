// templates/pages/home.rs

use crate::templates::{
    components::{button_link, feature_card},
    desktop_layout,
};
use maud::{html, Markup};

const STEPS: [(&str, &str); 3] = [
    (
        "Input Your Property Details",
        "Tell us about the house: size, rooms, lot, age, neighborhood and condition.",
    ),
    (
        "Analysis",
        "Your details are weighed against typical market effects of each feature.",
    ),
    (
        "Get Your Value Estimate",
        "See an estimated price, a likely range and a 12-month price trend.",
    ),
];

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            section class="hero" {
                h1 { "Discover what your home is worth" }
                p class="lead" {
                    "HouseWise gives you an instant, data-driven estimate of your property's market value."
                }
                (button_link("Get Your Estimate", "/predict"))
            }

            main class="container" {
                h2 { "How HouseWise Works" }
                div class="grid" {
                    @for (i, (title, body)) in STEPS.iter().enumerate() {
                        (feature_card(Some(&(i + 1).to_string()), title, html! { p { (body) } }))
                    }
                }

                section class="card" style="text-align: center;" {
                    h2 { "Ready to Discover Your Home's Value?" }
                    p class="lead" { "It takes less than a minute and no sign-up." }
                    (button_link("Get Your Estimate Now", "/predict"))
                }
            }
        },
    )
}
