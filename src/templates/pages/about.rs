use crate::templates::{components::feature_card, desktop_layout};
use maud::{html, Markup};

pub fn about_page() -> Markup {
    desktop_layout(
        "About",
        html! {
            main class="container narrow" {
                h1 { "About HouseWise" }
                p class="lead" {
                    "HouseWise helps owners and buyers get a quick feel for what a house is worth before talking to an agent."
                }

                div class="grid" {
                    (feature_card(None, "Real Estate Expertise", html! {
                        p { "Adjustments follow how buyers usually value size, rooms, age and location." }
                    }))
                    (feature_card(None, "Straightforward Technology", html! {
                        p { "A transparent pricing model, optionally backed by a trained prediction service." }
                    }))
                    (feature_card(None, "User-Centric", html! {
                        p { "No account needed. Your details stay in your browser session and expire after an hour." }
                    }))
                }

                (feature_card(None, "How estimates are made", html! {
                    p {
                        "Every estimate starts from a base price, adds value for bedrooms, bathrooms, floor area and lot size, "
                        "subtracts for age, then applies the neighborhood and condition of the house. "
                        "Garages and pools add a fixed amount."
                    }
                    p {
                        "Figures are indicative only. They are not an appraisal and should not be used as one."
                    }
                }))
            }
        },
    )
}
