use maud::{html, Markup};

pub mod card;
pub mod chart;
pub mod form;

pub use card::{feature_card, stat_card};
pub use chart::trend_chart;
pub use form::{checkbox_field, field_error, number_field, NumberInput};

pub fn button_link(label: &str, href: &str) -> Markup {
    html! {
        a class="btn" href=(href) { (label) }
    }
}

/// Horizontal bar, `percent` clamped to 0..=100.
pub fn progress_bar(percent: u8) -> Markup {
    let width = percent.min(100);
    html! {
        div class="progress" role="progressbar" aria-valuenow=(width) aria-valuemin="0" aria-valuemax="100" {
            div style=(format!("width: {width}%")) {}
        }
    }
}

pub fn notice(message: &str) -> Markup {
    html! {
        div class="notice" role="status" { (message) }
    }
}
