use maud::{html, Markup};

/// Titled content block, optionally marked with a step number or short tag.
pub fn feature_card(badge: Option<&str>, title: &str, body: Markup) -> Markup {
    html! {
        article class="card feature" {
            @if let Some(badge) = badge {
                span class="badge" { (badge) }
            }
            h3 { (title) }
            (body)
        }
    }
}

/// Small labelled figure, e.g. "Price per SQ FT / $178".
pub fn stat_card(label: &str, value: &str) -> Markup {
    html! {
        div class="card stat" {
            h3 { (label) }
            div class="value" { (value) }
        }
    }
}
