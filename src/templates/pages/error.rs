use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container narrow" style="text-align: center;" {
                h1 { "Error " (status) }
                p class="lead" { (message) }
                a class="btn btn-outline" href="/" { "Back to home" }
            }
        },
    )
}
