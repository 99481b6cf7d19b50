use crate::domain::ValidationError;
use maud::{html, Markup};

pub struct NumberInput<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub value: String,
    pub min: String,
    pub max: String,
    pub step: &'a str,
    pub hint: Option<&'a str>,
}

pub fn number_field(input: NumberInput<'_>, error: Option<&ValidationError>) -> Markup {
    html! {
        div class="field" {
            label for=(input.name) { (input.label) }
            input
                type="number"
                id=(input.name)
                name=(input.name)
                value=(input.value)
                min=(input.min)
                max=(input.max)
                step=(input.step)
                required;
            @if let Some(hint) = input.hint {
                span class="hint" { (hint) }
            }
            (field_error(input.name, error))
        }
    }
}

pub fn checkbox_field(name: &str, label: &str, description: &str, checked: bool) -> Markup {
    html! {
        label class="checkbox" for=(name) {
            span {
                strong { (label) }
                br;
                span class="hint" { (description) }
            }
            input type="checkbox" id=(name) name=(name) checked[checked];
        }
    }
}

/// Inline message under the input the error is about; nothing otherwise.
pub fn field_error(name: &str, error: Option<&ValidationError>) -> Markup {
    html! {
        @if let Some(err) = error.filter(|e| e.field == name) {
            p class="field-error" role="alert" { (err.message) }
        }
    }
}
