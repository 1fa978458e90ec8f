use dioxus::prelude::*;

/// A labeled form input.
///
/// The `id` doubles as the control's stable identifier and the label's
/// `for` target, so every field can be addressed by name from outside the
/// component (tests, autofill, the date-constraint attribute).
#[component]
pub fn Input(
    /// Stable identifier rendered as the control's `id`.
    #[props(default)]
    id: String,
    /// Optional label displayed above the control.
    #[props(default)]
    label: String,
    /// Current value of the control.
    #[props(default)]
    value: String,
    /// Called on every input event.
    #[props(default)]
    on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    /// Maximum allowed value, forwarded to the native `max` attribute.
    /// Used by date controls to cap the selectable range.
    #[props(default)]
    max: Option<String>,
) -> Element {
    rsx! {
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                class: "input",
                id: "{id}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                max: max,
                oninput: move |evt| on_input.call(evt),
            }
        }
    }
}
