use dioxus::prelude::*;

/// A themed native select element for forms.
///
/// Wraps a plain `<select>` rather than a custom dropdown — form fields
/// with a fixed option list don't need anything heavier.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// Stable identifier rendered as the control's `id`.
    #[props(default)]
    id: String,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Option elements to render inside the select.
    children: Element,
) -> Element {
    rsx! {
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: "{id}", "{label}" }
            }
            select {
                class: "form-select",
                id: "{id}",
                value: value,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
