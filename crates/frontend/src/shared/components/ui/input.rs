use leptos::prelude::*;

/// Input component with label support
///
/// The value is bound as a DOM property, so clearing the signal clears the
/// field even after the user has typed into it.
#[component]
pub fn Input(
    /// Label text
    label: &'static str,
    /// ID for the input element
    id: &'static str,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Called on Enter; the key press itself is swallowed
    #[prop(optional)]
    on_enter: Option<Callback<()>>,
    /// ID of a `<datalist>` with suggestions
    #[prop(optional)]
    list: Option<&'static str>,
    /// Placeholder text
    #[prop(optional)]
    placeholder: &'static str,
    /// Input type: "text" (default), "tel", ...
    #[prop(optional)]
    input_type: Option<&'static str>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                {label}
            </label>
            <input
                id=id
                class="form__input"
                type=input_type.unwrap_or("text")
                list=list
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:keydown=move |ev| {
                    if let Some(handler) = on_enter {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            handler.run(());
                        }
                    }
                }
            />
        </div>
    }
}
