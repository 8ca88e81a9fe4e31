use leptos::prelude::*;

/// Button component with variants (primary, secondary, remove)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary" or "remove"
    #[prop(optional)]
    variant: &'static str,
    /// Button type attribute, "button" by default
    #[prop(optional)]
    button_type: Option<&'static str>,
    /// Disabled state (reactive)
    #[prop(optional)]
    disabled: Option<Signal<bool>>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "secondary" => "button--secondary",
        "remove" => "button--remove",
        _ => "button--primary",
    };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=format!("button {}", variant_class)
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
