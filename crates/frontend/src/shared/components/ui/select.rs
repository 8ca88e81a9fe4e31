use contracts::domain::common::{AggregateId, ReferenceItem};
use leptos::prelude::*;

/// Options for a [`Select`] built from a loaded reference list
pub fn reference_options<T: ReferenceItem>(items: &[T]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|item| (item.id().as_string(), item.name().to_string()))
        .collect()
}

/// Select component with label and a hidden "Выберите..." placeholder
#[component]
pub fn Select(
    /// Label text
    label: &'static str,
    /// ID (and name) of the select element
    id: &'static str,
    /// Current value; empty string means nothing chosen
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                {label}
            </label>
            <select
                id=id
                name=id
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" disabled=true hidden=true selected=move || value.get().is_empty()>
                    "Выберите..."
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_warehouse::Warehouse;

    #[test]
    fn test_reference_options() {
        let items = vec![Warehouse::new(1, "Основной"), Warehouse::new(7, "Резерв")];
        assert_eq!(
            reference_options(&items),
            vec![
                ("1".to_string(), "Основной".to_string()),
                ("7".to_string(), "Резерв".to_string())
            ]
        );
    }
}
