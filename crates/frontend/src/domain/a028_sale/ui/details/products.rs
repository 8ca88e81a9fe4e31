use super::SaleFormViewModel;
use crate::shared::components::ui::Button;
use contracts::shared::money::format_price;
use leptos::prelude::*;

/// Выбранные товары в порядке добавления, с кнопкой удаления
#[component]
pub fn SelectedProducts(vm: SaleFormViewModel) -> impl IntoView {
    view! {
        <div class="products-container">
            <For
                each=move || vm.form.with(|f| f.selection().list().to_vec())
                key=|product| product.id
                children=move |product| {
                    let id = product.id;
                    view! {
                        <div class="product-item">
                            <div class="product-name">{product.name.clone()}</div>
                            <div class="product-price">{format_price(product.price_or_zero())}</div>
                            <Button
                                variant="remove"
                                on_click=Callback::new(move |_| vm.remove_product(id))
                            >
                                "×"
                            </Button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Итоги: количество товаров и сумма
#[component]
pub fn TotalsPanel(vm: SaleFormViewModel) -> impl IntoView {
    let totals = move || vm.form.with(|f| f.totals());

    view! {
        <div class="information-container">
            {move || {
                vm.form.with(|f| {
                    f.selected_counterparty().map(|c| {
                        view! { <div class="contragent-info">"Контрагент: " {c.name.clone()}</div> }
                    })
                })
            }}
            <div class="totals">
                <div class="totals-elem">
                    <p>"Итого товаров:"</p>
                    <p>{move || totals().count}</p>
                </div>
                <div class="totals-elem">
                    <p>"Сумма:"</p>
                    <p>{move || totals().sum_label()}</p>
                </div>
            </div>
        </div>
    }
}
