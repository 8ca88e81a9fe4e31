use super::products::{SelectedProducts, TotalsPanel};
use super::view_model::SaleFormViewModel;
use crate::shared::components::ui::{reference_options, Button, Input, Select};
use contracts::shared::config::ApiConfig;
use leptos::prelude::*;

#[component]
pub fn SaleFormPage(api: ApiConfig) -> impl IntoView {
    let vm = SaleFormViewModel::new(api);

    let phone_query = Signal::derive(move || vm.form.with(|f| f.search().phone_query.clone()));
    let product_query =
        Signal::derive(move || vm.form.with(|f| f.search().product_query.clone()));

    view! {
        <div class="form-container">
            <form
                class="form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_token();
                }
            >
                <Input
                    label="Токен"
                    id="input-token"
                    value=vm.token
                    on_input=Callback::new(move |v| vm.token.set(v))
                    placeholder="Введите токен"
                    required=true
                />
                <Button button_type="submit" disabled=Signal::derive(move || vm.is_loading())>
                    {move || if vm.is_loading() { "Загрузка..." } else { "Продолжить" }}
                </Button>

                <Input
                    label="Контрагент (поиск по телефону)"
                    id="input-tel"
                    input_type="tel"
                    list="contragents-list"
                    value=phone_query
                    on_input=Callback::new(move |v| vm.on_phone_input(v))
                    placeholder="+79239239233"
                />
                <datalist id="contragents-list">
                    {move || {
                        vm.form.with(|f| {
                            f.counterparty_suggestions()
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <option value=c.phone.clone().unwrap_or_default()>
                                            {c.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </datalist>
                {move || {
                    vm.form.with(|f| {
                        f.selected_counterparty().map(|c| {
                            view! {
                                <div class="selected-contragent">
                                    "Выбран контрагент: " {c.name.clone()}
                                </div>
                            }
                        })
                    })
                }}

                <Select
                    label="Счёт поступления"
                    id="select-check"
                    value=Signal::derive(move || vm.header_value(|h| h.paybox_id))
                    on_change=Callback::new(move |v| vm.select_paybox(v))
                    options=Signal::derive(move || vm.form.with(|f| reference_options(&f.references().payboxes)))
                />
                <Select
                    label="Склад отгрузки"
                    id="select-warehouse"
                    value=Signal::derive(move || vm.header_value(|h| h.warehouse_id))
                    on_change=Callback::new(move |v| vm.select_warehouse(v))
                    options=Signal::derive(move || vm.form.with(|f| reference_options(&f.references().warehouses)))
                />
                <Select
                    label="Организация"
                    id="select-organization"
                    value=Signal::derive(move || vm.header_value(|h| h.organization_id))
                    on_change=Callback::new(move |v| vm.select_organization(v))
                    options=Signal::derive(move || vm.form.with(|f| reference_options(&f.references().organizations)))
                />
                <Select
                    label="Тип цены"
                    id="select-type_price"
                    value=Signal::derive(move || vm.header_value(|h| h.price_type_id))
                    on_change=Callback::new(move |v| vm.select_price_type(v))
                    options=Signal::derive(move || vm.form.with(|f| reference_options(&f.references().price_types)))
                />

                <Input
                    label="Поиск товара"
                    id="input-search"
                    list="products-list"
                    value=product_query
                    on_input=Callback::new(move |v| vm.on_product_input(v))
                    on_enter=Callback::new(move |_| vm.on_product_confirm())
                    placeholder="Введите название товара"
                />
                <datalist id="products-list">
                    {move || {
                        vm.form.with(|f| {
                            f.filtered_products()
                                .into_iter()
                                .map(|p| {
                                    view! { <option value=p.name.clone()>{p.display_label()}</option> }
                                })
                                .collect_view()
                        })
                    }}
                </datalist>

                <SelectedProducts vm=vm />
                <TotalsPanel vm=vm />

                // Создание продажи пока не реализовано
                <Button>"Создать продажу"</Button>
                <Button>"Создать и провести"</Button>
            </form>
        </div>
    }
}
