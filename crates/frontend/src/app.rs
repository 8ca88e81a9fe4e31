use crate::domain::a028_sale::ui::details::SaleFormPage;
use crate::shared::config::client_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match client_config() {
        Ok(config) => view! { <SaleFormPage api=config.api /> }.into_any(),
        Err(e) => {
            log::error!("Invalid client configuration: {}", e);
            view! { <div class="error">{format!("Ошибка конфигурации: {}", e)}</div> }.into_any()
        }
    }
}
