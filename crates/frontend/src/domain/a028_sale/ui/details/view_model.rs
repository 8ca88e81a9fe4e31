use crate::shared::notify::notify;
use crate::usecases::u001_load_references::load_all;
use contracts::domain::a004_nomenclature::ProductId;
use contracts::domain::common::AggregateId;
use contracts::shared::config::ApiConfig;
use contracts::shared::sale_form::{DocumentHeader, SaleForm};
use contracts::usecases::u001_load_references::{LoadOutcome, MSG_LOAD_OK};
use leptos::prelude::*;

/// ViewModel for the sale form
///
/// The whole form lives in one signal; every command is a single update of
/// that signal, and everything the page shows is read through `form.with`.
#[derive(Clone, Copy)]
pub struct SaleFormViewModel {
    pub form: RwSignal<SaleForm>,
    pub token: RwSignal<String>,
    api: StoredValue<ApiConfig>,
}

/// Пустое значение селекта — ничего не выбрано
fn parse_choice<I: AggregateId>(value: &str) -> Option<I> {
    if value.is_empty() {
        return None;
    }
    I::from_string(value)
        .map_err(|e| log::warn!("Unexpected select value {:?}: {}", value, e))
        .ok()
}

impl SaleFormViewModel {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            form: RwSignal::new(SaleForm::new()),
            token: RwSignal::new(String::new()),
            api: StoredValue::new(api),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.form.with(|f| f.store().is_loading())
    }

    /// Отправка токена: загрузка всех справочников
    pub fn submit_token(&self) {
        let token = self.token.get_untracked();
        let Some(started) = self.form.try_update(|f| f.begin_load(&token)) else {
            return;
        };
        let ticket = match started {
            Ok(ticket) => ticket,
            Err(e) => {
                notify(e.user_message());
                return;
            }
        };

        let api = self.api.get_value();
        let form = self.form;
        leptos::task::spawn_local(async move {
            let result = load_all(&api, ticket.token()).await;
            match form.try_update(|f| f.complete_load(ticket, result)) {
                Some(LoadOutcome::Applied) => notify(MSG_LOAD_OK),
                Some(LoadOutcome::Failed(e)) => notify(e.user_message()),
                Some(LoadOutcome::Stale) | None => {}
            }
        });
    }

    pub fn on_phone_input(&self, value: String) {
        self.form.update(|f| f.set_phone_query(&value));
    }

    pub fn on_product_input(&self, value: String) {
        self.form.update(|f| {
            f.set_product_query(&value);
        });
    }

    pub fn on_product_confirm(&self) {
        self.form.update(|f| {
            f.confirm_product();
        });
    }

    pub fn remove_product(&self, id: ProductId) {
        self.form.update(|f| {
            f.remove_product(id);
        });
    }

    pub fn select_paybox(&self, value: String) {
        self.form.update(|f| {
            f.set_paybox(parse_choice(&value));
        });
    }

    pub fn select_warehouse(&self, value: String) {
        self.form.update(|f| {
            f.set_warehouse(parse_choice(&value));
        });
    }

    pub fn select_organization(&self, value: String) {
        self.form.update(|f| {
            f.set_organization(parse_choice(&value));
        });
    }

    pub fn select_price_type(&self, value: String) {
        self.form.update(|f| {
            f.set_price_type(parse_choice(&value));
        });
    }

    /// Текущее значение селекта для шапки документа
    pub fn header_value<I: AggregateId>(
        &self,
        pick: impl Fn(&DocumentHeader) -> Option<I>,
    ) -> String {
        self.form
            .with(|f| pick(&f.header()).map(|id| id.as_string()).unwrap_or_default())
    }
}
