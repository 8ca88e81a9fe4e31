use contracts::shared::config::ApiConfig;
use contracts::usecases::u001_load_references::{
    load_references_with_deadline, LoadError, ReferenceBundle, ReferenceEndpoint, ReferenceSource,
};
use gloo_timers::future::TimeoutFuture;

use crate::shared::api_utils::get_text;

/// Клиент API справочников
pub struct TableCrmClient {
    base_url: String,
}

impl TableCrmClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl ReferenceSource for TableCrmClient {
    async fn fetch(&self, endpoint: ReferenceEndpoint, token: &str) -> Result<String, String> {
        log::debug!("GET {}/{}/", self.base_url, endpoint);
        get_text(&endpoint.url(&self.base_url, token)).await
    }
}

/// Загрузить все справочники с ограничением по времени из конфигурации
pub async fn load_all(api: &ApiConfig, token: &str) -> Result<ReferenceBundle, LoadError> {
    let client = TableCrmClient::new(api.base_url.as_str());
    load_references_with_deadline(
        &client,
        token,
        TimeoutFuture::new(api.timeout_ms),
        api.timeout_ms,
    )
    .await
}
