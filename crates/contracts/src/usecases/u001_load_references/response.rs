use super::{LoadError, ReferenceEndpoint};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Конверт ответа API: `{ "result": [...] }`
///
/// Поле `result` может отсутствовать или быть `null`; это пустой список,
/// а не ошибка.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub result: Option<Vec<T>>,
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        self.result.unwrap_or_default()
    }
}

/// Разобрать тело ответа коллекции
pub fn parse_list<T: DeserializeOwned>(
    endpoint: ReferenceEndpoint,
    body: &str,
) -> Result<Vec<T>, LoadError> {
    serde_json::from_str::<ListResponse<T>>(body)
        .map(ListResponse::into_items)
        .map_err(|source| LoadError::Malformed { endpoint, source })
}
