use super::ReferenceEndpoint;
use thiserror::Error;

pub const MSG_LOAD_OK: &str = "Данные успешно загружены!";
pub const MSG_EMPTY_TOKEN: &str = "Введите токен";
pub const MSG_LOAD_FAILED: &str = "Ошибка при получении данных. Проверьте токен.";

/// Ошибка загрузки справочников
///
/// Подробности (какой запрос и почему) идут только в лог; пользователь
/// видит одно общее сообщение, см. [`LoadError::user_message`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("token is empty")]
    EmptyToken,

    #[error("request to {endpoint} failed: {message}")]
    Request {
        endpoint: ReferenceEndpoint,
        message: String,
    },

    #[error("malformed response from {endpoint}: {source}")]
    Malformed {
        endpoint: ReferenceEndpoint,
        #[source]
        source: serde_json::Error,
    },

    #[error("reference load timed out after {after_ms} ms")]
    Timeout { after_ms: u32 },
}

impl LoadError {
    /// Текст уведомления для оператора
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::EmptyToken => MSG_EMPTY_TOKEN,
            _ => MSG_LOAD_FAILED,
        }
    }
}
