//! Загрузка справочников формы по токену.
//!
//! Шесть запросов выполняются параллельно; результат применяется только
//! если успешны все шесть.

pub mod endpoint;
pub mod error;
pub mod loader;
pub mod response;
pub mod store;

pub use endpoint::ReferenceEndpoint;
pub use error::{LoadError, MSG_EMPTY_TOKEN, MSG_LOAD_FAILED, MSG_LOAD_OK};
pub use loader::{load_references, load_references_with_deadline, validate_token, ReferenceSource};
pub use response::{parse_list, ListResponse};
pub use store::{LoadOutcome, LoadTicket, ReferenceBundle, ReferenceStore};
