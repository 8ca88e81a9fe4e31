pub mod api;

pub use api::{load_all, TableCrmClient};
