//! Состояние формы продажи и чистые функции поиска/выбора над ним

pub mod counterparty_matcher;
pub mod product_selector;
pub mod selection;
pub mod state;
pub mod totals;

pub use counterparty_matcher::{counterparty_suggestions, match_counterparty};
pub use product_selector::{filtered_products, ProductSelection};
pub use selection::SelectionSet;
pub use state::{DocumentHeader, SaleForm, SearchState};
pub use totals::Totals;
