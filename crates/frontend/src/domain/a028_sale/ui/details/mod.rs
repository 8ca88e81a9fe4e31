//! Sale Form UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands over the sale form state
//! - view.rs: Leptos component (pure UI)
//! - products.rs: selected products list

mod products;
mod view;
mod view_model;

pub use view::SaleFormPage;
pub use view_model::SaleFormViewModel;
