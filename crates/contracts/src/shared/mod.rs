pub mod config;
pub mod money;
pub mod sale_form;
