pub mod a002_organization;
pub mod a003_counterparty;
pub mod a004_nomenclature;
pub mod a025_warehouse;
pub mod a026_paybox;
pub mod a027_price_type;
pub mod common;
