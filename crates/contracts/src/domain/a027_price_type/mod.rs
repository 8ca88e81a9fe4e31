pub mod aggregate;

pub use aggregate::{PriceType, PriceTypeId};
