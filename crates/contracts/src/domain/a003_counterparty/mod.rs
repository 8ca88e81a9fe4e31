pub mod aggregate;

pub use aggregate::{Counterparty, CounterpartyId};
