pub mod aggregate;

pub use aggregate::{Paybox, PayboxId};
