//! Common types and traits for all reference entities

pub mod aggregate_id;
pub mod reference_item;

// Re-exports
pub use aggregate_id::AggregateId;
pub use reference_item::ReferenceItem;
