//! Common types and traits for company-owned records

pub mod aggregate_id;

// Re-exports
pub use aggregate_id::AggregateId;
