//! Infrastructure layer - External dependencies and adapters
//!
//! Concrete rule sets driven by configuration, order pricing, and
//! customer storage (in memory or as JSON files).

pub mod pricing;
pub mod repositories;
pub mod rule_sets;

pub use pricing::*;
pub use repositories::*;
pub use rule_sets::*;
