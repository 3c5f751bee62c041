//! Application layer - Use cases and orchestration
//!
//! This layer orchestrates the customer aggregate, its repository and its
//! collaborators to fulfill business use cases.
//! It depends on domain but not on infrastructure.

pub mod dependency_injection;
pub mod use_cases;

pub use dependency_injection::*;
pub use use_cases::*;
