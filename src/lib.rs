//! # northwind
//!
//! The customer aggregate of an order-management domain, built with a
//! clean layered architecture: the domain layer owns the `Customer` entity
//! and the contracts of its collaborators, the infrastructure layer supplies
//! configured rule sets, pricing and storage, and the application layer wires
//! them into use cases.
//!
//! ## Quick Start
//!
//! ```rust
//! use northwind::domain::{Customer, Money, Order, OrderId, OrderLine};
//! use northwind::infrastructure::{LineItemPricing, RuleSetRegistry};
//! use northwind::config::RulesConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rules = RuleSetRegistry::from_config(&RulesConfig::default()).customer_rules()?;
//!
//! let mut customer =
//!     Customer::create_new_customer("ALFKI", "Alfreds Futterkiste", "Maria Anders")?;
//! customer.add_order(Order::new(
//!     OrderId::from("10643"),
//!     vec![OrderLine::new("Rössle Sauerkraut", Money::new(4560, 2), 1)],
//! ));
//!
//! assert_eq!(customer.to_string(), "Alfreds Futterkiste");
//! assert_eq!(customer.total_income(&LineItemPricing), Money::new(4560, 2));
//! assert!(customer.is_valid_for_registration(&rules)?);
//!
//! // Default ordering rules want a phone number.
//! assert!(!customer.can_make_orders(&rules)?);
//! customer.set_phone_number(Some("030-0074321".to_string()));
//! assert!(customer.can_make_orders(&rules)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Persistence and use cases
//!
//! ```rust
//! use std::sync::Arc;
//! use northwind::application::{NewCustomer, RegisterCustomerUseCase};
//! use northwind::config::RulesConfig;
//! use northwind::infrastructure::{InMemoryCustomerRepository, RuleSetRegistry};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rules = RuleSetRegistry::from_config(&RulesConfig::default()).customer_rules()?;
//! let repository = Arc::new(InMemoryCustomerRepository::new(rules));
//!
//! let use_case = RegisterCustomerUseCase::new(repository);
//! let customer = use_case
//!     .register(NewCustomer::new("BERGS", "Berglunds snabbköp", "Christina Berglund"))
//!     .await?;
//! println!("registered {customer}");
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{ApplicationError, CustomerReport, NewCustomer};
pub use config::{RuleSetConfig, RulesConfig};
pub use domain::{
    ContactInfo, Customer, CustomerId, CustomerRules, DomainError, Money, Order, OrderId,
    OrderLine, OrderPricing, RuleSet, RuleViolation, ValidationResult,
};
