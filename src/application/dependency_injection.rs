//! Dependency injection container for application layer
//!
//! Use cases never construct their collaborators. The container holds the
//! repository, the pricing strategy and the rule sets, and wires them into
//! use cases on request.
//!
//! ```rust
//! use std::sync::Arc;
//! use northwind::application::DependencyContainer;
//! use northwind::config::RulesConfig;
//! use northwind::infrastructure::{InMemoryCustomerRepository, LineItemPricing, RuleSetRegistry};
//!
//! let rules = RuleSetRegistry::from_config(&RulesConfig::default())
//!     .customer_rules()
//!     .unwrap();
//! let container = DependencyContainer::new()
//!     .register_customer_repository(Arc::new(InMemoryCustomerRepository::new(rules.clone())))
//!     .register_order_pricing(Arc::new(LineItemPricing))
//!     .register_customer_rules(rules);
//!
//! assert!(container.get_customer_report_use_case().is_some());
//! ```
//!
//! Resolution is optional: a use case is `None` while any of its
//! dependencies is unregistered.

use super::use_cases::*;
use crate::domain::repositories::CustomerRepository;
use crate::domain::services::{CustomerRules, OrderPricing};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Simple dependency injection container
pub struct DependencyContainer {
    services: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl DependencyContainer {
    /// Create an empty container
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
        }
    }

    /// Register the customer repository
    pub fn register_customer_repository(mut self, repo: Arc<dyn CustomerRepository>) -> Self {
        self.services.insert(
            TypeId::of::<Arc<dyn CustomerRepository>>(),
            Box::new(repo),
        );
        self
    }

    /// Register the order pricing strategy
    pub fn register_order_pricing(mut self, pricing: Arc<dyn OrderPricing>) -> Self {
        self.services
            .insert(TypeId::of::<Arc<dyn OrderPricing>>(), Box::new(pricing));
        self
    }

    /// Register the rule sets customers are checked against
    pub fn register_customer_rules(mut self, rules: CustomerRules) -> Self {
        self.services
            .insert(TypeId::of::<CustomerRules>(), Box::new(rules));
        self
    }

    /// Resolve a service by type
    pub fn resolve<T: 'static + Clone>(&self) -> Option<T> {
        self.get_service::<T>()
    }

    /// Get register customer use case (needs a repository)
    pub fn get_register_customer_use_case(&self) -> Option<RegisterCustomerUseCase> {
        let repository = self.get_service::<Arc<dyn CustomerRepository>>()?;
        Some(RegisterCustomerUseCase::new(repository))
    }

    /// Get customer report use case (needs repository, pricing and rules)
    pub fn get_customer_report_use_case(&self) -> Option<CustomerReportUseCase> {
        let repository = self.get_service::<Arc<dyn CustomerRepository>>()?;
        let pricing = self.get_service::<Arc<dyn OrderPricing>>()?;
        let rules = self.get_service::<CustomerRules>()?;

        Some(CustomerReportUseCase::new(repository, pricing, rules))
    }

    fn get_service<T: 'static + Clone>(&self) -> Option<T> {
        self.services
            .get(&TypeId::of::<T>())
            .and_then(|service| service.downcast_ref::<T>())
            .cloned()
    }
}

impl Default for DependencyContainer {
    fn default() -> Self {
        Self::new()
    }
}
