//! Domain services - Collaborators the customer aggregate delegates to
//!
//! Validation and pricing are not decided by the entity itself. The entity
//! receives them as injected strategies and only combines their answers.

use crate::domain::entities::{Customer, Order};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Money;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Rule set consulted before a customer may be registered or saved
pub const IS_VALID_FOR_REGISTRATION: &str = "IsValidForRegistration";

/// Rule set consulted before a customer may place orders
pub const CAN_MAKE_ORDERS: &str = "CanMakeOrders";

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    pub rule: String,
    pub message: String,
}

impl RuleViolation {
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.rule, self.message)
    }
}

/// Outcome of evaluating a rule set against a customer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    violations: Vec<RuleViolation>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn with_violations(violations: Vec<RuleViolation>) -> Self {
        Self { violations }
    }

    pub fn add_violation(&mut self, violation: RuleViolation) {
        self.violations.push(violation);
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[RuleViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<RuleViolation> {
        self.violations
    }
}

/// A named, externally configured set of validation predicates.
///
/// Implementations must be free of side effects: the aggregate may evaluate
/// the same rule set several times for one question.
pub trait RuleSet: Send + Sync {
    fn name(&self) -> &str;

    fn evaluate(&self, customer: &Customer) -> Result<ValidationResult, DomainError>;
}

/// The pair of rule sets a customer is checked against
#[derive(Clone)]
pub struct CustomerRules {
    registration: Arc<dyn RuleSet>,
    ordering: Arc<dyn RuleSet>,
}

impl CustomerRules {
    pub fn new(registration: Arc<dyn RuleSet>, ordering: Arc<dyn RuleSet>) -> Self {
        Self {
            registration,
            ordering,
        }
    }

    pub fn registration(&self) -> &dyn RuleSet {
        self.registration.as_ref()
    }

    pub fn ordering(&self) -> &dyn RuleSet {
        self.ordering.as_ref()
    }
}

impl std::fmt::Debug for CustomerRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerRules")
            .field("registration", &self.registration.name())
            .field("ordering", &self.ordering.name())
            .finish()
    }
}

/// Prices a single order
pub trait OrderPricing: Send + Sync {
    fn price(&self, order: &Order) -> Money;
}

/// Rule set that accepts every customer
#[derive(Debug, Clone)]
pub struct AcceptAll {
    name: String,
}

impl AcceptAll {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl RuleSet for AcceptAll {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, _customer: &Customer) -> Result<ValidationResult, DomainError> {
        Ok(ValidationResult::valid())
    }
}
