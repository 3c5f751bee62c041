//! Configured rule sets and the registry that hands them out by name

use crate::config::{RuleSetConfig, RulesConfig};
use crate::domain::entities::Customer;
use crate::domain::errors::DomainError;
use crate::domain::services::{
    CAN_MAKE_ORDERS, CustomerRules, IS_VALID_FOR_REGISTRATION, RuleSet, RuleViolation,
    ValidationResult,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Rule set whose predicates come from a [`RuleSetConfig`]
#[derive(Debug, Clone)]
pub struct ConfiguredRuleSet {
    name: String,
    config: RuleSetConfig,
}

impl ConfiguredRuleSet {
    pub fn new(name: impl Into<String>, config: RuleSetConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    pub fn config(&self) -> &RuleSetConfig {
        &self.config
    }
}

impl RuleSet for ConfiguredRuleSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, customer: &Customer) -> Result<ValidationResult, DomainError> {
        let config = &self.config;
        let mut result = ValidationResult::valid();
        if !config.enabled {
            return Ok(result);
        }

        if config.require_phone_number && is_blank(customer.phone_number()) {
            result.add_violation(RuleViolation::new(
                "PhoneNumberRequired",
                "phone number is required",
            ));
        }

        if config.require_fax_number && is_blank(customer.fax_number()) {
            result.add_violation(RuleViolation::new(
                "FaxNumberRequired",
                "fax number is required",
            ));
        }

        if let Some(max) = config.max_company_name_length
            && customer.name().chars().count() > max
        {
            result.add_violation(RuleViolation::new(
                "CompanyNameLength",
                format!("company name must be at most {max} characters"),
            ));
        }

        if let Some(max) = config.max_contact_name_length
            && customer.contact_info().contact_name().chars().count() > max
        {
            result.add_violation(RuleViolation::new(
                "ContactNameLength",
                format!("contact name must be at most {max} characters"),
            ));
        }

        if customer.orders().len() < config.min_orders {
            result.add_violation(RuleViolation::new(
                "MinimumOrders",
                format!(
                    "at least {} order(s) required, found {}",
                    config.min_orders,
                    customer.orders().len()
                ),
            ));
        }

        Ok(result)
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Rule sets addressable by name
#[derive(Default, Clone)]
pub struct RuleSetRegistry {
    rule_sets: HashMap<String, Arc<dyn RuleSet>>,
}

impl RuleSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the two standard rule sets built from configuration
    pub fn from_config(config: &RulesConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ConfiguredRuleSet::new(
            IS_VALID_FOR_REGISTRATION,
            config.registration.clone(),
        )));
        registry.register(Arc::new(ConfiguredRuleSet::new(
            CAN_MAKE_ORDERS,
            config.ordering.clone(),
        )));
        registry
    }

    /// Register a rule set under its own name, replacing any previous one
    pub fn register(&mut self, rule_set: Arc<dyn RuleSet>) {
        self.rule_sets.insert(rule_set.name().to_string(), rule_set);
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn RuleSet>, DomainError> {
        self.rule_sets.get(name).cloned().ok_or_else(|| {
            log::warn!("rule set '{name}' requested but not registered");
            DomainError::unknown_rule_set(name)
        })
    }

    pub fn customer_rules(&self) -> Result<CustomerRules, DomainError> {
        Ok(CustomerRules::new(
            self.get(IS_VALID_FOR_REGISTRATION)?,
            self.get(CAN_MAKE_ORDERS)?,
        ))
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rule_sets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
