//! Application use cases - High-level business operations

use crate::domain::{entities::*, errors::DomainError, repositories::*, services::*, value_objects::*};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Registration request as it arrives from outside (JSON, forms).
///
/// Every field may be absent here; absence is reported as an invalid
/// argument before any customer is constructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub id: Option<String>,
    pub company_name: Option<String>,
    pub contact_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub fax_number: Option<String>,
}

impl NewCustomer {
    pub fn new(
        id: impl Into<String>,
        company_name: impl Into<String>,
        contact_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            company_name: Some(company_name.into()),
            contact_name: Some(contact_name.into()),
            ..Self::default()
        }
    }

    /// Build the customer, checking absence first and then blankness
    pub fn into_customer(self) -> Result<Customer, DomainError> {
        let id = self.id.ok_or_else(|| DomainError::invalid_argument("id"))?;
        let company_name = self
            .company_name
            .ok_or_else(|| DomainError::invalid_argument("company_name"))?;
        let contact_name = self
            .contact_name
            .ok_or_else(|| DomainError::invalid_argument("contact_name"))?;

        let mut customer = Customer::create_new_customer(&id, &company_name, &contact_name)?;
        customer.set_phone_number(self.phone_number);
        customer.set_fax_number(self.fax_number);
        Ok(customer)
    }
}

/// Use case for registering new customers
pub struct RegisterCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl RegisterCustomerUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, request: NewCustomer) -> Result<Customer, ApplicationError> {
        let customer = request.into_customer()?;

        if self.repository.customer_exists(customer.id()).await? {
            return Err(ApplicationError::DuplicateCustomer {
                id: customer.id().clone(),
            });
        }

        self.repository.save_customer(&customer).await?;
        log::debug!("registered customer {} ({})", customer.id(), customer);
        Ok(customer)
    }
}

/// Summary of one customer's standing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerReport {
    pub id: CustomerId,
    pub name: String,
    pub total_income: Money,
    pub order_count: usize,
    pub valid_for_registration: bool,
    pub can_make_orders: bool,
    pub violations: Vec<RuleViolation>,
}

/// Use case for reporting income and validity of stored customers
pub struct CustomerReportUseCase {
    repository: Arc<dyn CustomerRepository>,
    pricing: Arc<dyn OrderPricing>,
    rules: CustomerRules,
}

impl CustomerReportUseCase {
    pub fn new(
        repository: Arc<dyn CustomerRepository>,
        pricing: Arc<dyn OrderPricing>,
        rules: CustomerRules,
    ) -> Self {
        Self {
            repository,
            pricing,
            rules,
        }
    }

    /// Evaluates each rule set once
    pub fn summarize(&self, customer: &Customer) -> Result<CustomerReport, ApplicationError> {
        let registration = customer.validate_for_registration(&self.rules)?;
        let ordering = self.rules.ordering().evaluate(customer)?;
        // Same conjunction as Customer::can_make_orders
        let can_make_orders = ordering.is_valid() && registration.is_valid();

        let mut violations = registration.violations().to_vec();
        violations.extend(ordering.into_violations());

        Ok(CustomerReport {
            id: customer.id().clone(),
            name: customer.to_string(),
            total_income: customer.total_income(self.pricing.as_ref()),
            order_count: customer.orders().len(),
            valid_for_registration: registration.is_valid(),
            can_make_orders,
            violations,
        })
    }

    pub async fn report(&self, id: &CustomerId) -> Result<CustomerReport, ApplicationError> {
        let customer = self.repository.load_customer(id).await?;
        self.summarize(&customer)
    }

    pub async fn report_all(&self) -> Result<Vec<CustomerReport>, ApplicationError> {
        let mut reports = Vec::new();
        for id in self.repository.list_customers().await? {
            reports.push(self.report(&id).await?);
        }
        Ok(reports)
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Customer {id} is already registered")]
    DuplicateCustomer { id: CustomerId },
}
