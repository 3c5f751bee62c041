//! Domain repository traits - Abstractions for data persistence

use crate::domain::entities::Customer;
use crate::domain::errors::DomainError;
use crate::domain::services::RuleViolation;
use crate::domain::value_objects::CustomerId;
use async_trait::async_trait;

/// Repository for customer persistence
///
/// Implementations consult the aggregate's save/delete capabilities before
/// committing, and rebuild customers through the unchecked rehydration path.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Load a customer by its ID
    async fn load_customer(&self, id: &CustomerId) -> Result<Customer, RepositoryError>;

    /// Save (insert or replace) a customer
    async fn save_customer(&self, customer: &Customer) -> Result<(), RepositoryError>;

    /// Check if a customer exists
    async fn customer_exists(&self, id: &CustomerId) -> Result<bool, RepositoryError>;

    /// List all stored customer IDs, sorted
    async fn list_customers(&self) -> Result<Vec<CustomerId>, RepositoryError>;

    /// Delete a customer
    async fn delete_customer(&self, id: &CustomerId) -> Result<(), RepositoryError>;
}

/// Repository errors
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Customer not found: {id}")]
    CustomerNotFound {
        id: CustomerId,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Customer {id} cannot be saved: {} rule violation(s)", .violations.len())]
    CannotBeSaved {
        id: CustomerId,
        violations: Vec<RuleViolation>,
    },

    #[error("Customer {id} cannot be deleted")]
    CannotBeDeleted { id: CustomerId },

    #[error("Rule evaluation failed: {0}")]
    Domain(#[from] DomainError),

    #[error("IO error: {message}")]
    IoError {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    #[error("Customer id '{id}' cannot be used as a storage key")]
    InvalidId { id: CustomerId },
}

impl RepositoryError {
    /// Create a not found error with an optional source
    pub fn not_found(id: impl Into<CustomerId>) -> Self {
        Self::CustomerNotFound {
            id: id.into(),
            source: Some(Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Customer not found",
            ))),
        }
    }

    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CustomerNotFound { .. })
    }
}
