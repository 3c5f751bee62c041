//! Infrastructure implementations of repository traits

use crate::domain::entities::{AggregateRoot, Customer, CustomerRecord};
use crate::domain::repositories::{CustomerRepository, RepositoryError};
use crate::domain::services::CustomerRules;
use crate::domain::value_objects::CustomerId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

const FILE_SUFFIX: &str = ".customer.json";

/// Refuse the save unless the aggregate allows it
fn ensure_can_be_saved(customer: &Customer, rules: &CustomerRules) -> Result<(), RepositoryError> {
    if customer.can_be_saved(rules)? {
        return Ok(());
    }
    let violations = customer
        .validate_for_registration(rules)?
        .into_violations();
    log::warn!(
        "refusing to save customer {}: {} violation(s)",
        customer.id(),
        violations.len()
    );
    Err(RepositoryError::CannotBeSaved {
        id: customer.id().clone(),
        violations,
    })
}

fn ensure_can_be_deleted(customer: &Customer) -> Result<(), RepositoryError> {
    if customer.can_be_deleted() {
        Ok(())
    } else {
        Err(RepositoryError::CannotBeDeleted {
            id: customer.id().clone(),
        })
    }
}

/// In-memory implementation, mainly for tests and embedding
pub struct InMemoryCustomerRepository {
    rules: CustomerRules,
    customers: RwLock<HashMap<CustomerId, CustomerRecord>>,
}

impl InMemoryCustomerRepository {
    pub fn new(rules: CustomerRules) -> Self {
        Self {
            rules,
            customers: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn load_customer(&self, id: &CustomerId) -> Result<Customer, RepositoryError> {
        self.customers
            .read()
            .await
            .get(id)
            .cloned()
            .map(Customer::rehydrate)
            .ok_or_else(|| RepositoryError::not_found(id.clone()))
    }

    async fn save_customer(&self, customer: &Customer) -> Result<(), RepositoryError> {
        ensure_can_be_saved(customer, &self.rules)?;
        self.customers
            .write()
            .await
            .insert(customer.id().clone(), customer.to_record());
        log::debug!("saved customer {} in memory", customer.id());
        Ok(())
    }

    async fn customer_exists(&self, id: &CustomerId) -> Result<bool, RepositoryError> {
        Ok(self.customers.read().await.contains_key(id))
    }

    async fn list_customers(&self) -> Result<Vec<CustomerId>, RepositoryError> {
        let mut ids: Vec<CustomerId> = self.customers.read().await.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    async fn delete_customer(&self, id: &CustomerId) -> Result<(), RepositoryError> {
        let mut customers = self.customers.write().await;
        let record = customers
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(id.clone()))?;
        ensure_can_be_deleted(&Customer::rehydrate(record))?;
        customers.remove(id);
        log::debug!("deleted customer {id} from memory");
        Ok(())
    }
}

/// One JSON file per customer under a base directory
pub struct JsonFileCustomerRepository {
    base_path: PathBuf,
    rules: CustomerRules,
}

impl JsonFileCustomerRepository {
    pub fn new<P: Into<PathBuf>>(base_path: P, rules: CustomerRules) -> Self {
        Self {
            base_path: base_path.into(),
            rules,
        }
    }

    /// File for `id`, which must name a single entry directly under `base_path`
    fn customer_path(&self, id: &CustomerId) -> Result<PathBuf, RepositoryError> {
        let raw = id.as_str();
        if raw.is_empty() || raw.contains(['/', '\\', '\0']) || raw.contains("..") {
            log::warn!("refusing customer id {raw:?} as a file name");
            return Err(RepositoryError::InvalidId { id: id.clone() });
        }
        Ok(self.base_path.join(format!("{raw}{FILE_SUFFIX}")))
    }
}

#[async_trait]
impl CustomerRepository for JsonFileCustomerRepository {
    async fn load_customer(&self, id: &CustomerId) -> Result<Customer, RepositoryError> {
        let path = self.customer_path(id)?;

        if !path.exists() {
            return Err(RepositoryError::not_found(id.clone()));
        }

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            RepositoryError::io(
                format!("Failed to read customer file {}", path.display()),
                e,
            )
        })?;

        let record: CustomerRecord =
            serde_json::from_str(&content).map_err(|e| RepositoryError::SerializationError {
                message: format!("Failed to deserialize customer {id}: {e}"),
            })?;

        if record.id != *id {
            return Err(RepositoryError::SerializationError {
                message: format!(
                    "Customer file {} holds customer {}, expected {id}",
                    path.display(),
                    record.id
                ),
            });
        }

        Ok(Customer::rehydrate(record))
    }

    async fn save_customer(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let path = self.customer_path(customer.id())?;
        ensure_can_be_saved(customer, &self.rules)?;

        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| RepositoryError::io("Failed to create customer directory", e))?;

        let json = serde_json::to_string_pretty(&customer.to_record()).map_err(|e| {
            RepositoryError::SerializationError {
                message: format!("Failed to serialize customer {}: {e}", customer.id()),
            }
        })?;

        tokio::fs::write(&path, json).await.map_err(|e| {
            RepositoryError::io(
                format!("Failed to write customer file {}", path.display()),
                e,
            )
        })?;
        log::debug!("saved customer {} to {}", customer.id(), path.display());
        Ok(())
    }

    async fn customer_exists(&self, id: &CustomerId) -> Result<bool, RepositoryError> {
        Ok(self.customer_path(id)?.exists())
    }

    async fn list_customers(&self) -> Result<Vec<CustomerId>, RepositoryError> {
        let mut customers = Vec::new();

        if !self.base_path.exists() {
            return Ok(customers);
        }

        let mut entries = tokio::fs::read_dir(&self.base_path).await.map_err(|e| {
            RepositoryError::io(
                format!("Failed to read directory {}", self.base_path.display()),
                e,
            )
        })?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RepositoryError::io("Failed to read directory entry", e))?
        {
            if let Some(name) = entry.file_name().to_str()
                && let Some(id) = name.strip_suffix(FILE_SUFFIX)
            {
                customers.push(CustomerId::from(id));
            }
        }

        customers.sort();
        Ok(customers)
    }

    async fn delete_customer(&self, id: &CustomerId) -> Result<(), RepositoryError> {
        let customer = self.load_customer(id).await?;
        ensure_can_be_deleted(&customer)?;

        let path = self.customer_path(id)?;
        tokio::fs::remove_file(&path).await.map_err(|e| {
            RepositoryError::io(
                format!("Failed to delete customer file {}", path.display()),
                e,
            )
        })
    }
}
