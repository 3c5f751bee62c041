//! Domain entities - Core business objects with identity and lifecycle

use crate::domain::errors::*;
use crate::domain::services::{CustomerRules, OrderPricing, ValidationResult};
use crate::domain::value_objects::*;
use serde::{Deserialize, Serialize};

/// Fields shared by every kind of organization (customers, suppliers, shippers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    name: String,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    fax_number: Option<String>,
}

impl Organization {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: None,
            fax_number: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn fax_number(&self) -> Option<&str> {
        self.fax_number.as_deref()
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) {
        self.phone_number = phone_number;
    }

    pub fn set_fax_number(&mut self, fax_number: Option<String>) {
        self.fax_number = fax_number;
    }
}

/// An order placed by a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new(id: OrderId, lines: Vec<OrderLine>) -> Self {
        Self { id, lines }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }
}

/// Persistence-layer capabilities of an aggregate root
pub(crate) trait AggregateRoot {
    fn can_be_saved(&self, rules: &CustomerRules) -> Result<bool, DomainError>;

    fn can_be_deleted(&self) -> bool;
}

/// Customer aggregate root.
///
/// New customers come only from [`Customer::create_new_customer`], which
/// guarantees non-blank identifiers. Validity is never cached: every query
/// re-evaluates the injected rule sets against the current field values.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: CustomerId,
    organization: Organization,
    contact_info: ContactInfo,
    orders: Vec<Order>,
}

impl Customer {
    /// Create a brand-new customer.
    ///
    /// Arguments are checked in order (`id`, `company_name`, `contact_name`)
    /// and the first blank one is reported.
    pub fn create_new_customer(
        id: &str,
        company_name: &str,
        contact_name: &str,
    ) -> Result<Self, DomainError> {
        require_text("id", id)?;
        require_text("company_name", company_name)?;
        require_text("contact_name", contact_name)?;

        Ok(Self {
            id: CustomerId::from(id),
            organization: Organization::new(company_name),
            contact_info: ContactInfo::new(contact_name),
            orders: Vec::new(),
        })
    }

    /// Rebuild a customer from storage without any checks
    pub(crate) fn rehydrate(record: CustomerRecord) -> Self {
        Self {
            id: record.id,
            organization: record.organization,
            contact_info: record.contact_info,
            orders: record.orders,
        }
    }

    pub(crate) fn to_record(&self) -> CustomerRecord {
        CustomerRecord {
            id: self.id.clone(),
            organization: self.organization.clone(),
            contact_info: self.contact_info.clone(),
            orders: self.orders.clone(),
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.organization.name()
    }

    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    pub fn contact_info(&self) -> &ContactInfo {
        &self.contact_info
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.organization.phone_number()
    }

    pub fn fax_number(&self) -> Option<&str> {
        self.organization.fax_number()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) {
        self.organization.set_phone_number(phone_number);
    }

    pub fn set_fax_number(&mut self, fax_number: Option<String>) {
        self.organization.set_fax_number(fax_number);
    }

    pub fn set_contact_info(&mut self, contact_info: ContactInfo) {
        self.contact_info = contact_info;
    }

    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Sum of all order prices. Zero without orders, saturating at the `Money` bounds.
    pub fn total_income(&self, pricing: &dyn OrderPricing) -> Money {
        self.orders
            .iter()
            .map(|order| pricing.price(order))
            .fold(Money::ZERO, Money::saturating_add)
    }

    pub fn validate_for_registration(
        &self,
        rules: &CustomerRules,
    ) -> Result<ValidationResult, DomainError> {
        let result = rules.registration().evaluate(self)?;
        log::debug!(
            "customer {} registration check: {} violation(s)",
            self.id,
            result.violations().len()
        );
        Ok(result)
    }

    pub fn is_valid_for_registration(&self, rules: &CustomerRules) -> Result<bool, DomainError> {
        Ok(self.validate_for_registration(rules)?.is_valid())
    }

    /// Both rule sets are evaluated on every call, even when the first fails.
    pub fn can_make_orders(&self, rules: &CustomerRules) -> Result<bool, DomainError> {
        let ordering = rules.ordering().evaluate(self)?;
        let registration = self.is_valid_for_registration(rules)?;
        Ok(ordering.is_valid() && registration)
    }
}

impl AggregateRoot for Customer {
    fn can_be_saved(&self, rules: &CustomerRules) -> Result<bool, DomainError> {
        self.is_valid_for_registration(rules)
    }

    // No referential check against orders is made here.
    fn can_be_deleted(&self) -> bool {
        true
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stored form of a customer, only produced and consumed by persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CustomerRecord {
    pub id: CustomerId,
    #[serde(flatten)]
    pub organization: Organization,
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub orders: Vec<Order>,
}

fn require_text(parameter: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::empty_value(parameter));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::{
        AcceptAll, CAN_MAKE_ORDERS, IS_VALID_FOR_REGISTRATION, RuleSet, RuleViolation,
    };
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedPricing;

    impl OrderPricing for FixedPricing {
        fn price(&self, order: &Order) -> Money {
            order.lines().iter().map(|line| line.unit_price()).sum()
        }
    }

    struct Rejecting {
        name: &'static str,
        calls: AtomicUsize,
    }

    impl Rejecting {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl RuleSet for Rejecting {
        fn name(&self) -> &str {
            self.name
        }

        fn evaluate(&self, _customer: &Customer) -> Result<ValidationResult, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ValidationResult::with_violations(vec![RuleViolation::new(
                self.name,
                "rejected",
            )]))
        }
    }

    fn order(id: &str, price: Money) -> Order {
        Order::new(OrderId::from(id), vec![OrderLine::new("item", price, 1)])
    }

    #[test]
    fn create_new_customer_sets_fields() {
        let customer =
            Customer::create_new_customer("ALFKI", "Alfreds Futterkiste", "Maria Anders")
                .unwrap();

        assert_eq!(customer.id().as_str(), "ALFKI");
        assert_eq!(customer.name(), "Alfreds Futterkiste");
        assert_eq!(customer.contact_info().contact_name(), "Maria Anders");
        assert!(customer.orders().is_empty());
        assert_eq!(customer.phone_number(), None);
        assert_eq!(customer.fax_number(), None);
    }

    #[test]
    fn create_new_customer_reports_first_blank_parameter() {
        let err = Customer::create_new_customer("  ", "", "").unwrap_err();
        assert_eq!(err, DomainError::empty_value("id"));

        let err = Customer::create_new_customer("ALFKI", "\t", "Maria").unwrap_err();
        assert_eq!(err.parameter(), Some("company_name"));

        let err = Customer::create_new_customer("ALFKI", "Alfreds", " \n").unwrap_err();
        assert_eq!(err.parameter(), Some("contact_name"));
    }

    #[test]
    fn total_income_is_exact() {
        let mut customer = Customer::create_new_customer("A", "B", "C").unwrap();
        assert_eq!(customer.total_income(&FixedPricing), Money::ZERO);

        customer.add_order(order("1", Money::new(1000, 2)));
        customer.add_order(order("2", Money::new(550, 2)));
        customer.add_order(order("3", Money::new(225, 2)));

        assert_eq!(customer.total_income(&FixedPricing), Money::new(1775, 2));
    }

    #[test]
    fn can_make_orders_evaluates_both_rule_sets() {
        let customer = Customer::create_new_customer("A", "B", "C").unwrap();
        let ordering = Arc::new(Rejecting::new(CAN_MAKE_ORDERS));
        let registration = Arc::new(Rejecting::new(IS_VALID_FOR_REGISTRATION));
        let rules = CustomerRules::new(registration.clone(), ordering.clone());

        assert!(!customer.can_make_orders(&rules).unwrap());
        assert_eq!(ordering.calls.load(Ordering::SeqCst), 1);
        assert_eq!(registration.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn aggregate_root_capabilities() {
        let mut customer = Customer::create_new_customer("A", "B", "C").unwrap();
        customer.add_order(order("1", Money::ONE));

        let accepting = CustomerRules::new(
            Arc::new(AcceptAll::new(IS_VALID_FOR_REGISTRATION)),
            Arc::new(AcceptAll::new(CAN_MAKE_ORDERS)),
        );
        let rejecting = CustomerRules::new(
            Arc::new(Rejecting::new(IS_VALID_FOR_REGISTRATION)),
            Arc::new(AcceptAll::new(CAN_MAKE_ORDERS)),
        );

        assert!(customer.can_be_saved(&accepting).unwrap());
        assert!(!customer.can_be_saved(&rejecting).unwrap());
        assert!(customer.can_be_deleted());
    }

    #[test]
    fn record_round_trip_preserves_customer() {
        let mut customer = Customer::create_new_customer("A", "B", "C").unwrap();
        customer.set_phone_number(Some("030-0074321".to_string()));
        customer.add_order(order("10248", Money::new(4400, 2)));

        let restored = Customer::rehydrate(customer.to_record());
        assert_eq!(restored, customer);
    }

    #[test]
    fn rehydrate_skips_argument_checks() {
        let record = CustomerRecord {
            id: CustomerId::from(""),
            organization: Organization::new(""),
            contact_info: ContactInfo::new(""),
            orders: Vec::new(),
        };
        let customer = Customer::rehydrate(record);
        assert_eq!(customer.name(), "");
    }
}
