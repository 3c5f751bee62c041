//! Customer aggregate behavior against hand-written collaborator mocks

use std::sync::Arc;
use northwind::domain::*;

/// Rule set mock with a fixed answer
struct StubRuleSet {
    name: &'static str,
    valid: bool,
}

impl StubRuleSet {
    fn passing(name: &'static str) -> Arc<Self> {
        Arc::new(Self { name, valid: true })
    }

    fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self { name, valid: false })
    }
}

impl RuleSet for StubRuleSet {
    fn name(&self) -> &str {
        self.name
    }

    fn evaluate(&self, _customer: &Customer) -> Result<ValidationResult, DomainError> {
        if self.valid {
            Ok(ValidationResult::valid())
        } else {
            Ok(ValidationResult::with_violations(vec![RuleViolation::new(
                self.name,
                "stubbed failure",
            )]))
        }
    }
}

/// Rule set mock that always errors, as an unregistered collaborator would
struct BrokenRuleSet;

impl RuleSet for BrokenRuleSet {
    fn name(&self) -> &str {
        "Broken"
    }

    fn evaluate(&self, _customer: &Customer) -> Result<ValidationResult, DomainError> {
        Err(DomainError::unknown_rule_set("Broken"))
    }
}

/// Prices each order by its first line's unit price
struct FirstLinePricing;

impl OrderPricing for FirstLinePricing {
    fn price(&self, order: &Order) -> Money {
        order
            .lines()
            .first()
            .map(|line| line.unit_price())
            .unwrap_or(Money::ZERO)
    }
}

fn rules(registration: bool, ordering: bool) -> CustomerRules {
    let registration = if registration {
        StubRuleSet::passing(IS_VALID_FOR_REGISTRATION)
    } else {
        StubRuleSet::failing(IS_VALID_FOR_REGISTRATION)
    };
    let ordering = if ordering {
        StubRuleSet::passing(CAN_MAKE_ORDERS)
    } else {
        StubRuleSet::failing(CAN_MAKE_ORDERS)
    };
    CustomerRules::new(registration, ordering)
}

fn sample_customer() -> Customer {
    Customer::create_new_customer("ALFKI", "Alfreds Futterkiste", "Maria Anders").unwrap()
}

fn priced_order(id: &str, cents: i64) -> Order {
    Order::new(
        OrderId::from(id),
        vec![OrderLine::new("item", Money::new(cents, 2), 1)],
    )
}

#[test]
fn test_create_new_customer_with_valid_arguments() {
    for (id, company, contact) in [
        ("ALFKI", "Alfreds Futterkiste", "Maria Anders"),
        ("x", "y", "z"),
        (" BONAP ", "Bon app'", "Laurence Lebihan"),
    ] {
        let customer = Customer::create_new_customer(id, company, contact).unwrap();
        assert_eq!(customer.id().as_str(), id);
        assert_eq!(customer.name(), company);
        assert_eq!(customer.contact_info().contact_name(), contact);
        assert!(customer.orders().is_empty());
    }
}

#[test]
fn test_create_new_customer_rejects_blank_arguments() {
    let cases = [
        (("", "Company", "Contact"), "id"),
        (("   ", "Company", "Contact"), "id"),
        (("ID", "", "Contact"), "company_name"),
        (("ID", "\t\n", "Contact"), "company_name"),
        (("ID", "Company", ""), "contact_name"),
        (("ID", "Company", "  "), "contact_name"),
    ];

    for ((id, company, contact), parameter) in cases {
        let err = Customer::create_new_customer(id, company, contact).unwrap_err();
        assert_eq!(err, DomainError::empty_value(parameter));
        assert!(err.is_argument_error());
        assert!(err.to_string().contains(parameter));
    }
}

#[test]
fn test_total_income_without_orders_is_zero() {
    assert_eq!(sample_customer().total_income(&FirstLinePricing), Money::ZERO);
}

#[test]
fn test_total_income_uses_exact_decimal_arithmetic() {
    let mut customer = sample_customer();
    customer.add_order(priced_order("10643", 1000));
    customer.add_order(priced_order("10692", 550));
    customer.add_order(priced_order("10702", 225));

    let total = customer.total_income(&FirstLinePricing);
    assert_eq!(total, Money::new(1775, 2));
    assert_eq!(total.to_string(), "17.75");
}

#[test]
fn test_total_income_has_no_binary_float_drift() {
    let mut customer = sample_customer();
    for i in 0..10 {
        customer.add_order(priced_order(&i.to_string(), 10));
    }
    // 0.1 added ten times
    assert_eq!(customer.total_income(&FirstLinePricing), Money::ONE);
}

#[test]
fn test_is_valid_for_registration_mirrors_rule_set() {
    let customer = sample_customer();
    assert!(customer.is_valid_for_registration(&rules(true, true)).unwrap());
    assert!(!customer.is_valid_for_registration(&rules(false, true)).unwrap());
}

#[test]
fn test_validate_for_registration_returns_violations() {
    let customer = sample_customer();

    let result = customer.validate_for_registration(&rules(false, true)).unwrap();
    assert!(!result.is_valid());
    assert_eq!(result.violations()[0].rule, IS_VALID_FOR_REGISTRATION);

    let result = customer.validate_for_registration(&rules(true, false)).unwrap();
    assert!(result.is_valid());
    assert!(result.violations().is_empty());
}

#[test]
fn test_can_make_orders_is_a_conjunction() {
    let customer = sample_customer();
    assert!(customer.can_make_orders(&rules(true, true)).unwrap());
    assert!(!customer.can_make_orders(&rules(false, true)).unwrap());
    assert!(!customer.can_make_orders(&rules(true, false)).unwrap());
    assert!(!customer.can_make_orders(&rules(false, false)).unwrap());
}

#[test]
fn test_rule_set_failures_propagate() {
    let customer = sample_customer();
    let broken = CustomerRules::new(Arc::new(BrokenRuleSet), StubRuleSet::passing(CAN_MAKE_ORDERS));

    assert_eq!(
        customer.is_valid_for_registration(&broken).unwrap_err(),
        DomainError::unknown_rule_set("Broken")
    );
    assert!(customer.can_make_orders(&broken).is_err());

    let broken = CustomerRules::new(StubRuleSet::passing(IS_VALID_FOR_REGISTRATION), Arc::new(BrokenRuleSet));
    assert!(customer.can_make_orders(&broken).is_err());
    assert!(customer.is_valid_for_registration(&broken).unwrap());
}

#[test]
fn test_display_is_company_name() {
    let mut customer = sample_customer();
    assert_eq!(customer.to_string(), "Alfreds Futterkiste");

    customer.set_phone_number(Some("030-0074321".to_string()));
    customer.set_fax_number(Some("030-0076545".to_string()));
    customer.set_contact_info(ContactInfo::new("Someone Else").with_title("Owner"));
    customer.add_order(priced_order("10643", 4560));

    assert_eq!(format!("{customer}"), "Alfreds Futterkiste");
}

#[test]
fn test_mutators_update_fields() {
    let mut customer = sample_customer();

    customer.set_phone_number(Some("030-0074321".to_string()));
    customer.set_fax_number(Some("030-0076545".to_string()));
    assert_eq!(customer.phone_number(), Some("030-0074321"));
    assert_eq!(customer.fax_number(), Some("030-0076545"));

    customer.set_fax_number(None);
    assert_eq!(customer.fax_number(), None);

    customer.set_contact_info(ContactInfo::new("Ana Trujillo").with_title("Owner"));
    assert_eq!(customer.contact_info().contact_name(), "Ana Trujillo");
    assert_eq!(customer.contact_info().contact_title(), Some("Owner"));
}

#[test]
fn test_orders_are_exposed_in_insertion_order() {
    let mut customer = sample_customer();
    customer.add_order(priced_order("10643", 100));
    customer.add_order(priced_order("10692", 200));

    let ids: Vec<&str> = customer.orders().iter().map(|o| o.id().as_str()).collect();
    assert_eq!(ids, vec!["10643", "10692"]);
}

#[test]
fn test_total_income_saturates_instead_of_overflowing() {
    let mut customer = sample_customer();
    for id in ["10643", "10692"] {
        customer.add_order(Order::new(
            OrderId::from(id),
            vec![OrderLine::new("item", Money::MAX, 1)],
        ));
    }
    assert_eq!(customer.total_income(&FirstLinePricing), Money::MAX);
}
