//! Domain value objects - Immutable objects that describe aspects of the domain

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Monetary amount. Always exact decimal, never binary floating point.
pub type Money = Decimal;

/// Macro to implement common traits for string wrapper types
macro_rules! impl_string_wrapper {
    ($type:ident) => {
        impl From<String> for $type {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $type {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Unique identifier for a customer
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_string_wrapper!(CustomerId);

/// Unique identifier for an order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_string_wrapper!(OrderId);

/// Contact person of an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    contact_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact_title: Option<String>,
}

impl ContactInfo {
    pub fn new(contact_name: impl Into<String>) -> Self {
        Self {
            contact_name: contact_name.into(),
            contact_title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.contact_title = Some(title.into());
        self
    }

    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    pub fn contact_title(&self) -> Option<&str> {
        self.contact_title.as_deref()
    }
}

/// A single product line on an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    product_name: String,
    unit_price: Money,
    quantity: u32,
    /// Fraction in `[0, 1]` taken off the line amount
    #[serde(default, deserialize_with = "deserialize_discount")]
    discount: Money,
}

/// Stored discounts outside `[0, 1]` are rejected rather than clamped
fn deserialize_discount<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    let discount = <Money as Deserialize>::deserialize(deserializer)?;
    if discount < Money::ZERO || discount > Money::ONE {
        return Err(serde::de::Error::custom(format!(
            "discount {discount} is outside [0, 1]"
        )));
    }
    Ok(discount)
}

impl OrderLine {
    pub fn new(product_name: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        Self {
            product_name: product_name.into(),
            unit_price,
            quantity,
            discount: Money::ZERO,
        }
    }

    /// Set the discount, clamped into `[0, 1]`
    pub fn with_discount(mut self, discount: Money) -> Self {
        self.discount = discount.clamp(Money::ZERO, Money::ONE);
        self
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn discount(&self) -> Money {
        self.discount
    }
}
