//! Order pricing from line items

use crate::domain::entities::Order;
use crate::domain::services::OrderPricing;
use crate::domain::value_objects::{Money, OrderLine};

/// Prices an order as `unit_price * quantity * (1 - discount)` summed over its lines.
/// Amounts saturate at `Money::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineItemPricing;

impl LineItemPricing {
    pub fn new() -> Self {
        Self
    }

    pub fn line_amount(line: &OrderLine) -> Money {
        line.unit_price()
            .saturating_mul(Money::from(line.quantity()))
            .saturating_mul(Money::ONE - line.discount())
    }
}

impl OrderPricing for LineItemPricing {
    fn price(&self, order: &Order) -> Money {
        order
            .lines()
            .iter()
            .map(Self::line_amount)
            .fold(Money::ZERO, Money::saturating_add)
    }
}
