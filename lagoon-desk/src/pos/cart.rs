//! POS cart
//!
//! Lines merge by menu item id. Totals are recomputed from the lines on every
//! read, so there is no cached total to drift.

use serde::{Deserialize, Serialize};
use shared::error::ErrorCode;
use shared::models::{MenuItem, OrderItem};
use shared::money::SeniorRule;

use crate::core::{DeskError, DeskResult};

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(menu_item_id: i64, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            menu_item_id,
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        OrderItem {
            menu_item_id: line.menu_item_id,
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.price,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    is_senior_citizen: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, menu_item_id: i64) -> u32 {
        self.lines
            .iter()
            .find(|l| l.menu_item_id == menu_item_id)
            .map_or(0, |l| l.quantity)
    }

    /// One more unit of a menu item
    pub fn add(&mut self, item: &MenuItem) -> DeskResult<()> {
        if !item.available {
            return Err(DeskError::rule(
                ErrorCode::InvalidRequest,
                format!("{} is not available", item.name),
            ));
        }
        self.add_line(CartLine::new(item.id, item.name.as_str(), item.price, 1))
    }

    /// Merge a line in; an existing line for the same item grows by its quantity.
    /// A merge that would overflow leaves the cart unchanged.
    pub fn add_line(&mut self, line: CartLine) -> DeskResult<()> {
        if line.quantity == 0 {
            return Ok(());
        }
        match self
            .lines
            .iter_mut()
            .find(|l| l.menu_item_id == line.menu_item_id)
        {
            Some(existing) => {
                let Some(quantity) = existing.quantity.checked_add(line.quantity) else {
                    return Err(DeskError::rule(
                        ErrorCode::ValueOutOfRange,
                        format!("Too many of {} in the cart", existing.name),
                    ));
                };
                existing.quantity = quantity;
            }
            None => self.lines.push(line),
        }
        Ok(())
    }

    /// One unit fewer; the line goes away at zero. Returns whether the item
    /// was in the cart.
    pub fn remove(&mut self, menu_item_id: i64) -> bool {
        let Some(idx) = self
            .lines
            .iter()
            .position(|l| l.menu_item_id == menu_item_id)
        else {
            return false;
        };
        self.lines[idx].quantity = self.lines[idx].quantity.saturating_sub(1);
        if self.lines[idx].quantity == 0 {
            self.lines.remove(idx);
        }
        true
    }

    pub fn set_senior(&mut self, is_senior_citizen: bool) {
        self.is_senior_citizen = is_senior_citizen;
    }

    pub fn is_senior(&self) -> bool {
        self.is_senior_citizen
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn discount(&self, rule: SeniorRule) -> f64 {
        rule.discount(self.subtotal(), self.is_senior_citizen)
    }

    pub fn total(&self, rule: SeniorRule) -> f64 {
        self.subtotal() - self.discount(rule)
    }

    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lines.iter().map(OrderItem::from).collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.is_senior_citizen = false;
    }
}
