//! Restaurant point of sale
//!
//! - [`Cart`]: lines, senior flag and totals
//! - [`PosTerminal`]: cart plus who the order is for; places the order
//! - [`OrderAdjustment`]: senior toggle and status change on an existing order
//!
//! Checkout uses [`SeniorRule::PointOfSale`] and adjustments use
//! [`SeniorRule::OrderUpdate`].

mod cart;

pub use cart::{Cart, CartLine};

use lagoon_client::api::orders;
use lagoon_client::HttpClient;
use shared::error::ErrorCode;
use shared::models::{Order, OrderCreate, OrderUpdate};
use shared::money::{format_currency, SeniorRule};
use shared::status::{OrderStatus, PaymentStatus, StatusLookup};

use crate::core::{DeskError, DeskResult, Notifier};

/// Where a POS order goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Room(String),
    Table(String),
}

#[derive(Debug, Default)]
pub struct PosTerminal {
    cart: Cart,
    customer_name: Option<String>,
    destination: Option<Destination>,
}

impl PosTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn set_customer(&mut self, name: impl Into<String>) {
        let name = name.into();
        let name = name.trim();
        self.customer_name = (!name.is_empty()).then(|| name.to_string());
    }

    pub fn set_destination(&mut self, destination: Option<Destination>) {
        self.destination = destination.filter(|d| match d {
            Destination::Room(r) | Destination::Table(r) => !r.trim().is_empty(),
        });
    }

    /// Subtotal, discount and total under the checkout rule
    pub fn summary(&self) -> (f64, f64, f64) {
        let rule = SeniorRule::PointOfSale;
        (
            self.cart.subtotal(),
            self.cart.discount(rule),
            self.cart.total(rule),
        )
    }

    /// Order body for the current cart
    pub fn build_order(&self) -> DeskResult<OrderCreate> {
        if self.cart.is_empty() {
            return Err(DeskError::rule(ErrorCode::OrderEmpty, "Add at least one item"));
        }
        if self.customer_name.is_none() && self.destination.is_none() {
            return Err(DeskError::rule(
                ErrorCode::OrderMissingDestination,
                "Enter a customer name, room or table",
            ));
        }
        let (subtotal, discount, total) = self.summary();
        let (room_number, table_number) = match &self.destination {
            Some(Destination::Room(r)) => (Some(r.trim().to_string()), None),
            Some(Destination::Table(t)) => (None, Some(t.trim().to_string())),
            None => (None, None),
        };
        Ok(OrderCreate {
            customer_name: self.customer_name.clone(),
            room_number,
            table_number,
            items: self.cart.order_items(),
            subtotal,
            discount,
            total,
            is_senior_citizen: self.cart.is_senior(),
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
        })
    }

    /// Place the order. The cart and customer are cleared only on success.
    pub async fn checkout<C>(&mut self, client: &C, notifier: &dyn Notifier) -> DeskResult<Order>
    where
        C: HttpClient + ?Sized,
    {
        let order = match self.build_order() {
            Ok(order) => order,
            Err(e) => {
                tracing::debug!(error = %e, "checkout rejected locally");
                notifier.error(&e.to_string());
                return Err(e);
            }
        };
        match orders::place(client, &order).await {
            Ok(placed) => {
                tracing::info!(
                    id = placed.id,
                    total = placed.total,
                    senior = order.is_senior_citizen,
                    "order placed"
                );
                notifier.success(&format!(
                    "Order placed successfully ({})",
                    format_currency(placed.total)
                ));
                self.cart.clear();
                self.customer_name = None;
                self.destination = None;
                Ok(placed)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to place order");
                notifier.error("Failed to place order. Please try again.");
                Err(e.into())
            }
        }
    }
}

/// Edits to an existing order from the orders page
#[derive(Debug, Clone)]
pub struct OrderAdjustment {
    order: Order,
    is_senior_citizen: bool,
    status: Option<OrderStatus>,
}

impl OrderAdjustment {
    pub fn new(order: Order) -> Self {
        let is_senior_citizen = order.is_senior_citizen;
        Self {
            order,
            is_senior_citizen,
            status: None,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Lines are authoritative when present; otherwise the stored subtotal
    pub fn subtotal(&self) -> f64 {
        if self.order.items.is_empty() {
            self.order.subtotal
        } else {
            self.order
                .items
                .iter()
                .map(|i| i.price * f64::from(i.quantity))
                .sum()
        }
    }

    pub fn set_senior(&mut self, is_senior_citizen: bool) {
        self.is_senior_citizen = is_senior_citizen;
    }

    pub fn discount(&self) -> f64 {
        SeniorRule::OrderUpdate.discount(self.subtotal(), self.is_senior_citizen)
    }

    pub fn total(&self) -> f64 {
        self.subtotal() - self.discount()
    }

    pub fn set_status(&mut self, next: OrderStatus) -> DeskResult<()> {
        ensure_transition(self.order.status, next)?;
        self.status = Some(next);
        Ok(())
    }

    pub fn changes(&self) -> OrderUpdate {
        let senior_changed = self.is_senior_citizen != self.order.is_senior_citizen;
        OrderUpdate {
            status: self.status,
            is_senior_citizen: senior_changed.then_some(self.is_senior_citizen),
            discount: senior_changed.then(|| self.discount()),
            total: senior_changed.then(|| self.total()),
        }
    }

    pub fn has_changes(&self) -> bool {
        self.changes() != OrderUpdate {
            status: None,
            is_senior_citizen: None,
            discount: None,
            total: None,
        }
    }

    /// Send the update; returns the server's copy of the order
    pub async fn submit<C>(&mut self, client: &C, notifier: &dyn Notifier) -> DeskResult<Order>
    where
        C: HttpClient + ?Sized,
    {
        if !self.has_changes() {
            notifier.info("Nothing to update");
            return Ok(self.order.clone());
        }
        let changes = self.changes();
        match orders::update(client, self.order.id, &changes).await {
            Ok(updated) => {
                tracing::info!(id = updated.id, ?changes, "order updated");
                notifier.success("Order updated successfully");
                *self = Self::new(updated.clone());
                Ok(updated)
            }
            Err(e) => {
                tracing::error!(id = self.order.id, error = %e, "failed to update order");
                notifier.error("Failed to update order. Please try again.");
                Err(e.into())
            }
        }
    }
}

fn ensure_transition(current: OrderStatus, next: OrderStatus) -> DeskResult<()> {
    if current.can_transition_to(next) {
        Ok(())
    } else {
        Err(DeskError::rule(
            ErrorCode::OrderInvalidTransition,
            format!(
                "Cannot move an order from {} to {}",
                current.as_wire(),
                next.as_wire()
            ),
        ))
    }
}

/// Status button on the orders page
pub async fn change_status<C>(
    client: &C,
    notifier: &dyn Notifier,
    order: &Order,
    next: OrderStatus,
) -> DeskResult<Order>
where
    C: HttpClient + ?Sized,
{
    if let Err(e) = ensure_transition(order.status, next) {
        notifier.error(&e.to_string());
        return Err(e);
    }
    match orders::update_status(client, order.id, next).await {
        Ok(updated) => {
            tracing::info!(id = order.id, status = next.as_wire(), "order status changed");
            notifier.success(&format!("Order marked as {}", next.info().label));
            Ok(updated)
        }
        Err(e) => {
            tracing::error!(id = order.id, error = %e, "failed to change order status");
            notifier.error("Failed to update order status");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderItem;

    fn order(status: OrderStatus) -> Order {
        Order {
            id: 30,
            customer_name: Some("Lola Nena".into()),
            room_number: None,
            table_number: Some("5".into()),
            items: vec![
                OrderItem { menu_item_id: 1, name: "Sinigang".into(), quantity: 2, price: 100.0 },
                OrderItem { menu_item_id: 2, name: "Iced tea".into(), quantity: 1, price: 50.0 },
            ],
            subtotal: 250.0,
            discount: 0.0,
            total: 250.0,
            is_senior_citizen: false,
            status,
            payment_status: PaymentStatus::Unpaid,
            created_at: None,
        }
    }

    #[test]
    fn test_build_order_needs_items_and_destination() {
        let mut pos = PosTerminal::new();
        let err = pos.build_order().unwrap_err();
        assert_eq!(err.code(), ErrorCode::OrderEmpty);

        pos.cart_mut().add_line(CartLine::new(1, "Sinigang", 100.0, 2)).unwrap();
        let err = pos.build_order().unwrap_err();
        assert_eq!(err.code(), ErrorCode::OrderMissingDestination);

        pos.set_destination(Some(Destination::Room("  ".into())));
        assert!(pos.build_order().is_err());

        pos.set_destination(Some(Destination::Table("5".into())));
        pos.cart_mut().set_senior(true);
        let order = pos.build_order().unwrap();
        assert_eq!(order.table_number.as_deref(), Some("5"));
        assert_eq!(order.subtotal, 200.0);
        assert_eq!(order.discount, 40.0);
        assert_eq!(order.total, 160.0);
    }

    #[test]
    fn test_adjustment_uses_ten_percent() {
        let mut adj = OrderAdjustment::new(order(OrderStatus::Pending));
        assert!(!adj.has_changes());
        adj.set_senior(true);
        assert_eq!(adj.discount(), 25.0);
        assert_eq!(adj.total(), 225.0);

        let changes = adj.changes();
        assert_eq!(changes.is_senior_citizen, Some(true));
        assert_eq!(changes.discount, Some(25.0));
        assert_eq!(changes.status, None);
    }

    #[test]
    fn test_status_transitions() {
        let mut adj = OrderAdjustment::new(order(OrderStatus::Pending));
        assert!(adj.set_status(OrderStatus::Processing).is_ok());
        assert!(adj.set_status(OrderStatus::Cancelled).is_ok());
        let err = adj.set_status(OrderStatus::Completed).unwrap_err();
        assert_eq!(err.code(), ErrorCode::OrderInvalidTransition);

        let done = OrderAdjustment::new(order(OrderStatus::Completed));
        assert!(ensure_transition(done.order().status, OrderStatus::Cancelled).is_err());
        assert!(ensure_transition(OrderStatus::Processing, OrderStatus::Completed).is_ok());
    }
}
