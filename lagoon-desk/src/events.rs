//! Event payment and status actions
//!
//! The buttons an event row offers follow from its status and payment
//! status. Applying an action sends the matching update and hands back the
//! server's record.

use lagoon_client::api::events;
use lagoon_client::HttpClient;
use shared::error::ErrorCode;
use shared::models::{Event, EventPaymentUpdate, EventStatusUpdate};
use shared::money::format_currency;
use shared::status::{EventPaymentStatus, EventStatus};

use crate::core::{DeskError, DeskResult, Notifier};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventAction {
    RecordDeposit { amount: f64 },
    MarkFullyPaid,
    Confirm,
    Cancel,
}

/// Action kinds without payloads, for rendering buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    RecordDeposit,
    MarkFullyPaid,
    Confirm,
    Cancel,
}

impl EventAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::RecordDeposit { .. } => ActionKind::RecordDeposit,
            Self::MarkFullyPaid => ActionKind::MarkFullyPaid,
            Self::Confirm => ActionKind::Confirm,
            Self::Cancel => ActionKind::Cancel,
        }
    }
}

pub fn available_actions(event: &Event) -> Vec<ActionKind> {
    if event.status == EventStatus::Cancelled {
        return Vec::new();
    }
    let mut actions = match event.payment_status {
        EventPaymentStatus::Unpaid => vec![ActionKind::RecordDeposit, ActionKind::MarkFullyPaid],
        EventPaymentStatus::DepositPaid => vec![ActionKind::MarkFullyPaid],
        EventPaymentStatus::FullyPaid => Vec::new(),
    };
    if event.status == EventStatus::Pending {
        actions.extend([ActionKind::Confirm, ActionKind::Cancel]);
    }
    actions
}

fn check(event: &Event, action: &EventAction) -> DeskResult<()> {
    if !available_actions(event).contains(&action.kind()) {
        return Err(DeskError::rule(
            ErrorCode::PaymentInvalidTransition,
            format!("{:?} is not available for this event", action.kind()),
        ));
    }
    if let EventAction::RecordDeposit { amount } = *action {
        if amount <= 0.0 || !amount.is_finite() {
            return Err(DeskError::rule(
                ErrorCode::ValueOutOfRange,
                "Deposit must be greater than 0",
            ));
        }
        if amount > event.total_amount {
            return Err(DeskError::rule(
                ErrorCode::PaymentDepositExceedsTotal,
                format!(
                    "Deposit cannot exceed the total of {}",
                    format_currency(event.total_amount)
                ),
            ));
        }
    }
    Ok(())
}

pub async fn apply<C>(
    client: &C,
    notifier: &dyn Notifier,
    event: &Event,
    action: EventAction,
) -> DeskResult<Event>
where
    C: HttpClient + ?Sized,
{
    if let Err(e) = check(event, &action) {
        notifier.error(&e.to_string());
        return Err(e);
    }
    let result = match action {
        EventAction::RecordDeposit { amount } => {
            let update = EventPaymentUpdate {
                payment_status: EventPaymentStatus::DepositPaid,
                deposit_amount: Some(amount),
            };
            events::update_payment(client, event.id, &update).await
        }
        EventAction::MarkFullyPaid => {
            let update = EventPaymentUpdate {
                payment_status: EventPaymentStatus::FullyPaid,
                deposit_amount: None,
            };
            events::update_payment(client, event.id, &update).await
        }
        EventAction::Confirm | EventAction::Cancel => {
            let status = if action == EventAction::Confirm {
                EventStatus::Confirmed
            } else {
                EventStatus::Cancelled
            };
            events::update_status(client, event.id, &EventStatusUpdate { status }).await
        }
    };
    match result {
        Ok(updated) => {
            tracing::info!(id = event.id, action = ?action.kind(), "event updated");
            notifier.success("Event updated successfully");
            Ok(updated)
        }
        Err(e) => {
            tracing::error!(id = event.id, action = ?action.kind(), error = %e, "event update failed");
            notifier.error("Failed to update event. Please try again.");
            Err(e.into())
        }
    }
}
