//! Event booking form

use shared::error::FieldErrors;
use shared::models::Event;
use shared::status::{EventPaymentStatus, EventStatus, StatusLookup};
use shared::util::parse_time;
use shared::validation::{
    check_non_negative, check_positive, optional_number, require_date, require_number,
    require_text, MAX_NAME_LEN,
};

use super::{format_number, opt_number, opt_text, FieldDef, FieldKind, FormSpec, FormValues, ModalMode};

const STATUSES: &[&str] = &["pending", "confirmed", "cancelled"];
const PAYMENT_STATUSES: &[&str] = &["unpaid", "deposit_paid", "fully_paid"];

static FIELDS: &[FieldDef] = &[
    FieldDef::required("eventType", "Event type", FieldKind::Text),
    FieldDef::required("clientName", "Client name", FieldKind::Text),
    FieldDef::required("date", "Date", FieldKind::Date),
    FieldDef::optional("time", "Time", FieldKind::Time),
    FieldDef::required("venue", "Venue", FieldKind::Text),
    FieldDef::required("guestCount", "Guest count", FieldKind::Number),
    FieldDef::optional("totalAmount", "Total amount", FieldKind::Number),
    FieldDef::optional("depositAmount", "Deposit", FieldKind::Number),
    FieldDef::optional("status", "Status", FieldKind::Select(STATUSES)),
    FieldDef::optional("paymentStatus", "Payment status", FieldKind::Select(PAYMENT_STATUSES)),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct EventForm;

impl FormSpec for EventForm {
    type Record = Event;

    fn fields(&self) -> &'static [FieldDef] {
        FIELDS
    }

    fn defaults(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("status", EventStatus::Pending.as_wire());
        values.set("paymentStatus", EventPaymentStatus::Unpaid.as_wire());
        values
    }

    fn values_from(&self, event: &Event) -> FormValues {
        let mut values = FormValues::new();
        values.set("eventType", event.event_type.as_str());
        values.set("clientName", event.client_name.as_str());
        values.set("date", event.date.as_str());
        values.set("time", opt_text(event.time.as_deref()));
        values.set("venue", event.venue.as_str());
        values.set("guestCount", event.guest_count.to_string());
        values.set("totalAmount", format_number(event.total_amount));
        values.set("depositAmount", opt_number(event.deposit_amount));
        values.set("status", event.status.as_wire());
        values.set("paymentStatus", event.payment_status.as_wire());
        values
    }

    fn validate(&self, values: &FormValues, _mode: ModalMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "eventType", "Event type", values.text("eventType"), MAX_NAME_LEN);
        require_text(&mut errors, "clientName", "Client name", values.text("clientName"), MAX_NAME_LEN);
        require_date(&mut errors, "date", "Date", values.text("date"));
        let time = values.text("time");
        if !time.is_empty() && parse_time(time).is_none() {
            errors.add("time", "Time is not a valid time");
        }
        require_text(&mut errors, "venue", "Venue", values.text("venue"), MAX_NAME_LEN);
        if let Some(guests) = require_number(&mut errors, "guestCount", "Guest count", values.text("guestCount")) {
            check_positive(&mut errors, "guestCount", "Guest count", guests);
        }

        let total = optional_number(&mut errors, "totalAmount", "Total amount", values.text("totalAmount"));
        if let Some(total) = total {
            check_non_negative(&mut errors, "totalAmount", "Total amount", total);
        }
        if let Some(deposit) =
            optional_number(&mut errors, "depositAmount", "Deposit", values.text("depositAmount"))
        {
            check_non_negative(&mut errors, "depositAmount", "Deposit", deposit);
            if total.is_some_and(|t| deposit > t) {
                errors.add("depositAmount", "Deposit cannot exceed the total amount");
            }
        }

        if EventStatus::from_wire(values.text("status")).is_none() && !values.text("status").is_empty() {
            errors.add("status", "Unknown event status");
        }
        if EventPaymentStatus::from_wire(values.text("paymentStatus")).is_none()
            && !values.text("paymentStatus").is_empty()
        {
            errors.add("paymentStatus", "Unknown payment status");
        }
        errors
    }
}
