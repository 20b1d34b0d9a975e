//! Guest-facing booking form
//!
//! Posts to the client booking endpoint rather than the admin collection.

use lagoon_client::api::bookings::CLIENT_ENDPOINT;
use shared::error::FieldErrors;
use shared::models::Booking;
use shared::validation::{
    check_date_order, check_positive, optional_number, optional_text, require_date, require_email,
    require_text, MAX_NAME_LEN, MAX_NOTE_LEN,
};

use super::{opt_text, FieldDef, FieldKind, FormSpec, FormValues, ModalMode};

static FIELDS: &[FieldDef] = &[
    FieldDef::optional("roomType", "Room type", FieldKind::Text),
    FieldDef::optional("roomNumber", "Room", FieldKind::Text),
    FieldDef::required("checkIn", "Check-in", FieldKind::Date),
    FieldDef::required("checkOut", "Check-out", FieldKind::Date),
    FieldDef::optional("guests", "Guests", FieldKind::Number),
    FieldDef::required("guestName", "Guest name", FieldKind::Text),
    FieldDef::required("email", "Email", FieldKind::Email),
    FieldDef::required("phone", "Phone", FieldKind::Text),
    FieldDef::optional("specialRequests", "Special requests", FieldKind::Text),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ClientBookingForm;

impl FormSpec for ClientBookingForm {
    type Record = Booking;

    fn fields(&self) -> &'static [FieldDef] {
        FIELDS
    }

    fn defaults(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("guests", "1");
        values
    }

    fn values_from(&self, b: &Booking) -> FormValues {
        let mut values = FormValues::new();
        values.set("roomType", opt_text(b.room_type.as_deref()));
        values.set("roomNumber", opt_text(b.room_number.as_deref()));
        values.set("checkIn", opt_text(b.check_in.as_deref()));
        values.set("checkOut", opt_text(b.check_out.as_deref()));
        values.set("guests", b.guests.to_string());
        values.set("guestName", opt_text(b.guest_name.as_deref()));
        values.set("email", opt_text(b.email.as_deref()));
        values.set("phone", opt_text(b.phone.as_deref()));
        values
    }

    fn validate(&self, values: &FormValues, _mode: ModalMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let check_in = require_date(&mut errors, "checkIn", "Check-in", values.text("checkIn"));
        let check_out = require_date(&mut errors, "checkOut", "Check-out", values.text("checkOut"));
        check_date_order(
            &mut errors,
            "checkOut",
            check_in,
            check_out,
            "Check-out must be after check-in",
        );
        if let Some(guests) = optional_number(&mut errors, "guests", "Guests", values.text("guests")) {
            check_positive(&mut errors, "guests", "Guests", guests);
        }
        require_text(&mut errors, "guestName", "Guest name", values.text("guestName"), MAX_NAME_LEN);
        require_email(&mut errors, "email", "Email", values.text("email"));
        require_text(&mut errors, "phone", "Phone", values.text("phone"), MAX_NAME_LEN);
        optional_text(
            &mut errors,
            "specialRequests",
            "Special requests",
            values.text("specialRequests"),
            MAX_NOTE_LEN,
        );
        errors
    }

    fn create_path(&self) -> String {
        CLIENT_ENDPOINT.collection.to_string()
    }

    fn update_path(&self, id: i64) -> String {
        CLIENT_ENDPOINT.item(id)
    }
}
