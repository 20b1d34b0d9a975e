//! Room form (admin)
//!
//! Images go up as `images[]` parts; amenities as `amenities[]` or a JSON
//! array depending on the body.

use lagoon_client::api::rooms::ADMIN_COLLECTION;
use shared::error::FieldErrors;
use shared::models::Room;
use shared::status::{RoomStatus, StatusLookup};
use shared::validation::{
    check_positive, check_range, optional_text, require_number, require_text, MAX_NAME_LEN,
    MAX_NOTE_LEN,
};

use super::{format_number, opt_text, FieldDef, FieldKind, FormSpec, FormValues, ModalMode};

const STATUSES: &[&str] = &["available", "occupied", "maintenance", "reserved"];

/// Largest party a single room takes
pub const MAX_CAPACITY: f64 = 20.0;

static FIELDS: &[FieldDef] = &[
    FieldDef::required("roomNumber", "Room number", FieldKind::Text),
    FieldDef::required("roomType", "Room type", FieldKind::Text),
    FieldDef::required("price", "Price", FieldKind::Number),
    FieldDef::required("capacity", "Capacity", FieldKind::Number),
    FieldDef::optional("amenities", "Amenities", FieldKind::List),
    FieldDef::optional("description", "Description", FieldKind::Text),
    FieldDef::optional("status", "Status", FieldKind::Select(STATUSES)),
    FieldDef::optional("images", "Images", FieldKind::Files),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RoomForm;

impl FormSpec for RoomForm {
    type Record = Room;

    fn fields(&self) -> &'static [FieldDef] {
        FIELDS
    }

    fn defaults(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("status", RoomStatus::Available.as_wire());
        values.set("capacity", "2");
        values
    }

    fn values_from(&self, room: &Room) -> FormValues {
        let mut values = FormValues::new();
        values.set("roomNumber", room.room_number.as_str());
        values.set("roomType", room.room_type.as_str());
        values.set("price", format_number(room.price));
        values.set("capacity", room.capacity.to_string());
        values.set("amenities", room.amenities.as_slice().join(", "));
        values.set("description", opt_text(room.description.as_deref()));
        values.set("status", room.status.as_wire());
        values
    }

    fn validate(&self, values: &FormValues, _mode: ModalMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "roomNumber", "Room number", values.text("roomNumber"), MAX_NAME_LEN);
        require_text(&mut errors, "roomType", "Room type", values.text("roomType"), MAX_NAME_LEN);
        if let Some(price) = require_number(&mut errors, "price", "Price", values.text("price")) {
            check_positive(&mut errors, "price", "Price", price);
        }
        if let Some(capacity) = require_number(&mut errors, "capacity", "Capacity", values.text("capacity")) {
            if capacity.fract() != 0.0 {
                errors.add("capacity", "Capacity must be a whole number");
            }
            check_range(&mut errors, "capacity", "Capacity", capacity, 1.0, MAX_CAPACITY);
        }
        let status = values.text("status");
        if !status.is_empty() && RoomStatus::from_wire(status).is_none() {
            errors.add("status", "Unknown room status");
        }
        optional_text(&mut errors, "description", "Description", values.text("description"), MAX_NOTE_LEN);
        errors
    }

    fn create_path(&self) -> String {
        ADMIN_COLLECTION.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lagoon_client::{Payload, Upload};
    use shared::models::{Amenities, RoomImages};

    fn room() -> Room {
        Room {
            id: 7,
            room_number: "201".into(),
            room_type: "Deluxe".into(),
            price: 3800.0,
            capacity: 3,
            amenities: Amenities::new(["WiFi", "TV"]),
            images: RoomImages::default(),
            description: None,
            status: RoomStatus::Available,
        }
    }

    #[test]
    fn test_capacity_and_price() {
        let mut values = RoomForm.values_from(&room());
        assert!(RoomForm.validate(&values, ModalMode::Update { id: 7 }).is_empty());

        values.set("capacity", "0");
        values.set("price", "0");
        let errors = RoomForm.validate(&values, ModalMode::Update { id: 7 });
        assert!(errors.contains("capacity"));
        assert_eq!(errors.get("price"), Some("Price must be greater than 0"));
    }

    #[test]
    fn test_admin_paths() {
        assert_eq!(RoomForm.create_path(), "/api/superadmin/rooms");
        assert_eq!(RoomForm.update_path(7), "/api/superadmin/rooms/7");
    }

    #[test]
    fn test_amenities_as_array() {
        let values = RoomForm.values_from(&room());
        match RoomForm.payload(&values, ModalMode::Update { id: 7 }) {
            Payload::Json(body) => {
                assert_eq!(body["amenities"], serde_json::json!(["WiFi", "TV"]));
                assert_eq!(body["capacity"], 3);
            }
            other => panic!("expected json, got {other:?}"),
        }
    }

    #[test]
    fn test_images_as_parts() {
        let mut values = RoomForm.values_from(&room());
        values.push_file("images", Upload::new("images", "a.jpg", "image/jpeg", vec![1]));
        values.push_file("images", Upload::new("images", "b.jpg", "image/jpeg", vec![2]));
        match RoomForm.payload(&values, ModalMode::Create) {
            Payload::Multipart(body) => {
                assert_eq!(body.files.len(), 2);
                assert!(body.files.iter().all(|f| f.field == "images[]"));
                let amenities: Vec<_> = body
                    .fields
                    .iter()
                    .filter(|(k, _)| k == "amenities[]")
                    .map(|(_, v)| v.as_str())
                    .collect();
                assert_eq!(amenities, ["WiFi", "TV"]);
            }
            other => panic!("expected multipart, got {other:?}"),
        }
    }
}
