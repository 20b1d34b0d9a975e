//! Demo rows for pages whose fetch failed
//!
//! Only shown with the sample fallback switched on, and always marked
//! [`DataSource::Sample`](super::DataSource::Sample). Ids are negative so
//! they can never collide with, or be sent as, a real record id.

use shared::models::{
    AttendanceRecord, Booking, Department, PurchaseOrder, PurchaseOrderItem, Room, RoomImages,
    Amenities, items_total,
};
use shared::status::{AttendanceStatus, RoomStatus};

pub fn rooms() -> Vec<Room> {
    let room = |id: i64, number: &str, kind: &str, price: f64, capacity: u32, status| Room {
        id,
        room_number: number.to_string(),
        room_type: kind.to_string(),
        price,
        capacity,
        amenities: Amenities::new(["WiFi", "Air Conditioning", "TV"]),
        images: RoomImages::default(),
        description: None,
        status,
    };
    vec![
        room(-1, "101", "Standard", 2500.0, 2, RoomStatus::Available),
        room(-2, "102", "Standard", 2500.0, 2, RoomStatus::Occupied),
        room(-3, "201", "Deluxe", 3800.0, 3, RoomStatus::Available),
        room(-4, "301", "Family Suite", 6500.0, 6, RoomStatus::Maintenance),
    ]
}

pub fn bookings() -> Vec<Booking> {
    let booking = |id: i64, guest: &str, room: &str, check_in: &str, check_out: &str, status: &str, total: f64| Booking {
        id,
        room_number: Some(room.to_string()),
        room_type: None,
        guest_name: Some(guest.to_string()),
        email: None,
        phone: None,
        check_in: Some(check_in.to_string()),
        check_out: Some(check_out.to_string()),
        guests: 2,
        status: status.to_string(),
        payment_status: Some("unpaid".to_string()),
        total_amount: total,
    };
    vec![
        booking(-1, "Maria Santos", "101", "2024-07-01", "2024-07-03", "confirmed", 5000.0),
        booking(-2, "John Reyes", "201", "2024-07-02", "2024-07-05", "pending", 11400.0),
        booking(-3, "Liza Tan", "102", "2024-06-28", "2024-07-01", "checked_in", 7500.0),
    ]
}

pub fn attendance() -> Vec<AttendanceRecord> {
    let record = |id: i64, name: &str, time_in: Option<&str>, status, notes: Option<&str>| AttendanceRecord {
        id,
        employee_id: -id,
        employee_name: Some(name.to_string()),
        date: "2024-07-01".to_string(),
        time_in: time_in.map(str::to_string),
        time_out: time_in.map(|_| "17:00".to_string()),
        status,
        notes: notes.map(str::to_string),
    };
    vec![
        record(-1, "Ana Cruz", Some("08:00"), AttendanceStatus::Present, None),
        record(-2, "Ben Lim", Some("08:25"), AttendanceStatus::Late, Some("Traffic")),
        record(-3, "Carla Dizon", None, AttendanceStatus::Absent, Some("Sick leave")),
    ]
}

pub fn purchase_orders() -> Vec<PurchaseOrder> {
    let items = vec![
        PurchaseOrderItem {
            name: "Rice".into(),
            quantity: 5.0,
            unit: "sack".into(),
            price: 1200.0,
        },
        PurchaseOrderItem {
            name: "Cooking oil".into(),
            quantity: 10.0,
            unit: "L".into(),
            price: 95.0,
        },
    ];
    vec![PurchaseOrder {
        id: -1,
        order_number: "PO-SAMPLE-1".into(),
        supplier: "Metro Foods".into(),
        department: Department::Restaurant,
        total_amount: items_total(&items),
        items,
        expected_delivery_date: Some("2024-07-10".into()),
        notes: None,
        status: Some("pending".into()),
    }]
}
