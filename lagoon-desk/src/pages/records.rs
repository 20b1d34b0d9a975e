//! Per-resource page behavior

use lagoon_client::api::{self, Endpoint};
use shared::models::{
    AttendanceRecord, Booking, Discount, DiscountStatus, Employee, Event, MenuItem, Order,
    PurchaseOrder, Room,
};
use shared::money::format_currency;
use shared::status::{BookingStatus, StatusLookup};

use super::{samples, Listable, SortValue};

fn lowercase_key(raw: Option<&str>) -> Option<String> {
    raw.map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
}

impl Listable for Room {
    const ENDPOINT: Endpoint = api::rooms::ENDPOINT;
    const NOUN: &'static str = "Room";
    const SORT_FIELDS: &'static [&'static str] = &["roomNumber", "roomType", "price", "capacity"];

    fn id(&self) -> i64 {
        self.id
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.as_wire().to_string())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.room_number.as_str(),
            self.room_type.as_str(),
            self.description.as_deref().unwrap_or_default(),
        ]
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "roomNumber" => SortValue::text(Some(self.room_number.as_str())),
            "roomType" => SortValue::text(Some(self.room_type.as_str())),
            "price" => SortValue::number(self.price),
            "capacity" => SortValue::number(f64::from(self.capacity)),
            _ => SortValue::Missing,
        }
    }

    fn display_row(&self) -> String {
        format!(
            "#{:<4} {:<6} {:<14} {:>12}  cap {:<2} {:<12} {}",
            self.id,
            self.room_number,
            self.room_type,
            format_currency(self.price),
            self.capacity,
            self.status.info().label,
            self.amenities.as_slice().join(", ")
        )
    }

    fn samples() -> Vec<Self> {
        samples::rooms()
    }
}

impl Listable for Booking {
    const ENDPOINT: Endpoint = api::bookings::ENDPOINT;
    const NOUN: &'static str = "Booking";
    const SORT_FIELDS: &'static [&'static str] = &["checkIn", "checkOut", "guestName", "totalAmount"];

    fn id(&self) -> i64 {
        self.id
    }

    /// Canonical spelling when the raw status is a known alias
    fn status_key(&self) -> Option<String> {
        match self.canonical_status() {
            Some(status) => Some(status.as_wire().to_string()),
            None => lowercase_key(Some(self.status.as_str())),
        }
    }

    fn normalize_status(raw: &str) -> String {
        BookingStatus::from_wire(raw)
            .map(|s| s.as_wire().to_string())
            .unwrap_or_else(|| raw.trim().to_ascii_lowercase())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.guest_name.as_deref().unwrap_or_default(),
            self.room_number.as_deref().unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
            self.phone.as_deref().unwrap_or_default(),
        ]
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "checkIn" => SortValue::date(self.check_in.as_deref()),
            "checkOut" => SortValue::date(self.check_out.as_deref()),
            "guestName" => SortValue::text(self.guest_name.as_deref()),
            "totalAmount" => SortValue::number(self.total_amount),
            _ => SortValue::Missing,
        }
    }

    fn display_row(&self) -> String {
        let status = BookingStatus::info_for(&self.status);
        format!(
            "#{:<4} {:<20} room {:<5} {} → {}  {:<12} {:>12}",
            self.id,
            self.guest_name.as_deref().unwrap_or("-"),
            self.room_number.as_deref().unwrap_or("-"),
            self.check_in.as_deref().unwrap_or("?"),
            self.check_out.as_deref().unwrap_or("?"),
            status.label,
            format_currency(self.total_amount)
        )
    }

    fn samples() -> Vec<Self> {
        samples::bookings()
    }
}

impl Listable for AttendanceRecord {
    const ENDPOINT: Endpoint = api::attendance::ENDPOINT;
    const NOUN: &'static str = "Attendance";
    const SORT_FIELDS: &'static [&'static str] = &["date", "employeeName", "timeIn", "status"];

    fn id(&self) -> i64 {
        self.id
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.as_wire().to_string())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.employee_name.as_deref().unwrap_or_default(),
            self.date.as_str(),
            self.notes.as_deref().unwrap_or_default(),
        ]
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "date" => SortValue::date(Some(self.date.as_str())),
            "employeeName" => SortValue::text(self.employee_name.as_deref()),
            "timeIn" => SortValue::text(self.time_in.as_deref()),
            "status" => SortValue::text(Some(self.status.as_wire())),
            _ => SortValue::Missing,
        }
    }

    fn display_row(&self) -> String {
        format!(
            "#{:<4} {:<10} {:<20} in {:<8} out {:<8} {}",
            self.id,
            self.date,
            self.employee_name.as_deref().unwrap_or("-"),
            self.time_in.as_deref().unwrap_or("--"),
            self.time_out.as_deref().unwrap_or("--"),
            self.status.info().label
        )
    }

    fn samples() -> Vec<Self> {
        samples::attendance()
    }
}

impl Listable for PurchaseOrder {
    const ENDPOINT: Endpoint = api::purchase_orders::ENDPOINT;
    const NOUN: &'static str = "Purchase order";
    const SORT_FIELDS: &'static [&'static str] =
        &["expectedDeliveryDate", "orderNumber", "supplier", "totalAmount"];

    fn id(&self) -> i64 {
        self.id
    }

    fn status_key(&self) -> Option<String> {
        lowercase_key(self.status.as_deref())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.order_number.as_str(),
            self.supplier.as_str(),
            self.notes.as_deref().unwrap_or_default(),
        ]
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "expectedDeliveryDate" => SortValue::date(self.expected_delivery_date.as_deref()),
            "orderNumber" => SortValue::text(Some(self.order_number.as_str())),
            "supplier" => SortValue::text(Some(self.supplier.as_str())),
            "totalAmount" => SortValue::number(self.total_amount),
            _ => SortValue::Missing,
        }
    }

    fn display_row(&self) -> String {
        format!(
            "#{:<4} {:<10} {:<22} {:<10} due {:<10} {:>12} {}",
            self.id,
            self.order_number,
            self.supplier,
            format!("{:?}", self.department).to_lowercase(),
            self.expected_delivery_date.as_deref().unwrap_or("-"),
            format_currency(self.total_amount),
            self.status.as_deref().unwrap_or("")
        )
    }

    fn samples() -> Vec<Self> {
        samples::purchase_orders()
    }
}

impl Listable for Discount {
    const ENDPOINT: Endpoint = api::discounts::ENDPOINT;
    const NOUN: &'static str = "Discount";
    const SORT_FIELDS: &'static [&'static str] = &["name", "value", "startDate", "endDate"];

    fn id(&self) -> i64 {
        self.id
    }

    fn status_key(&self) -> Option<String> {
        let key = match self.status {
            DiscountStatus::Active => "active",
            DiscountStatus::Inactive => "inactive",
        };
        Some(key.to_string())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_deref().unwrap_or_default()]
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "name" => SortValue::text(Some(self.name.as_str())),
            "value" => SortValue::number(self.value),
            "startDate" => SortValue::date(Some(self.start_date.as_str())),
            "endDate" => SortValue::date(Some(self.end_date.as_str())),
            _ => SortValue::Missing,
        }
    }

    fn display_row(&self) -> String {
        format!(
            "#{:<4} {:<20} {:<10} {:>8} {:?}  {} → {}  {}",
            self.id,
            self.name,
            self.code.as_deref().unwrap_or("-"),
            self.value,
            self.discount_type,
            self.start_date,
            self.end_date,
            self.status_key().unwrap_or_default()
        )
    }
}

impl Listable for Employee {
    const ENDPOINT: Endpoint = api::employees::ENDPOINT;
    const NOUN: &'static str = "Employee";
    const SORT_FIELDS: &'static [&'static str] = &["name", "department", "salary"];

    fn id(&self) -> i64 {
        self.id
    }

    /// Employees have no lifecycle; the page filters by department
    fn status_key(&self) -> Option<String> {
        lowercase_key(Some(self.department.as_str()))
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.job_title.as_str(),
            self.department.as_str(),
        ]
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "name" => SortValue::text(Some(self.name.as_str())),
            "department" => SortValue::text(Some(self.department.as_str())),
            "salary" => SortValue::number(self.salary),
            _ => SortValue::Missing,
        }
    }

    fn display_row(&self) -> String {
        format!(
            "#{:<4} {:<22} {:<28} {:<14} {:<18} {:>12}",
            self.id,
            self.name,
            self.email,
            self.department,
            self.job_title,
            format_currency(self.salary)
        )
    }
}

impl Listable for Order {
    const ENDPOINT: Endpoint = api::orders::ENDPOINT;
    const NOUN: &'static str = "Order";
    const SORT_FIELDS: &'static [&'static str] = &["createdAt", "total", "customerName"];

    fn id(&self) -> i64 {
        self.id
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.as_wire().to_string())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.customer_name.as_deref().unwrap_or_default(),
            self.room_number.as_deref().unwrap_or_default(),
            self.table_number.as_deref().unwrap_or_default(),
        ]
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "createdAt" => SortValue::date(self.created_at.as_deref()),
            "total" => SortValue::number(self.total),
            "customerName" => SortValue::text(self.customer_name.as_deref()),
            _ => SortValue::Missing,
        }
    }

    fn display_row(&self) -> String {
        let destination = match (&self.room_number, &self.table_number) {
            (Some(room), _) => format!("room {room}"),
            (None, Some(table)) => format!("table {table}"),
            (None, None) => "-".to_string(),
        };
        format!(
            "#{:<4} {:<20} {:<10} {:>2} items {:>12} {:<10} {}{}",
            self.id,
            self.customer_name.as_deref().unwrap_or("walk-in"),
            destination,
            self.items.len(),
            format_currency(self.total),
            self.status.info().label,
            self.payment_status.info().label,
            if self.is_senior_citizen { " (senior)" } else { "" }
        )
    }
}

impl Listable for Event {
    const ENDPOINT: Endpoint = api::events::ENDPOINT;
    const NOUN: &'static str = "Event";
    const SORT_FIELDS: &'static [&'static str] = &["date", "clientName", "guestCount", "totalAmount"];

    fn id(&self) -> i64 {
        self.id
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.as_wire().to_string())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.client_name.as_str(),
            self.event_type.as_str(),
            self.venue.as_str(),
        ]
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "date" => SortValue::date(Some(self.date.as_str())),
            "clientName" => SortValue::text(Some(self.client_name.as_str())),
            "guestCount" => SortValue::number(f64::from(self.guest_count)),
            "totalAmount" => SortValue::number(self.total_amount),
            _ => SortValue::Missing,
        }
    }

    fn display_row(&self) -> String {
        format!(
            "#{:<4} {:<10} {:<14} {:<20} {:<14} {:>4} pax {:>12} {:<10} {} (balance {})",
            self.id,
            self.date,
            self.event_type,
            self.client_name,
            self.venue,
            self.guest_count,
            format_currency(self.total_amount),
            self.status.info().label,
            self.payment_status.info().label,
            format_currency(self.balance())
        )
    }
}

impl Listable for MenuItem {
    const ENDPOINT: Endpoint = api::menu::ENDPOINT;
    const NOUN: &'static str = "Menu item";
    const SORT_FIELDS: &'static [&'static str] = &["name", "category", "price"];

    fn id(&self) -> i64 {
        self.id
    }

    fn status_key(&self) -> Option<String> {
        let key = if self.available { "available" } else { "unavailable" };
        Some(key.to_string())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_deref().unwrap_or_default()]
    }

    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "name" => SortValue::text(Some(self.name.as_str())),
            "category" => SortValue::text(self.category.as_deref()),
            "price" => SortValue::number(self.price),
            _ => SortValue::Missing,
        }
    }

    fn display_row(&self) -> String {
        format!(
            "#{:<4} {:<26} {:<14} {:>10}{}",
            self.id,
            self.name,
            self.category.as_deref().unwrap_or("-"),
            format_currency(self.price),
            if self.available { "" } else { "  (unavailable)" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::{ListPage, SortDirection, StatusFilter};
    use super::*;
    use shared::status::AttendanceStatus;

    fn attendance(id: i64, status: AttendanceStatus, date: &str, notes: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: id,
            employee_name: Some(format!("Employee {id}")),
            date: date.to_string(),
            time_in: None,
            time_out: None,
            status,
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn test_filter_and_search_are_anded() {
        let a = attendance(1, AttendanceStatus::Present, "2024-05-01", None);
        let b = attendance(2, AttendanceStatus::Absent, "2024-05-01", Some("Sick leave, called in"));
        let mut page = ListPage::with_records(vec![a, b]);

        page.set_filter(StatusFilter::parse("present"));
        for search in ["", "sick", "employee"] {
            page.set_search(search);
            let ids: Vec<i64> = page.visible().iter().map(|r| r.id).collect();
            assert!(ids.iter().all(|id| *id == 1), "search {search:?} gave {ids:?}");
        }
        page.set_search("");
        assert_eq!(page.visible().len(), 1);

        page.set_filter(StatusFilter::All);
        page.set_search("SICK");
        let ids: Vec<i64> = page.visible().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_sort_toggle_and_missing_dates() {
        let rows = vec![
            attendance(1, AttendanceStatus::Present, "2024-05-03", None),
            attendance(2, AttendanceStatus::Present, "", None),
            attendance(3, AttendanceStatus::Present, "2024-05-01", None),
        ];
        let mut page = ListPage::with_records(rows);

        page.sort_by("date");
        assert_eq!(page.sort().map(|s| s.direction), Some(SortDirection::Asc));
        let ids: Vec<i64> = page.visible().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        page.sort_by("date");
        assert_eq!(page.sort().map(|s| s.direction), Some(SortDirection::Desc));
        let ids: Vec<i64> = page.visible().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);

        page.sort_by("employeeName");
        assert_eq!(page.sort().map(|s| s.direction), Some(SortDirection::Asc));

        page.sort_by("no-such-field");
        assert_eq!(page.visible().len(), 3);
    }

    #[test]
    fn test_booking_filter_accepts_aliases() {
        let mut confirmed = samples::bookings()[0].clone();
        confirmed.id = 10;
        confirmed.status = "confirm".into();
        let mut checked_in = confirmed.clone();
        checked_in.id = 11;
        checked_in.status = "checked-in".into();

        let mut page = ListPage::with_records(vec![confirmed, checked_in]);
        page.set_filter(StatusFilter::parse("confirmed"));
        assert_eq!(page.visible().iter().map(|b| b.id).collect::<Vec<_>>(), vec![10]);
        page.set_filter(StatusFilter::parse("checkin"));
        assert_eq!(page.visible().iter().map(|b| b.id).collect::<Vec<_>>(), vec![11]);

        let counts = page.status_counts();
        assert_eq!(counts.get("confirmed"), Some(&1));
        assert_eq!(counts.get("checked_in"), Some(&1));
    }

    #[test]
    fn test_upsert_replaces_or_prepends() {
        let mut page = ListPage::with_records(samples::rooms());
        let total = page.records().len();
        let mut room = page.records()[1].clone();
        room.price = 9999.0;
        page.upsert(room.clone());
        assert_eq!(page.records().len(), total);
        assert_eq!(page.find(room.id).map(|r| r.price), Some(9999.0));

        room.id = 9000;
        page.upsert(room);
        assert_eq!(page.records().len(), total + 1);
        assert_eq!(page.records()[0].id, 9000);
    }
}
