//! Attendance edit form

use shared::error::FieldErrors;
use shared::models::AttendanceRecord;
use shared::status::{AttendanceStatus, StatusLookup};
use shared::util::parse_time;
use shared::validation::{optional_text, require, require_date, require_number, MAX_NOTE_LEN};

use super::{opt_text, FieldDef, FieldKind, FormSpec, FormValues, ModalMode};

const STATUSES: &[&str] = &["present", "absent", "late"];

static FIELDS: &[FieldDef] = &[
    FieldDef::required("employeeId", "Employee", FieldKind::Number),
    FieldDef::required("date", "Date", FieldKind::Date),
    FieldDef::optional("timeIn", "Time in", FieldKind::Time),
    FieldDef::optional("timeOut", "Time out", FieldKind::Time),
    FieldDef::required("status", "Status", FieldKind::Select(STATUSES)),
    FieldDef::optional("notes", "Notes", FieldKind::Text),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AttendanceEditForm;

fn is_absent(values: &FormValues) -> bool {
    AttendanceStatus::from_wire(values.text("status")) == Some(AttendanceStatus::Absent)
}

impl FormSpec for AttendanceEditForm {
    type Record = AttendanceRecord;

    fn fields(&self) -> &'static [FieldDef] {
        FIELDS
    }

    fn defaults(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("status", AttendanceStatus::Present.as_wire());
        values
    }

    fn values_from(&self, record: &AttendanceRecord) -> FormValues {
        let mut values = FormValues::new();
        values.set("employeeId", record.employee_id.to_string());
        values.set("date", record.date.as_str());
        values.set("timeIn", opt_text(record.time_in.as_deref()));
        values.set("timeOut", opt_text(record.time_out.as_deref()));
        values.set("status", record.status.as_wire());
        values.set("notes", opt_text(record.notes.as_deref()));
        values
    }

    fn validate(&self, values: &FormValues, _mode: ModalMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_number(&mut errors, "employeeId", "Employee", values.text("employeeId"));
        require_date(&mut errors, "date", "Date", values.text("date"));
        if AttendanceStatus::from_wire(values.text("status")).is_none() {
            errors.add("status", "Choose present, absent or late");
        }
        if !is_absent(values) {
            for (key, label) in [("timeIn", "Time in"), ("timeOut", "Time out")] {
                if require(&mut errors, key, label, values.text(key))
                    && parse_time(values.text(key)).is_none()
                {
                    errors.add(key, format!("{label} is not a valid time"));
                }
            }
        }
        optional_text(&mut errors, "notes", "Notes", values.text("notes"), MAX_NOTE_LEN);
        errors
    }

    fn on_change(&self, values: &mut FormValues, key: &str) {
        if key == "status" && is_absent(values) {
            values.set("timeIn", "");
            values.set("timeOut", "");
        }
    }
}
