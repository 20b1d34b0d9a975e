//! Employee form
//!
//! Sent as multipart when a photo is attached. On update the password pair
//! is optional and left out of the body when blank.

use lagoon_client::Payload;
use shared::error::FieldErrors;
use shared::models::Employee;
use shared::validation::{
    check_positive, require_email, require_number, require_text, MAX_NAME_LEN, MAX_NOTE_LEN,
    MIN_PASSWORD_LEN,
};

use super::{format_number, FieldDef, FieldKind, FormSpec, FormValues, ModalMode};

static FIELDS: &[FieldDef] = &[
    FieldDef::required("name", "Name", FieldKind::Text),
    FieldDef::required("email", "Email", FieldKind::Email),
    FieldDef::required("phonenumber", "Phone number", FieldKind::Text),
    FieldDef::required("department", "Department", FieldKind::Text),
    FieldDef::required("job_title", "Job title", FieldKind::Text),
    FieldDef::required("salary", "Salary", FieldKind::Number),
    FieldDef::required("address", "Address", FieldKind::Text),
    FieldDef::required("password", "Password", FieldKind::Password),
    FieldDef::required("password_confirmation", "Password confirmation", FieldKind::Password),
    FieldDef::optional("image", "Photo", FieldKind::File),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeForm;

impl EmployeeForm {
    fn password_given(values: &FormValues) -> bool {
        !values.text("password").is_empty() || !values.text("password_confirmation").is_empty()
    }
}

impl FormSpec for EmployeeForm {
    type Record = Employee;

    fn fields(&self) -> &'static [FieldDef] {
        FIELDS
    }

    fn values_from(&self, e: &Employee) -> FormValues {
        let mut values = FormValues::new();
        values.set("name", e.name.as_str());
        values.set("email", e.email.as_str());
        values.set("phonenumber", e.phonenumber.as_str());
        values.set("department", e.department.as_str());
        values.set("job_title", e.job_title.as_str());
        values.set("salary", format_number(e.salary));
        values.set("address", e.address.as_str());
        values
    }

    fn validate(&self, values: &FormValues, mode: ModalMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", "Name", values.text("name"), MAX_NAME_LEN);
        require_email(&mut errors, "email", "Email", values.text("email"));
        require_text(&mut errors, "phonenumber", "Phone number", values.text("phonenumber"), MAX_NAME_LEN);
        require_text(&mut errors, "department", "Department", values.text("department"), MAX_NAME_LEN);
        require_text(&mut errors, "job_title", "Job title", values.text("job_title"), MAX_NAME_LEN);
        if let Some(salary) = require_number(&mut errors, "salary", "Salary", values.text("salary")) {
            check_positive(&mut errors, "salary", "Salary", salary);
        }
        require_text(&mut errors, "address", "Address", values.text("address"), MAX_NOTE_LEN);

        let check_password = match mode {
            ModalMode::Create => true,
            ModalMode::Update { .. } => Self::password_given(values),
        };
        if check_password {
            // Not trimmed: spaces count toward the length
            let password = values.raw("password");
            let confirmation = values.raw("password_confirmation");
            if password.trim().is_empty() {
                errors.add("password", "Password is required");
            } else if password.chars().count() < MIN_PASSWORD_LEN {
                errors.add(
                    "password",
                    format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
                );
            }
            if confirmation.trim().is_empty() {
                errors.add("password_confirmation", "Password confirmation is required");
            } else if confirmation != password {
                errors.add("password_confirmation", "Passwords do not match");
            }
        }
        errors
    }

    fn payload(&self, values: &FormValues, mode: ModalMode) -> Payload {
        let mut values = values.clone();
        if matches!(mode, ModalMode::Update { .. }) && !Self::password_given(&values) {
            values.remove("password");
            values.remove("password_confirmation");
        }
        values.build_payload(FIELDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lagoon_client::Upload;

    fn valid() -> FormValues {
        let mut values = FormValues::new();
        values.set("name", "Ana Cruz");
        values.set("email", "ana@lagoon.ph");
        values.set("phonenumber", "09171234567");
        values.set("department", "Front Desk");
        values.set("job_title", "Receptionist");
        values.set("salary", "18000");
        values.set("address", "Batangas City");
        values.set("password", "secret12");
        values.set("password_confirmation", "secret12");
        values
    }

    #[test]
    fn test_password_length_boundary() {
        let mut values = valid();
        values.set("password", "secret1");
        values.set("password_confirmation", "secret1");
        let errors = EmployeeForm.validate(&values, ModalMode::Create);
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters"));

        let errors = EmployeeForm.validate(&valid(), ModalMode::Create);
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_confirmation_must_match() {
        let mut values = valid();
        values.set("password_confirmation", "secret13");
        let errors = EmployeeForm.validate(&values, ModalMode::Create);
        assert_eq!(errors.get("password_confirmation"), Some("Passwords do not match"));
    }

    #[test]
    fn test_email_and_salary() {
        let mut values = valid();
        values.set("email", "ana@lagoon");
        values.set("salary", "-1");
        let errors = EmployeeForm.validate(&values, ModalMode::Create);
        assert_eq!(errors.get("email"), Some("Enter a valid email address"));
        assert_eq!(errors.get("salary"), Some("Salary must be greater than 0"));
    }

    #[test]
    fn test_update_without_password() {
        let mut values = valid();
        values.set("password", "");
        values.set("password_confirmation", "");
        let mode = ModalMode::Update { id: 3 };
        assert!(EmployeeForm.validate(&values, mode).is_empty());
        assert!(EmployeeForm.validate(&values, ModalMode::Create).contains("password"));

        match EmployeeForm.payload(&values, mode) {
            Payload::Json(body) => {
                assert!(body.get("password").is_none());
                assert_eq!(body["salary"], 18000);
            }
            other => panic!("expected json, got {other:?}"),
        }
    }

    #[test]
    fn test_photo_makes_multipart() {
        let mut values = valid();
        values.push_file("image", Upload::new("image", "ana.png", "image/png", vec![1, 2, 3]));
        match EmployeeForm.payload(&values, ModalMode::Create) {
            Payload::Multipart(body) => {
                assert_eq!(body.field("name"), Some("Ana Cruz"));
                assert_eq!(body.field("salary"), Some("18000"));
                assert_eq!(body.files.len(), 1);
                assert_eq!(body.files[0].field, "image");
            }
            other => panic!("expected multipart, got {other:?}"),
        }
    }
}
