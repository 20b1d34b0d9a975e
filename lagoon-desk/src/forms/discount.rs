//! Discount form

use shared::error::FieldErrors;
use shared::models::{ApplicableTo, Discount, DiscountStatus, DiscountType};
use shared::validation::{
    check_date_order, check_non_negative, check_positive, check_range, optional_number,
    require_date, require_number, require_text, MAX_NAME_LEN, MAX_PERCENTAGE,
};

use super::{opt_number, opt_text, FieldDef, FieldKind, FormSpec, FormValues, ModalMode};

const TYPES: &[&str] = &["percentage", "fixed"];
const APPLICABLE: &[&str] = &["all", "room", "food"];
const STATUSES: &[&str] = &["active", "inactive"];

static FIELDS: &[FieldDef] = &[
    FieldDef::required("name", "Name", FieldKind::Text),
    FieldDef::optional("code", "Code", FieldKind::Text),
    FieldDef::required("type", "Type", FieldKind::Select(TYPES)),
    FieldDef::required("value", "Value", FieldKind::Number),
    FieldDef::optional("min_purchase", "Minimum purchase", FieldKind::Number),
    FieldDef::optional("max_discount", "Maximum discount", FieldKind::Number),
    FieldDef::optional("usage_limit", "Usage limit", FieldKind::Number),
    FieldDef::required("start_date", "Start date", FieldKind::Date),
    FieldDef::required("end_date", "End date", FieldKind::Date),
    FieldDef::optional("applicable_to", "Applicable to", FieldKind::Select(APPLICABLE)),
    FieldDef::optional("status", "Status", FieldKind::Select(STATUSES)),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountForm;

impl FormSpec for DiscountForm {
    type Record = Discount;

    fn fields(&self) -> &'static [FieldDef] {
        FIELDS
    }

    fn defaults(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("type", "percentage");
        values.set("applicable_to", "all");
        values.set("status", "active");
        values
    }

    fn values_from(&self, d: &Discount) -> FormValues {
        let mut values = FormValues::new();
        values.set("name", d.name.as_str());
        values.set("code", opt_text(d.code.as_deref()));
        values.set(
            "type",
            match d.discount_type {
                DiscountType::Percentage => "percentage",
                DiscountType::Fixed => "fixed",
            },
        );
        values.set("value", opt_number(Some(d.value)));
        values.set("min_purchase", opt_number(d.min_purchase));
        values.set("max_discount", opt_number(d.max_discount));
        values.set("usage_limit", opt_number(d.usage_limit.map(f64::from)));
        values.set("start_date", d.start_date.as_str());
        values.set("end_date", d.end_date.as_str());
        values.set(
            "applicable_to",
            match d.applicable_to {
                ApplicableTo::All => "all",
                ApplicableTo::Room => "room",
                ApplicableTo::Food => "food",
            },
        );
        values.set(
            "status",
            match d.status {
                DiscountStatus::Active => "active",
                DiscountStatus::Inactive => "inactive",
            },
        );
        values
    }

    fn validate(&self, values: &FormValues, _mode: ModalMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", "Name", values.text("name"), MAX_NAME_LEN);

        let kind = DiscountType::from_wire(values.text("type"));
        if kind.is_none() {
            errors.add("type", "Choose percentage or fixed");
        }
        if let Some(value) = require_number(&mut errors, "value", "Value", values.text("value")) {
            match kind {
                Some(DiscountType::Percentage) => {
                    check_range(&mut errors, "value", "Percentage", value, 1.0, MAX_PERCENTAGE);
                }
                Some(DiscountType::Fixed) => {
                    check_positive(&mut errors, "value", "Value", value);
                }
                None => {}
            }
        }

        if let Some(min) =
            optional_number(&mut errors, "min_purchase", "Minimum purchase", values.text("min_purchase"))
        {
            check_non_negative(&mut errors, "min_purchase", "Minimum purchase", min);
        }
        if let Some(max) =
            optional_number(&mut errors, "max_discount", "Maximum discount", values.text("max_discount"))
        {
            check_positive(&mut errors, "max_discount", "Maximum discount", max);
        }
        if let Some(limit) =
            optional_number(&mut errors, "usage_limit", "Usage limit", values.text("usage_limit"))
        {
            check_non_negative(&mut errors, "usage_limit", "Usage limit", limit);
        }

        let start = require_date(&mut errors, "start_date", "Start date", values.text("start_date"));
        let end = require_date(&mut errors, "end_date", "End date", values.text("end_date"));
        check_date_order(
            &mut errors,
            "end_date",
            start,
            end,
            "End date must be after start date",
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FormValues {
        let mut values = DiscountForm.defaults();
        values.set("name", "Summer promo");
        values.set("value", "15");
        values.set("start_date", "2024-06-01");
        values.set("end_date", "2024-08-31");
        values
    }

    #[test]
    fn test_valid_discount_passes() {
        assert!(DiscountForm.validate(&valid(), ModalMode::Create).is_empty());
    }

    #[test]
    fn test_percentage_out_of_range() {
        for bad in ["0", "-5", "100.01", "250"] {
            let mut values = valid();
            values.set("value", bad);
            let errors = DiscountForm.validate(&values, ModalMode::Create);
            assert!(errors.contains("value"), "value {bad} should be rejected");
        }
        let mut values = valid();
        values.set("value", "100");
        assert!(DiscountForm.validate(&values, ModalMode::Create).is_empty());
    }

    #[test]
    fn test_fixed_allows_large_values() {
        let mut values = valid();
        values.set("type", "fixed");
        values.set("value", "500");
        assert!(DiscountForm.validate(&values, ModalMode::Create).is_empty());
        values.set("value", "0");
        assert!(DiscountForm.validate(&values, ModalMode::Create).contains("value"));
    }

    #[test]
    fn test_end_date_not_after_start() {
        for end in ["2024-06-01", "2024-05-01"] {
            let mut values = valid();
            values.set("end_date", end);
            let errors = DiscountForm.validate(&values, ModalMode::Create);
            assert_eq!(errors.get("end_date"), Some("End date must be after start date"));
        }
    }

    #[test]
    fn test_optional_amounts() {
        let mut values = valid();
        values.set("min_purchase", "-1");
        values.set("max_discount", "0");
        let errors = DiscountForm.validate(&values, ModalMode::Create);
        assert!(errors.contains("min_purchase"));
        assert!(errors.contains("max_discount"));
    }
}
