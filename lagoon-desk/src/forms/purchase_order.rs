//! Purchase order form
//!
//! `totalAmount` is derived: every edit to the item rows recomputes it. The
//! server's echoed total wins once the order is saved.

use shared::error::FieldErrors;
use shared::models::{Department, PurchaseOrder};
use shared::validation::{
    optional_text, parse_number, require, require_date, require_text, MAX_NAME_LEN, MAX_NOTE_LEN,
};

use super::{format_number, opt_text, FieldDef, FieldKind, FormSpec, FormValues, ModalMode, Row};

pub const ITEMS: &str = "items";
pub const TOTAL: &str = "totalAmount";

const DEPARTMENTS: &[&str] = &["restaurant", "hotel"];

static ITEM_COLUMNS: &[FieldDef] = &[
    FieldDef::required("name", "Item name", FieldKind::Text),
    FieldDef::required("quantity", "Quantity", FieldKind::Number),
    FieldDef::optional("unit", "Unit", FieldKind::Text),
    FieldDef::required("price", "Price", FieldKind::Number),
];

static FIELDS: &[FieldDef] = &[
    FieldDef::required("orderNumber", "Order number", FieldKind::Text),
    FieldDef::required("supplier", "Supplier", FieldKind::Text),
    FieldDef::required("department", "Department", FieldKind::Select(DEPARTMENTS)),
    FieldDef::required(ITEMS, "Items", FieldKind::Rows(ITEM_COLUMNS)),
    FieldDef::optional(TOTAL, "Total amount", FieldKind::Number),
    FieldDef::required("expectedDeliveryDate", "Expected delivery date", FieldKind::Date),
    FieldDef::optional("notes", "Notes", FieldKind::Text),
];

/// Σ quantity × price over the rows; unparsable cells count as 0
pub fn rows_total(rows: &[Row]) -> f64 {
    let cell = |row: &Row, key: &str| {
        row.get(key)
            .and_then(|raw| parse_number(raw))
            .unwrap_or(0.0)
    };
    rows.iter()
        .map(|row| cell(row, "quantity") * cell(row, "price"))
        .sum()
}

fn blank_item() -> Row {
    ITEM_COLUMNS
        .iter()
        .map(|c| (c.name.to_string(), String::new()))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseOrderForm;

impl FormSpec for PurchaseOrderForm {
    type Record = PurchaseOrder;

    fn fields(&self) -> &'static [FieldDef] {
        FIELDS
    }

    fn defaults(&self) -> FormValues {
        let mut values = FormValues::new();
        values.set("department", "restaurant");
        values.set(ITEMS, vec![blank_item()]);
        values.set(TOTAL, "0");
        values
    }

    fn values_from(&self, po: &PurchaseOrder) -> FormValues {
        let rows: Vec<Row> = po
            .items
            .iter()
            .map(|item| {
                Row::from([
                    ("name".to_string(), item.name.clone()),
                    ("quantity".to_string(), format_number(item.quantity)),
                    ("unit".to_string(), item.unit.clone()),
                    ("price".to_string(), format_number(item.price)),
                ])
            })
            .collect();
        let mut values = FormValues::new();
        values.set("orderNumber", po.order_number.as_str());
        values.set("supplier", po.supplier.as_str());
        values.set(
            "department",
            match po.department {
                Department::Restaurant => "restaurant",
                Department::Hotel => "hotel",
            },
        );
        values.set(ITEMS, rows);
        values.set(TOTAL, format_number(po.total_amount));
        values.set("expectedDeliveryDate", opt_text(po.expected_delivery_date.as_deref()));
        values.set("notes", opt_text(po.notes.as_deref()));
        values
    }

    fn validate(&self, values: &FormValues, _mode: ModalMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "orderNumber", "Order number", values.text("orderNumber"), MAX_NAME_LEN);
        require_text(&mut errors, "supplier", "Supplier", values.text("supplier"), MAX_NAME_LEN);
        if !DEPARTMENTS.contains(&values.text("department")) {
            errors.add("department", "Choose restaurant or hotel");
        }
        require_date(
            &mut errors,
            "expectedDeliveryDate",
            "Expected delivery date",
            values.text("expectedDeliveryDate"),
        );
        optional_text(&mut errors, "notes", "Notes", values.text("notes"), MAX_NOTE_LEN);

        let rows = values.rows(ITEMS);
        if rows.is_empty() {
            errors.add(ITEMS, "Add at least one item");
        }
        for (i, row) in rows.iter().enumerate() {
            let cell = |key: &str| row.get(key).map(|s| s.trim()).unwrap_or_default();
            require(&mut errors, &format!("items.{i}.name"), "Item name", cell("name"));
            for (key, label) in [("quantity", "Quantity"), ("price", "Price")] {
                let field = format!("items.{i}.{key}");
                match parse_number(cell(key)) {
                    Some(n) if n > 0.0 => {}
                    Some(_) => errors.add(field, format!("{label} must be greater than 0")),
                    None if cell(key).is_empty() => errors.add(field, format!("{label} is required")),
                    None => errors.add(field, format!("{label} must be a number")),
                }
            }
        }
        errors
    }

    fn on_change(&self, values: &mut FormValues, key: &str) {
        if key == ITEMS {
            let total = rows_total(values.rows(ITEMS));
            values.set(TOTAL, format_number(total));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ModalForm;

    fn form_with_items() -> ModalForm<PurchaseOrderForm> {
        let mut form = ModalForm::create(PurchaseOrderForm);
        form.set("orderNumber", "PO-0100");
        form.set("supplier", "Metro Foods");
        form.set("expectedDeliveryDate", "2024-07-10");
        form.set_row_cell(ITEMS, 0, "name", "Rice");
        form.set_row_cell(ITEMS, 0, "quantity", "2");
        form.set_row_cell(ITEMS, 0, "price", "10");
        form.set_row_cell(ITEMS, 1, "name", "Oil");
        form.set_row_cell(ITEMS, 1, "quantity", "1");
        form.set_row_cell(ITEMS, 1, "price", "5");
        form
    }

    #[test]
    fn test_total_follows_item_edits() {
        let mut form = form_with_items();
        assert_eq!(form.values().text(TOTAL), "25");

        form.set_row_cell(ITEMS, 1, "price", "15");
        assert_eq!(form.values().text(TOTAL), "35");

        form.remove_row(ITEMS, 0);
        assert_eq!(form.values().text(TOTAL), "15");
    }

    #[test]
    fn test_item_errors_are_indexed() {
        let mut form = form_with_items();
        form.set_row_cell(ITEMS, 1, "quantity", "0");
        form.set_row_cell(ITEMS, 1, "name", " ");
        assert!(!form.validate());
        assert_eq!(form.errors().get("items.1.quantity"), Some("Quantity must be greater than 0"));
        assert_eq!(form.errors().get("items.1.name"), Some("Item name is required"));
        assert!(!form.errors().contains("items.0.name"));

        form.set_row_cell(ITEMS, 1, "quantity", "3");
        assert!(!form.errors().contains("items.1.quantity"));
    }

    #[test]
    fn test_needs_an_item() {
        let mut values = PurchaseOrderForm.defaults();
        values.set(ITEMS, Vec::<Row>::new());
        let errors = PurchaseOrderForm.validate(&values, ModalMode::Create);
        assert_eq!(errors.get(ITEMS), Some("Add at least one item"));
    }

    #[test]
    fn test_payload_items_are_numbers() {
        let form = form_with_items();
        match PurchaseOrderForm.payload(form.values(), ModalMode::Create) {
            lagoon_client::Payload::Json(body) => {
                assert_eq!(body["items"][0]["quantity"], 2);
                assert_eq!(body["items"][1]["unit"], serde_json::Value::Null);
                assert_eq!(body[TOTAL], 25);
            }
            other => panic!("expected json, got {other:?}"),
        }
    }
}
