//! Generic create/update modal
//!
//! Every entity form is the same controller ([`ModalForm`]) driven by a
//! [`FormSpec`] that supplies the field list, the validation rules, derived
//! fields and the endpoint paths.
//!
//! Values are kept as the user typed them. Numbers are parsed only when
//! validating and when building the request body.

use std::collections::BTreeMap;

use lagoon_client::{decode_record, ApiRequest, ClientError, HttpClient, MultipartBody, Payload, Upload};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use shared::error::FieldErrors;
use shared::validation::parse_number;

use crate::core::Notifier;
use crate::pages::Listable;

pub mod attendance;
pub mod booking;
pub mod discount;
pub mod employee;
pub mod event;
pub mod purchase_order;
pub mod room;

pub use attendance::AttendanceEditForm;
pub use booking::ClientBookingForm;
pub use discount::DiscountForm;
pub use employee::EmployeeForm;
pub use event::EventForm;
pub use purchase_order::PurchaseOrderForm;
pub use room::RoomForm;

/// Toast shown when local validation or the server rejects fields
pub const FIX_FIELDS_MESSAGE: &str = "Please fix the highlighted fields";

// ============================================================================
// Field definitions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Date,
    Time,
    Select(&'static [&'static str]),
    Flag,
    /// Comma-separated in the form, an array on the wire
    List,
    File,
    /// Several files, sent as `name[]`
    Files,
    /// Repeating group, e.g. purchase order lines
    Rows(&'static [FieldDef]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDef {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }
}

// ============================================================================
// Values
// ============================================================================

pub type Row = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Files(Vec<Upload>),
    Rows(Vec<Row>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Upload> for FieldValue {
    fn from(value: Upload) -> Self {
        Self::Files(vec![value])
    }
}

impl From<Vec<Row>> for FieldValue {
    fn from(value: Vec<Row>) -> Self {
        Self::Rows(value)
    }
}

/// Flat key → value map behind a form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl<K: Into<String>> FromIterator<(K, FieldValue)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.0.remove(key)
    }

    /// Text value, trimmed; `""` when unset or not text
    pub fn text(&self, key: &str) -> &str {
        match self.0.get(key) {
            Some(FieldValue::Text(s)) => s.trim(),
            _ => "",
        }
    }

    /// Text value exactly as typed
    pub fn raw(&self, key: &str) -> &str {
        match self.0.get(key) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(FieldValue::Flag(true)))
    }

    pub fn files(&self, key: &str) -> &[Upload] {
        match self.0.get(key) {
            Some(FieldValue::Files(files)) => files,
            _ => &[],
        }
    }

    pub fn rows(&self, key: &str) -> &[Row] {
        match self.0.get(key) {
            Some(FieldValue::Rows(rows)) => rows,
            _ => &[],
        }
    }

    /// Set one cell of a repeating group, growing it as needed
    pub fn set_row_cell(&mut self, key: &str, index: usize, column: &str, value: impl Into<String>) {
        let entry = self
            .0
            .entry(key.to_string())
            .or_insert_with(|| FieldValue::Rows(Vec::new()));
        if !matches!(entry, FieldValue::Rows(_)) {
            *entry = FieldValue::Rows(Vec::new());
        }
        if let FieldValue::Rows(rows) = entry {
            if rows.len() <= index {
                rows.resize_with(index + 1, Row::new);
            }
            rows[index].insert(column.to_string(), value.into());
        }
    }

    pub fn remove_row(&mut self, key: &str, index: usize) -> Option<Row> {
        match self.0.get_mut(key) {
            Some(FieldValue::Rows(rows)) if index < rows.len() => Some(rows.remove(index)),
            _ => None,
        }
    }

    pub fn push_file(&mut self, key: &str, upload: Upload) {
        match self.0.get_mut(key) {
            Some(FieldValue::Files(files)) => files.push(upload),
            _ => {
                self.0.insert(key.to_string(), FieldValue::Files(vec![upload]));
            }
        }
    }

    /// Request body for `fields`; multipart as soon as any file is attached.
    /// Keys with no value are left out.
    pub fn build_payload(&self, fields: &[FieldDef]) -> Payload {
        let has_files = fields.iter().any(|f| {
            matches!(f.kind, FieldKind::File | FieldKind::Files) && !self.files(f.name).is_empty()
        });
        if has_files {
            Payload::Multipart(self.build_multipart(fields))
        } else {
            Payload::Json(Value::Object(self.build_json(fields)))
        }
    }

    fn build_json(&self, fields: &[FieldDef]) -> Map<String, Value> {
        let mut map = Map::new();
        for field in fields {
            if !self.0.contains_key(field.name) {
                continue;
            }
            let value = match field.kind {
                FieldKind::File | FieldKind::Files => continue,
                FieldKind::Flag => Value::Bool(self.flag(field.name)),
                FieldKind::List => Value::Array(
                    split_list(self.text(field.name))
                        .into_iter()
                        .map(Value::String)
                        .collect(),
                ),
                FieldKind::Rows(columns) => Value::Array(
                    self.rows(field.name)
                        .iter()
                        .map(|row| Value::Object(row_to_json(row, columns)))
                        .collect(),
                ),
                kind => scalar_to_json(kind, self.text(field.name)),
            };
            map.insert(field.name.to_string(), value);
        }
        map
    }

    fn build_multipart(&self, fields: &[FieldDef]) -> MultipartBody {
        let mut body = MultipartBody::new();
        for field in fields {
            if !self.0.contains_key(field.name) {
                continue;
            }
            match field.kind {
                FieldKind::File => {
                    if let Some(upload) = self.files(field.name).first() {
                        body = body.file(Upload {
                            field: field.name.to_string(),
                            ..upload.clone()
                        });
                    }
                }
                FieldKind::Files => {
                    for upload in self.files(field.name) {
                        body = body.file(Upload {
                            field: format!("{}[]", field.name),
                            ..upload.clone()
                        });
                    }
                }
                FieldKind::Flag => {
                    body = body.text(field.name, if self.flag(field.name) { "1" } else { "0" });
                }
                FieldKind::List => {
                    for item in split_list(self.text(field.name)) {
                        body = body.text(format!("{}[]", field.name), item);
                    }
                }
                FieldKind::Rows(columns) => {
                    for (i, row) in self.rows(field.name).iter().enumerate() {
                        for column in columns {
                            let raw = row.get(column.name).map(String::as_str).unwrap_or_default();
                            body = body.text(
                                format!("{}[{}][{}]", field.name, i, column.name),
                                scalar_to_text(column.kind, raw),
                            );
                        }
                    }
                }
                kind => {
                    body = body.text(field.name, scalar_to_text(kind, self.text(field.name)));
                }
            }
        }
        body
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

fn scalar_to_json(kind: FieldKind, raw: &str) -> Value {
    let raw = raw.trim();
    match kind {
        FieldKind::Number => parse_number(raw).map_or(Value::Null, number_to_json),
        _ if raw.is_empty() => Value::Null,
        _ => Value::String(raw.to_string()),
    }
}

fn scalar_to_text(kind: FieldKind, raw: &str) -> String {
    let raw = raw.trim();
    match kind {
        FieldKind::Number => parse_number(raw).map_or_else(|| raw.to_string(), format_number),
        _ => raw.to_string(),
    }
}

fn row_to_json(row: &Row, columns: &[FieldDef]) -> Map<String, Value> {
    columns
        .iter()
        .map(|column| {
            let raw = row.get(column.name).map(String::as_str).unwrap_or_default();
            (column.name.to_string(), scalar_to_json(column.kind, raw))
        })
        .collect()
}

/// Number as a form would show it: no trailing `.0`
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

pub(crate) fn opt_text(value: Option<&str>) -> FieldValue {
    FieldValue::Text(value.unwrap_or_default().to_string())
}

pub(crate) fn opt_number(value: Option<f64>) -> FieldValue {
    FieldValue::Text(value.map(format_number).unwrap_or_default())
}

// ============================================================================
// Spec and controller
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Update { id: i64 },
}

/// Per-entity part of a modal
pub trait FormSpec: Send + Sync {
    type Record: Listable + DeserializeOwned + Send;

    fn fields(&self) -> &'static [FieldDef];

    /// Values a fresh create form starts with
    fn defaults(&self) -> FormValues {
        FormValues::new()
    }

    /// Values an update form starts with
    fn values_from(&self, record: &Self::Record) -> FormValues;

    fn validate(&self, values: &FormValues, mode: ModalMode) -> FieldErrors;

    /// Derived fields after `key` changed
    fn on_change(&self, _values: &mut FormValues, _key: &str) {}

    fn payload(&self, values: &FormValues, _mode: ModalMode) -> Payload {
        values.build_payload(self.fields())
    }

    fn create_path(&self) -> String {
        <Self::Record as Listable>::ENDPOINT.collection.to_string()
    }

    fn update_path(&self, id: i64) -> String {
        <Self::Record as Listable>::ENDPOINT.item(id)
    }
}

/// Result of one submit
#[derive(Debug)]
pub enum SubmitOutcome<R> {
    /// Server accepted; its copy of the record
    Saved(R),
    /// Local validation failed; nothing was sent
    Invalid,
    /// A submit is already running
    Busy,
    /// Server rejected specific fields; they are in `errors()`
    Rejected,
    /// Anything else; the user saw a generic toast
    Failed(ClientError),
}

impl<R> SubmitOutcome<R> {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    pub fn into_saved(self) -> Option<R> {
        match self {
            Self::Saved(record) => Some(record),
            _ => None,
        }
    }
}

pub struct ModalForm<S: FormSpec> {
    spec: S,
    mode: ModalMode,
    values: FormValues,
    errors: FieldErrors,
    submitting: bool,
    open: bool,
}

impl<S: FormSpec> ModalForm<S> {
    pub fn create(spec: S) -> Self {
        let values = spec.defaults();
        Self {
            spec,
            mode: ModalMode::Create,
            values,
            errors: FieldErrors::new(),
            submitting: false,
            open: true,
        }
    }

    pub fn update(spec: S, record: &S::Record) -> Self {
        let values = spec.values_from(record);
        Self {
            spec,
            mode: ModalMode::Update { id: record.id() },
            values,
            errors: FieldErrors::new(),
            submitting: false,
            open: true,
        }
    }

    pub fn spec(&self) -> &S {
        &self.spec
    }

    pub fn mode(&self) -> ModalMode {
        self.mode
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Change a value. Clears that field's error without re-validating.
    pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) {
        self.values.set(key, value);
        self.errors.clear_field(key);
        self.spec.on_change(&mut self.values, key);
    }

    /// Change one cell of a repeating group
    pub fn set_row_cell(&mut self, key: &str, index: usize, column: &str, value: impl Into<String>) {
        self.values.set_row_cell(key, index, column, value);
        self.errors.clear_field(&format!("{key}.{index}.{column}"));
        self.errors.clear_field(key);
        self.spec.on_change(&mut self.values, key);
    }

    pub fn remove_row(&mut self, key: &str, index: usize) {
        if self.values.remove_row(key, index).is_some() {
            self.spec.on_change(&mut self.values, key);
        }
    }

    pub fn push_file(&mut self, key: &str, upload: Upload) {
        self.values.push_file(key, upload);
        self.errors.clear_field(key);
        self.spec.on_change(&mut self.values, key);
    }

    /// Run the local rules into `errors()`; true when clean
    pub fn validate(&mut self) -> bool {
        self.errors = self.spec.validate(&self.values, self.mode);
        self.errors.is_empty()
    }

    pub async fn submit<C>(&mut self, client: &C, notifier: &dyn Notifier) -> SubmitOutcome<S::Record>
    where
        C: HttpClient + ?Sized,
    {
        if self.submitting {
            return SubmitOutcome::Busy;
        }
        let noun = <S::Record as Listable>::NOUN;

        if !self.validate() {
            tracing::debug!(resource = noun, errors = ?self.errors, "validation failed");
            notifier.error(FIX_FIELDS_MESSAGE);
            return SubmitOutcome::Invalid;
        }

        self.submitting = true;
        let payload = self.spec.payload(&self.values, self.mode);
        let request = match self.mode {
            ModalMode::Create => ApiRequest::post(self.spec.create_path(), payload),
            ModalMode::Update { id } => ApiRequest::update(self.spec.update_path(id), payload),
        };
        let result = client
            .execute(request)
            .await
            .and_then(decode_record::<S::Record>);
        let outcome = self.finish(result, notifier);
        self.submitting = false;
        outcome
    }

    fn finish(
        &mut self,
        result: Result<S::Record, ClientError>,
        notifier: &dyn Notifier,
    ) -> SubmitOutcome<S::Record> {
        let noun = <S::Record as Listable>::NOUN;
        match result {
            Ok(record) => {
                tracing::info!(resource = noun, id = record.id(), mode = ?self.mode, "saved");
                match self.mode {
                    ModalMode::Create => {
                        notifier.success(&format!("{noun} created successfully"));
                        self.values = self.spec.defaults();
                        self.errors.clear();
                    }
                    ModalMode::Update { .. } => {
                        notifier.success(&format!("{noun} updated successfully"));
                        self.open = false;
                    }
                }
                SubmitOutcome::Saved(record)
            }
            Err(e) => match e.field_errors() {
                Some(server_errors) => {
                    tracing::debug!(resource = noun, errors = ?server_errors, "server rejected fields");
                    for (field, message) in server_errors.iter() {
                        self.errors.set(field, message);
                    }
                    notifier.error(FIX_FIELDS_MESSAGE);
                    SubmitOutcome::Rejected
                }
                None => {
                    tracing::error!(resource = noun, error = %e, "save failed");
                    notifier.error(&format!(
                        "Failed to save {}. Please try again.",
                        noun.to_lowercase()
                    ));
                    SubmitOutcome::Failed(e)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use lagoon_client::ClientResult;
    use serde_json::json;

    use shared::models::Discount;

    use crate::core::{RecordingNotifier, ToastKind};

    /// Replays one canned answer and remembers what was sent
    struct FakeClient {
        answer: Mutex<Option<ClientResult<Value>>>,
        sent: Mutex<Vec<ApiRequest>>,
    }

    impl FakeClient {
        fn answering(answer: ClientResult<Value>) -> Self {
            Self {
                answer: Mutex::new(Some(answer)),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<ApiRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpClient for FakeClient {
        async fn execute(&self, request: ApiRequest) -> ClientResult<Value> {
            self.sent.lock().unwrap().push(request);
            self.answer
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(Value::Null))
        }
    }

    fn discount_json(id: i64, name: &str) -> Value {
        json!({
            "id": id, "name": name, "type": "percentage", "value": "10.00",
            "start_date": "2024-06-01", "end_date": "2024-06-30", "status": "active"
        })
    }

    fn filled_discount_form() -> ModalForm<DiscountForm> {
        let mut form = ModalForm::create(DiscountForm);
        form.set("name", "June promo");
        form.set("value", "10");
        form.set("start_date", "2024-06-01");
        form.set("end_date", "2024-06-30");
        form
    }

    #[test]
    fn test_set_clears_only_that_error() {
        let mut form = ModalForm::create(DiscountForm);
        assert!(!form.validate());
        assert!(form.errors().contains("name"));
        assert!(form.errors().contains("start_date"));

        form.set("name", "x");
        assert!(!form.errors().contains("name"));
        assert!(form.errors().contains("start_date"));

        // No re-validation on change
        form.set("value", "500");
        assert!(!form.errors().contains("value"));
    }

    #[tokio::test]
    async fn test_invalid_sends_nothing() {
        let client = FakeClient::answering(Ok(discount_json(1, "x")));
        let notifier = RecordingNotifier::new();
        let mut form = filled_discount_form();
        form.set("value", "101");

        let outcome = form.submit(&client, &notifier).await;
        assert!(matches!(outcome, SubmitOutcome::Invalid));
        assert!(form.errors().contains("value"));
        assert!(client.sent().is_empty());
        assert_eq!(notifier.last().map(|t| t.message), Some(FIX_FIELDS_MESSAGE.to_string()));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_create_posts_and_resets() {
        let client = FakeClient::answering(Ok(json!({ "data": discount_json(41, "June promo") })));
        let notifier = RecordingNotifier::new();
        let mut form = filled_discount_form();

        let saved = form.submit(&client, &notifier).await.into_saved().unwrap();
        assert_eq!(saved.id, 41);

        let sent = client.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].path, "/api/discounts");
        assert_eq!(sent[0].method.as_str(), "POST");
        assert!(sent[0].method_override.is_none());

        assert_eq!(form.values(), &DiscountForm.defaults());
        assert!(form.is_open());
        assert_eq!(notifier.count(ToastKind::Success), 1);
    }

    #[tokio::test]
    async fn test_update_spoofs_put_and_closes() {
        let record: Discount = serde_json::from_value(discount_json(5, "Old")).unwrap();
        let client = FakeClient::answering(Ok(discount_json(5, "New")));
        let notifier = RecordingNotifier::new();
        let mut form = ModalForm::update(DiscountForm, &record);
        assert_eq!(form.mode(), ModalMode::Update { id: 5 });
        form.set("name", "New");

        let saved = form.submit(&client, &notifier).await.into_saved().unwrap();
        assert_eq!(saved.name, "New");
        let sent = client.sent();
        assert_eq!(sent[0].path, "/api/discounts/5");
        assert_eq!(sent[0].method_override, Some(lagoon_client::MethodOverride::Put));
        assert!(!form.is_open());
    }

    #[tokio::test]
    async fn test_server_field_errors_merge() {
        let mut server = HashMap::new();
        server.insert("name".to_string(), vec!["required".to_string()]);
        let client = FakeClient::answering(Err(ClientError::Validation {
            message: "The given data was invalid.".into(),
            errors: server,
        }));
        let notifier = RecordingNotifier::new();
        let mut form = filled_discount_form();

        let outcome = form.submit(&client, &notifier).await;
        assert!(matches!(outcome, SubmitOutcome::Rejected));
        assert_eq!(form.errors().get("name"), Some("required"));
        assert!(!form.is_submitting());
        assert_eq!(form.values().text("name"), "June promo");
    }

    #[tokio::test]
    async fn test_other_failure_is_generic() {
        let client = FakeClient::answering(Err(ClientError::Internal("HTTP 500: boom".into())));
        let notifier = RecordingNotifier::new();
        let mut form = filled_discount_form();

        let outcome = form.submit(&client, &notifier).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(form.errors().is_empty());
        let toast = notifier.last().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Failed to save discount. Please try again.");
        assert!(!toast.message.contains("boom"));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_validation_without_fields_is_generic() {
        let client = FakeClient::answering(Err(ClientError::Validation {
            message: "Discount code already redeemed".into(),
            errors: HashMap::new(),
        }));
        let notifier = RecordingNotifier::new();
        let mut form = filled_discount_form();

        let outcome = form.submit(&client, &notifier).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(ClientError::Validation { .. })));
        assert!(form.errors().is_empty());
        assert_eq!(
            notifier.last().map(|t| t.message),
            Some("Failed to save discount. Please try again.".to_string())
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_build_payload_coerces_values() {
        static FIELDS: &[FieldDef] = &[
            FieldDef::required("name", "Name", FieldKind::Text),
            FieldDef::optional("price", "Price", FieldKind::Number),
            FieldDef::optional("ratio", "Ratio", FieldKind::Number),
            FieldDef::optional("note", "Note", FieldKind::Text),
            FieldDef::optional("senior", "Senior", FieldKind::Flag),
            FieldDef::optional("tags", "Tags", FieldKind::List),
            FieldDef::optional("skipped", "Skipped", FieldKind::Text),
        ];
        let mut values = FormValues::new();
        values.set("name", "  Towel ");
        values.set("price", "1,200");
        values.set("ratio", "0.5");
        values.set("note", "");
        values.set("senior", true);
        values.set("tags", "a, b,, c");

        let Payload::Json(body) = values.build_payload(FIELDS) else {
            panic!("expected json");
        };
        assert_eq!(
            body,
            json!({
                "name": "Towel", "price": 1200, "ratio": 0.5, "note": null,
                "senior": true, "tags": ["a", "b", "c"]
            })
        );
    }
}
