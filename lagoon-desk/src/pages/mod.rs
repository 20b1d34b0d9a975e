//! List/dashboard pages
//!
//! A page owns one collection in memory. Filtering, search and sorting run
//! over that copy; the API is only touched to load, delete, or reload.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use lagoon_client::api::{self, Endpoint};
use lagoon_client::HttpClient;
use serde::de::DeserializeOwned;
use shared::error::ErrorCode;

use crate::core::{Confirm, DeskError, DeskResult, Notifier};

mod records;
pub mod samples;

/// A record a page can show
pub trait Listable: Clone + Send + Sync {
    /// Where the collection lives
    const ENDPOINT: Endpoint;
    /// Singular display name ("Room", "Booking")
    const NOUN: &'static str;
    /// Fields `sort_value` understands, in menu order
    const SORT_FIELDS: &'static [&'static str];

    fn id(&self) -> i64;

    /// Canonical status string used by the filter; `None` when the record
    /// has no status
    fn status_key(&self) -> Option<String>;

    /// Text the free-text search looks at
    fn search_fields(&self) -> Vec<&str>;

    fn sort_value(&self, field: &str) -> SortValue;

    /// One line for terminal output
    fn display_row(&self) -> String;

    /// How a filter value typed by the user maps onto `status_key`
    fn normalize_status(raw: &str) -> String {
        raw.trim().to_ascii_lowercase()
    }

    /// Demo rows shown when loading fails and the fallback is on
    fn samples() -> Vec<Self> {
        Vec::new()
    }
}

/// Where the rows on screen came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Nothing loaded yet
    #[default]
    Empty,
    Server,
    /// Demo rows; not persisted anywhere
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// `"all"` and blank mean no filter
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(raw.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

/// Comparable cell value. `Missing` sorts below everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Missing,
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl SortValue {
    pub fn text(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => Self::Text(s.to_lowercase()),
            _ => Self::Missing,
        }
    }

    /// Dates arrive as strings; an unparsable one counts as missing
    pub fn date(raw: Option<&str>) -> Self {
        raw.and_then(shared::util::parse_date)
            .map_or(Self::Missing, Self::Date)
    }

    pub fn number(n: f64) -> Self {
        if n.is_nan() { Self::Missing } else { Self::Number(n) }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Number(_) => 1,
            Self::Date(_) => 2,
            Self::Text(_) => 3,
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

pub struct ListPage<R: Listable> {
    records: Vec<R>,
    source: DataSource,
    filter: StatusFilter,
    search: String,
    sort: Option<SortState>,
    sample_fallback: bool,
}

impl<R: Listable> Default for ListPage<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Listable> ListPage<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            source: DataSource::Empty,
            filter: StatusFilter::All,
            search: String::new(),
            sort: None,
            sample_fallback: false,
        }
    }

    pub fn with_sample_fallback(mut self, enabled: bool) -> Self {
        self.sample_fallback = enabled;
        self
    }

    /// Page over rows already in hand
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records,
            source: DataSource::Server,
            ..Self::new()
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    /// Whether the rows reflect persisted server state
    pub fn is_live(&self) -> bool {
        self.source == DataSource::Server
    }

    pub fn find(&self, id: i64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Fetch the collection. On failure the user gets an error toast and,
    /// with the fallback on, the page shows sample rows instead.
    pub async fn load<C>(&mut self, client: &C, notifier: &dyn Notifier) -> DeskResult<DataSource>
    where
        R: DeserializeOwned,
        C: HttpClient + ?Sized,
    {
        match api::list::<R, C>(client, &R::ENDPOINT).await {
            Ok(records) => {
                tracing::debug!(resource = R::NOUN, count = records.len(), "list loaded");
                self.records = records;
                self.source = DataSource::Server;
                Ok(self.source)
            }
            Err(e) => {
                tracing::error!(resource = R::NOUN, error = %e, "failed to load list");
                notifier.error(&format!("Failed to load {} records", R::NOUN.to_lowercase()));
                if self.sample_fallback {
                    self.records = R::samples();
                    self.source = DataSource::Sample;
                    notifier.info("Showing sample data");
                    Ok(self.source)
                } else {
                    Err(e.into())
                }
            }
        }
    }

    /// Re-fetch after a change made elsewhere
    pub async fn reload<C>(&mut self, client: &C, notifier: &dyn Notifier) -> DeskResult<DataSource>
    where
        R: DeserializeOwned,
        C: HttpClient + ?Sized,
    {
        self.load(client, notifier).await
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &StatusFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Same field flips direction; a new field starts ascending
    pub fn sort_by(&mut self, field: &str) {
        self.sort = Some(match self.sort.take() {
            Some(current) if current.field == field => SortState {
                direction: match current.direction {
                    SortDirection::Asc => SortDirection::Desc,
                    SortDirection::Desc => SortDirection::Asc,
                },
                ..current
            },
            _ => SortState {
                field: field.to_string(),
                direction: SortDirection::Asc,
            },
        });
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    fn matches(&self, record: &R) -> bool {
        let status_ok = match &self.filter {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => {
                record.status_key().as_deref() == Some(R::normalize_status(wanted).as_str())
            }
        };
        if !status_ok {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains(&needle))
    }

    /// Filtered, searched and sorted rows
    pub fn visible(&self) -> Vec<&R> {
        let mut rows: Vec<&R> = self.records.iter().filter(|r| self.matches(r)).collect();
        if let Some(sort) = &self.sort {
            rows.sort_by(|a, b| {
                let ord = a
                    .sort_value(&sort.field)
                    .compare(&b.sort_value(&sort.field));
                match sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        rows
    }

    /// Put a saved record in place, or at the top if it is new
    pub fn upsert(&mut self, record: R) {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => *slot = record,
            None => self.records.insert(0, record),
        }
    }

    pub fn remove(&mut self, id: i64) -> Option<R> {
        let idx = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(idx))
    }

    /// Delete after confirmation. `Ok(false)` means the user declined.
    pub async fn delete<C>(
        &mut self,
        id: i64,
        confirm: &dyn Confirm,
        client: &C,
        notifier: &dyn Notifier,
    ) -> DeskResult<bool>
    where
        C: HttpClient + ?Sized,
    {
        if self.source == DataSource::Sample {
            notifier.info("Sample rows cannot be deleted");
            return Err(DeskError::rule(
                ErrorCode::InvalidRequest,
                "sample rows are not persisted",
            ));
        }
        let prompt = format!("Delete this {}?", R::NOUN.to_lowercase());
        if !confirm.confirm(&prompt) {
            tracing::debug!(resource = R::NOUN, id, "delete declined");
            return Ok(false);
        }
        match api::delete(client, &R::ENDPOINT, id).await {
            Ok(()) => {
                self.remove(id);
                tracing::info!(resource = R::NOUN, id, "deleted");
                notifier.success(&format!("{} deleted successfully", R::NOUN));
                Ok(true)
            }
            Err(e) => {
                tracing::error!(resource = R::NOUN, id, error = %e, "delete failed");
                notifier.error(&format!("Failed to delete {}", R::NOUN.to_lowercase()));
                Err(e.into())
            }
        }
    }

    /// Records per status key, for the summary cards
    pub fn status_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for key in self.records.iter().filter_map(R::status_key) {
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_values_order() {
        assert_eq!(SortValue::Missing.compare(&SortValue::number(1.0)), Ordering::Less);
        assert_eq!(SortValue::number(2.0).compare(&SortValue::number(10.0)), Ordering::Less);
        assert_eq!(
            SortValue::date(Some("2024-01-02")).compare(&SortValue::date(Some("2023-12-31"))),
            Ordering::Greater
        );
        assert_eq!(SortValue::date(Some("garbage")), SortValue::Missing);
        assert_eq!(SortValue::text(Some("  ")), SortValue::Missing);
        assert_eq!(
            SortValue::text(Some("alpha")).compare(&SortValue::text(Some("Beta"))),
            Ordering::Less
        );
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!(StatusFilter::parse("All"), StatusFilter::All);
        assert_eq!(StatusFilter::parse(""), StatusFilter::All);
        assert_eq!(StatusFilter::parse("present"), StatusFilter::Only("present".into()));
    }
}
