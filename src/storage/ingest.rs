//! Lenient boundary between persisted JSON and typed records.
//!
//! Stored data may be legacy or partially malformed. Individual entries are
//! discarded with a reason instead of failing the whole load.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::core::validation::{number_like, validate_custom_service};
use crate::domain::{generate_record_id, Budget, BudgetItem, FinanceRecord, NumericField};

/// Outcome of reading one stored record.
#[derive(Debug, Clone, PartialEq)]
pub enum Ingested {
    Valid(FinanceRecord),
    Discarded(Discarded),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discarded {
    pub index: usize,
    pub reason: String,
}

/// Records that survived ingest, plus what was dropped and why.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordLoadReport {
    pub records: Vec<FinanceRecord>,
    pub discarded: Vec<Discarded>,
}

impl RecordLoadReport {
    pub fn warnings(&self) -> Vec<String> {
        self.discarded
            .iter()
            .map(|entry| format!("record #{} discarded: {}", entry.index, entry.reason))
            .collect()
    }
}

/// Cleans a stored record array. Anything other than an array yields no
/// records.
pub fn ingest_records(raw: &Value) -> RecordLoadReport {
    let mut report = RecordLoadReport::default();
    let Some(entries) = raw.as_array() else {
        if !raw.is_null() {
            tracing::warn!("stored records are not a list; ignoring them");
        }
        return report;
    };
    for (index, entry) in entries.iter().enumerate() {
        match ingest_record(index, entry) {
            Ingested::Valid(record) => report.records.push(record),
            Ingested::Discarded(discarded) => {
                tracing::warn!(index, reason = %discarded.reason, "discarding stored record");
                report.discarded.push(discarded);
            }
        }
    }
    report
}

/// Reads one stored entry into a record or a discard reason.
pub fn ingest_record(index: usize, raw: &Value) -> Ingested {
    let discard = |reason: String| Ingested::Discarded(Discarded { index, reason });

    let Some(object) = raw.as_object() else {
        return discard("entry is not an object".into());
    };
    let date = match object.get("date") {
        Some(Value::String(date)) => match canonical_date(date) {
            Some(canonical) => canonical,
            None => return discard(format!("unreadable date `{}`", date)),
        },
        _ => return discard("missing date".into()),
    };

    let id = match object.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => generate_record_id(),
    };
    let mut record = FinanceRecord::with_id(id, date);
    for field in NumericField::ALL {
        match object.get(field.key()) {
            None => {}
            Some(Value::Number(number)) => {
                record.set_amount(field, number.as_f64().unwrap_or(0.0));
            }
            Some(_) => return discard(format!("{} is not a number", field.key())),
        }
    }
    record.custom_service = object
        .get("customService")
        .map(validate_custom_service)
        .unwrap_or_default();
    Ingested::Valid(record)
}

/// Cleans a stored budget mapping. Entries that are not objects are dropped;
/// unreadable amounts become 0.
pub fn ingest_budget(raw: &Value) -> Budget {
    let Some(entries) = raw.as_object() else {
        if !raw.is_null() {
            tracing::warn!("stored budget is not a mapping; ignoring it");
        }
        return Budget::new();
    };
    entries
        .iter()
        .filter_map(|(key, value)| match value.as_object() {
            Some(object) => Some((key.clone(), budget_item(object))),
            None => {
                tracing::warn!(period = %key, "discarding stored budget entry");
                None
            }
        })
        .collect()
}

fn budget_item(object: &Map<String, Value>) -> BudgetItem {
    let mut item = BudgetItem::default();
    for field in NumericField::ALL {
        if field.is_bank_movement() {
            continue;
        }
        let value = object.get(field.key()).map(number_like).unwrap_or(0.0);
        item.set_amount(field, if value.is_finite() { value } else { 0.0 });
    }
    item.custom_service = object
        .get("customService")
        .map(validate_custom_service)
        .unwrap_or_default();
    item
}

/// Rewrites a stored calendar date into zero-padded `YYYY-MM` or
/// `YYYY-MM-DD` so period keys can slice it by position.
fn canonical_date(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.format("%Y-%m-%d").to_string());
    }
    NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y-%m").to_string())
}
