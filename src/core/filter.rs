use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::period::PeriodType;
use crate::domain::FinanceRecord;

/// Inclusive bounds expressed as period keys. An empty bound is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRange {
    pub start: String,
    pub end: String,
}

impl PeriodRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Both bounds are present.
    pub fn is_set(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }

    /// Whether `key` lies within the bounds under `period_type` ordering.
    /// Keys that cannot be ordered against a bound are outside.
    pub fn contains(&self, period_type: PeriodType, key: &str) -> bool {
        let after_start = matches!(
            period_type.compare(key, &self.start),
            Some(Ordering::Greater | Ordering::Equal)
        );
        let before_end = matches!(
            period_type.compare(key, &self.end),
            Some(Ordering::Less | Ordering::Equal)
        );
        after_start && before_end
    }
}

/// Keeps the records whose period key falls inside `range`, preserving their
/// order. An unset range selects nothing.
pub fn filter_by_period<'a, I>(
    records: I,
    period_type: PeriodType,
    range: &PeriodRange,
) -> Vec<&'a FinanceRecord>
where
    I: IntoIterator<Item = &'a FinanceRecord>,
{
    if !range.is_set() {
        return Vec::new();
    }
    let selected: Vec<&FinanceRecord> = records
        .into_iter()
        .filter(|record| range.contains(period_type, &period_type.key(&record.date)))
        .collect();
    tracing::debug!(
        period = %period_type,
        start = %range.start,
        end = %range.end,
        selected = selected.len(),
        "filtered records by period"
    );
    selected
}

/// Default bounds spanning the earliest to the latest record date, mapped to
/// `period_type` keys. `None` when there are no records.
pub fn set_default_period(records: &[FinanceRecord], period_type: PeriodType) -> Option<PeriodRange> {
    let earliest = records.iter().map(|record| record.date.as_str()).min()?;
    let latest = records.iter().map(|record| record.date.as_str()).max()?;
    Some(PeriodRange::new(
        period_type.key(earliest),
        period_type.key(latest),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(dates: &[&str]) -> Vec<FinanceRecord> {
        dates
            .iter()
            .enumerate()
            .map(|(idx, date)| FinanceRecord::with_id(format!("r{idx}"), *date))
            .collect()
    }

    fn dates(selected: &[&FinanceRecord]) -> Vec<String> {
        selected.iter().map(|record| record.date.clone()).collect()
    }

    #[test]
    fn single_month_range_selects_that_month() {
        let all = records(&["2024-01", "2024-02", "2024-03", "2024-02"]);
        let selected = filter_by_period(&all, PeriodType::Month, &PeriodRange::new("2024-02", "2024-02"));
        assert_eq!(dates(&selected), vec!["2024-02", "2024-02"]);
        assert_eq!(selected[0].id, "r1");
        assert_eq!(selected[1].id, "r3");
    }

    #[test]
    fn unset_bounds_select_nothing() {
        let all = records(&["2024-01", "2024-02"]);
        assert!(filter_by_period(&all, PeriodType::Month, &PeriodRange::default()).is_empty());
        assert!(filter_by_period(&all, PeriodType::Month, &PeriodRange::new("2024-01", "")).is_empty());
    }

    #[test]
    fn quarter_range_crosses_years() {
        let all = records(&["2023-09", "2023-11", "2024-02", "2024-05"]);
        let selected = filter_by_period(
            &all,
            PeriodType::Quarter,
            &PeriodRange::new("2023-Q4", "2024-Q1"),
        );
        assert_eq!(dates(&selected), vec!["2023-11", "2024-02"]);
    }

    #[test]
    fn quarter_range_with_unreadable_bound_selects_nothing() {
        let all = records(&["2024-02"]);
        let selected = filter_by_period(&all, PeriodType::Quarter, &PeriodRange::new("2024", "2024-Q4"));
        assert!(selected.is_empty());
    }

    #[test]
    fn year_range_is_inclusive() {
        let all = records(&["2022-12", "2023-01", "2024-06", "2025-01"]);
        let selected = filter_by_period(&all, PeriodType::Year, &PeriodRange::new("2023", "2024"));
        assert_eq!(dates(&selected), vec!["2023-01", "2024-06"]);
    }

    #[test]
    fn default_period_spans_min_and_max_dates() {
        let all = records(&["2024-05", "2023-11", "2024-02"]);
        assert_eq!(
            set_default_period(&all, PeriodType::Month),
            Some(PeriodRange::new("2023-11", "2024-05"))
        );
        assert_eq!(
            set_default_period(&all, PeriodType::Quarter),
            Some(PeriodRange::new("2023-Q4", "2024-Q2"))
        );
        assert_eq!(
            set_default_period(&all, PeriodType::Year),
            Some(PeriodRange::new("2023", "2024"))
        );
        assert_eq!(set_default_period(&[], PeriodType::Month), None);
    }
}
