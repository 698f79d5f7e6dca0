//! Period keys: mapping a `YYYY-MM` anchor to its month, quarter, or year
//! bucket, and ordering those keys.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Granularity used for filtering and grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    #[default]
    Month,
    Quarter,
    Year,
}

impl PeriodType {
    pub const ALL: [PeriodType; 3] = [PeriodType::Month, PeriodType::Quarter, PeriodType::Year];

    /// Maps a record date to the key of the bucket it falls in.
    pub fn key(self, date: &str) -> String {
        match self {
            PeriodType::Month => month_key(date).to_string(),
            PeriodType::Quarter => quarter_key(date),
            PeriodType::Year => year_key(date).to_string(),
        }
    }

    /// Orders two keys of this period type. `None` means at least one side
    /// could not be read as a key, so the pair is unordered.
    pub fn compare(self, a: &str, b: &str) -> Option<Ordering> {
        match self {
            PeriodType::Month | PeriodType::Year => Some(a.cmp(b)),
            PeriodType::Quarter => compare_quarter(a, b),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PeriodType::Month => "month",
            PeriodType::Quarter => "quarter",
            PeriodType::Year => "year",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(PeriodType::Month),
            "quarter" => Ok(PeriodType::Quarter),
            "year" => Ok(PeriodType::Year),
            other => Err(ValidationError::UnknownPeriodType(other.to_string())),
        }
    }
}

/// First seven characters of the date (`YYYY-MM`).
pub fn month_key(date: &str) -> &str {
    char_prefix(date, 7)
}

/// First four characters of the date (`YYYY`).
pub fn year_key(date: &str) -> &str {
    char_prefix(date, 4)
}

/// `"{year}-Q{n}"` with `n = floor((month - 1) / 3) + 1`.
///
/// An unreadable month produces a bare `"{year}-Q"`, which no comparator
/// accepts, so such records never fall inside a range but still get their
/// own bucket when grouping.
pub fn quarter_key(date: &str) -> String {
    let mut parts = date.split('-');
    let year = parts.next().unwrap_or_default();
    match parts.next().and_then(|month| month.trim().parse::<i64>().ok()) {
        Some(month) => format!("{}-Q{}", year, (month - 1).div_euclid(3) + 1),
        None => format!("{}-Q", year),
    }
}

/// Splits a quarter key back into its numeric `(year, quarter)` pair.
pub fn parse_quarter_key(key: &str) -> Option<(i64, i64)> {
    let (year, quarter) = key.split_once("-Q")?;
    Some((year.trim().parse().ok()?, quarter.trim().parse().ok()?))
}

/// Numeric comparison of quarter keys: year first, then quarter.
///
/// Plain string comparison would misorder quarters that are not
/// single-digit and years that are not four digits wide.
pub fn compare_quarter(a: &str, b: &str) -> Option<Ordering> {
    let (a_year, a_quarter) = parse_quarter_key(a)?;
    let (b_year, b_quarter) = parse_quarter_key(b)?;
    Some(a_year.cmp(&b_year).then(a_quarter.cmp(&b_quarter)))
}

fn char_prefix(value: &str, len: usize) -> &str {
    match value.char_indices().nth(len) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
