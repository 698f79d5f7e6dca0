use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::period::PeriodType;
use super::totals::calculate_totals;
use crate::domain::common::coerce;
use crate::domain::FinanceRecord;

/// Aggregates of every record sharing one period key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedPeriod {
    pub period: String,
    pub assets: f64,
    pub liabilities: f64,
    pub equity: f64,
    pub income: f64,
    pub expenses: f64,
    pub net_profit: f64,
    /// Mean of the per-record gross margins, not a pooled ratio.
    pub gross_margin: f64,
    pub bank_net: f64,
    pub records: Vec<FinanceRecord>,
}

impl GroupedPeriod {
    fn from_bucket(period: String, records: Vec<&FinanceRecord>) -> Self {
        let mut group = GroupedPeriod {
            period,
            assets: 0.0,
            liabilities: 0.0,
            equity: 0.0,
            income: 0.0,
            expenses: 0.0,
            net_profit: 0.0,
            gross_margin: 0.0,
            bank_net: 0.0,
            records: Vec::with_capacity(records.len()),
        };
        let mut margin_sum = 0.0;
        for record in &records {
            let totals = calculate_totals(*record);
            group.assets += coerce(record.assets);
            group.liabilities += coerce(record.liabilities);
            group.equity += coerce(record.equity);
            group.income += totals.total_income;
            group.expenses += totals.expenses();
            group.net_profit += totals.net_profit;
            group.bank_net += totals.bank_net;
            margin_sum += totals.gross_margin;
        }
        // Buckets are never empty: a key only exists once a record produced it.
        group.gross_margin = margin_sum / records.len() as f64;
        group.records = records.into_iter().cloned().collect();
        group
    }
}

/// Buckets records by period key and reduces each bucket.
///
/// Buckets come back in the order their key was first seen; callers that
/// want chronological output sort the result themselves.
pub fn group_by_period<'a, I>(records: I, period_type: PeriodType) -> Vec<GroupedPeriod>
where
    I: IntoIterator<Item = &'a FinanceRecord>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<(String, Vec<&FinanceRecord>)> = Vec::new();

    for record in records {
        let key = period_type.key(&record.date);
        match index.get(&key) {
            Some(&slot) => buckets[slot].1.push(record),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push((key, vec![record]));
            }
        }
    }

    tracing::debug!(period = %period_type, buckets = buckets.len(), "grouped records");

    buckets
        .into_iter()
        .map(|(period, members)| GroupedPeriod::from_bucket(period, members))
        .collect()
}
