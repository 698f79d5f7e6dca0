use serde::{Deserialize, Serialize};

use super::totals::{calculate_totals, margin};
use crate::domain::common::coerce;
use crate::domain::FinanceRecord;

/// Whole-portfolio snapshot over an arbitrary record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub gross_profit: f64,
    pub net_profit: f64,
    /// Pooled ratio of total gross profit to total income.
    pub gross_margin: f64,
    pub net_margin: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub avg_net_profit: f64,
    pub highest_net: f64,
    pub highest_net_date: String,
    pub lowest_net: f64,
    pub lowest_net_date: String,
    pub assets: f64,
    pub liabilities: f64,
    pub equity: f64,
    pub total_bank_net: f64,
}

struct Extreme<'a> {
    value: f64,
    date: &'a str,
}

/// Reduces `records` into a single snapshot in one pass.
///
/// An empty input yields the all-zero snapshot. The highest and lowest net
/// profit keep the date of the first record that reached them; later ties do
/// not replace it.
pub fn get_analytics<'a, I>(records: I) -> Analytics
where
    I: IntoIterator<Item = &'a FinanceRecord>,
{
    let mut snapshot = Analytics::default();
    let mut count = 0usize;
    let mut total_cogs = 0.0;
    let mut total_other = 0.0;
    let mut highest: Option<Extreme<'a>> = None;
    let mut lowest: Option<Extreme<'a>> = None;

    for record in records {
        let totals = calculate_totals(record);
        count += 1;
        snapshot.total_income += totals.total_income;
        total_cogs += totals.cogs;
        total_other += totals.other_expenses;
        snapshot.gross_profit += totals.gross_profit;
        snapshot.net_profit += totals.net_profit;
        snapshot.assets += coerce(record.assets);
        snapshot.liabilities += coerce(record.liabilities);
        snapshot.equity += coerce(record.equity);
        snapshot.total_bank_net += totals.bank_net;

        if highest
            .as_ref()
            .map_or(true, |current| totals.net_profit > current.value)
        {
            highest = Some(Extreme {
                value: totals.net_profit,
                date: &record.date,
            });
        }
        if lowest
            .as_ref()
            .map_or(true, |current| totals.net_profit < current.value)
        {
            lowest = Some(Extreme {
                value: totals.net_profit,
                date: &record.date,
            });
        }
    }

    if count == 0 {
        return Analytics::default();
    }

    snapshot.gross_margin = margin(snapshot.gross_profit, snapshot.total_income);
    snapshot.net_margin = margin(snapshot.net_profit, snapshot.total_income);
    snapshot.avg_net_profit = snapshot.net_profit / count as f64;
    snapshot.total_expenses = total_cogs + total_other;
    if let Some(extreme) = highest {
        snapshot.highest_net = extreme.value;
        snapshot.highest_net_date = extreme.date.to_string();
    }
    if let Some(extreme) = lowest {
        snapshot.lowest_net = extreme.value;
        snapshot.lowest_net_date = extreme.date.to_string();
    }
    snapshot
}
