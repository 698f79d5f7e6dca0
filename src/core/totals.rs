use serde::{Deserialize, Serialize};

use crate::domain::common::coerce;
use crate::domain::{FinancialFigures, NumericField};

/// Per-record derived figures. Recomputed on every call, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedTotals {
    pub total_income: f64,
    pub cogs: f64,
    pub gross_profit: f64,
    pub other_expenses: f64,
    pub net_profit: f64,
    pub gross_margin: f64,
    pub net_margin: f64,
    pub bank_net: f64,
}

impl CalculatedTotals {
    /// Cost of goods sold plus operating expenses.
    pub fn expenses(&self) -> f64 {
        self.cogs + self.other_expenses
    }
}

/// Derives income, profit, margins, and bank net from raw figures.
///
/// Margins are percentages of total income and are 0 whenever total income is
/// exactly 0. No rounding happens here.
pub fn calculate_totals<F: FinancialFigures + ?Sized>(figures: &F) -> CalculatedTotals {
    let amount = |field: NumericField| coerce(figures.amount(field));

    let total_income = figures.custom_service().total()
        + amount(NumericField::IncomeInterest)
        + amount(NumericField::IncomeOther);
    let cogs = amount(NumericField::ExpenseCogs);
    let other_expenses: f64 = NumericField::OPERATING_EXPENSES
        .iter()
        .map(|field| amount(*field))
        .sum();

    let gross_profit = total_income - cogs;
    let net_profit = gross_profit - other_expenses;

    CalculatedTotals {
        total_income,
        cogs,
        gross_profit,
        other_expenses,
        net_profit,
        gross_margin: margin(gross_profit, total_income),
        net_margin: margin(net_profit, total_income),
        bank_net: amount(NumericField::BankIn) - amount(NumericField::BankOut),
    }
}

/// `part / total * 100`, guarded against a zero denominator.
pub(crate) fn margin(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}
