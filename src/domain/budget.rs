use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{FinancialFigures, NumericField};
use super::custom_service::CustomServiceCategories;

/// Planned figures for one month. Budgets carry no bank movements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    #[serde(default)]
    pub income_interest: f64,
    #[serde(default)]
    pub income_other: f64,
    #[serde(default)]
    pub expense_cogs: f64,
    #[serde(default)]
    pub expense_rent: f64,
    #[serde(default)]
    pub expense_utilities: f64,
    #[serde(default)]
    pub expense_salaries: f64,
    #[serde(default)]
    pub expense_marketing: f64,
    #[serde(default)]
    pub expense_other: f64,
    #[serde(default)]
    pub assets: f64,
    #[serde(default)]
    pub liabilities: f64,
    #[serde(default)]
    pub equity: f64,
    #[serde(rename = "customService", default)]
    pub custom_service: CustomServiceCategories,
}

impl BudgetItem {
    /// Sets a planned amount. Bank movement fields are ignored.
    pub fn set_amount(&mut self, field: NumericField, value: f64) {
        let slot = match field {
            NumericField::IncomeInterest => &mut self.income_interest,
            NumericField::IncomeOther => &mut self.income_other,
            NumericField::ExpenseCogs => &mut self.expense_cogs,
            NumericField::ExpenseRent => &mut self.expense_rent,
            NumericField::ExpenseUtilities => &mut self.expense_utilities,
            NumericField::ExpenseSalaries => &mut self.expense_salaries,
            NumericField::ExpenseMarketing => &mut self.expense_marketing,
            NumericField::ExpenseOther => &mut self.expense_other,
            NumericField::Assets => &mut self.assets,
            NumericField::Liabilities => &mut self.liabilities,
            NumericField::Equity => &mut self.equity,
            NumericField::BankIn | NumericField::BankOut => return,
        };
        *slot = value;
    }

    pub fn with_amount(mut self, field: NumericField, value: f64) -> Self {
        self.set_amount(field, value);
        self
    }
}

impl FinancialFigures for BudgetItem {
    fn amount(&self, field: NumericField) -> f64 {
        match field {
            NumericField::IncomeInterest => self.income_interest,
            NumericField::IncomeOther => self.income_other,
            NumericField::ExpenseCogs => self.expense_cogs,
            NumericField::ExpenseRent => self.expense_rent,
            NumericField::ExpenseUtilities => self.expense_utilities,
            NumericField::ExpenseSalaries => self.expense_salaries,
            NumericField::ExpenseMarketing => self.expense_marketing,
            NumericField::ExpenseOther => self.expense_other,
            NumericField::Assets => self.assets,
            NumericField::Liabilities => self.liabilities,
            NumericField::Equity => self.equity,
            NumericField::BankIn | NumericField::BankOut => 0.0,
        }
    }

    fn custom_service(&self) -> &CustomServiceCategories {
        &self.custom_service
    }
}

/// Budget lines keyed by `YYYY-MM`; one line per period, last write wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budget {
    items: BTreeMap<String, BudgetItem>,
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the line for `period`, returning the previous one.
    pub fn upsert(&mut self, period: impl Into<String>, item: BudgetItem) -> Option<BudgetItem> {
        self.items.insert(period.into(), item)
    }

    pub fn get(&self, period: &str) -> Option<&BudgetItem> {
        self.items.get(period)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(String, BudgetItem)> for Budget {
    fn from_iter<T: IntoIterator<Item = (String, BudgetItem)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
