use serde::{Deserialize, Serialize};

use super::custom_service::CustomServiceCategories;

/// The scalar money fields shared by actual records and budget lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    IncomeInterest,
    IncomeOther,
    ExpenseCogs,
    ExpenseRent,
    ExpenseUtilities,
    ExpenseSalaries,
    ExpenseMarketing,
    ExpenseOther,
    Assets,
    Liabilities,
    Equity,
    BankIn,
    BankOut,
}

impl NumericField {
    /// Every field in the order the input forms present them.
    pub const ALL: [NumericField; 13] = [
        NumericField::IncomeInterest,
        NumericField::IncomeOther,
        NumericField::ExpenseCogs,
        NumericField::ExpenseRent,
        NumericField::ExpenseUtilities,
        NumericField::ExpenseSalaries,
        NumericField::ExpenseMarketing,
        NumericField::ExpenseOther,
        NumericField::Assets,
        NumericField::Liabilities,
        NumericField::Equity,
        NumericField::BankIn,
        NumericField::BankOut,
    ];

    /// Expense lines other than cost of goods sold.
    pub const OPERATING_EXPENSES: [NumericField; 5] = [
        NumericField::ExpenseRent,
        NumericField::ExpenseUtilities,
        NumericField::ExpenseSalaries,
        NumericField::ExpenseMarketing,
        NumericField::ExpenseOther,
    ];

    /// Persisted key of the field.
    pub fn key(self) -> &'static str {
        match self {
            NumericField::IncomeInterest => "income_interest",
            NumericField::IncomeOther => "income_other",
            NumericField::ExpenseCogs => "expense_cogs",
            NumericField::ExpenseRent => "expense_rent",
            NumericField::ExpenseUtilities => "expense_utilities",
            NumericField::ExpenseSalaries => "expense_salaries",
            NumericField::ExpenseMarketing => "expense_marketing",
            NumericField::ExpenseOther => "expense_other",
            NumericField::Assets => "assets",
            NumericField::Liabilities => "liabilities",
            NumericField::Equity => "equity",
            NumericField::BankIn => "bank_in",
            NumericField::BankOut => "bank_out",
        }
    }

    /// Bank movements only exist on actual records, never on budget lines.
    pub fn is_bank_movement(self) -> bool {
        matches!(self, NumericField::BankIn | NumericField::BankOut)
    }
}

/// Read access to the figures the totals calculator consumes.
pub trait FinancialFigures {
    fn amount(&self, field: NumericField) -> f64;
    fn custom_service(&self) -> &CustomServiceCategories;
}

/// Treats NaN as an absent value.
pub(crate) fn coerce(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}
