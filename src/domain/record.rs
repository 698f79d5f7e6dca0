use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{FinancialFigures, NumericField};
use super::custom_service::CustomServiceCategories;

/// One month of actual financial figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    pub id: String,
    /// Period anchor in `YYYY-MM` form.
    pub date: String,
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
    #[serde(default)]
    pub bank_in: f64,
    #[serde(default)]
    pub bank_out: f64,
    #[serde(rename = "customService", default)]
    pub custom_service: CustomServiceCategories,
}

impl FinanceRecord {
    /// Creates an all-zero record for `date` with a freshly generated id.
    pub fn new(date: impl Into<String>) -> Self {
        Self::with_id(generate_record_id(), date)
    }

    pub fn with_id(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            income_interest: 0.0,
            income_other: 0.0,
            expense_cogs: 0.0,
            expense_rent: 0.0,
            expense_utilities: 0.0,
            expense_salaries: 0.0,
            expense_marketing: 0.0,
            expense_other: 0.0,
            assets: 0.0,
            liabilities: 0.0,
            equity: 0.0,
            bank_in: 0.0,
            bank_out: 0.0,
            custom_service: CustomServiceCategories::default(),
        }
    }

    pub fn with_amount(mut self, field: NumericField, value: f64) -> Self {
        self.set_amount(field, value);
        self
    }

    pub fn with_custom_service(mut self, custom_service: CustomServiceCategories) -> Self {
        self.custom_service = custom_service;
        self
    }

    pub fn set_amount(&mut self, field: NumericField, value: f64) {
        *self.amount_mut(field) = value;
    }

    fn amount_mut(&mut self, field: NumericField) -> &mut f64 {
        match field {
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
            NumericField::BankIn => &mut self.bank_in,
            NumericField::BankOut => &mut self.bank_out,
        }
    }
}

impl FinancialFigures for FinanceRecord {
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
            NumericField::BankIn => self.bank_in,
            NumericField::BankOut => self.bank_out,
        }
    }

    fn custom_service(&self) -> &CustomServiceCategories {
        &self.custom_service
    }
}

/// Generates an opaque record identifier.
pub fn generate_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Unvalidated form input for a record. Amounts are kept as the raw text the
/// user typed; absent fields are simply missing from `amounts`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDraft {
    pub id: Option<String>,
    pub date: Option<String>,
    pub amounts: BTreeMap<NumericField, String>,
    pub custom_service: CustomServiceCategories,
}

impl RecordDraft {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Self::default()
        }
    }

    pub fn with_amount(mut self, field: NumericField, raw: impl Into<String>) -> Self {
        self.amounts.insert(field, raw.into());
        self
    }

    pub fn with_custom_service(mut self, custom_service: CustomServiceCategories) -> Self {
        self.custom_service = custom_service;
        self
    }

    /// Prefills a draft from an existing record for editing.
    pub fn from_record(record: &FinanceRecord) -> Self {
        let amounts = NumericField::ALL
            .iter()
            .map(|field| (*field, record.amount(*field).to_string()))
            .collect();
        Self {
            id: Some(record.id.clone()),
            date: Some(record.date.clone()),
            amounts,
            custom_service: record.custom_service.clone(),
        }
    }
}
