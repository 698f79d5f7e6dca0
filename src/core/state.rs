//! Application state held by the caller and advanced through pure transitions.

use serde::{Deserialize, Serialize};

use super::filter::{filter_by_period, set_default_period, PeriodRange};
use super::period::PeriodType;
use crate::domain::{
    Budget, BudgetItem, CustomServiceCategories, CustomServiceItem, FinanceRecord,
    ServiceCategory, MAX_ITEMS_PER_CATEGORY,
};

/// Snapshot of records, budget, and the user's current selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceState {
    pub records: Vec<FinanceRecord>,
    pub budget: Budget,
    pub period_type: PeriodType,
    pub range: PeriodRange,
    pub selected_budget_period: String,
    pub editing_record: Option<String>,
    /// Service lines being edited for the record form.
    pub custom_service: CustomServiceCategories,
    /// Service lines being edited for the budget form.
    pub budget_custom_service: CustomServiceCategories,
    pub error: Option<String>,
}

/// One user-level mutation of [`FinanceState`].
#[derive(Debug, Clone, PartialEq)]
pub enum FinanceAction {
    SetRecords(Vec<FinanceRecord>),
    AddRecord(FinanceRecord),
    UpdateRecord(FinanceRecord),
    DeleteRecord(String),
    SetBudget(Budget),
    UpdateBudgetItem { key: String, item: BudgetItem },
    SetPeriodType(PeriodType),
    SetPeriodRange(PeriodRange),
    SetBudgetPeriod(String),
    SetEditingRecord(Option<String>),
    SetCustomService(CustomServiceCategories),
    SetBudgetCustomService(CustomServiceCategories),
    AddCustomService { category: ServiceCategory, item: CustomServiceItem },
    RemoveCustomService { category: ServiceCategory, index: usize },
    AddBudgetCustomService { category: ServiceCategory, item: CustomServiceItem },
    RemoveBudgetCustomService { category: ServiceCategory, index: usize },
    SetError(Option<String>),
    ClearAllData,
}

impl FinanceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action and returns the next state.
    pub fn apply(mut self, action: FinanceAction) -> FinanceState {
        match action {
            FinanceAction::SetRecords(records) => self.records = records,
            FinanceAction::AddRecord(record) => self.records.push(record),
            FinanceAction::UpdateRecord(record) => {
                if let Some(slot) = self.records.iter_mut().find(|r| r.id == record.id) {
                    *slot = record;
                }
            }
            FinanceAction::DeleteRecord(id) => self.records.retain(|record| record.id != id),
            FinanceAction::SetBudget(budget) => self.budget = budget,
            FinanceAction::UpdateBudgetItem { key, item } => {
                self.budget.upsert(key, item);
            }
            FinanceAction::SetPeriodType(period_type) => self.period_type = period_type,
            FinanceAction::SetPeriodRange(range) => self.range = range,
            FinanceAction::SetBudgetPeriod(period) => self.selected_budget_period = period,
            FinanceAction::SetEditingRecord(id) => self.editing_record = id,
            FinanceAction::SetCustomService(services) => self.custom_service = services,
            FinanceAction::SetBudgetCustomService(services) => {
                self.budget_custom_service = services
            }
            FinanceAction::AddCustomService { category, item } => {
                push_capped(&mut self.custom_service, category, item)
            }
            FinanceAction::RemoveCustomService { category, index } => {
                remove_at(&mut self.custom_service, category, index)
            }
            FinanceAction::AddBudgetCustomService { category, item } => {
                push_capped(&mut self.budget_custom_service, category, item)
            }
            FinanceAction::RemoveBudgetCustomService { category, index } => {
                remove_at(&mut self.budget_custom_service, category, index)
            }
            FinanceAction::SetError(error) => self.error = error,
            FinanceAction::ClearAllData => return FinanceState::default(),
        }
        self
    }

    /// In-place variant of [`FinanceState::apply`] for long-lived owners.
    pub fn dispatch(&mut self, action: FinanceAction) {
        let current = std::mem::take(self);
        *self = current.apply(action);
    }

    pub fn record(&self, id: &str) -> Option<&FinanceRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// The record currently open in the editor, if it still exists.
    pub fn editing(&self) -> Option<&FinanceRecord> {
        self.editing_record.as_deref().and_then(|id| self.record(id))
    }

    /// Records inside the selected range under the selected period type.
    pub fn filtered_records(&self) -> Vec<&FinanceRecord> {
        filter_by_period(&self.records, self.period_type, &self.range)
    }

    /// Fills in the default range when records exist but a bound is unset.
    pub fn ensure_default_period(&mut self) {
        if self.range.is_set() {
            return;
        }
        if let Some(range) = set_default_period(&self.records, self.period_type) {
            self.range = range;
        }
    }
}

fn push_capped(
    services: &mut CustomServiceCategories,
    category: ServiceCategory,
    item: CustomServiceItem,
) {
    let items = services.items_mut(category);
    if items.len() < MAX_ITEMS_PER_CATEGORY {
        items.push(item);
    }
}

fn remove_at(services: &mut CustomServiceCategories, category: ServiceCategory, index: usize) {
    let items = services.items_mut(category);
    if index < items.len() {
        items.remove(index);
    }
}
