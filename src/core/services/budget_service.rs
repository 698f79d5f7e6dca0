use crate::core::state::{FinanceAction, FinanceState};
use crate::core::validation::{is_month_key, normalize_custom_service};
use crate::domain::BudgetItem;
use crate::errors::ValidationError;

use super::ServiceResult;

pub struct BudgetService;

impl BudgetService {
    /// Stores `item` as the budget for `period`, replacing any previous line.
    pub fn upsert(state: &mut FinanceState, period: &str, mut item: BudgetItem) -> ServiceResult<()> {
        if !is_month_key(period) {
            return Err(ValidationError::InvalidPeriodKey(period.to_string()).into());
        }
        item.custom_service = normalize_custom_service(item.custom_service);
        tracing::info!(period = %period, "budget item saved");
        state.dispatch(FinanceAction::UpdateBudgetItem {
            key: period.to_string(),
            item,
        });
        Ok(())
    }

    pub fn get<'a>(state: &'a FinanceState, period: &str) -> Option<&'a BudgetItem> {
        state.budget.get(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomServiceItem, NumericField};

    #[test]
    fn upsert_requires_month_keys() {
        let mut state = FinanceState::new();
        let err = BudgetService::upsert(&mut state, "2024-Q1", BudgetItem::default())
            .unwrap_err();
        assert!(err.to_string().contains("2024-Q1"));
        assert!(state.budget.is_empty());
    }

    #[test]
    fn upsert_normalizes_service_lines() {
        let mut state = FinanceState::new();
        let mut item = BudgetItem::default().with_amount(NumericField::IncomeOther, 10.0);
        item.custom_service.physc.push(CustomServiceItem {
            name: "n".repeat(60),
            value: -2.0,
        });
        BudgetService::upsert(&mut state, "2024-07", item).unwrap();
        let stored = BudgetService::get(&state, "2024-07").unwrap();
        assert_eq!(stored.custom_service.physc[0].name.len(), 40);
        assert_eq!(stored.custom_service.physc[0].value, 0.0);
        assert_eq!(stored.income_other, 10.0);
    }
}
