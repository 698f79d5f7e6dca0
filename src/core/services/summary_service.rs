use crate::core::analytics::{get_analytics, Analytics};
use crate::core::grouping::{group_by_period, GroupedPeriod};
use crate::core::state::FinanceState;
use crate::core::totals::{calculate_totals, CalculatedTotals};

pub struct SummaryService;

impl SummaryService {
    /// Portfolio snapshot over the records in the selected range.
    pub fn analytics(state: &FinanceState) -> Analytics {
        get_analytics(state.filtered_records())
    }

    /// Buckets of the records in the selected range, in first-seen order.
    pub fn grouped(state: &FinanceState) -> Vec<GroupedPeriod> {
        group_by_period(state.filtered_records(), state.period_type)
    }

    /// Totals of the planned figures for one budget month.
    pub fn budget_totals(state: &FinanceState, period: &str) -> Option<CalculatedTotals> {
        state.budget.get(period).map(calculate_totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::PeriodRange;
    use crate::core::period::PeriodType;
    use crate::core::state::FinanceAction;
    use crate::domain::{BudgetItem, FinanceRecord, NumericField};

    fn state() -> FinanceState {
        let records = vec![
            FinanceRecord::with_id("a", "2023-12").with_amount(NumericField::IncomeOther, 100.0),
            FinanceRecord::with_id("b", "2024-01").with_amount(NumericField::IncomeOther, 200.0),
            FinanceRecord::with_id("c", "2024-02").with_amount(NumericField::IncomeOther, 300.0),
        ];
        FinanceState::new()
            .apply(FinanceAction::SetRecords(records))
            .apply(FinanceAction::SetPeriodType(PeriodType::Month))
            .apply(FinanceAction::SetPeriodRange(PeriodRange::new("2024-01", "2024-02")))
    }

    #[test]
    fn analytics_are_scoped_to_the_range() {
        let analytics = SummaryService::analytics(&state());
        assert_eq!(analytics.total_income, 500.0);
        assert_eq!(analytics.highest_net_date, "2024-02");
    }

    #[test]
    fn grouped_uses_selected_period_type() {
        let state = state().apply(FinanceAction::SetPeriodType(PeriodType::Year));
        let state = state.apply(FinanceAction::SetPeriodRange(PeriodRange::new("2023", "2024")));
        let groups = SummaryService::grouped(&state);
        let periods: Vec<&str> = groups.iter().map(|g| g.period.as_str()).collect();
        assert_eq!(periods, vec!["2023", "2024"]);
        assert_eq!(groups[1].income, 500.0);
    }

    #[test]
    fn unset_range_yields_empty_summaries() {
        let state = state().apply(FinanceAction::SetPeriodRange(PeriodRange::default()));
        assert_eq!(SummaryService::analytics(&state), Analytics::default());
        assert!(SummaryService::grouped(&state).is_empty());
    }

    #[test]
    fn budget_totals_read_planned_figures() {
        let state = state().apply(FinanceAction::UpdateBudgetItem {
            key: "2024-03".into(),
            item: BudgetItem::default()
                .with_amount(NumericField::IncomeOther, 1000.0)
                .with_amount(NumericField::ExpenseCogs, 250.0),
        });
        let totals = SummaryService::budget_totals(&state, "2024-03").unwrap();
        assert_eq!(totals.gross_margin, 75.0);
        assert!(SummaryService::budget_totals(&state, "2024-04").is_none());
    }
}
