//! The aggregation engine: totals, period keys, range filtering, grouping,
//! and portfolio analytics, plus the state store and services built on them.

pub mod analytics;
pub mod filter;
pub mod grouping;
pub mod period;
pub mod services;
pub mod state;
pub mod totals;
pub mod validation;

pub use analytics::{get_analytics, Analytics};
pub use filter::{filter_by_period, set_default_period, PeriodRange};
pub use grouping::{group_by_period, GroupedPeriod};
pub use period::{compare_quarter, quarter_key, PeriodType};
pub use state::{FinanceAction, FinanceState};
pub use totals::{calculate_totals, CalculatedTotals};
pub use validation::{admit_record, validate_custom_service, validate_record};
