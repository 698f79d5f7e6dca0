pub mod ingest;
pub mod json_backend;

use crate::config::Config;
use crate::core::state::FinanceState;
use crate::domain::{Budget, FinanceRecord};
use crate::errors::Result;

pub use ingest::{ingest_budget, ingest_record, ingest_records, Discarded, Ingested, RecordLoadReport};
pub use json_backend::JsonStorage;

/// Abstraction over persistence backends for records and budgets.
pub trait StorageBackend: Send + Sync {
    fn save_records(&self, records: &[FinanceRecord]) -> Result<()>;
    fn load_records(&self) -> Result<RecordLoadReport>;
    fn save_budget(&self, budget: &Budget) -> Result<()>;
    fn load_budget(&self) -> Result<Budget>;

    /// Persists the records and budget held by `state`.
    fn save_state(&self, state: &FinanceState) -> Result<()> {
        self.save_records(&state.records)?;
        self.save_budget(&state.budget)
    }

    /// Builds a fresh state from storage, grouped by the configured period
    /// type with its default range applied, alongside the stored records
    /// that had to be discarded.
    fn load_state(&self, config: &Config) -> Result<(FinanceState, Vec<Discarded>)> {
        let report = self.load_records()?;
        let mut state = FinanceState::new();
        state.period_type = config.default_period_type;
        state.records = report.records;
        state.budget = self.load_budget()?;
        state.ensure_default_period();
        Ok((state, report.discarded))
    }
}
