use std::path::{Path, PathBuf};

use crate::{
    domain::{Budget, FinanceRecord},
    errors::{FinanceError, Result},
    utils::{
        paths::{app_data_dir, budget_file_in, data_dir_in, ensure_dir, records_file_in},
        persistence::{read_json_value, write_json_atomic},
    },
};

use super::{
    ingest::{ingest_budget, ingest_records},
    RecordLoadReport, StorageBackend,
};

/// File-backed store keeping records and budget as two JSON documents.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    records_file: PathBuf,
    budget_file: PathBuf,
}

impl JsonStorage {
    /// Opens (creating if needed) a store rooted at `root`, or at the default
    /// data directory when `root` is `None`.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(|| data_dir_in(&app_data_dir()));
        ensure_dir(&root)?;
        Ok(Self {
            records_file: records_file_in(&root),
            budget_file: budget_file_in(&root),
        })
    }

    pub fn records_path(&self) -> &Path {
        &self.records_file
    }

    pub fn budget_path(&self) -> &Path {
        &self.budget_file
    }
}

impl StorageBackend for JsonStorage {
    fn save_records(&self, records: &[FinanceRecord]) -> Result<()> {
        write_json_atomic(&self.records_file, records)?;
        tracing::info!(count = records.len(), path = %self.records_file.display(), "records saved");
        Ok(())
    }

    fn load_records(&self) -> Result<RecordLoadReport> {
        let report = match read_document(&self.records_file)? {
            Some(raw) => ingest_records(&raw),
            None => RecordLoadReport::default(),
        };
        tracing::info!(
            loaded = report.records.len(),
            discarded = report.discarded.len(),
            "records loaded"
        );
        Ok(report)
    }

    fn save_budget(&self, budget: &Budget) -> Result<()> {
        write_json_atomic(&self.budget_file, budget)?;
        tracing::info!(periods = budget.len(), path = %self.budget_file.display(), "budget saved");
        Ok(())
    }

    fn load_budget(&self) -> Result<Budget> {
        let budget = match read_document(&self.budget_file)? {
            Some(raw) => ingest_budget(&raw),
            None => Budget::new(),
        };
        tracing::info!(periods = budget.len(), "budget loaded");
        Ok(budget)
    }
}

/// Unparseable documents are treated like missing ones so a corrupt file
/// never blocks startup; IO failures still propagate.
fn read_document(path: &Path) -> Result<Option<serde_json::Value>> {
    match read_json_value(path) {
        Ok(value) => Ok(value),
        Err(FinanceError::Serde(err)) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable document");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
