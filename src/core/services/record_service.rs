use crate::core::state::{FinanceAction, FinanceState};
use crate::core::validation::admit_record;
use crate::domain::RecordDraft;
use crate::errors::FinanceError;

use super::{ServiceError, ServiceResult};

pub struct RecordService;

impl RecordService {
    /// Validates a draft and appends it, returning the record id.
    pub fn add(state: &mut FinanceState, draft: RecordDraft) -> ServiceResult<String> {
        let record = admit_record(draft)?;
        if state.record(&record.id).is_some() {
            return Err(ServiceError::Invalid(format!(
                "Record `{}` already exists",
                record.id
            )));
        }
        let id = record.id.clone();
        tracing::info!(id = %id, date = %record.date, "record added");
        state.dispatch(FinanceAction::AddRecord(record));
        Ok(id)
    }

    /// Validates a draft and replaces the record stored under `id`.
    pub fn edit(state: &mut FinanceState, id: &str, mut draft: RecordDraft) -> ServiceResult<()> {
        if state.record(id).is_none() {
            return Err(FinanceError::RecordNotFound(id.to_string()).into());
        }
        draft.id = Some(id.to_string());
        let record = admit_record(draft)?;
        tracing::info!(id = %id, date = %record.date, "record updated");
        state.dispatch(FinanceAction::UpdateRecord(record));
        if state.editing_record.as_deref() == Some(id) {
            state.dispatch(FinanceAction::SetEditingRecord(None));
        }
        Ok(())
    }

    pub fn remove(state: &mut FinanceState, id: &str) -> ServiceResult<()> {
        if state.record(id).is_none() {
            return Err(FinanceError::RecordNotFound(id.to_string()).into());
        }
        tracing::info!(id = %id, "record removed");
        state.dispatch(FinanceAction::DeleteRecord(id.to_string()));
        Ok(())
    }
}
