//! Record and budget models shared by the engine, services, and storage.

pub mod budget;
pub mod common;
pub mod custom_service;
pub mod record;

pub use budget::{Budget, BudgetItem};
pub use common::{FinancialFigures, NumericField};
pub use custom_service::{
    CustomServiceCategories, CustomServiceItem, ServiceCategory, MAX_ITEMS_PER_CATEGORY,
    MAX_ITEM_NAME_LEN,
};
pub use record::{generate_record_id, FinanceRecord, RecordDraft};
