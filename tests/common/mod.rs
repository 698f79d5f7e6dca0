#![allow(dead_code)]

use std::sync::Mutex;

use finance_core::{
    config::ConfigManager,
    domain::{CustomServiceCategories, CustomServiceItem, FinanceRecord, NumericField, ServiceCategory},
    storage::JsonStorage,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated store and config manager backed by a unique directory.
pub fn setup_test_env() -> (JsonStorage, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = JsonStorage::new(Some(base.join("data"))).expect("create json storage backend");
    let config_manager =
        ConfigManager::with_base_dir(base).expect("create config manager for temp dir");

    (storage, config_manager)
}

/// A record with service revenue, cost of sales, and one operating expense.
pub fn record(id: &str, date: &str, services: f64, cogs: f64, rent: f64) -> FinanceRecord {
    let custom = CustomServiceCategories::default()
        .with_item(ServiceCategory::Ot, CustomServiceItem::new("therapist", services));
    FinanceRecord::with_id(id, date)
        .with_custom_service(custom)
        .with_amount(NumericField::ExpenseCogs, cogs)
        .with_amount(NumericField::ExpenseRent, rent)
}

/// Twelve months of 2024 with growing revenue.
pub fn year_of_records() -> Vec<FinanceRecord> {
    (1..=12)
        .map(|month| {
            record(
                &format!("m{month}"),
                &format!("2024-{month:02}"),
                1000.0 * month as f64,
                200.0,
                300.0,
            )
        })
        .collect()
}
