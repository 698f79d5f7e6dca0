#![doc(test(attr(deny(warnings))))]

//! Finance Core turns monthly financial records into profitability, margin,
//! and cash-flow figures, bucketed and filtered by month, quarter, or year.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
