#![doc(test(attr(deny(warnings))))]

//! Cashflow Core offers the budget-allocation and progress-derivation
//! primitives behind a personal finance tracker: accounts, budgets with
//! per-account allocations, entries recorded against a budget window, and
//! the per-account usage metrics derived from them.

pub mod config;
pub mod domain;
pub mod errors;
pub mod metrics;
pub mod render;
pub mod services;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashflow Core tracing initialized.");
    });
}
