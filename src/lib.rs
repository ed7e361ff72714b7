#![doc(test(attr(deny(warnings))))]

//! Trip Budget Core offers the in-memory trip ledger, expense analytics, and
//! export primitives that power vacation-budget dashboards.

pub mod analytics;
pub mod demo;
pub mod errors;
pub mod export;
pub mod store;
pub mod trip;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Trip Budget Core tracing initialized.");
    });
}
