#![doc(test(attr(deny(warnings))))]

//! Quote Core offers the record store, query, and backup primitives that
//! power an auto-body shop's service quote workflows and CLIs.

pub mod backup;
pub mod budget;
pub mod errors;
pub mod query;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Quote Core tracing initialized.");
    });
}
