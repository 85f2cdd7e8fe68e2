#![doc(test(attr(deny(warnings))))]

//! Dapur Core records a small retail shop's inventory movements, sales,
//! and the double-entry journal postings they imply, over a whole-file
//! JSON record store, and reports profitability.

pub mod auth;
pub mod cli;
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
        tracing::info!("Dapur Core tracing initialized.");
    });
}
