//! Timestamp-derived identifier generation.
//!
//! Users and orders are identified by their creation time in milliseconds.
//! The generator is strictly monotonic within the process, so two records
//! created in the same millisecond still receive distinct identifiers.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Next timestamp-derived identifier, in milliseconds since the Unix epoch.
///
/// Strictly increasing across calls within one process; tracks wall-clock
/// time whenever the clock is ahead of the last issued value.
pub fn next_id_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(prev + 1);
        match LAST_ID.compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(actual) => prev = actual,
        }
    }
}
