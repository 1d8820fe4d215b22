//! Parallel fan-out ingestion: splits a batch of records across OS threads
//! sharing one [`OrderCache`].
//!
//! This mirrors the "shared-memory parallelism, multiple OS-level threads"
//! model: no async runtime, just [`std::thread::scope`] and the cache's own
//! internal locking to make concurrent `add_order` calls safe.

use std::sync::Arc;

use tracing::warn;

use crate::cache::OrderCache;
use crate::ingest::RawOrderRecord;

/// Converts and inserts `records` into `cache`, split evenly across
/// `workers` OS threads. A record that fails to parse (non-numeric
/// `Amount`) is skipped with a warning; it never panics the worker.
pub fn ingest_parallel(cache: &Arc<OrderCache>, records: Vec<RawOrderRecord>, workers: usize) {
    let workers = workers.max(1);
    if records.is_empty() {
        return;
    }

    let chunk_size = records.len().div_ceil(workers);
    let chunks: Vec<&[RawOrderRecord]> = records.chunks(chunk_size.max(1)).collect();

    std::thread::scope(|scope| {
        for chunk in chunks {
            let cache = Arc::clone(cache);
            scope.spawn(move || {
                for record in chunk {
                    match record.clone().into_new_order() {
                        Ok(order) => cache.add_order(order),
                        Err(_) => warn!(ord_id = %record.ord_id, "skipping record with unparsable amount"),
                    }
                }
            });
        }
    });
}
