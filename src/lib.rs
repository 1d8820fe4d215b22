//! An in-memory, multi-indexed order cache with cross-company matching-size
//! queries, built for shared-memory, multi-threaded ingestion.
//!
//! - [`OrderCache`] is the public entry point: add/cancel orders, read a
//!   snapshot, and compute the matching size for a security.
//! - [`OrderCacheBuilder`]/[`OrderCacheOptions`] configure a cache before use.
//! - [`ingest`] and [`batch`] provide a JSON feeder and a thread-fan-out
//!   ingestion helper for bulk loading.
//! - Rejections never propagate as `Err`: see [`error`] for the diagnostic
//!   channel used instead.

mod batch;
mod builder;
mod cache;
mod error;
mod index;
mod ingest;
mod matching;
mod order;
mod store;
mod validate;

pub use batch::ingest_parallel;
pub use builder::OrderCacheBuilder;
pub use cache::{OrderCache, OrderCacheOptions};
pub use error::{CacheDiagnostic, ErrorType};
pub use ingest::{parse_records, RawOrderRecord};
pub use order::{NewOrder, Order, OrderId, SecurityId, Side};
