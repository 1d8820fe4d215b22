//! The `OrderCache`: mutation API (C5) wrapped in a single reader/writer lock (C7).
//!
//! A single [`std::sync::RwLock`] protects the store and every index as one
//! unit. Writers (`add_order`, `cancel_*`) take the exclusive lock for their
//! full duration; readers (`get_all_orders`, `get_matching_size_for_security`)
//! take it too, because the matching computation builds working copies of the
//! bucket while still inside the critical section (see spec notes on lock
//! granularity). `OrderCache` is `Send + Sync` and is meant to be shared across
//! threads behind an [`std::sync::Arc`].

use std::sync::RwLock;

use tracing::warn;

use crate::error::{CacheDiagnostic, ErrorType};
use crate::index::IndexSet;
use crate::matching::matching_size;
use crate::order::{NewOrder, Order};
use crate::store::Store;
use crate::validate::validate;

#[derive(Debug, Default)]
struct CacheInner {
    store: Store,
    index: IndexSet,
}

/// Configuration for a new [`OrderCache`].
///
/// # Fields
/// - `initial_capacity`: pre-sized arena capacity, avoids early reallocation
///   for ingest workloads with a known approximate order count.
#[derive(Debug, Clone, Copy)]
pub struct OrderCacheOptions {
    pub initial_capacity: usize,
}

impl Default for OrderCacheOptions {
    fn default() -> Self {
        Self { initial_capacity: 1024 }
    }
}

/// An in-memory, multi-indexed cache of live orders for a trading application.
///
/// See the crate docs for the full contract. In short: `add_order`/`cancel_*`
/// never return an error to the caller — rejected or no-op calls emit a
/// `tracing` diagnostic instead (see [`crate::error`]) and leave state
/// unchanged.
#[derive(Debug)]
pub struct OrderCache {
    inner: RwLock<CacheInner>,
}

impl OrderCache {
    pub fn new(options: OrderCacheOptions) -> Self {
        Self {
            inner: RwLock::new(CacheInner {
                store: Store::with_capacity(options.initial_capacity),
                index: IndexSet::new(),
            }),
        }
    }

    /// Validates and inserts `order`. No-op (with a diagnostic) if validation
    /// fails or `order.order_id` already names a live order.
    pub fn add_order(&self, order: NewOrder) {
        let side = match validate(&order) {
            Ok(side) => side,
            Err(reason) => {
                emit(reason, &format!("order_id={}", order.order_id));
                return;
            }
        };

        let mut inner = self.inner.write().expect("order cache lock poisoned");

        if inner.index.contains_order_id(&order.order_id) {
            emit(ErrorType::DuplicateId, &format!("order_id={}", order.order_id));
            return;
        }

        let order_id = order.order_id.clone();
        let user = order.user.clone();
        let security_id = order.security_id.clone();
        let record = Order::from_validated(order, side);

        let handle = inner.store.insert(record);
        inner.index.insert(order_id, &user, &security_id, handle);
    }

    /// Removes the order with this id, if any.
    pub fn cancel_order(&self, order_id: &str) {
        let mut inner = self.inner.write().expect("order cache lock poisoned");

        let Some(handle) = inner.index.handle_for_order_id(order_id) else {
            emit(ErrorType::UnknownOrderId, &format!("order_id={order_id}"));
            return;
        };

        let Some(order) = inner.store.get(handle) else {
            emit(ErrorType::UnknownOrderId, &format!("order_id={order_id}"));
            return;
        };
        let user = order.user.clone();
        let security_id = order.security_id.clone();

        inner.index.remove(order_id, &user, &security_id, handle);
        inner.store.remove(handle);
    }

    /// Removes every live order belonging to `user`.
    pub fn cancel_orders_for_user(&self, user: &str) {
        let mut inner = self.inner.write().expect("order cache lock poisoned");

        if inner.index.handles_for_user(user).is_none() {
            emit(ErrorType::UnknownUser, &format!("user={user}"));
            return;
        }

        let handles = inner.index.take_user_bucket(user);
        for handle in handles {
            if let Some(order) = inner.store.get(handle) {
                let security_id = order.security_id.clone();
                let order_id = order.order_id.clone();
                inner.index.remove_from_security_bucket(&security_id, handle);
                inner.index.remove_order_id(&order_id);
            }
            inner.store.remove(handle);
        }
    }

    /// Removes every live order for `security_id` whose `qty >= min_qty`.
    pub fn cancel_orders_for_sec_id_with_minimum_qty(&self, security_id: &str, min_qty: u32) {
        let mut inner = self.inner.write().expect("order cache lock poisoned");

        if inner.index.handles_for_security(security_id).is_none() {
            emit(ErrorType::UnknownSecurity, &format!("security_id={security_id}"));
            return;
        }

        let handles = inner.index.take_security_bucket(security_id);
        let mut retained = Vec::with_capacity(handles.len());

        for handle in handles {
            let qualifies = inner.store.get(handle).map(|o| o.qty >= min_qty).unwrap_or(false);
            if !qualifies {
                retained.push(handle);
                continue;
            }
            if let Some(order) = inner.store.get(handle) {
                let user = order.user.clone();
                let order_id = order.order_id.clone();
                inner.index.remove_order_id(&order_id);
                inner.index.remove_from_user_bucket(&user, handle);
            }
            inner.store.remove(handle);
        }

        inner.index.restore_security_bucket(security_id, retained);
    }

    /// A snapshot copy of every live order, in insertion order.
    pub fn get_all_orders(&self) -> Vec<Order> {
        let inner = self.inner.write().expect("order cache lock poisoned");
        inner.store.snapshot()
    }

    /// The total quantity that could be crossed between buy- and sell-side
    /// orders of `security_id`, under the same-company exclusion rule. 0 for
    /// an unknown security, an empty bucket, or an all-one-side bucket.
    pub fn get_matching_size_for_security(&self, security_id: &str) -> u64 {
        let inner = self.inner.write().expect("order cache lock poisoned");

        let Some(handles) = inner.index.handles_for_security(security_id) else {
            emit(ErrorType::EmptySides, &format!("security_id={security_id}"));
            return 0;
        };

        let orders: Vec<Order> = handles.iter().filter_map(|h| inner.store.get(*h).cloned()).collect();
        drop(inner);

        matching_size(&orders)
    }
}

impl Default for OrderCache {
    fn default() -> Self {
        Self::new(OrderCacheOptions::default())
    }
}

fn emit(reason: ErrorType, context: &str) {
    let diag = CacheDiagnostic::from_type(reason);
    warn!(code = diag.code, message = %diag.message, %context, "order cache rejected operation");
}
