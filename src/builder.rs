//! Builder for configuring and constructing an [`OrderCache`].
//!
//! This module provides the [`OrderCacheBuilder`] struct, which allows
//! incremental configuration of an [`OrderCache`] before instantiating it.
//!
//! # Example
//! ```rust
//! use order_cache::OrderCacheBuilder;
//!
//! let cache = OrderCacheBuilder::new()
//!     .with_initial_capacity(4096)
//!     .build();
//! ```
use crate::{OrderCache, OrderCacheOptions};

/// A builder for constructing an [`OrderCache`] with custom options.
pub struct OrderCacheBuilder {
    options: OrderCacheOptions,
}

impl OrderCacheBuilder {
    /// Creates a new builder with default options.
    pub fn new() -> Self {
        Self { options: OrderCacheOptions::default() }
    }

    /// Sets all options in bulk via an [`OrderCacheOptions`] struct.
    pub fn with_options(mut self, options: OrderCacheOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the arena's pre-sized capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.options.initial_capacity = capacity;
        self
    }

    /// Builds and returns a fully configured [`OrderCache`] instance.
    pub fn build(self) -> OrderCache {
        OrderCache::new(self.options)
    }
}

impl Default for OrderCacheBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_with_defaults() {
        let cache = OrderCacheBuilder::new().build();
        assert!(cache.get_all_orders().is_empty());
    }

    #[test]
    fn builder_with_initial_capacity() {
        let cache = OrderCacheBuilder::new().with_initial_capacity(8).build();
        cache.add_order(crate::NewOrder::new("1", "SecId1", "Buy", 100, "U1", "A"));
        assert_eq!(cache.get_all_orders().len(), 1);
    }

    #[test]
    fn builder_with_options_struct() {
        let opts = OrderCacheOptions { initial_capacity: 16 };
        let cache = OrderCacheBuilder::new().with_options(opts).build();
        assert!(cache.get_all_orders().is_empty());
    }
}
