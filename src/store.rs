//! The primary store: an ordered sequence of live orders with stable handles.
//!
//! A [`Handle`] is a plain arena index. Slots are never recycled, so a handle
//! stays valid for the lifetime of the cache unless the record it names is
//! removed; iterating slots in index order yields orders in insertion order,
//! which is what [`crate::OrderCache::get_all_orders`] relies on.

use crate::order::Order;

pub type Handle = usize;

#[derive(Debug, Default)]
pub struct Store {
    slots: Vec<Option<Order>>,
}

impl Store {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity) }
    }

    /// Appends `order`, returning the handle it can be looked up by.
    pub fn insert(&mut self, order: Order) -> Handle {
        let handle = self.slots.len();
        self.slots.push(Some(order));
        handle
    }

    /// Removes and returns the order at `handle`, if still live.
    pub fn remove(&mut self, handle: Handle) -> Option<Order> {
        self.slots.get_mut(handle).and_then(Option::take)
    }

    pub fn get(&self, handle: Handle) -> Option<&Order> {
        self.slots.get(handle).and_then(Option::as_ref)
    }

    /// All live orders, in insertion order. Does not alias the store.
    pub fn snapshot(&self) -> Vec<Order> {
        self.slots.iter().flatten().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Side;

    fn order(id: &str) -> Order {
        Order {
            order_id: id.to_string(),
            security_id: "SecId1".to_string(),
            side: Side::Buy,
            qty: 100,
            user: "User1".to_string(),
            company: "Company1".to_string(),
        }
    }

    #[test]
    fn insert_then_get_round_trips() {
        let mut store = Store::new();
        let h = store.insert(order("1"));
        assert_eq!(store.get(h).unwrap().order_id, "1");
    }

    #[test]
    fn removed_handle_is_gone_but_others_survive() {
        let mut store = Store::new();
        let h1 = store.insert(order("1"));
        let h2 = store.insert(order("2"));
        store.remove(h1);
        assert!(store.get(h1).is_none());
        assert_eq!(store.get(h2).unwrap().order_id, "2");
    }

    #[test]
    fn snapshot_preserves_insertion_order_and_skips_removed() {
        let mut store = Store::new();
        let h1 = store.insert(order("1"));
        store.insert(order("2"));
        store.insert(order("3"));
        store.remove(h1);
        let ids: Vec<_> = store.snapshot().into_iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn double_remove_is_a_no_op() {
        let mut store = Store::new();
        let h = store.insert(order("1"));
        assert!(store.remove(h).is_some());
        assert!(store.remove(h).is_none());
    }
}
