//! Secondary indexes over the primary store: by order id, by user, by security id.
//!
//! Each index holds non-owning [`Handle`]s into [`crate::store::Store`]. Bucket
//! removal is a linear scan (acceptable per spec: O(bucket) worst case), and a
//! bucket that becomes empty is erased rather than left as a dangling empty
//! entry, so `contains_key` alone is enough to tell absence from presence.

use std::collections::HashMap;

use crate::order::{OrderId, SecurityId};
use crate::store::Handle;

#[derive(Debug, Default)]
pub struct IndexSet {
    by_order_id: HashMap<OrderId, Handle>,
    by_user: HashMap<String, Vec<Handle>>,
    by_security: HashMap<SecurityId, Vec<Handle>>,
}

impl IndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_order_id(&self, order_id: &str) -> bool {
        self.by_order_id.contains_key(order_id)
    }

    pub fn handle_for_order_id(&self, order_id: &str) -> Option<Handle> {
        self.by_order_id.get(order_id).copied()
    }

    pub fn handles_for_user(&self, user: &str) -> Option<&[Handle]> {
        self.by_user.get(user).map(Vec::as_slice)
    }

    pub fn handles_for_security(&self, security_id: &str) -> Option<&[Handle]> {
        self.by_security.get(security_id).map(Vec::as_slice)
    }

    /// Registers `handle` under `order_id`/`user`/`security_id` together.
    pub fn insert(&mut self, order_id: OrderId, user: &str, security_id: &str, handle: Handle) {
        self.by_order_id.insert(order_id, handle);
        self.by_user.entry(user.to_string()).or_default().push(handle);
        self.by_security.entry(security_id.to_string()).or_default().push(handle);
    }

    /// Removes `handle` from every index. `order_id`/`user`/`security_id` must
    /// be the values the handle was inserted with.
    pub fn remove(&mut self, order_id: &str, user: &str, security_id: &str, handle: Handle) {
        self.by_order_id.remove(order_id);
        remove_from_bucket(&mut self.by_user, user, handle);
        remove_from_bucket(&mut self.by_security, security_id, handle);
    }

    /// Removes just the security-bucket membership of `handle`, leaving the
    /// order-id and user indexes untouched. Used by cancellation paths that
    /// already know they're draining the security bucket itself.
    pub fn remove_from_security_bucket(&mut self, security_id: &str, handle: Handle) {
        remove_from_bucket(&mut self.by_security, security_id, handle);
    }

    /// Removes just the user-bucket membership of `handle`.
    pub fn remove_from_user_bucket(&mut self, user: &str, handle: Handle) {
        remove_from_bucket(&mut self.by_user, user, handle);
    }

    pub fn remove_order_id(&mut self, order_id: &str) {
        self.by_order_id.remove(order_id);
    }

    pub fn take_user_bucket(&mut self, user: &str) -> Vec<Handle> {
        self.by_user.remove(user).unwrap_or_default()
    }

    pub fn take_security_bucket(&mut self, security_id: &str) -> Vec<Handle> {
        self.by_security.remove(security_id).unwrap_or_default()
    }

    pub fn restore_security_bucket(&mut self, security_id: &str, handles: Vec<Handle>) {
        if !handles.is_empty() {
            self.by_security.insert(security_id.to_string(), handles);
        }
    }
}

fn remove_from_bucket(buckets: &mut HashMap<String, Vec<Handle>>, key: &str, handle: Handle) {
    if let Some(bucket) = buckets.get_mut(key) {
        if let Some(pos) = bucket.iter().position(|h| *h == handle) {
            bucket.remove(pos);
        }
        if bucket.is_empty() {
            buckets.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_makes_handle_reachable_from_all_three_indexes() {
        let mut idx = IndexSet::new();
        idx.insert("1".to_string(), "David", "SecId1", 0);
        assert_eq!(idx.handle_for_order_id("1"), Some(0));
        assert_eq!(idx.handles_for_user("David"), Some(&[0][..]));
        assert_eq!(idx.handles_for_security("SecId1"), Some(&[0][..]));
    }

    #[test]
    fn remove_clears_all_three_indexes() {
        let mut idx = IndexSet::new();
        idx.insert("1".to_string(), "David", "SecId1", 0);
        idx.remove("1", "David", "SecId1", 0);
        assert!(idx.handle_for_order_id("1").is_none());
        assert!(idx.handles_for_user("David").is_none());
        assert!(idx.handles_for_security("SecId1").is_none());
    }

    #[test]
    fn bucket_keeps_siblings_after_one_removal() {
        let mut idx = IndexSet::new();
        idx.insert("1".to_string(), "David", "SecId1", 0);
        idx.insert("2".to_string(), "David", "SecId1", 1);
        idx.remove("1", "David", "SecId1", 0);
        assert_eq!(idx.handles_for_user("David"), Some(&[1][..]));
        assert_eq!(idx.handles_for_security("SecId1"), Some(&[1][..]));
    }

    #[test]
    fn duplicate_order_id_is_not_inserted_twice_by_caller_contract() {
        let mut idx = IndexSet::new();
        assert!(!idx.contains_order_id("1"));
        idx.insert("1".to_string(), "David", "SecId1", 0);
        assert!(idx.contains_order_id("1"));
    }
}
