//! Gate that rejects malformed orders before any index mutation.
//!
//! Rejection is a silent no-op at the cache level: the caller gets no `Err`
//! back (see [`crate::error`]), only a `tracing` diagnostic.

use crate::error::ErrorType;
use crate::order::{NewOrder, Side};

/// Validates `order` and, on success, returns its canonicalized [`Side`].
///
/// Rejects if `order_id`, `security_id`, or `user` is empty, if `qty` is
/// zero, or if `side` (after case folding) is neither `"buy"` nor `"sell"`.
/// `company` is never validated; it may be empty.
pub fn validate(order: &NewOrder) -> Result<Side, ErrorType> {
    if order.order_id.is_empty()
        || order.security_id.is_empty()
        || order.user.is_empty()
        || order.qty == 0
    {
        return Err(ErrorType::ValidationReject);
    }
    Side::parse(&order.side).ok_or(ErrorType::ValidationReject)
}
