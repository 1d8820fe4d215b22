//! The order record held by the cache, and the raw input shape it is built from.
//!
//! Callers never construct an [`Order`] directly: they submit a [`NewOrder`] with
//! a free-form `side` string, and [`crate::validate::validate`] canonicalizes it
//! into a [`Side`] before the record is stored. Once stored, an order is never
//! mutated; it is only ever removed.

use serde::Deserialize;
use std::fmt;

pub type OrderId = String;
pub type SecurityId = String;
pub type Quantity = u32;

/// Buy or sell, canonicalized from a case-insensitive input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Parses `"buy"`/`"sell"` case-insensitively. Anything else is rejected.
    pub fn parse(raw: &str) -> Option<Side> {
        match raw.to_ascii_lowercase().as_str() {
            "buy" => Some(Side::Buy),
            "sell" => Some(Side::Sell),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
        }
    }
}

/// The six fields a caller submits to [`crate::OrderCache::add_order`].
///
/// `side` is carried as a raw string here because validation (including side
/// canonicalization) has not happened yet; see [`crate::validate::validate`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    pub order_id: String,
    pub security_id: String,
    pub side: String,
    pub qty: Quantity,
    pub user: String,
    pub company: String,
}

impl NewOrder {
    pub fn new(
        order_id: impl Into<String>,
        security_id: impl Into<String>,
        side: impl Into<String>,
        qty: Quantity,
        user: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            security_id: security_id.into(),
            side: side.into(),
            qty,
            user: user.into(),
            company: company.into(),
        }
    }
}

/// An immutable, validated order living in the cache.
///
/// Constructed only by [`crate::OrderCache::add_order`] after [`NewOrder`]
/// passes validation; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_id: OrderId,
    pub security_id: SecurityId,
    pub side: Side,
    pub qty: Quantity,
    pub user: String,
    pub company: String,
}

impl Order {
    pub(crate) fn from_validated(input: NewOrder, side: Side) -> Self {
        Self {
            order_id: input.order_id,
            security_id: input.security_id,
            side,
            qty: input.qty,
            user: input.user,
            company: input.company,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_parse_is_case_insensitive() {
        assert_eq!(Side::parse("buy"), Some(Side::Buy));
        assert_eq!(Side::parse("BUY"), Some(Side::Buy));
        assert_eq!(Side::parse("Buy"), Some(Side::Buy));
        assert_eq!(Side::parse("Sell"), Some(Side::Sell));
        assert_eq!(Side::parse("SELL"), Some(Side::Sell));
    }

    #[test]
    fn side_parse_rejects_unknown_strings() {
        assert_eq!(Side::parse("hold"), None);
        assert_eq!(Side::parse(""), None);
    }
}
