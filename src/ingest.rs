//! JSON ingest feeder: the wire shape orders arrive in from a file or feed.
//!
//! Field names (`OrdId`, `SecId`, `TransactionType`, `Amount`, `User`,
//! `Company`) and the fact that `Amount` travels as a numeric *string* are
//! both taken directly from the reference ingest tool; a JSON array of these
//! records is the expected top-level shape of an input file.

use serde::Deserialize;

use crate::error::ErrorType;
use crate::order::NewOrder;

/// One record as it appears in an input JSON array, before field renaming or
/// numeric parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOrderRecord {
    #[serde(rename = "OrdId")]
    pub ord_id: String,
    #[serde(rename = "SecId")]
    pub sec_id: String,
    #[serde(rename = "TransactionType")]
    pub transaction_type: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Company")]
    pub company: String,
}

impl RawOrderRecord {
    /// Parses `amount` and renames fields into a [`NewOrder`]. The quantity
    /// parse failing is itself a validation rejection, not a panic: it's
    /// surfaced the same way [`crate::validate::validate`] surfaces one.
    pub fn into_new_order(self) -> Result<NewOrder, ErrorType> {
        let qty: u32 = self.amount.trim().parse().map_err(|_| ErrorType::ValidationReject)?;
        Ok(NewOrder::new(self.ord_id, self.sec_id, self.transaction_type, qty, self.user, self.company))
    }
}

/// Parses a JSON array of [`RawOrderRecord`]s from `input`.
pub fn parse_records(input: &str) -> serde_json::Result<Vec<RawOrderRecord>> {
    serde_json::from_str(input)
}
