//! The matching-size algorithm: cross-company quantity crossing for one security.
//!
//! Grounded line-for-line on the reference `accumulate_orders`/`match_orders`
//! walk: collapse each side by company via a reverse traversal (last-occurrence
//! first, emitted in first-encounter order), sort each side by quantity
//! descending, then sweep buys against sells skipping same-company pairs.

use crate::order::{Order, Side};

/// Quantity aggregated for one company, on one side of the book.
type CompanyQty = (u64, String);

/// Computes the matching size for the orders of a single security.
///
/// `orders` must already be filtered to one `security_id`; order within it is
/// irrelevant except that the company-aggregation step is defined in terms of
/// traversal order (see module docs). Returns 0 if either side is empty.
pub fn matching_size(orders: &[Order]) -> u64 {
    let mut buys: Vec<CompanyQty> = Vec::new();
    let mut sells: Vec<CompanyQty> = Vec::new();

    for order in orders {
        match order.side {
            Side::Buy => buys.push((order.qty as u64, order.company.clone())),
            Side::Sell => sells.push((order.qty as u64, order.company.clone())),
        }
    }

    if buys.is_empty() || sells.is_empty() {
        return 0;
    }

    let mut buys = aggregate_by_company(buys);
    let mut sells = aggregate_by_company(sells);

    buys.sort_by(|a, b| b.0.cmp(&a.0));
    sells.sort_by(|a, b| b.0.cmp(&a.0));

    cross(&mut buys, &mut sells)
}

/// Collapses same-company entries into one, walking `entries` in reverse and
/// emitting each company the first time it's seen in that reverse walk. The
/// visible order of the result is therefore "last occurrence first" relative
/// to the input.
fn aggregate_by_company(mut entries: Vec<CompanyQty>) -> Vec<CompanyQty> {
    let mut collapsed: Vec<CompanyQty> = Vec::with_capacity(entries.len());
    while let Some((qty, company)) = entries.pop() {
        match collapsed.iter_mut().find(|(_, c)| *c == company) {
            Some(existing) => existing.0 += qty,
            None => collapsed.push((qty, company)),
        }
    }
    collapsed
}

/// Sweeps `buys` against `sells`, skipping same-company pairs, accumulating
/// the total quantity crossed. Both slices are consumed in place.
fn cross(buys: &mut [CompanyQty], sells: &mut [CompanyQty]) -> u64 {
    let mut accumulator: u64 = 0;

    for (buy_qty, buy_company) in buys.iter_mut() {
        if *buy_qty == 0 {
            continue;
        }
        for (sell_qty, sell_company) in sells.iter_mut() {
            if *buy_qty == 0 {
                break;
            }
            if *sell_qty == 0 || sell_company == buy_company {
                continue;
            }
            let matched = (*buy_qty).min(*sell_qty);
            accumulator += matched;
            *buy_qty -= matched;
            *sell_qty -= matched;
        }
    }

    accumulator
}
