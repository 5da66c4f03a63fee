//! The data model the [`solver`](crate::solver) module operates on: order items, the
//! discounts a deal rule can produce from them, and the deals themselves.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A single purchasable line item in an order.
///
/// `item_id` is expected to be unique within the order it appears in; nothing here
/// enforces that, it's a precondition on the caller assembling the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub item_id: u64,
    pub name: String,
    pub price: i64,
}

impl OrderItem {
    pub fn new(item_id: u64, name: impl Into<String>, price: i64) -> OrderItem {
        OrderItem { item_id, name: name.into(), price }
    }
}

/// A discount produced by applying a [`Deal`] to an order.
///
/// `items` is the discount's dedup key: two discounts covering the same item set occupy
/// the same candidate slot, and only the larger-`savings` one survives (see
/// [`DiscountSolver::collect_discounts`](crate::solver::DiscountSolver::collect_discounts)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discount {
    pub name: String,
    pub items: BTreeSet<u64>,
    pub savings: i64,
}

impl Discount {
    pub fn new(name: impl Into<String>, items: impl IntoIterator<Item = u64>, savings: i64) -> Discount {
        Discount {
            name: name.into(),
            items: items.into_iter().collect(),
            savings,
        }
    }
}

/// A rule that, given an ordered order, produces zero or more candidate discounts.
///
/// Implementations must be pure: the same order must always yield the same discounts.
/// Every discount's `items` must be a subset of the order's `item_id`s, and `savings`
/// must be non-negative; violations are reported as
/// [`MalformedDiscountError`](crate::error::MalformedDiscountError) when the deal is applied.
pub trait DealRule {
    fn apply(&self, order: &[OrderItem]) -> Vec<Discount>;
}

impl<F> DealRule for F
where
    F: Fn(&[OrderItem]) -> Vec<Discount>,
{
    fn apply(&self, order: &[OrderItem]) -> Vec<Discount> {
        self(order)
    }
}

/// A named, stable-id-bearing discount rule.
pub struct Deal {
    id: u64,
    name: String,
    rule: Box<dyn DealRule>,
}

impl Deal {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> &dyn DealRule {
        self.rule.as_ref()
    }
}

impl fmt::Debug for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deal").field("id", &self.id).field("name", &self.name).finish_non_exhaustive()
    }
}

/// Mints [`Deal`]s with a process-wide-looking but actually factory-scoped monotonic id
/// counter, starting at 1. Kept as a value rather than a global so tests (and independent
/// solvers) can each start fresh.
pub struct DealFactory {
    next_id: AtomicU64,
}

impl Default for DealFactory {
    fn default() -> DealFactory {
        DealFactory { next_id: AtomicU64::new(1) }
    }
}

impl DealFactory {
    pub fn new() -> DealFactory {
        DealFactory::default()
    }

    /// Creates a new deal, assigning it the next id in sequence.
    pub fn create(&self, name: impl Into<String>, rule: impl DealRule + 'static) -> Deal {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Deal { id, name: name.into(), rule: Box::new(rule) }
    }

    /// Resets the id counter back to 1. Intended for test isolation.
    pub fn reset(&self) {
        self.next_id.store(1, Ordering::SeqCst);
    }
}
