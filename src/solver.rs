//! Turns a deal library plus an order into the maximum-savings set of compatible discounts.

use indexmap::IndexMap;

use crate::cover::CoverEnumerator;
use crate::discount::{Deal, Discount, OrderItem};
use crate::error::MalformedDiscountError;
use crate::matrix::SparseMatrix;
use std::collections::{BTreeSet, HashSet};

/// Applies deals to an order, builds the candidate matrix, and picks the best covering.
pub struct DiscountSolver;

impl DiscountSolver {
    /// Invokes `deal`'s rule against `order` and validates the discounts it produces.
    pub fn apply_deal(deal: &Deal, order: &[OrderItem]) -> Result<Vec<Discount>, MalformedDiscountError> {
        let discounts = deal.rule().apply(order);
        let known_items: HashSet<u64> = order.iter().map(|item| item.item_id).collect();

        for discount in &discounts {
            if discount.savings < 0 {
                return Err(MalformedDiscountError::NegativeSavings {
                    deal_name: deal.name().to_string(),
                    discount_name: discount.name.clone(),
                    savings: discount.savings,
                });
            }
            if let Some(&item_id) = discount.items.iter().find(|id| !known_items.contains(id)) {
                return Err(MalformedDiscountError::UnknownItem {
                    deal_name: deal.name().to_string(),
                    discount_name: discount.name.clone(),
                    item_id,
                });
            }
        }

        Ok(discounts)
    }

    /// Applies every deal to the order and deduplicates the resulting discounts by item
    /// set, keeping the larger-savings discount on a clash and the incumbent on a tie.
    ///
    /// Insertion order is preserved (earlier deals, earlier rule output) so that the
    /// candidate rows handed to the matrix are deterministic.
    pub fn collect_discounts(
        deals: &[Deal],
        order: &[OrderItem],
    ) -> Result<IndexMap<BTreeSet<u64>, Discount>, MalformedDiscountError> {
        let mut candidates: IndexMap<BTreeSet<u64>, Discount> = IndexMap::new();

        for deal in deals {
            for discount in Self::apply_deal(deal, order)? {
                match candidates.get(&discount.items) {
                    Some(incumbent) if incumbent.savings >= discount.savings => {}
                    _ => {
                        candidates.insert(discount.items.clone(), discount);
                    }
                }
            }
        }

        Ok(candidates)
    }

    /// Builds the candidate discounts, enumerates every partial covering of the order's
    /// items, and returns the covering with the greatest total savings. Ties are broken
    /// by the natural enumeration order of [`CoverEnumerator::covering_rows`] (first
    /// covering encountered wins).
    pub fn solve(deals: &[Deal], order: &[OrderItem]) -> Result<Vec<Discount>, MalformedDiscountError> {
        let candidates = Self::collect_discounts(deals, order)?;
        let rows: Vec<Discount> = candidates.into_iter().map(|(_, discount)| discount).collect();
        let cols: Vec<OrderItem> = order.to_vec();

        let mut matrix = SparseMatrix::new(rows, cols, |discount: &Discount, item: &OrderItem| {
            discount.items.contains(&item.item_id)
        });

        let coverings = CoverEnumerator::covering_rows(&mut matrix, None)
            .expect("the default start node always belongs to its own matrix");

        let mut best = Vec::new();
        let mut best_savings = 0i64;
        for (i, covering) in coverings.into_iter().enumerate() {
            let savings: i64 = covering.iter().map(|d| d.savings).sum();
            if i == 0 || savings > best_savings {
                best_savings = savings;
                best = covering;
            }
        }

        Ok(best)
    }
}
